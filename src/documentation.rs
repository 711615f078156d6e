//! Doc comments for generated constructors.

use crate::spec;
use std::fmt::{self, Write};

/// Writes a `/** ... */` block for Java and JS.
///
/// Parameter names go through `param_name` so they match the emitted
/// parameter list. Nothing is written when neither the constructor nor any
/// parameter is documented.
pub fn write_block_doc<F>(out: &mut dyn Write, ctor: &spec::Constructor<'_>, param_name: F) -> fmt::Result
where
    F: Fn(&str) -> String,
{
    let has_ctor_doc = ctor.documentation.is_some();
    let has_param_doc = ctor.params.iter().any(|p| p.documentation.is_some());
    if !has_ctor_doc && !has_param_doc {
        return Ok(());
    }

    writeln!(out, "/**")?;
    if let Some(doc) = &ctor.documentation {
        for line in &doc.lines {
            write_block_line(out, " *", line)?;
        }
    }

    if has_ctor_doc && has_param_doc {
        writeln!(out, " *")?;
    }

    for param in &ctor.params {
        if let Some(doc) = &param.documentation {
            writeln!(out, " * @param {}", param_name(param.name))?;
            for line in &doc.lines {
                write_block_line(out, " *       ", line)?;
            }
        }
    }
    writeln!(out, " */")?;

    Ok(())
}

fn write_block_line(out: &mut dyn Write, prefix: &str, line: &str) -> fmt::Result {
    if line.is_empty() {
        writeln!(out, " *")
    } else {
        writeln!(out, "{} {}", prefix, line)
    }
}

/// Writes `///` rustdoc lines, with an `# Arguments` section for documented
/// parameters.
pub fn write_rust_doc<F>(out: &mut dyn Write, ctor: &spec::Constructor<'_>, param_name: F) -> fmt::Result
where
    F: Fn(&str) -> String,
{
    let documented = ctor
        .params
        .iter()
        .filter_map(|p| p.documentation.as_ref().map(|doc| (p.name, doc)))
        .collect::<Vec<_>>();

    if let Some(doc) = &ctor.documentation {
        for line in &doc.lines {
            write_rust_line(out, "", line)?;
        }
        if !documented.is_empty() {
            writeln!(out, "///")?;
        }
    }

    if documented.is_empty() {
        return Ok(());
    }

    writeln!(out, "/// # Arguments")?;
    writeln!(out, "///")?;
    for (name, doc) in documented {
        let mut lines = doc.lines.iter();
        match lines.next() {
            Some(first) if !first.is_empty() => {
                writeln!(out, "/// * `{}` - {}", param_name(name), first)?
            }
            _ => writeln!(out, "/// * `{}`", param_name(name))?,
        }
        for line in lines {
            write_rust_line(out, "  ", line)?;
        }
    }

    Ok(())
}

fn write_rust_line(out: &mut dyn Write, indent: &str, line: &str) -> fmt::Result {
    if line.is_empty() {
        writeln!(out, "///")
    } else {
        writeln!(out, "/// {}{}", indent, line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(source: &str) -> spec::File<'_> {
        spec::parse_file(source).unwrap()
    }

    #[test]
    fn test_block_doc_with_ctor_and_params() {
        let file = parse(
            "package p;
            T {
                /// First line.
                ///
                /// Third line.
                make(
                    /// The kind.
                    /// Must be positive.
                    type_id: int32,
                    other: int32
                ) {}
            }",
        );

        let mut out = String::new();
        write_block_doc(&mut out, &file.types[0].constructors[0], |n| n.to_uppercase()).unwrap();

        assert_eq!(
            out,
            "/**\n \
             * First line.\n \
             *\n \
             * Third line.\n \
             *\n \
             * @param TYPE_ID\n \
             *        The kind.\n \
             *        Must be positive.\n \
             */\n"
        );
    }

    #[test]
    fn test_block_doc_params_only() {
        let file = parse("package p; T { make(/// Id.\n id: int32) {} }");

        let mut out = String::new();
        write_block_doc(&mut out, &file.types[0].constructors[0], str::to_string).unwrap();

        assert_eq!(out, "/**\n * @param id\n *        Id.\n */\n");
    }

    #[test]
    fn test_block_doc_without_docs_writes_nothing() {
        let file = parse("package p; T { make(id: int32) {} }");

        let mut out = String::new();
        write_block_doc(&mut out, &file.types[0].constructors[0], str::to_string).unwrap();

        assert!(out.is_empty());
    }

    #[test]
    fn test_rust_doc() {
        let file = parse(
            "package p;
            T {
                /// Makes a T.
                make(
                    /// The kind.
                    /// Never zero.
                    typeId: int32,
                    other: int32
                ) {}
            }",
        );

        let mut out = String::new();
        write_rust_doc(&mut out, &file.types[0].constructors[0], |n| n.to_lowercase()).unwrap();

        assert_eq!(
            out,
            "/// Makes a T.\n\
             ///\n\
             /// # Arguments\n\
             ///\n\
             /// * `typeid` - The kind.\n\
             ///   Never zero.\n"
        );
    }
}
