//! Rust constructors for prost generated messages.
//!
//! prost writes one module per package; the file produced here holds plain
//! `impl` blocks and is meant to be `include!`d right after prost's output
//! for the same package:
//!
//! ```ignore
//! pub mod jubjubnest {
//!     include!(concat!(env!("OUT_DIR"), "/net.jubjubnest.rs"));
//!     include!(concat!(env!("OUT_DIR"), "/test1_constructors.rs"));
//! }
//! ```
//!
//! The output keeps the proto's directory: `a/x.proto` gives
//! `a/x_constructors.rs`.

use super::{response_file, sibling_path, Backend};
use crate::config::Config;
use crate::context::{PluginContext, TypeContext};
use crate::documentation::write_rust_doc;
use crate::error::{GeneratorError, GeneratorResult};
use crate::spec::{self, Expr, ParamType};
use crate::writer::IndentingWriter;
use heck::{ToSnakeCase, ToUpperCamelCase};
use prost_types::compiler::code_generator_response::File;
use prost_types::field_descriptor_proto::{Label, Type};
use prost_types::FieldDescriptorProto;
use std::fmt::Write;
use tracing::{debug, info};

/// Generator for `protoc-gen-rust_constructors`.
#[derive(Debug, Default, Clone, Copy)]
pub struct RustBackend;

impl Backend for RustBackend {
    fn name(&self) -> &'static str {
        "rust_constructors"
    }

    fn default_indent(&self) -> usize {
        4
    }

    fn generate(&self, context: &PluginContext<'_>, config: &Config) -> GeneratorResult<Vec<File>> {
        let indent = self.indent(config);
        let mut files = Vec::new();

        for file_context in context.iter_generated_files()? {
            let mut result = String::new();
            let mut out = IndentingWriter::new(&mut result, &indent);

            writeln!(out, "// @generated by protoc-gen-rust_constructors. Do not edit.")?;

            for (type_context, type_spec) in file_context.iter_generated_types()? {
                if type_spec.constructors.is_empty() {
                    continue;
                }
                writeln!(out)?;
                write_impl(&mut out, &type_context, type_spec)?;
            }

            let output_path = sibling_path(
                file_context.descriptor.name(),
                &format!("{}_constructors.rs", file_context.file_stem()),
            );
            info!(file = %output_path, "Generated Rust constructors");
            files.push(response_file(output_path, None, result));
        }

        Ok(files)
    }
}

fn write_impl(
    out: &mut IndentingWriter<'_>,
    type_context: &TypeContext<'_>,
    type_spec: &spec::Type<'_>,
) -> GeneratorResult<()> {
    writeln!(
        out,
        "#[allow(clippy::redundant_field_names, clippy::needless_update)]"
    )?;
    writeln!(
        out,
        "impl {} {{",
        rust_path(type_context.file_context.package(), type_context)
    )?;
    out.indent();

    for (i, ctor) in type_spec.constructors.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        debug!(
            type_name = %type_context.full_name,
            constructor = ctor.name,
            "Generating Rust constructor"
        );
        write_ctor(out, type_context, ctor)?;
    }

    out.unindent();
    writeln!(out, "}}")?;

    Ok(())
}

fn write_ctor(
    out: &mut IndentingWriter<'_>,
    type_context: &TypeContext<'_>,
    ctor: &spec::Constructor<'_>,
) -> GeneratorResult<()> {
    write_rust_doc(out, ctor, ident)?;

    let params = ctor
        .params
        .iter()
        .map(|p| Ok(format!("{}: {}", ident(p.name), rust_type(type_context, &p.param_type)?)))
        .collect::<GeneratorResult<Vec<_>>>()?
        .join(", ");

    writeln!(out, "pub fn {}({}) -> Self {{", ident(ctor.name), params)?;
    out.indent();
    writeln!(out, "Self {{")?;
    out.indent();

    for initializer in &ctor.initializers {
        let field = type_context.require_field(initializer.field)?;
        writeln!(
            out,
            "{}: {},",
            ident(field.name()),
            field_value(type_context, ctor, field, &initializer.value)?
        )?;
    }

    writeln!(out, "..Default::default()")?;
    out.unindent();
    writeln!(out, "}}")?;
    out.unindent();
    writeln!(out, "}}")?;

    Ok(())
}

/// Path of `target` as seen from the prost module of `from_package`.
fn rust_path(from_package: &str, target: &TypeContext<'_>) -> String {
    let mut segments = Vec::new();

    let target_package = target.file_context.package();
    if target_package != from_package {
        let depth = from_package.split('.').filter(|s| !s.is_empty()).count();
        segments.extend(std::iter::repeat("super".to_string()).take(depth));
        segments.extend(
            target_package
                .split('.')
                .filter(|s| !s.is_empty())
                .map(ident),
        );
    }

    // Nested messages live in a module named after their parent.
    let path = target.relative_path();
    if let Some((last, parents)) = path.split_last() {
        segments.extend(parents.iter().map(|p| ident(p)));
        segments.push(last.to_upper_camel_case());
    }

    segments.join("::")
}

/// Path of a type named relative to the constructed type.
///
/// protoc sends the descriptors of every imported file, so a name that
/// doesn't resolve can't be spelled as a prost path either.
fn resolve_path(context: &TypeContext<'_>, type_name: &str) -> GeneratorResult<String> {
    let found = require(context, type_name)?;
    Ok(rust_path(context.file_context.package(), &found))
}

fn resolve<'a>(context: &TypeContext<'a>, type_name: &str) -> Option<TypeContext<'a>> {
    context
        .file_context
        .plugin_context
        .get_rel_type(&context.full_name, type_name)
}

fn require<'a>(context: &TypeContext<'a>, type_name: &str) -> GeneratorResult<TypeContext<'a>> {
    resolve(context, type_name).ok_or_else(|| GeneratorError::UnknownType {
        scope: context.full_name.to_string(),
        name: type_name.to_string(),
    })
}

fn rust_type(context: &TypeContext<'_>, param_type: &ParamType<'_>) -> GeneratorResult<String> {
    let rendered = match param_type {
        ParamType::Int32 => "i32".to_string(),
        ParamType::Int64 => "i64".to_string(),
        ParamType::UInt32 => "u32".to_string(),
        ParamType::UInt64 => "u64".to_string(),
        ParamType::Bool => "bool".to_string(),
        ParamType::Float => "f32".to_string(),
        ParamType::Double => "f64".to_string(),
        ParamType::String => "String".to_string(),
        ParamType::Bytes => "Vec<u8>".to_string(),
        ParamType::Custom(name) => resolve_path(context, name)?,
    };
    Ok(rendered)
}

/// Value for a struct field, wrapped the way prost represents the field.
fn field_value(
    context: &TypeContext<'_>,
    ctor: &spec::Constructor<'_>,
    field: &FieldDescriptorProto,
    expr: &Expr<'_>,
) -> GeneratorResult<String> {
    if field.oneof_index.is_some() && !field.proto3_optional() {
        return Err(GeneratorError::UnsupportedField {
            message: context.full_name.to_string(),
            field: field.name().to_string(),
            reason: "prost represents oneof members as an enum".to_string(),
        });
    }

    let rendered = value(context, ctor, expr, Some(field))?;
    if is_option(context, field) {
        Ok(format!("Some({})", rendered))
    } else {
        Ok(rendered)
    }
}

/// Whether prost declares the field as `Option<T>`.
fn is_option(context: &TypeContext<'_>, field: &FieldDescriptorProto) -> bool {
    if field.label() == Label::Repeated {
        return false;
    }

    let proto2 = matches!(context.file_context.descriptor.syntax(), "" | "proto2");

    field.r#type() == Type::Message
        || field.proto3_optional()
        || (proto2 && field.label() == Label::Optional)
}

/// Turns a value expression into a Rust expression.
///
/// `field` is the field being initialized, `None` for call arguments.
fn value(
    context: &TypeContext<'_>,
    ctor: &spec::Constructor<'_>,
    expr: &Expr<'_>,
    field: Option<&FieldDescriptorProto>,
) -> GeneratorResult<String> {
    let field_type = field.map(|f| f.r#type());

    let rendered = match expr {
        Expr::Bool(b) => b.to_string(),
        Expr::Integer(i) if matches!(field_type, Some(Type::Double | Type::Float)) => {
            format!("{}.0", i)
        }
        Expr::Integer(i) => i.to_string(),
        Expr::Float(f) => format!("{:?}", f),
        Expr::Str(s) if field_type == Some(Type::Bytes) => format!("{:?}.as_bytes().to_vec()", s),
        Expr::Str(s) => format!("{:?}.to_string()", s),
        Expr::Ref(r) => {
            let name = ident(r);
            if field_type == Some(Type::Enum) && param_is_enum(context, ctor, r) {
                format!("{} as i32", name)
            } else {
                name
            }
        }
        Expr::Enum(e) => {
            let found = require(context, e.enum_name)?;
            let path = format!(
                "{}::{}",
                rust_path(context.file_context.package(), &found),
                variant_name(found.name(), e.value_name)
            );
            if field_type == Some(Type::Enum) {
                format!("{} as i32", path)
            } else {
                path
            }
        }
        Expr::Call(c) => {
            let target = match c.type_name {
                Some(t) => resolve_path(context, t)?,
                None => "Self".to_string(),
            };

            let args = c
                .args
                .iter()
                .map(|arg| value(context, ctor, arg, None))
                .collect::<GeneratorResult<Vec<_>>>()?
                .join(", ");

            format!("{}::{}({})", target, ident(c.func_name), args)
        }
    };

    Ok(rendered)
}

fn param_is_enum(context: &TypeContext<'_>, ctor: &spec::Constructor<'_>, name: &str) -> bool {
    ctor.params
        .iter()
        .find(|p| p.name == name)
        .and_then(|p| match p.param_type {
            ParamType::Custom(type_name) => resolve(context, type_name),
            _ => None,
        })
        .map(|found| found.is_enum())
        .unwrap_or(false)
}

/// prost's variant naming: UpperCamelCase with the enum name stripped when
/// it is a prefix ending at a word boundary.
fn variant_name(enum_name: &str, value_name: &str) -> String {
    let prefix = enum_name.to_upper_camel_case();
    let variant = value_name.to_upper_camel_case();

    match variant.strip_prefix(&prefix) {
        Some(stripped) if stripped.starts_with(|c: char| c.is_ascii_uppercase()) => {
            stripped.to_string()
        }
        _ => variant,
    }
}

/// A snake_case identifier, escaped the way prost escapes field names.
fn ident(name: &str) -> String {
    let snake = name.to_snake_case();
    match snake.as_str() {
        "self" | "super" | "crate" => format!("{}_", snake),
        "as" | "break" | "const" | "continue" | "else" | "enum" | "false" | "fn" | "for"
        | "if" | "impl" | "in" | "let" | "loop" | "match" | "mod" | "move" | "mut" | "pub"
        | "ref" | "return" | "static" | "struct" | "trait" | "true" | "type" | "unsafe"
        | "use" | "where" | "while" | "dyn" | "abstract" | "become" | "box" | "do"
        | "final" | "macro" | "override" | "priv" | "typeof" | "unsized" | "virtual"
        | "yield" | "async" | "await" | "try" | "gen" => format!("r#{}", snake),
        _ => snake,
    }
}
