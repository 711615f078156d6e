//! JavaScript constructors.
//!
//! protoc's commonjs output can't be extended in place, so every proto file
//! gets a companion module that requires the generated `_pb.js` module and
//! attaches the constructors to its classes.

use super::{response_file, sibling_path, Backend};
use crate::config::Config;
use crate::context::{PluginContext, TypeContext};
use crate::documentation::write_block_doc;
use crate::error::GeneratorResult;
use crate::spec::{self, Expr};
use crate::writer::{join, IndentingWriter};
use heck::{ToLowerCamelCase, ToUpperCamelCase};
use prost_types::compiler::code_generator_response::File;
use prost_types::field_descriptor_proto::Type;
use prost_types::FieldDescriptorProto;
use std::fmt::Write;
use tracing::{debug, info};

/// Generator for `protoc-gen-js_constructors`.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsBackend;

impl Backend for JsBackend {
    fn name(&self) -> &'static str {
        "js_constructors"
    }

    fn default_indent(&self) -> usize {
        4
    }

    fn generate(&self, context: &PluginContext<'_>, config: &Config) -> GeneratorResult<Vec<File>> {
        let indent = self.indent(config);

        let mut files = Vec::new();
        for file_context in context.iter_generated_files()? {
            let stem = file_context.file_stem();

            let mut result = String::new();
            let mut out = IndentingWriter::new(&mut result, &indent);

            // The companion module sits next to the protoc output, so the
            // require only needs the file name.
            writeln!(out, "var __ = require('./{}_pb');", stem)?;

            for (type_context, ctor) in file_context.iter_generated_constructors()? {
                debug!(
                    type_name = %type_context.full_name,
                    constructor = ctor.name,
                    "Generating JS constructor"
                );
                writeln!(out)?;
                write_ctor(&mut out, &type_context, ctor)?;
            }

            let output_path = sibling_path(
                file_context.descriptor.name(),
                &format!("{}_pb-constructors.js", stem),
            );

            info!(file = %output_path, "Generated JS constructors");
            files.push(response_file(output_path, None, result));
        }

        Ok(files)
    }
}

/// Writes the constructor implementation.
fn write_ctor(
    out: &mut IndentingWriter<'_>,
    type_context: &TypeContext<'_>,
    ctor: &spec::Constructor<'_>,
) -> GeneratorResult<()> {
    write_block_doc(out, ctor, |name| name.to_lower_camel_case())?;

    let class_name = type_context.relative_path().join(".");
    let ctor_name = ctor.name.to_lower_camel_case();
    let param_list = join(&ctor.params, ", ", |p| p.name.to_lower_camel_case());

    // The constructor should look like:
    //
    // ```
    // __.Foo.ctorName = function ctorName(a, b) {
    //     var _self = new __.Foo();
    //     _self.setFieldA(a);
    //     _self.setFieldB(b);
    //     return _self;
    // };
    // ```

    writeln!(
        out,
        "__.{}.{} = function {}({}) {{",
        class_name, ctor_name, ctor_name, param_list
    )?;
    out.indent();

    writeln!(out, "var _self = new __.{}();", class_name)?;

    for initializer in &ctor.initializers {
        let field = type_context.require_field(initializer.field)?;
        writeln!(
            out,
            "_self.set{}({});",
            field.name().to_upper_camel_case(),
            value(type_context, &initializer.value, Some(field))?
        )?;
    }

    writeln!(out, "return _self;")?;

    out.unindent();
    writeln!(out, "}};")?;

    Ok(())
}

/// Module path of a type named relative to the constructed type.
fn class_path(context: &TypeContext<'_>, type_name: &str) -> String {
    context
        .file_context
        .plugin_context
        .get_rel_type(&context.full_name, type_name)
        .filter(|found| found.file_context.package() == context.file_context.package())
        .map(|found| found.relative_path().join("."))
        .unwrap_or_else(|| type_name.to_string())
}

/// Turns a value expression into JS value.
///
/// `field` is the field being initialized, `None` for call arguments.
fn value(
    context: &TypeContext<'_>,
    expr: &Expr<'_>,
    field: Option<&FieldDescriptorProto>,
) -> GeneratorResult<String> {
    let rendered = match expr {
        Expr::Bool(b) => b.to_string(),
        Expr::Integer(i) => i.to_string(),
        Expr::Float(f) => format!("{:?}", f),
        // Strings given to bytes setters are read as base64.
        Expr::Str(s) if field.map(|f| f.r#type()) == Some(Type::Bytes) => {
            format!("new TextEncoder().encode({})", serde_json::to_string(s)?)
        }
        Expr::Str(s) => serde_json::to_string(s)?,
        Expr::Ref(r) => r.to_lower_camel_case(),
        Expr::Enum(e) => format!("__.{}.{}", class_path(context, e.enum_name), e.value_name),
        Expr::Call(c) => {
            let func = match c.type_name {
                Some(t) => format!("__.{}.{}", class_path(context, t), c.func_name.to_lower_camel_case()),
                None => c.func_name.to_lower_camel_case(),
            };

            // The call parameters are resolved recursively.
            let params = c
                .args
                .iter()
                .map(|v| value(context, v, None))
                .collect::<GeneratorResult<Vec<_>>>()?
                .join(", ");

            format!("{}({})", func, params)
        }
    };

    Ok(rendered)
}
