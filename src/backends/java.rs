//! Java constructors.
//!
//! protoc's Java generator leaves `builder_scope:` and `class_scope:`
//! insertion points in every message class. Each constructor is emitted
//! twice: a static factory on the `Builder` that applies the initializers,
//! and a static factory on the message class that builds it.

use super::{response_file, Backend};
use crate::config::Config;
use crate::context::{PluginContext, TypeContext};
use crate::documentation::write_block_doc;
use crate::error::GeneratorResult;
use crate::spec::{self, Expr, ParamType};
use crate::writer::{join, IndentingWriter};
use heck::ToLowerCamelCase;
use prost_types::compiler::code_generator_response::File;
use prost_types::field_descriptor_proto::Type;
use prost_types::{DescriptorProto, FieldDescriptorProto, FileDescriptorProto};
use std::fmt::Write;
use tracing::{debug, info};

/// Generator for `protoc-gen-java_constructors`.
#[derive(Debug, Default, Clone, Copy)]
pub struct JavaBackend;

impl Backend for JavaBackend {
    fn name(&self) -> &'static str {
        "java_constructors"
    }

    fn default_indent(&self) -> usize {
        2
    }

    fn generate(&self, context: &PluginContext<'_>, config: &Config) -> GeneratorResult<Vec<File>> {
        let indent = self.indent(config);
        let mut files = Vec::new();

        for file_context in context.iter_generated_files()? {
            for (type_context, type_spec) in file_context.iter_generated_types()? {
                let output_path = output_path(&type_context);

                for ctor in &type_spec.constructors {
                    debug!(
                        type_name = %type_context.full_name,
                        constructor = ctor.name,
                        "Generating Java constructor"
                    );

                    files.push(response_file(
                        output_path.clone(),
                        Some(format!("builder_scope:{}", type_context.full_name)),
                        builder_ctor(&type_context, ctor, &indent)?,
                    ));
                    files.push(response_file(
                        output_path.clone(),
                        Some(format!("class_scope:{}", type_context.full_name)),
                        class_ctor(&type_context, ctor, &indent)?,
                    ));
                }
            }

            info!(file = file_context.descriptor.name(), "Generated Java constructors");
        }

        Ok(files)
    }
}

fn builder_ctor(
    type_context: &TypeContext<'_>,
    ctor: &spec::Constructor<'_>,
    indent: &str,
) -> GeneratorResult<String> {
    let mut result = String::new();
    let mut out = IndentingWriter::new(&mut result, indent);

    write_block_doc(&mut out, ctor, |name| name.to_lower_camel_case())?;

    writeln!(
        out,
        "public static Builder {}({}) {{",
        ctor.name.to_lower_camel_case(),
        param_list(ctor)
    )?;
    out.indent();
    writeln!(out, "Builder _builder = new Builder();")?;

    for initializer in &ctor.initializers {
        let field = type_context.require_field(initializer.field)?;
        writeln!(
            out,
            "_builder.set{}({});",
            underscores_to_camel_case(field.name(), true),
            value(&initializer.value, Some(field))?
        )?;
    }

    writeln!(out, "return _builder;")?;
    out.unindent();
    writeln!(out, "}}")?;

    Ok(result)
}

fn class_ctor(
    type_context: &TypeContext<'_>,
    ctor: &spec::Constructor<'_>,
    indent: &str,
) -> GeneratorResult<String> {
    let mut result = String::new();
    let mut out = IndentingWriter::new(&mut result, indent);

    write_block_doc(&mut out, ctor, |name| name.to_lower_camel_case())?;

    let ctor_name = ctor.name.to_lower_camel_case();
    let arg_list = join(&ctor.params, ", ", |p| p.name.to_lower_camel_case());

    writeln!(
        out,
        "public static {} {}({}) {{",
        type_context.name(),
        ctor_name,
        param_list(ctor)
    )?;
    out.indent();
    writeln!(out, "return Builder.{}({}).build();", ctor_name, arg_list)?;
    out.unindent();
    writeln!(out, "}}")?;

    Ok(result)
}

fn param_list(ctor: &spec::Constructor<'_>) -> String {
    join(&ctor.params, ", ", |p| {
        format!(
            "{} {}",
            java_type(&p.param_type),
            p.name.to_lower_camel_case()
        )
    })
}

/// File protoc's Java generator writes the message class into.
fn output_path(type_context: &TypeContext<'_>) -> String {
    let descriptor = type_context.file_context.descriptor;

    let class = if java_multiple_files(descriptor) {
        // Nested messages stay inside their top-level class.
        type_context
            .relative_path()
            .first()
            .copied()
            .unwrap_or_else(|| type_context.name())
            .to_string()
    } else {
        outer_class(descriptor)
    };

    let package_path = java_package(descriptor).replace('.', "/");
    if package_path.is_empty() {
        format!("{}.java", class)
    } else {
        format!("{}/{}.java", package_path, class)
    }
}

fn java_package(descriptor: &FileDescriptorProto) -> &str {
    // Prefer the defined java package.
    if let Some(package) = descriptor
        .options
        .as_ref()
        .and_then(|opts| opts.java_package.as_deref())
    {
        return package;
    }

    descriptor.package()
}

fn java_multiple_files(descriptor: &FileDescriptorProto) -> bool {
    descriptor
        .options
        .as_ref()
        .and_then(|opts| opts.java_multiple_files)
        .unwrap_or(false)
}

/// The outer class protoc derives for a file.
///
/// Without `java_outer_classname` this is the camel-cased file name, with
/// `OuterClass` appended when a type in the file, nested ones included,
/// already uses that name.
fn outer_class(descriptor: &FileDescriptorProto) -> String {
    if let Some(name) = descriptor
        .options
        .as_ref()
        .and_then(|opts| opts.java_outer_classname.as_deref())
    {
        return name.to_string();
    }

    let stem = std::path::Path::new(descriptor.name())
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or_else(|| descriptor.name());
    let class = underscores_to_camel_case(stem, true);

    let conflicts = descriptor.message_type.iter().any(|m| uses_name(m, &class))
        || descriptor.enum_type.iter().any(|e| e.name() == class)
        || descriptor.service.iter().any(|s| s.name() == class);

    if conflicts {
        format!("{}OuterClass", class)
    } else {
        class
    }
}

fn uses_name(message: &DescriptorProto, name: &str) -> bool {
    message.name() == name
        || message.enum_type.iter().any(|e| e.name() == name)
        || message.nested_type.iter().any(|m| uses_name(m, name))
}

/// protoc's Java camel-casing.
///
/// Unlike word-splitting converters, a digit starts a new word and an
/// uppercase letter never ends one: `foo_2bar` becomes `Foo2Bar` and
/// `HTTPServer` stays as is.
fn underscores_to_camel_case(name: &str, cap_first: bool) -> String {
    let mut result = String::with_capacity(name.len());
    let mut cap_next = cap_first;

    for (i, c) in name.chars().enumerate() {
        if c.is_ascii_lowercase() {
            result.push(if cap_next { c.to_ascii_uppercase() } else { c });
            cap_next = false;
        } else if c.is_ascii_uppercase() {
            result.push(if i == 0 && !cap_first { c.to_ascii_lowercase() } else { c });
            cap_next = false;
        } else if c.is_ascii_digit() {
            result.push(c);
            cap_next = true;
        } else {
            cap_next = true;
        }
    }

    result
}

fn java_type(param_type: &ParamType<'_>) -> String {
    match param_type {
        ParamType::Int32 | ParamType::UInt32 => "int".to_string(),
        ParamType::Int64 | ParamType::UInt64 => "long".to_string(),
        ParamType::Bool => "boolean".to_string(),
        ParamType::Float => "float".to_string(),
        ParamType::Double => "double".to_string(),
        ParamType::String => "String".to_string(),
        ParamType::Bytes => "com.google.protobuf.ByteString".to_string(),
        ParamType::Custom(name) => name.to_string(),
    }
}

/// Turns a value expression into a Java expression.
///
/// `field` is the field being initialized, `None` for call arguments.
fn value(expr: &Expr<'_>, field: Option<&FieldDescriptorProto>) -> GeneratorResult<String> {
    let rendered = match expr {
        Expr::Bool(b) => b.to_string(),
        Expr::Integer(i) if i32::try_from(*i).is_ok() => i.to_string(),
        Expr::Integer(i) => format!("{}L", i),
        Expr::Float(f) if field.map(|f| f.r#type()) == Some(Type::Float) => format!("{:?}f", f),
        Expr::Float(f) => format!("{:?}", f),
        Expr::Str(s) if field.map(|f| f.r#type()) == Some(Type::Bytes) => format!(
            "com.google.protobuf.ByteString.copyFromUtf8({})",
            serde_json::to_string(s)?
        ),
        Expr::Str(s) => serde_json::to_string(s)?,
        Expr::Ref(r) => r.to_lower_camel_case(),
        Expr::Enum(e) => format!("{}.{}", e.enum_name, e.value_name),
        Expr::Call(c) => {
            let args = c
                .args
                .iter()
                .map(|arg| value(arg, None))
                .collect::<GeneratorResult<Vec<_>>>()?
                .join(", ");

            let func = c.func_name.to_lower_camel_case();
            match c.type_name {
                Some(t) => format!("{}.{}({})", t, func, args),
                None => format!("{}({})", func, args),
            }
        }
    };

    Ok(rendered)
}
