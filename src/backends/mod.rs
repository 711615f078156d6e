//! Code generators for the target languages.
//!
//! Each backend turns the constructors found through a `PluginContext` into
//! `CodeGeneratorResponse` files:
//! - **java**: insertion point snippets for protoc's own Java output
//! - **js**: a companion `_pb-constructors.js` module per proto file
//! - **rust**: an `include!`able file of `impl` blocks for prost structs

pub mod java;
pub mod js;
pub mod rust;

pub use java::JavaBackend;
pub use js::JsBackend;
pub use rust::RustBackend;

use crate::config::Config;
use crate::context::PluginContext;
use crate::error::GeneratorResult;
use prost_types::compiler::code_generator_response::File;
use std::path::Path;

/// A constructor generator for one target language.
pub trait Backend {
    /// Plugin name as protoc knows it, e.g. `java_constructors`.
    fn name(&self) -> &'static str;

    /// Indent width used when the plugin parameter doesn't set one.
    fn default_indent(&self) -> usize;

    /// Generate the response files for every constructor in `context`.
    fn generate(&self, context: &PluginContext<'_>, config: &Config) -> GeneratorResult<Vec<File>>;

    /// The indent string for this invocation.
    fn indent(&self, config: &Config) -> String {
        " ".repeat(config.indent.unwrap_or_else(|| self.default_indent()))
    }
}

/// Builds a response file, optionally targeting an insertion point.
pub(crate) fn response_file(name: String, insertion_point: Option<String>, content: String) -> File {
    File {
        name: Some(name),
        insertion_point,
        content: Some(content),
        ..Default::default()
    }
}

/// `file_name` in the directory of the proto file it was generated from.
///
/// Protos that share a stem in different directories then get different
/// outputs.
pub(crate) fn sibling_path(proto_name: &str, file_name: &str) -> String {
    match Path::new(proto_name).parent() {
        Some(dir) if !dir.as_os_str().is_empty() => format!("{}/{}", dir.display(), file_name),
        _ => file_name.to_string(),
    }
}
