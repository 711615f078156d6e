//! Shared helpers for the integration tests.
//!
//! The tests don't run protoc: requests are assembled here from hand-built
//! descriptors matching the `.proto` files in `tests/fixtures/`.

use prost_types::compiler::code_generator_response::File;
use prost_types::compiler::{CodeGeneratorRequest, CodeGeneratorResponse};
use prost_types::FileDescriptorProto;
use protoc_gen_constructors::{Backend, Config};
use std::path::PathBuf;

pub mod fixtures;

/// Absolute path of a file under `tests/fixtures/`.
#[allow(dead_code)]
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Configuration reading the given fixture specs.
#[allow(dead_code)]
pub fn fixture_config(specs: &[&str]) -> Config {
    Config {
        spec_files: specs.iter().map(|name| fixture_path(name)).collect(),
        indent: None,
    }
}

/// A request generating `files`, with `proto_file` in dependency order.
#[allow(dead_code)]
pub fn request(files: Vec<FileDescriptorProto>, generate: &[&str], parameter: &str) -> CodeGeneratorRequest {
    CodeGeneratorRequest {
        file_to_generate: generate.iter().map(|name| name.to_string()).collect(),
        parameter: Some(parameter.to_string()),
        proto_file: files,
        ..Default::default()
    }
}

/// Run a backend and fail the test if the response carries an error.
#[allow(dead_code)]
pub fn generate_ok<B: Backend>(backend: &B, request: &CodeGeneratorRequest, config: &Config) -> Vec<File> {
    let response: CodeGeneratorResponse = protoc_gen_constructors::generate(backend, request, config);
    if let Some(error) = response.error {
        panic!("Generation failed: {}", error);
    }
    response.file
}

/// Find a response file by name and insertion point.
#[allow(dead_code)]
pub fn find_file<'a>(files: &'a [File], name: &str, insertion_point: Option<&str>) -> &'a File {
    files
        .iter()
        .find(|f| f.name() == name && f.insertion_point.as_deref() == insertion_point)
        .unwrap_or_else(|| panic!("No file {} at {:?} in response", name, insertion_point))
}
