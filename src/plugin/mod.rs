//! protoc plugin driver shared by the constructor binaries.
//!
//! protoc runs a plugin with a `CodeGeneratorRequest` on stdin and expects a
//! `CodeGeneratorResponse` on stdout. Problems with the user's input are
//! reported through the response's `error` field; only broken streams make
//! the process fail.

use crate::backends::Backend;
use crate::config::Config;
use crate::context::PluginContext;
use crate::error::{GeneratorError, GeneratorResult};
use crate::spec;
use anyhow::{Context, Result};
use prost::Message;
use prost_types::compiler::code_generator_response::Feature;
use prost_types::compiler::{CodeGeneratorRequest, CodeGeneratorResponse};
use std::fs;
use std::io::{self, Read, Write};
use tracing::{debug, error, info, warn};

/// Run `backend` against a request and build protoc's response.
///
/// Never fails: any `GeneratorError` becomes `response.error`.
pub fn generate<B: Backend + ?Sized>(
    backend: &B,
    request: &CodeGeneratorRequest,
    config: &Config,
) -> CodeGeneratorResponse {
    match try_generate(backend, request, config) {
        Ok(file) => {
            info!(
                plugin = backend.name(),
                files = file.len(),
                "Constructor generation finished"
            );
            response(Ok(file))
        }
        Err(e) => {
            error!(plugin = backend.name(), "Constructor generation failed: {}", e);
            response(Err(e))
        }
    }
}

/// Read a request from stdin, generate, and write the response to stdout.
///
/// # Errors
///
/// Fails if stdin can't be read or decoded, or stdout can't be written.
pub fn run<B: Backend + ?Sized>(backend: &B) -> Result<()> {
    let mut input = Vec::new();
    io::stdin()
        .read_to_end(&mut input)
        .context("Failed to read the code generator request from stdin")?;

    let request = CodeGeneratorRequest::decode(input.as_slice())
        .context("Failed to decode the code generator request")?;
    debug!(
        files = ?request.file_to_generate,
        parameter = request.parameter(),
        "Received code generator request"
    );

    let response = match Config::from_parameter(request.parameter()) {
        Ok(config) => generate(backend, &request, &config),
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            response(Err(GeneratorError::from(e)))
        }
    };

    let mut stdout = io::stdout().lock();
    stdout
        .write_all(&response.encode_to_vec())
        .context("Failed to write the code generator response to stdout")?;
    stdout.flush()?;

    Ok(())
}

fn try_generate<B: Backend + ?Sized>(
    backend: &B,
    request: &CodeGeneratorRequest,
    config: &Config,
) -> GeneratorResult<Vec<prost_types::compiler::code_generator_response::File>> {
    // The parsed specs borrow from the sources, so read everything first.
    let sources = config
        .spec_files
        .iter()
        .map(|path| {
            fs::read_to_string(path).map_err(|source| GeneratorError::SpecRead {
                path: path.display().to_string(),
                source,
            })
        })
        .collect::<GeneratorResult<Vec<_>>>()?;

    let specs = config
        .spec_files
        .iter()
        .zip(&sources)
        .map(|(path, source)| {
            debug!(path = %path.display(), "Parsing spec file");
            spec::parse_file(source).map_err(|source| GeneratorError::SpecParse {
                path: path.display().to_string(),
                source,
            })
        })
        .collect::<GeneratorResult<Vec<_>>>()?;

    let context = PluginContext::new(request, &specs);
    for name in context.unmatched_specs() {
        warn!(type_name = %name, "Spec describes a type that is not in the request");
    }

    backend.generate(&context, config)
}

fn response(
    result: GeneratorResult<Vec<prost_types::compiler::code_generator_response::File>>,
) -> CodeGeneratorResponse {
    let supported_features = Some(Feature::Proto3Optional as u64);
    match result {
        Ok(file) => CodeGeneratorResponse {
            file,
            supported_features,
            ..Default::default()
        },
        Err(e) => CodeGeneratorResponse {
            error: Some(e.to_string()),
            supported_features,
            ..Default::default()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backends::RustBackend;
    use prost_types::compiler::code_generator_response::File;
    use prost_types::FileDescriptorProto;
    use std::path::PathBuf;

    struct FixedBackend;

    impl Backend for FixedBackend {
        fn name(&self) -> &'static str {
            "fixed"
        }

        fn default_indent(&self) -> usize {
            2
        }

        fn generate(
            &self,
            context: &PluginContext<'_>,
            _config: &Config,
        ) -> GeneratorResult<Vec<File>> {
            Ok(vec![File {
                name: Some(format!("{}.txt", context.files.len())),
                ..Default::default()
            }])
        }
    }

    fn request() -> CodeGeneratorRequest {
        CodeGeneratorRequest {
            file_to_generate: vec!["empty.proto".to_string()],
            proto_file: vec![FileDescriptorProto {
                name: Some("empty.proto".to_string()),
                package: Some("empty".to_string()),
                ..Default::default()
            }],
            ..Default::default()
        }
    }

    #[test]
    fn test_missing_spec_file_is_reported_in_response() {
        let config = Config {
            spec_files: vec![PathBuf::from("/definitely/not/here.spec")],
            indent: None,
        };

        let response = generate(&RustBackend, &request(), &config);
        let error = response.error.unwrap();
        assert!(error.contains("/definitely/not/here.spec"), "{}", error);
        assert!(response.file.is_empty());
        assert_eq!(
            response.supported_features,
            Some(Feature::Proto3Optional as u64)
        );
    }

    #[test]
    fn test_backend_receives_parsed_specs() {
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("a.spec");
        let second = dir.path().join("b.spec");
        fs::write(&first, "package empty;").unwrap();
        fs::write(&second, "package other;").unwrap();

        let config = Config {
            spec_files: vec![first, second],
            indent: None,
        };

        let response = generate(&FixedBackend, &request(), &config);
        assert_eq!(response.error, None);
        assert_eq!(response.file.len(), 1);
        assert_eq!(response.file[0].name(), "2.txt");
    }

    #[test]
    fn test_parse_error_is_reported_in_response() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.spec");
        fs::write(&path, "package empty;\nThing { oops }").unwrap();

        let config = Config {
            spec_files: vec![path],
            indent: None,
        };

        let response = generate(&FixedBackend, &request(), &config);
        let error = response.error.unwrap();
        assert!(error.contains("broken.spec"), "{}", error);
        assert!(error.contains("line 2"), "{}", error);
    }
}
