//! Error types for the constructor generators.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur while generating constructors.
///
/// Everything except I/O on the protocol streams ends up in the `error` field
/// of the `CodeGeneratorResponse`, so the messages are written for the person
/// running protoc.
#[derive(Error, Debug)]
pub enum GeneratorError {
    /// A spec file could not be read from disk
    #[error("Could not read spec file {path}: {source}")]
    SpecRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A spec file is not valid
    #[error("Could not parse spec file {path}: {source}")]
    SpecParse {
        path: String,
        #[source]
        source: SpecError,
    },

    /// protoc asked for a file that is missing from the request
    #[error("File {0} is listed for generation but has no descriptor in the request")]
    UnknownFile(String),

    /// A type referenced from a spec does not exist
    #[error("Type {name} referenced from {scope} not found")]
    UnknownType { scope: String, name: String },

    /// An initializer names a field the message does not have
    #[error("Message {message} has no field named {field}")]
    UnknownField { message: String, field: String },

    /// The field exists but the target language cannot initialize it
    #[error("Field {field} of {message} is not supported: {reason}")]
    UnsupportedField {
        message: String,
        field: String,
        reason: String,
    },

    /// A name in the request or spec is not a valid protobuf name
    #[error("Invalid name: {0}")]
    InvalidName(#[from] ValidationError),

    /// Writing the generated code failed
    #[error("Formatting error")]
    Format(#[from] std::fmt::Error),

    /// Escaping a string literal failed
    #[error("String literal encoding failed: {0}")]
    Literal(#[from] serde_json::Error),

    /// The plugin parameter or environment is invalid
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// A syntax error in a spec file.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("line {line}, column {column}: expected {expected}")]
pub struct SpecError {
    pub line: usize,
    pub column: usize,
    pub expected: String,
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The plugin parameter names no spec file
    #[error("No spec files given, pass them as --<lang>_constructors_out=a.spec,b.spec:<out dir>")]
    NoSpecFiles,

    /// Parameter option key is not recognised
    #[error("Unknown plugin option: {0}")]
    UnknownOption(String),

    /// Option or environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with GeneratorError
pub type GeneratorResult<T> = Result<T, GeneratorError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
