//! protoc plugins that add named constructors to generated protobuf messages.
//!
//! Constructors are declared in `.spec` files next to the `.proto` files and
//! generated for Java, JavaScript and Rust (prost) by one binary per language:
//!
//! ```text
//! protoc --plugin=protoc-gen-rust_constructors \
//!        --rust_constructors_out=protos/test1.spec:src/generated \
//!        protos/test1.proto
//! ```
//!
//! # Architecture
//!
//! - **domain**: Validated value types (fully qualified protobuf names)
//! - **spec**: Spec file AST and parser
//! - **context**: Joins protoc's descriptors with the parsed specs
//! - **writer**: Indentation aware output writer
//! - **documentation**: Doc comments for generated constructors
//! - **backends**: Java, JS and Rust code generators
//! - **plugin**: stdin/stdout protocol handling shared by the binaries
//! - **config**: Plugin parameter and environment configuration
//! - **error**: Custom error types for precise error handling

pub mod backends;
pub mod config;
pub mod context;
pub mod documentation;
pub mod domain;
pub mod error;
pub mod plugin;
pub mod spec;
pub mod writer;

// Re-export commonly used types
pub use backends::{Backend, JavaBackend, JsBackend, RustBackend};
pub use config::Config;
pub use context::{FileContext, PluginContext, TypeContext};
pub use domain::{FullName, ValidationError};
pub use error::{ConfigError, GeneratorError, GeneratorResult, SpecError};
pub use plugin::{generate, run};
pub use writer::IndentingWriter;
