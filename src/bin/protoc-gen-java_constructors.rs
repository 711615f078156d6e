//! protoc plugin generating Java constructors.
//!
//! Invoked by protoc; reads a `CodeGeneratorRequest` from stdin and writes
//! the response to stdout.

use anyhow::Result;
use protoc_gen_constructors::{Backend, Config, JavaBackend};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Initialize logging (stderr only to avoid polluting the protoc response on stdout)
    let filter = EnvFilter::try_new(Config::log_filter()).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let backend = JavaBackend;
    info!("Starting protoc-gen-{}", backend.name());

    if let Err(e) = protoc_gen_constructors::run(&backend) {
        error!("protoc-gen-{} failed: {:#}", backend.name(), e);
        return Err(e);
    }

    Ok(())
}
