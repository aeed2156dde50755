//! Logging for reviewlens.
//! `tracing` with `EnvFilter`, per-crate log levels, optional JSON output.

pub mod setup;

pub use setup::{init_tracing, init_tracing_with};
