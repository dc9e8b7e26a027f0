//! Observability for Fabula.
//! `tracing` crate with `EnvFilter`, per-engine log levels.

pub mod setup;

pub use setup::init_tracing;
