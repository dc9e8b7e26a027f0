//! Shared foundation for the Fabula text engines.
//!
//! Types, one error enum per subsystem, layered TOML configuration,
//! output-sink events, tracing setup, and constants.

pub mod config;
pub mod constants;
pub mod errors;
pub mod events;
pub mod tracing;
pub mod types;
