//! # maven-app Library
//!
//! This library exposes the maven-app modules for testing and integration.
//!
//! The main binary uses these modules through the `main.rs` entry point.

pub mod cli;
pub mod logging;

// Re-export greeter_core for convenience
pub use greeter_core;
