// mod.rs - CLI module

pub mod args;
pub mod config;
pub mod handler;
pub mod merge;
pub mod validation;

// Re-export main types for convenience
pub use args::{Args, Invocation};
pub use config::{Config, Settings};
pub use handler::{execute, run, Outcome};
pub use validation::{parse_payload, validate_settings};
