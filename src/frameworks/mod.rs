// Frameworks layer: environment configuration and process bootstrap.

pub mod config;
pub mod runtime;
