//! Schema module - Configuration types for the matrix tool.

mod config;

pub use config::*;
