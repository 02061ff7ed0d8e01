//! Configuration layer for posture-audit.
//!
//! ## Layers
//! - `types`: Configuration type definitions
//! - `loading`: File loading and search order
//! - `error`: Loading errors

mod error;
mod loading;
mod types;

pub use error::ConfigError;
pub use types::{Config, DEFAULT_INPUT, DEFAULT_OUTPUT_ROOT, ReportConfig};
