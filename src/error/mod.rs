//! Error types for posture-audit.
//!
//! Errors fall into three families:
//! - data-shape errors: the input was readable but lacks a field or component
//!   its format guarantees (`PostureError::is_data_shape`)
//! - I/O and parse errors: unreadable input, unwritable output
//! - argument errors, reported by `clap` before any work starts

mod audit;
mod context;

pub use audit::PostureError;
pub use context::{IoOperation, ParseFormat};

/// Result type alias for posture-audit operations.
pub type Result<T> = std::result::Result<T, PostureError>;
