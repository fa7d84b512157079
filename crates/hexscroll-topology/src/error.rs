//! Error types for hexscroll-topology.

use thiserror::Error;

/// Result type for hexscroll-topology operations.
pub type Result<T> = std::result::Result<T, TopologyError>;

/// Errors that can occur while building grid geometry.
#[derive(Debug, Error, PartialEq)]
pub enum TopologyError {
    /// A tile dimension is zero, negative or not finite.
    #[error("invalid tile metrics: {field} = {value}")]
    InvalidMetrics { field: &'static str, value: f64 },
}
