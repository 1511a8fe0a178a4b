//! Layout precondition errors
//!
//! Raised by a [`LayoutSolver`](crate::layout::LayoutSolver) when it rejects
//! the graph or the drawing area. They are surfaced unchanged by the adapter.

use thiserror::Error;

/// Layout solver errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    /// Link topology contains a cycle
    #[error("Cycle detected in graph: {0}")]
    CycleDetected(String),

    /// Link references a node id that is not in the node list
    #[error("Missing node: {0}")]
    MissingNode(String),

    /// Two nodes share the same id
    #[error("Duplicate node: {0}")]
    DuplicateNode(String),

    /// Link value is negative or not a number
    #[error("Invalid value {value} on link {from} -> {to}")]
    InvalidValue {
        /// Source node id
        from: String,
        /// Target node id
        to: String,
        /// Offending value
        value: f64,
    },

    /// Drawing area is empty or inverted
    #[error("Invalid extent: {0}")]
    InvalidExtent(String),

    /// Solver settings are unusable
    #[error("Invalid layout configuration: {0}")]
    InvalidConfig(String),
}

impl LayoutError {
    /// Check if the graph itself (rather than the configuration) was rejected
    pub fn is_precondition_error(&self) -> bool {
        matches!(
            self,
            LayoutError::CycleDetected(_)
                | LayoutError::MissingNode(_)
                | LayoutError::DuplicateNode(_)
                | LayoutError::InvalidValue { .. }
        )
    }

    /// Get error code for reporting
    pub fn error_code(&self) -> &'static str {
        match self {
            LayoutError::CycleDetected(_) => "CYCLE_DETECTED",
            LayoutError::MissingNode(_) => "NOT_FOUND",
            LayoutError::DuplicateNode(_) => "CONFLICT",
            LayoutError::InvalidValue { .. } => "VALIDATION_FAILED",
            LayoutError::InvalidExtent(_) | LayoutError::InvalidConfig(_) => "INVALID_CONFIG",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_detected() {
        let err = LayoutError::CycleDetected("a -> b -> a".to_string());
        assert_eq!(err.to_string(), "Cycle detected in graph: a -> b -> a");
        assert!(err.is_precondition_error());
        assert_eq!(err.error_code(), "CYCLE_DETECTED");
    }

    #[test]
    fn test_invalid_extent_is_config_error() {
        let err = LayoutError::InvalidExtent("x1 must exceed x0".to_string());
        assert!(!err.is_precondition_error());
        assert_eq!(err.error_code(), "INVALID_CONFIG");
    }
}
