//! Graph construction error types
//!
//! Raised by the graph builder while turning records into nodes and links.
//!
//! ```rust
//! use jmu_sankey::errors::GraphError;
//! use jmu_sankey::graph::NodeCategory;
//!
//! let err = GraphError::LinkTargetUndefined {
//!     node: "incomeItem3".to_string(),
//!     bucket: NodeCategory::IncomeCategory,
//! };
//! assert_eq!(
//!     err.to_string(),
//!     "Link target undefined: no incomeCategory node to pair with 'incomeItem3'"
//! );
//! ```

use thiserror::Error;

use crate::graph::NodeCategory;

/// Graph construction errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    /// A link would reference a node in an empty (or unmatched) bucket
    #[error("Link target undefined: no {bucket} node to pair with '{node}'")]
    LinkTargetUndefined {
        /// Node on the defined side of the link
        node: String,
        /// Bucket that has no node to offer
        bucket: NodeCategory,
    },

    /// A link would carry a negative flow
    #[error("Negative flow {value} on link {from} -> {to}")]
    NegativeFlow {
        /// Source node name
        from: String,
        /// Target node name
        to: String,
        /// Offending value
        value: f64,
    },

    /// Built graph failed its integrity check
    #[error("Invalid graph structure: {0}")]
    InvalidStructure(String),
}

impl GraphError {
    /// Get error code for reporting
    pub fn error_code(&self) -> &'static str {
        match self {
            GraphError::LinkTargetUndefined { .. } => "LINK_TARGET_UNDEFINED",
            GraphError::NegativeFlow { .. } => "NEGATIVE_FLOW",
            GraphError::InvalidStructure(_) => "INVALID_STRUCTURE",
        }
    }
}
