//! Domain-specific error types for jmu-sankey
//!
//! Every stage of a render has its own error enum so that a failure can be
//! reported with the stage that produced it. None of them are recoverable for
//! the current render: plan execution stops at the first one.
//!
//! # Error Categories
//!
//! - **ImportExportError**: input document schema, file access, export rendering
//! - **GraphError**: record-to-graph construction (undefined link targets, negative flow)
//! - **LayoutError**: solver preconditions (cycles, unknown nodes, bad extent)
//!
//! # Examples
//!
//! ```rust
//! use jmu_sankey::errors::{GraphError, LayoutError};
//! use jmu_sankey::graph::NodeCategory;
//!
//! let err = GraphError::LinkTargetUndefined {
//!     node: "expenseItem0".to_string(),
//!     bucket: NodeCategory::ExpenseCategory,
//! };
//! assert_eq!(err.error_code(), "LINK_TARGET_UNDEFINED");
//!
//! let err = LayoutError::CycleDetected("a -> b -> a".to_string());
//! assert!(err.is_precondition_error());
//! ```

pub mod graph;
pub mod import_export;
pub mod layout;

pub use graph::GraphError;
pub use import_export::ImportExportError;
pub use layout::LayoutError;

/// Result type alias for graph construction
pub type GraphResult<T> = Result<T, GraphError>;

/// Result type alias for layout operations
pub type LayoutResult<T> = Result<T, LayoutError>;

/// Result type alias for import/export operations
pub type ImportExportResult<T> = Result<T, ImportExportError>;
