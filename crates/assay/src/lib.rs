//! Assay: descriptive data-quality metrics for tabular datasets.
//!
//! Assay computes per-column semantic types, an extended "describe"
//! summary, validity scores from caller-supplied predicates, and
//! completeness scores along either table axis. Every operation is a
//! stateless, pure function over an in-memory [`Table`]; nothing is
//! mutated, nothing is persisted, and the operations compose in any order.
//!
//! # Example
//!
//! ```
//! use assay::{Axis, Column, Table, Value, degree_completeness, summarize};
//!
//! let table = Table::new(vec![
//!     Column::integer("age", vec![Some(25), Some(30), None, Some(40)]),
//!     Column::text("name", vec![Some("a"), Some("b"), Some("c"), Some("d")]),
//! ]).unwrap();
//!
//! let report = summarize(&table);
//! assert_eq!(report.get("count", "age"), Some(&Value::Int(3)));
//!
//! let completeness = degree_completeness(&table, Axis::Columns);
//! assert_eq!(completeness.get("age", "completeness"), Some(&Value::Float(0.75)));
//! ```

pub mod cast;
pub mod classify;
pub mod completeness;
pub mod error;
pub mod report;
pub mod summary;
pub mod table;
pub mod validity;

pub use cast::is_castable;
pub use classify::{SemanticType, classify, classify_all};
pub use completeness::{Axis, degree_completeness};
pub use error::{AssayError, Result};
pub use report::Report;
pub use summary::summarize;
pub use table::{Column, StorageType, Table, Value};
pub use validity::{ValidityCheck, ValidityMapper, degree_validity};
