//! Database collaborators for the performance-comparison path.

pub mod error;
pub mod probe;

pub use error::ConnectorError;
pub use probe::{Comparison, PerformanceProbe, PgExplainProbe, Variant, compare};
