//! Scaffold Tree
//!
//! On-disk side of the generator: creating section units and auditing them.

pub mod audit;
pub mod materialize;

pub use audit::{AuditFinding, AuditReport, ConsistencyAuditor};
pub use materialize::{
    MaterializeReport, ScaffoldMaterializer, placeholder_contents, write_if_absent,
};
