//! Stable value types and IDs used across the tagfold workspace.
//!
//! This crate is intentionally boring:
//! - case identifiers, type names and the tagged records themselves
//! - the `Tagged` capability that lets any record shape be folded
//! - stable string IDs and failure codes
//! - dispatch report DTOs
//! - explain registry for failure codes

#![forbid(unsafe_code)]

pub mod explain;
pub mod ids;
pub mod report;
pub mod variant;

pub use explain::{lookup_explanation, ExamplePair, Explanation};
pub use report::{
    DispatchReport, Outcome, OutcomeCounts, RecordOutcome, ToolMeta, Verdict, SCHEMA_REPORT_V1,
};
pub use variant::{normalize_payload, CaseId, CheckedVariant, Tagged, TypeName, TypeTagged, Variant};
