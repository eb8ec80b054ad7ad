use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Stable schema identifier for dispatch reports.
pub const SCHEMA_REPORT_V1: &str = "tagfold.report.v1";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Pass,
    Fail,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

/// What folding one record through one matcher produced.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Outcome {
    /// A handler ran; `handler` is the key it was registered under (`_` for the wildcard).
    Matched { handler: String },
    /// Neither a case handler nor a wildcard applied.
    Unmatched,
    /// Verification refused the fold.
    Error { code: String, message: String },
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct RecordOutcome {
    /// Position of the record in the input.
    pub index: usize,
    pub matcher: String,
    /// `unchecked`, `checked` or `strict`.
    pub mode: String,
    #[serde(flatten)]
    pub outcome: Outcome,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct OutcomeCounts {
    pub matched: u32,
    pub unmatched: u32,
    pub error: u32,
}

impl OutcomeCounts {
    pub fn from_outcomes(outcomes: &[RecordOutcome]) -> Self {
        let mut counts = OutcomeCounts::default();
        for o in outcomes {
            match o.outcome {
                Outcome::Matched { .. } => counts.matched += 1,
                Outcome::Unmatched => counts.unmatched += 1,
                Outcome::Error { .. } => counts.error += 1,
            }
        }
        counts
    }
}

/// Result of the `check` use case.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct DispatchReport {
    pub schema: String,
    pub tool: ToolMeta,
    pub verdict: Verdict,
    pub records_scanned: u32,
    pub counts: OutcomeCounts,
    pub outcomes: Vec<RecordOutcome>,
}
