//! The `explain` use case: look up failure code documentation.

use tagfold_types::explain::{self, Explanation};

#[derive(Clone, Debug)]
pub enum ExplainOutput {
    Found(Explanation),
    /// Unknown code; includes the codes that do exist.
    NotFound {
        code: String,
        available_codes: &'static [&'static str],
    },
}

pub fn run_explain(code: &str) -> ExplainOutput {
    match explain::lookup_explanation(code) {
        Some(exp) => ExplainOutput::Found(exp),
        None => ExplainOutput::NotFound {
            code: code.to_string(),
            available_codes: explain::all_codes(),
        },
    }
}

/// Format an explanation for terminal display.
pub fn format_explanation(exp: &Explanation) -> String {
    let mut out = String::new();

    out.push_str(exp.title);
    out.push('\n');
    out.push_str(&"=".repeat(exp.title.len()));
    out.push_str("\n\n");
    out.push_str(exp.description);
    out.push_str("\n\n");
    out.push_str("Remediation\n");
    out.push_str("-----------\n");
    out.push_str(exp.remediation);
    out.push_str("\n\n");
    out.push_str("Examples\n");
    out.push_str("--------\n\n");
    for (label, code) in [
        ("Before (fails):", exp.examples.before),
        ("After (folds):", exp.examples.after),
    ] {
        out.push_str(label);
        out.push_str("\n```rust\n");
        out.push_str(code);
        out.push_str("\n```\n\n");
    }
    out.truncate(out.trim_end().len());
    out.push('\n');

    out
}

pub fn format_not_found(code: &str, codes: &[&'static str]) -> String {
    let mut out = format!("Unknown code: {code}\n\nAvailable codes:\n");
    for code in codes {
        out.push_str(&format!("  - {code}\n"));
    }
    out
}
