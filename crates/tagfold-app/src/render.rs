//! Render use cases: Markdown and plain text from in-memory reports, plus the JSON report file.

use anyhow::Context;
use camino::Utf8Path;
use tagfold_settings::ResolvedConfig;
use tagfold_types::{DispatchReport, Outcome, Verdict};

pub fn render_markdown(report: &DispatchReport) -> String {
    let mut out = String::new();

    out.push_str("# Tagfold dispatch report\n\n");
    let verdict = match report.verdict {
        Verdict::Pass => "PASS",
        Verdict::Fail => "FAIL",
    };
    out.push_str(&format!(
        "- Verdict: **{}**\n- Records: {}\n- Outcomes: {} matched / {} unmatched / {} error\n\n",
        verdict,
        report.records_scanned,
        report.counts.matched,
        report.counts.unmatched,
        report.counts.error
    ));

    if report.outcomes.is_empty() {
        out.push_str("No outcomes.\n");
        return out;
    }

    out.push_str("| record | matcher | mode | status | detail |\n");
    out.push_str("|---|---|---|---|---|\n");
    for o in &report.outcomes {
        let (status, detail) = match &o.outcome {
            Outcome::Matched { handler } => ("matched", format!("`{handler}`")),
            Outcome::Unmatched => ("unmatched", "-".to_string()),
            Outcome::Error { code, message } => ("error", format!("`{code}`: {message}")),
        };
        out.push_str(&format!(
            "| {} | {} | {} | {} | {} |\n",
            o.index,
            o.matcher,
            o.mode,
            status,
            detail.replace('|', "\\|")
        ));
    }

    out
}

/// One line per configured union: `Type: Case, Case`.
pub fn render_registry(resolved: &ResolvedConfig) -> String {
    if resolved.unions.is_empty() {
        return "No unions configured.\n".to_string();
    }
    let mut out = String::new();
    for def in &resolved.unions {
        let cases: Vec<&str> = def.cases.iter().map(|c| c.as_str()).collect();
        out.push_str(&format!("{}: {}\n", def.type_name, cases.join(", ")));
    }
    out
}

pub fn serialize_report(report: &DispatchReport) -> anyhow::Result<Vec<u8>> {
    serde_json::to_vec_pretty(report).context("serialize report")
}

pub fn write_report(path: &Utf8Path, report: &DispatchReport) -> anyhow::Result<()> {
    let data = serialize_report(report)?;
    write_bytes(path, &data).with_context(|| format!("write report: {path}"))
}

fn write_bytes(path: &Utf8Path, data: &[u8]) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_str().is_empty()
    {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {parent}"))?;
    }
    std::fs::write(path, data)?;
    Ok(())
}
