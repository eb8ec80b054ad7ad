//! The `check` use case: fold every record through every configured matcher and report.

use anyhow::Context;
use serde_json::Value;
use tagfold_domain::{fold_with_mode, CheckedUnion, Handlers, TypeRegistry};
use tagfold_settings::{MatcherSpec, Overrides, ResolvedConfig};
use tagfold_types::{
    ids, DispatchReport, Outcome, OutcomeCounts, RecordOutcome, ToolMeta, TypeTagged, Verdict,
    SCHEMA_REPORT_V1,
};

/// Input for the check use case.
#[derive(Clone, Debug)]
pub struct CheckInput<'a> {
    /// Config file contents (empty string if not found).
    pub config_text: &'a str,
    /// A JSON array of records, or a single record.
    pub records_text: &'a str,
    /// CLI overrides.
    pub overrides: Overrides,
}

/// Output from the check use case.
#[derive(Clone, Debug)]
pub struct CheckOutput {
    pub report: DispatchReport,
    /// The resolved configuration used.
    pub resolved_config: ResolvedConfig,
}

/// Run the check use case: parse config, register unions, fold records, produce report.
pub fn run_check(input: CheckInput<'_>) -> anyhow::Result<CheckOutput> {
    let cfg = if input.config_text.trim().is_empty() {
        tagfold_settings::TagfoldConfigV1::default()
    } else {
        tagfold_settings::parse_config_toml(input.config_text).context("parse config")?
    };
    let resolved =
        tagfold_settings::resolve_config(cfg, input.overrides.clone()).context("resolve config")?;

    let records = parse_records(input.records_text).context("parse records")?;
    let registry = build_registry(&resolved);

    let mut outcomes = Vec::new();
    for matcher in &resolved.matchers {
        let folder = fold_with_mode(&registry, matcher.mode, [matcher_handlers(matcher)]);
        for (index, record) in records.iter().enumerate() {
            if !applies_to(matcher, record) {
                continue;
            }
            let outcome = match folder.apply(record) {
                Ok(Some(handler)) => Outcome::Matched { handler },
                Ok(None) => Outcome::Unmatched,
                Err(err) => Outcome::Error {
                    code: err.code().to_string(),
                    message: err.to_string(),
                },
            };
            outcomes.push(RecordOutcome {
                index,
                matcher: matcher.name.clone(),
                mode: matcher.mode.as_str().to_string(),
                outcome,
            });
        }
    }

    let counts = OutcomeCounts::from_outcomes(&outcomes);
    let verdict = if counts.error == 0 {
        Verdict::Pass
    } else {
        Verdict::Fail
    };
    tracing::info!(
        records = records.len(),
        matchers = resolved.matchers.len(),
        matched = counts.matched,
        unmatched = counts.unmatched,
        error = counts.error,
        "check finished"
    );

    let report = DispatchReport {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: "tagfold".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        verdict,
        records_scanned: u32::try_from(records.len()).unwrap_or(u32::MAX),
        counts,
        outcomes,
    };

    Ok(CheckOutput {
        report,
        resolved_config: resolved,
    })
}

/// A fresh registry holding every configured union, registered in name order.
pub fn build_registry(resolved: &ResolvedConfig) -> TypeRegistry {
    let registry = TypeRegistry::with_policy(resolved.on_redefine);
    for def in &resolved.unions {
        CheckedUnion::define(&registry, def.type_name.clone(), def.cases.iter());
    }
    registry
}

/// Accepts a JSON array of records or a single record object.
pub fn parse_records(text: &str) -> anyhow::Result<Vec<Value>> {
    let value: Value = serde_json::from_str(text).context("records are not valid JSON")?;
    match value {
        Value::Array(items) => Ok(items),
        Value::Object(_) => Ok(vec![value]),
        other => anyhow::bail!(
            "expected a record or an array of records, got {}",
            json_kind(&other)
        ),
    }
}

/// Map verdict to exit code: 0 = pass, 2 = fail.
pub fn verdict_exit_code(verdict: Verdict) -> i32 {
    match verdict {
        Verdict::Pass => 0,
        Verdict::Fail => 2,
    }
}

/// Each handler returns the key it was registered under.
fn matcher_handlers(matcher: &MatcherSpec) -> Handlers<'static, String> {
    let handlers = matcher.cases.iter().fold(Handlers::new(), |handlers, case| {
        let key = case.to_string();
        handlers.on(case, move |_: &Value| key.clone())
    });
    if matcher.wildcard {
        handlers.otherwise(|_: &Value| ids::WILDCARD.to_string())
    } else {
        handlers
    }
}

/// Typed matchers skip records of other types. Untyped records still go through,
/// so checked folds can report them.
fn applies_to(matcher: &MatcherSpec, record: &Value) -> bool {
    match (&matcher.type_name, record.type_name().filter(|t| !t.is_empty())) {
        (Some(wanted), Some(actual)) => wanted == actual,
        _ => true,
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONFIG: &str = r#"
[unions.Data]
cases = ["None", "Loading", "Loaded"]

[unions.Route]
cases = ["Home", "Profile"]

[matchers.view]
type = "Data"
cases = ["None", "Loading"]
mode = "strict"

[matchers.loose]
type = "Data"
cases = ["Loading"]
mode = "checked"

[matchers.nav]
cases = ["Home"]
wildcard = true
mode = "unchecked"
"#;

    fn check(config_text: &str, records_text: &str, overrides: Overrides) -> CheckOutput {
        run_check(CheckInput {
            config_text,
            records_text,
            overrides,
        })
        .expect("run_check")
    }

    fn only(name: &str) -> Overrides {
        Overrides {
            matcher: Some(name.to_string()),
            ..Overrides::default()
        }
    }

    #[test]
    fn strict_matcher_reports_missing_cases() {
        let out = check(CONFIG, r#"[{"type": "Data", "id": "Loading"}]"#, only("view"));
        assert_eq!(out.report.verdict, Verdict::Fail);
        assert_eq!(
            out.report.outcomes[0].outcome,
            Outcome::Error {
                code: "incomplete_handler".to_string(),
                message: "Cases not handled for Data: Loaded".to_string(),
            }
        );
    }

    #[test]
    fn checked_matcher_matches_and_misses() {
        let records = r#"[
            {"type": "Data", "id": "Loading", "payload": 1},
            {"type": "Data", "id": "None"}
        ]"#;
        let out = check(CONFIG, records, only("loose"));
        assert_eq!(out.report.verdict, Verdict::Pass);
        assert_eq!(
            out.report.outcomes[0].outcome,
            Outcome::Matched {
                handler: "Loading".to_string()
            }
        );
        assert_eq!(out.report.outcomes[1].outcome, Outcome::Unmatched);
        assert_eq!(out.report.counts.matched, 1);
        assert_eq!(out.report.counts.unmatched, 1);
    }

    #[test]
    fn untyped_records_fail_checked_matchers() {
        let out = check(CONFIG, r#"{"id": "Loading"}"#, only("loose"));
        assert_eq!(out.report.records_scanned, 1);
        assert_eq!(
            out.report.outcomes[0].outcome,
            Outcome::Error {
                code: "missing_type".to_string(),
                message: r#"Invalid case, no type: {"id":"Loading"}"#.to_string(),
            }
        );
        assert_eq!(verdict_exit_code(out.report.verdict), 2);
    }

    #[test]
    fn records_with_undeclared_cases_fail() {
        let out = check(CONFIG, r#"{"type": "Data", "id": "Bogus"}"#, only("loose"));
        assert_eq!(
            out.report.outcomes[0].outcome,
            Outcome::Error {
                code: "undeclared_case".to_string(),
                message: "Invalid case Bogus for Data None,Loading,Loaded".to_string(),
            }
        );
        assert_eq!(out.report.verdict, Verdict::Fail);
    }

    #[test]
    fn typed_matchers_skip_other_types() {
        let out = check(CONFIG, r#"[{"type": "Route", "id": "Home"}]"#, only("loose"));
        assert!(out.report.outcomes.is_empty());
        assert_eq!(out.report.verdict, Verdict::Pass);
    }

    #[test]
    fn unchecked_matcher_falls_back_to_wildcard() {
        let records = r#"[{"id": "Home"}, {"id": "Profile", "params": 42}]"#;
        let out = check(CONFIG, records, only("nav"));
        let handlers: Vec<Outcome> = out.report.outcomes.into_iter().map(|o| o.outcome).collect();
        assert_eq!(
            handlers,
            vec![
                Outcome::Matched {
                    handler: "Home".to_string()
                },
                Outcome::Matched {
                    handler: "_".to_string()
                },
            ]
        );
    }

    #[test]
    fn every_matcher_sees_every_record() {
        let out = check(CONFIG, r#"[{"type": "Data", "id": "None"}]"#, Overrides::default());
        let seen: Vec<(&str, &str)> = out
            .report
            .outcomes
            .iter()
            .map(|o| (o.matcher.as_str(), o.mode.as_str()))
            .collect();
        assert_eq!(
            seen,
            vec![("loose", "checked"), ("nav", "unchecked"), ("view", "strict")]
        );
        assert_eq!(out.report.schema, SCHEMA_REPORT_V1);
        assert_eq!(out.report.tool.name, "tagfold");
    }

    #[test]
    fn empty_config_produces_empty_report() {
        let out = check("", "[]", Overrides::default());
        assert_eq!(out.report.verdict, Verdict::Pass);
        assert_eq!(out.report.records_scanned, 0);
        assert!(out.resolved_config.matchers.is_empty());
    }

    #[test]
    fn registry_holds_configured_unions() {
        let cfg = tagfold_settings::parse_config_toml(CONFIG).expect("parse");
        let resolved = tagfold_settings::resolve_config(cfg, Overrides::default()).expect("resolve");
        let registry = build_registry(&resolved);
        let names: Vec<String> = registry.type_names().iter().map(|t| t.to_string()).collect();
        assert_eq!(names, vec!["Data", "Route"]);
        assert_eq!(registry.cases("Route").map(|c| c.len()), Some(2));
    }

    #[test]
    fn bad_inputs_are_reported_with_context() {
        let err = run_check(CheckInput {
            config_text: CONFIG,
            records_text: "42",
            overrides: Overrides::default(),
        })
        .unwrap_err();
        let chain = format!("{err:#}");
        assert!(chain.contains("parse records"), "{chain}");
        assert!(chain.contains("got a number"), "{chain}");

        let err = run_check(CheckInput {
            config_text: "on_redefine = 3",
            records_text: "[]",
            overrides: Overrides::default(),
        })
        .unwrap_err();
        assert!(format!("{err:#}").contains("parse config"));
    }

    #[test]
    fn verdict_exit_codes() {
        assert_eq!(verdict_exit_code(Verdict::Pass), 0);
        assert_eq!(verdict_exit_code(Verdict::Fail), 2);
    }
}
