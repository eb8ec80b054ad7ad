use crate::model::{MatcherConfig, TagfoldConfigV1, UnionConfig};
use anyhow::Context;
use std::collections::BTreeSet;
use tagfold_domain::policy::{FoldMode, RedefinePolicy};
use tagfold_types::{ids, CaseId, TypeName};

#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub on_redefine: Option<String>,
    /// Keep only this matcher.
    pub matcher: Option<String>,
}

/// A validated checked-union declaration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnionDef {
    pub type_name: TypeName,
    pub cases: Vec<CaseId>,
}

/// A validated matcher: which keys get a handler, and how strictly to fold.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatcherSpec {
    pub name: String,
    pub type_name: Option<TypeName>,
    pub cases: Vec<CaseId>,
    pub wildcard: bool,
    pub mode: FoldMode,
}

#[derive(Clone, Debug)]
pub struct ResolvedConfig {
    pub on_redefine: RedefinePolicy,
    /// Sorted by type name.
    pub unions: Vec<UnionDef>,
    /// Sorted by matcher name.
    pub matchers: Vec<MatcherSpec>,
}

pub fn resolve_config(cfg: TagfoldConfigV1, overrides: Overrides) -> anyhow::Result<ResolvedConfig> {
    if let Some(schema) = cfg.schema.as_deref()
        && schema != ids::SCHEMA_CONFIG_V1
    {
        anyhow::bail!(
            "unsupported config schema: {schema} (expected {})",
            ids::SCHEMA_CONFIG_V1
        );
    }

    let on_redefine = match overrides.on_redefine.as_deref().or(cfg.on_redefine.as_deref()) {
        Some(v) => parse_redefine_policy(v)?,
        None => RedefinePolicy::default(),
    };

    let mut unions = Vec::with_capacity(cfg.unions.len());
    for (type_name, uc) in &cfg.unions {
        unions.push(
            resolve_union(type_name, uc).with_context(|| format!("invalid union {type_name}"))?,
        );
    }

    let mut matchers = Vec::with_capacity(cfg.matchers.len());
    for (name, mc) in &cfg.matchers {
        if let Some(only) = overrides.matcher.as_deref()
            && only != name
        {
            continue;
        }
        let matcher = resolve_matcher(name, mc, &unions)
            .with_context(|| format!("invalid matcher {name}"))?;
        matchers.push(matcher);
    }

    if let Some(only) = overrides.matcher.as_deref()
        && matchers.is_empty()
    {
        anyhow::bail!("unknown matcher: {only}");
    }

    Ok(ResolvedConfig {
        on_redefine,
        unions,
        matchers,
    })
}

fn resolve_union(type_name: &str, uc: &UnionConfig) -> anyhow::Result<UnionDef> {
    if type_name.is_empty() {
        anyhow::bail!("type name must not be empty");
    }
    if uc.cases.is_empty() {
        anyhow::bail!("a union needs at least one case");
    }
    Ok(UnionDef {
        type_name: TypeName::new(type_name),
        cases: validate_cases(&uc.cases)?,
    })
}

fn resolve_matcher(name: &str, mc: &MatcherConfig, unions: &[UnionDef]) -> anyhow::Result<MatcherSpec> {
    let mode = match mc.mode.as_deref() {
        Some(v) => parse_mode(v)?,
        None => FoldMode::default(),
    };

    let type_name = mc.type_name.as_deref().map(TypeName::new);
    match &type_name {
        Some(t) if !unions.iter().any(|u| &u.type_name == t) => {
            anyhow::bail!("type {t} is not declared under [unions]");
        }
        None if mode != FoldMode::Unchecked => {
            anyhow::bail!("{mode} matchers must name a type");
        }
        _ => {}
    }

    if mc.cases.is_empty() && !mc.wildcard {
        anyhow::bail!("a matcher needs at least one case or a wildcard");
    }

    Ok(MatcherSpec {
        name: name.to_string(),
        type_name,
        cases: validate_cases(&mc.cases)?,
        wildcard: mc.wildcard,
        mode,
    })
}

fn validate_cases(cases: &[String]) -> anyhow::Result<Vec<CaseId>> {
    let mut seen = BTreeSet::new();
    for case in cases {
        if case.is_empty() {
            anyhow::bail!("case identifiers must not be empty");
        }
        if case == ids::WILDCARD {
            anyhow::bail!("`{}` is reserved for the wildcard handler", ids::WILDCARD);
        }
        if !seen.insert(case.as_str()) {
            anyhow::bail!("duplicate case: {case}");
        }
    }
    Ok(cases.iter().map(|c| CaseId::new(c.as_str())).collect())
}

fn parse_redefine_policy(v: &str) -> anyhow::Result<RedefinePolicy> {
    match v {
        "overwrite" => Ok(RedefinePolicy::Overwrite),
        "warn" => Ok(RedefinePolicy::Warn),
        other => anyhow::bail!("unknown on_redefine: {other} (expected overwrite|warn)"),
    }
}

fn parse_mode(v: &str) -> anyhow::Result<FoldMode> {
    match v {
        "unchecked" => Ok(FoldMode::Unchecked),
        "checked" => Ok(FoldMode::Checked),
        "strict" => Ok(FoldMode::Strict),
        other => anyhow::bail!("unknown mode: {other} (expected unchecked|checked|strict)"),
    }
}
