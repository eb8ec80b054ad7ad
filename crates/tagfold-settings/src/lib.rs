//! Config parsing and resolution.
//!
//! This crate is intentionally IO-free: it parses and resolves configuration provided as strings.

#![forbid(unsafe_code)]

mod model;
mod resolve;

pub use model::{MatcherConfig, TagfoldConfigV1, UnionConfig};
pub use resolve::{MatcherSpec, Overrides, ResolvedConfig, UnionDef};

/// Parse `tagfold.toml` (or equivalent) into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<TagfoldConfigV1> {
    let cfg: TagfoldConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Resolve the effective config (validated unions and matchers, overrides applied).
pub fn resolve_config(cfg: TagfoldConfigV1, overrides: Overrides) -> anyhow::Result<ResolvedConfig> {
    resolve::resolve_config(cfg, overrides)
}

/// JSON schema of the config file, for editor tooling.
pub fn config_schema() -> schemars::Schema {
    schemars::schema_for!(TagfoldConfigV1)
}
