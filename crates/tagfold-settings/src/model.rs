use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// `tagfold.toml` schema v1.
///
/// This is a *user-facing* config model: strings are kept as strings and validated during resolution.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TagfoldConfigV1 {
    /// Optional schema string for tooling (`tagfold.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// What happens when a type name is registered twice: `overwrite` (default) or `warn`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_redefine: Option<String>,

    /// Map of type name -> checked union declaration.
    #[serde(default)]
    pub unions: BTreeMap<String, UnionConfig>,

    /// Map of matcher name -> handler keys to fold records with.
    #[serde(default)]
    pub matchers: BTreeMap<String, MatcherConfig>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct UnionConfig {
    /// Case identifiers, in declaration order.
    pub cases: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct MatcherConfig {
    /// Type the matcher is written for. Required for `checked` and `strict`.
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_name: Option<String>,

    /// Handled case identifiers.
    #[serde(default)]
    pub cases: Vec<String>,

    /// Whether a wildcard handler catches everything else.
    #[serde(default)]
    pub wildcard: bool,

    /// `unchecked`, `checked` (default) or `strict`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
}
