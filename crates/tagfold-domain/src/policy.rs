use std::fmt;

/// How much verification a fold performs before dispatching.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FoldMode {
    /// Dispatch only.
    Unchecked,
    /// Require a registered type and reject handler keys it does not declare.
    #[default]
    Checked,
    /// `Checked`, plus every declared case must have a handler.
    Strict,
}

impl FoldMode {
    pub fn as_str(self) -> &'static str {
        match self {
            FoldMode::Unchecked => "unchecked",
            FoldMode::Checked => "checked",
            FoldMode::Strict => "strict",
        }
    }
}

impl fmt::Display for FoldMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the registry does when a type name is registered a second time.
///
/// Both policies replace the previous case list (last writer wins); they only
/// differ in how loudly the replacement is reported.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RedefinePolicy {
    #[default]
    Overwrite,
    Warn,
}

impl RedefinePolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            RedefinePolicy::Overwrite => "overwrite",
            RedefinePolicy::Warn => "warn",
        }
    }
}
