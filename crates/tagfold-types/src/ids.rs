//! Stable identifiers for reserved case keys and failure codes.
//!
//! Codes are short snake_case discriminators; they appear in reports and in `tagfold explain`.

/// Reserved handler key matched when no case-specific handler exists.
pub const WILDCARD: &str = "_";

// Cases of the predefined optional-value union
pub const MAYBE_NOTHING: &str = "N";
pub const MAYBE_JUST: &str = "Y";

// Codes: verification layer
pub const CODE_MISSING_TYPE: &str = "missing_type";
pub const CODE_UNREGISTERED_TYPE: &str = "unregistered_type";
pub const CODE_INVALID_HANDLER: &str = "invalid_handler";
pub const CODE_INCOMPLETE_HANDLER: &str = "incomplete_handler";
pub const CODE_UNDECLARED_CASE: &str = "undeclared_case";

// Codes: registry
pub const CODE_ALREADY_REGISTERED: &str = "already_registered";

// Schemas
pub const SCHEMA_CONFIG_V1: &str = "tagfold.config.v1";
