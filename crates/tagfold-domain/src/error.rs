use tagfold_types::{ids, CaseId, TypeName};
use thiserror::Error;

/// Why a checked or strict fold refused to dispatch.
///
/// The `Display` text is the stable contract callers match on; [`FoldError::kind`]
/// and [`FoldError::code`] expose the same information without string parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FoldError {
    /// The value carries no type name (absent or empty).
    #[error("Invalid case, no type: {rendered}")]
    MissingType {
        /// Compact JSON rendering of the offending value.
        rendered: String,
    },

    /// The value names a type the registry has no entry for.
    #[error("Invalid case, unregistered type: {type_name}")]
    UnregisteredType { type_name: TypeName },

    /// A handler key is not one of the type's declared cases.
    #[error("Invalid handler {key} for {type_name} {}", join(.cases))]
    InvalidHandler {
        /// First offending key, in handler iteration order.
        key: CaseId,
        type_name: TypeName,
        /// Every declared case of the type, in registration order.
        cases: Vec<CaseId>,
    },

    /// Some declared cases have no handler (strict folds only).
    #[error("Cases not handled for {type_name}: {}", join(.unhandled))]
    IncompleteHandler {
        type_name: TypeName,
        /// Missing cases, in registration order.
        unhandled: Vec<CaseId>,
    },

    /// The value's own `id` is absent or not one of its type's declared cases.
    #[error("Invalid case {} for {type_name} {}", .id.as_ref().map_or("(no id)", CaseId::as_str), join(.cases))]
    UndeclaredCase {
        id: Option<CaseId>,
        type_name: TypeName,
        cases: Vec<CaseId>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FoldErrorKind {
    MissingType,
    UnregisteredType,
    InvalidHandler,
    IncompleteHandler,
    UndeclaredCase,
}

impl FoldError {
    pub fn kind(&self) -> FoldErrorKind {
        match self {
            FoldError::MissingType { .. } => FoldErrorKind::MissingType,
            FoldError::UnregisteredType { .. } => FoldErrorKind::UnregisteredType,
            FoldError::InvalidHandler { .. } => FoldErrorKind::InvalidHandler,
            FoldError::IncompleteHandler { .. } => FoldErrorKind::IncompleteHandler,
            FoldError::UndeclaredCase { .. } => FoldErrorKind::UndeclaredCase,
        }
    }

    /// Stable snake_case code, see `tagfold_types::ids`.
    pub fn code(&self) -> &'static str {
        match self.kind() {
            FoldErrorKind::MissingType => ids::CODE_MISSING_TYPE,
            FoldErrorKind::UnregisteredType => ids::CODE_UNREGISTERED_TYPE,
            FoldErrorKind::InvalidHandler => ids::CODE_INVALID_HANDLER,
            FoldErrorKind::IncompleteHandler => ids::CODE_INCOMPLETE_HANDLER,
            FoldErrorKind::UndeclaredCase => ids::CODE_UNDECLARED_CASE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("Type {type_name} is already registered with cases {}", join(.cases))]
    AlreadyRegistered {
        type_name: TypeName,
        cases: Vec<CaseId>,
    },
}

impl RegistryError {
    pub fn code(&self) -> &'static str {
        match self {
            RegistryError::AlreadyRegistered { .. } => ids::CODE_ALREADY_REGISTERED,
        }
    }
}

pub(crate) fn join(cases: &[CaseId]) -> String {
    cases
        .iter()
        .map(CaseId::as_str)
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn case_ids(names: &[&str]) -> Vec<CaseId> {
        names.iter().map(|n| CaseId::from(*n)).collect()
    }

    #[test]
    fn messages_match_the_legacy_text() {
        let missing = FoldError::MissingType {
            rendered: r#"{"id":"Home","payload":{}}"#.to_string(),
        };
        assert_eq!(
            missing.to_string(),
            r#"Invalid case, no type: {"id":"Home","payload":{}}"#
        );

        let invalid = FoldError::InvalidHandler {
            key: CaseId::from("Nothing"),
            type_name: TypeName::from("Data"),
            cases: case_ids(&["None", "Loading", "Loaded"]),
        };
        assert_eq!(
            invalid.to_string(),
            "Invalid handler Nothing for Data None,Loading,Loaded"
        );

        let incomplete = FoldError::IncompleteHandler {
            type_name: TypeName::from("Data"),
            unhandled: case_ids(&["None", "Loaded"]),
        };
        assert_eq!(
            incomplete.to_string(),
            "Cases not handled for Data: None,Loaded"
        );
    }

    #[test]
    fn kinds_map_to_codes() {
        let err = FoldError::UnregisteredType {
            type_name: TypeName::from("Ghost"),
        };
        assert_eq!(err.kind(), FoldErrorKind::UnregisteredType);
        assert_eq!(err.code(), ids::CODE_UNREGISTERED_TYPE);
        assert_eq!(err.to_string(), "Invalid case, unregistered type: Ghost");
    }

    #[test]
    fn undeclared_case_names_the_id() {
        let err = FoldError::UndeclaredCase {
            id: Some(CaseId::from("Bogus")),
            type_name: TypeName::from("Data"),
            cases: case_ids(&["None", "Loaded"]),
        };
        assert_eq!(err.code(), ids::CODE_UNDECLARED_CASE);
        assert_eq!(err.to_string(), "Invalid case Bogus for Data None,Loaded");

        let err = FoldError::UndeclaredCase {
            id: None,
            type_name: TypeName::from("Data"),
            cases: case_ids(&["None"]),
        };
        assert_eq!(err.to_string(), "Invalid case (no id) for Data None");
    }

    #[test]
    fn empty_case_list_renders_empty() {
        assert_eq!(join(&[]), "");
    }
}
