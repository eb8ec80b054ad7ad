//! Explain registry for failure codes.
//!
//! Maps codes to human-readable explanations with remediation guidance.

use crate::ids;

/// Explanation entry for a failure code.
#[derive(Debug, Clone)]
pub struct Explanation {
    /// Short description of the code.
    pub title: &'static str,
    /// When the failure is raised.
    pub description: &'static str,
    /// How to fix it.
    pub remediation: &'static str,
    /// Before/after code examples.
    pub examples: ExamplePair,
}

/// Before and after code examples.
#[derive(Debug, Clone)]
pub struct ExamplePair {
    /// Code that raises the failure.
    pub before: &'static str,
    /// Code that folds cleanly.
    pub after: &'static str,
}

/// Look up an explanation by code.
///
/// Returns `None` if the code is not recognized.
pub fn lookup_explanation(code: &str) -> Option<Explanation> {
    match code {
        ids::CODE_MISSING_TYPE => Some(explain_missing_type()),
        ids::CODE_UNREGISTERED_TYPE => Some(explain_unregistered_type()),
        ids::CODE_INVALID_HANDLER => Some(explain_invalid_handler()),
        ids::CODE_INCOMPLETE_HANDLER => Some(explain_incomplete_handler()),
        ids::CODE_UNDECLARED_CASE => Some(explain_undeclared_case()),
        ids::CODE_ALREADY_REGISTERED => Some(explain_already_registered()),
        _ => None,
    }
}

/// List all known codes.
pub fn all_codes() -> &'static [&'static str] {
    &[
        ids::CODE_MISSING_TYPE,
        ids::CODE_UNREGISTERED_TYPE,
        ids::CODE_INVALID_HANDLER,
        ids::CODE_INCOMPLETE_HANDLER,
        ids::CODE_UNDECLARED_CASE,
        ids::CODE_ALREADY_REGISTERED,
    ]
}

fn explain_missing_type() -> Explanation {
    Explanation {
        title: "Missing Type",
        description: "\
Checked and strict folds validate handlers against the case list registered for the value's type.
A value without a `type` (or with an empty one) cannot be validated, so the fold is refused.

Values built by an unchecked `Union` never carry a type.",
        remediation: "\
Build the value with the `CheckedUnion` of its type, or add the `type` field to records produced \
elsewhere. Use an unchecked `fold` for values that are not meant to be checked.",
        examples: ExamplePair {
            before: r#"let route = Union::define(["Home", "Profile"]);
fold_checked(&registry, [handlers]).apply(&route.make("Home", None).unwrap())?;"#,
            after: r#"let data = CheckedUnion::define(&registry, "Data", ["None", "Loading"]);
fold_checked(&registry, [handlers]).apply(&data.make("Loading", None).unwrap())?;"#,
        },
    }
}

fn explain_unregistered_type() -> Explanation {
    Explanation {
        title: "Unregistered Type",
        description: "\
The value names a type that the registry used for the fold has never seen.",
        remediation: "\
Define the checked union against the same registry the fold reads from, before folding.",
        examples: ExamplePair {
            before: r#"let registry = TypeRegistry::new();
fold_checked(&registry, [handlers]).apply(&json!({"type": "Data", "id": "None"}))?;"#,
            after: r#"let registry = TypeRegistry::new();
CheckedUnion::define(&registry, "Data", ["None", "Loading", "Loaded"]);
fold_checked(&registry, [handlers]).apply(&json!({"type": "Data", "id": "None"}))?;"#,
        },
    }
}

fn explain_invalid_handler() -> Explanation {
    Explanation {
        title: "Invalid Handler",
        description: "\
A handler is keyed by a case identifier that the value's type does not declare. This usually means \
a typo, a renamed case, or a handler set written for a different type.

The wildcard `_` is always accepted.",
        remediation: "\
Rename or remove the handler so every key is one of the type's declared cases.",
        examples: ExamplePair {
            before: r#"Handlers::new().on("Nothing", |_| "Nothing")"#,
            after: r#"Handlers::new().on("None", |_| "Nothing")"#,
        },
    }
}

fn explain_incomplete_handler() -> Explanation {
    Explanation {
        title: "Incomplete Handler",
        description: "\
A strict fold requires one handler per declared case. The wildcard does not count toward coverage.",
        remediation: "\
Add handlers for the listed cases, or use a checked fold with a wildcard if partial coverage is intended.",
        examples: ExamplePair {
            before: r#"fold_strict(&registry, [Handlers::new()
    .on("None", |_| "empty")
    .on("Loading", |_| "wait")])"#,
            after: r#"fold_strict(&registry, [Handlers::new()
    .on("None", |_| "empty")
    .on("Loading", |_| "wait")
    .on("Loaded", |_| "done")])"#,
        },
    }
}

fn explain_undeclared_case() -> Explanation {
    Explanation {
        title: "Undeclared Case",
        description: "\
The value's `id` is missing, empty, or not one of the cases registered for its `type`. Constructors \
only build declared cases, so this comes from records produced elsewhere or from a type that was \
redefined after the value was built.

A wildcard handler does not make an undeclared case acceptable.",
        remediation: "\
Fix the record's `id`, or add the case to the union definition.",
        examples: ExamplePair {
            before: r#"fold_checked(&registry, [handlers]).apply(&json!({"type": "Data", "id": "Bogus"}))?;"#,
            after: r#"fold_checked(&registry, [handlers]).apply(&json!({"type": "Data", "id": "Loaded"}))?;"#,
        },
    }
}

fn explain_already_registered() -> Explanation {
    Explanation {
        title: "Already Registered",
        description: "\
`try_register` refuses to replace an existing registry entry. Plain registration (and \
`CheckedUnion::define`) overwrites the previous case list instead.",
        remediation: "\
Give the union a distinct type name, or use `register` if redefinition is intended.",
        examples: ExamplePair {
            before: r#"registry.try_register("Data", ["None"])?;
registry.try_register("Data", ["None", "Loaded"])?;"#,
            after: r#"registry.try_register("Data", ["None"])?;
registry.try_register("DataV2", ["None", "Loaded"])?;"#,
        },
    }
}
