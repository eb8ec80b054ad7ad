//! Pure tagged-union engine (no IO).
//!
//! Input: union definitions and handler sets built by the caller, values from anywhere.
//! Output: handler results, or a verification failure for checked and strict folds.

#![forbid(unsafe_code)]

pub mod cases;
pub mod error;
pub mod maybe;
pub mod policy;
pub mod registry;
pub mod union;

mod engine;
mod verify;

#[cfg(test)]
mod proptest;
#[cfg(test)]
mod test_support;

pub use cases::{case_group, Handler, Handlers};
pub use engine::{fold, Fold};
pub use error::{FoldError, FoldErrorKind, RegistryError};
pub use policy::{FoldMode, RedefinePolicy};
pub use registry::TypeRegistry;
pub use union::{CheckedConstructor, CheckedUnion, Constructor, Union};
pub use verify::{fold_checked, fold_strict, fold_with_mode, CheckedFold};

pub use tagfold_types::{CaseId, CheckedVariant, Tagged, TypeName, TypeTagged, Variant};
