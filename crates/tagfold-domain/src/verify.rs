use crate::cases::Handlers;
use crate::engine::{fold, Fold};
use crate::error::FoldError;
use crate::policy::FoldMode;
use crate::registry::TypeRegistry;
use tagfold_types::{CaseId, TypeName, TypeTagged};

/// A [`Fold`] that validates handlers against the registry before dispatching.
pub struct CheckedFold<'r, 'a, R> {
    registry: &'r TypeRegistry,
    fold: Fold<'a, R>,
    mode: FoldMode,
}

/// Require a registered type, and reject handler keys the type does not declare.
pub fn fold_checked<'r, 'a, R, I>(registry: &'r TypeRegistry, groups: I) -> CheckedFold<'r, 'a, R>
where
    I: IntoIterator<Item = Handlers<'a, R>>,
{
    fold_with_mode(registry, FoldMode::Checked, groups)
}

/// Everything [`fold_checked`] does, plus every declared case needs a handler.
pub fn fold_strict<'r, 'a, R, I>(registry: &'r TypeRegistry, groups: I) -> CheckedFold<'r, 'a, R>
where
    I: IntoIterator<Item = Handlers<'a, R>>,
{
    fold_with_mode(registry, FoldMode::Strict, groups)
}

/// Pick the safety level at run time. `FoldMode::Unchecked` never fails.
pub fn fold_with_mode<'r, 'a, R, I>(
    registry: &'r TypeRegistry,
    mode: FoldMode,
    groups: I,
) -> CheckedFold<'r, 'a, R>
where
    I: IntoIterator<Item = Handlers<'a, R>>,
{
    CheckedFold {
        registry,
        fold: fold(groups),
        mode,
    }
}

impl<'r, 'a, R> CheckedFold<'r, 'a, R> {
    pub fn mode(&self) -> FoldMode {
        self.mode
    }

    pub fn handlers(&self) -> &Handlers<'a, R> {
        self.fold.handlers()
    }

    /// Verify, then dispatch exactly like [`Fold::apply`].
    pub fn apply<V: TypeTagged + ?Sized>(&self, value: &V) -> Result<Option<R>, FoldError> {
        self.verify(value)?;
        Ok(self.fold.apply(value))
    }

    /// Run the checks without dispatching.
    ///
    /// Order is fixed: type presence, registration, handler validity,
    /// (strict only) exhaustiveness, then the value's own case.
    pub fn verify<V: TypeTagged + ?Sized>(&self, value: &V) -> Result<(), FoldError> {
        if self.mode == FoldMode::Unchecked {
            return Ok(());
        }

        let result = self.check(value);
        if let Err(err) = &result {
            tracing::debug!(mode = %self.mode, code = err.code(), error = %err, "fold refused");
        }
        result
    }

    fn check<V: TypeTagged + ?Sized>(&self, value: &V) -> Result<(), FoldError> {
        let Some(type_name) = value.type_name().filter(|t| !t.is_empty()) else {
            return Err(FoldError::MissingType {
                rendered: value.render(),
            });
        };

        let Some(all_cases) = self.registry.cases(type_name) else {
            return Err(FoldError::UnregisteredType {
                type_name: TypeName::new(type_name),
            });
        };

        let handlers = self.fold.handlers();
        if let Some(key) = handlers.case_keys().find(|k| !all_cases.contains(*k)) {
            return Err(FoldError::InvalidHandler {
                key: key.clone(),
                type_name: TypeName::new(type_name),
                cases: all_cases,
            });
        }

        if self.mode == FoldMode::Strict {
            let unhandled: Vec<CaseId> = all_cases
                .iter()
                .filter(|c| c.is_wildcard() || !handlers.contains(c.as_str()))
                .cloned()
                .collect();
            if !unhandled.is_empty() {
                return Err(FoldError::IncompleteHandler {
                    type_name: TypeName::new(type_name),
                    unhandled,
                });
            }
        }

        // Construction never checks the id, so a hand-built value can name any case.
        let id = value.case_id().filter(|id| !id.is_empty());
        if !id.is_some_and(|id| all_cases.iter().any(|c| c == id)) {
            return Err(FoldError::UndeclaredCase {
                id: id.map(CaseId::new),
                type_name: TypeName::new(type_name),
                cases: all_cases,
            });
        }

        Ok(())
    }
}
