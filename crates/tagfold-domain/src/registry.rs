//! Type registry: checked-union type name → its closed, ordered case list.

use crate::error::{join, RegistryError};
use crate::policy::RedefinePolicy;
use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::sync::OnceLock;
use tagfold_types::{CaseId, TypeName};

static GLOBAL: OnceLock<TypeRegistry> = OnceLock::new();

/// Written when a checked union is defined, read when a value is folded with verification.
///
/// Entries are never removed. Registering a name again replaces its case list.
#[derive(Debug, Default)]
pub struct TypeRegistry {
    entries: RwLock<BTreeMap<TypeName, Vec<CaseId>>>,
    policy: RedefinePolicy,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: RedefinePolicy) -> Self {
        Self {
            entries: RwLock::new(BTreeMap::new()),
            policy,
        }
    }

    /// Process-wide registry, for callers that do not thread one through.
    pub fn global() -> &'static TypeRegistry {
        GLOBAL.get_or_init(TypeRegistry::new)
    }

    pub fn policy(&self) -> RedefinePolicy {
        self.policy
    }

    /// Record `cases` for `type_name`, returning the list it replaced.
    pub fn register<I>(&self, type_name: impl Into<TypeName>, cases: I) -> Option<Vec<CaseId>>
    where
        I: IntoIterator,
        I::Item: Into<CaseId>,
    {
        let type_name = type_name.into();
        let cases: Vec<CaseId> = cases.into_iter().map(Into::into).collect();
        let mut entries = self.entries.write();

        let previous = entries.insert(type_name.clone(), cases.clone());
        match (&previous, self.policy) {
            (None, _) => {
                tracing::debug!(type_name = %type_name, cases = %join(&cases), "registered type");
            }
            (Some(old), RedefinePolicy::Overwrite) => {
                tracing::debug!(
                    type_name = %type_name,
                    old = %join(old),
                    new = %join(&cases),
                    "redefined type"
                );
            }
            (Some(old), RedefinePolicy::Warn) => {
                tracing::warn!(
                    type_name = %type_name,
                    old = %join(old),
                    new = %join(&cases),
                    "type registered twice; previous cases replaced"
                );
            }
        }
        previous
    }

    /// Like [`TypeRegistry::register`], but refuses to replace an existing entry.
    pub fn try_register<I>(&self, type_name: impl Into<TypeName>, cases: I) -> Result<(), RegistryError>
    where
        I: IntoIterator,
        I::Item: Into<CaseId>,
    {
        let type_name = type_name.into();
        let mut entries = self.entries.write();
        if let Some(existing) = entries.get(&type_name) {
            return Err(RegistryError::AlreadyRegistered {
                cases: existing.clone(),
                type_name,
            });
        }

        let cases: Vec<CaseId> = cases.into_iter().map(Into::into).collect();
        tracing::debug!(type_name = %type_name, cases = %join(&cases), "registered type");
        entries.insert(type_name, cases);
        Ok(())
    }

    /// Declared cases of `type_name`, in registration order.
    pub fn cases(&self, type_name: &str) -> Option<Vec<CaseId>> {
        self.entries.read().get(type_name).cloned()
    }

    pub fn contains(&self, type_name: &str) -> bool {
        self.entries.read().contains_key(type_name)
    }

    /// Registered type names, sorted.
    pub fn type_names(&self) -> Vec<TypeName> {
        self.entries.read().keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}
