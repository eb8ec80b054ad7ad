//! Union factories: constructors for unchecked and checked unions.
//!
//! Construction is total and performs no validation beyond dropping empty
//! identifiers at definition time, so no constructor ever yields an empty `id`.
//! A checked union records its case list in a [`TypeRegistry`] when it is
//! defined; checking happens later, when a value is folded with
//! [`crate::fold_checked`] or [`crate::fold_strict`].

use crate::registry::TypeRegistry;
use serde_json::Value;
use tagfold_types::{CaseId, CheckedVariant, TypeName, Variant};

/// Builds [`Variant`]s of one case.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Constructor {
    id: CaseId,
}

impl Constructor {
    pub fn id(&self) -> &CaseId {
        &self.id
    }

    /// `None` and `Some(Value::Null)` both produce the payload `{}`.
    pub fn call(&self, payload: Option<Value>) -> Variant {
        Variant::new(self.id.clone(), payload)
    }

    pub fn empty(&self) -> Variant {
        self.call(None)
    }

    pub fn with(&self, payload: impl Into<Value>) -> Variant {
        self.call(Some(payload.into()))
    }
}

/// An unchecked union: case identifier → constructor, in declaration order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Union {
    constructors: Vec<Constructor>,
}

impl Union {
    pub fn define<I>(case_ids: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<CaseId>,
    {
        Union {
            constructors: declared_ids(case_ids)
                .map(|id| Constructor { id })
                .collect(),
        }
    }

    pub fn get(&self, id: &str) -> Option<&Constructor> {
        self.constructors.iter().find(|c| c.id == id)
    }

    /// Construct a value of case `id`; `None` if the union does not declare it.
    pub fn make(&self, id: &str, payload: Option<Value>) -> Option<Variant> {
        self.get(id).map(|c| c.call(payload))
    }

    pub fn cases(&self) -> impl Iterator<Item = &CaseId> {
        self.constructors.iter().map(|c| &c.id)
    }

    pub fn constructors(&self) -> &[Constructor] {
        &self.constructors
    }
}

/// Builds [`CheckedVariant`]s of one case of a named type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheckedConstructor {
    type_name: TypeName,
    id: CaseId,
}

impl CheckedConstructor {
    pub fn id(&self) -> &CaseId {
        &self.id
    }

    pub fn type_name(&self) -> &TypeName {
        &self.type_name
    }

    pub fn call(&self, payload: Option<Value>) -> CheckedVariant {
        CheckedVariant::new(self.type_name.clone(), self.id.clone(), payload)
    }

    pub fn empty(&self) -> CheckedVariant {
        self.call(None)
    }

    pub fn with(&self, payload: impl Into<Value>) -> CheckedVariant {
        self.call(Some(payload.into()))
    }
}

/// A checked union whose case list lives in a [`TypeRegistry`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheckedUnion {
    type_name: TypeName,
    constructors: Vec<CheckedConstructor>,
}

impl CheckedUnion {
    /// Define the union and register its cases under `type_name`.
    ///
    /// An existing entry for `type_name` is replaced (see [`TypeRegistry::register`]).
    pub fn define<I>(registry: &TypeRegistry, type_name: impl Into<TypeName>, case_ids: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<CaseId>,
    {
        let type_name = type_name.into();
        let cases: Vec<CaseId> = declared_ids(case_ids).collect();
        registry.register(type_name.clone(), cases.iter().cloned());

        CheckedUnion {
            constructors: cases
                .into_iter()
                .map(|id| CheckedConstructor {
                    type_name: type_name.clone(),
                    id,
                })
                .collect(),
            type_name,
        }
    }

    pub fn type_name(&self) -> &TypeName {
        &self.type_name
    }

    pub fn get(&self, id: &str) -> Option<&CheckedConstructor> {
        self.constructors.iter().find(|c| c.id == id)
    }

    pub fn make(&self, id: &str, payload: Option<Value>) -> Option<CheckedVariant> {
        self.get(id).map(|c| c.call(payload))
    }

    pub fn cases(&self) -> impl Iterator<Item = &CaseId> {
        self.constructors.iter().map(|c| &c.id)
    }
}

/// Empty identifiers are dropped with a warning.
fn declared_ids<I>(case_ids: I) -> impl Iterator<Item = CaseId>
where
    I: IntoIterator,
    I::Item: Into<CaseId>,
{
    case_ids.into_iter().map(Into::into).filter(|id: &CaseId| {
        if id.as_str().is_empty() {
            tracing::warn!("ignoring empty case identifier");
            return false;
        }
        true
    })
}
