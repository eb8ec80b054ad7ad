//! Handler sets: ordered maps from case identifier (or `_`) to a payload handler.

use indexmap::IndexMap;
use serde_json::Value;
use std::fmt;
use std::rc::Rc;
use tagfold_types::{ids, CaseId};

/// A one-argument function over a payload.
///
/// Shared so that one closure can serve several case identifiers.
pub type Handler<'a, R> = Rc<dyn Fn(&Value) -> R + 'a>;

/// Ordered mapping from case identifier to handler.
///
/// Inserting an existing key replaces its handler but keeps the key where it
/// first appeared, so merging several sets behaves like a shallow
/// merge-with-override: the rightmost handler wins, iteration order is the
/// order of first appearance.
pub struct Handlers<'a, R> {
    entries: IndexMap<CaseId, Handler<'a, R>>,
}

impl<'a, R> Handlers<'a, R> {
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Add (or replace) the handler for `id`.
    pub fn on<F>(mut self, id: impl Into<CaseId>, handler: F) -> Self
    where
        F: Fn(&Value) -> R + 'a,
    {
        self.insert(id, Rc::new(handler));
        self
    }

    /// Add (or replace) the wildcard handler.
    pub fn otherwise<F>(self, handler: F) -> Self
    where
        F: Fn(&Value) -> R + 'a,
    {
        self.on(ids::WILDCARD, handler)
    }

    pub fn insert(&mut self, id: impl Into<CaseId>, handler: Handler<'a, R>) {
        self.entries.insert(id.into(), handler);
    }

    /// Merge `other` into `self`; `other` wins on conflicting keys.
    pub fn merge(&mut self, other: Handlers<'a, R>) {
        for (id, handler) in other.entries {
            self.entries.insert(id, handler);
        }
    }

    pub fn get(&self, id: &str) -> Option<&Handler<'a, R>> {
        self.entries.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    /// Every key, wildcard included, in iteration order.
    pub fn keys(&self) -> impl Iterator<Item = &CaseId> {
        self.entries.keys()
    }

    /// Keys that name a case, i.e. everything but the wildcard.
    pub fn case_keys(&self) -> impl Iterator<Item = &CaseId> {
        self.entries.keys().filter(|k| !k.is_wildcard())
    }

    pub fn has_wildcard(&self) -> bool {
        self.entries.contains_key(ids::WILDCARD)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<R> Default for Handlers<'_, R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> Clone for Handlers<'_, R> {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
        }
    }
}

impl<R> fmt::Debug for Handlers<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.entries.keys()).finish()
    }
}

/// Left-to-right merge of several handler sets.
impl<'a, R> FromIterator<Handlers<'a, R>> for Handlers<'a, R> {
    fn from_iter<I: IntoIterator<Item = Handlers<'a, R>>>(iter: I) -> Self {
        let mut merged = Handlers::new();
        for group in iter {
            merged.merge(group);
        }
        merged
    }
}

/// Assign one handler to every listed case identifier.
pub fn case_group<'a, R, I, F>(case_ids: I, handler: F) -> Handlers<'a, R>
where
    I: IntoIterator,
    I::Item: Into<CaseId>,
    F: Fn(&Value) -> R + 'a,
{
    let shared: Handler<'a, R> = Rc::new(handler);
    let mut group = Handlers::new();
    for id in case_ids {
        group.insert(id, Rc::clone(&shared));
    }
    group
}
