//! Optional values as a two-case union: `N` (nothing) and `Y` (just a payload).
//!
//! Every combinator is a fold over the value and accepts anything [`Tagged`],
//! so raw `{"id": "Y", "params": ..}` records work without deserializing first.
//! Results always go back through the constructors, so a `null` result becomes `{}`
//! and an "unchanged" branch is a fresh copy with the same tag and payload.
//! Values tagged with anything other than `N`/`Y` match no handler and every
//! combinator returns `None` for them.

use crate::cases::Handlers;
use crate::engine::fold;
use crate::union::Union;
use serde_json::Value;
use std::sync::LazyLock;
use tagfold_types::{ids, Tagged, Variant};

/// The predefined `{N, Y}` union. Unchecked: its shape never changes.
pub static MAYBE: LazyLock<Union> =
    LazyLock::new(|| Union::define([ids::MAYBE_NOTHING, ids::MAYBE_JUST]));

/// `N(payload)`.
pub fn nothing(payload: Option<Value>) -> Variant {
    Variant::new(ids::MAYBE_NOTHING, payload)
}

/// `Y(payload)`.
pub fn just(payload: Option<Value>) -> Variant {
    Variant::new(ids::MAYBE_JUST, payload)
}

/// `N` → `mb` unchanged, `Y` → `Y(f(payload))`.
pub fn map<V, F>(mb: &V, f: F) -> Option<Variant>
where
    V: Tagged + ?Sized,
    F: Fn(&Value) -> Value,
{
    fold([Handlers::new()
        .on(ids::MAYBE_NOTHING, |p: &Value| nothing(Some(p.clone())))
        .on(ids::MAYBE_JUST, |p| just(Some(f(p))))])
    .apply(mb)
}

/// Transform the payload on both branches, keeping the tag.
pub fn bimap<V, FN, FY>(mb: &V, fn_nothing: FN, fn_just: FY) -> Option<Variant>
where
    V: Tagged + ?Sized,
    FN: Fn(&Value) -> Value,
    FY: Fn(&Value) -> Value,
{
    fold([Handlers::new()
        .on(ids::MAYBE_NOTHING, |p| nothing(Some(fn_nothing(p))))
        .on(ids::MAYBE_JUST, |p| just(Some(fn_just(p))))])
    .apply(mb)
}

/// Collapse to a plain value, discarding the tag.
pub fn bifold<V, R, FN, FY>(mb: &V, fn_nothing: FN, fn_just: FY) -> Option<R>
where
    V: Tagged + ?Sized,
    FN: Fn(&Value) -> R,
    FY: Fn(&Value) -> R,
{
    fold([Handlers::new()
        .on(ids::MAYBE_NOTHING, fn_nothing)
        .on(ids::MAYBE_JUST, fn_just)])
    .apply(mb)
}

/// The complement of [`map`]: `N` → `N(f(payload))`, `Y` → `mb` unchanged.
pub fn unless<V, F>(mb: &V, f: F) -> Option<Variant>
where
    V: Tagged + ?Sized,
    F: Fn(&Value) -> Value,
{
    fold([Handlers::new()
        .on(ids::MAYBE_NOTHING, |p| nothing(Some(f(p))))
        .on(ids::MAYBE_JUST, |p: &Value| just(Some(p.clone())))])
    .apply(mb)
}

/// `Y(payload)` of the first element tagged like `target`, else `N()`.
///
/// Only tags are compared; `target`'s own payload is ignored.
pub fn contains<T, V>(target: &T, list: Option<&[V]>) -> Variant
where
    T: Tagged + ?Sized,
    V: Tagged,
{
    let wanted = target.case_id();
    match list.and_then(|items| items.iter().find(|it| it.case_id() == wanted)) {
        Some(found) => just(found.payload().cloned()),
        None => nothing(None),
    }
}
