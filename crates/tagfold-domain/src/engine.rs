use crate::cases::Handlers;
use serde_json::Value;
use tagfold_types::{ids, Tagged};

/// Payload handed to handlers when the value (or its payload) is absent.
static ABSENT: Value = Value::Null;

/// Unchecked dispatch over merged handler sets.
pub struct Fold<'a, R> {
    handlers: Handlers<'a, R>,
}

/// Merge `groups` left to right (rightmost wins) into one dispatcher.
pub fn fold<'a, R, I>(groups: I) -> Fold<'a, R>
where
    I: IntoIterator<Item = Handlers<'a, R>>,
{
    Fold {
        handlers: groups.into_iter().collect(),
    }
}

impl<'a, R> Fold<'a, R> {
    pub fn handlers(&self) -> &Handlers<'a, R> {
        &self.handlers
    }

    pub fn apply<V: Tagged + ?Sized>(&self, value: &V) -> Option<R> {
        self.apply_opt(Some(value))
    }

    /// Dispatch on `value?.id`: the case handler, else the wildcard, else `None`.
    ///
    /// Never fails. The handler receives `value?.payload`, which is `null`
    /// when either the value or its payload is missing.
    pub fn apply_opt<V: Tagged + ?Sized>(&self, value: Option<&V>) -> Option<R> {
        let key = value.and_then(|v| v.case_id());
        let (matched, handler) = match key.and_then(|k| self.handlers.get(k).map(|h| (k, h))) {
            Some(found) => found,
            None => match self.handlers.get(ids::WILDCARD) {
                Some(h) => (ids::WILDCARD, h),
                None => {
                    tracing::trace!(key = ?key, "no handler matched");
                    return None;
                }
            },
        };
        tracing::trace!(key = ?key, handler = matched, "dispatching");

        let payload = value.and_then(|v| v.payload()).unwrap_or(&ABSENT);
        Some(handler(payload))
    }
}

impl<'a, R> From<Handlers<'a, R>> for Fold<'a, R> {
    fn from(handlers: Handlers<'a, R>) -> Self {
        Fold { handlers }
    }
}
