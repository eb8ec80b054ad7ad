use crate::cases::Handlers;
use crate::registry::TypeRegistry;
use crate::union::{CheckedUnion, Union};

pub fn route() -> Union {
    Union::define(["Home", "Profile", "Login", "User"])
}

/// Fresh registry holding `Data { None, Loading, Loaded }` and `Other { One, Two }`.
pub fn data_and_other() -> (TypeRegistry, CheckedUnion, CheckedUnion) {
    let registry = TypeRegistry::new();
    let data = CheckedUnion::define(&registry, "Data", ["None", "Loading", "Loaded"]);
    let other = CheckedUnion::define(&registry, "Other", ["One", "Two"]);
    (registry, data, other)
}

/// Handlers that answer with the key they were registered under.
pub fn data_handlers(keys: &[&str]) -> Handlers<'static, String> {
    let mut handlers = Handlers::new();
    for key in keys {
        let label = key.to_string();
        handlers = handlers.on(*key, move |_| label.clone());
    }
    handlers
}
