//! Runtime tagged unions with three levels of folding safety.
//!
//! ```
//! use serde_json::{json, Value};
//! use tagfold::{fold, Handlers, Union};
//!
//! let route = Union::define(["Home", "Profile"]);
//! let describe = fold([Handlers::new()
//!     .on("Home", |_| "Home".to_string())
//!     .on("Profile", |p: &Value| format!("P{}", p["id"]))]);
//!
//! let profile = route.make("Profile", Some(json!({"id": 42}))).unwrap();
//! assert_eq!(describe.apply(&profile).as_deref(), Some("P42"));
//! ```

#![forbid(unsafe_code)]

pub use tagfold_domain::*;
pub use tagfold_types::{ids, normalize_payload};
