use crate::ids;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::borrow::Borrow;
use std::fmt;

/// Identifier of one case of a tagged union.
///
/// Declaration order of case identifiers is significant: error messages and
/// exhaustiveness reports list cases in the order they were declared.
#[derive(
    Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(transparent)]
pub struct CaseId(String);

impl CaseId {
    pub fn new<S: Into<String>>(s: S) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_wildcard(&self) -> bool {
        self.0 == ids::WILDCARD
    }
}

impl fmt::Display for CaseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for CaseId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for CaseId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CaseId {
    fn from(value: &str) -> Self {
        CaseId::new(value)
    }
}

impl From<String> for CaseId {
    fn from(value: String) -> Self {
        CaseId(value)
    }
}

impl From<&CaseId> for CaseId {
    fn from(value: &CaseId) -> Self {
        value.clone()
    }
}

impl PartialEq<str> for CaseId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for CaseId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Name a checked union is registered under.
#[derive(
    Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(transparent)]
pub struct TypeName(String);

impl TypeName {
    pub fn new<S: Into<String>>(s: S) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for TypeName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TypeName {
    fn from(value: &str) -> Self {
        TypeName::new(value)
    }
}

impl From<String> for TypeName {
    fn from(value: String) -> Self {
        TypeName(value)
    }
}

impl PartialEq<str> for TypeName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for TypeName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Apply the payload defaulting rule shared by every constructor.
///
/// An absent argument and an explicit `null` both become the empty object `{}`.
/// Anything else, including `false`, `0`, `""` and `[]`, is kept exactly.
pub fn normalize_payload(payload: Option<Value>) -> Value {
    match payload {
        None | Some(Value::Null) => Value::Object(Map::new()),
        Some(v) => v,
    }
}

/// Anything exposing a case identifier and a payload.
///
/// The fold engine only ever talks to this trait, so records that never went
/// through a constructor (deserialized from storage, received over the wire)
/// fold exactly like constructed ones.
pub trait Tagged {
    fn case_id(&self) -> Option<&str>;
    fn payload(&self) -> Option<&Value>;
}

/// A [`Tagged`] value that may also carry the name of its checked union.
pub trait TypeTagged: Tagged {
    fn type_name(&self) -> Option<&str>;

    /// Compact JSON rendering used in diagnostics.
    fn render(&self) -> String;
}

impl<T: Tagged + ?Sized> Tagged for &T {
    fn case_id(&self) -> Option<&str> {
        (**self).case_id()
    }

    fn payload(&self) -> Option<&Value> {
        (**self).payload()
    }
}

impl<T: TypeTagged + ?Sized> TypeTagged for &T {
    fn type_name(&self) -> Option<&str> {
        (**self).type_name()
    }

    fn render(&self) -> String {
        (**self).render()
    }
}

/// A value of an unchecked union: `{ id, payload }`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Variant {
    pub id: CaseId,
    /// `params` is the legacy key some producers still emit.
    #[serde(default, alias = "params")]
    pub payload: Value,
}

impl Variant {
    pub fn new(id: impl Into<CaseId>, payload: Option<Value>) -> Self {
        Self {
            id: id.into(),
            payload: normalize_payload(payload),
        }
    }

    pub fn to_json(&self) -> Value {
        let mut obj = Map::new();
        obj.insert("id".to_string(), Value::String(self.id.to_string()));
        obj.insert("payload".to_string(), self.payload.clone());
        Value::Object(obj)
    }
}

impl Tagged for Variant {
    fn case_id(&self) -> Option<&str> {
        Some(self.id.as_str())
    }

    fn payload(&self) -> Option<&Value> {
        Some(&self.payload)
    }
}

/// Unchecked variants have no type, so checked folding reports them as such.
impl TypeTagged for Variant {
    fn type_name(&self) -> Option<&str> {
        None
    }

    fn render(&self) -> String {
        self.to_json().to_string()
    }
}

/// A value of a checked union: `{ type, id, payload }`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CheckedVariant {
    #[serde(rename = "type")]
    pub type_name: TypeName,
    pub id: CaseId,
    #[serde(default, alias = "params")]
    pub payload: Value,
}

impl CheckedVariant {
    pub fn new(type_name: impl Into<TypeName>, id: impl Into<CaseId>, payload: Option<Value>) -> Self {
        Self {
            type_name: type_name.into(),
            id: id.into(),
            payload: normalize_payload(payload),
        }
    }

    pub fn to_json(&self) -> Value {
        let mut obj = Map::new();
        obj.insert("type".to_string(), Value::String(self.type_name.to_string()));
        obj.insert("id".to_string(), Value::String(self.id.to_string()));
        obj.insert("payload".to_string(), self.payload.clone());
        Value::Object(obj)
    }
}

impl Tagged for CheckedVariant {
    fn case_id(&self) -> Option<&str> {
        Some(self.id.as_str())
    }

    fn payload(&self) -> Option<&Value> {
        Some(&self.payload)
    }
}

impl TypeTagged for CheckedVariant {
    fn type_name(&self) -> Option<&str> {
        Some(self.type_name.as_str())
    }

    fn render(&self) -> String {
        self.to_json().to_string()
    }
}

/// Raw records: `id`, `payload` (or `params`) and `type` are read when present
/// and are strings; anything else reads as absent. `Value::Null` is the absent value.
impl Tagged for Value {
    fn case_id(&self) -> Option<&str> {
        self.get("id").and_then(Value::as_str)
    }

    fn payload(&self) -> Option<&Value> {
        self.get("payload").or_else(|| self.get("params"))
    }
}

impl TypeTagged for Value {
    fn type_name(&self) -> Option<&str> {
        self.get("type").and_then(Value::as_str)
    }

    fn render(&self) -> String {
        self.to_string()
    }
}
