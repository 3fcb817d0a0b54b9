use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::{DateTime, Utc};

mod display;
mod error;
mod kind;

pub(crate) use display::format_num;
pub use error::CastError;
pub use kind::{CastTarget, ValueKind};

static INSTANCE_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

pub(crate) fn next_instance_id() -> u64 {
    INSTANCE_ID_COUNTER.fetch_add(1, Ordering::Relaxed)
}

/// An XML-element-like wrapper: an element name plus its flattened text
/// content. Casting rules treat the text content as the element's value.
#[derive(Debug, Clone, PartialEq)]
pub struct XmlElement {
    name: String,
    text: String,
}

impl XmlElement {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// A fluent string wrapper. Operations return a new `Stringy`, so
/// normalization steps chain without intermediate bindings.
#[derive(Debug, Clone, PartialEq)]
pub struct Stringy(String);

impl Stringy {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whitespace-trimmed copy.
    pub fn trimmed(&self) -> Self {
        Self(self.0.trim().to_string())
    }

    /// Lowercased copy.
    pub fn lowered(&self) -> Self {
        Self(self.0.to_lowercase())
    }
}

impl std::fmt::Display for Stringy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A runtime value. The closed set of variants is matched exhaustively by
/// the cast dispatcher, so there is no "unclassifiable value" path.
#[derive(Debug, Clone)]
pub enum Value {
    Nil,
    Bool(bool),
    Int(i64),
    Num(f64),
    Str(String),
    Array(Arc<Vec<Value>>),
    DateTime(DateTime<Utc>),
    Xml(Arc<XmlElement>),
    Stringy(Arc<Stringy>),
    Instance {
        class_name: String,
        attributes: Arc<HashMap<String, Value>>,
        id: u64,
    },
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Nil, Value::Nil) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Num(a), Value::Num(b)) => (a.is_nan() && b.is_nan()) || a == b,
            (Value::Int(a), Value::Num(b)) => (*a as f64) == *b,
            (Value::Num(a), Value::Int(b)) => *a == (*b as f64),
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => a == b,
            (Value::DateTime(a), Value::DateTime(b)) => a == b,
            (Value::Xml(a), Value::Xml(b)) => a == b,
            (Value::Stringy(a), Value::Stringy(b)) => a == b,
            (
                Value::Instance {
                    class_name: a,
                    attributes: aa,
                    ..
                },
                Value::Instance {
                    class_name: b,
                    attributes: ba,
                    ..
                },
            ) => a == b && aa == ba,
            _ => false,
        }
    }
}

impl Value {
    // ---- Arc-wrapping convenience constructors ----
    pub fn array(items: Vec<Value>) -> Self {
        Value::Array(Arc::new(items))
    }

    pub fn xml(name: impl Into<String>, text: impl Into<String>) -> Self {
        Value::Xml(Arc::new(XmlElement::new(name, text)))
    }

    pub fn stringy(s: impl Into<String>) -> Self {
        Value::Stringy(Arc::new(Stringy::new(s)))
    }

    pub fn make_instance(class_name: impl Into<String>, attributes: HashMap<String, Value>) -> Self {
        Value::Instance {
            class_name: class_name.into(),
            attributes: Arc::new(attributes),
            id: next_instance_id(),
        }
    }

    /// Classify this value's runtime kind.
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Nil => ValueKind::Nil,
            Value::Bool(_) => ValueKind::Bool,
            Value::Int(_) => ValueKind::Int,
            Value::Num(_) => ValueKind::Num,
            Value::Str(_) => ValueKind::Str,
            Value::Array(_) => ValueKind::Array,
            Value::DateTime(_) => ValueKind::DateTime,
            Value::Xml(_) | Value::Stringy(_) | Value::Instance { .. } => ValueKind::Object,
        }
    }

    /// The concrete runtime type name (used in error messages and by the
    /// subtype check).
    pub fn type_name(&self) -> &str {
        match self {
            Value::Nil => "Nil",
            Value::Bool(_) => "Bool",
            Value::Int(_) => "Int",
            Value::Num(_) => "Num",
            Value::Str(_) => "Str",
            Value::Array(_) => "Array",
            Value::DateTime(_) => "DateTime",
            Value::Xml(_) => "XmlElement",
            Value::Stringy(_) => "Stringy",
            Value::Instance { class_name, .. } => class_name.as_str(),
        }
    }

    pub(crate) fn truthy(&self) -> bool {
        match self {
            Value::Nil => false,
            Value::Bool(b) => *b,
            Value::Int(i) => *i != 0,
            Value::Num(f) => *f != 0.0 || f.is_nan(),
            Value::Str(s) => !s.is_empty(),
            Value::Array(items) => !items.is_empty(),
            Value::DateTime(_) => true,
            Value::Xml(node) => !node.text().is_empty(),
            Value::Stringy(s) => !s.as_str().is_empty(),
            Value::Instance { .. } => true,
        }
    }
}

// Compile-time assertion that Value is Send + Sync
const _: fn() = || {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Value>();
};
