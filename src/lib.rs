//! Runtime type coercion and validation for loosely typed values.
//!
//! The engine takes an arbitrary runtime [`Value`] and a requested
//! [`CastTarget`] (a primitive kind or a named class) and either produces a
//! value of that kind or fails with a [`CastError`] that attributes blame to
//! the responsible call site. Scalars interchange freely the way a loosely
//! typed language allows, but never lossily: a numeric cast that cannot be
//! reversed exactly is rejected instead of silently truncated.
//!
//! ```
//! use kata::{Caster, CastTarget, Value, ValueKind};
//!
//! let caster = Caster::new();
//! let n = caster.cast(&Value::Str("123".into()), &CastTarget::Kind(ValueKind::Int));
//! assert_eq!(n.unwrap(), Value::Int(123));
//!
//! // "123abc" would lose its suffix: rejected.
//! let bad = caster.cast(&Value::Str("123abc".into()), &CastTarget::Kind(ValueKind::Int));
//! assert!(bad.is_err());
//! ```
//!
//! Object "casts" are compatibility checks, not conversions: an instance
//! casts to its own class or any registered ancestor ([`TypeRegistry`]) and
//! is returned unchanged.

mod cast;
mod doc_type;
mod registry;
mod value;

pub use cast::Caster;
pub use doc_type::{constant_name, resolve_doc_type};
pub use registry::TypeRegistry;
pub use value::{CastError, CastTarget, Stringy, Value, ValueKind, XmlElement};
