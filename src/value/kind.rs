/// The closed set of runtime value kinds. `Void` never classifies a live
/// value; it is produced only by doc-type resolution for `null`/`void`
/// aliases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Nil,
    Bool,
    Int,
    Num,
    Str,
    Array,
    Object,
    DateTime,
    Void,
}

impl ValueKind {
    /// Canonical textual identifier, stable across releases (code-generation
    /// tooling embeds these names in generated sources).
    pub fn name(self) -> &'static str {
        match self {
            ValueKind::Nil => "Nil",
            ValueKind::Bool => "Bool",
            ValueKind::Int => "Int",
            ValueKind::Num => "Num",
            ValueKind::Str => "Str",
            ValueKind::Array => "Array",
            ValueKind::Object => "Object",
            ValueKind::DateTime => "DateTime",
            ValueKind::Void => "Void",
        }
    }
}

impl std::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A cast target: either a primitive/array/object/datetime kind, or an
/// opaque class name resolved against the type registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CastTarget {
    Kind(ValueKind),
    Class(String),
}

impl CastTarget {
    pub fn class(name: impl Into<String>) -> Self {
        CastTarget::Class(name.into())
    }
}

impl From<ValueKind> for CastTarget {
    fn from(kind: ValueKind) -> Self {
        CastTarget::Kind(kind)
    }
}

impl std::fmt::Display for CastTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CastTarget::Kind(kind) => write!(f, "{}", kind),
            CastTarget::Class(name) => write!(f, "{}", name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{CastTarget, ValueKind};

    #[test]
    fn kind_names_are_stable() {
        assert_eq!(ValueKind::Nil.name(), "Nil");
        assert_eq!(ValueKind::Bool.name(), "Bool");
        assert_eq!(ValueKind::Int.name(), "Int");
        assert_eq!(ValueKind::Num.name(), "Num");
        assert_eq!(ValueKind::Str.name(), "Str");
        assert_eq!(ValueKind::Array.name(), "Array");
        assert_eq!(ValueKind::Object.name(), "Object");
        assert_eq!(ValueKind::DateTime.name(), "DateTime");
        assert_eq!(ValueKind::Void.name(), "Void");
    }

    #[test]
    fn target_display_uses_kind_or_class_name() {
        assert_eq!(CastTarget::Kind(ValueKind::Int).to_string(), "Int");
        assert_eq!(CastTarget::class("Carton").to_string(), "Carton");
    }
}
