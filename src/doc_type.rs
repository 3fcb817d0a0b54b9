//! Type resolution for code-generation tooling: short textual aliases as
//! found in doc comments, and the constant-name lookup generators embed in
//! emitted source. Never consulted by the cast dispatcher itself.

use crate::registry::TypeRegistry;
use crate::value::{CastError, CastTarget, ValueKind};

/// Resolve a doc-comment type alias, case-insensitively, to a canonical
/// kind or a registered class name. `null` and `void` map to the `Void`
/// pseudo-kind; anything unrecognized that the registry cannot resolve is
/// an invalid cast naming the alias.
pub fn resolve_doc_type(alias: &str, registry: &TypeRegistry) -> Result<CastTarget, CastError> {
    match alias.to_lowercase().as_str() {
        "str" | "string" => Ok(ValueKind::Str.into()),
        "int" | "integer" => Ok(ValueKind::Int.into()),
        "float" | "flt" | "double" | "dbl" | "single" | "decimal" => Ok(ValueKind::Num.into()),
        "bool" | "boolean" | "bit" => Ok(ValueKind::Bool.into()),
        "datetime" | "date" | "time" | "instant" => Ok(ValueKind::DateTime.into()),
        "null" | "void" => Ok(ValueKind::Void.into()),
        _ => {
            // Class lookup preserves the alias's original spelling.
            if registry.contains(alias) {
                Ok(CastTarget::class(alias))
            } else {
                Err(CastError::new(format!(
                    "Unable to resolve doc type alias to a kind or class: {}",
                    alias
                )))
            }
        }
    }
}

/// The constant path for a canonical kind name, e.g. `"Int"` →
/// `"ValueKind::Int"`. Code generators emit the constant instead of the
/// bare text so generated sources stay checked by the compiler.
pub fn constant_name(kind_name: &str) -> Result<&'static str, CastError> {
    match kind_name {
        "Str" => Ok("ValueKind::Str"),
        "Int" => Ok("ValueKind::Int"),
        "Num" => Ok("ValueKind::Num"),
        "Bool" => Ok("ValueKind::Bool"),
        "Array" => Ok("ValueKind::Array"),
        "Object" => Ok("ValueKind::Object"),
        "DateTime" => Ok("ValueKind::DateTime"),
        _ => Err(CastError::new(format!(
            "Unable to determine type of item to lookup its constant: {}",
            kind_name
        ))),
    }
}
