use crate::cast::{reblame, scalar};
use crate::registry::TypeRegistry;
use crate::value::{CastError, CastTarget, Stringy, Value, ValueKind};

/// Resolve a cast whose source is an object: the special-cased wrapper
/// types first, then the general identity-on-subtype rule.
pub(crate) fn cast_object(
    value: &Value,
    target: &CastTarget,
    registry: &TypeRegistry,
) -> Result<Value, CastError> {
    if let Value::Xml(node) = value {
        match target {
            CastTarget::Kind(ValueKind::Str) => {
                return Ok(Value::Str(node.text().to_string()));
            }
            CastTarget::Kind(ValueKind::Int) => {
                return scalar::cast_scalar(&Value::Str(node.text().to_string()), target)
                    .map_err(reblame);
            }
            CastTarget::Kind(ValueKind::Bool) => {
                let text = Stringy::new(node.text()).trimmed().lowered();
                return scalar::cast_scalar(&Value::Str(text.as_str().to_string()), target);
            }
            _ => {}
        }
    }

    match (value, target) {
        (Value::DateTime(_), CastTarget::Kind(ValueKind::DateTime)) => {
            return Ok(value.clone());
        }
        (Value::Stringy(s), CastTarget::Kind(ValueKind::Str)) => {
            return Ok(Value::Str(s.as_str().to_string()));
        }
        _ => {}
    }

    // General case: no data conversion, only a compatibility check.
    if let CastTarget::Class(name) = target {
        if registry.is_subtype(value.type_name(), name) {
            return Ok(value.clone());
        }
    }

    Err(CastError::new(format!(
        "Unable to cast {} object to {}",
        value.type_name(),
        target
    )))
}
