mod object;
mod round_trip;
mod scalar;

use crate::registry::TypeRegistry;
use crate::value::{CastError, CastTarget, Value, ValueKind};

/// The cast entry point. Owns the [`TypeRegistry`] consulted by the
/// identity-on-subtype rule; holds no other state, so a shared reference
/// can serve concurrent callers without locking.
#[derive(Debug, Clone, Default)]
pub struct Caster {
    registry: TypeRegistry,
}

impl Caster {
    pub fn new() -> Self {
        Self {
            registry: TypeRegistry::new(),
        }
    }

    pub fn with_registry(registry: TypeRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &TypeRegistry {
        &self.registry
    }

    /// Cast `value` to `target` with the default null policy: `Nil` passes
    /// through unchanged regardless of target. Use [`cast_with`] to request
    /// the zero-value policy instead.
    ///
    /// [`cast_with`]: Caster::cast_with
    pub fn cast(&self, value: &Value, target: &CastTarget) -> Result<Value, CastError> {
        self.cast_with(value, target, true)
    }

    /// Cast with an explicit null policy. With `preserve_nil` false, `Nil`
    /// coerces to the zero value of the target: empty text, `0`, `0.0`,
    /// `false`, an empty array, or `Nil` for object-like targets.
    pub fn cast_with(
        &self,
        value: &Value,
        target: &CastTarget,
        preserve_nil: bool,
    ) -> Result<Value, CastError> {
        match value {
            Value::Nil => {
                if preserve_nil {
                    Ok(Value::Nil)
                } else {
                    Ok(zero_value(target))
                }
            }
            Value::Bool(_) | Value::Int(_) | Value::Num(_) | Value::Str(_) => {
                scalar::cast_scalar(value, target).map_err(reblame)
            }
            Value::Array(_) => cast_array(value, target).map_err(reblame),
            Value::DateTime(_) | Value::Xml(_) | Value::Stringy(_) | Value::Instance { .. } => {
                object::cast_object(value, target, &self.registry).map_err(reblame)
            }
        }
    }
}

fn zero_value(target: &CastTarget) -> Value {
    match target {
        CastTarget::Kind(ValueKind::Str) => Value::Str(String::new()),
        CastTarget::Kind(ValueKind::Int) => Value::Int(0),
        CastTarget::Kind(ValueKind::Num) => Value::Num(0.0),
        CastTarget::Kind(ValueKind::Bool) => Value::Bool(false),
        CastTarget::Kind(ValueKind::Array) => Value::array(Vec::new()),
        CastTarget::Kind(_) | CastTarget::Class(_) => Value::Nil,
    }
}

fn cast_array(value: &Value, target: &CastTarget) -> Result<Value, CastError> {
    match target {
        // Identity: the sequence is returned unchanged.
        CastTarget::Kind(ValueKind::Array) => Ok(value.clone()),
        _ => Err(CastError::new(format!(
            "Unable to cast Array to {}",
            target
        ))),
    }
}

/// Rethrow discipline: each layer that catches a [`CastError`] on its way
/// out increments the blame offset exactly once.
pub(crate) fn reblame(mut err: CastError) -> CastError {
    err.increment_offset();
    err
}
