use num_traits::ToPrimitive;

use crate::cast::round_trip::round_trips;
use crate::value::{CastError, CastTarget, Value, ValueKind};

/// Coerce a scalar (Bool/Int/Num/Str) into another primitive kind.
pub(crate) fn cast_scalar(value: &Value, target: &CastTarget) -> Result<Value, CastError> {
    match target {
        CastTarget::Kind(ValueKind::Bool) => cast_to_bool(value, target),
        CastTarget::Kind(ValueKind::Int) => cast_to_numeric(value, target, ValueKind::Int),
        CastTarget::Kind(ValueKind::Num) => cast_to_numeric(value, target, ValueKind::Num),
        // Stringification is always considered safe; no round-trip check.
        CastTarget::Kind(ValueKind::Str) => match value {
            Value::Bool(_) | Value::Int(_) | Value::Num(_) | Value::Str(_) => {
                Ok(Value::Str(value.to_string_value()))
            }
            _ => Err(invalid(value, target)),
        },
        _ => Err(invalid(value, target)),
    }
}

fn cast_to_bool(value: &Value, target: &CastTarget) -> Result<Value, CastError> {
    match value {
        Value::Bool(b) => Ok(Value::Bool(*b)),
        Value::Nil => Ok(Value::Bool(false)),
        Value::Str(s) => {
            // Native truthiness for text: only "", "0" and "false" are
            // falsy ("0.0" is not).
            if s.is_empty() || s == "0" || s.eq_ignore_ascii_case("false") {
                Ok(Value::Bool(false))
            } else if s.eq_ignore_ascii_case("true") {
                Ok(Value::Bool(true))
            } else {
                Ok(Value::Bool(value.truthy()))
            }
        }
        Value::Int(_) | Value::Num(_) => Ok(Value::Bool(value.truthy())),
        _ => Err(invalid(value, target)),
    }
}

fn cast_to_numeric(
    value: &Value,
    target: &CastTarget,
    kind: ValueKind,
) -> Result<Value, CastError> {
    // Empty text is an explicit "no value", not a zero.
    if let Value::Str(s) = value {
        if s.is_empty() {
            return Ok(Value::Nil);
        }
    }
    let coerced = match (value, kind) {
        (Value::Int(i), ValueKind::Int) => Some(Value::Int(*i)),
        (Value::Num(f), ValueKind::Num) => Some(Value::Num(*f)),
        (Value::Int(i), ValueKind::Num) => Some(Value::Num(*i as f64)),
        (Value::Num(f), ValueKind::Int) => f.trunc().to_i64().map(Value::Int),
        (Value::Bool(b), ValueKind::Int) => Some(Value::Int(*b as i64)),
        (Value::Bool(b), ValueKind::Num) => Some(Value::Num(if *b { 1.0 } else { 0.0 })),
        (Value::Str(s), ValueKind::Int) => s.trim().parse::<i64>().ok().map(Value::Int),
        (Value::Str(s), ValueKind::Num) => s.trim().parse::<f64>().ok().map(Value::Num),
        _ => return Err(invalid(value, target)),
    };
    // A coercion that cannot be reversed exactly discards information;
    // a failed parse and a failed round trip are the same defect.
    match coerced {
        Some(coerced) if round_trips(value, &coerced) => Ok(coerced),
        _ => Err(CastError::new(format!(
            "Unable to cast {} value to {}: {}",
            value.type_name(),
            target,
            value.to_string_value()
        ))),
    }
}

fn invalid(value: &Value, target: &CastTarget) -> CastError {
    CastError::new(format!(
        "Unable to cast {} value to {}",
        value.type_name(),
        target
    ))
}
