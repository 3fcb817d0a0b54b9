use num_traits::ToPrimitive;

use crate::value::{format_num, Value, ValueKind};

/// Significant digits the guard trusts when a float is reformatted as text.
/// Matches the precision the serialization layer guarantees; a literal that
/// needs more digits cannot survive a round trip through it.
const GUARD_SIG_DIGITS: usize = 14;

/// Reformat `coerced` back into `original`'s runtime kind and compare by
/// value. Used by the numeric cast paths: a coercion that fails this check
/// would discard information.
pub(crate) fn round_trips(original: &Value, coerced: &Value) -> bool {
    let reformatted = match reformat(coerced, original.kind()) {
        Some(v) => v,
        None => return false,
    };
    match (original, &reformatted) {
        // Two numeric strings compare by numeric value, so re-spellings
        // like "2.0", "1e3" or "007" survive the trip; anything non-numeric
        // must match exactly. The loose path covers finite values only:
        // "NaN", "inf" and overflowing literals like "1e400" carry no exact
        // numeric value to round-trip.
        (Value::Str(a), Value::Str(b)) => match (a.trim().parse::<f64>(), b.parse::<f64>()) {
            (Ok(x), Ok(y)) => x.is_finite() && y.is_finite() && x == y,
            _ => a == b,
        },
        _ => original == &reformatted,
    }
}

fn reformat(value: &Value, kind: ValueKind) -> Option<Value> {
    match kind {
        ValueKind::Bool => Some(Value::Bool(value.truthy())),
        ValueKind::Int => match value {
            Value::Int(i) => Some(Value::Int(*i)),
            Value::Num(f) => f.trunc().to_i64().map(Value::Int),
            Value::Bool(b) => Some(Value::Int(*b as i64)),
            _ => None,
        },
        ValueKind::Num => match value {
            Value::Int(i) => Some(Value::Num(*i as f64)),
            Value::Num(f) => Some(Value::Num(*f)),
            Value::Bool(b) => Some(Value::Num(if *b { 1.0 } else { 0.0 })),
            _ => None,
        },
        ValueKind::Str => Some(Value::Str(guard_string(value))),
        _ => None,
    }
}

fn guard_string(value: &Value) -> String {
    match value {
        Value::Num(f) => format_num(clamp_precision(*f)),
        other => other.to_string_value(),
    }
}

fn clamp_precision(f: f64) -> f64 {
    if !f.is_finite() {
        return f;
    }
    format!("{:.*e}", GUARD_SIG_DIGITS - 1, f)
        .parse::<f64>()
        .unwrap_or(f)
}
