use super::Value;

/// Format a Num the way the engine stringifies it: no fractional part for
/// integral values, `NaN`/`Inf`/`-Inf` spelled out, negative zero kept.
pub(crate) fn format_num(f: f64) -> String {
    if f.is_nan() {
        "NaN".to_string()
    } else if f.is_infinite() {
        if f > 0.0 {
            "Inf".to_string()
        } else {
            "-Inf".to_string()
        }
    } else if f == 0.0 && f.is_sign_negative() {
        "-0".to_string()
    } else if f.fract() == 0.0 && f.abs() < 1e15 {
        format!("{}", f as i64)
    } else {
        format!("{}", f)
    }
}

impl Value {
    pub(crate) fn to_string_value(&self) -> String {
        match self {
            Value::Nil => String::new(),
            Value::Bool(true) => "True".to_string(),
            Value::Bool(false) => "False".to_string(),
            Value::Int(i) => i.to_string(),
            Value::Num(f) => format_num(*f),
            Value::Str(s) => s.clone(),
            Value::Array(items) => items
                .iter()
                .map(|v| v.to_string_value())
                .collect::<Vec<_>>()
                .join(" "),
            Value::DateTime(dt) => dt.to_rfc3339(),
            Value::Xml(node) => node.text().to_string(),
            Value::Stringy(s) => s.as_str().to_string(),
            Value::Instance { class_name, .. } => format!("{}()", class_name),
        }
    }
}
