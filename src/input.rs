//! Input normalization for phone values

use serde_json::{Number, Value};

/// A phone value as handed to the masker.
///
/// Strings and numbers are the supported shapes. Anything else arriving as a
/// JSON value is tolerated and coerced to its string form.
#[derive(Debug, Clone, PartialEq)]
pub enum PhoneInput {
    Missing,
    Text(String),
    Number(Number),
    Value(Value),
}

impl From<&str> for PhoneInput {
    fn from(s: &str) -> Self {
        PhoneInput::Text(s.to_string())
    }
}

impl From<String> for PhoneInput {
    fn from(s: String) -> Self {
        PhoneInput::Text(s)
    }
}

impl From<&String> for PhoneInput {
    fn from(s: &String) -> Self {
        PhoneInput::Text(s.clone())
    }
}

macro_rules! impl_from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for PhoneInput {
                fn from(n: $ty) -> Self {
                    PhoneInput::Number(Number::from(n))
                }
            }
        )*
    };
}

impl_from_integer!(i32, i64, u32, u64, usize);

impl From<f64> for PhoneInput {
    fn from(n: f64) -> Self {
        match Number::from_f64(n) {
            Some(num) => PhoneInput::Number(num),
            // NaN and infinities have no JSON form
            None => PhoneInput::Text(n.to_string()),
        }
    }
}

impl From<Value> for PhoneInput {
    fn from(v: Value) -> Self {
        match v {
            Value::Null => PhoneInput::Missing,
            Value::String(s) => PhoneInput::Text(s),
            Value::Number(n) => PhoneInput::Number(n),
            other => PhoneInput::Value(other),
        }
    }
}

impl From<&Value> for PhoneInput {
    fn from(v: &Value) -> Self {
        PhoneInput::from(v.clone())
    }
}

impl<T: Into<PhoneInput>> From<Option<T>> for PhoneInput {
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(v) => v.into(),
            None => PhoneInput::Missing,
        }
    }
}

/// Coerce any supported input into a trimmed phone string.
///
/// Missing values become `""`. A JSON object carrying a `phone` key is
/// replaced by that key's value (one level deep) before conversion. Objects
/// without one normalize to `""`, so digits from unrelated fields never end
/// up partly revealed.
pub fn normalize(input: &PhoneInput) -> String {
    match input {
        PhoneInput::Missing => String::new(),
        PhoneInput::Text(s) => s.trim().to_string(),
        PhoneInput::Number(n) => number_to_string(n),
        PhoneInput::Value(Value::Object(map)) if map.contains_key("phone") => {
            map.get("phone").map(stringify).unwrap_or_default()
        }
        PhoneInput::Value(v) => stringify(v),
    }
}

fn stringify(v: &Value) -> String {
    let raw = match v {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => number_to_string(n),
        Value::Array(_) => v.to_string(),
        Value::Object(_) => String::new(),
    };
    raw.trim().to_string()
}

// Largest magnitude below which every whole f64 is an exact integer.
const MAX_EXACT_F64: f64 = 9_007_199_254_740_992.0;

/// Decimal form of a number without a float's `.0` suffix.
fn number_to_string(n: &Number) -> String {
    if let Some(i) = n.as_i64() {
        return i.to_string();
    }
    if let Some(u) = n.as_u64() {
        return u.to_string();
    }
    match n.as_f64() {
        Some(f) if f.fract() == 0.0 && f.abs() < MAX_EXACT_F64 => (f as i64).to_string(),
        Some(f) => f.to_string(),
        None => n.to_string(),
    }
}

/// True only for the declared input shapes: JSON strings and numbers.
pub fn is_valid_phone_input(value: &Value) -> bool {
    matches!(value, Value::String(_) | Value::Number(_))
}
