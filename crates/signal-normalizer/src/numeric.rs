//! Numeric coercion for fields the model returns as numbers or noisy strings.

use serde_json::Value;

/// Coerces a numeric-like JSON value to `f64`. Strings keep only digits,
/// `-`, `.`, `e`, `E` before parsing; anything unparseable or non-finite
/// becomes `NaN`.
pub fn to_number(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
        Value::String(s) => {
            let cleaned: String = s
                .chars()
                .filter(|c| c.is_ascii_digit() || matches!(c, '-' | '.' | 'e' | 'E'))
                .collect();
            match cleaned.parse::<f64>() {
                Ok(n) if n.is_finite() => n,
                _ => f64::NAN,
            }
        }
        _ => f64::NAN,
    }
}

/// `to_number` over an optional field; absent means `NaN`
pub fn num_field(value: &Option<Value>) -> f64 {
    value.as_ref().map_or(f64::NAN, to_number)
}

/// Like `to_number` but for probability strings such as "74%": strips the
/// percent sign along with any other non-numeric punctuation. No exponent
/// support in the string form.
pub fn percent(value: &Value) -> f64 {
    match value {
        Value::String(s) => {
            let cleaned: String = s
                .chars()
                .filter(|c| c.is_ascii_digit() || matches!(c, '-' | '.'))
                .collect();
            match cleaned.parse::<f64>() {
                Ok(n) if n.is_finite() => n,
                _ => f64::NAN,
            }
        }
        _ => to_number(value),
    }
}

/// `percent` over an optional field; absent means `NaN`
pub fn percent_field(value: &Option<Value>) -> f64 {
    value.as_ref().map_or(f64::NAN, percent)
}

/// Rounds a price to a precision tier picked by magnitude: 6 decimals below
/// 0.1, then 4, 3, and 2 decimals from 10 upward. Non-finite values pass
/// through untouched so the caller's sentinel survives.
pub fn normalize_price(n: f64) -> f64 {
    if !n.is_finite() {
        return n;
    }
    let decimals = if n < 0.1 {
        6
    } else if n < 1.0 {
        4
    } else if n < 10.0 {
        3
    } else {
        2
    };
    let scale = 10f64.powi(decimals);
    (n * scale).round() / scale
}
