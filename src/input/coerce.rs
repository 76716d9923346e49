use serde_json::Value;

use crate::model::profile::CoercionPolicy;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Coerced {
    Value(f64),
    Malformed,
}

/// Lenient numeric read: numbers pass through, strings use their longest
/// leading numeric prefix, everything else is 0. Non-finite results are 0.
pub fn coerce_score(value: Option<&Value>) -> f64 {
    let v = match value {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => parse_numeric_prefix(s).unwrap_or(0.0),
        _ => 0.0,
    };
    if v.is_finite() { v } else { 0.0 }
}

/// Strict numeric read: a present field must be a JSON number or a string that
/// is entirely numeric. Absent and null fields are 0.
pub fn coerce_score_strict(value: Option<&Value>) -> Coerced {
    match value {
        None | Some(Value::Null) => Coerced::Value(0.0),
        Some(Value::Number(n)) => match n.as_f64() {
            Some(v) if v.is_finite() => Coerced::Value(v),
            _ => Coerced::Malformed,
        },
        Some(Value::String(s)) => match s.trim().parse::<f64>() {
            Ok(v) if v.is_finite() => Coerced::Value(v),
            _ => Coerced::Malformed,
        },
        Some(_) => Coerced::Malformed,
    }
}

pub fn coerce_with(policy: CoercionPolicy, value: Option<&Value>) -> Coerced {
    match policy {
        CoercionPolicy::Lenient => Coerced::Value(coerce_score(value)),
        CoercionPolicy::Strict => coerce_score_strict(value),
    }
}

/// Longest prefix of the form `[+-]?digits[.digits][e[+-]digits]` after
/// leading whitespace.
pub fn parse_numeric_prefix(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0usize;

    if end < bytes.len() && (bytes[end] == b'+' || bytes[end] == b'-') {
        end += 1;
    }
    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        let frac_digits = frac_end - frac_start;
        if digits > 0 || frac_digits > 0 {
            end = frac_end;
            digits += frac_digits;
        }
    }
    if digits == 0 {
        return None;
    }

    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && (bytes[exp_end] == b'+' || bytes[exp_end] == b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok()
}
