use crate::utils::error::{Result, UtilError};
use crate::utils::js::{is_truthy, parse_js_number, to_fixed, type_name};
use serde_json::{Map, Value};

const NOT_AVAILABLE: &str = "N/A";

/// 淺層複製，只保留布林值或真值（且不是 "N/A"）的欄位
///
/// `false` survives, `0` and `""` do not.
pub fn clean_object(object: &Map<String, Value>) -> Map<String, Value> {
    object
        .iter()
        .filter(|(_, value)| {
            value.as_str() != Some(NOT_AVAILABLE) && (value.is_boolean() || is_truthy(value))
        })
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

/// Parse a user-entered number that may use a decimal comma.
///
/// `null` and `""` give `None`, numbers pass through and any other text that
/// is not numeric gives `Some(NaN)`. Booleans, arrays and objects are an error.
pub fn parse_number(value: &Value) -> Result<Option<f64>> {
    match value {
        Value::Null => Ok(None),
        Value::String(text) if text.is_empty() => Ok(None),
        Value::Number(number) => Ok(number.as_f64()),
        Value::String(text) => Ok(Some(parse_js_number(&text.replacen(',', ".", 1)))),
        other => Err(UtilError::NotParsable {
            kind: type_name(other).to_string(),
        }),
    }
}

/// Dig the message out of an error payload by following the first entry of
/// every nested object (or first element of every array).
///
/// Returns `None` when an empty container is reached. A `null` anywhere on
/// the way is an error.
pub fn get_error_message(error: &Value) -> Result<Option<&Value>> {
    let mut current = error;
    loop {
        current = match current {
            Value::Null => return Err(UtilError::NullError),
            Value::Object(map) => match map.values().next() {
                Some(inner) => inner,
                None => return Ok(None),
            },
            Value::Array(items) => match items.first() {
                Some(inner) => inner,
                None => return Ok(None),
            },
            message => return Ok(Some(message)),
        };
    }
}

/// Round with a small upward bias and render with `decimals` fixed places,
/// exact halves going away from zero like `toFixed`.
pub fn round_to(number: f64, decimals: u32) -> String {
    let bias = 1.0 / 10f64.powi(decimals as i32 + 1);
    to_fixed(number + bias, decimals as usize)
}

pub fn round_to_number(number: f64, decimals: u32) -> f64 {
    round_to(number, decimals).parse().unwrap_or(f64::NAN)
}
