//! Loose-value coercions shared by the helpers.
//!
//! The web front end hands these utilities plain JSON values and relies on
//! JavaScript's truthiness and string conversion rules. They are collected
//! here so every module coerces the same way.

use serde_json::Value;

/// JavaScript truthiness: `null`, `false`, `0`, `NaN` and `""` are falsy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0 && !f.is_nan()).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// 與 `String(value)` 相同的字串轉換
pub fn to_js_string(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n
            .as_f64()
            .map(number_to_js_string)
            .unwrap_or_else(|| n.to_string()),
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => to_js_string(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

/// Template-literal interpolation, where a missing value renders as `undefined`.
pub fn interpolate(value: Option<&Value>) -> String {
    value.map(to_js_string).unwrap_or_else(|| "undefined".to_string())
}

/// `Number.prototype.toString()`: shortest round-trip digits, switching to
/// exponent form below `1e-6` and from `1e21` on.
pub fn number_to_js_string(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if n == 0.0 {
        return "0".to_string();
    }

    let sign = if n < 0.0 { "-" } else { "" };
    let scientific = format!("{:e}", n.abs());
    let (mantissa, exponent) = scientific
        .split_once('e')
        .unwrap_or((scientific.as_str(), "0"));
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let digit_count = digits.len() as i32;
    // 小數點位於第 point 位數字之後
    let point = exponent.parse::<i32>().unwrap_or(0) + 1;

    let body = if digit_count <= point && point <= 21 {
        format!("{}{}", digits, "0".repeat((point - digit_count) as usize))
    } else if 0 < point && point <= 21 {
        let (integer, fraction) = digits.split_at(point as usize);
        format!("{}.{}", integer, fraction)
    } else if -6 < point && point <= 0 {
        format!("0.{}{}", "0".repeat(point.unsigned_abs() as usize), digits)
    } else {
        let exponent = point - 1;
        let exponent_sign = if exponent < 0 { '-' } else { '+' };
        let (first, rest) = digits.split_at(1);
        if rest.is_empty() {
            format!("{}e{}{}", first, exponent_sign, exponent.abs())
        } else {
            format!("{}.{}e{}{}", first, rest, exponent_sign, exponent.abs())
        }
    };

    format!("{}{}", sign, body)
}

/// `Number.prototype.toFixed(digits)`.
///
/// Rounds the exact binary value half away from zero, so `2.5` becomes `3`
/// where Rust's own formatting would give `2`.
pub fn to_fixed(n: f64, digits: usize) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() || n.abs() >= 1e21 {
        return number_to_js_string(n);
    }

    let sign = if n < 0.0 { "-" } else { "" };
    // f64 的精確十進位展開最多 1074 位小數
    let exact = format!("{:.1100}", n.abs());
    let (integer, fraction) = exact.split_once('.').unwrap_or((exact.as_str(), ""));

    let mut kept: Vec<char> = integer
        .chars()
        .chain(fraction.chars().chain(std::iter::repeat('0')).take(digits))
        .collect();
    let round_up = fraction.as_bytes().get(digits).is_some_and(|d| *d >= b'5');

    if round_up {
        let mut index = kept.len();
        loop {
            if index == 0 {
                kept.insert(0, '1');
                break;
            }
            index -= 1;
            if kept[index] == '9' {
                kept[index] = '0';
            } else {
                kept[index] = char::from(kept[index] as u8 + 1);
                break;
            }
        }
    }

    let integer_len = kept.len() - digits;
    let integer: String = kept[..integer_len].iter().collect();
    if digits == 0 {
        return format!("{}{}", sign, integer);
    }
    let fraction: String = kept[integer_len..].iter().collect();
    format!("{}{}.{}", sign, integer, fraction)
}

/// Characters matched by `\s` and stripped by `trim()` in JavaScript.
pub const JS_WHITESPACE_CLASS: &str =
    r"[\t\n\x0B\x0C\r \x{00A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}]";

pub fn is_js_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{0B}'
            | '\u{0C}'
            | '\r'
            | ' '
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// `String.prototype.trim()`.
pub fn js_trim(text: &str) -> &str {
    text.trim_matches(is_js_whitespace)
}

/// Strict equality (`===`) between two loose values.
///
/// Containers compare by identity in JavaScript, and a value passed in from
/// outside can never be the same object as an array element.
pub fn strict_equals(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => match (x.as_f64(), y.as_f64()) {
            (Some(x), Some(y)) => x == y,
            _ => x == y,
        },
        (Value::String(x), Value::String(y)) => x == y,
        (Value::Bool(x), Value::Bool(y)) => x == y,
        (Value::Null, Value::Null) => true,
        _ => false,
    }
}

/// Name used in error messages for the kind of a value.
pub fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// `Number(text)` for strings: surrounding whitespace is ignored, blank text
/// is zero and anything else that is not a numeric literal is `NaN`.
pub fn parse_js_number(text: &str) -> f64 {
    let trimmed = js_trim(text);
    if trimmed.is_empty() {
        return 0.0;
    }

    match trimmed {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    if let Some(value) = parse_radix_literal(trimmed) {
        return value;
    }

    let is_decimal_literal = trimmed
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'E' | b'+' | b'-'));
    if !is_decimal_literal {
        return f64::NAN;
    }

    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

fn parse_radix_literal(text: &str) -> Option<f64> {
    let (radix, digits) = match text.get(..2)? {
        "0x" | "0X" => (16, &text[2..]),
        "0o" | "0O" => (8, &text[2..]),
        "0b" | "0B" => (2, &text[2..]),
        _ => return None,
    };
    if digits.is_empty() {
        return Some(f64::NAN);
    }
    Some(
        u64::from_str_radix(digits, radix)
            .map(|v| v as f64)
            .unwrap_or(f64::NAN),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_truthiness() {
        assert!(!is_truthy(&json!(null)));
        assert!(!is_truthy(&json!(false)));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!(0.0)));
        assert!(!is_truthy(&json!("")));
        assert!(is_truthy(&json!("0")));
        assert!(is_truthy(&json!([])));
        assert!(is_truthy(&json!({})));
        assert!(is_truthy(&json!(-1)));
    }

    #[test]
    fn test_to_js_string() {
        assert_eq!(to_js_string(&json!(1)), "1");
        assert_eq!(to_js_string(&json!(1.0)), "1");
        assert_eq!(to_js_string(&json!(1.5)), "1.5");
        assert_eq!(to_js_string(&json!("1")), "1");
        assert_eq!(to_js_string(&json!([1, null, "a"])), "1,,a");
        assert_eq!(to_js_string(&json!({"a": 1})), "[object Object]");
        assert_eq!(interpolate(None), "undefined");
    }

    #[test]
    fn test_strict_equals() {
        assert!(strict_equals(&json!(2), &json!(2.0)));
        assert!(!strict_equals(&json!(2), &json!("2")));
        assert!(!strict_equals(&json!({}), &json!({})));
        assert!(strict_equals(&json!(null), &json!(null)));
    }

    #[test]
    fn test_parse_js_number() {
        assert_eq!(parse_js_number("1.5"), 1.5);
        assert_eq!(parse_js_number("  42 "), 42.0);
        assert_eq!(parse_js_number(""), 0.0);
        assert_eq!(parse_js_number("   "), 0.0);
        assert_eq!(parse_js_number("0x1f"), 31.0);
        assert_eq!(parse_js_number("-Infinity"), f64::NEG_INFINITY);
        assert_eq!(parse_js_number("1e3"), 1000.0);
        assert!(parse_js_number("abc").is_nan());
        assert!(parse_js_number("inf").is_nan());
        assert!(parse_js_number("1.2.3").is_nan());
        assert!(parse_js_number("0x").is_nan());
    }

    #[test]
    fn test_number_to_js_string_exponent_forms() {
        assert_eq!(number_to_js_string(100.0), "100");
        assert_eq!(number_to_js_string(1.5), "1.5");
        assert_eq!(number_to_js_string(0.000001), "0.000001");
        assert_eq!(number_to_js_string(1e-7), "1e-7");
        assert_eq!(number_to_js_string(1.5e-7), "1.5e-7");
        assert_eq!(number_to_js_string(-2.5e-8), "-2.5e-8");
        assert_eq!(number_to_js_string(1e21), "1e+21");
        assert_eq!(number_to_js_string(1.25e22), "1.25e+22");
        assert_eq!(
            number_to_js_string(123456789012345680000.0),
            "123456789012345680000"
        );
        assert_eq!(to_js_string(&json!(1e21)), "1e+21");
    }

    #[test]
    fn test_to_fixed_rounds_half_away_from_zero() {
        assert_eq!(to_fixed(2.5, 0), "3");
        assert_eq!(to_fixed(-2.5, 0), "-3");
        assert_eq!(to_fixed(9.5, 0), "10");
        assert_eq!(to_fixed(0.125, 2), "0.13");
        assert_eq!(to_fixed(1.5, 3), "1.500");
        assert_eq!(to_fixed(-0.001, 2), "-0.00");
        assert_eq!(to_fixed(f64::NAN, 2), "NaN");
        assert_eq!(to_fixed(1e21, 2), "1e+21");
    }

    #[test]
    fn test_to_fixed_uses_exact_binary_value() {
        // 1.005 實際上是 1.00499999999999989...
        assert_eq!(to_fixed(1.005, 2), "1.00");
        assert_eq!(to_fixed(1.45, 1), "1.4");
    }

    #[test]
    fn test_js_whitespace() {
        assert!(is_js_whitespace('\u{FEFF}'));
        assert!(is_js_whitespace('\u{00A0}'));
        assert!(is_js_whitespace('\u{2028}'));
        assert!(!is_js_whitespace('\u{0085}'));
        assert_eq!(js_trim("\u{FEFF} a \u{3000}"), "a");
        assert_eq!(js_trim("\u{0085}a"), "\u{0085}a");
        assert_eq!(parse_js_number("\u{FEFF}7\u{FEFF}"), 7.0);
    }
}
