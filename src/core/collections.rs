use crate::utils::error::{Result, UtilError};
use crate::utils::js::{is_truthy, strict_equals, to_js_string, type_name};
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use std::collections::HashSet;

static INDEX_SEGMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([A-Za-z0-9_]+)\]").expect("index segment pattern is valid"));

/// 去除假值與重複值，保留第一次出現的項目
///
/// Values are compared by their string form, so `1` and `"1"` are the same
/// item and every object counts as `[object Object]`. Anything that is not an
/// array yields an empty list.
pub fn uniquify_array(items: &Value) -> Vec<Value> {
    let Value::Array(items) = items else {
        return Vec::new();
    };

    let mut seen = HashSet::new();
    items
        .iter()
        .filter(|item| is_truthy(item) && seen.insert(to_js_string(item)))
        .cloned()
        .collect()
}

/// 依 `key` 欄位去重；欄位缺少或為假值的項目會被丟棄
pub fn uniquify_object_array(items: &Value, key: &str) -> Vec<Value> {
    let Value::Array(items) = items else {
        return Vec::new();
    };

    let mut seen = HashSet::new();
    items
        .iter()
        .filter(|item| match item.get(key) {
            Some(id) if is_truthy(id) => seen.insert(to_js_string(id)),
            _ => false,
        })
        .cloned()
        .collect()
}

/// Remove the first occurrence of each of `items` from a copy of `array`.
/// Items that are not present are ignored.
pub fn remove_from_array<T: PartialEq + Clone>(items: &[T], array: &[T]) -> Vec<T> {
    let mut remaining = array.to_vec();
    for item in items {
        if let Some(index) = remaining.iter().position(|value| value == item) {
            remaining.remove(index);
        }
    }
    remaining
}

/// Remove the first element whose `key` field strictly equals `value`.
/// Without a match the copy is returned untouched.
pub fn remove_from_object_array(array: &[Value], key: &str, value: &Value) -> Vec<Value> {
    let mut remaining = array.to_vec();
    if let Some(index) = remaining
        .iter()
        .position(|item| item.get(key).is_some_and(|field| strict_equals(field, value)))
    {
        remaining.remove(index);
    }
    remaining
}

/// Outcome of a path lookup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum KeyLookup<'a> {
    Found(&'a Value),
    /// A key along the path does not exist (`undefined`).
    Absent,
    /// The walk reached a falsy value before the path ended (`null`).
    Unreachable,
}

impl<'a> KeyLookup<'a> {
    pub fn found(self) -> Option<&'a Value> {
        match self {
            KeyLookup::Found(value) => Some(value),
            _ => None,
        }
    }
}

/// Resolve a path such as `items[0].name` or `.user.profile` inside `value`.
///
/// Stepping into a truthy string, number or boolean is an error.
pub fn get_object_key_by_string<'a>(value: &'a Value, path: &str) -> Result<KeyLookup<'a>> {
    let normalized = INDEX_SEGMENT.replace_all(path, ".${1}");
    let path: &str = normalized.strip_prefix('.').unwrap_or(&normalized);

    let mut current = value;
    for segment in path.split('.') {
        if !is_truthy(current) {
            return Ok(KeyLookup::Unreachable);
        }

        let next = match current {
            Value::Object(map) => map.get(segment),
            Value::Array(items) => segment
                .parse::<usize>()
                .ok()
                .filter(|index| index.to_string() == segment)
                .and_then(|index| items.get(index)),
            other => {
                return Err(UtilError::NotTraversable {
                    segment: segment.to_string(),
                    kind: type_name(other).to_string(),
                })
            }
        };

        match next {
            Some(found) => current = found,
            None => return Ok(KeyLookup::Absent),
        }
    }

    Ok(KeyLookup::Found(current))
}
