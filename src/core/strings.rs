use crate::utils::error::{Result, UtilError};
use crate::utils::js::{js_trim, JS_WHITESPACE_CLASS};
use once_cell::sync::Lazy;
use rand::Rng;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

const SPECIALS: &[u8] = b"!@#$%^&*";
const DIGITS: &[u8] = b"0123456789";
const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// One character from each set, in this order, per group.
const CHARACTER_GROUP: [&[u8]; 4] = [SPECIALS, DIGITS, LOWERCASE, UPPERCASE];

// Rust 的 \s 含 U+0085 且不含 U+FEFF，與瀏覽器不同
static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!("{}+", JS_WHITESPACE_CLASS)).expect("whitespace pattern is valid")
});
static NON_SLUG_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^A-Za-z0-9_-]+").expect("slug charset pattern is valid"));
static HYPHEN_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"--+").expect("hyphen pattern is valid"));

/// Upper-case the first character; the rest is kept as is.
pub fn capitalize_string(text: &str) -> Result<String> {
    let mut chars = text.chars();
    let first = chars.next().ok_or(UtilError::EmptyString)?;
    Ok(first.to_uppercase().chain(chars).collect())
}

/// 產生 URL slug：去除重音、轉小寫、空白轉連字號並移除其他符號
pub fn generate_slug(text: &str) -> String {
    let without_marks: String = text
        .nfd()
        .filter(|c| !('\u{0300}'..='\u{036f}').contains(c))
        .collect();
    let lowered = without_marks.to_lowercase();

    let hyphenated = WHITESPACE_RUN.replace_all(js_trim(&lowered), "-");
    let cleaned = NON_SLUG_CHARS.replace_all(&hyphenated, "");
    HYPHEN_RUN.replace_all(&cleaned, "-").into_owned()
}

/// Random password-like string built from groups of a special character, a
/// digit, a lowercase and an uppercase letter.
///
/// Only whole groups are produced, so the result has `4 * (length / 4)`
/// characters.
pub fn generate_random_string(length: usize) -> String {
    generate_random_string_with(&mut rand::thread_rng(), length)
}

pub fn generate_random_string_with<R: Rng + ?Sized>(rng: &mut R, length: usize) -> String {
    let groups = length / 4;
    let mut result = String::with_capacity(groups * CHARACTER_GROUP.len());

    for _ in 0..groups {
        for charset in CHARACTER_GROUP {
            result.push(charset[rng.gen_range(0..charset.len())] as char);
        }
    }

    result
}
