// crates/citydb-core/src/text.rs

//! # Name Normalization
//!
//! Turns a display name into the ASCII sort key used for ordering and
//! binary search. The generator, the validator and the lookup all go
//! through [`normalize`]; a dataset is only searchable if every one of them
//! produces byte-identical keys.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Returns the ASCII replacement for `c`, if the table has one.
///
/// The table covers Latin letters that canonical decomposition leaves
/// untouched. It is fixed at compile time.
pub const fn transliterate_char(c: char) -> Option<&'static str> {
    let ascii = match c {
        'Đ' | 'Ð' => "D", // Vietnamese D with stroke, Icelandic eth
        'đ' | 'ð' => "d",
        'Ø' => "O", // Nordic O with stroke
        'ø' => "o",
        'Æ' => "AE", // AE ligature
        'æ' => "ae",
        'Œ' => "OE", // OE ligature
        'œ' => "oe",
        'ẞ' => "SS", // sharp S
        'ß' => "ss",
        'Þ' => "TH", // Icelandic thorn
        'þ' => "th",
        'Ł' => "L", // Polish L with stroke
        'ł' => "l",
        _ => return None,
    };
    Some(ascii)
}

/// Applies the transliteration table, passing every other character through.
pub fn transliterate(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match transliterate_char(c) {
            Some(ascii) => out.push_str(ascii),
            None => out.push(c),
        }
    }
    out
}

#[inline]
fn is_key_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, ' ' | '-' | '_')
}

/// Convert a city name into its sort key.
///
/// Steps, in order:
/// 1) Transliterate the letters in [`transliterate_char`] (`Æ` -> `AE`, `ß` -> `ss`, ...)
/// 2) Canonical decomposition (NFD)
/// 3) Drop combining marks
/// 4) Lowercase
/// 5) Keep only `a-z`, `0-9`, space, `-` and `_`
///
/// Characters outside the allow-list are removed, not replaced. Scripts with
/// no table entry (Han, Cyrillic, Arabic, ...) therefore collapse to an empty
/// or partial key and sort at the front of a dataset.
///
/// # Examples
///
/// ```rust
/// use citydb_core::normalize;
///
/// assert_eq!(normalize("Đà Nẵng"), "da nang");
/// assert_eq!(normalize("Søndre Land"), "sondre land");
/// assert_eq!(normalize("Köln"), "koln");
/// assert_eq!(normalize(""), "");
/// ```
pub fn normalize(name: &str) -> String {
    if name.is_empty() {
        return String::new();
    }

    transliterate(name)
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .filter(|c| is_key_char(*c))
        .collect()
}
