//! Answer normalization
//!
//! Submitted answers arrive as free-form tokens, mostly the English values of
//! the form widgets. Display surfaces normalize them to Hungarian through a
//! curated synonym table. This is a best-effort cosmetic transform: when
//! nothing matches, the value is returned untouched.
//!
//! Known cosmetic-accuracy risk: after the whole-token lookup fails, the
//! first table entry whose key occurs anywhere in the value rewrites every
//! occurrence, so a short key ("no") can rewrite part of an unrelated word.
//! This matches the behavior the forms were built against and is kept as is.

use serde_json::Value;

/// English answer token to Hungarian display text, in lookup order
const SYNONYMS: &[(&str, &str)] = &[
    // General answers
    ("yes", "igen"),
    ("no", "nem"),
    ("maybe", "talán"),
    ("none", "nincs"),
    ("other", "egyéb"),
    // Feelings and impressions
    ("disappointed", "csalódott"),
    ("satisfied", "elégedett"),
    ("excited", "izgatott"),
    ("neutral", "semleges"),
    ("positive", "pozitív"),
    ("negative", "negatív"),
    ("very good", "nagyon jó"),
    ("good", "jó"),
    ("average", "átlagos"),
    ("poor", "rossz"),
    ("very poor", "nagyon rossz"),
    // Price judgments
    ("realistic", "reális"),
    ("too high", "túl magas"),
    ("too low", "túl alacsony"),
    ("fair", "elfogadható"),
    ("expensive", "drága"),
    ("cheap", "olcsó"),
    ("reasonable", "ésszerű"),
    // Times of day
    ("morning", "délelőtt"),
    ("afternoon", "délután"),
    ("evening", "este"),
    ("anytime", "bármikor"),
    ("weekdays", "hétköznap"),
    ("weekends", "hétvégén"),
    // Contact channels
    ("phone", "telefon"),
    ("email", "email"),
    ("both", "mindkettő"),
    ("whatsapp", "WhatsApp"),
    ("messenger", "Messenger"),
    // Frequency words
    ("definitely", "biztosan"),
    ("probably", "valószínűleg"),
    ("not sure", "nem biztos"),
    ("absolutely", "feltétlenül"),
    ("never", "soha"),
    ("always", "mindig"),
    ("sometimes", "néha"),
];

/// Normalize an answer value for display.
///
/// Non-string values are serialized to compact JSON (lossless). Strings are
/// matched case-insensitively against the synonym table: first as a whole
/// trimmed token, then as a substring rewrite, and finally returned unchanged
/// when nothing matches.
pub fn normalize_answer(value: &Value) -> String {
    let text = match value {
        Value::String(s) => s,
        other => return other.to_string(),
    };

    let token = text.trim().to_lowercase();
    if let Some((_, replacement)) = SYNONYMS.iter().find(|(key, _)| *key == token) {
        return (*replacement).to_string();
    }

    for (key, replacement) in SYNONYMS {
        if contains_ignore_ascii_case(text, key) {
            return replace_all_ignore_ascii_case(text, key, replacement);
        }
    }

    text.clone()
}

/// Case-insensitive ASCII substring test.
///
/// Table keys are pure ASCII, so byte-wise comparison is safe on any UTF-8
/// haystack: ASCII bytes never occur inside a multi-byte sequence.
fn contains_ignore_ascii_case(haystack: &str, needle: &str) -> bool {
    find_ignore_ascii_case(haystack.as_bytes(), needle.as_bytes(), 0).is_some()
}

fn find_ignore_ascii_case(haystack: &[u8], needle: &[u8], from: usize) -> Option<usize> {
    if needle.is_empty() || haystack.len() < needle.len() {
        return None;
    }
    (from..=haystack.len() - needle.len())
        .find(|&i| haystack[i..i + needle.len()].eq_ignore_ascii_case(needle))
}

/// Replace every case-insensitive occurrence of `needle` with `replacement`
fn replace_all_ignore_ascii_case(haystack: &str, needle: &str, replacement: &str) -> String {
    let bytes = haystack.as_bytes();
    let needle_bytes = needle.as_bytes();
    let mut out = String::with_capacity(haystack.len());
    let mut pos = 0;

    while let Some(found) = find_ignore_ascii_case(bytes, needle_bytes, pos) {
        out.push_str(&haystack[pos..found]);
        out.push_str(replacement);
        pos = found + needle_bytes.len();
    }
    out.push_str(&haystack[pos..]);
    out
}
