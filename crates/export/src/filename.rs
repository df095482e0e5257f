//! Download filename derivation
//!
//! Filenames follow the `{name}_{date}_{listing}.pdf` shape. Name segments
//! keep letters (including Hungarian accents) and collapse whitespace into
//! underscores; the listing segment additionally keeps digits so street
//! numbers survive.

use chrono::{DateTime, Utc};
use doc_template::format_date_for_filename;

/// Fallback respondent segment
pub const DEFAULT_NAME: &str = "Ismeretlen";
/// Fallback listing segment
pub const DEFAULT_LISTING: &str = "Általános";

const HUNGARIAN_ACCENTS: &str = "áéíóöőúüűÁÉÍÓÖŐÚÜŰ";

fn keep_char(c: char, keep_digits: bool) -> bool {
    c.is_ascii_alphabetic()
        || HUNGARIAN_ACCENTS.contains(c)
        || c.is_whitespace()
        || (keep_digits && c.is_ascii_digit())
}

fn sanitize(raw: &str, keep_digits: bool, fallback: &str) -> String {
    let source = if raw.trim().is_empty() { fallback } else { raw };
    let filtered: String = source.chars().filter(|&c| keep_char(c, keep_digits)).collect();
    let joined = filtered.split_whitespace().collect::<Vec<_>>().join("_");
    if joined.is_empty() {
        fallback.split_whitespace().collect::<Vec<_>>().join("_")
    } else {
        joined
    }
}

/// Build the download filename for an exported response.
///
/// `respondent` and `listing_name` may be empty or contain arbitrary user
/// input; the result is always a safe non-empty filename.
pub fn export_file_name(
    respondent: Option<&str>,
    listing_name: Option<&str>,
    submitted_at: DateTime<Utc>,
) -> String {
    let name = sanitize(respondent.unwrap_or(""), false, DEFAULT_NAME);
    let listing = sanitize(listing_name.unwrap_or(""), true, DEFAULT_LISTING);
    let date = format_date_for_filename(submitted_at);
    format!("{name}_{date}_{listing}.pdf")
}
