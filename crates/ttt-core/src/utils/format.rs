use std::cmp::Ordering;

use chrono::{Datelike, NaiveDate};
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// German month names for long date formatting
const GERMAN_MONTHS: [&str; 12] = [
    "Januar", "Februar", "März", "April", "Mai", "Juni",
    "Juli", "August", "September", "Oktober", "November", "Dezember",
];

/// Truncate a string to a maximum number of characters, adding ellipsis if needed
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        s.chars().take(max_len).collect()
    } else {
        let truncated: String = s.chars().take(max_len - 3).collect();
        format!("{}...", truncated)
    }
}

/// Primary collation key: compatibility-decomposed, combining marks
/// dropped, lowercased, ß expanded to "ss".
fn primary_key(s: &str) -> String {
    s.nfkd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect::<String>()
        .replace('ß', "ss")
}

/// Locale-style name comparison for German display names.
///
/// Primary key ignores case and accents ("Äpfel" sorts with "apfel",
/// "Çelik" with "celik"), punctuation such as `_` is compared as-is.
/// Names that differ only in case or accents are ordered lowercase-first,
/// then by code point, so the result is a total order and identical names
/// compare `Equal`.
pub fn cmp_locale(a: &str, b: &str) -> Ordering {
    primary_key(a).cmp(&primary_key(b)).then_with(|| {
        let case_rank = |s: &str| -> Vec<bool> { s.chars().map(char::is_uppercase).collect() };
        case_rank(a).cmp(&case_rank(b)).then_with(|| a.cmp(b))
    })
}

/// Strip HTML tags and decode the handful of entities used in page titles.
pub fn strip_html(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut in_tag = false;
    for c in html.chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => out.push(c),
            _ => {}
        }
    }
    out.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&amp;", "&")
}

/// Format a date the way German pages print it, e.g. "15. März 2020"
pub fn format_german_date(date: NaiveDate) -> String {
    let month = GERMAN_MONTHS[date.month0() as usize];
    format!("{}. {} {}", date.day(), month, date.year())
}
