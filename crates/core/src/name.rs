//! Name normalization helpers.
//!
//! Source workbooks record people as upper-case "LAST, FIRST". Display
//! forms are title-cased with the Mc-prefix repaired ("Mcdonald" →
//! "McDonald"). Identity normalization strips trailing generational
//! numerals so "Smith, III" and "Smith" compare equal.

use regex::Regex;

/// Title-case a string the way spreadsheet name columns expect: the first
/// letter after any non-letter is upper-cased, the rest lower-cased.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_alpha = false;
    for ch in s.chars() {
        if ch.is_alphabetic() {
            if prev_alpha {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(ch);
            prev_alpha = false;
        }
    }
    out
}

/// Repair Scottish/Irish prefixes lost by naive title-casing.
pub fn fix_name(s: &str) -> String {
    let mc = Regex::new(r"Mc([a-z])").unwrap();
    mc.replace_all(s, |caps: &regex::Captures<'_>| {
        format!("Mc{}", caps[1].to_uppercase())
    })
    .into_owned()
}

/// Reformat a "Last, First" source name into a display "First Last".
/// Names without a comma pass through unchanged (already display form).
pub fn display_name(source: &str) -> String {
    let swap = Regex::new(r"(.+),\s+(.+)").unwrap();
    let swapped = swap.replace(source, "$2 $1");
    fix_name(&title_case(&swapped))
}

/// Title-cased "Last, First" used for the alphabetical index.
pub fn index_name(source: &str) -> String {
    fix_name(&title_case(source))
}

/// Identity normalization: trim, strip a trailing generational numeral
/// (", II", ", III", ", IV"). Case is preserved — identity matching across
/// sources is verbatim otherwise.
pub fn normalize_key(source: &str) -> String {
    let suffix = Regex::new(r"(?i)(?:,\s*|\s+)(?:II|III|IV)\s*$").unwrap();
    suffix.replace(source.trim(), "").trim_end().to_string()
}

/// The final whitespace-delimited token of a full name, case-folded.
/// This is the roster's notion of a teacher: last name only.
pub fn last_token(full: &str) -> String {
    full.split_whitespace()
        .last()
        .unwrap_or(full)
        .to_uppercase()
}
