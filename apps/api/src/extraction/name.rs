//! Candidate-name matchers, tried in priority order.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::extraction::text::{title_case, Document};
use crate::extraction::vocabulary::{COMPANY_SUFFIX_TERMS, JOB_TITLE_TERMS, SECTION_HEADINGS};

/// How many non-blank lines count as "the top of the document".
const HEADER_WINDOW: usize = 5;
const MIN_NAME_LEN: usize = 3;
const MAX_NAME_LEN: usize = 50;
const MAX_NAME_WORDS: usize = 4;

static CAPITALIZED_NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\p{Lu}\p{Ll}+(?:[ \t]+\p{Lu}\p{Ll}*){1,3}$").unwrap());
static UPPERCASE_HEADER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z][A-Z ]{2,39}$").unwrap());
static INLINE_CONTACT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\p{Lu}\p{Ll}+(?:[ \t]+\p{Lu}\p{Ll}*){1,3})\s*[|•·,\-]\s*(.+)$").unwrap()
});
static LABELED_NAME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^\s*(?i:(?:full\s+)?name)\s*:\s*(\p{Lu}\p{Ll}+(?:[ \t]+\p{Lu}\p{Ll}*){1,3})")
        .unwrap()
});
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}").unwrap());
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\+?\(?\d[\d\s().-]{5,}\d").unwrap());
static YEAR_RANGE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:19|20)\d{2}\s*[-–]\s*(?:19|20)\d{2}$").unwrap());
const MIN_PHONE_DIGITS: usize = 7;
const MAX_PHONE_DIGITS: usize = 15;

type NameMatcher = fn(&Document) -> Vec<String>;

/// Matchers in priority order. The first plausible candidate wins.
const NAME_MATCHERS: &[NameMatcher] = &[
    header_line,
    uppercase_header,
    before_contact,
    labeled_name,
];

/// Returns the best-effort candidate name, or `None` when nothing plausible
/// is found.
pub fn extract_name(doc: &Document) -> Option<String> {
    NAME_MATCHERS
        .iter()
        .flat_map(|matcher| matcher(doc))
        .find(|candidate| is_plausible_name(candidate))
}

/// A phone number has 7 to 15 digits and is not a `2019-2022` style range.
fn is_phone(candidate: &str) -> bool {
    let candidate = candidate.trim();
    let digits = candidate.chars().filter(char::is_ascii_digit).count();
    (MIN_PHONE_DIGITS..=MAX_PHONE_DIGITS).contains(&digits) && !YEAR_RANGE_RE.is_match(candidate)
}

fn has_contact_token(line: &str) -> bool {
    EMAIL_RE.is_match(line) || PHONE_RE.find_iter(line).any(|m| is_phone(m.as_str()))
}

fn header_line(doc: &Document) -> Vec<String> {
    doc.non_blank()
        .take(HEADER_WINDOW)
        .filter(|line| {
            !line.contains('@')
                && !line.to_lowercase().contains("http")
                && !line.chars().any(|c| c.is_ascii_digit())
        })
        .filter(|line| CAPITALIZED_NAME_RE.is_match(line))
        .map(str::to_string)
        .collect()
}

fn uppercase_header(doc: &Document) -> Vec<String> {
    doc.non_blank()
        .take(HEADER_WINDOW)
        .filter(|line| UPPERCASE_HEADER_RE.is_match(line))
        .filter(|line| (2..=MAX_NAME_WORDS).contains(&line.split_whitespace().count()))
        .map(title_case)
        .collect()
}

fn before_contact(doc: &Document) -> Vec<String> {
    let lines: Vec<&str> = doc.non_blank().collect();
    let mut candidates = Vec::new();

    for (i, line) in lines.iter().enumerate() {
        if let Some(caps) = INLINE_CONTACT_RE.captures(line) {
            if has_contact_token(&caps[2]) {
                candidates.push(caps[1].trim().to_string());
                continue;
            }
        }
        let next_has_contact = lines.get(i + 1).is_some_and(|next| has_contact_token(next));
        if next_has_contact && CAPITALIZED_NAME_RE.is_match(line) {
            candidates.push(line.to_string());
        }
    }

    candidates
}

fn labeled_name(doc: &Document) -> Vec<String> {
    LABELED_NAME_RE
        .captures_iter(doc.raw)
        .map(|caps| caps[1].trim().to_string())
        .collect()
}

/// Rejects candidates that are really headings, titles or employers.
fn is_plausible_name(candidate: &str) -> bool {
    let len = candidate.chars().count();
    if !(MIN_NAME_LEN..=MAX_NAME_LEN).contains(&len) {
        return false;
    }

    let lower = candidate.to_lowercase();
    if lower.contains("resume") || lower.contains("curriculum") {
        return false;
    }
    if candidate.chars().any(|c| c.is_ascii_digit()) {
        return false;
    }

    let words: Vec<&str> = lower.split_whitespace().collect();
    if words.len() > MAX_NAME_WORDS || SECTION_HEADINGS.contains(&lower.as_str()) {
        return false;
    }

    !words.iter().any(|word| {
        SECTION_HEADINGS.contains(word)
            || COMPANY_SUFFIX_TERMS.contains(word)
            || JOB_TITLE_TERMS.iter().any(|term| word.starts_with(term))
    })
}
