//! Education, certification and achievement line matchers.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::extraction::text::{push_unique, strip_bullets, Document};
use crate::extraction::vocabulary::{
    ACHIEVEMENT_NOUNS, ACHIEVEMENT_VERBS, CERTIFICATION_TERMS, DEGREE_ABBREVIATIONS,
    EDUCATION_TERMS,
};

pub const MAX_EDUCATION: usize = 3;
pub const MAX_CERTIFICATIONS: usize = 3;
pub const MAX_ACHIEVEMENTS: usize = 5;
/// Each achievement pattern contributes at most this many lines.
const MAX_PER_PATTERN: usize = 3;

static EDUCATION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!(r"(?i)\b(?:{})(?:'s|s)?\b", alternation(EDUCATION_TERMS))).unwrap());
static DEGREE_ABBREVIATION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"(?i)(?:^|[\s(,])(?:{})(?:$|[\s),])",
        alternation(DEGREE_ABBREVIATIONS)
    ))
    .unwrap()
});
static EDUCATION_SECTION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(?:education|academic(?:\s+background)?|qualifications)\s*(?::\s*(.*))?$")
        .unwrap()
});
static CERTIFICATION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!(r"(?i)\b(?:{})\b", alternation(CERTIFICATION_TERMS))).unwrap());
static ACHIEVEMENT_VERB_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!(r"(?i)\b(?:{})\b", alternation(ACHIEVEMENT_VERBS))).unwrap());
static ACHIEVEMENT_NOUN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!(r"(?i)\b(?:{})\b", alternation(ACHIEVEMENT_NOUNS))).unwrap());

fn alternation(terms: &[&str]) -> String {
    terms
        .iter()
        .map(|t| regex::escape(t))
        .collect::<Vec<_>>()
        .join("|")
}

/// Non-blank, bullet-stripped lines matching `re`, at most `limit` of them.
fn matching_lines<'a>(doc: &Document<'a>, re: &Regex, limit: usize) -> Vec<&'a str> {
    doc.non_blank()
        .map(strip_bullets)
        .filter(|line| !line.is_empty() && re.is_match(line))
        .take(limit)
        .collect()
}

fn union_capped<'a>(groups: impl IntoIterator<Item = Vec<&'a str>>, cap: usize) -> Vec<String> {
    let mut out = Vec::new();
    for line in groups.into_iter().flatten() {
        push_unique(&mut out, line.to_string());
    }
    out.truncate(cap);
    out
}

/// Degree/institution lines, abbreviation lines and the `Education`
/// section body, unique, capped at `MAX_EDUCATION`.
pub fn extract_education(doc: &Document) -> Vec<String> {
    let section = doc
        .section_body(&EDUCATION_SECTION_RE)
        .map(|body| {
            body.into_iter()
                .map(strip_bullets)
                .filter(|l| !l.is_empty())
                .take(MAX_EDUCATION)
                .collect()
        })
        .unwrap_or_default();

    union_capped(
        [
            matching_lines(doc, &EDUCATION_RE, MAX_EDUCATION),
            matching_lines(doc, &DEGREE_ABBREVIATION_RE, MAX_EDUCATION),
            section,
        ],
        MAX_EDUCATION,
    )
}

pub fn extract_certifications(doc: &Document) -> Vec<String> {
    union_capped(
        [matching_lines(doc, &CERTIFICATION_RE, usize::MAX)],
        MAX_CERTIFICATIONS,
    )
}

/// Verb lines first, then noun lines; each pattern contributes at most
/// three lines before deduplication.
pub fn extract_achievements(doc: &Document) -> Vec<String> {
    union_capped(
        [
            matching_lines(doc, &ACHIEVEMENT_VERB_RE, MAX_PER_PATTERN),
            matching_lines(doc, &ACHIEVEMENT_NOUN_RE, MAX_PER_PATTERN),
        ],
        MAX_ACHIEVEMENTS,
    )
}
