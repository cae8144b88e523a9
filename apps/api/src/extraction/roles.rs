//! Work-experience matcher: title / company / duration windows.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::extraction::text::{contains_any, is_section_heading, strip_bullets, truncate_chars, Document};
use crate::extraction::vocabulary::{COMPANY_SUFFIX_TERMS, JOB_TITLE_TERMS};
use crate::models::Role;

pub const MAX_ROLES: usize = 5;
const WINDOW: usize = 3;
const MAX_DESCRIPTION_LINES: usize = 3;
const MIN_DESCRIPTION_LINE_LEN: usize = 10;
const MAX_DESCRIPTION_CHARS: usize = 200;

static DURATION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(?:19|20)\d{2}|present|current").unwrap());

/// Scans every block for three consecutive lines that hold a title, a
/// company and a duration. At most `MAX_ROLES` roles are returned, in
/// document order.
pub fn extract_roles(doc: &Document) -> Vec<Role> {
    let mut roles = Vec::new();

    for block in doc.blocks() {
        let mut i = 0;
        while i + WINDOW <= block.len() && roles.len() < MAX_ROLES {
            let window = &block[i..i + WINDOW];
            match classify_window(window) {
                Some((title, company, duration)) => {
                    let description = describe(&block[i + WINDOW..], title);
                    roles.push(Role {
                        title: title.to_string(),
                        company: company.to_string(),
                        duration: duration.to_string(),
                        description,
                    });
                    i += WINDOW;
                }
                None => i += 1,
            }
        }
        if roles.len() >= MAX_ROLES {
            break;
        }
    }

    roles
}

/// Assigns the window's lines to (title, company, duration).
///
/// The last line carrying a year or "present" is the duration. Of the other
/// two, the title must hit the job-title vocabulary and the company the
/// company-suffix vocabulary; document order is tried before the swap.
fn classify_window<'a>(window: &[&'a str]) -> Option<(&'a str, &'a str, &'a str)> {
    let cleaned: Vec<&str> = window.iter().map(|l| strip_bullets(l)).collect();
    let duration_idx = cleaned.iter().rposition(|l| DURATION_RE.is_match(l))?;

    let mut rest = cleaned
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != duration_idx)
        .map(|(_, l)| *l);
    let first = rest.next()?;
    let second = rest.next()?;

    let is_title = |l: &str| contains_any(l, JOB_TITLE_TERMS);
    let is_company = |l: &str| contains_any(l, COMPANY_SUFFIX_TERMS);

    let (title, company) = if is_title(first) && is_company(second) {
        (first, second)
    } else if is_title(second) && is_company(first) {
        (second, first)
    } else {
        return None;
    };

    Some((title, company, cleaned[duration_idx]))
}

/// Joins up to three substantive lines following the matched window.
fn describe(following: &[&str], title: &str) -> String {
    let text = following
        .iter()
        .take_while(|l| !is_section_heading(l))
        .map(|l| strip_bullets(l))
        .filter(|l| l.chars().count() > MIN_DESCRIPTION_LINE_LEN)
        .take(MAX_DESCRIPTION_LINES)
        .collect::<Vec<_>>()
        .join(" ");

    let text = truncate_chars(&text, MAX_DESCRIPTION_CHARS).trim();
    if text.is_empty() {
        format!("Professional experience as {title}")
    } else {
        text.to_string()
    }
}
