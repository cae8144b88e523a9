//! Line-level view of résumé text shared by every matcher.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::extraction::vocabulary::SECTION_HEADINGS;

const BULLET_MARKERS: &[char] = &['•', '-', '*', '▪', '◦', '–', '·', '>'];

static YEAR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d{4}").unwrap());

/// Prepared résumé text: the raw string plus trimmed lines. Blank lines are
/// kept as `""` because they separate blocks.
#[derive(Debug, Clone)]
pub struct Document<'a> {
    pub raw: &'a str,
    pub lines: Vec<&'a str>,
}

impl<'a> Document<'a> {
    pub fn new(raw: &'a str) -> Self {
        Self {
            raw,
            lines: raw.split('\n').map(str::trim).collect(),
        }
    }

    pub fn non_blank(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.lines.iter().copied().filter(|l| !l.is_empty())
    }

    /// Runs of consecutive non-blank lines.
    pub fn blocks(&self) -> Vec<&[&'a str]> {
        self.lines
            .split(|l| l.is_empty())
            .filter(|block| !block.is_empty())
            .collect()
    }

    /// Finds the first line matching `heading` and returns its body: the
    /// inline remainder captured by group 1 (if any), then the following
    /// lines up to the next blank line or section heading. Blank lines
    /// directly under the heading are skipped.
    pub fn section_body(&self, heading: &Regex) -> Option<Vec<&'a str>> {
        let (index, inline) = self.lines.iter().enumerate().find_map(|(i, line)| {
            heading
                .captures(line)
                .map(|caps| (i, caps.get(1).map(|m| m.as_str().trim())))
        })?;

        let mut body = Vec::new();
        if let Some(rest) = inline.filter(|r| !r.is_empty()) {
            body.push(rest);
        }

        let mut started = !body.is_empty();
        for line in &self.lines[index + 1..] {
            if line.is_empty() {
                if started {
                    break;
                }
                continue;
            }
            if is_section_heading(line) {
                break;
            }
            started = true;
            body.push(*line);
        }

        Some(body)
    }
}

/// Removes leading bullet markers and surrounding whitespace.
pub fn strip_bullets(line: &str) -> &str {
    line.trim().trim_start_matches(BULLET_MARKERS).trim()
}

/// True when the line is a bare section heading like `Skills:`.
pub fn is_section_heading(line: &str) -> bool {
    let normalized = strip_bullets(line)
        .trim_end_matches(':')
        .trim()
        .to_lowercase();
    SECTION_HEADINGS.contains(&normalized.as_str())
}

/// Case-insensitive substring hit against any term.
pub fn contains_any(line: &str, terms: &[&str]) -> bool {
    let lower = line.to_lowercase();
    terms.iter().any(|t| lower.contains(t))
}

pub fn contains_year(s: &str) -> bool {
    YEAR_RE.is_match(s)
}

/// Builds a case-insensitive whole-word matcher. Word edges are any
/// non-alphanumeric character, so terms like `C++` or `Node.js` still match.
pub fn whole_word(term: &str) -> Regex {
    let pattern = format!(
        r"(?i)(?:^|[^A-Za-z0-9]){}(?:$|[^A-Za-z0-9])",
        regex::escape(term)
    );
    Regex::new(&pattern).expect("escaped term is a valid pattern")
}

/// Upper-cases the first letter of each word and lower-cases the rest.
pub fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Truncates to at most `max` characters on a char boundary.
pub fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// Appends `item` unless an entry equal to it (ignoring case) is present.
pub fn push_unique_ci(items: &mut Vec<String>, item: String) {
    let lower = item.to_lowercase();
    if !items.iter().any(|i| i.to_lowercase() == lower) {
        items.push(item);
    }
}

/// Appends `item` unless it is already present verbatim.
pub fn push_unique(items: &mut Vec<String>, item: String) {
    if !items.contains(&item) {
        items.push(item);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_keeps_blank_lines_as_separators() {
        let doc = Document::new("a\n  b  \n\n c\r\n");
        assert_eq!(doc.lines, vec!["a", "b", "", "c", ""]);
        assert_eq!(doc.blocks().len(), 2);
        assert_eq!(doc.non_blank().count(), 3);
    }

    #[test]
    fn test_section_body_with_inline_remainder() {
        let doc = Document::new("Skills: Rust, Go\nSQL\n\nEducation\nBS");
        let heading = Regex::new(r"(?i)^skills\s*(?::\s*(.*))?$").unwrap();
        let body = doc.section_body(&heading).unwrap();
        assert_eq!(body, vec!["Rust, Go", "SQL"]);
    }

    #[test]
    fn test_section_body_skips_blank_after_heading_and_stops_at_heading() {
        let doc = Document::new("Skills\n\nRust\nEducation\nBS");
        let heading = Regex::new(r"(?i)^skills\s*(?::\s*(.*))?$").unwrap();
        let body = doc.section_body(&heading).unwrap();
        assert_eq!(body, vec!["Rust"]);
    }

    #[test]
    fn test_section_body_missing_heading() {
        let doc = Document::new("nothing here");
        let heading = Regex::new(r"(?i)^skills\s*(?::\s*(.*))?$").unwrap();
        assert!(doc.section_body(&heading).is_none());
    }

    #[test]
    fn test_strip_bullets() {
        assert_eq!(strip_bullets("  • Built a thing"), "Built a thing");
        assert_eq!(strip_bullets("- real-time API"), "real-time API");
    }

    #[test]
    fn test_whole_word_handles_symbols() {
        assert!(whole_word("C++").is_match("Languages: C++, Rust"));
        assert!(whole_word("Node.js").is_match("node.js backend"));
        assert!(!whole_word("Java").is_match("JavaScript only"));
        assert!(whole_word("Java").is_match("Java"));
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("machine learning"), "Machine Learning");
        assert_eq!(title_case("JANE DOE"), "Jane Doe");
    }

    #[test]
    fn test_truncate_chars_respects_boundaries() {
        assert_eq!(truncate_chars("résumé", 3), "rés");
        assert_eq!(truncate_chars("abc", 10), "abc");
    }

    #[test]
    fn test_push_unique_ci() {
        let mut items = vec!["React".to_string()];
        push_unique_ci(&mut items, "react".to_string());
        push_unique_ci(&mut items, "Rust".to_string());
        assert_eq!(items, vec!["React", "Rust"]);
    }

    #[test]
    fn test_is_section_heading() {
        assert!(is_section_heading("Work Experience:"));
        assert!(is_section_heading("SKILLS"));
        assert!(!is_section_heading("Skills in leading teams"));
    }
}
