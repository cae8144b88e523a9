//! Project matchers: section body, verb sentences, labels and noun phrases.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::extraction::text::{
    strip_bullets, truncate_chars, whole_word, Document,
};
use crate::extraction::vocabulary::{PROJECT_NOUNS, PROJECT_TECH_TERMS, PROJECT_VERBS};
use crate::models::Project;

pub const MAX_PROJECTS: usize = 4;
pub const UNKNOWN_TECH_STACK: &str = "Various Technologies";
const MAX_SECTION_LINES: usize = 3;
const MIN_LINE_LEN: usize = 15;
const MAX_LINE_LEN: usize = 100;
const MAX_NAME_CHARS: usize = 60;
const TECH_CONTEXT_CHARS: usize = 200;

static SECTION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(?:projects?|portfolio|work\s+samples?)\s*(?::\s*(.*))?$").unwrap()
});
static VERB_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"(?i)\b(?:{})\s+([^\n.]{{20,100}})",
        PROJECT_VERBS.join("|")
    ))
    .unwrap()
});
static LABEL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)project:\s*([^\n]{10,80})").unwrap());
static NOUN_PHRASE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"(?i)\b([a-z][a-z ]{{10,60}}\b(?:{}))\b",
        PROJECT_NOUNS.join("|")
    ))
    .unwrap()
});
static TECH_MATCHERS: Lazy<Vec<(&'static str, Regex)>> = Lazy::new(|| {
    PROJECT_TECH_TERMS
        .iter()
        .map(|term| (*term, whole_word(term)))
        .collect()
});

type ProjectMatcher = for<'a> fn(&Document<'a>) -> Vec<&'a str>;

/// Candidate sources in the order their lines are considered.
const PROJECT_MATCHERS: &[ProjectMatcher] = &[
    section_lines,
    verb_sentences,
    labeled_projects,
    noun_phrases,
];

/// Collects up to `MAX_PROJECTS` projects from all candidate sources.
pub fn extract_projects(doc: &Document) -> Vec<Project> {
    let mut projects: Vec<Project> = Vec::new();

    let candidates = PROJECT_MATCHERS.iter().flat_map(|matcher| matcher(doc));
    for candidate in candidates {
        if projects.len() >= MAX_PROJECTS {
            break;
        }

        let line = strip_bullets(candidate);
        let len = line.chars().count();
        if len <= MIN_LINE_LEN || len >= MAX_LINE_LEN || overlaps_existing(&projects, line) {
            continue;
        }

        projects.push(Project {
            name: truncate_chars(line, MAX_NAME_CHARS).trim_end().to_string(),
            tech_stack: tech_stack_near(doc.raw, line),
            summary: line.to_string(),
        });
    }

    projects
}

fn section_lines<'a>(doc: &Document<'a>) -> Vec<&'a str> {
    doc.section_body(&SECTION_RE)
        .map(|body| body.into_iter().take(MAX_SECTION_LINES).collect())
        .unwrap_or_default()
}

fn verb_sentences<'a>(doc: &Document<'a>) -> Vec<&'a str> {
    captured(&VERB_RE, doc.raw)
}

fn labeled_projects<'a>(doc: &Document<'a>) -> Vec<&'a str> {
    captured(&LABEL_RE, doc.raw)
}

fn noun_phrases<'a>(doc: &Document<'a>) -> Vec<&'a str> {
    captured(&NOUN_PHRASE_RE, doc.raw)
}

fn captured<'a>(re: &Regex, text: &'a str) -> Vec<&'a str> {
    re.captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
        .collect()
}

/// The same sentence is often picked up by more than one matcher.
fn overlaps_existing(projects: &[Project], line: &str) -> bool {
    let lower = line.to_lowercase();
    let lower = without_leading_verb(&lower);
    projects.iter().any(|p| {
        let existing = p.summary.to_lowercase();
        let existing = without_leading_verb(&existing);
        existing.contains(lower) || lower.contains(existing)
    })
}

fn without_leading_verb(lower: &str) -> &str {
    PROJECT_VERBS
        .iter()
        .find_map(|verb| lower.strip_prefix(verb))
        .map(str::trim_start)
        .unwrap_or(lower)
}

/// Technology names mentioned within 200 characters of the line's first
/// occurrence in the text.
fn tech_stack_near(raw: &str, line: &str) -> String {
    let (start, end) = match raw.find(line) {
        Some(pos) => (pos, pos + line.len()),
        None => (0, raw.len()),
    };
    let from = raw[..start]
        .char_indices()
        .rev()
        .nth(TECH_CONTEXT_CHARS - 1)
        .map_or(0, |(i, _)| i);
    let to = raw[end..]
        .char_indices()
        .nth(TECH_CONTEXT_CHARS)
        .map_or(raw.len(), |(i, _)| end + i);
    let context = &raw[from..to];

    let found: Vec<&str> = TECH_MATCHERS
        .iter()
        .filter(|(_, re)| re.is_match(context))
        .map(|(term, _)| *term)
        .collect();

    if found.is_empty() {
        UNKNOWN_TECH_STACK.to_string()
    } else {
        found.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn projects_of(text: &str) -> Vec<Project> {
        extract_projects(&Document::new(text))
    }

    #[test]
    fn test_projects_section_lines() {
        let text = "Projects\n• Expense tracker for small teams\n• Weather station telemetry feed\n\nSkills\nReact";
        let projects = projects_of(text);
        assert_eq!(projects.len(), 2);
        assert_eq!(projects[0].name, "Expense tracker for small teams");
        assert_eq!(projects[1].summary, "Weather station telemetry feed");
    }

    #[test]
    fn test_verb_sentence_with_nearby_tech() {
        let text = "Built a real-time chat service with React and Node for 5k users.";
        let projects = projects_of(text);
        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].summary, "a real-time chat service with React and Node for 5k users");
        assert_eq!(projects[0].tech_stack, "React, Node");
    }

    #[test]
    fn test_labeled_project() {
        let projects = projects_of("Project: Inventory forecasting engine");
        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].name, "Inventory forecasting engine");
        assert_eq!(projects[0].tech_stack, UNKNOWN_TECH_STACK);
    }

    #[test]
    fn test_tech_window_counts_characters_not_bytes() {
        let near = format!("React {}\nProject: Inventory forecasting engine", "é".repeat(150));
        let projects = projects_of(&near);
        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].tech_stack, "React");

        let far = format!("React {}\nProject: Inventory forecasting engine", "é".repeat(250));
        assert_eq!(projects_of(&far)[0].tech_stack, UNKNOWN_TECH_STACK);
    }

    #[test]
    fn test_noun_phrase_project() {
        let projects = projects_of("Personal budgeting dashboard in my spare time");
        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].summary, "Personal budgeting dashboard");
    }

    #[test]
    fn test_short_and_long_candidates_rejected() {
        assert!(projects_of("Project: Tiny thing").is_empty());
        let long = format!("Built {}", "z".repeat(120));
        assert!(projects_of(&long).is_empty());
    }

    #[test]
    fn test_same_sentence_not_duplicated() {
        let text = "Developed an analytics reporting platform for finance";
        let projects = projects_of(text);
        assert_eq!(projects.len(), 1);
    }

    #[test]
    fn test_projects_capped_at_four() {
        let text = (1..=6)
            .map(|i| format!("Project: Internal service number {i} rollout"))
            .collect::<Vec<_>>()
            .join("\n");
        assert_eq!(projects_of(&text).len(), MAX_PROJECTS);
    }

    #[test]
    fn test_name_truncated_to_sixty_chars() {
        let summary = "Distributed ledger reconciliation service for banking partners";
        let projects = projects_of(&format!("Project: {summary}"));
        assert_eq!(projects[0].summary, summary);
        assert!(projects[0].name.chars().count() <= 60);
    }

    #[test]
    fn test_empty_text_has_no_projects() {
        assert!(projects_of("").is_empty());
    }
}
