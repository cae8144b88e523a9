//! Skill matchers: vocabulary scan plus the labeled skills section.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::extraction::text::{contains_year, push_unique_ci, title_case, whole_word, Document};
use crate::extraction::vocabulary::SKILL_TERMS;

pub const MAX_SKILLS: usize = 20;
const MAX_SECTION_SKILLS: usize = 15;
const MIN_TOKEN_LEN: usize = 2;
const MAX_TOKEN_LEN: usize = 24;

static SKILL_MATCHERS: Lazy<Vec<(&'static str, Regex)>> =
    Lazy::new(|| SKILL_TERMS.iter().map(|term| (*term, whole_word(term))).collect());
static SECTION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^(?:technical\s+skills?|skills?|technologies|technical\s+competencies|competencies)\s*(?::\s*(.*))?$",
    )
    .unwrap()
});
static TOKEN_SPLIT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[,•\n|;]|\s-\s").unwrap());

/// Union of vocabulary hits and section tokens, case-insensitively unique,
/// first-seen order, capped at `MAX_SKILLS`.
pub fn extract_skills(doc: &Document) -> Vec<String> {
    let mut skills = Vec::new();

    for term in vocabulary_hits(doc.raw) {
        push_unique_ci(&mut skills, term.to_string());
    }
    for token in section_tokens(doc) {
        push_unique_ci(&mut skills, token);
    }

    skills.truncate(MAX_SKILLS);
    skills
}

fn vocabulary_hits(text: &str) -> Vec<&'static str> {
    SKILL_MATCHERS
        .iter()
        .filter(|(_, re)| re.is_match(text))
        .map(|(term, _)| *term)
        .collect()
}

/// Tokens listed under a `Skills` / `Technologies` heading.
fn section_tokens(doc: &Document) -> Vec<String> {
    let Some(body) = doc.section_body(&SECTION_RE) else {
        return Vec::new();
    };

    let joined = body.join("\n");
    TOKEN_SPLIT_RE
        .split(&joined)
        .map(|t| t.trim().trim_start_matches('-').trim())
        .filter(|t| {
            let len = t.chars().count();
            (MIN_TOKEN_LEN..=MAX_TOKEN_LEN).contains(&len) && !contains_year(t)
        })
        .take(MAX_SECTION_SKILLS)
        .map(normalize_case)
        .collect()
}

/// All-lowercase tokens are title-cased; anything else keeps its spelling.
fn normalize_case(token: &str) -> String {
    if token.chars().any(char::is_uppercase) {
        token.to_string()
    } else {
        title_case(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skills_of(text: &str) -> Vec<String> {
        extract_skills(&Document::new(text))
    }

    #[test]
    fn test_vocabulary_hits_use_canonical_spelling() {
        let skills = skills_of("worked with react, python and aws daily");
        assert!(skills.contains(&"React".to_string()));
        assert!(skills.contains(&"Python".to_string()));
        assert!(skills.contains(&"AWS".to_string()));
    }

    #[test]
    fn test_symbol_terms_match() {
        let skills = skills_of("C++ and C# services behind a CI/CD pipeline on Node.js");
        for expected in ["C++", "C#", "CI/CD", "Node.js"] {
            assert!(skills.contains(&expected.to_string()), "missing {expected}");
        }
    }

    #[test]
    fn test_java_not_matched_inside_javascript() {
        let skills = skills_of("JavaScript");
        assert_eq!(skills, vec!["JavaScript".to_string()]);
    }

    #[test]
    fn test_section_tokens_are_split_filtered_and_cased() {
        let text = "Skills: rust, Terraform | event sourcing; 2019 hackathon\n- observability";
        let skills = skills_of(text);
        assert!(skills.contains(&"Rust".to_string()));
        assert!(skills.contains(&"Terraform".to_string()));
        assert!(skills.contains(&"Event Sourcing".to_string()));
        assert!(skills.contains(&"Observability".to_string()));
        assert!(!skills.iter().any(|s| s.contains("2019")));
    }

    #[test]
    fn test_hyphenated_tokens_stay_whole() {
        let skills = skills_of("Skills: Real-time Systems - Kafka Streams, E-commerce");
        for expected in ["Real-time Systems", "Kafka Streams", "E-commerce"] {
            assert!(skills.contains(&expected.to_string()), "missing {expected}");
        }
        assert!(!skills.iter().any(|s| s == "Real" || s == "time Systems"));
    }

    #[test]
    fn test_section_does_not_duplicate_vocabulary_hits() {
        let skills = skills_of("Technical Skills\nreact, REACT, React");
        assert_eq!(skills, vec!["React".to_string()]);
    }

    #[test]
    fn test_overlong_tokens_dropped() {
        let skills = skills_of("Skills: a very long description of everything I know");
        assert!(skills.is_empty());
    }

    #[test]
    fn test_skills_capped_at_twenty() {
        let text = SKILL_TERMS.join(" , ");
        let skills = skills_of(&text);
        assert_eq!(skills.len(), MAX_SKILLS);
    }

    #[test]
    fn test_skills_unique_case_insensitive() {
        let skills = skills_of("Skills: Python, python, PYTHON, Go, go");
        let mut lowered: Vec<String> = skills.iter().map(|s| s.to_lowercase()).collect();
        let before = lowered.len();
        lowered.sort();
        lowered.dedup();
        assert_eq!(before, lowered.len());
    }

    #[test]
    fn test_empty_text_has_no_skills() {
        assert!(skills_of("").is_empty());
    }
}
