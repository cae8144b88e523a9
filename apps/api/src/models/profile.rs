use serde::{Deserialize, Serialize};

/// A single work-history entry recognized in résumé text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    pub title: String,
    pub company: String,
    pub duration: String,
    pub description: String,
}

/// A project mention. `tech_stack` is a `", "`-joined list of technology names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub tech_stack: String,
    pub summary: String,
}

impl Project {
    /// Splits `tech_stack` back into its individual technology names.
    pub fn technologies(&self) -> impl Iterator<Item = &str> {
        self.tech_stack
            .split(", ")
            .map(str::trim)
            .filter(|t| !t.is_empty())
    }
}

/// Structured career data produced by the extractor.
///
/// `roles`, `projects`, `skills` and `education` are never empty when the
/// profile comes out of `extraction::extract`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedProfile {
    pub name: String,
    pub roles: Vec<Role>,
    pub projects: Vec<Project>,
    pub skills: Vec<String>,
    pub education: Vec<String>,
    #[serde(default)]
    pub certifications: Vec<String>,
    #[serde(default)]
    pub achievements: Vec<String>,
    pub target_role: String,
}

impl ParsedProfile {
    /// True when every collection the synthesizer indexes into is non-empty.
    pub fn is_complete(&self) -> bool {
        !self.roles.is_empty()
            && !self.projects.is_empty()
            && !self.skills.is_empty()
            && !self.education.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_technologies_splits_and_trims() {
        let project = Project {
            name: "Ledger".to_string(),
            tech_stack: "React, Python, , AWS".to_string(),
            summary: String::new(),
        };
        let techs: Vec<&str> = project.technologies().collect();
        assert_eq!(techs, vec!["React", "Python", "AWS"]);
    }

    #[test]
    fn test_profile_missing_optional_lists_deserializes() {
        let json = r#"{
            "name": "Jane Doe",
            "roles": [{"title": "Engineer", "company": "Acme", "duration": "2020", "description": ""}],
            "projects": [{"name": "Ledger", "tech_stack": "Rust", "summary": "A ledger"}],
            "skills": ["Rust"],
            "education": ["BS Computer Science"],
            "target_role": "Engineer"
        }"#;
        let profile: ParsedProfile = serde_json::from_str(json).unwrap();
        assert!(profile.certifications.is_empty());
        assert!(profile.achievements.is_empty());
        assert!(profile.is_complete());
    }

    #[test]
    fn test_profile_without_roles_is_incomplete() {
        let profile = ParsedProfile {
            name: "Jane".to_string(),
            roles: vec![],
            projects: vec![],
            skills: vec!["Rust".to_string()],
            education: vec![],
            certifications: vec![],
            achievements: vec![],
            target_role: "Engineer".to_string(),
        };
        assert!(!profile.is_complete());
    }
}
