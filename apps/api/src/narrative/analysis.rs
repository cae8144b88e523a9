//! Profile analysis passes feeding the paragraph and tagline templates.

use crate::models::ParsedProfile;

// ──────────────────────────────────────────────────────────────
// Skill buckets
// ──────────────────────────────────────────────────────────────

pub const FRONTEND_SKILLS: &[&str] = &[
    "React",
    "Angular",
    "Vue",
    "JavaScript",
    "TypeScript",
    "HTML",
    "CSS",
    "Tailwind",
    "Bootstrap",
];

pub const BACKEND_SKILLS: &[&str] = &[
    "Node.js", "Python", "Java", "C#", "Express", "Django", "Flask", "Spring", "API", "REST",
    "GraphQL",
];

pub const DATABASE_SKILLS: &[&str] = &["SQL", "MongoDB", "PostgreSQL", "MySQL"];

pub const CLOUD_SKILLS: &[&str] = &["AWS", "Azure", "GCP", "Docker", "Kubernetes"];

const SENIOR_TITLE_TERMS: &[&str] = &["senior", "lead", "principal"];
const JUNIOR_TITLE_TERMS: &[&str] = &["junior", "intern"];
const LEADERSHIP_TITLE_TERMS: &[&str] = &["lead", "manager", "director"];

const MAX_LISTED_COMPANIES: usize = 3;
/// More distinct project technologies than this counts as a diverse stack.
const DIVERSE_TECH_THRESHOLD: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Seniority {
    Junior,
    Mid,
    Senior,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimaryStack {
    Frontend,
    Backend,
    General,
}

impl PrimaryStack {
    pub fn as_str(self) -> &'static str {
        match self {
            PrimaryStack::Frontend => "frontend",
            PrimaryStack::Backend => "backend",
            PrimaryStack::General => "general",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CareerProgression {
    pub seniority: Seniority,
    pub has_leadership: bool,
    /// Distinct non-empty employers in role order, at most three.
    pub companies: Vec<String>,
    pub company_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TechExpertise {
    pub frontend: Vec<String>,
    pub backend: Vec<String>,
    pub database: Vec<String>,
    pub cloud: Vec<String>,
    pub is_full_stack: bool,
    pub is_cloud_native: bool,
    pub primary_stack: PrimaryStack,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectImpact {
    pub has_multiple_projects: bool,
    pub technologies: Vec<String>,
    pub diverse_tech: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileAnalysis {
    pub progression: CareerProgression,
    pub expertise: TechExpertise,
    pub impact: ProjectImpact,
}

impl ProfileAnalysis {
    pub fn of(profile: &ParsedProfile) -> Self {
        Self {
            progression: career_progression(profile),
            expertise: tech_expertise(&profile.skills),
            impact: project_impact(profile),
        }
    }
}

fn any_title_contains(profile: &ParsedProfile, terms: &[&str]) -> bool {
    profile.roles.iter().any(|role| {
        let title = role.title.to_lowercase();
        terms.iter().any(|t| title.contains(t))
    })
}

pub fn career_progression(profile: &ParsedProfile) -> CareerProgression {
    let seniority = if any_title_contains(profile, SENIOR_TITLE_TERMS) {
        Seniority::Senior
    } else if any_title_contains(profile, JUNIOR_TITLE_TERMS) {
        Seniority::Junior
    } else {
        Seniority::Mid
    };

    let mut distinct: Vec<&str> = Vec::new();
    for company in profile.roles.iter().map(|r| r.company.trim()) {
        if !company.is_empty() && !distinct.contains(&company) {
            distinct.push(company);
        }
    }

    CareerProgression {
        seniority,
        has_leadership: any_title_contains(profile, LEADERSHIP_TITLE_TERMS),
        company_count: distinct.len(),
        companies: distinct
            .into_iter()
            .take(MAX_LISTED_COMPANIES)
            .map(str::to_string)
            .collect(),
    }
}

fn bucket(skills: &[String], members: &[&str]) -> Vec<String> {
    skills
        .iter()
        .filter(|s| members.contains(&s.as_str()))
        .cloned()
        .collect()
}

pub fn tech_expertise(skills: &[String]) -> TechExpertise {
    let frontend = bucket(skills, FRONTEND_SKILLS);
    let backend = bucket(skills, BACKEND_SKILLS);
    let database = bucket(skills, DATABASE_SKILLS);
    let cloud = bucket(skills, CLOUD_SKILLS);

    let primary_stack = if frontend.len() > backend.len() {
        PrimaryStack::Frontend
    } else if !backend.is_empty() {
        PrimaryStack::Backend
    } else {
        PrimaryStack::General
    };

    TechExpertise {
        is_full_stack: !frontend.is_empty() && !backend.is_empty(),
        is_cloud_native: !cloud.is_empty(),
        primary_stack,
        frontend,
        backend,
        database,
        cloud,
    }
}

pub fn project_impact(profile: &ParsedProfile) -> ProjectImpact {
    let mut technologies: Vec<String> = Vec::new();
    for tech in profile.projects.iter().flat_map(|p| p.technologies()) {
        if !technologies.iter().any(|t| t == tech) {
            technologies.push(tech.to_string());
        }
    }

    ProjectImpact {
        has_multiple_projects: profile.projects.len() > 1,
        diverse_tech: technologies.len() > DIVERSE_TECH_THRESHOLD,
        technologies,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Project, Role};

    fn role(title: &str, company: &str) -> Role {
        Role {
            title: title.to_string(),
            company: company.to_string(),
            duration: "2020 - Present".to_string(),
            description: String::new(),
        }
    }

    fn project(tech_stack: &str) -> Project {
        Project {
            name: "Ledger".to_string(),
            tech_stack: tech_stack.to_string(),
            summary: String::new(),
        }
    }

    fn profile(roles: Vec<Role>, projects: Vec<Project>, skills: &[&str]) -> ParsedProfile {
        ParsedProfile {
            name: "Jane Doe".to_string(),
            roles,
            projects,
            skills: skills.iter().map(|s| s.to_string()).collect(),
            education: vec!["BSc".to_string()],
            certifications: vec![],
            achievements: vec![],
            target_role: "Engineer".to_string(),
        }
    }

    #[test]
    fn test_seniority_levels() {
        let senior = profile(vec![role("Principal Engineer", "A")], vec![], &[]);
        let junior = profile(vec![role("Engineering Intern", "A")], vec![], &[]);
        let mid = profile(vec![role("Software Engineer", "A")], vec![], &[]);

        assert_eq!(career_progression(&senior).seniority, Seniority::Senior);
        assert_eq!(career_progression(&junior).seniority, Seniority::Junior);
        assert_eq!(career_progression(&mid).seniority, Seniority::Mid);
    }

    #[test]
    fn test_leadership_and_distinct_companies() {
        let p = profile(
            vec![
                role("Engineering Manager", "Acme"),
                role("Engineer", "Acme"),
                role("Engineer", ""),
                role("Engineer", "Globex"),
            ],
            vec![],
            &[],
        );
        let progression = career_progression(&p);
        assert!(progression.has_leadership);
        assert_eq!(progression.company_count, 2);
        assert_eq!(progression.companies, vec!["Acme", "Globex"]);
    }

    #[test]
    fn test_full_stack_cloud_expertise() {
        let skills: Vec<String> = ["React", "Python", "AWS", "SQL"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let expertise = tech_expertise(&skills);
        assert!(expertise.is_full_stack);
        assert!(expertise.is_cloud_native);
        assert_eq!(expertise.database, vec!["SQL"]);
        // one each: ties go to backend
        assert_eq!(expertise.primary_stack, PrimaryStack::Backend);
    }

    #[test]
    fn test_primary_stack_frontend_and_general() {
        let front: Vec<String> = vec!["React".into(), "CSS".into(), "Python".into()];
        assert_eq!(tech_expertise(&front).primary_stack, PrimaryStack::Frontend);
        let none: Vec<String> = vec!["Figma".into()];
        assert_eq!(tech_expertise(&none).primary_stack, PrimaryStack::General);
    }

    #[test]
    fn test_project_impact_counts_distinct_tech() {
        let p = profile(
            vec![],
            vec![project("React, Node"), project("React, Go, Rust")],
            &[],
        );
        let impact = project_impact(&p);
        assert!(impact.has_multiple_projects);
        assert_eq!(impact.technologies, vec!["React", "Node", "Go", "Rust"]);
        assert!(impact.diverse_tech);

        let single = profile(vec![], vec![project("React, Node")], &[]);
        let impact = project_impact(&single);
        assert!(!impact.has_multiple_projects);
        assert!(!impact.diverse_tech);
    }
}
