//! Fallback policy: the single place where empty fields get their defaults.

use std::borrow::Cow;

use crate::models::{ParsedProfile, Project, Role};

pub const FALLBACK_NAME: &str = "Professional";
pub const FALLBACK_COMPANY: &str = "Previous Company";
pub const FALLBACK_DURATION: &str = "2022 - Present";
pub const FALLBACK_ROLE_DESCRIPTION: &str =
    "Professional experience in software development and technology solutions";
pub const FALLBACK_PROJECT_NAME: &str = "Professional Development Project";
pub const FALLBACK_TECH_STACK: &str = "Modern Technologies";
pub const FALLBACK_PROJECT_SUMMARY: &str =
    "Developed and implemented technology solutions using industry best practices";
pub const FALLBACK_SKILLS: &[&str] = &["Problem Solving", "Team Collaboration", "Technical Skills"];
pub const FALLBACK_EDUCATION: &str = "Professional Education Background";

/// Natural matcher output before any default is applied. Empty means
/// "no signal".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedFields {
    pub name: Option<String>,
    pub roles: Vec<Role>,
    pub projects: Vec<Project>,
    pub skills: Vec<String>,
    pub education: Vec<String>,
    pub certifications: Vec<String>,
    pub achievements: Vec<String>,
    pub target_role: String,
}

fn fallback_role(target_role: &str) -> Role {
    Role {
        title: target_role.to_string(),
        company: FALLBACK_COMPANY.to_string(),
        duration: FALLBACK_DURATION.to_string(),
        description: FALLBACK_ROLE_DESCRIPTION.to_string(),
    }
}

fn fallback_project(skills: &[String]) -> Project {
    let tech_stack = if skills.is_empty() {
        FALLBACK_TECH_STACK.to_string()
    } else {
        skills.iter().take(3).cloned().collect::<Vec<_>>().join(", ")
    };
    Project {
        name: FALLBACK_PROJECT_NAME.to_string(),
        tech_stack,
        summary: FALLBACK_PROJECT_SUMMARY.to_string(),
    }
}

fn fallback_skills() -> Vec<String> {
    FALLBACK_SKILLS.iter().map(|s| s.to_string()).collect()
}

fn or_default<T>(items: Vec<T>, default: impl FnOnce() -> T) -> Vec<T> {
    if items.is_empty() {
        vec![default()]
    } else {
        items
    }
}

/// Turns natural matcher output into a profile whose required collections
/// are all non-empty. The fallback project reads the *natural* skills, so a
/// skill-less résumé gets the generic tech stack rather than the fallback
/// skill labels.
pub fn apply(fields: ExtractedFields) -> ParsedProfile {
    let ExtractedFields {
        name,
        roles,
        projects,
        skills,
        education,
        certifications,
        achievements,
        target_role,
    } = fields;

    let roles = or_default(roles, || fallback_role(&target_role));
    let projects = or_default(projects, || fallback_project(&skills));
    let skills = if skills.is_empty() { fallback_skills() } else { skills };
    let education = or_default(education, || FALLBACK_EDUCATION.to_string());

    ParsedProfile {
        name: name
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| FALLBACK_NAME.to_string()),
        roles,
        projects,
        skills,
        education,
        certifications,
        achievements,
        target_role,
    }
}

/// Borrows a profile that already satisfies the non-empty invariant, or
/// returns a patched copy. Used for profiles that did not come straight out
/// of the extractor (e.g. edited by a user).
pub fn complete(profile: &ParsedProfile) -> Cow<'_, ParsedProfile> {
    if profile.is_complete() && !profile.name.trim().is_empty() {
        return Cow::Borrowed(profile);
    }

    let target_role = if profile.target_role.trim().is_empty() {
        crate::extraction::target_role::infer_target_role(&profile.roles, &profile.skills)
    } else {
        profile.target_role.clone()
    };

    Cow::Owned(apply(ExtractedFields {
        name: Some(profile.name.clone()),
        roles: profile.roles.clone(),
        projects: profile.projects.clone(),
        skills: profile.skills.clone(),
        education: profile.education.clone(),
        certifications: profile.certifications.clone(),
        achievements: profile.achievements.clone(),
        target_role,
    }))
}
