// Résumé text extraction.
// Each field has its own matcher chain; defaults are applied once, in `fallback`.

pub mod credentials;
pub mod fallback;
pub mod handlers;
pub mod name;
pub mod projects;
pub mod roles;
pub mod skills;
pub mod target_role;
pub mod text;
pub mod vocabulary;

use tracing::debug;

use crate::extraction::fallback::ExtractedFields;
use crate::extraction::text::Document;
use crate::models::ParsedProfile;

/// Turns free-form résumé text into a `ParsedProfile`. Never fails: any
/// field without a signal gets its fallback value.
pub fn extract(raw_text: &str) -> ParsedProfile {
    let doc = Document::new(raw_text);

    let name = name::extract_name(&doc);
    let roles = roles::extract_roles(&doc);
    let projects = projects::extract_projects(&doc);
    let skills = skills::extract_skills(&doc);
    let education = credentials::extract_education(&doc);
    let certifications = credentials::extract_certifications(&doc);
    let achievements = credentials::extract_achievements(&doc);
    let target_role = target_role::infer_target_role(&roles, &skills);

    debug!(
        name_found = name.is_some(),
        roles = roles.len(),
        projects = projects.len(),
        skills = skills.len(),
        education = education.len(),
        certifications = certifications.len(),
        achievements = achievements.len(),
        target_role = %target_role,
        "extracted profile fields"
    );

    fallback::apply(ExtractedFields {
        name,
        roles,
        projects,
        skills,
        education,
        certifications,
        achievements,
        target_role,
    })
}
