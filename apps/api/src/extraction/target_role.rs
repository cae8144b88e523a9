use crate::extraction::vocabulary::{DEFAULT_TARGET_ROLE, TARGET_ROLE_CATEGORIES};
use crate::models::Role;

/// The first extracted role's title, else the first skill category with a
/// hit (frontend, backend, infra, data), else a generic label.
pub fn infer_target_role(roles: &[Role], skills: &[String]) -> String {
    if let Some(role) = roles.first() {
        return role.title.clone();
    }

    TARGET_ROLE_CATEGORIES
        .iter()
        .find(|(_, members)| skills.iter().any(|s| members.contains(&s.as_str())))
        .map(|(label, _)| label.to_string())
        .unwrap_or_else(|| DEFAULT_TARGET_ROLE.to_string())
}
