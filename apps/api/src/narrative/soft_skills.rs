//! Rule-based soft-skill inference. Rules are evaluated in order and the
//! result is capped at `MAX_SOFT_SKILLS`.

use crate::models::{ParsedProfile, SoftSkill};
use crate::narrative::paragraphs::leading;

pub const MAX_SOFT_SKILLS: usize = 3;

const LEADERSHIP_TITLE_TERMS: &[&str] = &["lead", "senior", "manager"];
const PROBLEM_SOLVING_MIN_SKILLS: usize = 5;
const ADAPTABILITY_MIN_SKILLS: usize = 7;
const DETAILED_DESCRIPTION_CHARS: usize = 50;

type SoftSkillRule = fn(&ParsedProfile) -> Option<SoftSkill>;

const SOFT_SKILL_RULES: &[SoftSkillRule] = &[leadership, problem_solving, adaptability, communication];

fn soft_skill(skill: &str, reasoning: String) -> SoftSkill {
    SoftSkill {
        skill: skill.to_string(),
        reasoning,
    }
}

fn leadership(profile: &ParsedProfile) -> Option<SoftSkill> {
    let leads = profile.roles.iter().any(|role| {
        let title = role.title.to_lowercase();
        LEADERSHIP_TITLE_TERMS.iter().any(|t| title.contains(t))
    });
    let first = profile.roles.first().filter(|_| leads)?;
    Some(soft_skill(
        "Leadership",
        format!(
            "Demonstrated leadership experience as {}, guiding teams and driving technical decisions",
            first.title
        ),
    ))
}

fn problem_solving(profile: &ParsedProfile) -> Option<SoftSkill> {
    let multiple = profile.projects.len() > 1;
    if !multiple && profile.skills.len() <= PROBLEM_SOLVING_MIN_SKILLS {
        return None;
    }
    let delivered = if multiple {
        "multiple projects"
    } else {
        "complex projects"
    };
    Some(soft_skill(
        "Problem Solving",
        format!(
            "Successfully delivered {delivered} using diverse technologies like {}",
            leading(&profile.skills, 3, ", ")
        ),
    ))
}

fn adaptability(profile: &ParsedProfile) -> Option<SoftSkill> {
    let roles = profile.roles.len();
    if profile.skills.len() <= ADAPTABILITY_MIN_SKILLS && roles <= 1 {
        return None;
    }
    let across = if roles > 1 {
        format!(" across {roles} different roles")
    } else {
        String::new()
    };
    Some(soft_skill(
        "Adaptability",
        format!(
            "Experience with {} different technologies{across} demonstrates strong adaptability",
            profile.skills.len()
        ),
    ))
}

fn communication(profile: &ParsedProfile) -> Option<SoftSkill> {
    let detailed = profile
        .roles
        .iter()
        .any(|r| r.description.chars().count() > DETAILED_DESCRIPTION_CHARS);
    if profile.achievements.is_empty() && !detailed {
        return None;
    }
    Some(soft_skill(
        "Communication",
        "Documented achievements and detailed role descriptions indicate strong communication and documentation skills".to_string(),
    ))
}

fn defaults(profile: &ParsedProfile) -> Vec<SoftSkill> {
    vec![
        soft_skill(
            "Technical Excellence",
            format!(
                "Proficiency in {} demonstrates commitment to technical excellence",
                leading(&profile.skills, 3, ", ")
            ),
        ),
        soft_skill(
            "Continuous Learning",
            "Diverse skill set and project experience show dedication to continuous learning and growth".to_string(),
        ),
    ]
}

pub fn infer_soft_skills(profile: &ParsedProfile) -> Vec<SoftSkill> {
    let mut skills: Vec<SoftSkill> = SOFT_SKILL_RULES
        .iter()
        .filter_map(|rule| rule(profile))
        .collect();

    if skills.is_empty() {
        skills = defaults(profile);
    }
    skills.truncate(MAX_SOFT_SKILLS);
    skills
}
