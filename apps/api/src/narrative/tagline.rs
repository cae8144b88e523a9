use crate::models::ParsedProfile;
use crate::narrative::analysis::{ProfileAnalysis, Seniority};
use crate::narrative::paragraphs::leading;

pub const TAGLINE_VARIANTS: usize = 4;

/// One-line tagline. `year` anchors the "since" phrases; `variant` is taken
/// modulo `TAGLINE_VARIANTS`.
pub fn tagline(
    variant: usize,
    profile: &ParsedProfile,
    analysis: &ProfileAnalysis,
    year: i32,
) -> String {
    let target = profile.target_role.to_lowercase();

    match variant % TAGLINE_VARIANTS {
        0 => {
            let verb = if analysis.progression.has_leadership {
                "Leading teams to build"
            } else {
                "Building"
            };
            let skill = profile
                .skills
                .first()
                .map(String::as_str)
                .unwrap_or("modern technologies");
            format!("{verb} innovative solutions with {skill} since {}", year - 3)
        }
        1 => {
            let craft = if target.contains("frontend") {
                "user experiences"
            } else if target.contains("backend") {
                "backend systems"
            } else {
                "software solutions"
            };
            format!(
                "Transforming complex problems into elegant {craft} since {}",
                year - 4
            )
        }
        2 => {
            let who = if analysis.progression.seniority == Seniority::Senior {
                "Senior technologist"
            } else {
                "Dedicated developer"
            };
            let passions = match leading(&profile.skills, 2, " and ") {
                s if s.is_empty() => "clean code and great user experiences".to_string(),
                s => s,
            };
            format!("{who} passionate about {passions}")
        }
        _ => {
            let gap = if target.contains("full") {
                "frontend creativity and backend reliability"
            } else {
                "technical excellence and business impact"
            };
            format!("Bridging the gap between {gap} since {}", year - 2)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;

    fn profile(title: &str, skills: &[&str], target: &str) -> ParsedProfile {
        ParsedProfile {
            name: "Jane Doe".to_string(),
            roles: vec![Role {
                title: title.to_string(),
                company: "Acme".to_string(),
                duration: "2020".to_string(),
                description: String::new(),
            }],
            projects: vec![],
            skills: skills.iter().map(|s| s.to_string()).collect(),
            education: vec![],
            certifications: vec![],
            achievements: vec![],
            target_role: target.to_string(),
        }
    }

    fn line(variant: usize, p: &ParsedProfile) -> String {
        tagline(variant, p, &ProfileAnalysis::of(p), 2025)
    }

    #[test]
    fn test_building_since_three_years_back() {
        let p = profile("Engineer", &["Rust"], "Engineer");
        assert_eq!(line(0, &p), "Building innovative solutions with Rust since 2022");

        let lead = profile("Team Lead", &[], "Team Lead");
        assert_eq!(
            line(0, &lead),
            "Leading teams to build innovative solutions with modern technologies since 2022"
        );
    }

    #[test]
    fn test_transforming_matches_target_area() {
        let p = profile("Engineer", &[], "Frontend Developer");
        assert_eq!(
            line(1, &p),
            "Transforming complex problems into elegant user experiences since 2021"
        );
        let p = profile("Engineer", &[], "Backend Developer");
        assert!(line(1, &p).contains("backend systems"));
    }

    #[test]
    fn test_passionate_about_first_two_skills() {
        let p = profile("Senior Engineer", &["Rust", "Go", "SQL"], "Senior Engineer");
        assert_eq!(line(2, &p), "Senior technologist passionate about Rust and Go");

        let p = profile("Engineer", &[], "Engineer");
        assert_eq!(
            line(2, &p),
            "Dedicated developer passionate about clean code and great user experiences"
        );
    }

    #[test]
    fn test_bridging_the_gap() {
        let p = profile("Engineer", &[], "Full Stack Developer");
        assert_eq!(
            line(3, &p),
            "Bridging the gap between frontend creativity and backend reliability since 2023"
        );
    }
}
