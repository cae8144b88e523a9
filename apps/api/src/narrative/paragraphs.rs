//! The four story paragraphs. Random choices are made by the caller; each
//! function here is a pure template over the profile and its analysis.

use crate::models::ParsedProfile;
use crate::narrative::analysis::{PrimaryStack, ProfileAnalysis, Seniority};

pub const INTRODUCTION_VARIANTS: usize = 3;
pub const FUTURE_VISION_VARIANTS: usize = 3;

/// First `n` items joined with `sep`.
pub(crate) fn leading(items: &[String], n: usize, sep: &str) -> String {
    items.iter().take(n).cloned().collect::<Vec<_>>().join(sep)
}

/// Collapses every whitespace run, newlines included, to a single space.
/// Keeps profile text from splitting a paragraph.
pub(crate) fn single_line(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn is_experienced_title(target_role: &str) -> bool {
    target_role.contains("Senior") || target_role.contains("Lead")
}

/// `variant` is taken modulo `INTRODUCTION_VARIANTS`.
pub fn introduction(variant: usize, profile: &ParsedProfile, analysis: &ProfileAnalysis) -> String {
    let expertise = &analysis.expertise;
    let stack = expertise.primary_stack.as_str();

    match variant % INTRODUCTION_VARIANTS {
        0 => {
            let curiosity = match expertise.primary_stack {
                PrimaryStack::Frontend => "creating engaging user experiences",
                PrimaryStack::Backend => "building robust systems",
                PrimaryStack::General => "solving complex problems",
            };
            let passion = if expertise.is_full_stack {
                "full-stack development".to_string()
            } else {
                format!("{stack} development")
            };
            format!(
                "My journey in technology began with a curiosity about {curiosity}, and has evolved into a passion for {passion} that drives meaningful impact."
            )
        }
        1 => {
            let article = if is_experienced_title(&profile.target_role) {
                "an experienced"
            } else {
                "a dedicated"
            };
            let emerge = if expertise.is_full_stack {
                "technical versatility meets creative problem-solving"
            } else {
                "deep expertise combines with innovative thinking"
            };
            format!(
                "As {article} {}, I've discovered that the best solutions emerge when {emerge}.",
                profile.target_role
            )
        }
        _ => {
            let interest = profile
                .skills
                .first()
                .map(String::as_str)
                .unwrap_or("technology");
            let understanding = if expertise.is_full_stack {
                "end-to-end application development".to_string()
            } else {
                format!("{stack} technologies")
            };
            format!(
                "What started as an interest in {interest} has grown into a comprehensive understanding of {understanding}, with a focus on delivering solutions that make a real difference."
            )
        }
    }
}

/// Built around the most recent role; branches on leadership.
pub fn experience(profile: &ParsedProfile, analysis: &ProfileAnalysis) -> String {
    let progression = &analysis.progression;
    let senior = progression.seniority == Seniority::Senior;
    let (title, company, description) = match profile.roles.first() {
        Some(role) => (
            role.title.as_str(),
            role.company.as_str(),
            role.description.trim(),
        ),
        None => (profile.target_role.as_str(), "", ""),
    };

    if progression.has_leadership {
        let opportunity = if senior {
            "lead cross-functional teams and drive technical strategy"
        } else {
            "mentor junior developers and contribute to architectural decisions"
        };
        let detail = if description.is_empty() {
            "My experience spans both hands-on development and strategic planning, ensuring that technical solutions align with business objectives."
        } else {
            description
        };
        return format!(
            "In my role as {title} at {company}, I've had the opportunity to {opportunity}. {detail} This combination of technical depth and leadership perspective has taught me that the most successful projects are built on both solid engineering principles and strong collaborative relationships."
        );
    }

    let setting = if progression.company_count > 1 {
        "across multiple organizations".to_string()
    } else {
        format!("at {company}")
    };
    let more = if profile.skills.len() > 3 {
        " and other key technologies"
    } else {
        ""
    };
    let detail = if description.is_empty() {
        "My approach focuses on writing clean, maintainable code while delivering features that users love."
    } else {
        description
    };
    let closing = if senior {
        "This foundation has allowed me to tackle increasingly complex challenges and contribute to high-impact projects."
    } else {
        "Each project has strengthened my problem-solving abilities and deepened my understanding of software development best practices."
    };

    format!(
        "Throughout my experience {setting}, I've developed expertise in {}{more}. {detail} {closing}",
        leading(&profile.skills, 3, ", ")
    )
}

/// Built around the first project; branches on project count.
pub fn projects(profile: &ParsedProfile, analysis: &ProfileAnalysis) -> String {
    let impact = &analysis.impact;
    let (name, tech_stack, summary) = match profile.projects.first() {
        Some(p) => (p.name.as_str(), p.tech_stack.trim(), p.summary.trim()),
        None => ("my recent work", "", ""),
    };

    if impact.has_multiple_projects {
        let first = if tech_stack.is_empty() {
            name.to_string()
        } else {
            format!("{name} using {tech_stack}")
        };
        let (range, lesson) = if impact.diverse_tech {
            (
                "diverse applications spanning multiple technology stacks",
                "This diversity has taught me to adapt quickly to new technologies while maintaining consistent quality standards.",
            )
        } else {
            (
                "focused solutions in my area of expertise",
                "This focused approach has allowed me to develop deep expertise in my chosen stack.",
            )
        };
        return format!(
            "My project portfolio demonstrates a range of technical capabilities, from {first} to {range}. {lesson} Each project has reinforced my belief that great software comes from understanding both the technical requirements and the human needs behind them."
        );
    }

    let about = if summary.is_empty() {
        "which showcases my ability to transform complex requirements into elegant solutions"
    } else {
        summary
    };
    let subject = if tech_stack.is_empty() {
        "This project".to_string()
    } else {
        format!("Built with {tech_stack}, this project")
    };
    let commitment = if impact.diverse_tech {
        "leveraging the right technologies for each unique challenge"
    } else {
        "mastering the tools that drive exceptional results"
    };

    format!(
        "A standout example of my work is {name}, {about}. {subject} demonstrates my commitment to {commitment}. The experience reinforced my understanding that successful software development requires both technical excellence and a deep appreciation for user experience."
    )
}

/// `variant` is taken modulo `FUTURE_VISION_VARIANTS`.
pub fn future_vision(variant: usize, profile: &ParsedProfile, analysis: &ProfileAnalysis) -> String {
    let expertise = &analysis.expertise;
    let stack = expertise.primary_stack.as_str();

    match variant % FUTURE_VISION_VARIANTS {
        0 => {
            let opportunity = if expertise.is_cloud_native {
                "leverage cloud-native architectures and modern deployment practices"
            } else {
                "explore emerging technologies and expand my technical toolkit"
            };
            let mentors = profile.roles.iter().any(|r| {
                r.description.contains("mentor") || r.title.to_lowercase().contains("lead")
            });
            let growth = if mentors {
                "mentor the next generation of developers"
            } else {
                "grow my technical leadership skills"
            };
            let contribution = if expertise.is_full_stack {
                "end-to-end solutions that bridge the gap between user needs and technical possibilities".to_string()
            } else {
                format!("innovative {stack} solutions that push the boundaries of what's possible")
            };
            format!(
                "Looking ahead, I'm excited about opportunities to {opportunity} while continuing to {growth}. I see myself contributing to {contribution}."
            )
        }
        1 => {
            let quality = if expertise.is_cloud_native {
                "scales efficiently and maintains reliability under pressure"
            } else {
                "creates intuitive experiences for users"
            };
            let ambition = if profile.target_role.contains("Senior") {
                "As I advance in my career, I want to combine deep technical expertise with strategic thinking to drive meaningful innovation."
            } else {
                "I'm particularly interested in taking on challenges that will expand both my technical skills and my understanding of how technology impacts business outcomes."
            };
            format!(
                "My goal is to continue building technology that not only solves complex problems but also {quality}. {ambition}"
            )
        }
        _ => {
            let potential = if expertise.is_full_stack {
                "integrated solutions that seamlessly connect all layers of the application stack"
                    .to_string()
            } else {
                format!("{stack} technologies to become even more powerful and accessible")
            };
            format!(
                "The future of technology excites me, particularly the potential for {potential}. I'm committed to staying at the forefront of these developments while never losing sight of the fundamental goal: creating technology that makes people's lives better."
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Project, Role};

    fn role(title: &str, company: &str, description: &str) -> Role {
        Role {
            title: title.to_string(),
            company: company.to_string(),
            duration: "2020 - Present".to_string(),
            description: description.to_string(),
        }
    }

    fn project(name: &str, tech_stack: &str, summary: &str) -> Project {
        Project {
            name: name.to_string(),
            tech_stack: tech_stack.to_string(),
            summary: summary.to_string(),
        }
    }

    fn profile(roles: Vec<Role>, projects: Vec<Project>, skills: &[&str], target: &str) -> ParsedProfile {
        ParsedProfile {
            name: "Jane Doe".to_string(),
            roles,
            projects,
            skills: skills.iter().map(|s| s.to_string()).collect(),
            education: vec!["BSc".to_string()],
            certifications: vec![],
            achievements: vec![],
            target_role: target.to_string(),
        }
    }

    #[test]
    fn test_introduction_variants() {
        let p = profile(
            vec![role("Senior Engineer", "Acme", "")],
            vec![project("Ledger", "", "")],
            &["React", "Python"],
            "Senior Engineer",
        );
        let a = ProfileAnalysis::of(&p);

        assert!(introduction(0, &p, &a).contains("passion for full-stack development"));
        assert!(introduction(1, &p, &a).starts_with("As an experienced Senior Engineer,"));
        assert!(introduction(2, &p, &a).starts_with("What started as an interest in React"));
        assert_eq!(introduction(3, &p, &a), introduction(0, &p, &a));
    }

    #[test]
    fn test_leadership_experience_uses_description() {
        let p = profile(
            vec![role("Engineering Manager", "Acme Corp", "Ran the payments group.")],
            vec![project("Ledger", "", "")],
            &["Go"],
            "Engineering Manager",
        );
        let text = experience(&p, &ProfileAnalysis::of(&p));
        assert!(text.starts_with("In my role as Engineering Manager at Acme Corp, I've had the opportunity to mentor junior developers"));
        assert!(text.contains("Ran the payments group."));
    }

    #[test]
    fn test_individual_experience_lists_skills() {
        let p = profile(
            vec![role("Engineer", "Acme", ""), role("Engineer", "Globex", "")],
            vec![project("Ledger", "", "")],
            &["Rust", "Go", "SQL", "AWS"],
            "Engineer",
        );
        let text = experience(&p, &ProfileAnalysis::of(&p));
        assert!(text.starts_with("Throughout my experience across multiple organizations, I've developed expertise in Rust, Go, SQL and other key technologies."));
        assert!(text.contains("clean, maintainable code"));
        assert!(text.ends_with("software development best practices."));
    }

    #[test]
    fn test_single_project_paragraph() {
        let p = profile(
            vec![role("Engineer", "Acme", "")],
            vec![project("Ledger", "React, Node", "a bookkeeping tool")],
            &["React"],
            "Engineer",
        );
        let text = projects(&p, &ProfileAnalysis::of(&p));
        assert!(text.starts_with("A standout example of my work is Ledger, a bookkeeping tool. Built with React, Node, this project"));
        assert!(text.contains("mastering the tools"));
    }

    #[test]
    fn test_multiple_projects_paragraph() {
        let p = profile(
            vec![role("Engineer", "Acme", "")],
            vec![
                project("Ledger", "React, Node", ""),
                project("Atlas", "Go, Rust, SQL", ""),
            ],
            &["React"],
            "Engineer",
        );
        let text = projects(&p, &ProfileAnalysis::of(&p));
        assert!(text.contains("from Ledger using React, Node to diverse applications"));
    }

    #[test]
    fn test_future_vision_variants() {
        let p = profile(
            vec![role("Tech Lead", "Acme", "")],
            vec![project("Ledger", "", "")],
            &["AWS", "Python"],
            "Senior Backend Engineer",
        );
        let a = ProfileAnalysis::of(&p);

        let first = future_vision(0, &p, &a);
        assert!(first.contains("leverage cloud-native architectures"));
        assert!(first.contains("mentor the next generation"));
        assert!(first.contains("innovative backend solutions"));
        assert!(future_vision(1, &p, &a).contains("As I advance in my career"));
        assert!(future_vision(2, &p, &a).contains("backend technologies to become even more powerful"));
    }
}
