//! Vocabulary tables: the extractor's tunable policy surface.
//!
//! Every keyword list the matchers consult lives here. Matching rules
//! (substring vs whole word) are decided by the matcher, not the table.

/// Job-title words. Matched as case-insensitive substrings.
pub const JOB_TITLE_TERMS: &[&str] = &[
    "engineer",
    "developer",
    "manager",
    "analyst",
    "designer",
    "specialist",
    "consultant",
    "coordinator",
    "lead",
    "senior",
    "director",
    "architect",
    "intern",
    "associate",
];

/// Company-suffix words. Matched as case-insensitive substrings.
pub const COMPANY_SUFFIX_TERMS: &[&str] = &[
    "inc",
    "corp",
    "llc",
    "ltd",
    "company",
    "tech",
    "systems",
    "solutions",
    "group",
    "enterprises",
];

/// Lines that open a résumé section. Used to stop section bodies and to
/// reject name candidates such as "Work Experience".
pub const SECTION_HEADINGS: &[&str] = &[
    "summary",
    "profile",
    "objective",
    "experience",
    "work experience",
    "professional experience",
    "employment history",
    "projects",
    "project",
    "portfolio",
    "work samples",
    "skills",
    "technical skills",
    "technologies",
    "competencies",
    "education",
    "academic",
    "qualifications",
    "certifications",
    "awards",
    "achievements",
    "contact",
];

/// Technologies looked for around a project line to build its tech stack.
pub const PROJECT_TECH_TERMS: &[&str] = &[
    "React",
    "JavaScript",
    "Python",
    "Java",
    "Node",
    "SQL",
    "HTML",
    "CSS",
    "Angular",
    "Vue",
    "Django",
    "Flask",
    "Spring",
    "MongoDB",
    "PostgreSQL",
    "AWS",
    "Docker",
    "Git",
];

/// Verbs that introduce a project sentence ("Built a ...").
pub const PROJECT_VERBS: &[&str] = &["built", "developed", "created", "designed", "implemented"];

/// Nouns that end a project-like phrase ("Expense tracking dashboard").
pub const PROJECT_NOUNS: &[&str] = &[
    "app",
    "application",
    "website",
    "system",
    "platform",
    "tool",
    "dashboard",
    "api",
];

/// Technology and tool terms recognized anywhere in the text, in their
/// canonical spelling.
pub const SKILL_TERMS: &[&str] = &[
    "JavaScript",
    "TypeScript",
    "React",
    "Angular",
    "Vue",
    "Node.js",
    "Python",
    "Java",
    "C++",
    "C#",
    "HTML",
    "CSS",
    "SASS",
    "SCSS",
    "Tailwind",
    "Bootstrap",
    "SQL",
    "MongoDB",
    "PostgreSQL",
    "MySQL",
    "AWS",
    "Azure",
    "GCP",
    "Docker",
    "Kubernetes",
    "Git",
    "GitHub",
    "GitLab",
    "Jenkins",
    "CI/CD",
    "REST",
    "GraphQL",
    "API",
    "Microservices",
    "Agile",
    "Scrum",
    "Kanban",
    "Jira",
    "Confluence",
    "Redux",
    "Next.js",
    "Express",
    "Django",
    "Flask",
    "Spring",
    "Laravel",
    "Ruby",
    "PHP",
    "Go",
    "Figma",
    "Photoshop",
    "Illustrator",
    "Sketch",
    "InVision",
    "Wireframing",
    "Prototyping",
    "Machine Learning",
    "AI",
    "Data Science",
    "Analytics",
    "Tableau",
    "Power BI",
    "Excel",
];

/// Degree and institution words for education lines.
pub const EDUCATION_TERMS: &[&str] = &[
    "bachelor",
    "master",
    "phd",
    "ph.d",
    "doctorate",
    "degree",
    "university",
    "college",
    "institute",
];

/// Degree abbreviations. Matched as standalone tokens.
pub const DEGREE_ABBREVIATIONS: &[&str] = &[
    "b.s.", "b.s", "m.s.", "m.s", "b.a.", "b.a", "m.a.", "m.a", "b.sc.", "b.sc", "m.sc.", "m.sc",
    "bs", "ba", "mba",
];

pub const CERTIFICATION_TERMS: &[&str] = &[
    "certified",
    "certification",
    "certifications",
    "certificate",
    "certificates",
];

pub const ACHIEVEMENT_VERBS: &[&str] = &[
    "achieved",
    "accomplished",
    "awarded",
    "recognized",
    "improved",
    "increased",
    "reduced",
    "led",
];

pub const ACHIEVEMENT_NOUNS: &[&str] = &[
    "award",
    "awards",
    "recognition",
    "achievement",
    "achievements",
    "accomplishment",
    "accomplishments",
];

/// Skill categories used to infer a target role, in priority order.
pub const TARGET_ROLE_CATEGORIES: &[(&str, &[&str])] = &[
    (
        "Frontend Developer",
        &["React", "Angular", "Vue", "JavaScript", "TypeScript", "HTML", "CSS"],
    ),
    (
        "Backend Developer",
        &["Python", "Java", "Node.js", "API", "Database"],
    ),
    ("DevOps Engineer", &["AWS", "Docker", "Kubernetes", "DevOps"]),
    (
        "Data Scientist",
        &["Machine Learning", "Data Science", "Analytics"],
    ),
];

pub const DEFAULT_TARGET_ROLE: &str = "Software Professional";
