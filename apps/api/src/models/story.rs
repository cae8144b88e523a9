use serde::{Deserialize, Serialize};

/// Separator placed between story paragraphs.
pub const PARAGRAPH_SEPARATOR: &str = "\n\n";

/// An inferred soft skill and the profile facts that justify it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoftSkill {
    pub skill: String,
    pub reasoning: String,
}

/// Narrative output of the synthesizer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoryBundle {
    /// Introduction, experience, projects and future vision, in that order.
    pub story: String,
    pub tagline: String,
    pub soft_skills: Vec<SoftSkill>,
}

impl StoryBundle {
    pub fn paragraphs(&self) -> impl Iterator<Item = &str> {
        self.story.split(PARAGRAPH_SEPARATOR)
    }
}
