pub mod profile;
pub mod story;

pub use profile::{ParsedProfile, Project, Role};
pub use story::{SoftSkill, StoryBundle};
