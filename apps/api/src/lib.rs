pub mod config;
pub mod documents;
pub mod errors;
pub mod extraction;
pub mod models;
pub mod narrative;
pub mod routes;
pub mod state;

pub use extraction::extract;
pub use models::{ParsedProfile, StoryBundle};
pub use narrative::Synthesizer;
