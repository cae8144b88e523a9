// Narrative synthesis: turns a ParsedProfile into a four-paragraph story,
// a tagline and a short list of inferred soft skills.

pub mod analysis;
pub mod handlers;
pub mod paragraphs;
pub mod soft_skills;
pub mod tagline;

use chrono::{Datelike, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::extraction::fallback;
use crate::models::story::PARAGRAPH_SEPARATOR;
use crate::models::{ParsedProfile, StoryBundle};
use crate::narrative::analysis::ProfileAnalysis;
use crate::narrative::paragraphs::{single_line, FUTURE_VISION_VARIANTS, INTRODUCTION_VARIANTS};
use crate::narrative::tagline::TAGLINE_VARIANTS;

/// Story generator. Template choice comes from the injected RNG, so a
/// seeded synthesizer with a fixed reference year is fully reproducible.
pub struct Synthesizer<R: Rng = StdRng> {
    rng: R,
    reference_year: i32,
}

impl Synthesizer<StdRng> {
    pub fn from_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Seeded when a seed is given, otherwise OS entropy.
    pub fn for_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::from_seed(seed),
            None => Self::from_entropy(),
        }
    }
}

impl<R: Rng> Synthesizer<R> {
    pub fn with_rng(rng: R) -> Self {
        Self {
            rng,
            reference_year: Utc::now().year(),
        }
    }

    /// Pins the year used by "since ..." taglines.
    pub fn with_reference_year(mut self, year: i32) -> Self {
        self.reference_year = year;
        self
    }

    pub fn reference_year(&self) -> i32 {
        self.reference_year
    }

    /// Produces the story bundle. Incomplete profiles (e.g. edited by hand)
    /// are completed with the extractor's fallbacks first.
    pub fn synthesize(&mut self, profile: &ParsedProfile) -> StoryBundle {
        let profile = fallback::complete(profile);
        let analysis = ProfileAnalysis::of(&profile);

        let intro_variant = self.rng.gen_range(0..INTRODUCTION_VARIANTS);
        let vision_variant = self.rng.gen_range(0..FUTURE_VISION_VARIANTS);
        let tagline_variant = self.rng.gen_range(0..TAGLINE_VARIANTS);

        debug!(
            intro_variant,
            vision_variant,
            tagline_variant,
            seniority = ?analysis.progression.seniority,
            primary_stack = analysis.expertise.primary_stack.as_str(),
            "synthesizing story"
        );

        let story = [
            paragraphs::introduction(intro_variant, &profile, &analysis),
            paragraphs::experience(&profile, &analysis),
            paragraphs::projects(&profile, &analysis),
            paragraphs::future_vision(vision_variant, &profile, &analysis),
        ]
        .map(|paragraph| single_line(&paragraph))
        .join(PARAGRAPH_SEPARATOR);
        let tagline = tagline::tagline(tagline_variant, &profile, &analysis, self.reference_year);

        StoryBundle {
            story,
            tagline: single_line(&tagline),
            soft_skills: soft_skills::infer_soft_skills(&profile),
        }
    }
}
