use crate::config::{Config, ScoreWeights};
use crate::types::{Layout, ScoreBreakdown};

use super::{AlignmentScorer, OverlapScorer, UnderfillScorer};

/// Composite: `alignment - w.overlap * overlap - w.underfill * underfill`.
pub fn composite(alignment: f32, overlap: f32, underfill: f32, weights: &ScoreWeights) -> f32 {
    alignment - weights.overlap * overlap - weights.underfill * underfill
}

/// Score one layout with the configured epsilon and weights.
pub fn score_layout(layout: &Layout, config: &Config) -> ScoreBreakdown {
    let alignment = AlignmentScorer::new(config.align_epsilon).compute_score(layout);
    let overlap = OverlapScorer.compute_score(layout);
    let underfill = UnderfillScorer.compute_score(layout);
    ScoreBreakdown {
        alignment,
        overlap,
        underfill,
        composite: composite(alignment, overlap, underfill, &config.weights),
    }
}

/// Score a validated pool; order follows the input slice.
pub fn score_pool<'a, I>(layouts: I, config: &Config) -> Vec<ScoreBreakdown>
where
    I: IntoIterator<Item = &'a Layout>,
{
    layouts
        .into_iter()
        .map(|layout| score_layout(layout, config))
        .collect()
}
