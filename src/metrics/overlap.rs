use crate::types::Layout;

use super::{Metric, MetricKind};

/// Sums pairwise intersection areas.
///
/// Canvas area is 1 in normalized coordinates, so the result is already a
/// canvas fraction; it can exceed 1 when many elements pile up. Lower is
/// better; the ranker penalizes it, never rewards it.
#[derive(Debug, Clone, Copy, Default)]
pub struct OverlapScorer;

impl OverlapScorer {
    pub fn compute_score(&self, layout: &Layout) -> f32 {
        let elements = &layout.elements;
        let mut total = 0.0f32;
        for i in 0..elements.len() {
            for j in (i + 1)..elements.len() {
                total += elements[i].bbox.intersection_area(&elements[j].bbox);
            }
        }
        total
    }
}

impl Metric for OverlapScorer {
    fn kind(&self) -> MetricKind {
        MetricKind::Overlap
    }

    fn compute(&self, layout: &Layout) -> f32 {
        self.compute_score(layout)
    }
}
