use crate::types::{BoundingBox, Layout};

use super::{Metric, MetricKind};

/// Counts aligned (element, axis) pairs.
///
/// Six axes per element: left, horizontal center, right, top, vertical
/// center, bottom. An element is aligned on an axis when the nearest other
/// element's same-axis value is closer than `epsilon`. The score is the
/// aligned-pair count divided by the element count, so a fully grid-snapped
/// layout scores up to 6.0 and a single-element layout scores 0.
#[derive(Debug, Clone, Copy)]
pub struct AlignmentScorer {
    pub epsilon: f32,
}

impl Default for AlignmentScorer {
    fn default() -> Self {
        Self { epsilon: 0.002 }
    }
}

const AXES: [fn(&BoundingBox) -> f32; 6] = [
    |b| b.x,
    |b| b.center_x(),
    |b| b.right(),
    |b| b.y,
    |b| b.center_y(),
    |b| b.bottom(),
];

impl AlignmentScorer {
    pub fn new(epsilon: f32) -> Self {
        Self { epsilon }
    }

    pub fn compute_score(&self, layout: &Layout) -> f32 {
        let n = layout.len();
        if n < 2 {
            return 0.0;
        }

        let mut aligned_pairs = 0usize;
        for (i, element) in layout.iter().enumerate() {
            for axis in AXES {
                let own = axis(&element.bbox);
                let min_distance = layout
                    .iter()
                    .enumerate()
                    .filter(|(j, _)| *j != i)
                    .map(|(_, other)| (own - axis(&other.bbox)).abs())
                    .fold(f32::INFINITY, f32::min);
                if min_distance < self.epsilon {
                    aligned_pairs += 1;
                }
            }
        }

        aligned_pairs as f32 / n as f32
    }
}

impl Metric for AlignmentScorer {
    fn kind(&self) -> MetricKind {
        MetricKind::Alignment
    }

    fn compute(&self, layout: &Layout) -> f32 {
        self.compute_score(layout)
    }
}
