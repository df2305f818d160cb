//! Result types produced by validation, scoring, and ranking.

use serde::{Deserialize, Serialize};

use super::Layout;

/// Per-layout quality scores.
///
/// `alignment` counts aligned (element, axis) pairs per element (higher is
/// better); `overlap` and `underfill` are canvas-area fractions (lower is
/// better). `composite` is the weighted combination used for ordering.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub alignment: f32,
    pub overlap: f32,
    pub underfill: f32,
    pub composite: f32,
}

/// A layout that survived validation, with its original pool index.
///
/// The index is the identity used for stable tie-breaking and for reporting
/// which raw candidates made it into the final selection.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedPool {
    pub layouts: Vec<(usize, Layout)>,
    pub rejected_layouts: usize,
    pub dropped_elements: usize,
}

impl ValidatedPool {
    pub fn is_empty(&self) -> bool {
        self.layouts.is_empty()
    }

    pub fn len(&self) -> usize {
        self.layouts.len()
    }
}

/// A scored, ranked layout as returned by the ranker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedLayout {
    /// Position in the final ordering, 0 = best.
    pub rank: usize,
    /// Index of this candidate in the original pool.
    pub source_index: usize,
    pub scores: ScoreBreakdown,
    pub layout: Layout,
}

/// Counters describing what happened to a candidate pool on its way through
/// validation, deduplication, and selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankDiagnostics {
    /// Size of the incoming pool.
    pub candidates: usize,
    /// Layouts rejected by the validator (empty after repair).
    pub rejected_layouts: usize,
    /// Elements dropped across all candidates during repair.
    pub dropped_elements: usize,
    /// Layouts collapsed into a higher-ranked near-duplicate.
    pub deduplicated: usize,
    /// Layouts in the final selection.
    pub selected: usize,
}
