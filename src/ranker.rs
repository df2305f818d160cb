//! Ordering, deduplication, and selection of scored layouts.
//!
//! Layouts are sorted by composite score descending. Ties resolve through a
//! fixed chain so output is reproducible for identical input: closeness to
//! the expected element count (when configured), then lower overlap, then
//! original pool index, first seen wins. Near-duplicates collapse into their
//! highest-ranked representative before the top-K cut.

use std::cmp::Ordering;

use tracing::debug;

use crate::config::Config;
use crate::error::{NoValidLayouts, Result};
use crate::metrics::score_layout;
use crate::types::{Layout, RankDiagnostics, RankedLayout, ScoreBreakdown};
use crate::validate::Validator;

/// Result of ranking one candidate pool.
#[derive(Debug, Clone, PartialEq)]
pub struct RankOutcome {
    /// Top-K selection, best first. `rank` fields are 0-based and dense.
    pub selected: Vec<RankedLayout>,
    pub diagnostics: RankDiagnostics,
}

#[derive(Debug, Clone)]
pub struct Ranker {
    config: Config,
}

impl Ranker {
    /// Build a ranker; rejects invalid configuration up front.
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Validate, score, order, deduplicate, and select from a raw pool.
    ///
    /// An empty selection is signaled as [`NoValidLayouts`] rather than an
    /// empty vector; the condition is recoverable and carries the pool
    /// diagnostics so the caller can decide whether to regenerate.
    pub fn rank(&self, pool: &[Layout]) -> std::result::Result<RankOutcome, NoValidLayouts> {
        let validator = Validator::new(self.config.bounds);
        let validated = validator.validate_pool(pool);

        if validated.is_empty() {
            return Err(NoValidLayouts {
                candidates: pool.len(),
                rejected_layouts: validated.rejected_layouts,
                dropped_elements: validated.dropped_elements,
            });
        }

        let mut scored: Vec<(usize, Layout, ScoreBreakdown)> = validated
            .layouts
            .into_iter()
            .map(|(index, layout)| {
                let scores = score_layout(&layout, &self.config);
                (index, layout, scores)
            })
            .collect();

        scored.sort_by(|a, b| self.order(a, b));

        let mut survivors: Vec<(usize, Layout, ScoreBreakdown)> = Vec::with_capacity(scored.len());
        let mut deduplicated = 0usize;
        for candidate in scored {
            let duplicate_of = survivors
                .iter()
                .find(|kept| self.equivalent(&kept.1, &candidate.1));
            match duplicate_of {
                Some(kept) => {
                    deduplicated += 1;
                    debug!(
                        candidate = candidate.0,
                        kept = kept.0,
                        "collapsed near-duplicate layout"
                    );
                }
                None => survivors.push(candidate),
            }
        }

        let total = survivors.len();
        let selected: Vec<RankedLayout> = survivors
            .into_iter()
            .take(self.config.top_k)
            .enumerate()
            .map(|(rank, (source_index, layout, scores))| RankedLayout {
                rank,
                source_index,
                scores,
                layout,
            })
            .collect();

        debug!(
            candidates = pool.len(),
            valid = total,
            deduplicated,
            selected = selected.len(),
            "ranked candidate pool"
        );

        let diagnostics = RankDiagnostics {
            candidates: pool.len(),
            rejected_layouts: validated.rejected_layouts,
            dropped_elements: validated.dropped_elements,
            deduplicated,
            selected: selected.len(),
        };

        Ok(RankOutcome {
            selected,
            diagnostics,
        })
    }

    /// Total order: composite desc, expected-count distance asc (when
    /// configured), overlap asc, pool index asc.
    fn order(
        &self,
        a: &(usize, Layout, ScoreBreakdown),
        b: &(usize, Layout, ScoreBreakdown),
    ) -> Ordering {
        b.2.composite
            .total_cmp(&a.2.composite)
            .then_with(|| match self.config.expected_elements {
                Some(expected) => {
                    let da = a.1.len().abs_diff(expected);
                    let db = b.1.len().abs_diff(expected);
                    da.cmp(&db)
                }
                None => Ordering::Equal,
            })
            .then_with(|| a.2.overlap.total_cmp(&b.2.overlap))
            .then_with(|| a.0.cmp(&b.0))
    }

    /// Geometric equivalence within the dedup tolerance: identical label
    /// sequences, every corresponding box coordinate within epsilon.
    fn equivalent(&self, a: &Layout, b: &Layout) -> bool {
        a.len() == b.len()
            && a.iter().zip(b.iter()).all(|(ea, eb)| {
                ea.label == eb.label
                    && ea.bbox.coordinate_distance(&eb.bbox) <= self.config.dedup_epsilon
            })
    }
}
