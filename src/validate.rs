//! Validation and repair of raw candidate layouts.
//!
//! Rules run in order per layout: drop degenerate elements, resolve
//! out-of-canvas boxes per [`BoundsPolicy`], strip exact duplicates, then
//! reject the layout if nothing survived. Pure; the input pool is untouched.

use tracing::debug;

use crate::config::BoundsPolicy;
use crate::types::{BoundingBox, Element, Layout, ValidatedPool};

#[derive(Debug, Clone, Copy, Default)]
pub struct Validator {
    pub bounds: BoundsPolicy,
}

/// Outcome of validating one layout.
#[derive(Debug, Clone, PartialEq)]
pub enum Validated {
    /// The repaired layout plus how many elements were dropped on the way.
    Valid { layout: Layout, dropped: usize },
    /// Nothing survived repair.
    Invalid { dropped: usize },
}

impl Validator {
    pub fn new(bounds: BoundsPolicy) -> Self {
        Self { bounds }
    }

    /// Validate a whole pool, keeping original pool indices for survivors.
    pub fn validate_pool(&self, pool: &[Layout]) -> ValidatedPool {
        let mut layouts = Vec::with_capacity(pool.len());
        let mut rejected_layouts = 0;
        let mut dropped_elements = 0;

        for (index, candidate) in pool.iter().enumerate() {
            match self.validate(candidate) {
                Validated::Valid { layout, dropped } => {
                    dropped_elements += dropped;
                    layouts.push((index, layout));
                }
                Validated::Invalid { dropped } => {
                    dropped_elements += dropped;
                    rejected_layouts += 1;
                    debug!(candidate = index, "rejected: empty after repair");
                }
            }
        }

        ValidatedPool {
            layouts,
            rejected_layouts,
            dropped_elements,
        }
    }

    /// Validate and repair a single layout.
    pub fn validate(&self, layout: &Layout) -> Validated {
        let mut kept: Vec<Element> = Vec::with_capacity(layout.len());
        let mut dropped = 0;

        for element in layout.iter() {
            let bbox = element.bbox;
            if !bbox.is_finite() || bbox.width <= 0.0 || bbox.height <= 0.0 {
                dropped += 1;
                continue;
            }

            let repaired = match self.bounds {
                BoundsPolicy::Clip => clip_to_canvas(&bbox),
                BoundsPolicy::Reject => {
                    if bbox.in_canvas() {
                        bbox
                    } else {
                        dropped += 1;
                        continue;
                    }
                }
            };

            // Clipping a sliver that lies fully outside can squash it flat.
            if repaired.width <= 0.0 || repaired.height <= 0.0 {
                dropped += 1;
                continue;
            }

            let candidate = Element {
                label: element.label.clone(),
                bbox: repaired,
            };
            if kept.contains(&candidate) {
                dropped += 1;
                continue;
            }
            kept.push(candidate);
        }

        if kept.is_empty() {
            Validated::Invalid { dropped }
        } else {
            Validated::Valid {
                layout: Layout::new(kept),
                dropped,
            }
        }
    }
}

/// Clip width/height down to fit the unit canvas, then clamp the position so
/// `x + width <= 1` and `y + height <= 1`.
fn clip_to_canvas(bbox: &BoundingBox) -> BoundingBox {
    let width = bbox.width.min(1.0);
    let height = bbox.height.min(1.0);
    let x = bbox.x.clamp(0.0, 1.0 - width);
    let y = bbox.y.clamp(0.0, 1.0 - height);
    BoundingBox::new(x, y, width, height)
}
