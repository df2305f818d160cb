use crate::types::Layout;

use super::{Metric, MetricKind};

/// Fraction of the canvas covered by no element.
///
/// The union area of the boxes is computed exactly: sweep the sorted x-edges,
/// and within each vertical slab merge the y-intervals of the boxes spanning
/// it. Overlapping elements therefore do not double-count coverage.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnderfillScorer;

impl UnderfillScorer {
    pub fn compute_score(&self, layout: &Layout) -> f32 {
        let covered = union_area(layout);
        (1.0 - covered).max(0.0)
    }
}

fn union_area(layout: &Layout) -> f32 {
    let boxes: Vec<_> = layout
        .iter()
        .map(|e| (e.bbox.x, e.bbox.right(), e.bbox.y, e.bbox.bottom()))
        .filter(|(x1, x2, y1, y2)| x2 > x1 && y2 > y1)
        .collect();
    if boxes.is_empty() {
        return 0.0;
    }

    let mut edges: Vec<f32> = boxes.iter().flat_map(|(x1, x2, _, _)| [*x1, *x2]).collect();
    edges.sort_by(f32::total_cmp);
    edges.dedup();

    let mut area = 0.0f32;
    for window in edges.windows(2) {
        let (slab_left, slab_right) = (window[0], window[1]);
        let slab_width = slab_right - slab_left;
        if slab_width <= 0.0 {
            continue;
        }

        let mut intervals: Vec<(f32, f32)> = boxes
            .iter()
            .filter(|(x1, x2, _, _)| *x1 <= slab_left && *x2 >= slab_right)
            .map(|(_, _, y1, y2)| (*y1, *y2))
            .collect();
        intervals.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.total_cmp(&b.1)));

        let mut merged_len = 0.0f32;
        let mut current: Option<(f32, f32)> = None;
        for (start, end) in intervals {
            match current {
                Some((cur_start, cur_end)) if start <= cur_end => {
                    current = Some((cur_start, cur_end.max(end)));
                }
                Some((cur_start, cur_end)) => {
                    merged_len += cur_end - cur_start;
                    current = Some((start, end));
                }
                None => current = Some((start, end)),
            }
        }
        if let Some((cur_start, cur_end)) = current {
            merged_len += cur_end - cur_start;
        }

        area += slab_width * merged_len;
    }

    area
}

impl Metric for UnderfillScorer {
    fn kind(&self) -> MetricKind {
        MetricKind::Underfill
    }

    fn compute(&self, layout: &Layout) -> f32 {
        self.compute_score(layout)
    }
}
