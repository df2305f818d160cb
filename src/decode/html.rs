use std::sync::OnceLock;

use regex::Regex;

use crate::labels::Dataset;
use crate::types::{BoundingBox, Element};

use super::ParsedElements;

/// Matches one absolutely-positioned element div, e.g.
/// `<div class="title" style="left: 57px; top: 0px; width: 14px; height: 9px"></div>`.
fn element_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(
            r#"<div\s+class="([^"]+)"\s+style="left:\s*(-?\d+(?:\.\d+)?)px;\s*top:\s*(-?\d+(?:\.\d+)?)px;\s*width:\s*(-?\d+(?:\.\d+)?)px;\s*height:\s*(-?\d+(?:\.\d+)?)px;?\s*""#,
        )
        .expect("element regex is valid")
    })
}

/// Parse div markup in canvas units. The `canvas` frame div is skipped;
/// anything the regex does not match (prose, stray tags) is ignored.
pub(crate) fn parse(raw: &str, dataset: Dataset) -> ParsedElements {
    let mut elements = Vec::new();
    let mut unknown_labels = 0;

    for captures in element_pattern().captures_iter(raw) {
        let class = &captures[1];
        if class.eq_ignore_ascii_case("canvas") {
            continue;
        }

        // Captures 2-5 are guaranteed numeric by the pattern.
        let coords: Vec<f32> = (2..=5)
            .map(|i| captures[i].parse::<f32>().unwrap_or(0.0))
            .collect();

        match dataset.label(class) {
            Some(label) => elements.push(Element::new(
                label,
                BoundingBox::new(coords[0], coords[1], coords[2], coords[3]),
            )),
            None => unknown_labels += 1,
        }
    }

    ParsedElements {
        elements,
        unknown_labels,
    }
}
