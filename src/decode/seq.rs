use crate::labels::Dataset;
use crate::types::{BoundingBox, Element};

use super::ParsedElements;

/// Parse `label x y w h | label x y w h | ...` in canvas units.
///
/// Labels may contain spaces (rico has `list item`, `on/off switch`), so each
/// `|`-separated run is split from the right: the last four tokens must be
/// integers, everything before them is the label.
pub(crate) fn parse(raw: &str, dataset: Dataset) -> ParsedElements {
    let mut elements = Vec::new();
    let mut unknown_labels = 0;

    for segment in raw.split('|') {
        let tokens: Vec<&str> = segment.split_whitespace().collect();
        if tokens.len() < 5 {
            continue;
        }

        let coords: Option<Vec<f32>> = tokens[tokens.len() - 4..]
            .iter()
            .map(|t| t.parse::<i64>().ok().map(|v| v as f32))
            .collect();
        let Some(coords) = coords else {
            continue;
        };

        let label_text = tokens[..tokens.len() - 4].join(" ");
        match dataset.label(&label_text) {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_multiword_labels_from_the_right() {
        let parsed = parse("list item 0 10 90 20 | text button 0 40 45 10", Dataset::Rico);
        assert_eq!(parsed.unknown_labels, 0);
        assert_eq!(parsed.elements.len(), 2);
        assert_eq!(parsed.elements[0].label.as_str(), "list item");
        assert_eq!(parsed.elements[1].label.as_str(), "text button");
        assert_eq!(parsed.elements[1].bbox, BoundingBox::new(0.0, 40.0, 45.0, 10.0));
    }

    #[test]
    fn skips_segments_with_missing_coordinates() {
        let parsed = parse("title 0 0 60 | text 0 30 60 6", Dataset::Webui);
        assert_eq!(parsed.elements.len(), 1);
        assert_eq!(parsed.elements[0].label.as_str(), "text");
    }

    #[test]
    fn skips_segments_with_non_integer_coordinates() {
        let parsed = parse("title a b c d | logo 0 0 20 20", Dataset::Webui);
        assert_eq!(parsed.elements.len(), 1);
        assert_eq!(parsed.elements[0].label.as_str(), "logo");
    }

    #[test]
    fn negative_coordinates_survive_for_the_validator() {
        let parsed = parse("title -10 0 60 12", Dataset::Webui);
        assert_eq!(parsed.elements.len(), 1);
        assert_eq!(parsed.elements[0].bbox.x, -10.0);
    }

    #[test]
    fn case_differences_resolve_through_the_label_table() {
        let parsed = parse("Title 0 0 60 12", Dataset::Webui);
        assert_eq!(parsed.elements.len(), 1);
        assert_eq!(parsed.elements[0].label.as_str(), "title");
    }
}
