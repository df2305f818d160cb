//! Decoding of raw model completions into candidate layouts.
//!
//! Two markup formats are supported, matching what upstream generators emit:
//!
//! - `seq`: `title 57 0 14 9 | text 0 30 60 6`, a label plus four integers
//!   in dataset canvas units, elements separated by `|`.
//! - `html`: absolutely-positioned div markup, one div per element, with a
//!   leading `canvas` frame div that carries no element.
//!
//! Decoding never fails the whole pool: unparsable candidates and unknown
//! labels are counted and skipped, and the geometry is handed to the
//! validator as-is (clipping is its job, not ours).

mod html;
mod seq;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

use crate::error::{LcrError, Result};
use crate::labels::Dataset;
use crate::types::Layout;

/// Markup format of raw candidate strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecodeFormat {
    Seq,
    Html,
}

impl fmt::Display for DecodeFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeFormat::Seq => f.write_str("seq"),
            DecodeFormat::Html => f.write_str("html"),
        }
    }
}

impl FromStr for DecodeFormat {
    type Err = LcrError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "seq" => Ok(DecodeFormat::Seq),
            "html" => Ok(DecodeFormat::Html),
            other => Err(LcrError::decode(format!("Unknown input format: {}", other))),
        }
    }
}

/// What happened while decoding a pool of raw candidates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecodeReport {
    /// Raw candidate strings seen.
    pub candidates: usize,
    /// Candidates that produced at least one element.
    pub decoded: usize,
    /// Candidates that produced nothing parsable.
    pub failed: usize,
    /// Elements skipped because their label is not in the dataset table.
    pub unknown_labels: usize,
}

#[derive(Debug, Clone, Copy)]
pub struct Decoder {
    pub dataset: Dataset,
    pub format: DecodeFormat,
}

impl Decoder {
    pub fn new(dataset: Dataset, format: DecodeFormat) -> Self {
        Self { dataset, format }
    }

    /// Decode one raw completion into a layout in normalized coordinates.
    ///
    /// Elements with labels outside the dataset table are skipped; their
    /// count comes back alongside the layout. A candidate with no parsable
    /// elements is a [`LcrError::Decode`].
    pub fn decode(&self, raw: &str) -> Result<(Layout, usize)> {
        let (width, height) = self.dataset.canvas_size();
        let parsed = match self.format {
            DecodeFormat::Seq => seq::parse(raw, self.dataset),
            DecodeFormat::Html => html::parse(raw, self.dataset),
        };

        let unknown_labels = parsed.unknown_labels;
        let elements = parsed
            .elements
            .into_iter()
            .map(|mut element| {
                element.bbox.x /= width as f32;
                element.bbox.width /= width as f32;
                element.bbox.y /= height as f32;
                element.bbox.height /= height as f32;
                element
            })
            .collect::<Vec<_>>();

        if elements.is_empty() {
            return Err(LcrError::decode(format!(
                "no parsable {} elements in candidate",
                self.format
            )));
        }
        Ok((Layout::new(elements), unknown_labels))
    }

    /// Decode a pool of raw completions, skipping failures.
    pub fn decode_pool(&self, raw_candidates: &[String]) -> (Vec<Layout>, DecodeReport) {
        let mut layouts = Vec::with_capacity(raw_candidates.len());
        let mut report = DecodeReport {
            candidates: raw_candidates.len(),
            ..DecodeReport::default()
        };

        for (index, raw) in raw_candidates.iter().enumerate() {
            match self.decode(raw) {
                Ok((layout, unknown)) => {
                    report.decoded += 1;
                    report.unknown_labels += unknown;
                    layouts.push(layout);
                }
                Err(err) => {
                    report.failed += 1;
                    debug!(candidate = index, %err, "skipped undecodable candidate");
                }
            }
        }

        (layouts, report)
    }
}

/// Elements parsed from markup, still in canvas units.
pub(crate) struct ParsedElements {
    pub elements: Vec<crate::types::Element>,
    pub unknown_labels: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_format_parse_round_trip() {
        for format in [DecodeFormat::Seq, DecodeFormat::Html] {
            let parsed = DecodeFormat::from_str(&format.to_string()).expect("parse format");
            assert_eq!(parsed, format);
        }
        assert!(DecodeFormat::from_str("xml").is_err());
    }

    #[test]
    fn seq_candidate_normalizes_by_canvas() {
        let decoder = Decoder::new(Dataset::Webui, DecodeFormat::Seq);
        let (layout, unknown) = decoder
            .decode("title 60 0 60 12 | text 0 30 120 6")
            .expect("decode seq");
        assert_eq!(unknown, 0);
        assert_eq!(layout.len(), 2);
        let title = &layout.elements[0];
        assert_eq!(title.label.as_str(), "title");
        assert!((title.bbox.x - 0.5).abs() < 1e-6);
        assert!((title.bbox.width - 0.5).abs() < 1e-6);
        assert!((title.bbox.height - 0.1).abs() < 1e-6);
    }

    #[test]
    fn rectangular_canvas_normalizes_each_axis() {
        // rico canvas is 90x160.
        let decoder = Decoder::new(Dataset::Rico, DecodeFormat::Seq);
        let (layout, _) = decoder.decode("toolbar 0 0 90 16").expect("decode seq");
        let bbox = &layout.elements[0].bbox;
        assert!((bbox.width - 1.0).abs() < 1e-6);
        assert!((bbox.height - 0.1).abs() < 1e-6);
    }

    #[test]
    fn unknown_labels_are_counted_not_fatal() {
        let decoder = Decoder::new(Dataset::Webui, DecodeFormat::Seq);
        let (layout, unknown) = decoder
            .decode("sidebar 0 0 30 120 | title 0 0 60 12")
            .expect("decode seq");
        assert_eq!(unknown, 1);
        assert_eq!(layout.len(), 1);
    }

    #[test]
    fn empty_candidate_is_a_decode_error() {
        let decoder = Decoder::new(Dataset::Webui, DecodeFormat::Seq);
        assert!(decoder.decode("complete garbage").is_err());
        assert!(decoder.decode("").is_err());
    }

    #[test]
    fn pool_decode_skips_failures_and_reports() {
        let decoder = Decoder::new(Dataset::Webui, DecodeFormat::Seq);
        let raw = vec![
            "title 0 0 60 12".to_string(),
            "not a layout at all".to_string(),
            "logo 10 10 20 20 | sidebar 0 0 1 1".to_string(),
        ];
        let (layouts, report) = decoder.decode_pool(&raw);
        assert_eq!(layouts.len(), 2);
        assert_eq!(report.candidates, 3);
        assert_eq!(report.decoded, 2);
        assert_eq!(report.failed, 1);
        assert_eq!(report.unknown_labels, 1);
    }
}
