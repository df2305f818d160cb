//! Layout Candidate Ranker (LCR) Library
//!
//! A library for turning the noisy candidate layouts a text-to-layout
//! generator produces into a final ordered list of valid, deduplicated
//! layouts, best first. Candidates arrive as free-form markup or structured
//! element lists; they are repaired, scored against geometric quality
//! heuristics, and ranked with a fully specified tie-break chain so output
//! is reproducible.
//!
//! # Module Overview
//!
//! - [`decode`] - Parsing seq/html markup into candidate layouts
//! - [`validate`] - Repair and rejection of malformed layouts
//! - [`metrics`] - Alignment, overlap, and underfill scoring
//! - [`ranker`] - Ordering, deduplication, top-K selection
//! - [`render`] - PNG and HTML previews of ranked layouts
//! - [`labels`] - Per-dataset label tables and canvas sizes
//! - [`config`] - Engine configuration (TOML file support)
//! - [`types`] - Core data types and structures
//! - [`output`] - JSON output schemas
//!
//! # Example
//!
//! ```
//! use lcr_lib::{Config, Dataset, DecodeFormat, Decoder, Ranker};
//!
//! # fn example() -> lcr_lib::Result<()> {
//! let decoder = Decoder::new(Dataset::Webui, DecodeFormat::Seq);
//! let raw = vec!["title 30 10 60 12 | text 30 40 60 30".to_string()];
//! let (pool, _report) = decoder.decode_pool(&raw);
//!
//! let ranker = Ranker::new(Config::default())?;
//! let outcome = ranker.rank(&pool)?;
//! assert_eq!(outcome.selected[0].rank, 0);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod canvas;
pub mod config;
pub mod decode;
pub mod error;
pub mod labels;
pub mod metrics;
pub mod output;
pub mod ranker;
pub mod render;
pub mod types;
pub mod validate;

pub use canvas::Canvas;
pub use config::{BoundsPolicy, Config, ScoreWeights};
pub use decode::{DecodeFormat, DecodeReport, Decoder};
pub use error::{ErrorCategory, ErrorPayload, LcrError, NoValidLayouts, Result};
pub use labels::Dataset;
// Metrics module re-exports
pub use metrics::{
    score_layout, score_pool, AlignmentScorer, Metric, MetricKind, OverlapScorer, UnderfillScorer,
};
pub use output::{
    ErrorOutput, LcrOutput, RankOutput, RenderOutput, ScoreOutput, LCR_OUTPUT_VERSION,
};
pub use ranker::{RankOutcome, Ranker};
pub use render::{draw_grid, draw_layout, render_html, LabelPalette, RenderOptions};
pub use types::{
    BoundingBox, Element, Label, Layout, RankDiagnostics, RankedLayout, ScoreBreakdown,
    ValidatedPool,
};
pub use validate::{Validated, Validator};
