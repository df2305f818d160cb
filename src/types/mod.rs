//! Core data types for candidate layouts and ranking results.

mod core;
mod results;

pub use core::{BoundingBox, Element, Label, Layout};
pub use results::{RankDiagnostics, RankedLayout, ScoreBreakdown, ValidatedPool};
