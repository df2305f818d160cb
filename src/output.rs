use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::decode::DecodeReport;
use crate::error::ErrorPayload;
use crate::labels::Dataset;
use crate::types::{RankDiagnostics, RankedLayout, ScoreBreakdown};

/// Schema version for output payloads.
pub const LCR_OUTPUT_VERSION: &str = "0.1.0";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "kebab-case")]
pub enum LcrOutput {
    Rank(RankOutput),
    Score(ScoreOutput),
    Render(RenderOutput),
    Error(ErrorOutput),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankOutput {
    pub version: String,
    pub dataset: Dataset,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decode: Option<DecodeReport>,
    pub diagnostics: RankDiagnostics,
    pub selected: Vec<RankedLayout>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreOutput {
    pub version: String,
    pub elements: usize,
    pub scores: ScoreBreakdown,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderOutput {
    pub version: String,
    pub images: Vec<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorOutput {
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub error: ErrorPayload,
}
