use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::RankDiagnostics;

#[derive(Debug, Error)]
pub enum LcrError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Image processing error: {0}")]
    Image(#[from] image::ImageError),

    #[error(transparent)]
    NoValidLayouts(#[from] NoValidLayouts),
}

/// Recoverable: the candidate pool held nothing rankable. The caller decides
/// whether to re-request generation with adjusted parameters.
#[derive(Debug, Clone, Copy, Error)]
#[error(
    "No valid layouts: all {candidates} candidate(s) were rejected \
     ({rejected_layouts} empty after repair, {dropped_elements} element(s) dropped)"
)]
pub struct NoValidLayouts {
    pub candidates: usize,
    pub rejected_layouts: usize,
    pub dropped_elements: usize,
}

impl NoValidLayouts {
    pub fn diagnostics(&self) -> RankDiagnostics {
        RankDiagnostics {
            candidates: self.candidates,
            rejected_layouts: self.rejected_layouts,
            dropped_elements: self.dropped_elements,
            deduplicated: 0,
            selected: 0,
        }
    }
}

impl LcrError {
    pub fn decode(message: impl Into<String>) -> Self {
        LcrError::Decode(message.into())
    }

    pub fn to_payload(&self) -> ErrorPayload {
        match self {
            LcrError::Io(e) => ErrorPayload::new(
                ErrorCategory::Config,
                e.to_string(),
                "Check file paths/permissions.",
            ),
            LcrError::Serialization(e) => ErrorPayload::new(
                ErrorCategory::Config,
                e.to_string(),
                "Check the input JSON shape; run with --verbose for details.",
            ),
            LcrError::Decode(msg) => ErrorPayload::new(
                ErrorCategory::Decode,
                msg.to_string(),
                "Check --input-format matches the candidate file (seq, html, or json).",
            ),
            LcrError::Config(msg) => {
                let lower = msg.to_ascii_lowercase();
                if lower.contains("dataset") {
                    ErrorPayload::new(
                        ErrorCategory::Config,
                        msg.to_string(),
                        "Use one of: webui, rico, publaynet, posterlayout.",
                    )
                } else if lower.contains("weight") || lower.contains("epsilon") {
                    ErrorPayload::new(
                        ErrorCategory::Config,
                        msg.to_string(),
                        "Weights and epsilons must be finite and non-negative.",
                    )
                } else if lower.contains("top_k") || lower.contains("top-k") {
                    ErrorPayload::new(
                        ErrorCategory::Config,
                        msg.to_string(),
                        "top_k must be at least 1.",
                    )
                } else {
                    ErrorPayload::new(
                        ErrorCategory::Config,
                        msg.to_string(),
                        "Check flags/paths and the config file (TOML).",
                    )
                }
            }
            LcrError::Image(e) => ErrorPayload::new(
                ErrorCategory::Image,
                e.to_string(),
                "Verify the output directory is writable and the scale is sane.",
            ),
            LcrError::NoValidLayouts(e) => ErrorPayload::new(
                ErrorCategory::NoValidLayouts,
                e.to_string(),
                "Regenerate candidates or loosen validation (bounds = \"clip\").",
            ),
        }
    }
}

pub type Result<T> = std::result::Result<T, LcrError>;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ErrorCategory {
    Config,
    Decode,
    Image,
    NoValidLayouts,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorPayload {
    pub category: ErrorCategory,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remediation: Option<String>,
}

impl ErrorPayload {
    pub fn new(category: ErrorCategory, message: String, remediation: impl Into<String>) -> Self {
        Self {
            category,
            message,
            remediation: Some(remediation.into()),
        }
    }
}
