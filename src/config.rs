use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{LcrError, Result};

/// Weights for the composite score:
/// `composite = alignment - overlap_weight * overlap - underfill_weight * underfill`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ScoreWeights {
    pub overlap: f32,
    pub underfill: f32,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            overlap: 0.5,
            underfill: 0.25,
        }
    }
}

/// What to do with elements that leave the unit canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoundsPolicy {
    /// Clip width/height down first, then clamp position back into canvas.
    #[default]
    Clip,
    /// Drop the offending element.
    Reject,
}

/// Engine configuration. Construct, then [`Config::validate`] before use;
/// loading through [`Config::load`] validates for you.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct Config {
    /// Number of layouts to select, best first.
    pub top_k: usize,
    /// Two same-axis edge/center values closer than this count as aligned.
    pub align_epsilon: f32,
    /// Per-coordinate tolerance under which two layouts are duplicates.
    pub dedup_epsilon: f32,
    /// Requested element count; layouts closer to it win score ties.
    pub expected_elements: Option<usize>,
    pub bounds: BoundsPolicy,
    pub weights: ScoreWeights,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            top_k: 4,
            align_epsilon: 0.002,
            dedup_epsilon: 0.01,
            expected_elements: None,
            bounds: BoundsPolicy::Clip,
            weights: ScoreWeights::default(),
        }
    }
}

impl Config {
    /// Load config from a TOML file, the central config, or defaults.
    /// Priority: explicit path > ~/.config/lcr/config.toml > defaults.
    pub fn load(path: Option<&Path>) -> Result<Config> {
        let effective = match path {
            Some(p) => Some(p.to_path_buf()),
            None => Self::central_config_path().filter(|p| p.exists()),
        };

        let config = match effective {
            Some(p) => {
                let raw = std::fs::read_to_string(&p).map_err(|e| {
                    LcrError::Config(format!("Failed to read config {}: {}", p.display(), e))
                })?;
                toml::from_str(&raw).map_err(|e| {
                    LcrError::Config(format!("Failed to parse config {}: {}", p.display(), e))
                })?
            }
            None => Config::default(),
        };

        config.validate()?;
        Ok(config)
    }

    pub fn central_config_path() -> Option<PathBuf> {
        std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".config/lcr/config.toml"))
    }

    /// Reject configurations the engine cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.top_k == 0 {
            return Err(LcrError::Config("top_k must be at least 1".to_string()));
        }
        if !self.weights.overlap.is_finite() || self.weights.overlap < 0.0 {
            return Err(LcrError::Config(format!(
                "overlap weight must be finite and non-negative, got {}",
                self.weights.overlap
            )));
        }
        if !self.weights.underfill.is_finite() || self.weights.underfill < 0.0 {
            return Err(LcrError::Config(format!(
                "underfill weight must be finite and non-negative, got {}",
                self.weights.underfill
            )));
        }
        if !self.align_epsilon.is_finite() || self.align_epsilon < 0.0 {
            return Err(LcrError::Config(format!(
                "align_epsilon must be finite and non-negative, got {}",
                self.align_epsilon
            )));
        }
        if !self.dedup_epsilon.is_finite() || self.dedup_epsilon < 0.0 {
            return Err(LcrError::Config(format!(
                "dedup_epsilon must be finite and non-negative, got {}",
                self.dedup_epsilon
            )));
        }
        if self.expected_elements == Some(0) {
            return Err(LcrError::Config(
                "expected_elements must be at least 1 when set".to_string(),
            ));
        }
        Ok(())
    }
}
