use std::path::Path;

use lcr_lib::{BoundsPolicy, Config, LcrError};

use crate::cli::BoundsArg;

/// CLI overrides for the rank configuration; `None` means "not provided".
#[derive(Debug, Clone, Copy, Default)]
pub struct RankOverrides {
    pub top_k: Option<usize>,
    pub expected_elements: Option<usize>,
    pub bounds: Option<BoundsArg>,
    pub align_epsilon: Option<f32>,
    pub dedup_epsilon: Option<f32>,
    pub overlap_weight: Option<f32>,
    pub underfill_weight: Option<f32>,
}

/// Merge explicit CLI flags into the file/default config, then re-validate
/// the merged result so bad CLI values fail the same way bad files do.
pub fn resolve_rank_config(overrides: RankOverrides, config: &Config) -> Result<Config, LcrError> {
    let mut resolved = config.clone();

    if let Some(k) = overrides.top_k {
        resolved.top_k = k;
    }
    if let Some(expected) = overrides.expected_elements {
        resolved.expected_elements = Some(expected);
    }
    if let Some(bounds) = overrides.bounds {
        resolved.bounds = bounds_policy_from_cli(bounds);
    }
    if let Some(eps) = overrides.align_epsilon {
        resolved.align_epsilon = eps;
    }
    if let Some(eps) = overrides.dedup_epsilon {
        resolved.dedup_epsilon = eps;
    }
    if let Some(w) = overrides.overlap_weight {
        resolved.weights.overlap = w;
    }
    if let Some(w) = overrides.underfill_weight {
        resolved.weights.underfill = w;
    }

    resolved.validate()?;
    Ok(resolved)
}

pub fn bounds_policy_from_cli(bounds: BoundsArg) -> BoundsPolicy {
    match bounds {
        BoundsArg::Clip => BoundsPolicy::Clip,
        BoundsArg::Reject => BoundsPolicy::Reject,
    }
}

/// Load config from a TOML file, central config, or return defaults.
/// Priority: explicit path > ~/.config/lcr/config.toml > defaults
pub fn load_config(path: Option<&Path>) -> Result<Config, LcrError> {
    Config::load(path).map_err(|e| {
        let loc = path
            .map(|p| p.display().to_string())
            .or_else(|| Config::central_config_path().map(|p| p.display().to_string()))
            .unwrap_or_else(|| "defaults".to_string());
        match e {
            LcrError::Config(msg) => LcrError::Config(format!("{} (config: {})", msg, loc)),
            other => other,
        }
    })
}

/// Format effective config as a single-line string.
pub fn format_effective_config(config: &Config, config_source: Option<&Path>) -> String {
    let source = config_source
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "defaults".to_string());
    let expected = config
        .expected_elements
        .map(|n| n.to_string())
        .unwrap_or_else(|| "none".to_string());
    format!(
        "Effective config [{source}]: top_k={}, expected_elements={expected}, bounds={:?}, align_epsilon={}, dedup_epsilon={}, weights: overlap={:.2}, underfill={:.2}",
        config.top_k,
        config.bounds,
        config.align_epsilon,
        config.dedup_epsilon,
        config.weights.overlap,
        config.weights.underfill,
    )
}
