use std::path::PathBuf;
use std::process::ExitCode;

use lcr_lib::output::LCR_OUTPUT_VERSION;
use lcr_lib::{score_layout, Layout, LcrError, LcrOutput, ScoreOutput};

use crate::cli::OutputFormat;
use crate::formatting::{render_error, write_output};
use crate::settings::{load_config, resolve_rank_config, RankOverrides};

/// Run the score command on a single structured layout.
pub fn run_score(
    config_path: Option<PathBuf>,
    input: PathBuf,
    align_epsilon: Option<f32>,
    overlap_weight: Option<f32>,
    underfill_weight: Option<f32>,
    format: OutputFormat,
    output: Option<PathBuf>,
) -> ExitCode {
    let config = match load_config(config_path.as_deref()) {
        Ok(cfg) => cfg,
        Err(err) => return render_error(err, format, output.clone()),
    };
    let overrides = RankOverrides {
        align_epsilon,
        overlap_weight,
        underfill_weight,
        ..RankOverrides::default()
    };
    let resolved = match resolve_rank_config(overrides, &config) {
        Ok(cfg) => cfg,
        Err(err) => return render_error(err, format, output.clone()),
    };

    let layout = match load_layout(&input) {
        Ok(layout) => layout,
        Err(err) => return render_error(err, format, output.clone()),
    };

    let scores = score_layout(&layout, &resolved);
    let body = LcrOutput::Score(ScoreOutput {
        version: LCR_OUTPUT_VERSION.to_string(),
        elements: layout.len(),
        scores,
    });

    if let Err(err) = write_output(&body, format, output) {
        eprintln!("Failed to write output: {}", err);
        return ExitCode::from(2);
    }
    ExitCode::SUCCESS
}

fn load_layout(input: &PathBuf) -> Result<Layout, LcrError> {
    let raw = std::fs::read_to_string(input).map_err(|e| {
        LcrError::Config(format!("Failed to read input {}: {}", input.display(), e))
    })?;
    let layout: Layout = serde_json::from_str(&raw)?;
    Ok(layout)
}
