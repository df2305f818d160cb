use std::path::{Path, PathBuf};
use std::process::ExitCode;

use tracing::info;

use lcr_lib::output::LCR_OUTPUT_VERSION;
use lcr_lib::{
    Dataset, DecodeFormat, DecodeReport, Decoder, LcrError, LcrOutput, Layout, RankOutput, Ranker,
};

use crate::cli::{InputFormat, OutputFormat};
use crate::formatting::{render_error, write_output};
use crate::settings::{format_effective_config, load_config, resolve_rank_config, RankOverrides};

/// Run the rank command.
#[allow(clippy::too_many_arguments)]
pub fn run_rank(
    config_path: Option<PathBuf>,
    verbose: bool,
    input: PathBuf,
    input_format: InputFormat,
    dataset: Dataset,
    overrides: RankOverrides,
    format: OutputFormat,
    output: Option<PathBuf>,
) -> ExitCode {
    let config = match load_config(config_path.as_deref()) {
        Ok(cfg) => cfg,
        Err(err) => return render_error(err, format, output.clone()),
    };
    let resolved = match resolve_rank_config(overrides, &config) {
        Ok(cfg) => cfg,
        Err(err) => return render_error(err, format, output.clone()),
    };

    if verbose {
        info!(
            "{}",
            format_effective_config(&resolved, config_path.as_deref())
        );
    }

    let (pool, decode) = match load_pool(&input, input_format, dataset) {
        Ok(loaded) => loaded,
        Err(err) => return render_error(err, format, output.clone()),
    };

    let ranker = match Ranker::new(resolved) {
        Ok(ranker) => ranker,
        Err(err) => return render_error(err, format, output.clone()),
    };

    let outcome = match ranker.rank(&pool) {
        Ok(outcome) => outcome,
        Err(no_valid) => return render_error(no_valid.into(), format, output.clone()),
    };

    let body = LcrOutput::Rank(RankOutput {
        version: LCR_OUTPUT_VERSION.to_string(),
        dataset,
        decode,
        diagnostics: outcome.diagnostics,
        selected: outcome.selected,
    });

    if let Err(err) = write_output(&body, format, output) {
        eprintln!("Failed to write output: {}", err);
        return ExitCode::from(2);
    }
    ExitCode::SUCCESS
}

/// Read the candidate pool file: markup strings for seq/html, structured
/// element arrays for json.
fn load_pool(
    input: &Path,
    input_format: InputFormat,
    dataset: Dataset,
) -> Result<(Vec<Layout>, Option<DecodeReport>), LcrError> {
    let raw = std::fs::read_to_string(input).map_err(|e| {
        LcrError::Config(format!("Failed to read input {}: {}", input.display(), e))
    })?;

    match input_format {
        InputFormat::Json => {
            let pool: Vec<Layout> = serde_json::from_str(&raw)?;
            Ok((pool, None))
        }
        InputFormat::Seq | InputFormat::Html => {
            let candidates: Vec<String> = serde_json::from_str(&raw)?;
            let decode_format = match input_format {
                InputFormat::Seq => DecodeFormat::Seq,
                _ => DecodeFormat::Html,
            };
            let decoder = Decoder::new(dataset, decode_format);
            let (pool, report) = decoder.decode_pool(&candidates);
            Ok((pool, Some(report)))
        }
    }
}
