mod cli;
mod commands;
mod formatting;
mod settings;

use std::process::ExitCode;

use cli::Commands;
use commands::{run_rank, run_render, run_score};
use settings::RankOverrides;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let args = cli::parse();

    let default_filter = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("LCR_LOG").unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    match args.command {
        Commands::Rank {
            input,
            input_format,
            dataset,
            top_k,
            expected_elements,
            bounds,
            align_epsilon,
            dedup_epsilon,
            overlap_weight,
            underfill_weight,
            format,
            output,
        } => run_rank(
            args.config,
            args.verbose,
            input,
            input_format,
            dataset,
            RankOverrides {
                top_k,
                expected_elements,
                bounds,
                align_epsilon,
                dedup_epsilon,
                overlap_weight,
                underfill_weight,
            },
            format,
            output,
        ),
        Commands::Score {
            input,
            align_epsilon,
            overlap_weight,
            underfill_weight,
            format,
            output,
        } => run_score(
            args.config,
            input,
            align_epsilon,
            overlap_weight,
            underfill_weight,
            format,
            output,
        ),
        Commands::Render {
            input,
            dataset,
            canvas,
            scale,
            out_dir,
            grid,
            html,
            format,
            output,
        } => run_render(
            args.verbose,
            input,
            dataset,
            canvas,
            scale,
            out_dir,
            grid,
            html,
            format,
            output,
        ),
    }
}
