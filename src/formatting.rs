use std::fmt::Write as FmtWrite;
use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use lcr_lib::output::LCR_OUTPUT_VERSION;
use lcr_lib::{ErrorOutput, LcrError, LcrOutput};

use crate::cli::OutputFormat;

/// Write output in the requested format.
pub fn write_output(
    body: &LcrOutput,
    format: OutputFormat,
    output: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    match format {
        OutputFormat::Json => write_json_output(body, output.as_deref())?,
        OutputFormat::Pretty => write_pretty_output(body, output.as_deref())?,
    };
    Ok(())
}

/// Render an error and return the appropriate exit code.
pub fn render_error(err: LcrError, format: OutputFormat, output: Option<PathBuf>) -> ExitCode {
    // Reserve exit code 2 for fatal errors; an empty ranking is 1.
    let code = ExitCode::from(exit_code_for_error(&err));
    let error_payload = err.to_payload();
    let payload = LcrOutput::Error(ErrorOutput {
        version: LCR_OUTPUT_VERSION.to_string(),
        message: Some(error_payload.message.clone()),
        error: error_payload,
    });

    match format {
        OutputFormat::Json => {
            let content =
                serde_json::to_string(&payload).unwrap_or_else(|_| "{\"mode\":\"error\"}".into());
            if let Some(path) = output {
                if let Err(write_err) = std::fs::write(&path, &content) {
                    eprintln!("Failed to write error output: {}", write_err);
                    println!("{content}");
                }
            } else {
                println!("{content}");
            }
        }
        OutputFormat::Pretty => {
            if let Err(write_err) = write_pretty_output(&payload, output.as_deref()) {
                eprintln!("Failed to write error output: {}", write_err);
            }
        }
    };

    code
}

pub fn exit_code_for_error(err: &LcrError) -> u8 {
    match err {
        LcrError::NoValidLayouts(_) => 1,
        _ => 2,
    }
}

/// Write JSON output to file or stdout.
fn write_json_output(
    body: &LcrOutput,
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let content = serde_json::to_string(body)?;
    if let Some(path) = output {
        std::fs::write(path, content)?;
    } else {
        println!("{content}");
    }
    Ok(())
}

/// Write pretty output to file or stdout.
fn write_pretty_output(body: &LcrOutput, output: Option<&Path>) -> io::Result<()> {
    let stdout_is_tty = std::io::stdout().is_terminal();
    let use_human = output.is_none() && stdout_is_tty;

    if use_human {
        let content = format_pretty(body);
        println!("{content}");
        return Ok(());
    }

    // Non-tty or file output: keep JSON shape for pipelines/files.
    let content = serde_json::to_string(body)
        .map_err(|e| io::Error::other(format!("serialize output: {e}")))?;
    if let Some(path) = output {
        std::fs::write(path, content)?;
    } else {
        println!("{content}");
    }
    Ok(())
}

/// Human-readable rendering for terminals.
pub fn format_pretty(body: &LcrOutput) -> String {
    let mut out = String::new();
    match body {
        LcrOutput::Rank(rank) => {
            let _ = writeln!(
                out,
                "Ranked {} candidate(s) on {}: selected {}, rejected {}, deduplicated {}",
                rank.diagnostics.candidates,
                rank.dataset,
                rank.diagnostics.selected,
                rank.diagnostics.rejected_layouts,
                rank.diagnostics.deduplicated,
            );
            if let Some(decode) = &rank.decode {
                let _ = writeln!(
                    out,
                    "Decoded {}/{} raw candidate(s), {} unknown label(s)",
                    decode.decoded, decode.candidates, decode.unknown_labels,
                );
            }
            for ranked in &rank.selected {
                let _ = writeln!(
                    out,
                    "  #{} candidate {}: composite {:.4} (alignment {:.4}, overlap {:.4}, underfill {:.4}), {} element(s)",
                    ranked.rank,
                    ranked.source_index,
                    ranked.scores.composite,
                    ranked.scores.alignment,
                    ranked.scores.overlap,
                    ranked.scores.underfill,
                    ranked.layout.len(),
                );
            }
        }
        LcrOutput::Score(score) => {
            let _ = writeln!(
                out,
                "Scored layout with {} element(s): composite {:.4}",
                score.elements, score.scores.composite
            );
            let _ = writeln!(
                out,
                "  alignment {:.4}, overlap {:.4}, underfill {:.4}",
                score.scores.alignment, score.scores.overlap, score.scores.underfill
            );
        }
        LcrOutput::Render(render) => {
            let _ = writeln!(out, "Rendered {} image(s)", render.images.len());
            for path in &render.images {
                let _ = writeln!(out, "  {}", path.display());
            }
            if let Some(grid) = &render.grid {
                let _ = writeln!(out, "  grid: {}", grid.display());
            }
            if let Some(html) = &render.html {
                let _ = writeln!(out, "  html: {}", html.display());
            }
        }
        LcrOutput::Error(err) => {
            let _ = writeln!(out, "Error: {}", err.error.message);
            if let Some(remediation) = &err.error.remediation {
                let _ = writeln!(out, "  hint: {}", remediation);
            }
        }
    }
    out.trim_end().to_string()
}
