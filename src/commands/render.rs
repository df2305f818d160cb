use std::path::PathBuf;
use std::process::ExitCode;

use tracing::info;

use lcr_lib::output::LCR_OUTPUT_VERSION;
use lcr_lib::{
    draw_grid, draw_layout, render_html, Canvas, Dataset, LabelPalette, Layout, LcrError,
    LcrOutput, RenderOptions, RenderOutput,
};

use crate::cli::OutputFormat;
use crate::formatting::{render_error, write_output};

/// Run the render command: one PNG per layout, plus optional grid and HTML.
#[allow(clippy::too_many_arguments)]
pub fn run_render(
    verbose: bool,
    input: PathBuf,
    dataset: Dataset,
    canvas: Option<Canvas>,
    scale: u32,
    out_dir: PathBuf,
    grid: bool,
    html: bool,
    format: OutputFormat,
    output: Option<PathBuf>,
) -> ExitCode {
    if scale == 0 {
        return render_error(
            LcrError::Config("scale must be at least 1".to_string()),
            format,
            output,
        );
    }

    let layouts = match load_layouts(&input) {
        Ok(layouts) => layouts,
        Err(err) => return render_error(err, format, output.clone()),
    };
    if layouts.is_empty() {
        return render_error(
            LcrError::Config(format!("No layouts to render in {}", input.display())),
            format,
            output,
        );
    }

    let options = RenderOptions {
        canvas: canvas.unwrap_or_else(|| Canvas::from(dataset.canvas_size())),
        scale,
    };
    let palette = LabelPalette::new(dataset);

    if let Err(err) = std::fs::create_dir_all(&out_dir) {
        return render_error(LcrError::Io(err), format, output);
    }

    let mut images = Vec::with_capacity(layouts.len());
    let mut image_paths = Vec::with_capacity(layouts.len());
    for (i, layout) in layouts.iter().enumerate() {
        let img = draw_layout(layout, &palette, &options);
        let path = out_dir.join(format!("candidate-{}.png", i));
        if let Err(err) = img.save(&path) {
            return render_error(LcrError::Image(err), format, output);
        }
        if verbose {
            info!(path = %path.display(), "wrote layout image");
        }
        images.push(img);
        image_paths.push(path);
    }

    let grid_path = if grid {
        match draw_grid(&images, 5) {
            Some(montage) => {
                let path = out_dir.join("grid.png");
                if let Err(err) = montage.save(&path) {
                    return render_error(LcrError::Image(err), format, output);
                }
                Some(path)
            }
            None => None,
        }
    } else {
        None
    };

    let html_path = if html {
        let refs: Vec<&Layout> = layouts.iter().collect();
        let page = render_html(&refs, &palette, &options);
        let path = out_dir.join("preview.html");
        if let Err(err) = std::fs::write(&path, page) {
            return render_error(LcrError::Io(err), format, output);
        }
        Some(path)
    } else {
        None
    };

    let body = LcrOutput::Render(RenderOutput {
        version: LCR_OUTPUT_VERSION.to_string(),
        images: image_paths,
        grid: grid_path,
        html: html_path,
    });

    if let Err(err) = write_output(&body, format, output) {
        eprintln!("Failed to write output: {}", err);
        return ExitCode::from(2);
    }
    ExitCode::SUCCESS
}

fn load_layouts(input: &PathBuf) -> Result<Vec<Layout>, LcrError> {
    let raw = std::fs::read_to_string(input).map_err(|e| {
        LcrError::Config(format!("Failed to read input {}: {}", input.display(), e))
    })?;
    let layouts: Vec<Layout> = serde_json::from_str(&raw)?;
    Ok(layouts)
}
