//! Rasterization and HTML previews of ranked layouts.
//!
//! Pure: everything here returns images or strings; file writes live in the
//! CLI layer. Rendering is deterministic: label colors come from evenly
//! spaced HSLuv hues over the dataset's label table, and elements are drawn
//! largest-area first so small elements stay visible on top.

use image::{Rgba, RgbaImage};
use palette::{FromColor, Hsluv, Srgb};

use crate::canvas::Canvas;
use crate::labels::Dataset;
use crate::types::{Label, Layout};

const FILL_ALPHA: u8 = 100;
const GRID_BORDER: u32 = 6;

/// Deterministic per-label colors for one dataset.
#[derive(Debug, Clone)]
pub struct LabelPalette {
    dataset: Dataset,
    colors: Vec<Rgba<u8>>,
}

impl LabelPalette {
    pub fn new(dataset: Dataset) -> Self {
        let n = dataset.labels().len();
        let colors = (0..n)
            .map(|i| {
                let hue = 360.0 * i as f32 / n as f32;
                let rgb = Srgb::from_color(Hsluv::new(hue, 90.0, 60.0));
                let rgb = rgb.into_format::<u8>();
                Rgba([rgb.red, rgb.green, rgb.blue, 255])
            })
            .collect();
        Self { dataset, colors }
    }

    /// Color for a label; labels outside the table fall back to grey.
    pub fn color(&self, label: &Label) -> Rgba<u8> {
        self.dataset
            .labels()
            .iter()
            .position(|name| *name == label.as_str())
            .map(|i| self.colors[i])
            .unwrap_or(Rgba([128, 128, 128, 255]))
    }

    /// CSS `rgb(...)` form, for the HTML preview.
    pub fn css_color(&self, label: &Label) -> String {
        let Rgba([r, g, b, _]) = self.color(label);
        format!("rgb({}, {}, {})", r, g, b)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    pub canvas: Canvas,
    /// Pixel multiplier over canvas units.
    pub scale: u32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            canvas: Canvas::default(),
            scale: 3,
        }
    }
}

/// Draw one layout: white ground, translucent fills, solid outlines.
pub fn draw_layout(layout: &Layout, palette: &LabelPalette, options: &RenderOptions) -> RgbaImage {
    let width = options.canvas.width * options.scale;
    let height = options.canvas.height * options.scale;
    let mut img = RgbaImage::from_pixel(width, height, Rgba([255, 255, 255, 255]));

    // Largest areas first so small elements end up on top.
    let mut order: Vec<usize> = (0..layout.len()).collect();
    order.sort_by(|a, b| {
        layout.elements[*b]
            .bbox
            .area()
            .total_cmp(&layout.elements[*a].bbox.area())
            .then(a.cmp(b))
    });

    for index in order {
        let element = &layout.elements[index];
        let color = palette.color(&element.label);
        let x1 = (element.bbox.x * width as f32).round().max(0.0) as u32;
        let y1 = (element.bbox.y * height as f32).round().max(0.0) as u32;
        let x2 = (element.bbox.right() * width as f32).round().min(width as f32) as u32;
        let y2 = (element.bbox.bottom() * height as f32).round().min(height as f32) as u32;
        if x2 <= x1 || y2 <= y1 {
            continue;
        }

        fill_blend(&mut img, x1, y1, x2, y2, color);
        outline(&mut img, x1, y1, x2, y2, color);
    }

    img
}

/// Montage of candidate renderings with black separators, best first,
/// row-major. Column count caps at `cols`; rows grow as needed.
pub fn draw_grid(images: &[RgbaImage], cols: usize) -> Option<RgbaImage> {
    let first = images.first()?;
    let cols = cols.min(images.len()).max(1) as u32;
    let rows = images.len().div_ceil(cols as usize) as u32;
    let (tile_w, tile_h) = (first.width(), first.height());

    let total_w = tile_w * cols + (cols + 1) * GRID_BORDER;
    let total_h = tile_h * rows + (rows + 1) * GRID_BORDER;
    let mut grid = RgbaImage::from_pixel(total_w, total_h, Rgba([0, 0, 0, 255]));

    for (i, tile) in images.iter().enumerate() {
        let col = (i as u32) % cols;
        let row = (i as u32) / cols;
        let x_offset = col * (tile_w + GRID_BORDER) + GRID_BORDER;
        let y_offset = row * (tile_h + GRID_BORDER) + GRID_BORDER;
        for (x, y, pixel) in tile.enumerate_pixels() {
            if x < tile_w && y < tile_h {
                grid.put_pixel(x_offset + x, y_offset + y, *pixel);
            }
        }
    }

    Some(grid)
}

/// Standalone HTML preview of a set of layouts, absolutely-positioned divs
/// mirroring the html decode format.
pub fn render_html(layouts: &[&Layout], palette: &LabelPalette, options: &RenderOptions) -> String {
    let width = options.canvas.width * options.scale;
    let height = options.canvas.height * options.scale;

    let mut body = String::new();
    for (i, layout) in layouts.iter().enumerate() {
        body.push_str(&format!(
            "  <div class=\"canvas\" id=\"candidate-{}\" style=\"position: relative; \
             width: {}px; height: {}px; border: 1px solid #000; margin: 8px; \
             display: inline-block; overflow: hidden\">\n",
            i, width, height
        ));
        for element in layout.iter() {
            let left = (element.bbox.x * width as f32).round() as i64;
            let top = (element.bbox.y * height as f32).round() as i64;
            let w = (element.bbox.width * width as f32).round() as i64;
            let h = (element.bbox.height * height as f32).round() as i64;
            body.push_str(&format!(
                "    <div class=\"{label}\" style=\"position: absolute; left: {left}px; \
                 top: {top}px; width: {w}px; height: {h}px; background: {color}; \
                 opacity: 0.6; outline: 1px solid {color}\">{label}</div>\n",
                label = element.label,
                color = palette.css_color(&element.label),
            ));
        }
        body.push_str("  </div>\n");
    }

    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n\
         <title>Ranked layouts</title>\n</head>\n<body>\n{}</body>\n</html>\n",
        body
    )
}

fn fill_blend(img: &mut RgbaImage, x1: u32, y1: u32, x2: u32, y2: u32, color: Rgba<u8>) {
    let alpha = FILL_ALPHA as u32;
    for y in y1..y2 {
        for x in x1..x2 {
            let dst = img.get_pixel(x, y).0;
            let blended = [
                blend_channel(color.0[0], dst[0], alpha),
                blend_channel(color.0[1], dst[1], alpha),
                blend_channel(color.0[2], dst[2], alpha),
                255,
            ];
            img.put_pixel(x, y, Rgba(blended));
        }
    }
}

fn blend_channel(src: u8, dst: u8, alpha: u32) -> u8 {
    ((src as u32 * alpha + dst as u32 * (255 - alpha)) / 255) as u8
}

fn outline(img: &mut RgbaImage, x1: u32, y1: u32, x2: u32, y2: u32, color: Rgba<u8>) {
    let solid = Rgba([color.0[0], color.0[1], color.0[2], 255]);
    for x in x1..x2 {
        img.put_pixel(x, y1, solid);
        img.put_pixel(x, y2 - 1, solid);
    }
    for y in y1..y2 {
        img.put_pixel(x1, y, solid);
        img.put_pixel(x2 - 1, y, solid);
    }
}
