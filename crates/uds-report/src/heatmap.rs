//! Sampled data-availability heatmap.
//!
//! Variables run down the vertical axis and sampled records across the
//! horizontal axis. A cell is green when the record holds a valid value for
//! the variable and red otherwise; a two-swatch legend sits to the right.
//! Title, axis and legend labels are drawn when a font is available.

use std::path::Path;

use image::{Rgba, RgbaImage};
use imageproc::drawing::{draw_filled_rect_mut, draw_hollow_rect_mut};
use imageproc::rect::Rect;
use polars::prelude::DataFrame;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::index;
use tracing::{info, warn};

use uds_core::{column_validity, data_columns};
use uds_model::HeatmapOptions;

use crate::error::{ReportError, Result};
use crate::text::{LabelFont, TextPainter};

const HAS_DATA: Rgba<u8> = Rgba([0, 104, 55, 255]);
const NO_DATA: Rgba<u8> = Rgba([165, 0, 38, 255]);
const BACKGROUND: Rgba<u8> = Rgba([255, 255, 255, 255]);
const BORDER: Rgba<u8> = Rgba([64, 64, 64, 255]);

const TEXT: Rgba<u8> = Rgba([32, 32, 32, 255]);

const MARGIN: u32 = 16;
const LEGEND_GAP: u32 = 24;
const SWATCH: u32 = 20;
const TITLE_BAND: u32 = 32;
const AXIS_BAND: u32 = 24;
const LEGEND_TEXT_GAP: u32 = 6;
const LEGEND_TEXT: u32 = 96;

const TITLE_SIZE: f32 = 16.0;
const LABEL_SIZE: f32 = 13.0;

/// Binary valid/missing matrix over sampled records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailabilityMatrix {
    /// Variable names, one per matrix row.
    pub variables: Vec<String>,
    /// Sampled record indices, one per matrix column.
    pub records: Vec<usize>,
    /// `cells[variable][record]`, true when the value is valid.
    pub cells: Vec<Vec<bool>>,
}

impl AvailabilityMatrix {
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty() || self.records.is_empty()
    }
}

/// Reproducible sample of record indices, without replacement.
///
/// All indices are returned, in order, when `height <= sample_size`.
pub fn sample_indices(height: usize, sample_size: usize, seed: u64) -> Vec<usize> {
    if height <= sample_size {
        return (0..height).collect();
    }
    let mut rng = StdRng::seed_from_u64(seed);
    index::sample(&mut rng, height, sample_size).into_vec()
}

/// Availability of every non-excluded column for a seeded record sample.
pub fn availability_matrix(
    df: &DataFrame,
    excluded: &[String],
    sentinel: f64,
    options: &HeatmapOptions,
) -> AvailabilityMatrix {
    let records = sample_indices(df.height(), options.sample_size, options.seed);
    let mut variables = Vec::new();
    let mut cells: Vec<Vec<bool>> = Vec::new();
    for column in data_columns(df, excluded) {
        let validity = column_validity(column, sentinel);
        variables.push(column.name().to_string());
        cells.push(records.iter().map(|idx| validity[*idx]).collect());
    }
    AvailabilityMatrix {
        variables,
        records,
        cells,
    }
}

fn heatmap_title(records: usize) -> String {
    format!("Data Availability Heatmap (Sample of {records} participants)")
}

/// Draw the matrix as a two-colour grid with a legend.
///
/// Without a font the layout is unchanged and the label areas stay blank.
pub fn render_heatmap(
    matrix: &AvailabilityMatrix,
    options: &HeatmapOptions,
    font: Option<&LabelFont>,
) -> RgbaImage {
    let mut painter = font.and_then(TextPainter::new);
    let title = heatmap_title(matrix.records.len());

    let cell_width = options.cell_width.max(1);
    let cell_height = options.cell_height.max(1);
    let grid_width = cell_width * matrix.records.len() as u32;
    let grid_height = cell_height * matrix.variables.len() as u32;
    let legend_height = SWATCH * 2 + MARGIN;
    let grid_x = MARGIN + AXIS_BAND;
    let grid_y = MARGIN + TITLE_BAND;

    let mut width =
        grid_x + grid_width + LEGEND_GAP + SWATCH + LEGEND_TEXT_GAP + LEGEND_TEXT + MARGIN;
    if let Some(painter) = painter.as_mut() {
        let title_width = painter.measure(&title, TITLE_SIZE).ceil() as u32;
        width = width.max(title_width + MARGIN * 2);
    }
    let height = grid_y + grid_height.max(legend_height) + AXIS_BAND + MARGIN;
    let mut image = RgbaImage::from_pixel(width, height, BACKGROUND);

    for (row, values) in matrix.cells.iter().enumerate() {
        for (col, valid) in values.iter().enumerate() {
            let x = grid_x + col as u32 * cell_width;
            let y = grid_y + row as u32 * cell_height;
            let color = if *valid { HAS_DATA } else { NO_DATA };
            draw_filled_rect_mut(
                &mut image,
                Rect::at(x as i32, y as i32).of_size(cell_width, cell_height),
                color,
            );
        }
    }
    if !matrix.is_empty() {
        draw_hollow_rect_mut(
            &mut image,
            Rect::at(grid_x as i32 - 1, grid_y as i32 - 1).of_size(grid_width + 2, grid_height + 2),
            BORDER,
        );
    }

    let legend_x = grid_x + grid_width + LEGEND_GAP;
    let legend = [(HAS_DATA, "Has Data (1)"), (NO_DATA, "No Data (0)")];
    for (slot, (color, label)) in legend.into_iter().enumerate() {
        let y = grid_y + slot as u32 * (SWATCH + MARGIN / 2);
        let swatch = Rect::at(legend_x as i32, y as i32).of_size(SWATCH, SWATCH);
        draw_filled_rect_mut(&mut image, swatch, color);
        draw_hollow_rect_mut(&mut image, swatch, BORDER);
        if let Some(painter) = painter.as_mut() {
            let text_y = y as f32 + (SWATCH as f32 - LABEL_SIZE * 1.25) / 2.0;
            painter.draw(
                &mut image,
                label,
                (legend_x + SWATCH + LEGEND_TEXT_GAP) as i32,
                text_y as i32,
                LABEL_SIZE,
                TEXT,
            );
        }
    }

    if let Some(painter) = painter.as_mut() {
        let title_width = painter.measure(&title, TITLE_SIZE) as u32;
        let title_x = width.saturating_sub(title_width) / 2;
        painter.draw(&mut image, &title, title_x as i32, MARGIN as i32 - 4, TITLE_SIZE, TEXT);

        let x_label = "Sample Participants";
        let x_width = painter.measure(x_label, LABEL_SIZE) as u32;
        let x_pos = grid_x + grid_width.saturating_sub(x_width) / 2;
        let y_pos = grid_y + grid_height.max(legend_height) + 4;
        painter.draw(&mut image, x_label, x_pos as i32, y_pos as i32, LABEL_SIZE, TEXT);

        let rotated = painter.vertical("Variables", LABEL_SIZE, TEXT, BACKGROUND);
        let label_y = grid_y + grid_height.saturating_sub(rotated.height()) / 2;
        image::imageops::overlay(&mut image, &rotated, i64::from(MARGIN), i64::from(label_y));
    }
    image
}

/// Font named by `options.font_path`, else the system sans-serif face.
fn resolve_font(options: &HeatmapOptions) -> Result<Option<LabelFont>> {
    if let Some(path) = &options.font_path {
        return LabelFont::from_file(path).map(Some);
    }
    let font = LabelFont::system();
    if font.is_none() {
        warn!("no system font found; heatmap labels are omitted");
    }
    Ok(font)
}

/// Sample, render and optionally save the availability heatmap.
///
/// With `out_path` the PNG is written there; the rendered image is returned
/// either way.
pub fn plot_availability_heatmap(
    df: &DataFrame,
    excluded: &[String],
    sentinel: f64,
    options: &HeatmapOptions,
    out_path: Option<&Path>,
) -> Result<RgbaImage> {
    let font = resolve_font(options)?;
    let matrix = availability_matrix(df, excluded, sentinel, options);
    let image = render_heatmap(&matrix, options, font.as_ref());
    info!(
        variables = matrix.variables.len(),
        sampled = matrix.records.len(),
        width = image.width(),
        height = image.height(),
        "rendered availability heatmap"
    );
    if let Some(path) = out_path {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| ReportError::io(parent, e))?;
        }
        image.save(path).map_err(|e| ReportError::Image {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        info!(path = %path.display(), "wrote heatmap");
    }
    Ok(image)
}
