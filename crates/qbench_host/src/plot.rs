//! Comparison chart rendering.
//!
//! Draws a `Figure` as a log-scale line chart with plotters' bitmap backend.
//! The image is first rendered into a temporary `.png` next to the final
//! path and moved into place only once it is complete, so a failed render
//! never leaves a partial image and never clobbers an earlier one.

use anyhow::{Context, Result};
use plotters::prelude::*;
use qbench_common::axis::{PROBLEM_SIZES, X_DESC, Y_DESC, Y_MAX_MS, Y_MIN_MS};
use qbench_core::Figure;
use std::fs;
use std::path::Path;

macro_rules! hexcolour {
    ($colour:literal) => {
        RGBColor(
            (($colour & 0xFF0000) >> 16) as u8,
            (($colour & 0x00FF00) >> 8) as u8,
            ($colour & 0x0000FF) as u8,
        )
    };
}

const COLOURS: &[RGBColor] = &[
    hexcolour!(0x1F77B4),
    hexcolour!(0xFF7F0E),
    hexcolour!(0x2CA02C),
    hexcolour!(0xD62728),
    hexcolour!(0x9467BD),
    hexcolour!(0x8C564B),
    hexcolour!(0xE377C2),
    hexcolour!(0x7F7F7F),
    hexcolour!(0xBCBD22),
    hexcolour!(0x17BECF),
];

// Horizontal padding either side of the first and last problem size.
const X_PAD: f64 = 0.75;

const FONT: &str = "sans-serif";
const LABEL_FONT_SIZE: u32 = 12;
const AXIS_DESC_FONT_SIZE: u32 = 14;

/// Canvas dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlotStyle {
    pub width: u32,
    pub height: u32,
}

impl Default for PlotStyle {
    fn default() -> Self {
        Self {
            width: 500,
            height: 400,
        }
    }
}

/// Renders `figure` and writes it to `output` as a PNG.
///
/// The parent directory of `output` must already exist. On success the
/// image at `output` is replaced in a single rename; on failure the
/// temporary file is removed and `output` is left as it was.
pub fn render(figure: &Figure, output: &Path, style: &PlotStyle) -> Result<()> {
    write_atomically(output, |staged| {
        draw(figure, staged, style)
            .with_context(|| format!("Failed to render {}", output.display()))
    })
}

/// Runs `write` against a staging `.png` beside `output`, then renames the
/// staged file over `output`.
///
/// The published file keeps the permissions of the image it replaces, or
/// gets `0644` when there was none. If `write` fails the staging file is
/// removed and `output` is untouched.
fn write_atomically<F>(output: &Path, write: F) -> Result<()>
where
    F: FnOnce(&Path) -> Result<()>,
{
    let dir = match output.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    // Removed on drop unless persisted below.
    let staging = tempfile::Builder::new()
        .prefix(".qbench-")
        .suffix(".png")
        .tempfile_in(dir)
        .with_context(|| format!("Cannot write to directory {}", dir.display()))?;

    write(staging.path())?;

    if let Some(permissions) = published_permissions(output) {
        staging
            .as_file()
            .set_permissions(permissions)
            .with_context(|| format!("Failed to set permissions for {}", output.display()))?;
    }

    staging
        .persist(output)
        .map_err(|e| e.error)
        .with_context(|| format!("Failed to write {}", output.display()))?;
    Ok(())
}

fn published_permissions(output: &Path) -> Option<fs::Permissions> {
    match fs::metadata(output) {
        Ok(meta) => Some(meta.permissions()),
        Err(_) => default_permissions(),
    }
}

#[cfg(unix)]
fn default_permissions() -> Option<fs::Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Some(fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn default_permissions() -> Option<fs::Permissions> {
    None
}

/// Draws onto a bitmap canvas at `path`. The canvas is released when this
/// returns, whether or not drawing succeeded.
fn draw(figure: &Figure, path: &Path, style: &PlotStyle) -> Result<()> {
    let root = BitMapBackend::new(path, (style.width, style.height)).into_drawing_area();
    root.fill(&WHITE)?;

    let first = f64::from(PROBLEM_SIZES[0]);
    let last = f64::from(PROBLEM_SIZES[PROBLEM_SIZES.len() - 1]);

    let mut chart = ChartBuilder::on(&root)
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(
            (first - X_PAD)..(last + X_PAD),
            (Y_MIN_MS..Y_MAX_MS).log_scale(),
        )?;

    chart
        .configure_mesh()
        .x_labels(PROBLEM_SIZES.len())
        .x_label_formatter(&|x| format!("{:.0}", x))
        .y_label_formatter(&|y| format!("{:e}", y))
        .x_desc(X_DESC)
        .y_desc(Y_DESC)
        .label_style((FONT, LABEL_FONT_SIZE))
        .axis_desc_style((FONT, AXIS_DESC_FONT_SIZE))
        .draw()?;

    for (idx, series) in figure.series().iter().enumerate() {
        let colour = COLOURS[idx % COLOURS.len()];
        let style = colour.stroke_width(2);

        // The legend entry rides on the first run, even an empty one.
        let mut runs = series.log_runs().into_iter();
        chart
            .draw_series(LineSeries::new(runs.next().unwrap_or_default(), style))?
            .label(series.label.as_str())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], style));
        for run in runs {
            chart.draw_series(LineSeries::new(run, style))?;
        }
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .label_font((FONT, LABEL_FONT_SIZE))
        .draw()?;

    root.present()?;
    Ok(())
}
