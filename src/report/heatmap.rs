//! Heatmap rendering of the report table.
//!
//! One colored cell per method/metric pair over a Spectral colormap scaled to
//! the table's global value range, with a colorbar on the right. Undefined
//! cells are drawn gray.

use std::path::Path;

use anyhow::Result;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use crate::metrics::COLUMNS;
use crate::table::ReportTable;

const CELL_W: i32 = 100;
const CELL_H: i32 = 40;
const MARGIN_LEFT: i32 = 200;
const MARGIN_TOP: i32 = 60;
const MARGIN_BOTTOM: i32 = 60;
const COLORBAR_W: i32 = 20;
const MARGIN_RIGHT: i32 = 100;

pub fn write_heatmap(path: &Path, table: &ReportTable) -> Result<()> {
    let n_rows = table.len() as i32;
    let n_cols = COLUMNS.len() as i32;
    let width = (MARGIN_LEFT + n_cols * CELL_W + MARGIN_RIGHT) as u32;
    let height = (MARGIN_TOP + n_rows.max(1) * CELL_H + MARGIN_BOTTOM) as u32;

    let root = BitMapBackend::new(path, (width, height)).into_drawing_area();
    root.fill(&WHITE).map_err(plot_err)?;

    let title_style = ("sans-serif", 20).into_font().color(&BLACK);
    root.draw(&Text::new(
        "Heatmap of the segmentation methods relative to different metrics",
        (MARGIN_LEFT, 20),
        title_style,
    ))
    .map_err(plot_err)?;

    let (lo, hi) = table.value_range().unwrap_or((0.0, 1.0));
    let span = if hi > lo { hi - lo } else { 1.0 };

    let row_label = ("sans-serif", 15)
        .into_font()
        .color(&BLACK)
        .pos(Pos::new(HPos::Right, VPos::Center));
    let col_label = ("sans-serif", 15)
        .into_font()
        .color(&BLACK)
        .pos(Pos::new(HPos::Center, VPos::Top));

    for (row, (method, record)) in table.rows().enumerate() {
        let y0 = MARGIN_TOP + row as i32 * CELL_H;
        root.draw(&Text::new(
            method.clone(),
            (MARGIN_LEFT - 8, y0 + CELL_H / 2),
            row_label.clone(),
        ))
        .map_err(plot_err)?;

        for (col, kind) in COLUMNS.iter().enumerate() {
            let x0 = MARGIN_LEFT + col as i32 * CELL_W;
            let color = match record.get(*kind) {
                Some(v) => spectral(((v - lo) / span).clamp(0.0, 1.0)),
                None => RGBColor(180, 180, 180),
            };
            root.draw(&Rectangle::new(
                [(x0, y0), (x0 + CELL_W, y0 + CELL_H)],
                color.filled(),
            ))
            .map_err(plot_err)?;
        }
    }

    let label_y = MARGIN_TOP + n_rows * CELL_H + 8;
    for (col, kind) in COLUMNS.iter().enumerate() {
        let x0 = MARGIN_LEFT + col as i32 * CELL_W;
        root.draw(&Text::new(
            kind.label(),
            (x0 + CELL_W / 2, label_y),
            col_label.clone(),
        ))
        .map_err(plot_err)?;
    }

    draw_colorbar(&root, width as i32, n_rows, lo, hi)?;
    root.present().map_err(plot_err)?;
    Ok(())
}

fn draw_colorbar(
    root: &DrawingArea<BitMapBackend<'_>, plotters::coord::Shift>,
    width: i32,
    n_rows: i32,
    lo: f64,
    hi: f64,
) -> Result<()> {
    let x0 = width - MARGIN_RIGHT + 20;
    let bar_h = n_rows.max(1) * CELL_H;
    let steps = 64;
    for i in 0..steps {
        // Top of the bar is the maximum.
        let t = 1.0 - i as f64 / (steps - 1) as f64;
        let y0 = MARGIN_TOP + i * bar_h / steps;
        let y1 = MARGIN_TOP + (i + 1) * bar_h / steps;
        root.draw(&Rectangle::new(
            [(x0, y0), (x0 + COLORBAR_W, y1)],
            spectral(t).filled(),
        ))
        .map_err(plot_err)?;
    }

    let tick = ("sans-serif", 13)
        .into_font()
        .color(&BLACK)
        .pos(Pos::new(HPos::Left, VPos::Center));
    root.draw(&Text::new(
        format!("{hi:.2}"),
        (x0 + COLORBAR_W + 4, MARGIN_TOP),
        tick.clone(),
    ))
    .map_err(plot_err)?;
    root.draw(&Text::new(
        format!("{lo:.2}"),
        (x0 + COLORBAR_W + 4, MARGIN_TOP + bar_h),
        tick,
    ))
    .map_err(plot_err)?;
    Ok(())
}

fn plot_err<E: std::fmt::Display>(err: E) -> anyhow::Error {
    anyhow::anyhow!("heatmap rendering failed: {err}")
}

/// Spectral colormap: low values red, high values blue-purple.
fn spectral(t: f64) -> RGBColor {
    const ANCHORS: [(u8, u8, u8); 11] = [
        (158, 1, 66),
        (213, 62, 79),
        (244, 109, 67),
        (253, 174, 97),
        (254, 224, 139),
        (255, 255, 191),
        (230, 245, 152),
        (171, 221, 164),
        (102, 194, 165),
        (50, 136, 189),
        (94, 79, 162),
    ];
    let t = t.clamp(0.0, 1.0) * (ANCHORS.len() - 1) as f64;
    let i = (t.floor() as usize).min(ANCHORS.len() - 2);
    let local = t - i as f64;
    let (a, b) = (ANCHORS[i], ANCHORS[i + 1]);
    let lerp = |x: u8, y: u8| (x as f64 + (y as f64 - x as f64) * local).round() as u8;
    RGBColor(lerp(a.0, b.0), lerp(a.1, b.1), lerp(a.2, b.2))
}
