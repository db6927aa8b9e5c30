//! Styled HTML rendering of the report table.
//!
//! Cells are background-graded per column between the column's own min and
//! max over a diverging red-to-green palette, so the best value in every
//! column reads green regardless of the column's scale. Undefined cells
//! render `nan` with no grade.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};

use crate::metrics::COLUMNS;
use crate::report::format_value;
use crate::table::ReportTable;

pub fn write_html(path: &Path, table: &ReportTable) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    let mut w = BufWriter::new(file);

    writeln!(w, "<!DOCTYPE html>")?;
    writeln!(w, "<html><head><meta charset=\"utf-8\"><style>")?;
    writeln!(
        w,
        "table {{ font-family: \"Times New Roman\", serif; border-collapse: collapse; }}"
    )?;
    writeln!(
        w,
        "th, td {{ text-align: center; padding: 4px 10px; border: 1px solid #ddd; }}"
    )?;
    writeln!(w, "</style></head><body><table>")?;

    write!(w, "<thead><tr><th></th>")?;
    for kind in COLUMNS {
        write!(w, "<th>{}</th>", kind.label())?;
    }
    writeln!(w, "</tr></thead>")?;

    let ranges: Vec<Option<(f64, f64)>> = COLUMNS.iter().map(|&k| column_range(table, k)).collect();

    writeln!(w, "<tbody>")?;
    for (method, record) in table.rows() {
        write!(w, "<tr><th>{}</th>", escape(method))?;
        for (kind, range) in COLUMNS.iter().zip(&ranges) {
            match record.get(*kind) {
                Some(v) => {
                    let (r, g, b) = gradient_color(grade(v, *range));
                    write!(
                        w,
                        "<td style=\"background-color: rgb({r},{g},{b})\">{}</td>",
                        format_value(Some(v))
                    )?;
                }
                None => write!(w, "<td>{}</td>", format_value(None))?,
            }
        }
        writeln!(w, "</tr>")?;
    }
    writeln!(w, "</tbody></table></body></html>")?;
    Ok(())
}

fn column_range(table: &ReportTable, kind: crate::metrics::MetricKind) -> Option<(f64, f64)> {
    let mut range: Option<(f64, f64)> = None;
    for (_, record) in table.rows() {
        if let Some(v) = record.get(kind) {
            range = Some(match range {
                Some((lo, hi)) => (lo.min(v), hi.max(v)),
                None => (v, v),
            });
        }
    }
    range
}

fn grade(value: f64, range: Option<(f64, f64)>) -> f64 {
    match range {
        Some((lo, hi)) if hi > lo => (value - lo) / (hi - lo),
        _ => 0.5,
    }
}

/// Diverging light red -> white -> light green ramp.
fn gradient_color(t: f64) -> (u8, u8, u8) {
    const LOW: (f64, f64, f64) = (231.0, 138.0, 129.0);
    const MID: (f64, f64, f64) = (247.0, 247.0, 247.0);
    const HIGH: (f64, f64, f64) = (136.0, 205.0, 130.0);
    let t = t.clamp(0.0, 1.0);
    let (from, to, local) = if t < 0.5 {
        (LOW, MID, t * 2.0)
    } else {
        (MID, HIGH, (t - 0.5) * 2.0)
    };
    let lerp = |a: f64, b: f64| (a + (b - a) * local).round() as u8;
    (lerp(from.0, to.0), lerp(from.1, to.1), lerp(from.2, to.2))
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}
