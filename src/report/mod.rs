pub mod heatmap;
pub mod html;
pub mod json_writer;
pub mod summary;
pub mod tsv_writer;

/// Render one table cell: 5-decimal fixed precision, `nan` for undefined.
pub(crate) fn format_value(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.5}"),
        None => "nan".to_string(),
    }
}
