use crate::metrics::MetricKind;
use crate::report::format_value;
use crate::table::ReportTable;

/// Console summary printed after a successful run.
pub fn format_summary(table: &ReportTable) -> String {
    let mut out = String::new();
    out.push_str(&format!("maskbench v{}\n", env!("CARGO_PKG_VERSION")));
    out.push_str(&format!("Methods evaluated: {}\n", table.len()));

    let best = table
        .rows()
        .filter_map(|(method, record)| record.get(MetricKind::F1).map(|v| (method, v)))
        .max_by(|a, b| a.1.total_cmp(&b.1));
    match best {
        Some((method, value)) => {
            out.push_str(&format!(
                "Best F1-score: {} ({})\n",
                method,
                format_value(Some(value))
            ));
        }
        None => out.push_str("Best F1-score: undefined for every method\n"),
    }
    out
}
