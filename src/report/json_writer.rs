use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use anyhow::{Context, Result};

use crate::table::{MetricRecord, ReportTable};

pub fn write_json(path: &Path, table: &ReportTable) -> Result<()> {
    let rows: BTreeMap<&String, &MetricRecord> = table.rows().collect();
    let file =
        File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &rows)?;
    Ok(())
}
