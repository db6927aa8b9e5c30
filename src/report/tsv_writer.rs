use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};

use crate::metrics::COLUMNS;
use crate::report::format_value;
use crate::table::ReportTable;

pub fn write_tsv(path: &Path, table: &ReportTable) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    let mut w = BufWriter::new(file);

    let mut header = String::from("method");
    for kind in COLUMNS {
        header.push('\t');
        header.push_str(kind.label());
    }
    writeln!(w, "{header}")?;

    for (method, record) in table.rows() {
        let mut line = method.clone();
        for kind in COLUMNS {
            line.push('\t');
            line.push_str(&format_value(record.get(kind)));
        }
        writeln!(w, "{line}")?;
    }
    Ok(())
}
