use anyhow::{Context, Result};
use tracing::info;

use crate::ctx::Ctx;
use crate::pipeline::Stage;
use crate::report::{heatmap, html, json_writer, tsv_writer};

pub struct Stage7Report;

impl Stage7Report {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage7Report {
    fn name(&self) -> &'static str {
        "stage7_report"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let table = ctx.table.as_ref().context("report table missing")?;

        html::write_html(&ctx.output.html_path, table)?;
        info!(path = %ctx.output.html_path.display(), "html_table_written");

        heatmap::write_heatmap(&ctx.output.heatmap_path, table)?;
        info!(path = %ctx.output.heatmap_path.display(), "heatmap_written");

        if ctx.write_tsv {
            tsv_writer::write_tsv(&ctx.output.tsv_path, table)?;
            info!(path = %ctx.output.tsv_path.display(), "tsv_written");
        }
        if ctx.write_json {
            json_writer::write_json(&ctx.output.json_path, table)?;
            info!(path = %ctx.output.json_path.display(), "json_written");
        }

        Ok(())
    }
}
