use anyhow::Result;
use tracing::info;

use crate::ctx::Ctx;
use crate::pipeline::Stage;
use crate::table::ReportTable;

pub struct Stage6Aggregate;

impl Stage6Aggregate {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage6Aggregate {
    fn name(&self) -> &'static str {
        "stage6_aggregate"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let table = ReportTable::join(&ctx.confusion, &ctx.partition)?;
        info!(rows = table.len(), "report_table_ready");
        ctx.table = Some(table);
        Ok(())
    }
}
