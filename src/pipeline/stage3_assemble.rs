use anyhow::Result;
use tracing::info;

use crate::amav::assemble::assemble;
use crate::ctx::Ctx;
use crate::pipeline::Stage;

pub struct Stage3Assemble;

impl Stage3Assemble {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage3Assemble {
    fn name(&self) -> &'static str {
        "stage3_assemble"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let tables = assemble(&ctx.results);
        info!(
            amav_columns = tables.amav.columns.len(),
            years = tables.amav.rows.len(),
            fold_columns = tables.fold_relative.columns.len(),
            rel_years = tables.fold_relative.rows.len(),
            "output_tables_assembled"
        );
        ctx.tables = Some(tables);
        Ok(())
    }
}
