use anyhow::{Context, Result};
use tracing::info;

use crate::amav::batch::reconstruct_all;
use crate::ctx::Ctx;
use crate::pipeline::Stage;

pub struct Stage2Reconstruct;

impl Stage2Reconstruct {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage2Reconstruct {
    fn name(&self) -> &'static str {
        "stage2_reconstruct"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let table = ctx
            .table
            .as_ref()
            .context("observation table not loaded before reconstruction")?;
        let results = reconstruct_all(&table.trends, &ctx.config, ctx.threads)?;

        // Fan-in: issues are merged once, in phenotype order.
        for r in &results {
            ctx.issues.extend(r.issues.iter().cloned());
        }
        let reconstructed = results.iter().filter(|r| r.is_reconstructed()).count();
        info!(
            phenotypes = results.len(),
            reconstructed,
            negative_mav = ctx.config.negative_mav.as_str(),
            "phenotypes_reconstructed"
        );
        ctx.results = results;
        Ok(())
    }
}
