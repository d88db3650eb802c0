use anyhow::{Context, Result};

use crate::amav::Authority;
use crate::ctx::Ctx;

pub fn format_summary(ctx: &Ctx) -> Result<String> {
    let version = env!("CARGO_PKG_VERSION");
    let table = ctx.table.as_ref().context("observation table missing")?;

    let reconstructed = ctx.results.iter().filter(|r| r.is_reconstructed()).count();
    let positive = ctx
        .results
        .iter()
        .filter(|r| r.authority == Some(Authority::AmavPos))
        .count();
    let with_fold = ctx.results.iter().filter(|r| r.fold.is_some()).count();
    let excluded: Vec<&str> = ctx.excluded().map(|r| r.name.as_str()).collect();

    let mut out = String::new();
    out.push_str(&format!("kira-amav v{}\n", version));
    out.push_str(&format!(
        "Input: {} ({} studies, {} phenotypes, {} year columns)\n",
        table.source.display(),
        table.trends.len(),
        table.phenotype_count(),
        table.year_columns.len()
    ));
    out.push_str(&format!(
        "Phenotypes: {} reconstructed, {} via AMAV-POS, {} with fold series\n",
        reconstructed, positive, with_fold
    ));
    if excluded.is_empty() {
        out.push_str("Excluded: none\n");
    } else {
        out.push_str(&format!("Excluded: {}\n", excluded.join(", ")));
    }
    out.push_str(&format!(
        "Negative MAV policy: {}\n",
        ctx.config.negative_mav.as_str()
    ));
    if ctx.tables.is_some() {
        out.push_str(&format!("Output: {}\n", ctx.output.out_dir.display()));
    }

    Ok(out)
}
