use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result, bail};

use crate::amav::assemble::WideTable;
use crate::amav::usage::UsageEntry;
use crate::ctx::Ctx;

pub fn write_outputs(ctx: &Ctx) -> Result<()> {
    let tables = ctx.tables.as_ref().context("output tables not assembled")?;
    write_wide_table(&ctx.output.amav_path, &tables.amav)?;
    write_wide_table(&ctx.output.fold_yearly_path, &tables.fold_yearly)?;
    write_wide_table(&ctx.output.fold_relative_path, &tables.fold_relative)?;
    write_usage_log(&ctx.output.usage_path, &tables.usage)?;
    Ok(())
}

/// `<index>\t<col>...`, one row per index value, blank cells for gaps.
pub fn write_wide_table(path: &Path, table: &WideTable) -> Result<()> {
    let file = File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    let mut w = BufWriter::new(file);

    write!(w, "{}", table.index_label)?;
    for col in &table.columns {
        write!(w, "\t{}", sanitize(col))?;
    }
    writeln!(w)?;

    for (key, cells) in &table.rows {
        if cells.len() != table.columns.len() {
            bail!(
                "{} row {} has {} cells for {} columns",
                path.display(),
                key,
                cells.len(),
                table.columns.len()
            );
        }
        write!(w, "{}", key)?;
        for cell in cells {
            match cell {
                Some(v) => write!(w, "\t{}", v)?,
                None => write!(w, "\t")?,
            }
        }
        writeln!(w)?;
    }
    w.flush()?;
    Ok(())
}

pub fn write_usage_log(path: &Path, usage: &[UsageEntry]) -> Result<()> {
    let file = File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    let mut w = BufWriter::new(file);
    writeln!(w, "Phenotype\tTrends")?;
    for entry in usage {
        writeln!(w, "{}\t{}", sanitize(&entry.phenotype), entry.studies)?;
    }
    w.flush()?;
    Ok(())
}

fn sanitize(name: &str) -> String {
    name.replace(['\t', '\n', '\r'], " ")
}
