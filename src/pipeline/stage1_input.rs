use anyhow::Result;
use tracing::{info, warn};

use crate::ctx::Ctx;
use crate::input;
use crate::input::table::read_observation_table;
use crate::pipeline::Stage;

pub struct Stage1Input;

impl Stage1Input {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage1Input {
    fn name(&self) -> &'static str {
        "stage1_input"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let path = input::resolve_input_path(&ctx.search_root, ctx.input.as_deref())?;
        info!(input = %path.display(), "input_resolved");

        let mut table = read_observation_table(&path, ctx.years)?;
        for issue in &table.issues {
            warn!(kind = issue.kind.as_str(), "{}", issue);
        }
        ctx.issues.append(&mut table.issues);

        ctx.report.input.path = path.display().to_string();
        ctx.report.input.studies = table.trends.len() as u64;
        ctx.report.input.phenotypes = table.phenotype_count() as u64;
        ctx.report.input.year_columns = table.year_columns.len() as u64;
        ctx.report.input.first_year = table.year_columns.first().copied();
        ctx.report.input.last_year = table.year_columns.last().copied();

        ctx.input_path = Some(path);
        ctx.table = Some(table);
        Ok(())
    }
}
