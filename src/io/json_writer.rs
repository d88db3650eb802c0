use std::path::Path;

use anyhow::{Context, Result};

use crate::amav::{AccumSeries, Issue, PhenotypeResult, PhenotypeStatus};
use crate::ctx::{Ctx, negative_mav_schema};
use crate::schema::v1::{
    AmavReportV1, InputMeta, IssueRecord, MavEntry, PhenotypeReport, PositiveLimb, RunConfig,
    YearValue,
};

pub fn build_report(ctx: &Ctx) -> Result<AmavReportV1> {
    let table = ctx.table.as_ref().context("observation table missing")?;
    let input = InputMeta {
        path: table.source.display().to_string(),
        studies: table.trends.len() as u64,
        phenotypes: table.phenotype_count() as u64,
        year_columns: table.year_columns.len() as u64,
        first_year: table.year_columns.first().copied(),
        last_year: table.year_columns.last().copied(),
    };

    let mut phenotypes: Vec<PhenotypeReport> = ctx.results.iter().map(phenotype_report).collect();
    phenotypes.sort_by(|a, b| a.name.cmp(&b.name));

    Ok(AmavReportV1 {
        tool: "kira-amav".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        schema_version: "v1".to_string(),
        input,
        config: RunConfig {
            negative_mav: negative_mav_schema(ctx.config.negative_mav),
            min_year: ctx.years.min,
            max_year: ctx.years.max,
        },
        phenotypes,
        issues: ctx.issues.iter().map(issue_record).collect(),
    })
}

pub fn write_json(path: &Path, report: &AmavReportV1) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    let writer = std::io::BufWriter::new(file);
    serde_json::to_writer_pretty(writer, report)?;
    Ok(())
}

fn phenotype_report(r: &PhenotypeResult) -> PhenotypeReport {
    let (status, exclusion) = match &r.status {
        PhenotypeStatus::Reconstructed => ("reconstructed", None),
        PhenotypeStatus::Excluded(e) => ("excluded", Some(e.as_str().to_string())),
    };
    PhenotypeReport {
        name: r.name.clone(),
        status: status.to_string(),
        exclusion,
        studies_total: r.studies_total as u64,
        studies_used: r.studies_used as u64,
        block_start: r.block.map(|b| b.start),
        block_end: r.block.map(|b| b.end),
        mav: r
            .mav
            .points
            .iter()
            .map(|(&year, p)| MavEntry {
                year,
                value: p.value,
                studies: p.studies as u64,
            })
            .collect(),
        amav: r.amav.as_ref().map(year_values).unwrap_or_default(),
        amav_pos: r.positive.as_ref().map(|p| PositiveLimb {
            valley_year: p.valley_year,
            values: year_values(&p.series),
        }),
        authoritative: r.authority.map(|a| a.as_str().to_string()),
        anchor_year: r.fold.as_ref().map(|f| f.anchor_year),
    }
}

fn year_values(series: &AccumSeries) -> Vec<YearValue> {
    series
        .iter()
        .map(|(year, value)| YearValue { year, value })
        .collect()
}

fn issue_record(issue: &Issue) -> IssueRecord {
    IssueRecord {
        kind: issue.kind.as_str().to_string(),
        phenotype: issue.phenotype.clone(),
        row: issue.row.map(|r| r as u64),
        message: issue.message.clone(),
    }
}
