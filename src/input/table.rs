use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use tracing::info;

use crate::amav::{Issue, IssueKind, StudyTrend};
use crate::input::cell::parse_cell;
use crate::io::open_maybe_gz;

pub const DEFAULT_MIN_YEAR: i32 = 1800;
pub const DEFAULT_MAX_YEAR: i32 = 2100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearRange {
    pub min: i32,
    pub max: i32,
}

impl Default for YearRange {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN_YEAR,
            max: DEFAULT_MAX_YEAR,
        }
    }
}

impl YearRange {
    pub fn contains(&self, year: i32) -> bool {
        (self.min..=self.max).contains(&year)
    }
}

/// Strongly typed view of the input: one [`StudyTrend`] per data row.
#[derive(Debug, Clone)]
pub struct ObservationTable {
    pub source: PathBuf,
    /// Year columns in ascending order (duplicates kept).
    pub year_columns: Vec<i32>,
    pub trends: Vec<StudyTrend>,
    pub issues: Vec<Issue>,
}

impl ObservationTable {
    pub fn phenotype_count(&self) -> usize {
        let mut names: Vec<&str> = self.trends.iter().map(|t| t.phenotype.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        names.len()
    }
}

struct Header {
    phenotype: usize,
    citation: Option<usize>,
    years: Vec<(usize, i32)>,
}

pub fn read_observation_table(path: &Path, years: YearRange) -> Result<ObservationTable> {
    let mut reader = open_maybe_gz(path)
        .with_context(|| format!("failed to open input table {}", path.display()))?;
    let mut content = String::new();
    reader
        .read_to_string(&mut content)
        .with_context(|| format!("failed to read input table {}", path.display()))?;
    let mut table = parse_observation_table(&content, &path.display().to_string(), years)?;
    table.source = path.to_path_buf();
    info!(
        input = %path.display(),
        studies = table.trends.len(),
        year_columns = table.year_columns.len(),
        issues = table.issues.len(),
        "observation_table_loaded"
    );
    Ok(table)
}

/// Parses a tab-separated wide table: `Phenotype | Citation? | <year> ...`.
pub fn parse_observation_table(
    content: &str,
    source: &str,
    years: YearRange,
) -> Result<ObservationTable> {
    let mut lines = content
        .lines()
        .enumerate()
        .filter(|(_, l)| !l.trim().is_empty());
    let Some((_, header_line)) = lines.next() else {
        bail!("{}: input table is empty", source);
    };
    let header = parse_header(header_line.trim_start_matches('\u{feff}'), source, years)?;

    let mut year_columns: Vec<i32> = header.years.iter().map(|&(_, y)| y).collect();
    year_columns.sort_unstable();

    let mut trends = Vec::new();
    let mut issues = Vec::new();
    for (idx, line) in lines {
        let row = idx + 1;
        let fields: Vec<&str> = line.split('\t').collect();
        let phenotype = fields
            .get(header.phenotype)
            .map(|s| s.trim())
            .unwrap_or_default();
        if phenotype.is_empty() {
            issues.push(
                Issue::new(IssueKind::MissingPhenotype, "row has no phenotype; skipped").row(row),
            );
            continue;
        }
        if phenotype.eq_ignore_ascii_case("phenotype") {
            issues.push(Issue::new(IssueKind::HeaderRow, "repeated header row; skipped").row(row));
            continue;
        }

        let citation = header
            .citation
            .and_then(|c| fields.get(c))
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(str::to_string);

        let mut points = Vec::new();
        for &(col, year) in &header.years {
            let raw = fields.get(col).copied().unwrap_or_default();
            match parse_cell(raw) {
                Ok(Some(v)) => points.push((year, v)),
                Ok(None) => {}
                Err(err) => issues.push(
                    Issue::new(
                        IssueKind::MalformedCell,
                        format!("{} in year {}; treated as missing", err, year),
                    )
                    .phenotype(phenotype)
                    .row(row),
                ),
            }
        }
        // Stable sort: duplicate year columns stay adjacent and surface as a
        // non-monotonic trend downstream.
        points.sort_by_key(|&(y, _)| y);

        trends.push(StudyTrend {
            phenotype: phenotype.to_string(),
            citation,
            row,
            points,
        });
    }

    Ok(ObservationTable {
        source: PathBuf::from(source),
        year_columns,
        trends,
        issues,
    })
}

fn parse_header(line: &str, source: &str, years: YearRange) -> Result<Header> {
    let mut phenotype = None;
    let mut citation = None;
    let mut year_cols = Vec::new();

    for (col, raw) in line.split('\t').enumerate() {
        let name = raw.trim();
        if name.eq_ignore_ascii_case("phenotype") {
            if phenotype.is_none() {
                phenotype = Some(col);
            }
        } else if name.eq_ignore_ascii_case("citation") {
            if citation.is_none() {
                citation = Some(col);
            }
        } else if let Some(year) = parse_year_header(name) {
            if years.contains(year) {
                year_cols.push((col, year));
            }
        }
    }

    let phenotype =
        phenotype.with_context(|| format!("{}: cannot find 'Phenotype' column in header", source))?;
    if year_cols.is_empty() {
        bail!(
            "{}: no year-like columns found in the header (expected four-digit years in {}..={})",
            source,
            years.min,
            years.max
        );
    }

    Ok(Header {
        phenotype,
        citation,
        years: year_cols,
    })
}

fn parse_year_header(name: &str) -> Option<i32> {
    if name.len() == 4 && name.chars().all(|c| c.is_ascii_digit()) {
        name.parse().ok()
    } else {
        None
    }
}
