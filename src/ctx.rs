use std::path::PathBuf;

use crate::amav::assemble::OutputTables;
use crate::amav::{Issue, NegativeMavPolicy, PhenotypeResult, ReconstructConfig};
use crate::input::table::{ObservationTable, YearRange};
use crate::schema::v1::{AmavReportV1, NegativeMav};

#[derive(Debug, Clone)]
pub struct OutputPaths {
    pub out_dir: PathBuf,
    pub amav_path: PathBuf,
    pub fold_yearly_path: PathBuf,
    pub fold_relative_path: PathBuf,
    pub usage_path: PathBuf,
    pub json_path: PathBuf,
}

impl OutputPaths {
    pub fn new(out_dir: PathBuf) -> Self {
        Self {
            amav_path: out_dir.join("AMAV.tsv"),
            fold_yearly_path: out_dir.join("FOLD_YEARLY.tsv"),
            fold_relative_path: out_dir.join("FOLD_RELATIVE.tsv"),
            usage_path: out_dir.join("LOG_used_column.tsv"),
            json_path: out_dir.join("amav_report.json"),
            out_dir,
        }
    }
}

#[derive(Debug)]
pub struct Ctx {
    /// Explicit `--input`; `None` means discovery under `search_root`.
    pub input: Option<PathBuf>,
    pub search_root: PathBuf,
    pub input_path: Option<PathBuf>,
    pub years: YearRange,
    pub config: ReconstructConfig,
    pub threads: usize,
    pub write_json: bool,
    pub table: Option<ObservationTable>,
    pub results: Vec<PhenotypeResult>,
    pub tables: Option<OutputTables>,
    pub issues: Vec<Issue>,
    pub output: OutputPaths,
    pub report: AmavReportV1,
}

impl Ctx {
    pub fn new(
        input: Option<PathBuf>,
        search_root: PathBuf,
        out_dir: PathBuf,
        years: YearRange,
        negative_mav: NegativeMavPolicy,
        write_json: bool,
        tool_version: &str,
    ) -> Self {
        let report = AmavReportV1::empty(
            tool_version,
            negative_mav_schema(negative_mav),
            years.min,
            years.max,
        );
        Self {
            input,
            search_root,
            input_path: None,
            years,
            config: ReconstructConfig { negative_mav },
            threads: 0,
            write_json,
            table: None,
            results: Vec::new(),
            tables: None,
            issues: Vec::new(),
            output: OutputPaths::new(out_dir),
            report,
        }
    }

    pub fn excluded(&self) -> impl Iterator<Item = &PhenotypeResult> {
        self.results.iter().filter(|r| !r.is_reconstructed())
    }
}

pub fn negative_mav_schema(policy: NegativeMavPolicy) -> NegativeMav {
    match policy {
        NegativeMavPolicy::Clamp => NegativeMav::Clamp,
        NegativeMavPolicy::Admit => NegativeMav::Admit,
    }
}
