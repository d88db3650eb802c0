use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NegativeMav {
    Clamp,
    Admit,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputMeta {
    pub path: String,
    pub studies: u64,
    pub phenotypes: u64,
    pub year_columns: u64,
    pub first_year: Option<i32>,
    pub last_year: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    pub negative_mav: NegativeMav,
    pub min_year: i32,
    pub max_year: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MavEntry {
    pub year: i32,
    pub value: f64,
    pub studies: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YearValue {
    pub year: i32,
    pub value: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PositiveLimb {
    pub valley_year: i32,
    pub values: Vec<YearValue>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhenotypeReport {
    pub name: String,
    /// `reconstructed` or `excluded`.
    pub status: String,
    pub exclusion: Option<String>,
    pub studies_total: u64,
    pub studies_used: u64,
    pub block_start: Option<i32>,
    pub block_end: Option<i32>,
    pub mav: Vec<MavEntry>,
    pub amav: Vec<YearValue>,
    pub amav_pos: Option<PositiveLimb>,
    pub authoritative: Option<String>,
    pub anchor_year: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssueRecord {
    pub kind: String,
    pub phenotype: Option<String>,
    pub row: Option<u64>,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmavReportV1 {
    pub tool: String,
    pub version: String,
    pub schema_version: String,
    pub input: InputMeta,
    pub config: RunConfig,
    pub phenotypes: Vec<PhenotypeReport>,
    pub issues: Vec<IssueRecord>,
}

impl AmavReportV1 {
    pub fn empty(tool_version: &str, negative_mav: NegativeMav, min_year: i32, max_year: i32) -> Self {
        Self {
            tool: "kira-amav".to_string(),
            version: tool_version.to_string(),
            schema_version: "v1".to_string(),
            input: InputMeta {
                path: String::new(),
                studies: 0,
                phenotypes: 0,
                year_columns: 0,
                first_year: None,
                last_year: None,
            },
            config: RunConfig {
                negative_mav,
                min_year,
                max_year,
            },
            phenotypes: Vec::new(),
            issues: Vec::new(),
        }
    }
}
