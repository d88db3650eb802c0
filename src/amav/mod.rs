pub mod assemble;
pub mod batch;
pub mod block;
pub mod fold;
pub mod mav;
pub mod phenotype;
pub mod positive;
pub mod slope;
pub mod usage;

use std::collections::BTreeMap;
use std::fmt;
use std::ops::RangeInclusive;

/// AMAV values below this are treated as negative when deciding whether a
/// positive limb is needed.
pub const NEGATIVE_EPS: f64 = 1e-12;

#[derive(Debug, Clone, PartialEq)]
pub struct StudyTrend {
    pub phenotype: String,
    pub citation: Option<String>,
    /// 1-based line number in the source table (0 when built in memory).
    pub row: usize,
    pub points: Vec<(i32, f64)>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlopeContribution {
    pub study: usize,
    pub year: i32,
    pub slope: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MavPoint {
    pub value: f64,
    pub studies: usize,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MavSeries {
    pub points: BTreeMap<i32, MavPoint>,
}

impl MavSeries {
    pub fn get(&self, year: i32) -> Option<f64> {
        self.points.get(&year).map(|p| p.value)
    }

    pub fn last_year(&self) -> Option<i32> {
        self.points.keys().next_back().copied()
    }
}

/// Inclusive, gap-free year range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block {
    pub start: i32,
    pub end: i32,
}

impl Block {
    pub fn len(&self) -> usize {
        (self.end - self.start + 1) as usize
    }

    pub fn years(&self) -> RangeInclusive<i32> {
        self.start..=self.end
    }
}

/// Accumulated values over consecutive years starting at `start`.
#[derive(Debug, Clone, PartialEq)]
pub struct AccumSeries {
    pub start: i32,
    pub values: Vec<f64>,
}

impl AccumSeries {
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn end(&self) -> Option<i32> {
        if self.values.is_empty() {
            None
        } else {
            Some(self.start + self.values.len() as i32 - 1)
        }
    }

    pub fn get(&self, year: i32) -> Option<f64> {
        if year < self.start {
            return None;
        }
        self.values.get((year - self.start) as usize).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (i32, f64)> + '_ {
        self.values
            .iter()
            .enumerate()
            .map(|(i, &v)| (self.start + i as i32, v))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PositiveLimb {
    pub valley_year: i32,
    pub series: AccumSeries,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Authority {
    Amav,
    AmavPos,
}

impl Authority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Amav => "amav",
            Self::AmavPos => "amav_pos",
        }
    }
}

/// Fold-increase values from the anchor year onward.
///
/// `values[r]` is the fold at calendar year `anchor_year + r`, which is also
/// the value at RelYear `r`.
#[derive(Debug, Clone, PartialEq)]
pub struct FoldSeries {
    pub anchor_year: i32,
    pub anchor_value: f64,
    pub values: Vec<f64>,
}

impl FoldSeries {
    /// FOLD_YEARLY at a calendar year; `None` before the anchor.
    pub fn at_year(&self, year: i32) -> Option<f64> {
        if year < self.anchor_year {
            return None;
        }
        self.at_rel((year - self.anchor_year) as usize)
    }

    /// FOLD_RELATIVE at `rel` years past the anchor.
    pub fn at_rel(&self, rel: usize) -> Option<f64> {
        self.values.get(rel).copied()
    }

    pub fn last_year(&self) -> i32 {
        self.anchor_year + self.values.len() as i32 - 1
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NegativeMavPolicy {
    #[default]
    Clamp,
    Admit,
}

impl NegativeMavPolicy {
    pub fn apply(&self, mav: f64) -> f64 {
        match self {
            Self::Clamp => mav.max(0.0),
            Self::Admit => mav,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Clamp => "clamp",
            Self::Admit => "admit",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ReconstructConfig {
    pub negative_mav: NegativeMavPolicy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum IssueKind {
    MalformedCell,
    HeaderRow,
    MissingPhenotype,
    RejectedTrend,
    EmptyPhenotype,
    EmptyPositiveLimb,
    NoPositiveAnchor,
}

impl IssueKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MalformedCell => "malformed_cell",
            Self::HeaderRow => "header_row",
            Self::MissingPhenotype => "missing_phenotype",
            Self::RejectedTrend => "rejected_trend",
            Self::EmptyPhenotype => "empty_phenotype",
            Self::EmptyPositiveLimb => "empty_positive_limb",
            Self::NoPositiveAnchor => "no_positive_anchor",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Issue {
    pub kind: IssueKind,
    pub phenotype: Option<String>,
    pub row: Option<usize>,
    pub message: String,
}

impl Issue {
    pub fn new(kind: IssueKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            phenotype: None,
            row: None,
            message: message.into(),
        }
    }

    pub fn phenotype(mut self, name: &str) -> Self {
        self.phenotype = Some(name.to_string());
        self
    }

    pub fn row(mut self, row: usize) -> Self {
        if row > 0 {
            self.row = Some(row);
        }
        self
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.kind.as_str())?;
        if let Some(p) = &self.phenotype {
            write!(f, " {}", p)?;
        }
        if let Some(r) = self.row {
            write!(f, " (row {})", r)?;
        }
        write!(f, ": {}", self.message)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exclusion {
    NoUsableStudies,
    EmptyBlock,
}

impl Exclusion {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NoUsableStudies => "no_usable_studies",
            Self::EmptyBlock => "empty_block",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PhenotypeStatus {
    Reconstructed,
    Excluded(Exclusion),
}

#[derive(Debug, Clone, PartialEq)]
pub struct PhenotypeResult {
    pub name: String,
    pub status: PhenotypeStatus,
    pub studies_total: usize,
    pub studies_used: usize,
    pub mav: MavSeries,
    pub block: Option<Block>,
    pub amav: Option<AccumSeries>,
    pub positive: Option<PositiveLimb>,
    pub authority: Option<Authority>,
    pub fold: Option<FoldSeries>,
    pub issues: Vec<Issue>,
}

impl PhenotypeResult {
    /// The series downstream tables are built from: AMAV-POS when it took
    /// over, otherwise AMAV.
    pub fn authoritative(&self) -> Option<&AccumSeries> {
        match self.authority? {
            Authority::AmavPos => self.positive.as_ref().map(|p| &p.series),
            Authority::Amav => self.amav.as_ref(),
        }
    }

    pub fn is_reconstructed(&self) -> bool {
        matches!(self.status, PhenotypeStatus::Reconstructed)
    }
}
