use std::collections::BTreeSet;

use crate::amav::PhenotypeResult;
use crate::amav::usage::{UsageEntry, usage_log};

/// A wide numeric table: one index column plus one column per phenotype.
#[derive(Debug, Clone, PartialEq)]
pub struct WideTable {
    pub index_label: &'static str,
    pub columns: Vec<String>,
    pub rows: Vec<(i64, Vec<Option<f64>>)>,
}

impl WideTable {
    pub fn column(&self, name: &str) -> Option<Vec<(i64, Option<f64>)>> {
        let idx = self.columns.iter().position(|c| c == name)?;
        Some(self.rows.iter().map(|(k, cells)| (*k, cells[idx])).collect())
    }

    pub fn cell(&self, key: i64, name: &str) -> Option<f64> {
        let idx = self.columns.iter().position(|c| c == name)?;
        self.rows
            .iter()
            .find(|(k, _)| *k == key)
            .and_then(|(_, cells)| cells[idx])
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OutputTables {
    pub amav: WideTable,
    pub fold_yearly: WideTable,
    pub fold_relative: WideTable,
    pub usage: Vec<UsageEntry>,
}

/// Merges per-phenotype results into the four output tables.
///
/// Called once, after every phenotype has finished.
pub fn assemble(results: &[PhenotypeResult]) -> OutputTables {
    let mut sorted: Vec<&PhenotypeResult> = results.iter().collect();
    sorted.sort_by(|a, b| a.name.cmp(&b.name));

    let with_series: Vec<_> = sorted
        .iter()
        .filter_map(|&r| r.authoritative().map(|s| (r.name.as_str(), s)))
        .filter(|(_, s)| !s.is_empty())
        .collect();
    let with_fold: Vec<_> = sorted
        .iter()
        .filter_map(|&r| r.fold.as_ref().map(|f| (r.name.as_str(), f)))
        .collect();

    let mut years = BTreeSet::new();
    for (_, s) in &with_series {
        for (year, _) in s.iter() {
            years.insert(year);
        }
    }

    let amav = WideTable {
        index_label: "Year",
        columns: with_series.iter().map(|(n, _)| n.to_string()).collect(),
        rows: years
            .iter()
            .map(|&y| {
                let cells = with_series.iter().map(|(_, s)| s.get(y)).collect();
                (y as i64, cells)
            })
            .collect(),
    };

    let fold_yearly = WideTable {
        index_label: "Year",
        columns: with_fold.iter().map(|(n, _)| n.to_string()).collect(),
        rows: years
            .iter()
            .map(|&y| {
                let cells = with_fold.iter().map(|(_, f)| f.at_year(y)).collect();
                (y as i64, cells)
            })
            .collect(),
    };

    let max_len = with_fold.iter().map(|(_, f)| f.values.len()).max().unwrap_or(0);
    let fold_relative = WideTable {
        index_label: "RelYear",
        columns: with_fold.iter().map(|(n, _)| n.to_string()).collect(),
        rows: (0..max_len)
            .map(|r| {
                let cells = with_fold.iter().map(|(_, f)| f.at_rel(r)).collect();
                (r as i64, cells)
            })
            .collect(),
    };

    OutputTables {
        amav,
        fold_yearly,
        fold_relative,
        usage: usage_log(results),
    }
}
