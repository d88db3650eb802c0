pub mod cell;
pub mod table;

use std::path::{Path, PathBuf};

use anyhow::{Result, bail};

pub const INPUT_DIRS: [&str; 3] = ["data", "analysis/data", "."];
pub const INPUT_NAMES: [&str; 2] = ["Supplemental_Table_1.tsv", "Supplementary_Table_1.tsv"];

/// Candidate input locations under `root`, in lookup order.
pub fn input_candidates(root: &Path) -> Vec<PathBuf> {
    let mut out = Vec::with_capacity(INPUT_DIRS.len() * INPUT_NAMES.len());
    for dir in INPUT_DIRS {
        for name in INPUT_NAMES {
            out.push(root.join(dir).join(name));
        }
    }
    out
}

/// Resolves the input table: the explicit path if given, otherwise the first
/// existing conventional location under `root`.
pub fn resolve_input_path(root: &Path, explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        if !path.exists() {
            bail!("input file not found: {}", path.display());
        }
        return Ok(path.to_path_buf());
    }

    let candidates = input_candidates(root);
    if let Some(found) = candidates.iter().find(|p| p.is_file()) {
        return Ok(found.clone());
    }
    let tried: Vec<String> = INPUT_DIRS
        .iter()
        .flat_map(|d| INPUT_NAMES.iter().map(move |n| format!("{}/{}", d, n)))
        .collect();
    bail!(
        "input file not found under {}; expected one of: {}",
        root.display(),
        tried.join(", ")
    );
}
