use crate::amav::PhenotypeResult;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsageEntry {
    pub phenotype: String,
    pub studies: usize,
}

/// One row per phenotype, excluded ones included with their (zero) count.
pub fn usage_log(results: &[PhenotypeResult]) -> Vec<UsageEntry> {
    let mut out: Vec<UsageEntry> = results
        .iter()
        .map(|r| UsageEntry {
            phenotype: r.name.clone(),
            studies: r.studies_used,
        })
        .collect();
    out.sort_by(|a, b| a.phenotype.cmp(&b.phenotype));
    out
}
