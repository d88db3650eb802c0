use std::collections::BTreeMap;

use anyhow::Result;

use crate::amav::phenotype::reconstruct_phenotype;
use crate::amav::{PhenotypeResult, ReconstructConfig, StudyTrend};

#[cfg(feature = "mt")]
use rayon::prelude::*;

/// Groups trends by phenotype, keeping source order inside each group.
pub fn group_by_phenotype(trends: &[StudyTrend]) -> BTreeMap<&str, Vec<&StudyTrend>> {
    let mut groups: BTreeMap<&str, Vec<&StudyTrend>> = BTreeMap::new();
    for t in trends {
        groups.entry(t.phenotype.as_str()).or_default().push(t);
    }
    groups
}

/// Reconstructs every phenotype independently and returns the results in
/// phenotype-name order.
///
/// With the `mt` feature phenotypes are spread over a dedicated pool of
/// `threads` workers (0 = rayon default); results are collected in input
/// order either way.
pub fn reconstruct_all(
    trends: &[StudyTrend],
    cfg: &ReconstructConfig,
    threads: usize,
) -> Result<Vec<PhenotypeResult>> {
    let groups: Vec<(&str, Vec<&StudyTrend>)> = group_by_phenotype(trends).into_iter().collect();

    #[cfg(feature = "mt")]
    {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .map_err(|e| anyhow::anyhow!("failed to build thread pool: {}", e))?;
        let results = pool.install(|| {
            groups
                .par_iter()
                .map(|(name, group)| reconstruct_phenotype(name, group, cfg))
                .collect::<Vec<_>>()
        });
        Ok(results)
    }

    #[cfg(not(feature = "mt"))]
    {
        let _ = threads;
        Ok(groups
            .iter()
            .map(|(name, group)| reconstruct_phenotype(name, group, cfg))
            .collect())
    }
}
