use tracing::{debug, warn};

use crate::amav::block::{integrate, select_block};
use crate::amav::fold::normalize;
use crate::amav::mav::aggregate;
use crate::amav::positive::reconstruct_positive;
use crate::amav::slope::build_slopes;
use crate::amav::{
    Authority, Exclusion, Issue, IssueKind, MavSeries, PhenotypeResult, PhenotypeStatus,
    ReconstructConfig, StudyTrend,
};

/// Runs slope → MAV → block → AMAV → AMAV-POS → fold for one phenotype.
///
/// Never fails: every per-study or per-phenotype problem ends up in
/// `issues` and in `status`.
pub fn reconstruct_phenotype(
    name: &str,
    trends: &[&StudyTrend],
    cfg: &ReconstructConfig,
) -> PhenotypeResult {
    let mut issues = Vec::new();
    let mut contributions = Vec::new();
    let mut studies_used = 0usize;

    for (study, trend) in trends.iter().enumerate() {
        match build_slopes(study, trend) {
            Ok(slopes) => {
                if !slopes.is_empty() {
                    studies_used += 1;
                }
                contributions.extend(slopes);
            }
            Err(err) => {
                warn!(phenotype = name, row = trend.row, error = %err, "trend rejected");
                issues.push(
                    Issue::new(IssueKind::RejectedTrend, err.to_string())
                        .phenotype(name)
                        .row(trend.row),
                );
            }
        }
    }

    let mav = aggregate(&contributions);
    let mut result = PhenotypeResult {
        name: name.to_string(),
        status: PhenotypeStatus::Reconstructed,
        studies_total: trends.len(),
        studies_used,
        mav: MavSeries::default(),
        block: None,
        amav: None,
        positive: None,
        authority: None,
        fold: None,
        issues: Vec::new(),
    };

    let Some(block) = select_block(&mav) else {
        let exclusion = if studies_used == 0 {
            Exclusion::NoUsableStudies
        } else {
            Exclusion::EmptyBlock
        };
        issues.push(
            Issue::new(
                IssueKind::EmptyPhenotype,
                format!(
                    "excluded ({}): {} of {} studies usable",
                    exclusion.as_str(),
                    studies_used,
                    trends.len()
                ),
            )
            .phenotype(name),
        );
        result.status = PhenotypeStatus::Excluded(exclusion);
        result.mav = mav;
        result.issues = issues;
        return result;
    };

    let amav = integrate(&mav, block);
    let positive = reconstruct_positive(&mav, &amav, cfg.negative_mav);
    let authority = match &positive {
        Some(limb) if !limb.series.is_empty() => Authority::AmavPos,
        Some(limb) => {
            issues.push(
                Issue::new(
                    IssueKind::EmptyPositiveLimb,
                    format!(
                        "AMAV valley at {} is the last block year; keeping AMAV",
                        limb.valley_year
                    ),
                )
                .phenotype(name),
            );
            Authority::Amav
        }
        None => Authority::Amav,
    };

    result.mav = mav;
    result.block = Some(block);
    result.amav = Some(amav);
    result.positive = positive;
    result.authority = Some(authority);

    let fold = result.authoritative().and_then(normalize);
    if fold.is_none() {
        issues.push(
            Issue::new(
                IssueKind::NoPositiveAnchor,
                format!(
                    "{} has no positive value; excluded from fold outputs",
                    authority.as_str()
                ),
            )
            .phenotype(name),
        );
    }
    result.fold = fold;
    result.issues = issues;

    debug!(
        phenotype = name,
        block_start = block.start,
        block_end = block.end,
        authority = authority.as_str(),
        studies_used,
        "phenotype reconstructed"
    );
    result
}
