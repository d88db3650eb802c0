use crate::amav::{AccumSeries, MavSeries, NEGATIVE_EPS, NegativeMavPolicy, PositiveLimb};
use crate::math::stats::argmin_first;

pub fn needs_positive_limb(amav: &AccumSeries) -> bool {
    amav.values.iter().any(|&v| v < -NEGATIVE_EPS)
}

/// Re-accumulates MAV starting the year after the AMAV valley.
///
/// Returns `None` when AMAV never goes negative. The returned series is empty
/// when the valley is the last year of the block.
pub fn reconstruct_positive(
    mav: &MavSeries,
    amav: &AccumSeries,
    policy: NegativeMavPolicy,
) -> Option<PositiveLimb> {
    if !needs_positive_limb(amav) {
        return None;
    }
    let valley_idx = argmin_first(&amav.values)?;
    let valley_year = amav.start + valley_idx as i32;

    let mut values = Vec::with_capacity(amav.values.len() - valley_idx - 1);
    let mut run = 0.0;
    for (year, _) in amav.iter().skip(valley_idx + 1) {
        run += policy.apply(mav.get(year).unwrap_or(0.0));
        values.push(run);
    }

    Some(PositiveLimb {
        valley_year,
        series: AccumSeries {
            start: valley_year + 1,
            values,
        },
    })
}
