use crate::amav::{AccumSeries, FoldSeries};
use crate::math::stats::first_positive;

/// Normalizes a series by its first strictly positive value.
///
/// Years before the anchor are dropped. Returns `None` when no value is
/// positive.
pub fn normalize(series: &AccumSeries) -> Option<FoldSeries> {
    let idx = first_positive(&series.values)?;
    let anchor_value = series.values[idx];
    let values = series.values[idx..]
        .iter()
        .map(|&v| v / anchor_value)
        .collect();
    Some(FoldSeries {
        anchor_year: series.start + idx as i32,
        anchor_value,
        values,
    })
}
