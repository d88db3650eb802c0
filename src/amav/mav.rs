use std::collections::{BTreeMap, BTreeSet};

use crate::amav::{MavPoint, MavSeries, SlopeContribution};

struct YearAcc {
    sum: f64,
    n: usize,
    studies: BTreeSet<usize>,
}

/// Unweighted mean of all slope contributions per year.
///
/// Contributions are summed in the order given, which the caller keeps as
/// study order, so the result does not depend on scheduling.
pub fn aggregate(contributions: &[SlopeContribution]) -> MavSeries {
    let mut acc: BTreeMap<i32, YearAcc> = BTreeMap::new();
    for c in contributions {
        let entry = acc.entry(c.year).or_insert_with(|| YearAcc {
            sum: 0.0,
            n: 0,
            studies: BTreeSet::new(),
        });
        entry.sum += c.slope;
        entry.n += 1;
        entry.studies.insert(c.study);
    }

    let points = acc
        .into_iter()
        .map(|(year, a)| {
            (
                year,
                MavPoint {
                    value: a.sum / a.n as f64,
                    studies: a.studies.len(),
                },
            )
        })
        .collect();
    MavSeries { points }
}
