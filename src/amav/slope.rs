use anyhow::{Result, bail};

use crate::amav::{SlopeContribution, StudyTrend};

/// Piecewise-constant yearly slopes for one study.
///
/// The slope between two consecutive observations is assigned to every year
/// in `[y_i, y_{i+1})`. A single observation yields nothing.
pub fn build_slopes(study: usize, trend: &StudyTrend) -> Result<Vec<SlopeContribution>> {
    validate_points(&trend.points)?;

    let mut out = Vec::new();
    for win in trend.points.windows(2) {
        let (y0, v0) = win[0];
        let (y1, v1) = win[1];
        let slope = (v1 - v0) / (y1 - y0) as f64;
        for year in y0..y1 {
            out.push(SlopeContribution { study, year, slope });
        }
    }
    Ok(out)
}

fn validate_points(points: &[(i32, f64)]) -> Result<()> {
    for &(year, value) in points {
        if !value.is_finite() {
            bail!("non-finite value at year {}", year);
        }
    }
    for win in points.windows(2) {
        if win[1].0 <= win[0].0 {
            bail!(
                "years not strictly increasing ({} followed by {})",
                win[0].0,
                win[1].0
            );
        }
    }
    Ok(())
}
