//! Small numeric helpers shared by the reconstruction stages.

/// Index of the smallest value, earliest on ties. NaN entries are skipped.
pub fn argmin_first(values: &[f64]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, &v) in values.iter().enumerate() {
        if v.is_nan() {
            continue;
        }
        match best {
            Some((_, b)) if v >= b => {}
            _ => best = Some((i, v)),
        }
    }
    best.map(|(i, _)| i)
}

/// Index of the first strictly positive value.
pub fn first_positive(values: &[f64]) -> Option<usize> {
    values.iter().position(|&v| v > 0.0)
}
