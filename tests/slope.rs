use kira_amav::amav::StudyTrend;
use kira_amav::amav::slope::build_slopes;

fn trend(points: &[(i32, f64)]) -> StudyTrend {
    StudyTrend {
        phenotype: "X".to_string(),
        citation: None,
        row: 0,
        points: points.to_vec(),
    }
}

#[test]
fn slope_covers_half_open_interval() {
    let t = trend(&[(2000, 0.10), (2002, 0.14)]);
    let slopes = build_slopes(0, &t).unwrap();
    let years: Vec<i32> = slopes.iter().map(|s| s.year).collect();
    assert_eq!(years, vec![2000, 2001]);
    for s in &slopes {
        assert!((s.slope - 0.02).abs() < 1e-12);
        assert_eq!(s.study, 0);
    }
}

#[test]
fn one_slope_per_covered_year_across_segments() {
    let t = trend(&[(1990, 0.5), (1991, 0.75), (1994, 0.0)]);
    let slopes = build_slopes(3, &t).unwrap();
    let got: Vec<(i32, f64)> = slopes.iter().map(|s| (s.year, s.slope)).collect();
    assert_eq!(
        got,
        vec![(1990, 0.25), (1991, -0.25), (1992, -0.25), (1993, -0.25)]
    );
    assert!(slopes.iter().all(|s| s.study == 3));
}

#[test]
fn single_point_contributes_nothing() {
    let t = trend(&[(2005, 0.3)]);
    assert!(build_slopes(0, &t).unwrap().is_empty());
    let empty = trend(&[]);
    assert!(build_slopes(0, &empty).unwrap().is_empty());
}

#[test]
fn non_monotonic_trend_is_rejected() {
    let t = trend(&[(2001, 0.1), (2000, 0.2)]);
    let err = build_slopes(0, &t).unwrap_err();
    assert!(err.to_string().contains("strictly increasing"));

    let dup = trend(&[(2000, 0.1), (2000, 0.2)]);
    assert!(build_slopes(0, &dup).is_err());
}

#[test]
fn non_finite_value_is_rejected() {
    let t = trend(&[(2000, 0.1), (2001, f64::NAN)]);
    let err = build_slopes(0, &t).unwrap_err();
    assert!(err.to_string().contains("non-finite"));
}
