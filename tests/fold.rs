use kira_amav::amav::AccumSeries;
use kira_amav::amav::fold::normalize;

#[test]
fn anchor_is_first_positive_and_exactly_one() {
    let s = AccumSeries {
        start: 1995,
        values: vec![-0.25, 0.0, 0.07, 0.21, 0.14],
    };
    let fold = normalize(&s).unwrap();
    assert_eq!(fold.anchor_year, 1997);
    assert_eq!(fold.anchor_value, 0.07);
    assert_eq!(fold.values[0], 1.0);
    assert!((fold.values[1] - 3.0).abs() < 1e-12);
    assert!((fold.values[2] - 2.0).abs() < 1e-12);
    assert_eq!(fold.last_year(), 1999);
}

#[test]
fn yearly_and_relative_views_agree() {
    let s = AccumSeries {
        start: 2010,
        values: vec![0.5, 1.0, 1.5],
    };
    let fold = normalize(&s).unwrap();
    assert_eq!(fold.at_year(2009), None);
    assert_eq!(fold.at_year(2010), Some(1.0));
    assert_eq!(fold.at_year(2012), Some(3.0));
    assert_eq!(fold.at_year(2013), None);
    for r in 0..3 {
        assert_eq!(fold.at_rel(r), fold.at_year(2010 + r as i32));
    }
    assert_eq!(fold.at_rel(3), None);
}

#[test]
fn no_positive_value_means_no_fold() {
    let s = AccumSeries {
        start: 2000,
        values: vec![-0.5, 0.0, -0.1],
    };
    assert!(normalize(&s).is_none());
    let empty = AccumSeries {
        start: 2000,
        values: Vec::new(),
    };
    assert!(normalize(&empty).is_none());
}
