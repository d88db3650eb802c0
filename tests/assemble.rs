use kira_amav::amav::assemble::assemble;
use kira_amav::amav::batch::reconstruct_all;
use kira_amav::amav::{ReconstructConfig, StudyTrend};

fn trend(phenotype: &str, points: &[(i32, f64)]) -> StudyTrend {
    StudyTrend {
        phenotype: phenotype.to_string(),
        citation: None,
        row: 0,
        points: points.to_vec(),
    }
}

fn sample_trends() -> Vec<StudyTrend> {
    vec![
        trend("Y", &[(1999, 0.25), (2001, 0.75)]),
        trend("X", &[(2000, 0.25), (2002, 0.75)]),
        trend("Z", &[(2000, 0.4)]),
        trend("X", &[(2001, 0.5), (2002, 1.0)]),
    ]
}

#[test]
fn amav_table_uses_union_of_years_and_blanks() {
    let results = reconstruct_all(&sample_trends(), &ReconstructConfig::default(), 1).unwrap();
    let tables = assemble(&results);

    assert_eq!(tables.amav.index_label, "Year");
    assert_eq!(tables.amav.columns, vec!["X".to_string(), "Y".to_string()]);
    let years: Vec<i64> = tables.amav.rows.iter().map(|(y, _)| *y).collect();
    assert_eq!(years, vec![1999, 2000, 2001]);

    assert_eq!(tables.amav.cell(1999, "X"), None);
    assert_eq!(tables.amav.cell(1999, "Y"), Some(0.25));
    assert_eq!(tables.amav.cell(2000, "X"), Some(0.25));
    assert_eq!(tables.amav.cell(2000, "Y"), Some(0.5));
    assert_eq!(tables.amav.cell(2001, "X"), Some(0.625));
    assert_eq!(tables.amav.cell(2001, "Y"), None);
}

#[test]
fn fold_tables_are_anchored() {
    let results = reconstruct_all(&sample_trends(), &ReconstructConfig::default(), 1).unwrap();
    let tables = assemble(&results);

    assert_eq!(tables.fold_yearly.cell(1999, "X"), None);
    assert_eq!(tables.fold_yearly.cell(2000, "X"), Some(1.0));
    assert_eq!(tables.fold_yearly.cell(2001, "X"), Some(2.5));
    assert_eq!(tables.fold_yearly.cell(1999, "Y"), Some(1.0));
    assert_eq!(tables.fold_yearly.cell(2000, "Y"), Some(2.0));

    assert_eq!(tables.fold_relative.index_label, "RelYear");
    let rel: Vec<i64> = tables.fold_relative.rows.iter().map(|(r, _)| *r).collect();
    assert_eq!(rel, vec![0, 1]);
    assert_eq!(
        tables.fold_relative.column("X").unwrap(),
        vec![(0, Some(1.0)), (1, Some(2.5))]
    );
    assert_eq!(
        tables.fold_relative.column("Y").unwrap(),
        vec![(0, Some(1.0)), (1, Some(2.0))]
    );
}

#[test]
fn excluded_phenotypes_only_appear_in_usage_log() {
    let results = reconstruct_all(&sample_trends(), &ReconstructConfig::default(), 1).unwrap();
    let tables = assemble(&results);

    assert!(tables.amav.column("Z").is_none());
    assert!(tables.fold_yearly.column("Z").is_none());
    assert!(tables.fold_relative.column("Z").is_none());

    let usage: Vec<(&str, usize)> = tables
        .usage
        .iter()
        .map(|u| (u.phenotype.as_str(), u.studies))
        .collect();
    assert_eq!(usage, vec![("X", 2), ("Y", 1), ("Z", 0)]);
}

#[test]
fn phenotype_without_anchor_is_kept_in_amav_only() {
    let trends = vec![
        trend("Down", &[(2000, 1.0), (2001, 0.5), (2002, 0.25)]),
        trend("Up", &[(2000, 0.25), (2001, 0.5)]),
    ];
    let cfg = ReconstructConfig {
        negative_mav: kira_amav::amav::NegativeMavPolicy::Admit,
    };
    let results = reconstruct_all(&trends, &cfg, 1).unwrap();
    let tables = assemble(&results);
    assert_eq!(tables.amav.columns, vec!["Down".to_string(), "Up".to_string()]);
    assert_eq!(tables.fold_yearly.columns, vec!["Up".to_string()]);
    assert_eq!(tables.fold_relative.columns, vec!["Up".to_string()]);
}
