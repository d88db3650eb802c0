use kira_amav::amav::batch::{group_by_phenotype, reconstruct_all};
use kira_amav::amav::{ReconstructConfig, StudyTrend};

fn trend(phenotype: &str, row: usize, points: &[(i32, f64)]) -> StudyTrend {
    StudyTrend {
        phenotype: phenotype.to_string(),
        citation: None,
        row,
        points: points.to_vec(),
    }
}

fn many_trends() -> Vec<StudyTrend> {
    let mut out = Vec::new();
    for p in 0..40 {
        let name = format!("P{:02}", 39 - p);
        for s in 0..3 {
            let base = 1990 + s;
            out.push(trend(
                &name,
                out.len() + 2,
                &[
                    (base, 0.01 * (p + s) as f64),
                    (base + 4, 0.02 * (p + 2 * s) as f64),
                    (base + 9, 0.015 * (p + 1) as f64),
                ],
            ));
        }
    }
    out
}

#[test]
fn groups_keep_source_order() {
    let trends = vec![
        trend("B", 2, &[]),
        trend("A", 3, &[]),
        trend("B", 4, &[]),
    ];
    let groups = group_by_phenotype(&trends);
    let names: Vec<&str> = groups.keys().copied().collect();
    assert_eq!(names, vec!["A", "B"]);
    let rows: Vec<usize> = groups["B"].iter().map(|t| t.row).collect();
    assert_eq!(rows, vec![2, 4]);
}

#[test]
fn results_are_sorted_by_phenotype() {
    let results = reconstruct_all(&many_trends(), &ReconstructConfig::default(), 0).unwrap();
    assert_eq!(results.len(), 40);
    let names: Vec<&str> = results.iter().map(|r| r.name.as_str()).collect();
    let mut sorted = names.clone();
    sorted.sort();
    assert_eq!(names, sorted);
}

#[test]
fn thread_count_does_not_change_results() {
    let trends = many_trends();
    let cfg = ReconstructConfig::default();
    let one = reconstruct_all(&trends, &cfg, 1).unwrap();
    let four = reconstruct_all(&trends, &cfg, 4).unwrap();
    assert_eq!(one, four);
}
