use kira_amav::amav::assemble::assemble;
use kira_amav::amav::batch::reconstruct_all;
use kira_amav::amav::{NegativeMavPolicy, ReconstructConfig, StudyTrend};

/// Small deterministic generator so the property checks are reproducible.
struct Lcg(u64);

impl Lcg {
    fn next(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0 >> 33
    }

    fn below(&mut self, n: u64) -> u64 {
        self.next() % n
    }

    fn unit(&mut self) -> f64 {
        self.below(1_000_000) as f64 / 1_000_000.0
    }
}

fn random_trends(seed: u64) -> Vec<StudyTrend> {
    let mut rng = Lcg(seed);
    let mut out = Vec::new();
    for p in 0..25 {
        let studies = rng.below(5);
        for _ in 0..studies {
            let mut year = 1960 + rng.below(50) as i32;
            let n = rng.below(6);
            let mut points = Vec::new();
            for _ in 0..n {
                points.push((year, rng.unit()));
                year += 1 + rng.below(6) as i32;
            }
            out.push(StudyTrend {
                phenotype: format!("P{}", p),
                citation: None,
                row: out.len() + 2,
                points,
            });
        }
    }
    out
}

fn check_seed(seed: u64, policy: NegativeMavPolicy) {
    let trends = random_trends(seed);
    let cfg = ReconstructConfig {
        negative_mav: policy,
    };
    let results = reconstruct_all(&trends, &cfg, 0).unwrap();

    for r in &results {
        let Some(block) = r.block else {
            assert_eq!(r.studies_used, 0, "{}", r.name);
            continue;
        };

        // Block: contiguous, ends at the last defined MAV year.
        assert_eq!(Some(block.end), r.mav.last_year());
        for y in block.years() {
            assert!(r.mav.get(y).is_some(), "{} gap at {}", r.name, y);
        }
        assert!(r.mav.get(block.start - 1).is_none());

        // Cumulative-sum law.
        let amav = r.amav.as_ref().unwrap();
        assert_eq!(amav.start, block.start);
        assert_eq!(amav.values.len(), block.len());
        let mut acc = 0.0;
        for (y, v) in amav.iter() {
            acc += r.mav.get(y).unwrap();
            assert!((v - acc).abs() < 1e-12);
        }

        let all_non_negative = block.years().all(|y| r.mav.get(y).unwrap() >= 0.0);
        if all_non_negative {
            assert!(r.positive.is_none(), "{}", r.name);
        }

        if let Some(limb) = &r.positive {
            assert!(limb.series.start > limb.valley_year);
            assert!(limb.valley_year >= block.start && limb.valley_year <= block.end);
            if policy == NegativeMavPolicy::Clamp {
                assert!(limb.series.values.iter().all(|&v| v >= 0.0));
            }
        }

        if let Some(fold) = &r.fold {
            assert_eq!(fold.values[0], 1.0);
            assert_eq!(fold.at_year(fold.anchor_year), Some(1.0));
            let series = r.authoritative().unwrap();
            assert_eq!(series.end(), Some(fold.last_year()));
            for (y, v) in series.iter() {
                if y < fold.anchor_year {
                    assert!(v <= 0.0);
                }
            }
        }
    }

    let tables = assemble(&results);
    if !tables.fold_relative.rows.is_empty() {
        for (i, (rel, _)) in tables.fold_relative.rows.iter().enumerate() {
            assert_eq!(*rel, i as i64);
        }
        for (col, name) in tables.fold_relative.columns.iter().enumerate() {
            assert_eq!(tables.fold_relative.rows[0].1[col], Some(1.0), "{}", name);
            // RelYear values are contiguous: no blank between defined cells.
            let defined: Vec<bool> = tables
                .fold_relative
                .rows
                .iter()
                .map(|(_, cells)| cells[col].is_some())
                .collect();
            let first_blank = defined.iter().position(|d| !d).unwrap_or(defined.len());
            assert!(defined[first_blank..].iter().all(|d| !d));
        }
    }
}

#[test]
fn invariants_hold_on_random_tables_clamp() {
    for seed in 1..30 {
        check_seed(seed, NegativeMavPolicy::Clamp);
    }
}

#[test]
fn invariants_hold_on_random_tables_admit() {
    for seed in 100..130 {
        check_seed(seed, NegativeMavPolicy::Admit);
    }
}

#[test]
fn reconstruction_is_idempotent() {
    let trends = random_trends(7);
    let cfg = ReconstructConfig::default();
    let a = assemble(&reconstruct_all(&trends, &cfg, 0).unwrap());
    let b = assemble(&reconstruct_all(&trends, &cfg, 0).unwrap());
    assert_eq!(a, b);
}
