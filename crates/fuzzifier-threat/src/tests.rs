#[cfg(test)]
mod tests {
    use fuzzifier_core::config::FuzzyConfig;
    use fuzzifier_core::constants::*;
    use fuzzifier_core::enums::{AngleTerm, DistanceTerm, ThreatTerm};
    use fuzzifier_core::records::{AsteroidRecord, MineRecord, ShipRecord};
    use fuzzifier_core::types::{Position, Velocity};
    use fuzzifier_core::views::{AsteroidData, MineData, ShipData};
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    use crate::inference::{centroid, consequent, ThreatFis};
    use crate::scorer::{ProximitySet, ThreatMap, ThreatScorer};

    fn fis() -> ThreatFis {
        ThreatFis::new(FuzzyConfig::default())
    }

    fn ship() -> ShipData {
        ShipData::new(&ShipRecord {
            position: Position::new(0.0, 0.0),
            velocity: Velocity::ZERO,
            heading: 0.0,
            radius: 20.0,
        })
    }

    /// Asteroid `distance` units along +x, moving with the given velocity.
    fn asteroid_at(distance: f64, vx: f64, vy: f64) -> AsteroidData {
        AsteroidData::new(
            &AsteroidRecord {
                position: Position::new(distance, 0.0),
                velocity: Velocity::new(vx, vy),
                radius: 16.0,
                size: 2,
            },
            &ship(),
        )
    }

    /// Asteroid `distance` units away flying straight at the ship.
    fn incoming(distance: f64) -> AsteroidData {
        asteroid_at(distance, -100.0, 0.0)
    }

    fn peak(tri: &[f64; 3]) -> f64 {
        tri[1]
    }

    // ---- Rule base ----

    #[test]
    fn test_rule_table_is_monotone_in_distance() {
        for angle in AngleTerm::ALL {
            let close = consequent(DistanceTerm::Close, angle);
            let near = consequent(DistanceTerm::Near, angle);
            let far = consequent(DistanceTerm::Far, angle);
            assert!(close >= near, "{}: close {close:?} < near {near:?}", angle.name());
            assert!(near >= far, "{}: near {near:?} < far {far:?}", angle.name());
            assert_ne!(far, ThreatTerm::High);
        }
    }

    #[test]
    fn test_scores_at_term_peaks_are_monotone() {
        let fis = fis();
        let config = FuzzyConfig::default();
        for angle in AngleTerm::ALL {
            let a = peak(config.angle(angle));
            let scores: Vec<f64> = DistanceTerm::ALL
                .iter()
                .map(|&d| fis.evaluate(peak(config.distance(d)), a).unwrap())
                .collect();
            assert!(scores[0] >= scores[1] - 1e-12, "{}: {scores:?}", angle.name());
            assert!(scores[1] >= scores[2] - 1e-12, "{}: {scores:?}", angle.name());
        }
    }

    #[test]
    fn test_far_bucket_stays_below_cutoff() {
        let fis = fis();
        for d in (600..=1000).step_by(10) {
            for a in (0..=180).step_by(5) {
                let score = fis.evaluate(d as f64, a as f64).unwrap();
                assert!(score < THREAT_CUTOFF, "d={d} a={a} score={score}");
            }
        }
    }

    #[test]
    fn test_reference_scores() {
        let fis = fis();
        // Only "high" fires: centroid of the right shoulder over the sampled universe.
        let high = fis.evaluate(0.0, 0.0).unwrap();
        assert!((high - 0.6333).abs() < 1e-3, "high = {high}");
        // Only "medium" fires: roughly centered.
        let medium = fis.evaluate(300.0, 90.0).unwrap();
        assert!(medium.abs() < 0.01, "medium = {medium}");
        // Only "low" fires.
        let low = fis.evaluate(1000.0, 0.0).unwrap();
        assert!((low + 0.6664).abs() < 1e-3, "low = {low}");
    }

    #[test]
    fn test_evaluation_is_deterministic() {
        let fis = fis();
        let a = fis.evaluate(137.5, 42.25).unwrap();
        let b = fis.evaluate(137.5, 42.25).unwrap();
        assert_eq!(a.to_bits(), b.to_bits());

        let other = ThreatFis::new(FuzzyConfig::default());
        assert_eq!(a.to_bits(), other.evaluate(137.5, 42.25).unwrap().to_bits());
    }

    #[test]
    fn test_inputs_are_clipped() {
        let fis = fis();
        assert_eq!(fis.evaluate(5000.0, 0.0), fis.evaluate(990.0, 0.0));
        assert_eq!(fis.evaluate(-10.0, 0.0), fis.evaluate(0.0, 0.0));
        assert!(fis.evaluate(f64::NAN, 0.0).is_none());
    }

    #[test]
    fn test_no_rule_fired_gives_no_score() {
        let mut config = FuzzyConfig::default();
        // Leave a gap in the distance partition between 300 and 400.
        config.distances.close = [0.0, 0.0, 300.0];
        config.distances.near = [0.0, 0.0, 300.0];
        config.distances.far = [400.0, 1000.0, 1000.0];
        let fis = ThreatFis::new(config);
        assert!(fis.evaluate(350.0, 0.0).is_none());
    }

    #[test]
    fn test_centroid_of_flat_and_empty_curves() {
        let x = [0.0, 1.0, 2.0];
        assert_eq!(centroid(&x, &[1.0, 1.0, 1.0]), Some(1.0));
        assert_eq!(centroid(&x, &[0.0, 0.0, 0.0]), None);
    }

    // ---- Scorer ----

    #[test]
    fn test_incoming_close_asteroid_is_a_threat() {
        let scorer = ThreatScorer::new(FuzzyConfig::default());
        let asteroids = vec![incoming(80.0), incoming(900.0)];
        let report = scorer.score(&asteroids);
        assert!(report.threats.is_threat(0));
        assert!(!report.threats.is_threat(1));
        assert_eq!(report.nearest, Some((0, 80.0)));
    }

    #[test]
    fn test_zero_velocity_asteroid_scores_without_panicking() {
        let scorer = ThreatScorer::new(FuzzyConfig::default());
        let still = asteroid_at(100.0, 0.0, 0.0);
        assert_eq!(still.angle, 0.0);
        let score = scorer.score_asteroid(&still).unwrap();
        assert!(score.is_finite());
    }

    #[test]
    fn test_threats_capped_and_tie_broken_by_index() {
        let scorer = ThreatScorer::new(FuzzyConfig::default());
        let asteroids: Vec<AsteroidData> = (0..15).map(|_| incoming(50.0)).collect();
        let report = scorer.score(&asteroids);
        assert_eq!(report.threats.len(), MAX_THREATS);
        let ids: Vec<usize> = report.threats.iter().map(|(id, _)| *id).collect();
        assert_eq!(ids, (0..MAX_THREATS).collect::<Vec<_>>());
    }

    #[test]
    fn test_threat_map_ranks_by_score_then_index() {
        let map = ThreatMap::from_scores([
            (0, Some(0.55)),
            (1, Some(0.9)),
            (2, None),
            (3, Some(0.2)),
            (4, Some(0.9)),
        ]);
        let ranked: Vec<(usize, f64)> = map.iter().copied().collect();
        assert_eq!(ranked, vec![(1, 0.9), (4, 0.9), (0, 0.55)]);
        assert_eq!(map.top(), Some((1, 0.9)));
        assert_eq!(map.get(3), None);
    }

    #[test]
    fn test_proximity_set_sorted_within_threshold() {
        let set = ProximitySet::from_distances(
            [(0, 240.0), (1, 90.0), (2, 260.0), (3, 90.0), (4, 250.0)],
            PROXIMITY_RANGE,
        );
        let ids: Vec<usize> = set.iter().map(|(id, _)| *id).collect();
        assert_eq!(ids, vec![1, 3, 0, 4]);
        assert_eq!(set.nearest(), Some((1, 90.0)));
        assert_eq!(set.closest(2), &[(1, 90.0), (3, 90.0)]);
        assert_eq!(set.closest(10).len(), 4);
        assert!(set.get(2).is_none());
    }

    #[test]
    fn test_proximity_set_from_random_field() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let scorer = ThreatScorer::new(FuzzyConfig::default());
        let asteroids: Vec<AsteroidData> = (0..100)
            .map(|_| {
                let d = rng.gen_range(0.0..800.0);
                asteroid_at(d, rng.gen_range(-150.0..150.0), rng.gen_range(-150.0..150.0))
            })
            .collect();
        let report = scorer.score(&asteroids);
        let entries: Vec<(usize, f64)> = report.proximity.iter().copied().collect();
        for (id, d) in &entries {
            assert!(*d <= PROXIMITY_RANGE);
            assert_eq!(*d, asteroids[*id].distance);
        }
        for pair in entries.windows(2) {
            assert!(
                pair[0].1 < pair[1].1 || (pair[0].1 == pair[1].1 && pair[0].0 < pair[1].0),
                "unsorted: {pair:?}"
            );
        }
        let expected = asteroids
            .iter()
            .filter(|a| a.distance <= PROXIMITY_RANGE)
            .count();
        assert_eq!(entries.len(), expected);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let ship = ship();
        let asteroids: Vec<AsteroidData> = (0..300)
            .map(|_| {
                AsteroidData::new(
                    &AsteroidRecord {
                        position: Position::new(
                            rng.gen_range(-500.0..500.0),
                            rng.gen_range(-400.0..400.0),
                        ),
                        velocity: Velocity::new(
                            rng.gen_range(-200.0..200.0),
                            rng.gen_range(-200.0..200.0),
                        ),
                        radius: 16.0,
                        size: rng.gen_range(1..=4),
                    },
                    &ship,
                )
            })
            .collect();

        let parallel = ThreatScorer::new(FuzzyConfig::default()).with_parallel_threshold(0);
        let sequential =
            ThreatScorer::new(FuzzyConfig::default()).with_parallel_threshold(usize::MAX);
        assert_eq!(parallel.score(&asteroids), sequential.score(&asteroids));
    }

    #[test]
    fn test_empty_field() {
        let report = ThreatScorer::new(FuzzyConfig::default()).score(&[]);
        assert!(report.threats.is_empty());
        assert!(report.proximity.is_empty());
        assert!(report.nearest.is_none());
    }

    #[test]
    fn test_mine_scores_as_stationary_asteroid() {
        let scorer = ThreatScorer::new(FuzzyConfig::default());
        let mine = MineData::new(
            &MineRecord {
                position: Position::new(60.0, 0.0),
                remaining_time: 2.0,
            },
            &ship(),
        );
        let score = scorer.score_mine(&mine).unwrap();
        assert_eq!(score, scorer.score_asteroid(&asteroid_at(60.0, 0.0, 0.0)).unwrap());
        assert!(score >= THREAT_CUTOFF);
    }
}
