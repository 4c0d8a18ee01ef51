#[cfg(test)]
mod tests {
    use crate::config::{Breakpoint, ConfigError, FuzzyConfig, TermRef};
    use crate::control::ControlOutput;
    use crate::enums::*;
    use crate::records::{AsteroidRecord, GameFrame, MineRecord, RecordError, ShipRecord};
    use crate::types::{heading_error, normalize_heading, Position, Velocity};
    use crate::views::{AsteroidData, FrameView, MineData, ShipData};

    fn ship_at(x: f64, y: f64, heading: f64) -> ShipRecord {
        ShipRecord {
            position: Position::new(x, y),
            velocity: Velocity::ZERO,
            heading,
            radius: 20.0,
        }
    }

    fn asteroid(x: f64, y: f64, vx: f64, vy: f64) -> AsteroidRecord {
        AsteroidRecord {
            position: Position::new(x, y),
            velocity: Velocity::new(vx, vy),
            radius: 32.0,
            size: 4,
        }
    }

    // ---- Records ----

    #[test]
    fn test_frame_parses_array_vectors() {
        let json = r#"{
            "ship": { "position": [500, 500], "velocity": [0, 0], "heading": 180, "radius": 20 },
            "asteroids": [
                { "position": [700, 501], "velocity": [-100, 0], "radius": 32, "size": 4 }
            ]
        }"#;
        let frame: GameFrame = serde_json::from_str(json).unwrap();
        assert_eq!(frame.ship.position, Position::new(500.0, 500.0));
        assert_eq!(frame.asteroids[0].velocity, Velocity::new(-100.0, 0.0));
        assert!(frame.mines.is_empty());
        assert!(frame.validate().is_ok());
    }

    #[test]
    fn test_frame_missing_ship_field_rejected() {
        let json = r#"{ "ship": { "position": [0, 0], "velocity": [0, 0], "radius": 20 } }"#;
        let err = serde_json::from_str::<GameFrame>(json).unwrap_err();
        assert!(err.to_string().contains("heading"), "got: {err}");
    }

    #[test]
    fn test_frame_validation_reports_bad_field() {
        let frame = GameFrame {
            ship: ship_at(0.0, 0.0, 0.0),
            asteroids: vec![asteroid(10.0, 10.0, 0.0, 0.0), asteroid(f64::NAN, 0.0, 0.0, 0.0)],
            mines: vec![],
        };
        assert_eq!(
            frame.validate(),
            Err(RecordError::NonFinite {
                record: "asteroid",
                index: 1,
                field: "position.x",
            })
        );

        let mut ship = ship_at(0.0, 0.0, 0.0);
        ship.radius = -1.0;
        assert!(matches!(
            ship.validate(),
            Err(RecordError::NegativeRadius { .. })
        ));
    }

    #[test]
    fn test_frame_serde_roundtrip() {
        let frame = GameFrame {
            ship: ship_at(1.0, 2.0, 90.0),
            asteroids: vec![asteroid(3.0, 4.0, 5.0, 6.0)],
            mines: vec![MineRecord {
                position: Position::new(7.0, 8.0),
                remaining_time: 2.5,
            }],
        };
        let json = serde_json::to_string(&frame).unwrap();
        assert!(json.contains("[3.0,4.0]"));
        let back: GameFrame = serde_json::from_str(&json).unwrap();
        assert_eq!(frame, back);
    }

    // ---- Geometry helpers ----

    #[test]
    fn test_heading_error_across_seam() {
        assert!((heading_error(5.0, 355.0) - 10.0).abs() < 1e-9);
        assert!((heading_error(355.0, 5.0) + 10.0).abs() < 1e-9);
        assert!((heading_error(90.0, 0.0) - 90.0).abs() < 1e-9);
        assert!((heading_error(0.0, 180.0) + 180.0).abs() < 1e-9);
        assert_eq!(normalize_heading(-90.0), 270.0);
        assert_eq!(normalize_heading(720.0), 0.0);
    }

    #[test]
    fn test_bearing_and_direction() {
        let origin = Position::new(0.0, 0.0);
        assert!((origin.bearing_to(&Position::new(0.0, 10.0)).unwrap() - 90.0).abs() < 1e-9);
        assert!((origin.bearing_to(&Position::new(-10.0, 0.0)).unwrap() - 180.0).abs() < 1e-9);
        assert!((origin.bearing_to(&Position::new(0.0, -10.0)).unwrap() - 270.0).abs() < 1e-9);
        assert_eq!(origin.bearing_to(&origin), None);
        let v = Velocity::from_polar(100.0, -180.0);
        assert!((v.x + 100.0).abs() < 1e-9 && v.y.abs() < 1e-9);
    }

    #[test]
    fn test_asteroid_angle_head_on_and_away() {
        let ship = ShipData::new(&ship_at(0.0, 0.0, 0.0));
        let incoming = AsteroidData::new(&asteroid(100.0, 0.0, -50.0, 0.0), &ship);
        assert!(incoming.angle.abs() < 1e-9);
        assert!((incoming.distance - 100.0).abs() < 1e-9);

        let leaving = AsteroidData::new(&asteroid(100.0, 0.0, 50.0, 0.0), &ship);
        assert!((leaving.angle - 180.0).abs() < 1e-9);

        let crossing = AsteroidData::new(&asteroid(100.0, 0.0, 0.0, 50.0), &ship);
        assert!((crossing.angle - 90.0).abs() < 1e-9);
    }

    #[test]
    fn test_asteroid_angle_zero_velocity_is_defined() {
        let ship = ShipData::new(&ship_at(0.0, 0.0, 0.0));
        let still = AsteroidData::new(&asteroid(100.0, 50.0, 0.0, 0.0), &ship);
        assert_eq!(still.angle, 0.0);

        let on_top = AsteroidData::new(&asteroid(0.0, 0.0, 10.0, 0.0), &ship);
        assert_eq!(on_top.angle, 0.0);
        assert_eq!(on_top.distance, 0.0);
    }

    #[test]
    fn test_mine_mask_is_stationary() {
        let ship = ShipData::new(&ship_at(0.0, 0.0, 0.0));
        let mine = MineData::new(
            &MineRecord {
                position: Position::new(30.0, 40.0),
                remaining_time: 1.0,
            },
            &ship,
        );
        assert!((mine.distance - 50.0).abs() < 1e-9);
        let mask = mine.mask();
        assert!(mask.velocity.is_zero());
        assert_eq!(mask.angle, 0.0);
        assert_eq!(mask.distance, mine.distance);
    }

    #[test]
    fn test_frame_view_nearest_mine() {
        let frame = GameFrame {
            ship: ship_at(0.0, 0.0, 370.0),
            asteroids: vec![asteroid(1.0, 1.0, 1.0, 1.0)],
            mines: vec![
                MineRecord {
                    position: Position::new(100.0, 0.0),
                    remaining_time: 3.0,
                },
                MineRecord {
                    position: Position::new(10.0, 0.0),
                    remaining_time: 1.0,
                },
            ],
        };
        let view = FrameView::new(&frame);
        assert!((view.ship.heading - 10.0).abs() < 1e-9);
        assert_eq!(view.asteroids.len(), 1);
        assert_eq!(view.nearest_mine().unwrap().remaining_time, 1.0);
    }

    // ---- Enums ----

    #[test]
    fn test_facing_buckets() {
        assert_eq!(Facing::from_heading(0.0), Facing::Right);
        assert_eq!(Facing::from_heading(44.9), Facing::Right);
        assert_eq!(Facing::from_heading(45.0), Facing::Up);
        assert_eq!(Facing::from_heading(180.0), Facing::Left);
        assert_eq!(Facing::from_heading(270.0), Facing::Down);
        assert_eq!(Facing::from_heading(315.0), Facing::Right);
        assert_eq!(Facing::from_heading(360.0), Facing::Right);
    }

    #[test]
    fn test_quadrant_and_flip_table() {
        assert_eq!(Quadrant::of(1.0, 1.0), Quadrant::First);
        assert_eq!(Quadrant::of(-1.0, 1.0), Quadrant::Second);
        assert_eq!(Quadrant::of(-1.0, -1.0), Quadrant::Third);
        assert_eq!(Quadrant::of(1.0, -1.0), Quadrant::Fourth);
        assert_eq!(Quadrant::of(1.0, 0.0), Quadrant::Fourth);
        assert_eq!(Quadrant::of(0.0, 0.0), Quadrant::Third);

        assert!(Facing::Up.flips(Quadrant::Third));
        assert!(Facing::Up.flips(Quadrant::Fourth));
        assert!(!Facing::Up.flips(Quadrant::First));
        assert!(Facing::Down.flips(Quadrant::Second));
        assert!(Facing::Left.flips(Quadrant::Fourth));
        assert!(!Facing::Left.flips(Quadrant::Second));
        assert!(Facing::Right.flips(Quadrant::Third));
        assert!(!Facing::Right.flips(Quadrant::Fourth));
    }

    #[test]
    fn test_action_kind_serde() {
        for v in [ActionKind::Shoot, ActionKind::Dodge] {
            let json = serde_json::to_string(&v).unwrap();
            let back: ActionKind = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    // ---- Config ----

    #[test]
    fn test_default_config_is_valid() {
        assert!(FuzzyConfig::default().validate().is_ok());
        assert_eq!(FuzzyConfig::breakpoints().len(), 18);
    }

    #[test]
    fn test_shipped_config_matches_default() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/../../config/threats_config.json");
        let config = FuzzyConfig::load(path).unwrap();
        assert_eq!(config, FuzzyConfig::default());
    }

    #[test]
    fn test_config_missing_term_names_it() {
        let json = r#"{
            "distances": { "close": [0, 0, 300], "far": [400, 1000, 1000] },
            "angle": { "acute": [0, 0, 90], "right": [45, 90, 135], "obtuse": [90, 180, 180] }
        }"#;
        let err = FuzzyConfig::from_json(json).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().contains("near"), "got: {err}");
    }

    #[test]
    fn test_config_wrong_arity_rejected() {
        let json = r#"{
            "distances": { "close": [0, 300], "near": [100, 300, 600], "far": [400, 1000, 1000] },
            "angle": { "acute": [0, 0, 90], "right": [45, 90, 135], "obtuse": [90, 180, 180] }
        }"#;
        assert!(matches!(
            FuzzyConfig::from_json(json),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_config_unordered_triangle_rejected() {
        let mut config = FuzzyConfig::default();
        config.angle.right = [90.0, 45.0, 135.0];
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("angle.right"), "got: {err}");
    }

    #[test]
    fn test_config_missing_file_is_io_error() {
        let err = FuzzyConfig::load("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_config_adjust_keeps_order() {
        let mut config = FuzzyConfig::default();
        let bp = Breakpoint {
            term: TermRef::Distance(DistanceTerm::Near),
            index: 1,
        };
        assert_eq!(config.adjust(bp, 5.0).unwrap(), 305.0);
        assert_eq!(config.distances.near, [100.0, 305.0, 600.0]);

        // Moving the peak past the right foot is refused and leaves the config alone.
        assert!(config.adjust(bp, 1000.0).is_err());
        assert_eq!(config.distances.near, [100.0, 305.0, 600.0]);

        let bad = Breakpoint {
            term: TermRef::Angle(AngleTerm::Acute),
            index: 3,
        };
        assert!(matches!(
            config.adjust(bad, 1.0),
            Err(ConfigError::BreakpointIndex(3))
        ));
    }

    #[test]
    fn test_config_save_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("threats_config.json");
        let mut config = FuzzyConfig::default();
        config.distances.far = [450.0, 1000.0, 1000.0];
        config.save(&path).unwrap();
        assert_eq!(FuzzyConfig::load(&path).unwrap(), config);
    }

    // ---- Control output ----

    #[test]
    fn test_control_output_sanitized() {
        let out = ControlOutput {
            thrust: f64::NAN,
            turn_rate: 1e9,
            fire: true,
            drop_mine: false,
        }
        .sanitized();
        assert_eq!(out.thrust, 0.0);
        assert_eq!(out.turn_rate, 180.0);
        assert!(out.fire);

        let out = ControlOutput {
            thrust: f64::NEG_INFINITY,
            turn_rate: f64::NAN,
            ..Default::default()
        }
        .sanitized();
        assert_eq!(out.as_tuple(), (-480.0, 0.0, false, false));
    }
}
