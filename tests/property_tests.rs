use glam::Vec2;
use proptest::prelude::*;
use star_skipper::consts::*;
use star_skipper::sim::{GameState, Player, Star, TickInput, star_points, tick};

proptest! {
    /// Property: the player never leaves the window, whatever keys are held
    #[test]
    fn player_stays_in_bounds(moves in prop::collection::vec((any::<bool>(), any::<bool>()), 0..600)) {
        let mut player = Player::default();
        for (left, right) in moves {
            player.step(left, right);
            prop_assert!(player.rect.x >= 0.0);
            prop_assert!(player.rect.x <= WINDOW_WIDTH - PLAYER_WIDTH);
        }
    }

    /// Property: outlines have 2n vertices alternating between r and r/2
    #[test]
    fn star_outline_shape(
        cx in -1000.0f32..1000.0,
        cy in -1000.0f32..1000.0,
        radius in 1.0f32..100.0,
        n in 3usize..12,
    ) {
        let center = Vec2::new(cx, cy);
        let points = star_points(center, radius, n);
        prop_assert_eq!(points.len(), 2 * n);
        for (i, p) in points.iter().enumerate() {
            let expected = if i % 2 == 0 { radius } else { radius / 2.0 };
            prop_assert!((p.distance(center) - expected).abs() < 1e-2);
        }
    }

    /// Property: the outline is mirror-symmetric about the horizontal axis
    #[test]
    fn star_outline_mirror_symmetric(radius in 1.0f32..100.0, n in 3usize..12) {
        let points = star_points(Vec2::ZERO, radius, n);
        let len = points.len();
        for i in 1..len {
            let a = points[i];
            let b = points[len - i];
            prop_assert!((a.x - b.x).abs() < 1e-3);
            prop_assert!((a.y + b.y).abs() < 1e-3);
        }
    }

    /// Property: off-screen exactly when the lowest vertex is past the bottom edge
    #[test]
    fn off_screen_matches_lowest_point(cy in 700.0f32..900.0) {
        let star = Star::new(Vec2::new(500.0, cy), STAR_RADIUS, 3.0);
        let lowest = star.points.iter().map(|p| p.y).fold(f32::MIN, f32::max);
        prop_assert_eq!(star.is_off_screen(), lowest > WINDOW_HEIGHT);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Property: the level index moves exactly on the ticks that empty the field
    #[test]
    fn level_advances_exactly_on_empty_field(seed in any::<u64>()) {
        let mut state = GameState::new(seed);
        let input = TickInput::default();
        for _ in 0..3000 {
            if state.phase.is_over() {
                break;
            }
            let before = state.level_index;

            // Same tick on a copy with no later levels, so nothing refills the field
            let mut probe = state.clone();
            probe.levels.truncate(probe.level_index + 1);
            tick(&mut probe, &input, SIM_DT);
            let field_emptied = probe.stars.is_empty();

            tick(&mut state, &input, SIM_DT);
            prop_assert_eq!(state.level_index != before, field_emptied);
            if field_emptied {
                prop_assert_eq!(state.level_index, before + 1);
            }
        }
    }
}
