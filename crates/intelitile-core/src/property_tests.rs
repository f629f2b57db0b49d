use proptest::prelude::*;

use crate::{
    geom::Rect,
    policy::{Placement, Policy},
    solver::free_spaces,
};

fn screen_strategy() -> impl Strategy<Value = Rect> {
    (1i32..2000, 1i32..2000).prop_map(|(w, h)| Rect::screen(w, h).expect("positive size"))
}

fn window_strategy() -> impl Strategy<Value = Rect> {
    (-500i32..2000, -500i32..2000, 1i32..1500, 1i32..1500)
        .prop_map(|(x, y, w, h)| Rect::from_origin_size(x, y, w, h).expect("positive size"))
}

proptest! {
    #[test]
    fn free_spaces_avoid_every_window(
        screen in screen_strategy(),
        windows in prop::collection::vec(window_strategy(), 0..6),
    ) {
        for space in free_spaces(screen, &windows) {
            for window in &windows {
                prop_assert!(!space.intersects(window), "{} overlaps {}", space, window);
            }
        }
    }

    #[test]
    fn free_spaces_stay_within_screen(
        screen in screen_strategy(),
        windows in prop::collection::vec(window_strategy(), 0..6),
    ) {
        for space in free_spaces(screen, &windows) {
            prop_assert!(space.left() >= screen.left() && space.right() <= screen.right());
            prop_assert!(space.top() >= screen.top() && space.bottom() <= screen.bottom());
            prop_assert!(space.area() > 0);
        }
    }

    #[test]
    fn solver_and_policies_are_deterministic(
        screen in screen_strategy(),
        windows in prop::collection::vec(window_strategy(), 0..6),
        target in window_strategy(),
    ) {
        let first = free_spaces(screen, &windows);
        prop_assert_eq!(&first, &free_spaces(screen, &windows));
        for policy in [Policy::Place, Policy::TallPlace, Policy::WidePlace] {
            prop_assert_eq!(policy.apply(&first, target), policy.apply(&first, target));
        }
    }

    #[test]
    fn place_lands_inside_a_free_space(
        screen in screen_strategy(),
        windows in prop::collection::vec(window_strategy(), 0..6),
    ) {
        let spaces = free_spaces(screen, &windows);
        let target = screen;
        match Policy::Place.apply(&spaces, target) {
            Placement::Found(cmd) => {
                let chosen = Rect::from_origin_size(cmd.x, cmd.y, cmd.width, cmd.height)
                    .expect("placement has positive size");
                prop_assert!(spaces.contains(&chosen));
                prop_assert!(spaces.iter().all(|s| s.area() <= chosen.area()));
            }
            Placement::NoPlacement => prop_assert!(spaces.is_empty()),
        }
    }
}
