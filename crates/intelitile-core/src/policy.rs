//! Placement policies: choose one free space and derive the target geometry.

use std::fmt::{Display, Formatter, Result as FmtResult};

use tracing::debug;

use crate::{directive::Directive, geom::Rect};

/// Final geometry requested for the target window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlacementCommand {
    /// New width in pixels.
    pub width: i32,
    /// New height in pixels.
    pub height: i32,
    /// New left edge.
    pub x: i32,
    /// New top edge.
    pub y: i32,
}

/// Result of running a policy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Placement {
    /// A qualifying free space was found.
    Found(PlacementCommand),
    /// No free space qualified; the target window must be left alone.
    NoPlacement,
}

impl Placement {
    /// The window manager directive for this outcome, if any.
    pub fn directive(self) -> Option<Directive> {
        match self {
            Self::Found(cmd) => Some(Directive::Resize(cmd)),
            Self::NoPlacement => None,
        }
    }
}

/// Selection strategy applied to the solver output.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Policy {
    /// Fill the largest free space by area.
    Place,
    /// Keep the target's width; take the tallest space wide enough for it.
    TallPlace,
    /// Keep the target's height; take the widest space tall enough for it.
    WidePlace,
}

impl Policy {
    /// Run this policy over `spaces` for the window currently at `target`.
    pub fn apply(self, spaces: &[Rect], target: Rect) -> Placement {
        let placement = match self {
            Self::Place => place(spaces),
            Self::TallPlace => tall_place(spaces, target),
            Self::WidePlace => wide_place(spaces, target),
        };
        debug!(policy = self.name(), %target, ?placement, "policy applied");
        placement
    }

    /// Command-line spelling of the policy.
    pub fn name(self) -> &'static str {
        match self {
            Self::Place => "place",
            Self::TallPlace => "tallPlace",
            Self::WidePlace => "widePlace",
        }
    }
}

impl Display for Policy {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.name())
    }
}

/// First element with the strictly greatest key; later ties lose.
fn first_max_by_key<I, K>(spaces: I, key: impl Fn(&Rect) -> K) -> Option<Rect>
where
    I: IntoIterator<Item = Rect>,
    K: PartialOrd,
{
    spaces
        .into_iter()
        .reduce(|best, r| if key(&r) > key(&best) { r } else { best })
}

/// Resize into the largest free space, taking its full geometry.
pub fn place(spaces: &[Rect]) -> Placement {
    match first_max_by_key(spaces.iter().copied(), Rect::area) {
        Some(best) => Placement::Found(PlacementCommand {
            width: best.width(),
            height: best.height(),
            x: best.left(),
            y: best.top(),
        }),
        None => Placement::NoPlacement,
    }
}

/// Keep the target's width and stretch it into the tallest space that can
/// hold that width. Equal heights resolve to the leftmost space.
pub fn tall_place(spaces: &[Rect], target: Rect) -> Placement {
    let mut wide_enough: Vec<Rect> = spaces
        .iter()
        .copied()
        .filter(|r| r.width() >= target.width())
        .collect();
    wide_enough.sort_by_key(Rect::left);
    match first_max_by_key(wide_enough, Rect::height) {
        Some(best) => Placement::Found(PlacementCommand {
            width: target.width(),
            height: best.height(),
            x: best.left(),
            y: best.top(),
        }),
        None => Placement::NoPlacement,
    }
}

/// Keep the target's height and stretch it into the widest space that can
/// hold that height. Equal widths resolve to the topmost space.
pub fn wide_place(spaces: &[Rect], target: Rect) -> Placement {
    let mut tall_enough: Vec<Rect> = spaces
        .iter()
        .copied()
        .filter(|r| r.height() >= target.height())
        .collect();
    tall_enough.sort_by_key(Rect::top);
    match first_max_by_key(tall_enough, Rect::width) {
        Some(best) => Placement::Found(PlacementCommand {
            width: best.width(),
            height: target.height(),
            x: best.left(),
            y: best.top(),
        }),
        None => Placement::NoPlacement,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{geom::Point, solver::free_spaces};

    fn rect(x0: i32, y0: i32, x1: i32, y1: i32) -> Rect {
        Rect::new(Point::new(x0, y0), Point::new(x1, y1)).expect("valid rect")
    }

    fn cmd(width: i32, height: i32, x: i32, y: i32) -> Placement {
        Placement::Found(PlacementCommand {
            width,
            height,
            x,
            y,
        })
    }

    #[test]
    fn place_fills_free_right_half() {
        let spaces = free_spaces(rect(0, 0, 100, 100), &[rect(0, 0, 50, 100)]);
        let target = rect(0, 0, 10, 10);
        assert_eq!(Policy::Place.apply(&spaces, target), cmd(50, 100, 50, 0));
    }

    #[test]
    fn tall_place_keeps_width_below_top_strip() {
        let spaces = free_spaces(rect(0, 0, 100, 100), &[rect(0, 0, 100, 20)]);
        let target = rect(0, 0, 30, 10);
        assert_eq!(Policy::TallPlace.apply(&spaces, target), cmd(30, 80, 0, 20));
    }

    #[test]
    fn wide_place_keeps_height_beside_left_strip() {
        let spaces = free_spaces(rect(0, 0, 100, 100), &[rect(0, 0, 20, 100)]);
        let target = rect(0, 0, 10, 40);
        assert_eq!(Policy::WidePlace.apply(&spaces, target), cmd(80, 40, 20, 0));
    }

    #[test]
    fn fully_covered_screen_has_no_placement() {
        let screen = rect(0, 0, 10, 10);
        let spaces = free_spaces(screen, &[screen]);
        let target = rect(0, 0, 5, 5);
        for policy in [Policy::Place, Policy::TallPlace, Policy::WidePlace] {
            assert_eq!(policy.apply(&spaces, target), Placement::NoPlacement);
        }
        assert!(Placement::NoPlacement.directive().is_none());
    }

    #[test]
    fn filters_reject_spaces_too_small_for_target() {
        let spaces = [rect(0, 0, 20, 100), rect(50, 0, 70, 100)];
        let target = rect(0, 0, 30, 30);
        assert_eq!(tall_place(&spaces, target), Placement::NoPlacement);

        let spaces = [rect(0, 0, 100, 20)];
        assert_eq!(wide_place(&spaces, target), Placement::NoPlacement);
    }

    #[test]
    fn place_prefers_first_of_equal_areas() {
        let spaces = [rect(50, 0, 100, 100), rect(0, 0, 50, 100)];
        assert_eq!(place(&spaces), cmd(50, 100, 50, 0));
    }

    #[test]
    fn tall_place_prefers_leftmost_of_equal_heights() {
        // Solver order puts the right-hand space first; the sort must win.
        let spaces = [rect(50, 0, 100, 100), rect(0, 0, 40, 100)];
        let target = rect(0, 0, 20, 20);
        assert_eq!(tall_place(&spaces, target), cmd(20, 100, 0, 0));
    }

    #[test]
    fn wide_place_prefers_topmost_of_equal_widths() {
        let spaces = [rect(0, 60, 100, 100), rect(0, 0, 100, 40)];
        let target = rect(0, 0, 20, 30);
        assert_eq!(wide_place(&spaces, target), cmd(100, 30, 0, 0));
    }

    #[test]
    fn tall_place_takes_taller_space_over_position() {
        let spaces = [rect(0, 0, 40, 50), rect(60, 0, 100, 100)];
        let target = rect(0, 0, 40, 20);
        assert_eq!(tall_place(&spaces, target), cmd(40, 100, 60, 0));
    }

    #[test]
    fn policy_names_match_cli() {
        assert_eq!(Policy::Place.to_string(), "place");
        assert_eq!(Policy::TallPlace.to_string(), "tallPlace");
        assert_eq!(Policy::WidePlace.to_string(), "widePlace");
    }
}
