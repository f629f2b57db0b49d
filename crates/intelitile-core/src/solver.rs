//! Free space discovery by iterative region carving.
//!
//! Start from the whole screen and, for every occupied window, split each
//! candidate that overlaps it into the (up to four) bands lying left, above,
//! right and below the window. Candidates that miss the window pass through
//! untouched. What remains after the last window is a list of rectangles,
//! each free of every window, that may overlap one another.
//!
//! Each window can at most quadruple the candidate list, so the worst case
//! is exponential in the window count. Invalid bands are pruned as they are
//! produced, which keeps this small for the tens of windows found on a real
//! desktop; no attempt is made to merge or deduplicate candidates.

use tracing::{debug, trace};

use crate::geom::{Point, Rect};

/// Compute free rectangles within `screen` that overlap none of `occupied`.
///
/// Output order is fully determined by the input order, which the placement
/// policies rely on for tie-breaking.
pub fn free_spaces(screen: Rect, occupied: &[Rect]) -> Vec<Rect> {
    let mut spaces = vec![screen];
    for (idx, window) in occupied.iter().enumerate() {
        let mut next = Vec::with_capacity(spaces.len());
        for space in spaces {
            if space.intersects(window) {
                next.extend(carve(space, *window));
            } else {
                next.push(space);
            }
        }
        spaces = next;
        trace!(index = idx, rect = %window, candidates = spaces.len(), "carved");
    }
    debug!(windows = occupied.len(), candidates = spaces.len(), "free spaces");
    spaces
}

/// Split `space` into the valid bands that exclude `window`, in the order
/// left, top, right, bottom.
fn carve(space: Rect, window: Rect) -> impl Iterator<Item = Rect> {
    [
        (space.top_left(), Point::new(window.left(), space.bottom())),
        (space.top_left(), Point::new(space.right(), window.top())),
        (Point::new(window.right(), space.top()), space.bottom_right()),
        (Point::new(space.left(), window.bottom()), space.bottom_right()),
    ]
    .into_iter()
    .filter_map(|(top_left, bottom_right)| Rect::new(top_left, bottom_right))
}
