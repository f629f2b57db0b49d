#![warn(missing_docs)]

//! intelitile-core: tiling-style placement for stacking window managers.
//!
//! Given a screen and the windows already on it, find the free rectangles
//! left over and pick one for the window being placed:
//!
//! - [`geom`]: points and validated rectangles
//! - [`solver`]: free space discovery by region carving
//! - [`policy`]: `place`, `tallPlace` and `widePlace` selection
//! - [`directive`]: window manager commands emitted for a placement
//! - [`session`]: storage for the screen and window list of one query
//!
//! The solver and policies are pure; only the session stores touch the
//! filesystem.

pub mod directive;
mod error;
pub mod geom;
pub mod policy;
pub mod session;
pub mod solver;

#[cfg(test)]
mod property_tests;

pub use directive::Directive;
pub use error::{Error, Result};
pub use geom::{Point, Rect};
pub use policy::{Placement, PlacementCommand, Policy};
pub use session::{FileStore, MemoryStore, Session, SessionId, SessionStore};
pub use solver::free_spaces;

/// Run the solver over a loaded session and apply `policy` for `target`.
pub fn solve(session: &Session, policy: Policy, target: Rect) -> Placement {
    let spaces = free_spaces(session.screen, &session.windows);
    policy.apply(&spaces, target)
}

/// Consume session `id` from `store` and compute the placement for `target`.
///
/// The session is deleted before the solver runs, so it is gone whether or
/// not a placement is found.
pub fn place_from_store<S>(
    store: &S,
    id: &SessionId,
    policy: Policy,
    target: Rect,
) -> Result<Placement>
where
    S: SessionStore + ?Sized,
{
    let session = store.take(id)?;
    Ok(solve(&session, policy, target))
}
