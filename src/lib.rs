//! Wallery assigns non-overlapping wall placements to a set of sized
//! pictures.
//!
//! The engine takes a flat list of picture dimensions plus a margin and
//! produces a top-left coordinate per picture and the overall wall size.
//! Three heuristic strategies are available; none aims for a minimum-area
//! packing, only for a cohesive-looking wall.
//!
//! # Pipeline overview
//!
//! 1. **Workspace**: `&[ItemSpec] + margin -> Workspace` (padded integer
//!    working sizes, cached size orderings)
//! 2. **Arrange**: one [`Strategy`] mutates every item's working bounds
//!    (`Linear`, `Column`, or `Grid`)
//! 3. **Post-process**: realign to the origin, measure the wall, strip the
//!    margin and rounding back out to true units
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic-by-seed**: all randomness flows through an explicit
//!   [`Rng64`]; a fixed seed reproduces a fixed arrangement.
//! - **No partial results**: an arrangement either places every item or
//!   fails as a whole.
//! - **Exclusive mutation**: an arranger holds the only mutable borrow of
//!   its workspace for the duration of one [`arrange`] call.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod arrange;
mod foundation;
mod workspace;

pub use arrange::pipeline::{Arrangement, arrange, arrange_items};
pub use arrange::strategy::{GridSeed, Strategy};
pub use foundation::core::{Bounds, ItemId, Point, Size, conflict};
pub use foundation::error::{WalleryError, WalleryResult};
pub use foundation::math::Rng64;
pub use workspace::model::{DEFAULT_MARGIN, ItemSpec, SizedItem, Workspace};
