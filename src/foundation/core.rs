pub use kurbo::{Point, Size};

use crate::foundation::error::{WalleryError, WalleryResult};

/// Stable identifier for one picture within a workspace.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct ItemId(pub u64);

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Axis-aligned working bounds in padded integer units.
///
/// Working coordinates may be negative; the shared post-process shifts every
/// placement into the positive quadrant before placements are read out.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Bounds {
    /// Left edge.
    pub x1: i64,
    /// Right edge (>= x1).
    pub x2: i64,
    /// Top edge.
    pub y1: i64,
    /// Bottom edge (>= y1).
    pub y2: i64,
}

impl Bounds {
    /// Build bounds, rejecting inverted edges.
    pub fn new(x1: i64, x2: i64, y1: i64, y2: i64) -> WalleryResult<Self> {
        if x2 < x1 || y2 < y1 {
            return Err(WalleryError::invalid_input("Bounds edges must not invert"));
        }
        Ok(Self { x1, x2, y1, y2 })
    }

    /// Bounds of a `w x h` rectangle with its top-left corner at `(x, y)`.
    pub fn from_origin(x: i64, y: i64, w: i64, h: i64) -> Self {
        Self {
            x1: x,
            x2: x + w,
            y1: y,
            y2: y + h,
        }
    }

    /// Horizontal extent.
    pub fn width(self) -> i64 {
        self.x2 - self.x1
    }

    /// Vertical extent.
    pub fn height(self) -> i64 {
        self.y2 - self.y1
    }

    /// Both edges shifted by `(dx, dy)`; extents are preserved.
    pub fn translate(self, dx: i64, dy: i64) -> Self {
        Self {
            x1: self.x1 + dx,
            x2: self.x2 + dx,
            y1: self.y1 + dy,
            y2: self.y2 + dy,
        }
    }

    /// Twice the x midpoint. Avoids halving so the sign is exact for odd sums.
    pub(crate) fn mid2_x(self) -> i64 {
        self.x1 + self.x2
    }

    /// Twice the y midpoint.
    pub(crate) fn mid2_y(self) -> i64 {
        self.y1 + self.y2
    }
}

/// Boundary-inclusive overlap test between two placed rectangles.
///
/// Rectangles sharing only an edge or a corner still count as conflicting.
/// The inclusive comparisons are deliberate: a search that retreats from
/// conflicts can then never silently erode a one-unit gap into boundary
/// sharing. Covers corner containment, full containment and the crossing
/// case where neither rectangle holds a corner of the other.
///
/// Symmetric and pure: `conflict(a, b) == conflict(b, a)`.
pub fn conflict(a: Bounds, b: Bounds) -> bool {
    a.x1 <= b.x2 && b.x1 <= a.x2 && a.y1 <= b.y2 && b.y1 <= a.y2
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
