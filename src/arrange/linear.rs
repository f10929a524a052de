use crate::foundation::core::{Bounds, ItemId};
use crate::foundation::error::WalleryResult;
use crate::foundation::math::Rng64;
use crate::workspace::model::Workspace;

/// Arrange all items in one horizontal row, vertically centered on y = 0.
///
/// The area ranking is split at `count / 2` into a small-half and a
/// large-half pool. Even draws take a random item from the large half, odd
/// draws a random item from whatever remains, which alternates anchor pieces
/// with filler instead of marching up the size ranking. Items are placed
/// strictly left-to-right, so no conflict detection is needed.
pub(crate) fn arrange(ws: &mut Workspace, rng: &mut Rng64) -> WalleryResult<()> {
    let order = ws.order_by_area();
    let split = order.len() / 2;
    let mut small: Vec<ItemId> = order[..split].to_vec();
    let mut large: Vec<ItemId> = order[split..].to_vec();

    let mut row_width = 0i64;
    let mut turn = 0usize;

    while !(small.is_empty() && large.is_empty()) {
        let id = if turn % 2 == 0 && !large.is_empty() {
            large.swap_remove(rng.next_index(large.len()))
        } else {
            let k = rng.next_index(small.len() + large.len());
            if k < small.len() {
                small.swap_remove(k)
            } else {
                large.swap_remove(k - small.len())
            }
        };

        let (w, h) = ws.dims(id);
        // Truncating division keeps y2 - y1 == h for odd heights; the split
        // is asymmetric by one unit, matching the placement recipe exactly.
        let bounds = Bounds {
            x1: row_width,
            x2: row_width + w,
            y1: -(h / 2),
            y2: h - h / 2,
        };
        ws.place(id, bounds);
        row_width = bounds.x2;
        turn += 1;
    }

    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/arrange/linear.rs"]
mod tests;
