use std::collections::BTreeMap;

use crate::foundation::core::{Bounds, ItemId, Point};
use crate::foundation::error::{WalleryError, WalleryResult};
use crate::workspace::model::Workspace;

use super::pipeline::Arrangement;

/// Shift all placements so the minimum x1/y1 is exactly zero.
///
/// Both edges translate together, preserving every item's extent.
pub(crate) fn realign_to_origin(ws: &mut Workspace) -> WalleryResult<()> {
    let mut min_x = i64::MAX;
    let mut min_y = i64::MAX;
    for item in ws.items() {
        let bounds = placed(item.bounds, item.id)?;
        min_x = min_x.min(bounds.x1);
        min_y = min_y.min(bounds.y1);
    }

    for item in ws.items_mut() {
        if let Some(bounds) = item.bounds {
            item.bounds = Some(bounds.translate(-min_x, -min_y));
        }
    }
    Ok(())
}

/// Wall extent over the padded, realigned bounds.
///
/// Computed generically from min/max edges rather than assuming realignment
/// already zeroed the minima.
pub(crate) fn wall_size(ws: &Workspace) -> WalleryResult<(i64, i64)> {
    let mut min_x = i64::MAX;
    let mut max_x = i64::MIN;
    let mut min_y = i64::MAX;
    let mut max_y = i64::MIN;
    for item in ws.items() {
        let bounds = placed(item.bounds, item.id)?;
        min_x = min_x.min(bounds.x1);
        max_x = max_x.max(bounds.x2);
        min_y = min_y.min(bounds.y1);
        max_y = max_y.max(bounds.y2);
    }
    Ok((max_x - min_x, max_y - min_y))
}

/// Convert working bounds to final true-unit placements.
///
/// Per axis the padding is `(padded - true) / 2`, i.e. half the margin plus
/// half the round-up remainder; adding it to the top-left edge re-centers
/// the true rectangle inside its padded slot. Shrinking can only widen the
/// gaps the padded layout enforced, so an overlap-free padded layout stays
/// overlap-free in true units.
pub(crate) fn produce_placements(ws: &Workspace) -> WalleryResult<Arrangement> {
    let (width, height) = wall_size(ws)?;

    let mut placements = BTreeMap::new();
    for item in ws.items() {
        let bounds = placed(item.bounds, item.id)?;
        let width_fine = (item.w as f64 - item.true_width) / 2.0;
        let height_fine = (item.h as f64 - item.true_height) / 2.0;
        placements.insert(
            item.id,
            Point::new(
                bounds.x1 as f64 + width_fine,
                bounds.y1 as f64 + height_fine,
            ),
        );
    }

    Ok(Arrangement {
        placements,
        width: width as f64,
        height: height as f64,
    })
}

fn placed(bounds: Option<Bounds>, id: ItemId) -> WalleryResult<Bounds> {
    bounds.ok_or_else(|| WalleryError::placement_unresolved(format!("item {id} was never placed")))
}

#[cfg(test)]
#[path = "../../tests/unit/arrange/post.rs"]
mod tests;
