use smallvec::SmallVec;

use crate::arrange::pool::Pool;
use crate::foundation::core::{Bounds, ItemId};
use crate::foundation::error::WalleryResult;
use crate::foundation::math::Rng64;
use crate::workspace::model::Workspace;

/// One pre-placed cluster of 1-3 items, laid out against a local (0, 0)
/// origin. Columns are combined left-to-right after all are built.
struct Column {
    width: i64,
    height: i64,
    members: SmallVec<[(ItemId, Bounds); 3]>,
}

/// Arrange items as a sequence of column clusters.
///
/// Sequencing: one single column anchors the wall with the tallest item,
/// then while more than five items remain each round emits a nested column
/// followed by a stacked column of 2 or 3 (a round consumes roughly seven
/// items' worth of variety), then stacked columns until two or fewer remain,
/// a final 2-stack, and singles for any leftover. The finished columns are
/// shuffled into random left-to-right order and each is centered on y = 0
/// independently, giving the wall a jagged skyline.
pub(crate) fn arrange(ws: &mut Workspace, rng: &mut Rng64) -> WalleryResult<()> {
    let mut pool = Pool::new(ws);
    let mut columns: Vec<Column> = Vec::new();

    if let Some(col) = single_column(ws, &mut pool) {
        columns.push(col);
    }
    while pool.len() > 5 {
        if let Some(col) = nested_column(ws, &mut pool, rng) {
            columns.push(col);
        }
        let n = if rng.next_bool() { 2 } else { 3 };
        if let Some(col) = stacked_column(ws, &mut pool, rng, n, true) {
            columns.push(col);
        }
    }
    while pool.len() > 2 {
        let n = if rng.next_bool() { 2 } else { 3 };
        if let Some(col) = stacked_column(ws, &mut pool, rng, n, false) {
            columns.push(col);
        }
    }
    if pool.len() == 2
        && let Some(col) = stacked_column(ws, &mut pool, rng, 2, false)
    {
        columns.push(col);
    }
    while !pool.is_empty() {
        if let Some(col) = single_column(ws, &mut pool) {
            columns.push(col);
        }
    }

    rng.shuffle(&mut columns);

    let mut x_offset = 0i64;
    for column in &columns {
        let y_shift = -(column.height / 2);
        for &(id, bounds) in &column.members {
            ws.place(id, bounds.translate(x_offset, y_shift));
        }
        x_offset += column.width;
    }

    Ok(())
}

/// The tallest remaining item on its own.
fn single_column(ws: &Workspace, pool: &mut Pool) -> Option<Column> {
    let id = pool.pop_tallest(ws)?;
    let (w, h) = ws.dims(id);
    Some(Column {
        width: w,
        height: h,
        members: SmallVec::from_iter([(id, Bounds::from_origin(0, 0, w, h))]),
    })
}

/// Up to `n` items stacked vertically, each centered within the column.
///
/// With `weighted` set, the first member is drawn from the large third of
/// the area ranking so the stacks paired with nested columns carry a visual
/// anchor; the rest are uniform draws.
fn stacked_column(
    ws: &Workspace,
    pool: &mut Pool,
    rng: &mut Rng64,
    n: usize,
    weighted: bool,
) -> Option<Column> {
    let mut ids: SmallVec<[ItemId; 3]> = SmallVec::new();
    if weighted && let Some(id) = pool.pop_large_third(rng) {
        ids.push(id);
    }
    ids.extend(pool.pop_random_n(n - ids.len(), rng));
    if ids.is_empty() {
        return None;
    }

    let width = ids.iter().map(|&id| ws.dims(id).0).max().unwrap_or(0);
    let mut members = SmallVec::new();
    let mut running = 0i64;
    for &id in &ids {
        let (w, h) = ws.dims(id);
        members.push((id, Bounds::from_origin((width - w) / 2, running, w, h)));
        running += h;
    }
    Some(Column {
        width,
        height: running,
        members,
    })
}

/// The widest remaining item paired with two narrow items side-by-side.
///
/// The narrow pair's row splits the leftover width into equal thirds of
/// gap (edge, between, edge). A coin flip decides whether the wide item
/// sits above or below the pair.
fn nested_column(ws: &Workspace, pool: &mut Pool, rng: &mut Rng64) -> Option<Column> {
    let wide = pool.pop_widest(ws)?;
    let left = pool.pop_narrow_third(ws, rng)?;
    let right = pool.pop_narrow_third(ws, rng)?;

    let (wide_w, wide_h) = ws.dims(wide);
    let (left_w, left_h) = ws.dims(left);
    let (right_w, right_h) = ws.dims(right);

    let pair_w = left_w + right_w;
    let pair_h = left_h.max(right_h);
    let width = pair_w.max(wide_w);
    let gap = (width - pair_w) / 3;

    let (wide_y, pair_y) = if rng.next_bool() {
        (0, wide_h)
    } else {
        (pair_h, 0)
    };

    let mut members = SmallVec::new();
    members.push((
        wide,
        Bounds::from_origin((width - wide_w) / 2, wide_y, wide_w, wide_h),
    ));
    members.push((left, Bounds::from_origin(gap, pair_y, left_w, left_h)));
    members.push((
        right,
        Bounds::from_origin(gap + left_w + gap, pair_y, right_w, right_h),
    ));

    Some(Column {
        width,
        height: wide_h + pair_h,
        members,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/arrange/column.rs"]
mod tests;
