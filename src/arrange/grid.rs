use crate::arrange::pool::Pool;
use crate::arrange::strategy::GridSeed;
use crate::foundation::core::{Bounds, ItemId, conflict};
use crate::foundation::error::{WalleryError, WalleryResult};
use crate::foundation::math::Rng64;
use crate::workspace::model::Workspace;

/// Hard ceiling on center-pulling passes. If the layout has not settled by
/// then, the current state is accepted as final.
const RELAX_PASS_CAP: usize = 500;

/// Arrange items by seeding them on a small grid around the origin, walking
/// each out of conflict, then relaxing everything back toward the center.
///
/// Phase 1 seeds unit-spaced grid cells near the origin, visited in order of
/// increasing Chebyshev magnitude. Phase 2 resolves each cell's conflicts by
/// stepping the item one unit at a time away from the origin, randomizing
/// which axis absorbs each step. Phase 3 repeatedly nudges items one unit
/// back toward the origin wherever that stays conflict-free, which closes
/// the gaps the walk-out opened and yields organic, non-grid-aligned
/// clusters.
pub(crate) fn arrange(
    ws: &mut Workspace,
    seed_mode: GridSeed,
    rng: &mut Rng64,
) -> WalleryResult<()> {
    let cells = seed_cells(ws.count());
    let order = assignment_order(ws, seed_mode, rng);
    debug_assert_eq!(cells.len(), order.len());

    walk_out(ws, &cells, &order, rng)?;
    relax(ws, rng);
    Ok(())
}

/// The `count` unit-spaced grid cells nearest the origin, as `(i, j)` row
/// and column indices in increasing-magnitude order.
fn seed_cells(count: usize) -> Vec<(i64, i64)> {
    let side = (count as f64).sqrt().ceil() as i64;
    let lo = -(side / 2);
    let hi = side - side / 2;

    let mut cells: Vec<(i64, i64)> = (lo..hi)
        .flat_map(|i| (lo..hi).map(move |j| (i, j)))
        .collect();
    cells.sort_by_key(|&(i, j)| (i.abs().max(j.abs()), i.abs() + j.abs(), i, j));
    cells.truncate(count);
    cells
}

/// Item-to-cell assignment order for the chosen seed mode.
fn assignment_order(ws: &Workspace, seed_mode: GridSeed, rng: &mut Rng64) -> Vec<ItemId> {
    let mut pool = Pool::new(ws);
    let mut order = Vec::with_capacity(ws.count());
    match seed_mode {
        GridSeed::CenterBias => {
            // Largest areas first, so they land on the innermost cells.
            while let Some(id) = pool.pop_largest(ws) {
                order.push(id);
            }
        }
        GridSeed::Uniform => {
            while let Some(id) = pool.pop_random(rng) {
                order.push(id);
            }
        }
    }
    order
}

/// Phase 2: place each seeded item, stepping it away from the origin until
/// it conflicts with nothing already placed.
///
/// Each step keeps the sign of the seed indices, so an item only ever moves
/// deeper into its own quadrant; against a finite placed set the walk must
/// escape. A budget proportional to the total padded extent of the
/// workspace guards against the pathological case anyway.
fn walk_out(
    ws: &mut Workspace,
    cells: &[(i64, i64)],
    order: &[ItemId],
    rng: &mut Rng64,
) -> WalleryResult<()> {
    let step_cap = walk_out_step_cap(ws);
    let mut placed: Vec<Bounds> = Vec::with_capacity(order.len());

    for (&(i, j), &id) in cells.iter().zip(order) {
        let (w, h) = ws.dims(id);
        let mut bounds = Bounds::from_origin(j, i, w, h);
        let mut steps = 0usize;

        while placed.iter().any(|&other| conflict(bounds, other)) {
            if steps >= step_cap {
                return Err(WalleryError::placement_unresolved(format!(
                    "item {id} still conflicting after {step_cap} walk-out steps"
                )));
            }
            let denom = i.abs() + j.abs();
            let p_y = if denom == 0 {
                0.5
            } else {
                i.abs() as f64 / denom as f64
            };
            if rng.chance(p_y) {
                bounds = bounds.translate(0, outward(i, rng));
            } else {
                bounds = bounds.translate(outward(j, rng), 0);
            }
            steps += 1;
        }

        tracing::debug!(item = %id, steps, "walk-out placed item");
        ws.place(id, bounds);
        placed.push(bounds);
    }
    Ok(())
}

/// Unit step away from the origin along one axis, following the sign of the
/// seed index. The index is only zero for the center cell, which is placed
/// first and never walks; a random direction covers it regardless.
fn outward(index: i64, rng: &mut Rng64) -> i64 {
    match index.signum() {
        0 => {
            if rng.next_bool() {
                1
            } else {
                -1
            }
        }
        sign => sign,
    }
}

fn walk_out_step_cap(ws: &Workspace) -> usize {
    let extent: i64 = ws.items().map(|item| item.w + item.h).sum();
    (extent as usize) * 16 + 1024
}

/// Phase 3: center-pulling relaxation.
///
/// Full passes in random item order; each item tries one unit toward the
/// origin independently in x and y, keeping a move only if it conflicts with
/// nothing else. Stops after a pass with zero moves, or at the pass cap.
fn relax(ws: &mut Workspace, rng: &mut Rng64) {
    let mut ids: Vec<ItemId> = ws.items().map(|item| item.id).collect();

    for pass in 0..RELAX_PASS_CAP {
        rng.shuffle(&mut ids);
        let mut moves = 0usize;

        for &id in &ids {
            let Some(bounds) = ws.bounds(id) else { continue };

            let dx = inward(bounds.mid2_x());
            if dx != 0 && try_move(ws, id, bounds, dx, 0) {
                moves += 1;
            }

            let bounds = ws.bounds(id).unwrap_or(bounds);
            let dy = inward(bounds.mid2_y());
            if dy != 0 && try_move(ws, id, bounds, 0, dy) {
                moves += 1;
            }
        }

        if moves == 0 {
            tracing::debug!(passes = pass + 1, "relaxation converged");
            return;
        }
    }
    tracing::debug!(passes = RELAX_PASS_CAP, "relaxation hit pass cap");
}

/// Unit step toward the origin for a doubled midpoint, or zero when already
/// centered. An odd-sized item straddling the axis has `|mid2| == 1` and can
/// get no closer; stepping it would only mirror it forever.
fn inward(mid2: i64) -> i64 {
    if mid2.abs() > 1 { -mid2.signum() } else { 0 }
}

fn try_move(ws: &mut Workspace, id: ItemId, bounds: Bounds, dx: i64, dy: i64) -> bool {
    let candidate = bounds.translate(dx, dy);
    let blocked = ws
        .items()
        .filter(|item| item.id != id)
        .filter_map(|item| item.bounds)
        .any(|other| conflict(candidate, other));
    if blocked {
        return false;
    }
    ws.place(id, candidate);
    true
}

#[cfg(test)]
#[path = "../../tests/unit/arrange/grid.rs"]
mod tests;
