use std::collections::BTreeMap;

use crate::arrange::strategy::Strategy;
use crate::arrange::{column, grid, linear, post};
use crate::foundation::core::{ItemId, Point};
use crate::foundation::error::{WalleryError, WalleryResult};
use crate::foundation::math::Rng64;
use crate::workspace::model::{ItemSpec, Workspace};

/// Final placement payload for one arrangement request.
///
/// Coordinates are true units with the margin and rounding stripped, origin
/// at the top-left of the wall. `width`/`height` span the padded wall, so
/// every true rectangle sits strictly inside them.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Arrangement {
    /// Top-left corner of each item, keyed by identifier.
    pub placements: BTreeMap<ItemId, Point>,
    /// Overall wall width.
    pub width: f64,
    /// Overall wall height.
    pub height: f64,
}

/// Run one arrangement strategy over a workspace, then the shared
/// post-process.
///
/// Post-processing is never a strategy's own responsibility: every strategy
/// only commits working bounds, and the origin realignment, wall measuring
/// and margin removal run here afterwards, in that order.
#[tracing::instrument(skip(ws, rng), fields(count = ws.count(), strategy = strategy.tag()))]
pub fn arrange(
    ws: &mut Workspace,
    strategy: Strategy,
    rng: &mut Rng64,
) -> WalleryResult<Arrangement> {
    if ws.count() == 0 {
        return Err(WalleryError::EmptyWorkspace);
    }

    match strategy {
        Strategy::Linear => linear::arrange(ws, rng)?,
        Strategy::Column => column::arrange(ws, rng)?,
        Strategy::Grid(seed_mode) => grid::arrange(ws, seed_mode, rng)?,
    }

    post::realign_to_origin(ws)?;
    post::produce_placements(ws)
}

/// Build a workspace from raw specs and arrange it in one call.
pub fn arrange_items(
    specs: &[ItemSpec],
    margin: i64,
    strategy: Strategy,
    seed: u64,
) -> WalleryResult<Arrangement> {
    let mut ws = Workspace::new(specs, margin)?;
    let mut rng = Rng64::new(seed);
    arrange(&mut ws, strategy, &mut rng)
}

#[cfg(test)]
#[path = "../../tests/unit/arrange/pipeline.rs"]
mod tests;
