use std::collections::BTreeMap;

use crate::foundation::core::{Bounds, ItemId};
use crate::foundation::error::{WalleryError, WalleryResult};

/// Default margin applied around every picture, in wall units.
pub const DEFAULT_MARGIN: i64 = 2;

/// Caller-facing description of one picture to hang.
#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
pub struct ItemSpec {
    /// Stable identifier, unique within one arrangement request.
    pub id: ItemId,
    /// True width in wall units; must be positive and finite.
    pub width: f64,
    /// True height in wall units; must be positive and finite.
    pub height: f64,
}

/// Working copy of one picture carrying padded integer dimensions.
///
/// Each side of each picture carries half the margin:
///
/// ```text
///        w+m
///     <------->
///          w   m
///       <----><->
///     +--------+---------+
///     | +----+ | +-----+ |
///     | |    | | |     | |
///     | +----+ | +-----+ |
///     +--------+---------+
/// ```
///
/// Rounding up to whole units before placement avoids fractional-gap
/// bookkeeping during layout; the fractional remainder plus half the margin
/// is restored exactly once per axis by the post-process.
#[derive(Clone, Debug)]
pub struct SizedItem {
    /// Identifier copied from the [`ItemSpec`].
    pub id: ItemId,
    /// Unpadded width, kept for the final margin-removal step.
    pub true_width: f64,
    /// Unpadded height, kept for the final margin-removal step.
    pub true_height: f64,
    /// Working width: `ceil(true_width) + margin`.
    pub w: i64,
    /// Working height: `ceil(true_height) + margin`.
    pub h: i64,
    /// Current placement; `None` until the active arranger commits one.
    pub bounds: Option<Bounds>,
}

impl SizedItem {
    /// Padded area, the size proxy used by the arrangers.
    pub fn area(&self) -> i64 {
        self.w * self.h
    }

    pub(crate) fn place(&mut self, bounds: Bounds) {
        debug_assert_eq!(bounds.width(), self.w);
        debug_assert_eq!(bounds.height(), self.h);
        self.bounds = Some(bounds);
    }
}

/// The unordered collection of sized items for one arrangement request.
///
/// Owns the item map plus cached ascending orderings by padded area, width
/// and height. Built fresh per request; only the active arranger and the
/// shared post-process mutate item bounds, through an exclusive borrow.
#[derive(Clone, Debug)]
pub struct Workspace {
    margin: i64,
    items: BTreeMap<ItemId, SizedItem>,
    by_area: Vec<ItemId>,
    by_width: Vec<ItemId>,
    by_height: Vec<ItemId>,
}

impl Workspace {
    /// Build a workspace from raw item specs and a non-negative margin.
    ///
    /// Rejects an empty collection, non-positive or non-finite dimensions,
    /// duplicate identifiers and a negative margin.
    pub fn new(specs: &[ItemSpec], margin: i64) -> WalleryResult<Self> {
        if specs.is_empty() {
            return Err(WalleryError::invalid_input(
                "workspace requires at least one item",
            ));
        }
        if margin < 0 {
            return Err(WalleryError::invalid_input("margin must be non-negative"));
        }

        let mut items = BTreeMap::new();
        for spec in specs {
            if !spec.width.is_finite() || spec.width <= 0.0 {
                return Err(WalleryError::invalid_input(format!(
                    "item {} width must be positive and finite",
                    spec.id
                )));
            }
            if !spec.height.is_finite() || spec.height <= 0.0 {
                return Err(WalleryError::invalid_input(format!(
                    "item {} height must be positive and finite",
                    spec.id
                )));
            }
            let item = SizedItem {
                id: spec.id,
                true_width: spec.width,
                true_height: spec.height,
                w: spec.width.ceil() as i64 + margin,
                h: spec.height.ceil() as i64 + margin,
                bounds: None,
            };
            if items.insert(spec.id, item).is_some() {
                return Err(WalleryError::invalid_input(format!(
                    "duplicate item id {}",
                    spec.id
                )));
            }
        }

        let mut by_area: Vec<ItemId> = items.keys().copied().collect();
        let mut by_width = by_area.clone();
        let mut by_height = by_area.clone();
        by_area.sort_by_key(|id| (items[id].area(), *id));
        by_width.sort_by_key(|id| (items[id].w, *id));
        by_height.sort_by_key(|id| (items[id].h, *id));

        Ok(Self {
            margin,
            items,
            by_area,
            by_width,
            by_height,
        })
    }

    /// Margin this workspace was built with.
    pub fn margin(&self) -> i64 {
        self.margin
    }

    /// Number of items.
    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// Look up one item.
    pub fn item(&self, id: ItemId) -> Option<&SizedItem> {
        self.items.get(&id)
    }

    /// Iterate items in identifier order.
    pub fn items(&self) -> impl Iterator<Item = &SizedItem> {
        self.items.values()
    }

    /// Identifiers sorted ascending by padded area.
    pub fn order_by_area(&self) -> &[ItemId] {
        &self.by_area
    }

    /// Identifiers sorted ascending by padded width.
    pub fn order_by_width(&self) -> &[ItemId] {
        &self.by_width
    }

    /// Identifiers sorted ascending by padded height.
    pub fn order_by_height(&self) -> &[ItemId] {
        &self.by_height
    }

    /// Padded `(w, h)` of one item. Internal callers pass known-valid ids.
    pub(crate) fn dims(&self, id: ItemId) -> (i64, i64) {
        let item = &self.items[&id];
        (item.w, item.h)
    }

    pub(crate) fn bounds(&self, id: ItemId) -> Option<Bounds> {
        self.items[&id].bounds
    }

    pub(crate) fn place(&mut self, id: ItemId, bounds: Bounds) {
        self.items
            .get_mut(&id)
            .expect("placing unknown item id")
            .place(bounds);
    }

    pub(crate) fn items_mut(&mut self) -> impl Iterator<Item = &mut SizedItem> {
        self.items.values_mut()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/workspace/model.rs"]
mod tests;
