use smallvec::SmallVec;

use crate::foundation::core::ItemId;
use crate::foundation::math::Rng64;
use crate::workspace::model::Workspace;

/// The working set of identifiers an arranger has not yet committed.
///
/// Draws are pop-style: an item leaves the pool when returned. The narrow
/// and large thirds are fixed at construction from the workspace-wide width
/// and area rankings; membership in a third is intersected with whatever
/// still remains at draw time.
pub(crate) struct Pool {
    remaining: Vec<ItemId>,
    narrow_third: Vec<ItemId>,
    large_third: Vec<ItemId>,
}

impl Pool {
    pub(crate) fn new(ws: &Workspace) -> Self {
        let remaining: Vec<ItemId> = ws.items().map(|item| item.id).collect();
        let third = ws.count().div_ceil(3);
        let narrow_third = ws.order_by_width()[..third].to_vec();
        let large_third = ws.order_by_area()[ws.count() - third..].to_vec();
        Self {
            remaining,
            narrow_third,
            large_third,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.remaining.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.remaining.is_empty()
    }

    fn take(&mut self, index: usize) -> ItemId {
        self.remaining.swap_remove(index)
    }

    fn take_max_by_key(&mut self, key: impl Fn(ItemId) -> i64) -> Option<ItemId> {
        let (index, _) = self
            .remaining
            .iter()
            .enumerate()
            .max_by_key(|(_, id)| (key(**id), **id))?;
        Some(self.take(index))
    }

    /// Remove and return the tallest remaining item.
    pub(crate) fn pop_tallest(&mut self, ws: &Workspace) -> Option<ItemId> {
        self.take_max_by_key(|id| ws.dims(id).1)
    }

    /// Remove and return the widest remaining item.
    pub(crate) fn pop_widest(&mut self, ws: &Workspace) -> Option<ItemId> {
        self.take_max_by_key(|id| ws.dims(id).0)
    }

    /// Remove and return the largest-area remaining item.
    pub(crate) fn pop_largest(&mut self, ws: &Workspace) -> Option<ItemId> {
        self.take_max_by_key(|id| {
            let (w, h) = ws.dims(id);
            w * h
        })
    }

    /// Remove and return a random item from the narrow third of the original
    /// width ranking, falling back to the narrowest remaining item once the
    /// narrow-third pool is exhausted.
    pub(crate) fn pop_narrow_third(&mut self, ws: &Workspace, rng: &mut Rng64) -> Option<ItemId> {
        let candidates = self.narrow_third.clone();
        match self.pop_from_slice(&candidates, rng) {
            Some(id) => Some(id),
            None => self.take_max_by_key(|id| -ws.dims(id).0),
        }
    }

    /// Remove and return a random item from the large third of the original
    /// area ranking, falling back to a uniform random draw.
    pub(crate) fn pop_large_third(&mut self, rng: &mut Rng64) -> Option<ItemId> {
        let candidates = self.large_third.clone();
        match self.pop_from_slice(&candidates, rng) {
            Some(id) => Some(id),
            None => self.pop_random(rng),
        }
    }

    /// Remove and return a uniformly random remaining item.
    pub(crate) fn pop_random(&mut self, rng: &mut Rng64) -> Option<ItemId> {
        if self.remaining.is_empty() {
            return None;
        }
        let index = rng.next_index(self.remaining.len());
        Some(self.take(index))
    }

    /// Remove and return up to `n` uniformly random remaining items.
    pub(crate) fn pop_random_n(&mut self, n: usize, rng: &mut Rng64) -> SmallVec<[ItemId; 3]> {
        let mut out = SmallVec::new();
        for _ in 0..n {
            match self.pop_random(rng) {
                Some(id) => out.push(id),
                None => break,
            }
        }
        out
    }

    fn pop_from_slice(&mut self, candidates: &[ItemId], rng: &mut Rng64) -> Option<ItemId> {
        let live: Vec<usize> = self
            .remaining
            .iter()
            .enumerate()
            .filter(|&(_, id)| candidates.contains(id))
            .map(|(index, _)| index)
            .collect();
        if live.is_empty() {
            return None;
        }
        let index = live[rng.next_index(live.len())];
        Some(self.take(index))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/arrange/pool.rs"]
mod tests;
