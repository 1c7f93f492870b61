use crate::entry::Entry;
use crate::node::{Arena, Config};
use crate::{EnvelopeMismatch, HasEnvelope, Rectangle, SpatialError, SpatialIndex};
use log::warn;
use std::fmt;

/**
 * A mutable spatial index over axis-aligned bounding rectangles.
 *
 * Payloads are filed under the envelope they report at insertion time and
 * found again through recursive quadrant subdivision. A node splits into four
 * fixed quadrants once its local element count reaches `max_load`, and cells
 * are never subdivided below `min_size` on either axis.
 */
pub struct QuadTree<T> {
    config: Config,
    arena: Arena<T>,
    mismatches: Vec<EnvelopeMismatch>,
}

impl<T: HasEnvelope + PartialEq> QuadTree<T> {
    /// Build an empty index over the given bounds. Fails when the bounds are
    /// inverted or degenerate, or when `min_size` is not positive. A zero
    /// `max_load` is treated as 1.
    pub fn new(
        max_load: usize,
        min_size: f64,
        x_min: f64,
        y_min: f64,
        x_max: f64,
        y_max: f64,
    ) -> Result<Self, SpatialError> {
        if !(x_min < x_max) || !(y_min < y_max) {
            return Err(SpatialError::InvalidBounds {
                x_min,
                y_min,
                x_max,
                y_max,
            });
        }
        if !(min_size > 0.) {
            return Err(SpatialError::InvalidMinimumSize(min_size));
        }
        let bounds = Rectangle {
            x_min,
            y_min,
            x_max,
            y_max,
        };
        Ok(QuadTree {
            config: Config {
                max_load: max_load.max(1),
                min_size,
            },
            arena: Arena::new(bounds),
            mismatches: Vec::new(),
        })
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn envelope(&self) -> Rectangle {
        self.arena.bounds()
    }

    /// Insert a payload under the envelope it reports right now.
    ///
    /// Returns `Ok(false)` when an equal payload with an equal envelope is
    /// already present; duplicate detection scans the whole tree because
    /// rebalancing may have pushed the twin arbitrarily deep. Envelopes must
    /// lie inside the index bounds; anything outside would be unreachable
    /// through bounds pruning and is rejected.
    pub fn insert(&mut self, item: T) -> Result<bool, SpatialError> {
        let entry = Entry::new(item);
        let bounds = self.arena.bounds();
        if !bounds.contains(&entry.envelope()) {
            return Err(SpatialError::OutOfBounds {
                envelope: entry.envelope(),
                bounds,
            });
        }
        Ok(self.arena.insert(entry, &self.config, &mut self.mismatches))
    }

    /// Membership under the envelope the payload reports right now; a payload
    /// whose shape changed since insertion will not be found.
    pub fn contains(&self, item: &T) -> bool {
        self.arena.contains(&item.envelope(), item)
    }

    pub fn remove(&mut self, item: &T) -> bool {
        self.arena.remove(&item.envelope(), item)
    }

    /// Insert every payload in turn, returning how many were added. Not
    /// atomic: duplicates and out-of-bounds payloads are skipped (the latter
    /// logged) and the rest still go in.
    pub fn insert_all<I: IntoIterator<Item = T>>(&mut self, items: I) -> usize {
        let mut inserted = 0;
        for item in items {
            match self.insert(item) {
                Ok(true) => inserted += 1,
                Ok(false) => {}
                Err(err) => warn!("insert_all: {}", err),
            }
        }
        inserted
    }

    /// Remove every payload in turn, returning how many were present.
    pub fn remove_all<'a, I: IntoIterator<Item = &'a T>>(&mut self, items: I) -> usize
    where
        T: 'a,
    {
        let mut removed = 0;
        for item in items {
            if self.remove(item) {
                removed += 1;
            }
        }
        removed
    }

    pub fn contains_all<'a, I: IntoIterator<Item = &'a T>>(&self, items: I) -> bool
    where
        T: 'a,
    {
        items.into_iter().all(|item| self.contains(item))
    }

    /// Always fails with `Unsupported`.
    pub fn retain_all(&mut self, _items: &[T]) -> Result<(), SpatialError> {
        Err(SpatialError::Unsupported("retain_all"))
    }

    /// Drop all elements and quadrants. The node-creation counter keeps its
    /// value.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.mismatches.clear();
    }

    /// Point-in-time iterator over every stored payload.
    pub fn iter(&self) -> Snapshot<'_, T> {
        let mut items = Vec::with_capacity(self.len());
        self.arena.collect_all(&mut items);
        Snapshot::new(items)
    }

    /// Point-in-time iterator over the payloads whose envelope intersects
    /// `window`. The result is materialized at call time; later mutation of
    /// the index is invisible to it.
    pub fn query_rect(&self, window: &Rectangle) -> Snapshot<'_, T> {
        let mut items = Vec::new();
        self.arena.collect_intersecting(window, &mut items);
        Snapshot::new(items)
    }

    pub fn to_vec(&self) -> Vec<&T> {
        self.iter().collect()
    }

    pub fn max_load(&self) -> usize {
        self.config.max_load
    }

    pub fn min_size(&self) -> f64 {
        self.config.min_size
    }

    /// Total nodes ever created for this index, the root included. Monotonic;
    /// survives `clear`.
    pub fn nodes_created(&self) -> usize {
        self.arena.created()
    }

    /// Envelope mismatches observed during rebalancing since the last `clear`.
    pub fn envelope_mismatches(&self) -> &[EnvelopeMismatch] {
        &self.mismatches
    }

    /// Render the tree for debugging: one node per line, two spaces of indent
    /// per level, descending at most `max_depth` levels below the root.
    pub fn dump(&self, max_depth: usize) -> String {
        self.arena.dump(max_depth)
    }

    #[cfg(test)]
    pub(crate) fn arena(&self) -> &Arena<T> {
        &self.arena
    }
}

impl<T: HasEnvelope + PartialEq> SpatialIndex<T> for QuadTree<T> {
    fn len(&self) -> usize {
        QuadTree::len(self)
    }

    fn envelope(&self) -> Rectangle {
        QuadTree::envelope(self)
    }

    fn contains(&self, item: &T) -> bool {
        QuadTree::contains(self, item)
    }

    fn insert(&mut self, item: T) -> Result<bool, SpatialError> {
        QuadTree::insert(self, item)
    }

    fn remove(&mut self, item: &T) -> bool {
        QuadTree::remove(self, item)
    }

    fn clear(&mut self) {
        QuadTree::clear(self)
    }

    fn iter(&self) -> Snapshot<'_, T> {
        QuadTree::iter(self)
    }

    fn query_rect(&self, window: &Rectangle) -> Snapshot<'_, T> {
        QuadTree::query_rect(self, window)
    }
}

impl<T> fmt::Debug for QuadTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuadTree")
            .field("len", &self.arena.len())
            .field("bounds", &self.arena.bounds())
            .field("nodes_created", &self.arena.created())
            .finish()
    }
}

/// One-shot iterator over results materialized when the query ran.
pub struct Snapshot<'a, T> {
    items: std::vec::IntoIter<&'a T>,
}

impl<'a, T> Snapshot<'a, T> {
    fn new(items: Vec<&'a T>) -> Self {
        Snapshot {
            items: items.into_iter(),
        }
    }
}

impl<'a, T> Iterator for Snapshot<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.items.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.items.size_hint()
    }
}

impl<'a, T> ExactSizeIterator for Snapshot<'a, T> {}
