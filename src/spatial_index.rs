use crate::{HasEnvelope, Rectangle, Snapshot, SpatialError};

/// A mutable container of payloads keyed by their bounding rectangles.
pub trait SpatialIndex<T: HasEnvelope> {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn envelope(&self) -> Rectangle;

    fn contains(&self, item: &T) -> bool;

    fn insert(&mut self, item: T) -> Result<bool, SpatialError>;

    fn remove(&mut self, item: &T) -> bool;

    fn clear(&mut self);

    /// Snapshot of every stored payload.
    fn iter(&self) -> Snapshot<'_, T>;

    /// Snapshot of the payloads whose envelope intersects `window`.
    fn query_rect(&self, window: &Rectangle) -> Snapshot<'_, T>;
}
