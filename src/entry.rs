use crate::{HasEnvelope, Rectangle};

/// A stored payload paired with the envelope it reported at insertion time.
///
/// The envelope is captured once and never re-queried. If the payload's true
/// shape changes afterwards, the index keeps filing it under the old envelope.
#[derive(Clone, Debug)]
pub struct Entry<T> {
    envelope: Rectangle,
    item: T,
}

impl<T: HasEnvelope> Entry<T> {
    pub fn new(item: T) -> Self {
        Entry {
            envelope: item.envelope(),
            item,
        }
    }
}

impl<T> Entry<T> {
    pub fn envelope(&self) -> Rectangle {
        self.envelope
    }

    pub fn item(&self) -> &T {
        &self.item
    }

    pub fn matches(&self, envelope: &Rectangle, item: &T) -> bool
    where
        T: PartialEq,
    {
        self.envelope == *envelope && self.item == *item
    }
}

impl<T: PartialEq> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.envelope == other.envelope && self.item == other.item
    }
}
