mod coordinate;
mod entry;
mod error;
mod node;
mod quad_tree;
mod rectangle;
mod spatial_index;

pub use coordinate::Coordinate;
pub use error::{EnvelopeMismatch, SpatialError};
pub use quad_tree::{QuadTree, Snapshot};
pub use rectangle::{HasEnvelope, Rectangle};
pub use spatial_index::SpatialIndex;
