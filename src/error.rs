use crate::Rectangle;
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum SpatialError {
    #[error("invalid bounds ({x_min}, {y_min}, {x_max}, {y_max}): x_min must be below x_max and y_min below y_max")]
    InvalidBounds {
        x_min: f64,
        y_min: f64,
        x_max: f64,
        y_max: f64,
    },

    #[error("minimum size must be positive, got {0}")]
    InvalidMinimumSize(f64),

    #[error("{envelope} is not contained in the index bounds {bounds}")]
    OutOfBounds {
        envelope: Rectangle,
        bounds: Rectangle,
    },

    #[error("{0} is not supported")]
    Unsupported(&'static str),
}

/// Recorded during rebalancing when a stored element intersects none of the
/// quadrants of the node holding it. That can only happen when the element's
/// cached envelope disagrees with the geometry it was filed under.
#[derive(Clone, Debug, Error, PartialEq)]
#[error("{envelope} intersects no quadrant of {bounds}")]
pub struct EnvelopeMismatch {
    pub envelope: Rectangle,
    pub bounds: Rectangle,
}
