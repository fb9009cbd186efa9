use core::fmt;
use std::fmt::Debug;

use num_traits::{real::Real, ToPrimitive};

use crate::PslgError;

/// A two-dimensional point.
///
/// The coordinate type must implement [num_traits::real::Real], reexported as [crate::Real].
pub trait Vertex {
    /// The type of the individual `x` and `y` coordinates
    type Coordinate: Real;

    /// The x [Vertex::Coordinate] value
    fn x(&self) -> Self::Coordinate;
    /// The y [Vertex::Coordinate] value
    fn y(&self) -> Self::Coordinate;
}

/// Double precision coordinates of a vertex, as they are written to a PSLG.
#[derive(Clone, Copy, PartialEq)]
pub struct Coords([f64; 2]);

impl Coords {
    /// Coordinates `(x, y)`, taken as given
    pub fn new(x: f64, y: f64) -> Self { Self([x, y]) }

    /// The x coordinate
    pub fn x(&self) -> f64 { self.0[0] }
    /// The y coordinate
    pub fn y(&self) -> f64 { self.0[1] }

    /// Converts `v` to `f64` coordinates, failing if either coordinate is not finite.
    /// `index` only identifies the vertex in the error.
    pub fn try_from_vertex<V: Vertex>(v: &V, index: usize) -> Result<Self, PslgError> {
        match (v.x().to_f64(), v.y().to_f64()) {
            (Some(x), Some(y)) if x.is_finite() && y.is_finite() => Ok(Self([x, y])),
            _ => Err(PslgError::NonFiniteCoordinate { vertex: index }),
        }
    }
}

impl fmt::Debug for Coords {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Coords").field(&self.x()).field(&self.y()).finish()
    }
}

impl fmt::Display for Coords {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x(), self.y())
    }
}

impl Vertex for Coords {
    type Coordinate = f64;

    #[inline(always)]
    fn x(&self) -> Self::Coordinate {
        self.0[0]
    }

    #[inline(always)]
    fn y(&self) -> Self::Coordinate {
        self.0[1]
    }
}

impl<C: Debug + Real> Vertex for [C; 2] {
    type Coordinate = C;

    #[inline(always)]
    fn x(&self) -> Self::Coordinate {
        self[0]
    }

    #[inline(always)]
    fn y(&self) -> Self::Coordinate {
        self[1]
    }
}

impl<C: Debug + Real> Vertex for (C, C) {
    type Coordinate = C;

    #[inline(always)]
    fn x(&self) -> Self::Coordinate {
        self.0
    }

    #[inline(always)]
    fn y(&self) -> Self::Coordinate {
        self.1
    }
}
