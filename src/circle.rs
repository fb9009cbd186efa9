use std::{f64::consts::PI, str::FromStr};

use crate::{Coords, Polygon, PslgError};

/// A regular polygon inscribed in the unit circle.
///
/// Vertex `i` lies at angle `2π·i/n`, so vertex `0` is `(1, 0)` and the vertices
/// sweep counter-clockwise. Coordinates are computed on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitCircle {
    vertex_count: usize,
}

impl UnitCircle {
    /// A circle approximated by `vertex_count` perimeter vertices.
    ///
    /// One or two vertices are accepted and give a degenerate ring: a single
    /// vertex is joined to itself, two vertices are joined to each other twice.
    pub fn new(vertex_count: usize) -> Result<Self, PslgError> {
        if vertex_count == 0 {
            return Err(PslgError::NonPositiveVertexCount(0));
        }
        Ok(Self { vertex_count })
    }

    /// The angle of vertex `index`, in radians
    #[inline]
    pub fn angle(&self, index: usize) -> f64 {
        2.0 * PI * (index as f64 / self.vertex_count as f64)
    }

    /// The coordinates of vertex `index`
    pub fn vertex(&self, index: usize) -> Coords {
        let (y, x) = self.angle(index).sin_cos();
        Coords::new(x, y)
    }
}

impl TryFrom<i64> for UnitCircle {
    type Error = PslgError;

    fn try_from(vertex_count: i64) -> Result<Self, Self::Error> {
        match usize::try_from(vertex_count) {
            Ok(vertex_count) if vertex_count > 0 => Self::new(vertex_count),
            _ => Err(PslgError::NonPositiveVertexCount(vertex_count)),
        }
    }
}

/// Parses a signed vertex count, so that zero and negative counts fail validation rather than parsing
impl FromStr for UnitCircle {
    type Err = PslgError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let vertex_count: i64 = s
            .parse()
            .map_err(|source| PslgError::InvalidVertexCount { value: s.to_string(), source })?;
        Self::try_from(vertex_count)
    }
}

impl Polygon for UnitCircle {
    type Vertex = Coords;

    fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    fn get_vertex(&self, index: usize) -> Self::Vertex {
        self.vertex(index)
    }
}
