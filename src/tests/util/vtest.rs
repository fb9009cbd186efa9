use std::fmt;

use crate::{inputs::Vertex, Real};

/// A ring vertex of either precision. Single precision unless stated otherwise.
#[derive(Default, Copy, Clone, PartialEq)]
pub struct VTest<C = f32> {
    x: C,
    y: C,
}

impl<C: Real> VTest<C> {
    pub fn new(x: C, y: C) -> Self { Self { x, y } }
}

impl VTest<f64> {
    /// Vertex `index` of a regular `vertex_count`-gon in the unit circle, built independently of [crate::UnitCircle]
    pub fn on_unit_circle(index: usize, vertex_count: usize) -> Self {
        let theta = std::f64::consts::PI * 2. * (index as f64) / (vertex_count as f64);
        Self::new(theta.cos(), theta.sin())
    }
}

impl<C: fmt::Display> fmt::Debug for VTest<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v({}, {})", self.x, self.y)
    }
}

impl<C: Real> Vertex for VTest<C> {
    type Coordinate = C;

    #[inline(always)]
    fn x(&self) -> Self::Coordinate { self.x }

    #[inline(always)]
    fn y(&self) -> Self::Coordinate { self.y }
}

impl<C: Real> From<(C, C)> for VTest<C> {
    fn from((x, y): (C, C)) -> Self {
        Self::new(x, y)
    }
}
