use std::{fmt, iter};

/// One edge of the boundary ring, joining vertex `start` to vertex `end`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Segment {
    pub index: usize,
    pub start: usize,
    pub end: usize,
}

impl Segment {
    /// The `index`th segment of a closed ring of `vertex_count` vertices.
    /// The last segment wraps around to vertex `0`.
    #[inline]
    pub fn of_ring(index: usize, vertex_count: usize) -> Self {
        Self {
            index,
            start: index,
            end: (index + 1) % vertex_count,
        }
    }

    /// A segment whose endpoints coincide. Produced by a single-vertex ring.
    pub fn is_self_loop(&self) -> bool {
        self.start == self.end
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.index, self.start, self.end)
    }
}

/// Iterates the segments closing a ring of vertices. Created by [Polygon::iter_segments](crate::Polygon::iter_segments).
#[derive(Debug, Clone)]
pub struct Segments {
    next: usize,
    vertex_count: usize,
}

impl Segments {
    pub fn new(vertex_count: usize) -> Self {
        Self { next: 0, vertex_count }
    }
}

impl Iterator for Segments {
    type Item = Segment;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next < self.vertex_count {
            let segment = Segment::of_ring(self.next, self.vertex_count);
            self.next += 1;
            Some(segment)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.vertex_count - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Segments { }

impl iter::FusedIterator for Segments { }
