use crate::{Coords, PslgBuilder, PslgError, PslgFormat, Segment, HOLE_COUNT};

/// A planar straight line graph held in memory
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PslgDocument {
    pub vertices: Vec<Coords>,
    pub segments: Vec<Segment>,
    pub hole_count: usize,
}

impl PslgDocument {
    /// `true` if the segments form a single closed cycle visiting every vertex exactly once
    pub fn is_single_cycle(&self) -> bool {
        let n = self.vertices.len();
        if n == 0 || self.segments.len() != n {
            return false;
        }

        let mut next = vec![None; n];
        for s in &self.segments {
            if s.start >= n || s.end >= n || next[s.start].is_some() {
                return false;
            }
            next[s.start] = Some(s.end);
        }

        let mut visited = vec![false; n];
        let mut current = 0;
        for _ in 0..n {
            if visited[current] {
                return false;
            }
            visited[current] = true;
            current = match next[current] {
                Some(end) => end,
                None => return false,
            };
        }
        current == 0
    }
}

/// A [PslgFormat] which collects the graph into a [PslgDocument]
#[derive(Debug, Default)]
pub struct DocumentFormat;

impl DocumentFormat {
    pub fn new() -> Self {
        Self
    }
}

impl PslgFormat for DocumentFormat {
    type Builder = PslgDocument;

    fn initialize(self, vertex_count: usize) -> Result<Self::Builder, PslgError> {
        Ok(PslgDocument {
            vertices: Vec::with_capacity(vertex_count),
            segments: Vec::with_capacity(vertex_count),
            hole_count: HOLE_COUNT,
        })
    }
}

impl PslgBuilder for PslgDocument {
    type Output = PslgDocument;

    fn vertex_header(&mut self, _vertex_count: usize) -> Result<(), PslgError> {
        Ok(())
    }

    fn add_vertex(&mut self, index: usize, coords: Coords) -> Result<(), PslgError> {
        debug_assert_eq!(index, self.vertices.len());
        self.vertices.push(coords);
        Ok(())
    }

    fn segment_header(&mut self, _segment_count: usize) -> Result<(), PslgError> {
        Ok(())
    }

    fn add_segment(&mut self, segment: Segment) -> Result<(), PslgError> {
        self.segments.push(segment);
        Ok(())
    }

    fn build(self) -> Result<Self::Output, PslgError> {
        Ok(self)
    }

    fn fail(self, error: &PslgError) {
        log::debug!("discarding partial document of {} vertices: {}", self.vertices.len(), error);
    }
}
