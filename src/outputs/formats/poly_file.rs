use std::io::Write;

use crate::{Coords, CoordinatePrecision, PslgBuilder, PslgError, PslgFormat, Segment, DIMENSION, HOLE_COUNT};

/// Attributes per vertex. The circle carries none.
const VERTEX_ATTRIBUTES: usize = 0;
/// Boundary markers per vertex or segment. The circle carries none.
const BOUNDARY_MARKERS: usize = 0;

/// A [PslgFormat] which writes the `.poly` text read by Shewchuk's `triangle`:
///
/// ```text
/// <vertex count> 2 0 0
/// <i> <x> <y>            (once per vertex)
/// <segment count> 0
/// <i> <start> <end>      (once per segment)
/// 0
/// ```
#[derive(Debug)]
pub struct PolyFileFormat<W: Write> {
    writer: W,
    precision: CoordinatePrecision,
}

impl<W: Write> PolyFileFormat<W> {
    /// Create a format which writes into `writer`, rendering coordinates with `precision`
    pub fn new(writer: W, precision: CoordinatePrecision) -> Self {
        Self { writer, precision }
    }
}

impl<W: Write> PslgFormat for PolyFileFormat<W> {
    type Builder = PolyFileBuilder<W>;

    fn initialize(self, _vertex_count: usize) -> Result<Self::Builder, PslgError> {
        Ok(PolyFileBuilder {
            writer: self.writer,
            precision: self.precision,
        })
    }
}

#[derive(Debug)]
pub struct PolyFileBuilder<W: Write> {
    writer: W,
    precision: CoordinatePrecision,
}

impl<W: Write> PslgBuilder for PolyFileBuilder<W> {
    type Output = W;

    fn vertex_header(&mut self, vertex_count: usize) -> Result<(), PslgError> {
        writeln!(self.writer, "{} {} {} {}", vertex_count, DIMENSION, VERTEX_ATTRIBUTES, BOUNDARY_MARKERS)?;
        Ok(())
    }

    fn add_vertex(&mut self, index: usize, coords: Coords) -> Result<(), PslgError> {
        writeln!(self.writer, "{} {} {}", index, self.precision.display(coords.x()), self.precision.display(coords.y()))?;
        Ok(())
    }

    fn segment_header(&mut self, segment_count: usize) -> Result<(), PslgError> {
        writeln!(self.writer, "{} {}", segment_count, BOUNDARY_MARKERS)?;
        Ok(())
    }

    fn add_segment(&mut self, segment: Segment) -> Result<(), PslgError> {
        writeln!(self.writer, "{}", segment)?;
        Ok(())
    }

    fn build(mut self) -> Result<Self::Output, PslgError> {
        writeln!(self.writer, "{}", HOLE_COUNT)?;
        self.writer.flush()?;
        Ok(self.writer)
    }

    fn fail(self, error: &PslgError) {
        // Whatever reached the writer stays there
        log::warn!("abandoning partially written PSLG: {}", error);
    }
}

