use std::{fs, io, path::Path};

use crate::{Coords, PslgBuilder, PslgError, PslgFormat, Segments, WriterConfig, formats};

use super::vertex::Vertex;

/// An indexable, closed ring of vertices which can be written as a planar straight line graph.
///
/// Vertex `i` is joined to vertex `i + 1`, and the last vertex is joined back to vertex `0`.
pub trait Polygon {
    /// The type of vertices of the polygon
    type Vertex: Vertex;

    /// Provides the number of vertices of the polygon.
    fn vertex_count(&self) -> usize;

    /// Get the [Polygon::Vertex] at `index`, which must be less than [Polygon::vertex_count]
    fn get_vertex(&self, index: usize) -> Self::Vertex;

    /// Iterate through the boundary segments closing the ring, in index order
    fn iter_segments(&self) -> Segments {
        Segments::new(self.vertex_count())
    }

    /// Emit this polygon into the layout specified by `format`.
    ///
    /// An empty polygon is rejected before `format` is initialized.
    fn to_pslg<F: PslgFormat>(&self, format: F) -> Result<<F::Builder as PslgBuilder>::Output, PslgError> {
        let vertex_count = self.vertex_count();
        if vertex_count == 0 {
            return Err(PslgError::NonPositiveVertexCount(0));
        }

        let mut builder = format.initialize(vertex_count)?;
        match emit(self, &mut builder) {
            Ok(()) => builder.build(),
            Err(error) => {
                builder.fail(&error);
                Err(error)
            }
        }
    }

    /// Write this polygon as `.poly` text into `writer`, returning the flushed writer
    fn write_pslg<W: io::Write>(&self, writer: W, config: &WriterConfig) -> Result<W, PslgError> {
        self.to_pslg(formats::PolyFileFormat::new(writer, config.precision))
    }

    /// Create (or truncate) the file at `path` and write this polygon to it as `.poly` text
    fn write_pslg_file<Q: AsRef<Path>>(&self, path: Q, config: &WriterConfig) -> Result<(), PslgError> {
        let path = path.as_ref();
        let file = fs::File::create(path)?;
        self.write_pslg(io::BufWriter::new(file), config)?;
        log::info!(
            "wrote {} perimeter vertices to {} (mesh it with `triangle -pqa0.01 {}`)",
            self.vertex_count(),
            path.display(),
            path.display(),
        );
        Ok(())
    }
}

fn emit<P: Polygon + ?Sized, B: PslgBuilder>(polygon: &P, builder: &mut B) -> Result<(), PslgError> {
    let vertex_count = polygon.vertex_count();

    log::debug!("vertex block: {} vertices", vertex_count);
    builder.vertex_header(vertex_count)?;
    for index in 0..vertex_count {
        let coords = Coords::try_from_vertex(&polygon.get_vertex(index), index)?;
        builder.add_vertex(index, coords)?;
    }

    let segments = polygon.iter_segments();
    log::debug!("segment block: {} segments", segments.len());
    builder.segment_header(segments.len())?;
    for segment in segments {
        builder.add_segment(segment)?;
    }
    Ok(())
}

impl<V: Vertex + Clone> Polygon for Vec<V> {
    type Vertex = V;

    fn vertex_count(&self) -> usize {
        self.len()
    }

    fn get_vertex(&self, index: usize) -> Self::Vertex {
        self[index].clone()
    }
}

impl<V: Vertex + Clone> Polygon for [V] {
    type Vertex = V;

    fn vertex_count(&self) -> usize {
        self.len()
    }

    fn get_vertex(&self, index: usize) -> Self::Vertex {
        self[index].clone()
    }
}
