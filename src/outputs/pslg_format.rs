use crate::{Coords, PslgError, Segment};

/// Number of coordinates per vertex in the vertex header
pub const DIMENSION: usize = 2;
/// Number of holes in the hole block. A ring around a disc has none.
pub const HOLE_COUNT: usize = 0;

/// Describes the construction and layout of a planar straight line graph
pub trait PslgFormat {
    /// The type responsible for constructing the graph.
    ///
    /// This type can be `Self`, if you choose to implement both [PslgFormat] and [PslgBuilder] on the same type.
    type Builder: PslgBuilder + Sized;

    /// Constructs a [PslgFormat::Builder] for a ring of `vertex_count` vertices.
    fn initialize(self, vertex_count: usize) -> Result<Self::Builder, PslgError>;
}

/// Performs the construction of a planar straight line graph.
///
/// Calls arrive in document order: [PslgBuilder::vertex_header], every vertex,
/// [PslgBuilder::segment_header], every segment, then [PslgBuilder::build].
pub trait PslgBuilder: Sized {
    /// The graph output type
    type Output;

    /// Begins the vertex block
    fn vertex_header(&mut self, vertex_count: usize) -> Result<(), PslgError>;
    /// Adds the vertex at `index`
    fn add_vertex(&mut self, index: usize, coords: Coords) -> Result<(), PslgError>;
    /// Begins the segment block
    fn segment_header(&mut self, segment_count: usize) -> Result<(), PslgError>;
    /// Adds a boundary segment
    fn add_segment(&mut self, segment: Segment) -> Result<(), PslgError>;

    /// Called when every vertex and segment has been added. Emits the hole block and returns the output.
    fn build(self) -> Result<Self::Output, PslgError>;

    /// Called when emitting the graph encounters an error.
    ///
    /// Any required cleanup should be done here
    fn fail(self, error: &PslgError);
}
