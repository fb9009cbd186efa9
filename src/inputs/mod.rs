mod polygon;
pub use polygon::Polygon;
mod vertex;
pub use vertex::{Vertex, Coords};
