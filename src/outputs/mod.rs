pub mod formats;

mod pslg_format;
pub use pslg_format::{PslgFormat, PslgBuilder, DIMENSION, HOLE_COUNT};
mod segment;
pub use segment::{Segment, Segments};
