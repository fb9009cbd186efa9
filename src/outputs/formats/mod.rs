//! Predefined implementations of [PslgFormat](crate::PslgFormat) and [PslgBuilder](crate::PslgBuilder)

mod poly_file;
pub use poly_file::{PolyFileFormat, PolyFileBuilder};
mod document;
pub use document::{DocumentFormat, PslgDocument};
