//! Planar straight line graphs (PSLGs) of the unit circle.
//!
//! A circle with `n` perimeter vertices is approximated by a regular `n`-gon and
//! written in the `.poly` format read by Shewchuk's `triangle`, which can then
//! mesh it, e.g. `triangle -pqa0.01 circle.poly`.
//!
//! ```no_run
//! circle_pslg::generate(64, "circle.poly")?;
//! # Ok::<(), circle_pslg::PslgError>(())
//! ```

mod circle;
mod config;
mod inputs;
mod outputs;
mod errors;

#[cfg(feature = "debugging")]
pub mod debug;

#[cfg(any(test, feature = "benchmarking"))]
pub mod tests;

use std::path::Path;

pub use errors::PslgError;
pub use circle::UnitCircle;
pub use config::{CoordinatePrecision, DisplayCoordinate, WriterConfig};

pub use inputs::*;
pub use outputs::*;

pub use num_traits::real::Real;

/// Writes the PSLG of a `num_perim_verts`-gon inscribed in the unit circle to `out_filename`,
/// creating or truncating the file.
///
/// Fails if `num_perim_verts` is zero (before the file is touched) or if the file cannot be written.
pub fn generate<Q: AsRef<Path>>(num_perim_verts: usize, out_filename: Q) -> Result<(), PslgError> {
    generate_with(&WriterConfig::default(), num_perim_verts, out_filename)
}

/// [generate] with an explicit [WriterConfig]
pub fn generate_with<Q: AsRef<Path>>(config: &WriterConfig, num_perim_verts: usize, out_filename: Q) -> Result<(), PslgError> {
    UnitCircle::new(num_perim_verts)?.write_pslg_file(out_filename, config)
}
