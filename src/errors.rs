use std::{io, num::ParseIntError};

use thiserror::Error;

/// Describes an error which occurred while generating or writing a PSLG
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum PslgError {
    /// The requested perimeter vertex count was zero or negative
    #[error("numPerimVerts must be positive, got {0}")]
    NonPositiveVertexCount(i64),
    /// The perimeter vertex count was not an integer
    #[error("numPerimVerts must be an integer, got `{value}`: {source}")]
    InvalidVertexCount { value: String, source: ParseIntError },
    /// A vertex coordinate could not be represented as a finite `f64`
    #[error("vertex {vertex} has a non-finite coordinate")]
    NonFiniteCoordinate { vertex: usize },
    /// An environment override was present but could not be parsed
    #[error("invalid value `{value}` for environment variable {key}")]
    InvalidEnvironment { key: String, value: String },
    /// The output could not be created or written
    #[error("failed to write PSLG: {0}")]
    Io(#[from] io::Error),
}
