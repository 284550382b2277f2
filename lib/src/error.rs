use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by the conversion pipeline
#[derive(Debug, Error)]
pub enum AsciiError {
    /// A render setting is out of range
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The source image has no pixels
    #[error("image has no pixels ({width}x{height})")]
    EmptyImage { width: u32, height: u32 },

    /// A raw RGB buffer does not match its declared dimensions
    #[error("RGB buffer of {len} bytes does not match {width}x{height} image")]
    BufferSize { width: u32, height: u32, len: usize },

    /// The image file could not be read or decoded
    #[error("failed to load image: {}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// The output file could not be created
    #[error("failed to open output file: {}", .path.display())]
    OutputOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing to a sink failed
    #[error("failed to write output")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, AsciiError>;
