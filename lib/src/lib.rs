//! ASCII Sampler - image to ASCII art converter
//!
//! Downsamples an image onto a character grid by box sampling (area
//! averaging), maps each cell's luma onto a 10-glyph gradient ramp and
//! writes the rows to the console (optionally in 24-bit color) and/or a
//! plain text file.
//!
//! # Example
//! ```no_run
//! use ascii_sampler::{RenderConfig, Sink, SourceImage, process_to_sinks};
//!
//! let source = SourceImage::open("photo.jpg").unwrap();
//! let config = RenderConfig {
//!     color: true,
//!     ..RenderConfig::new(100, 50)
//! };
//! process_to_sinks(&source, &config, &mut [Sink::stdout(config.color)]).unwrap();
//! ```

pub mod ascii;
pub mod color;
pub mod config;
pub mod error;
pub mod filters;
pub mod lut;
pub mod processor;
pub mod render;
pub mod resample;
pub mod source;

// Re-export main types for convenience
pub use ascii::{AsciiGrid, Cell};
pub use config::RenderConfig;
pub use error::{AsciiError, Result};
pub use processor::{process_image, process_to_sinks};
pub use render::{Sink, render};
pub use source::SourceImage;
