use crate::ascii::{AsciiGrid, select_glyphs};
use crate::config::RenderConfig;
use crate::error::Result;
use crate::render::{Sink, render};
use crate::resample::resample;
use crate::source::SourceImage;
use log::debug;

/// Converts a decoded image into a grid of ASCII glyphs
///
/// Pipeline:
/// 1. Validate the configuration
/// 2. Apply aspect-ratio correction to the requested height
/// 3. Box-sample the source down (or up) to the character grid
/// 4. Map each averaged color to a gradient glyph via its luma
///
/// # Arguments
/// * `source` - The decoded RGB image
/// * `config` - Output grid and rendering options
///
/// # Returns
/// A grid of `output_width` x `corrected_height()` cells
pub fn process_image(source: &SourceImage, config: &RenderConfig) -> Result<AsciiGrid> {
    config.validate()?;

    let width = config.output_width;
    let height = config.corrected_height();
    debug!(
        "resampling {}x{} source to {}x{} cells",
        source.width(),
        source.height(),
        width,
        height
    );

    let colors = resample(source, width, height);
    let cells = select_glyphs(&colors);

    Ok(AsciiGrid::new(width, height, cells))
}

/// Converts `source` and writes the result to every sink
pub fn process_to_sinks(
    source: &SourceImage,
    config: &RenderConfig,
    sinks: &mut [Sink<'_>],
) -> Result<AsciiGrid> {
    let grid = process_image(source, config)?;
    render(&grid, sinks)?;
    Ok(grid)
}
