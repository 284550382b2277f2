//! Box sampling: each output cell averages every source pixel under its footprint

use crate::source::SourceImage;

/// Half-open source rectangle `[start_x, end_x) x [start_y, end_y)` behind one cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub start_x: u32,
    pub end_x: u32,
    pub start_y: u32,
    pub end_y: u32,
}

impl Region {
    /// Footprint of output cell `(x, y)` when a `src_width` x `src_height`
    /// image is mapped onto an `out_width` x `out_height` grid
    ///
    /// The region always spans at least one column and one row, even when the
    /// scale factor rounds a span down to zero width.
    pub fn for_cell(
        x: u32,
        y: u32,
        (src_width, src_height): (u32, u32),
        (out_width, out_height): (u32, u32),
    ) -> Self {
        let scale_x = src_width as f64 / out_width as f64;
        let scale_y = src_height as f64 / out_height as f64;

        let (start_x, end_x) = span(x, scale_x, src_width);
        let (start_y, end_y) = span(y, scale_y, src_height);

        Self {
            start_x,
            end_x,
            start_y,
            end_y,
        }
    }

    pub fn pixel_count(&self) -> u64 {
        let w = self.end_x.saturating_sub(self.start_x) as u64;
        let h = self.end_y.saturating_sub(self.start_y) as u64;
        w * h
    }
}

/// Clamped `[start, end)` span along one axis
fn span(index: u32, scale: f64, limit: u32) -> (u32, u32) {
    let start = (index as f64 * scale).floor() as u32;
    let end = ((index + 1) as f64 * scale).floor() as u32;

    let start = start.min(limit - 1);
    let end = end.min(limit).max(start + 1);
    (start, end)
}

/// Average RGB over `region`, truncating each channel
///
/// An empty region falls back to the single pixel at its top-left corner.
pub fn average_region(source: &SourceImage, region: &Region) -> [u8; 3] {
    let count = region.pixel_count();
    if count == 0 {
        return source.pixel(region.start_x, region.start_y);
    }

    let mut sum = [0u64; 3];
    for sy in region.start_y..region.end_y {
        for sx in region.start_x..region.end_x {
            let [r, g, b] = source.pixel(sx, sy);
            sum[0] += r as u64;
            sum[1] += g as u64;
            sum[2] += b as u64;
        }
    }

    [
        (sum[0] / count) as u8,
        (sum[1] / count) as u8,
        (sum[2] / count) as u8,
    ]
}

/// Downsample `source` to `out_width` x `out_height` averaged colors
///
/// # Returns
/// Row-major Vec with one RGB triple per output cell
///
/// # Panics
/// If either output dimension is zero. The grid is allocated up front, so
/// callers bound its size first (`RenderConfig::validate` caps it at
/// `MAX_CELLS`).
pub fn resample(source: &SourceImage, out_width: u32, out_height: u32) -> Vec<[u8; 3]> {
    assert!(out_width >= 1 && out_height >= 1, "Output grid must be at least 1x1");

    let src_dims = source.dimensions();
    let mut colors = Vec::with_capacity(out_width as usize * out_height as usize);

    for y in 0..out_height {
        for x in 0..out_width {
            let region = Region::for_cell(x, y, src_dims, (out_width, out_height));
            colors.push(average_region(source, &region));
        }
    }

    colors
}
