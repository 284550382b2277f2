//! Gradient ramp lookup
//!
//! Glyphs are ordered from densest (darkest input) to sparsest (brightest input).

/// Fill characters organized by brightness level
///
/// 10 levels from darkest (@) to brightest (space)
pub const GRADIENT: [char; 10] = [
    '@',  // 0: darkest
    '%',  // 1
    '#',  // 2
    '*',  // 3
    '+',  // 4
    '=',  // 5
    '-',  // 6
    ':',  // 7
    '.',  // 8
    ' ',  // 9: brightest
];

/// Index into [`GRADIENT`] for a grey value
///
/// # Arguments
/// * `grey` - Luma in [0.0, 255.0]; out-of-range values are clamped
///
/// # Returns
/// `floor(grey / 255 * 9)`, always within the ramp
pub fn glyph_index(grey: f32) -> usize {
    let last = GRADIENT.len() - 1;
    if grey.is_nan() {
        return 0;
    }
    let grey = grey.clamp(0.0, 255.0);
    let index = ((grey / 255.0) * last as f32).floor() as usize;
    index.min(last)
}

/// Glyph for a grey value
pub fn glyph_for(grey: f32) -> char {
    GRADIENT[glyph_index(grey)]
}
