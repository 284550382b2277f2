/// Perceptual grey value of an RGB triple, in [0.0, 255.0]
///
/// Formula: L = 0.299*R + 0.587*G + 0.114*B (ITU-R BT.601 luma weights)
///
/// The weighted sum is taken in integer thousandths, so pure white is exactly
/// 255.0 and pure black exactly 0.0.
///
/// # Arguments
/// * `rgb` - Averaged cell color
pub fn luma([r, g, b]: [u8; 3]) -> f32 {
    let weighted = 299 * r as u32 + 587 * g as u32 + 114 * b as u32;
    weighted as f32 / 1000.0
}
