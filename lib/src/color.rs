//! 24-bit ANSI foreground escapes

use std::fmt::Write;

/// Restores the terminal's default attributes
pub const RESET: &str = "\x1b[0m";

/// Foreground escape `ESC[38;2;R;G;Bm` for a glyph written right after it
pub fn foreground(rgb: [u8; 3]) -> String {
    let mut out = String::with_capacity(19);
    push_foreground(&mut out, rgb);
    out
}

/// Append the foreground escape for `rgb` to `buf`
pub fn push_foreground(buf: &mut String, [r, g, b]: [u8; 3]) {
    // Writing into a String cannot fail
    let _ = write!(buf, "\x1b[38;2;{r};{g};{b}m");
}
