use crate::error::{AsciiError, Result};

/// Height multiplier compensating for terminal cells being taller than wide
pub const ASPECT_FACTOR: f64 = 0.45;

/// Largest grid accepted, in cells (a 4096x4096 character canvas)
pub const MAX_CELLS: u64 = 4096 * 4096;

/// Configuration for ASCII art conversion
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Output grid, in characters
    pub output_width: u32,       // >= 1, default 80
    pub output_height: u32,      // >= 1, default 40

    /// Aspect-ratio correction
    pub fix_aspect: bool,        // default false
    pub aspect_factor: f64,      // (0.0, 1.0], default 0.45

    /// 24-bit foreground color escapes on the console
    pub color: bool,             // default false
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            // Output grid
            output_width: 80,
            output_height: 40,

            // Aspect-ratio correction
            fix_aspect: false,
            aspect_factor: ASPECT_FACTOR,

            // Colors
            color: false,
        }
    }
}

impl RenderConfig {
    /// Creates a configuration for a `width` x `height` character grid
    pub fn new(output_width: u32, output_height: u32) -> Self {
        Self {
            output_width,
            output_height,
            ..Default::default()
        }
    }

    /// Validates the configuration parameters
    pub fn validate(&self) -> Result<()> {
        if self.output_width < 1 {
            return Err(AsciiError::InvalidConfig(format!(
                "output_width must be at least 1, got {}",
                self.output_width
            )));
        }
        if self.output_height < 1 {
            return Err(AsciiError::InvalidConfig(format!(
                "output_height must be at least 1, got {}",
                self.output_height
            )));
        }
        if !(self.aspect_factor > 0.0 && self.aspect_factor <= 1.0) {
            return Err(AsciiError::InvalidConfig(format!(
                "aspect_factor must be in (0.0, 1.0], got {}",
                self.aspect_factor
            )));
        }
        let cells = self.output_width as u64 * self.corrected_height() as u64;
        if cells > MAX_CELLS {
            return Err(AsciiError::InvalidConfig(format!(
                "output grid {}x{} exceeds {} cells",
                self.output_width,
                self.corrected_height(),
                MAX_CELLS
            )));
        }
        Ok(())
    }

    /// Number of output rows actually rendered
    ///
    /// With aspect correction enabled the requested height is scaled by
    /// `aspect_factor` and floored, never dropping below one row.
    pub fn corrected_height(&self) -> u32 {
        if !self.fix_aspect {
            return self.output_height;
        }
        let scaled = (self.output_height as f64 * self.aspect_factor).floor() as u32;
        scaled.max(1)
    }

    /// Color escapes never go to a file: saving to a file turns color off
    ///
    /// Returns true when color was requested and has just been disabled, so
    /// the caller can tell the user.
    pub fn apply_file_policy(&mut self, saving_to_file: bool) -> bool {
        if saving_to_file && self.color {
            self.color = false;
            return true;
        }
        false
    }
}
