use clap::Parser;
use std::path::PathBuf;

/// Parse a grid dimension (must be at least 1)
fn parse_dimension(s: &str) -> Result<u32, String> {
    let value: u32 = s
        .parse()
        .map_err(|_| format!("'{}' is not a positive integer", s))?;
    if value < 1 {
        return Err("Dimension must be at least 1".to_string());
    }
    Ok(value)
}

/// ascii-sampler: turn an image into ASCII art
#[derive(Debug, Parser)]
#[command(name = "ascii-sampler")]
#[command(version, about = "Convert an image into ASCII art")]
#[command(long_about = "Downsample an image onto a character grid by area averaging \
    and pick a glyph per cell from its brightness. Output goes to the console, \
    optionally in 24-bit color, and/or to a plain text file.")]
#[command(after_help = "EXAMPLES:
    # Colored art in the terminal, prompting for the size
    ascii-sampler photo.jpg -c

    # Save to a file without prompts
    ascii-sampler photo.jpg art.txt -w 120 -H 80 --fix-aspect")]
pub struct Cli {
    /// Path to the input image (jpg, png, ...)
    pub image: PathBuf,

    /// Save the ASCII art to this text file (never contains color codes)
    pub output: Option<PathBuf>,

    /// Enable colored console output (ANSI 24-bit escapes)
    #[arg(short, long)]
    pub color: bool,

    /// Output width in characters [default: prompt]
    #[arg(short, long, value_parser = parse_dimension)]
    pub width: Option<u32>,

    /// Output height in characters [default: prompt]
    #[arg(short = 'H', long, value_parser = parse_dimension)]
    pub height: Option<u32>,

    /// Correct for terminal cells being taller than wide
    #[arg(long, conflicts_with = "no_fix_aspect")]
    pub fix_aspect: bool,

    /// Keep the requested height as is
    #[arg(long)]
    pub no_fix_aspect: bool,

    /// Only write the output file, nothing to the console
    #[arg(short, long, requires = "output")]
    pub quiet: bool,
}

impl Cli {
    /// Aspect correction choice given on the command line, if any
    pub fn aspect_choice(&self) -> Option<bool> {
        match (self.fix_aspect, self.no_fix_aspect) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }
}
