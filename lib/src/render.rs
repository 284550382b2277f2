//! Text output of a glyph grid
//!
//! The renderer writes every row to a set of sinks (console, file, or any
//! other writer). Color escapes only ever reach sinks created with color
//! enabled; everything else receives the bare glyphs.

use crate::ascii::AsciiGrid;
use crate::color::{RESET, push_foreground};
use crate::error::{AsciiError, Result};
use log::debug;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// A writer the renderer emits rows to
pub struct Sink<'a> {
    color: bool,
    writer: Box<dyn Write + 'a>,
}

impl<'a> Sink<'a> {
    /// Console sink over any writer; `color` enables foreground escapes
    pub fn console(writer: impl Write + 'a, color: bool) -> Self {
        Self {
            color,
            writer: Box::new(writer),
        }
    }

    /// Glyph-only sink over any writer
    pub fn plain(writer: impl Write + 'a) -> Self {
        Self {
            color: false,
            writer: Box::new(writer),
        }
    }
}

impl Sink<'static> {
    /// Console sink on standard output
    pub fn stdout(color: bool) -> Self {
        Self::console(io::stdout(), color)
    }

    /// Create (or truncate) a text file; never receives color escapes
    pub fn file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|source| AsciiError::OutputOpen {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::plain(BufWriter::new(file)))
    }
}

/// Write `grid` to every sink, top row first, one line per row
///
/// Colored sinks get a foreground escape before each glyph, a reset at the
/// end of each line and one more reset after the last line. All sinks are
/// flushed before returning.
pub fn render(grid: &AsciiGrid, sinks: &mut [Sink<'_>]) -> Result<()> {
    let any_color = sinks.iter().any(|s| s.color);
    let any_plain = sinks.iter().any(|s| !s.color);

    debug!(
        "rendering {}x{} grid to {} sink(s)",
        grid.width(),
        grid.height(),
        sinks.len()
    );

    let mut plain = String::with_capacity(grid.width() as usize + 1);
    let mut colored = String::new();

    for row in grid.rows() {
        plain.clear();
        colored.clear();

        for cell in row {
            if any_plain {
                plain.push(cell.glyph);
            }
            if any_color {
                push_foreground(&mut colored, cell.rgb);
                colored.push(cell.glyph);
            }
        }
        plain.push('\n');
        colored.push_str(RESET);
        colored.push('\n');

        for sink in sinks.iter_mut() {
            let line = if sink.color { &colored } else { &plain };
            sink.writer.write_all(line.as_bytes())?;
        }
    }

    for sink in sinks.iter_mut() {
        if sink.color {
            sink.writer.write_all(RESET.as_bytes())?;
        }
        sink.writer.flush()?;
    }

    Ok(())
}
