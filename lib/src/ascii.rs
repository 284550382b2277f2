use crate::filters::luma;
use crate::lut::glyph_for;

/// One output position: averaged source color and the glyph chosen for it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub rgb: [u8; 3],
    pub glyph: char,
}

impl Cell {
    /// Select the ramp glyph for an averaged color
    pub fn from_rgb(rgb: [u8; 3]) -> Self {
        Self {
            rgb,
            glyph: glyph_for(luma(rgb)),
        }
    }
}

/// Row-major grid of cells, `width` glyphs per row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AsciiGrid {
    width: u32,
    height: u32,
    cells: Vec<Cell>,
}

impl AsciiGrid {
    /// Build a grid from row-major cells
    ///
    /// # Panics
    /// If `cells.len() != width * height`
    pub fn new(width: u32, height: u32, cells: Vec<Cell>) -> Self {
        assert_eq!(
            cells.len(),
            width as usize * height as usize,
            "Cell count must match grid dimensions"
        );
        Self {
            width,
            height,
            cells,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn cell(&self, x: u32, y: u32) -> Option<&Cell> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.cells.get(y as usize * self.width as usize + x as usize)
    }

    /// Rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width.max(1) as usize)
    }

    /// Glyphs only, one newline-terminated line per row
    pub fn to_plain_string(&self) -> String {
        let mut out = String::with_capacity(self.cells.len() + self.height as usize);
        for row in self.rows() {
            out.extend(row.iter().map(|c| c.glyph));
            out.push('\n');
        }
        out
    }
}

/// Select a glyph for every averaged color
///
/// # Arguments
/// * `colors` - Row-major averaged colors, one per output cell
pub fn select_glyphs(colors: &[[u8; 3]]) -> Vec<Cell> {
    colors.iter().map(|&rgb| Cell::from_rgb(rgb)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lut::GRADIENT;

    #[test]
    fn test_cell_from_black_and_white() {
        assert_eq!(Cell::from_rgb([0, 0, 0]).glyph, '@');
        assert_eq!(Cell::from_rgb([255, 255, 255]).glyph, ' ');
    }

    #[test]
    fn test_select_glyphs_in_ramp() {
        let colors: Vec<[u8; 3]> = (0..=255u8).map(|v| [v, 255 - v, v / 2]).collect();
        let cells = select_glyphs(&colors);
        assert_eq!(cells.len(), 256);
        assert!(cells.iter().all(|c| GRADIENT.contains(&c.glyph)));
    }

    #[test]
    fn test_darker_never_sparser() {
        let greys: Vec<[u8; 3]> = (0..=255u8).map(|v| [v, v, v]).collect();
        let cells = select_glyphs(&greys);
        let ranks: Vec<usize> = cells
            .iter()
            .map(|c| GRADIENT.iter().position(|&g| g == c.glyph).unwrap())
            .collect();
        assert!(ranks.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_grid_rows_and_plain_string() {
        let cells = select_glyphs(&[[0, 0, 0], [255, 255, 255], [255, 255, 255], [0, 0, 0]]);
        let grid = AsciiGrid::new(2, 2, cells);

        assert_eq!(grid.rows().count(), 2);
        assert_eq!(grid.cell(1, 0).map(|c| c.glyph), Some(' '));
        assert_eq!(grid.cell(2, 0), None);
        assert_eq!(grid.to_plain_string(), "@ \n @\n");
    }

    #[test]
    fn test_cell_lookup_row_major() {
        // 3x2: white only at (2, 1), the last cell
        let mut colors = vec![[0, 0, 0]; 6];
        colors[5] = [255, 255, 255];
        let grid = AsciiGrid::new(3, 2, select_glyphs(&colors));

        assert_eq!(grid.cell(2, 1).map(|c| c.glyph), Some(' '));
        assert_eq!(grid.cell(0, 1).map(|c| c.glyph), Some('@'));
        assert_eq!(grid.cell(0, 2), None);
    }

    #[test]
    #[should_panic(expected = "Cell count must match grid dimensions")]
    fn test_grid_size_mismatch() {
        AsciiGrid::new(3, 3, vec![Cell::from_rgb([0, 0, 0])]);
    }
}
