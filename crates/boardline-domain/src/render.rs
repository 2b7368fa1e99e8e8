//! Rendering - rasterize a board and lay it out as text
//!
//! The text view of a board is:
//!
//! ```text
//! *** Circuit Board ID: 1 ***
//!     0                   1
//!     0 1 2 3 4 5 6 7 8 9
//! 0   . . . . . . . . . .
//! ```
//!
//! followed by one line per row. Each cell takes two columns, so the tens
//! ruler carries one digit every twenty columns.

use crate::board::Board;
use crate::component::Component;
use crate::placement::Dimensions;

/// Glyph for a cell no component covers
pub const EMPTY_GLYPH: char = '.';

/// Columns before the first cell on ruler and row lines
const LABEL_WIDTH: usize = 4;

/// Text columns taken by one cell (glyph + separator)
const CELL_WIDTH: usize = 2;

/// Glyph grid of a board, `height` rows of `width` cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<char>,
}

impl Grid {
    /// Rasterize the placed components of a board
    pub fn rasterize(board: &Board) -> Self {
        Self::paint(board.dimensions(), board.components())
    }

    /// Paint components onto an empty grid of the given size
    ///
    /// Components are painted in slice order, so where two boxes share a
    /// cell the later one wins. Cells past the grid edge are dropped.
    pub fn paint(dimensions: Dimensions, components: &[Component]) -> Self {
        let width = dimensions.width as usize;
        let height = dimensions.height as usize;
        let mut cells = vec![EMPTY_GLYPH; width * height];

        for component in components {
            let bbox = component.bounding_box();
            let glyph = component.kind.glyph();

            let cols = bbox.x as usize..=(bbox.right() as usize).min(width.saturating_sub(1));
            for row in bbox.y as usize..=(bbox.bottom() as usize).min(height.saturating_sub(1)) {
                for col in cols.clone() {
                    cells[row * width + col] = glyph;
                }
            }
        }

        Self { width, height, cells }
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.height
    }

    /// Glyph at a cell, `None` outside the grid
    pub fn glyph(&self, col: usize, row: usize) -> Option<char> {
        if col >= self.width || row >= self.height {
            return None;
        }
        Some(self.cells[row * self.width + col])
    }

    /// Rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[char]> {
        self.cells.chunks(self.width)
    }

    /// Number of non-empty cells
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|&&c| c != EMPTY_GLYPH).count()
    }
}

/// Title line of a board
pub fn title_line(board: &Board) -> String {
    format!("*** Circuit Board ID: {} ***", board.id())
}

/// Tens and units ruler lines for a board `width` cells wide
///
/// The tens line always carries `width / 10 + 1` digits, even when the last
/// one has no column under it.
pub fn ruler_lines(width: u32) -> (String, String) {
    let offset = " ".repeat(LABEL_WIDTH);
    let tens_span = 10 * CELL_WIDTH;

    let mut tens = offset.clone();
    for i in 0..=width / 10 {
        tens.push_str(&format!("{:<1$}", i, tens_span));
    }

    let mut units = offset;
    for col in 0..width {
        units.push_str(&format!("{:<1$}", col % 10, CELL_WIDTH));
    }

    (tens, units)
}

/// One grid row with its index label
pub fn row_line(index: usize, glyphs: &[char]) -> String {
    // single-digit labels get one extra space so the cells line up
    let gap = if index > 9 { "  " } else { "   " };
    let cells: Vec<String> = glyphs.iter().map(char::to_string).collect();
    format!("{}{}{}", index, gap, cells.join(" "))
}

/// Text view of a board, one entry per line
pub fn render_lines(board: &Board) -> Vec<String> {
    let grid = Grid::rasterize(board);
    let (tens, units) = ruler_lines(board.width());

    let mut lines = Vec::with_capacity(grid.height() + 3);
    lines.push(title_line(board));
    lines.push(tens);
    lines.push(units);
    lines.extend(grid.rows().enumerate().map(|(i, row)| row_line(i, row)));
    lines
}

/// Text view of a board
pub fn render(board: &Board) -> String {
    render_lines(board).join("\n")
}
