//! Box drawing text for a maze that grows one row at a time.
//!
//! Each row is drawn as two lines: the middle band holding the cell bodies and right walls, then the
//! junction band holding the down walls, which is also the top edge of the next row. The top and
//! bottom borders are drawn once each. Every band is a single left to right scan of the row.

use crate::cells::{Cell, Wall};
use crate::row::Row;
use crate::units::ColumnsCount;

const WALL_LR_3: &str = "───";
const WALL_UD: &str = "│";
const WALL_LD: &str = "┐";
const WALL_RU: &str = "└";
const WALL_LU: &str = "┘";
const WALL_RD: &str = "┌";
const WALL_LRU: &str = "┴";
const WALL_LRD: &str = "┬";
const WALL_LRUD: &str = "┼";
const WALL_RUD: &str = "├";
const WALL_LUD: &str = "┤";
const OPEN_BODY: &str = "   ";
const OPEN_SIDE: &str = " ";

/// What to show inside a cell.
pub trait RowDisplay {
    /// Render the contents of a cell as text.
    /// The String should be 3 glyphs long, padded if required.
    fn render_cell_body(&self, _: &Cell) -> String {
        String::from(OPEN_BODY)
    }
}

/// Empty cells.
#[derive(Debug, Copy, Clone, Default)]
pub struct BlankDisplay;
impl RowDisplay for BlankDisplay {}

/// Shows the set each cell belongs to.
///
/// Ids up to 999 fit the cell. Longer ids push the rest of the band to the right.
#[derive(Debug, Copy, Clone, Default)]
pub struct SetIdDisplay;
impl RowDisplay for SetIdDisplay {
    fn render_cell_body(&self, cell: &Cell) -> String {
        let set_id = cell.set_id().0;
        if set_id < 10 {
            format!(" {} ", set_id)
        } else {
            format!("{:>3}", set_id)
        }
    }
}

/// The first line of the maze: `┌───┬───┐`.
pub fn top_border(columns: ColumnsCount) -> String {
    border(columns, WALL_RD, WALL_LRD, WALL_LD)
}

/// The last line of the maze: `└───┴───┘`.
pub fn bottom_border(columns: ColumnsCount) -> String {
    border(columns, WALL_RU, WALL_LRU, WALL_LU)
}

/// The cell bodies of a row with a `│` wherever a right wall stands.
pub fn middle_band(row: &Row, display: &dyn RowDisplay) -> String {
    let mut output = String::from(WALL_UD);
    for cell in row.cells() {
        output.push_str(&display.render_cell_body(cell));
        output.push_str(if cell.has_wall(Wall::Right) { WALL_UD } else { OPEN_SIDE });
    }
    output
}

/// The line shared by a row and the one below it: `───` wherever a down wall stands.
pub fn junction_band(row: &Row) -> String {
    let mut output = String::from(WALL_RUD);
    let last_index = row.len().saturating_sub(1);

    for (index, cell) in row.cells().iter().enumerate() {
        output.push_str(if cell.has_wall(Wall::Down) { WALL_LR_3 } else { OPEN_BODY });
        output.push_str(if index == last_index { WALL_LUD } else { WALL_LRUD });
    }
    output
}

fn border(columns: ColumnsCount, left: &str, join: &str, right: &str) -> String {
    let ColumnsCount(columns_count) = columns;
    let mut output = String::from(left);
    for index in 0..columns_count {
        if index > 0 {
            output.push_str(join);
        }
        output.push_str(WALL_LR_3);
    }
    output.push_str(right);
    output
}
