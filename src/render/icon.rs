//! Terminal rendering of a parsed icon.

use crate::parser::icon::IconDocument;

/// Character printed for a set cell.
const FILLED_CELL: char = 'x';
/// Character printed for an unset cell.
const BLANK_CELL: char = ' ';

impl IconDocument {
    /// Renders the grid as one text line per row: an `x` for every set cell,
    /// a blank for everything else.
    pub fn render(&self) -> Vec<String> {
        self.rows()
            .map(|row| {
                row.map(|set| if set { FILLED_CELL } else { BLANK_CELL })
                    .collect()
            })
            .collect()
    }

    pub fn rows(&self) -> RowIter<'_> {
        self.into_iter()
    }
}

impl<'a> IntoIterator for &'a IconDocument {
    type IntoIter = RowIter<'a>;
    type Item = CellIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        RowIter { icon: self, row: 0 }
    }
}

/// Iterates over the grid rows of an icon.
pub struct RowIter<'a> {
    icon: &'a IconDocument,
    row: usize,
}

impl<'a> Iterator for RowIter<'a> {
    type Item = CellIter<'a>;

    /// Yields the rows of the grid
    fn next(&mut self) -> Option<Self::Item> {
        if self.row >= self.icon.height() {
            return None;
        }

        let row = CellIter {
            icon: self.icon,
            row: self.row,
            col: 0,
        };
        self.row += 1;

        Some(row)
    }
}

/// Iterates over the cells of one grid row.
pub struct CellIter<'a> {
    icon: &'a IconDocument,
    row: usize,
    col: usize,
}

impl Iterator for CellIter<'_> {
    type Item = bool;

    /// Yields whether each cell of the row is set
    fn next(&mut self) -> Option<Self::Item> {
        if self.col >= self.icon.width() {
            return None;
        }

        let set = self.icon.is_set(self.row, self.col);
        self.col += 1;

        Some(set)
    }
}
