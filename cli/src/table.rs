// SPDX-FileCopyrightText: 2026 Cursus Contributors
//
// SPDX-License-Identifier: Apache-2.0

use colored::{Color, Colorize};
use unicode_width::UnicodeWidthStr;

/// One column of a [`Table`]: how to render and style a cell for a row.
pub trait Column<T> {
    fn format(&self, data: &T) -> String;

    fn padding_direction(&self) -> PaddingDirection {
        PaddingDirection::Left
    }

    fn color(&self, _data: &T) -> Option<Color> {
        None
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddingDirection {
    Left,
    Right,
}

/// A plain-text aligned table over borrowed rows.
pub struct Table<'a, T, C: Column<T>> {
    columns: &'a [C],
    data: &'a [T],
}

impl<'a, T, C: Column<T>> Table<'a, T, C> {
    pub fn new(columns: &'a [C], data: &'a [T]) -> Self {
        Self { columns, data }
    }

    pub fn render(&self) -> String {
        let cells: Vec<Vec<String>> = self
            .data
            .iter()
            .map(|row| self.columns.iter().map(|col| col.format(row)).collect())
            .collect();

        let widths = column_max_widths(self.columns.len(), &cells);

        let mut out = String::new();
        for (row_cells, row) in cells.into_iter().zip(self.data) {
            let mut line = String::new();
            for (i, (col, cell)) in self.columns.iter().zip(row_cells).enumerate() {
                let last = i == self.columns.len() - 1;

                // The last column stays ragged when left-aligned.
                let cell = match col.padding_direction() {
                    PaddingDirection::Left if last => cell,
                    PaddingDirection::Left => pad(cell, widths[i], PaddingDirection::Left),
                    PaddingDirection::Right => pad(cell, widths[i], PaddingDirection::Right),
                };

                let cell = match col.color(row) {
                    Some(color) => cell.color(color).to_string(),
                    None => cell,
                };

                line.push_str(&cell);
                if !last {
                    line.push_str("  ");
                }
            }
            out.push_str(line.trim_end());
            out.push('\n');
        }
        out
    }
}

fn pad(cell: String, width: usize, direction: PaddingDirection) -> String {
    let fill = width.saturating_sub(cell.width());
    match direction {
        PaddingDirection::Left => format!("{cell}{}", " ".repeat(fill)),
        PaddingDirection::Right => format!("{}{cell}", " ".repeat(fill)),
    }
}

fn column_max_widths(columns: usize, cells: &[Vec<String>]) -> Vec<usize> {
    let mut widths = vec![0; columns];
    for row in cells {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.width());
        }
    }
    widths
}
