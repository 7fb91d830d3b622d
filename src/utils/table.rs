//! Table rendering utilities for CLI outputs.

use crate::utils::formatting::{pad_right, strip_ansi, truncate};
use unicode_width::UnicodeWidthStr;

pub struct Column {
    pub header: String,
    pub width: usize,
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
    max_width: Option<usize>,
}

fn visible_width(s: &str) -> usize {
    UnicodeWidthStr::width(strip_ansi(s).as_str())
}

impl Table {
    pub fn new<S: AsRef<str>>(headers: &[S]) -> Self {
        let columns = headers
            .iter()
            .map(|h| Column {
                header: h.as_ref().to_string(),
                width: visible_width(h.as_ref()),
            })
            .collect();

        Self {
            columns,
            rows: Vec::new(),
            max_width: None,
        }
    }

    /// Cap every column to `width` characters, truncating longer cells.
    pub fn with_max_width(mut self, width: usize) -> Self {
        self.max_width = Some(width);
        for col in &mut self.columns {
            col.width = col.width.min(width);
        }
        self
    }

    /// Add a row; missing cells render empty, extra cells are dropped.
    pub fn add_row(&mut self, mut row: Vec<String>) {
        row.resize(self.columns.len(), String::new());

        for (cell, col) in row.iter_mut().zip(self.columns.iter_mut()) {
            if let Some(max) = self.max_width {
                *cell = truncate(cell, max);
            }
            col.width = col.width.max(visible_width(cell));
        }
        self.rows.push(row);
    }

    pub fn render(&self) -> String {
        let mut out = String::new();

        // Header
        let header: Vec<String> = self
            .columns
            .iter()
            .map(|c| pad_right(&truncate(&c.header, c.width), c.width))
            .collect();
        out.push_str(header.join(" ").trim_end());
        out.push('\n');

        // Rows
        for row in &self.rows {
            let cells: Vec<String> = row
                .iter()
                .zip(&self.columns)
                .map(|(cell, col)| pad_right(cell, col.width))
                .collect();
            out.push_str(cells.join(" ").trim_end());
            out.push('\n');
        }

        out
    }
}
