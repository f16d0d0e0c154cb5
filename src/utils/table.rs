//! Plain-text table rendering for report output.
//!
//! Every command produces an ordered list of string rows; this module turns
//! them into the aligned table written to stdout. Column widths are computed
//! from the data: each column is as wide as its header or its longest cell,
//! whichever is larger. Count columns are right-justified, text columns
//! left-justified.
//!
//! An empty result still renders the header and separator lines, so a run
//! with zero matches produces a well-formed (if empty) report.

/// Justification of a column's cells and header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

struct Column {
    header: String,
    align: Align,
}

/// An ordered set of rows under fixed column headers.
pub struct Table {
    columns: Vec<Column>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Creates a table with the given `(header, alignment)` columns.
    pub fn new(columns: &[(&str, Align)]) -> Self {
        Self {
            columns: columns
                .iter()
                .map(|(header, align)| Column {
                    header: (*header).to_string(),
                    align: *align,
                })
                .collect(),
            rows: Vec::new(),
        }
    }

    /// Appends a data row. The cell count must match the column count.
    pub fn add_row(&mut self, cells: Vec<String>) {
        debug_assert_eq!(cells.len(), self.columns.len());
        self.rows.push(cells);
    }

    /// Renders the table: header line, dash separator sized to the full row
    /// width, then one line per row. Trailing whitespace is trimmed.
    pub fn render(&self) -> String {
        let widths: Vec<usize> = self
            .columns
            .iter()
            .enumerate()
            .map(|(i, col)| {
                self.rows
                    .iter()
                    .map(|row| row[i].len())
                    .max()
                    .unwrap_or(0)
                    .max(col.header.len())
            })
            .collect();

        // sum of column widths plus one space between adjacent columns
        let total_width = widths.iter().sum::<usize>() + widths.len().saturating_sub(1);

        let mut out = String::new();
        out.push_str(&self.format_line(
            &self
                .columns
                .iter()
                .map(|c| c.header.as_str())
                .collect::<Vec<_>>(),
            &widths,
        ));
        out.push('\n');
        out.push_str(&"-".repeat(total_width));
        for row in &self.rows {
            out.push('\n');
            let cells: Vec<&str> = row.iter().map(String::as_str).collect();
            out.push_str(&self.format_line(&cells, &widths));
        }
        out
    }

    fn format_line(&self, cells: &[&str], widths: &[usize]) -> String {
        let mut line = String::new();
        for (i, cell) in cells.iter().enumerate() {
            if i > 0 {
                line.push(' ');
            }
            match self.columns[i].align {
                Align::Left => line.push_str(&format!("{:<width$}", cell, width = widths[i])),
                Align::Right => line.push_str(&format!("{:>width$}", cell, width = widths[i])),
            }
        }
        line.trim_end().to_string()
    }
}
