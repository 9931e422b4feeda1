//! Pure formatting of matrices for a presentation layer.

use std::fmt;

use itertools::Itertools;

use crate::field::Matrix;

/// A matrix rendered cell by cell, ready for a text or HTML view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatrixTable {
    pub rows: Vec<Vec<String>>,
}

impl MatrixTable {
    /// Renders as an HTML table with one bordered cell per entry.
    ///
    /// # Example
    ///
    /// ```
    /// # use lu_cipher::display::matrix_to_display;
    /// let html = matrix_to_display(&vec![vec![1, 2]]).to_html();
    /// assert_eq!(
    ///     html,
    ///     r#"<table class="border-collapse"><tbody><tr><td class="px-2 py-1 border">1</td><td class="px-2 py-1 border">2</td></tr></tbody></table>"#
    /// );
    /// ```
    pub fn to_html(&self) -> String {
        let body = self
            .rows
            .iter()
            .map(|row| {
                let cells = row
                    .iter()
                    .map(|v| format!(r#"<td class="px-2 py-1 border">{}</td>"#, v))
                    .join("");
                format!("<tr>{}</tr>", cells)
            })
            .join("");
        format!(r#"<table class="border-collapse"><tbody>{}</tbody></table>"#, body)
    }

    fn column_width(&self) -> usize {
        self.rows.iter().flatten().map(|c| c.len()).max().unwrap_or(0)
    }
}

/// Right-aligned grid, one row per line, columns separated by a space.
impl fmt::Display for MatrixTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.column_width();
        let lines = self.rows.iter().map(|row| {
            row.iter()
                .map(|cell| format!("{:>width$}", cell, width = width))
                .join(" ")
        });
        write!(f, "{}", lines.format("\n"))
    }
}

pub fn matrix_to_display(matrix: &Matrix) -> MatrixTable {
    MatrixTable {
        rows: matrix
            .iter()
            .map(|row| row.iter().map(|v| v.to_string()).collect())
            .collect(),
    }
}
