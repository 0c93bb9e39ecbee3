//! # CNet Column Writer
//!
//! File: cli/src/common/tabwriter.rs
//!
//! ## Overview
//!
//! A small buffering writer that aligns rows of cells into padded columns,
//! in the spirit of Go's `text/tabwriter`. Rows are buffered until `flush`
//! is called, at which point column widths are computed over the whole
//! buffer and every row is emitted aligned.
//!
//! Because alignment needs the full set of rows before anything can be
//! written, callers must treat `flush` as part of the output contract:
//! nothing reaches the underlying writer before it, and its error is the
//! error of the whole write.
//!
//! ## Layout rules
//!
//! - Every column except the last cell of each row is padded with the pad
//!   character to `max(minwidth, widest cell + padding)`.
//! - The final cell of a row is written as-is, and assembled lines are
//!   trimmed of trailing pad characters so empty trailing cells do not
//!   leave whitespace behind.
//!
use std::io::{self, Write};

/// Default minimum column width, matching the listing layout used by the
/// tabular renderers (`new` == `with_layout(out, 4, 4, ' ')`).
const DEFAULT_MINWIDTH: usize = 4;
/// Default padding appended after each cell before the next column starts.
const DEFAULT_PADDING: usize = 4;

/// A buffering, column-aligning line writer.
///
/// Rows accumulate in memory via [`ColumnWriter::write_row`]; the aligned
/// output is produced by [`ColumnWriter::flush`].
pub struct ColumnWriter<W: Write> {
    out: W,
    minwidth: usize,
    padding: usize,
    padchar: char,
    rows: Vec<Vec<String>>,
}

impl<W: Write> ColumnWriter<W> {
    /// Creates a writer with the standard listing layout.
    pub fn new(out: W) -> Self {
        Self::with_layout(out, DEFAULT_MINWIDTH, DEFAULT_PADDING, ' ')
    }

    /// Creates a writer with an explicit layout.
    ///
    /// * `minwidth`: minimum width of any padded column.
    /// * `padding`: cells are padded with at least this many `padchar`s
    ///   before the next column begins.
    pub fn with_layout(out: W, minwidth: usize, padding: usize, padchar: char) -> Self {
        Self {
            out,
            minwidth,
            padding,
            padchar,
            rows: Vec::new(),
        }
    }

    /// Buffers one row of cells. Nothing is written until `flush`.
    pub fn write_row<S: AsRef<str>>(&mut self, cells: &[S]) {
        self.rows
            .push(cells.iter().map(|c| c.as_ref().to_string()).collect());
    }

    /// Computes column widths over all buffered rows, writes every row
    /// aligned, clears the buffer, and flushes the underlying writer.
    pub fn flush(&mut self) -> io::Result<()> {
        let ncols = self.rows.iter().map(Vec::len).max().unwrap_or(0);
        let mut widths = vec![self.minwidth; ncols];
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                // The last cell of a row is not padded, so it does not
                // contribute to the column width.
                if i + 1 < row.len() {
                    widths[i] = widths[i].max(cell.chars().count() + self.padding);
                }
            }
        }

        for row in &self.rows {
            let mut line = String::new();
            for (i, cell) in row.iter().enumerate() {
                line.push_str(cell);
                if i + 1 < row.len() {
                    for _ in cell.chars().count()..widths[i] {
                        line.push(self.padchar);
                    }
                }
            }
            // Empty trailing cells would otherwise leave the pad run behind.
            let trimmed = line.trim_end_matches(self.padchar);
            self.out.write_all(trimmed.as_bytes())?;
            self.out.write_all(b"\n")?;
        }
        self.rows.clear();
        self.out.flush()
    }

    /// Consumes the writer, returning the underlying sink. Intended for
    /// tests that render into an in-memory buffer.
    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}
