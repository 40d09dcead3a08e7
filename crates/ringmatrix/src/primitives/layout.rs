//! Row mapping primitives for the ring-buffer matrix.
//!
//! This module owns the rotation offset and the arithmetic that maps a
//! logical `(row, column)` coordinate onto an offset in the contiguous block:
//! `((row + offset) % rows) * columns + column`.

// External dependencies
use core::ops::Range;

// Logical-to-physical row mapping for a `rows x columns` block.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct RowMap {
    // Number of rows (0 only while uninitialized).
    rows: usize,

    // Number of columns.
    columns: usize,

    // Physical row currently holding logical row 0, always in `[0, rows)`.
    offset: usize,
}

impl RowMap {
    // Mapping with no rotation applied.
    #[inline]
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            rows,
            columns,
            offset: 0,
        }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn columns(&self) -> usize {
        self.columns
    }

    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    // Check whether a logical coordinate lies inside the matrix.
    #[inline]
    pub fn contains(&self, row: usize, column: usize) -> bool {
        row < self.rows && column < self.columns
    }

    // Physical row backing the given logical row.
    #[inline]
    pub fn physical_row(&self, row: usize) -> usize {
        debug_assert!(self.rows > 0, "physical_row: matrix has no rows");
        (row + self.offset) % self.rows
    }

    // Offset of a logical coordinate in the flat block.
    #[inline]
    pub fn physical_index(&self, row: usize, column: usize) -> usize {
        debug_assert!(
            column < self.columns,
            "physical_index: column {} out of bounds ({} columns)",
            column,
            self.columns
        );
        self.physical_row(row) * self.columns + column
    }

    // Flat range covering the physical row behind a logical row.
    #[inline]
    pub fn row_range(&self, row: usize) -> Range<usize> {
        let start = self.physical_row(row) * self.columns;
        start..start + self.columns
    }

    // Forget the oldest row: logical row 1 becomes logical row 0.
    #[inline]
    pub fn advance(&mut self) {
        debug_assert!(self.rows > 0, "advance: matrix has no rows");
        self.offset = (self.offset + 1) % self.rows;
    }

    // Equivalent to `n` calls to `advance`.
    #[inline]
    pub fn advance_by(&mut self, n: usize) {
        debug_assert!(self.rows > 0, "advance_by: matrix has no rows");
        self.offset = (self.offset + n % self.rows) % self.rows;
    }
}
