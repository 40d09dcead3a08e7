//! Rolling window adapter for per-column sliding-window statistics.
//!
//! ## Purpose
//!
//! This module provides [`RollingWindow`], which drives a ring-buffer matrix
//! the way a time-series computation does: each new row forgets the oldest
//! one, and column sums, means, and variances are available over the rows
//! currently held.
//!
//! ## Design notes
//!
//! * **Storage**: One `RingBufferMatrix` of `capacity x columns`; no data moves on push.
//! * **Push protocol**: `roll_right`, then `set_row_to_zero` on the exposed row, then write.
//! * **Eviction**: Once full, each push hands back a copy of the evicted row.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Newest row**: Always logical row `capacity - 1`.
//! * **Filled rows**: Logical rows `capacity - len .. capacity`; the rest are zero.
//! * **Update Modes**: `Incremental` keeps running sums, `Full` recomputes them.
//! * **Compensated sums**: Running and recomputed sums both use Neumaier summation,
//!   so a large value entering and leaving the window does not absorb small ones.
//!
//! ## Invariants
//!
//! * `len` never exceeds `capacity`.
//! * All values in the window are finite.
//! * Rows are ordered oldest to newest in logical index order.
//!
//! ## Non-goals
//!
//! * This adapter does not compute weighted or exponentially decayed statistics.
//! * This adapter does not reorder rows or handle out-of-order timestamps.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{vec, vec::Vec};
#[cfg(feature = "std")]
use std::{vec, vec::Vec};

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::matrix::ring::RingBufferMatrix;
use crate::primitives::errors::RingMatrixError;
use crate::primitives::validator::Validator;

// ============================================================================
// Update Mode
// ============================================================================

/// How column sums are maintained as rows enter and leave the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UpdateMode {
    /// Recompute sums from storage on every query.
    Full,

    /// Keep running sums, adjusted by the entering and evicted rows.
    #[default]
    Incremental,
}

// ============================================================================
// Rolling Window
// ============================================================================

/// Fixed-capacity window of rows with per-column statistics.
#[derive(Debug, Clone)]
pub struct RollingWindow<T> {
    matrix: RingBufferMatrix<T>,
    len: usize,
    update_mode: UpdateMode,
    sums: Vec<T>,
    compensation: Vec<T>,
    evicted: Vec<T>,
}

impl<T: Float> RollingWindow<T> {
    /// Create an empty window holding up to `capacity` rows of `columns` values.
    pub fn new(capacity: usize, columns: usize) -> Result<Self, RingMatrixError> {
        Self::from_matrix(RingBufferMatrix::new(capacity, columns)?, UpdateMode::default())
    }

    /// Wrap an initialized matrix. Its current contents are discarded.
    pub fn from_matrix(
        mut matrix: RingBufferMatrix<T>,
        update_mode: UpdateMode,
    ) -> Result<Self, RingMatrixError> {
        if !matrix.is_initialized() {
            return Err(RingMatrixError::NotInitialized);
        }
        matrix.set_all_to_zero();

        let columns = matrix.columns();
        Ok(Self {
            matrix,
            len: 0,
            update_mode,
            sums: vec![T::zero(); columns],
            compensation: vec![T::zero(); columns],
            evicted: Vec::with_capacity(columns),
        })
    }

    // ========================================================================
    // Main API
    // ========================================================================

    /// Append a row as the newest entry.
    ///
    /// Returns the evicted oldest row once the window is full.
    pub fn push_row(&mut self, values: &[T]) -> Result<Option<&[T]>, RingMatrixError> {
        Validator::validate_row_values(values, self.columns())?;

        let full = self.is_full();
        if full {
            self.evicted.clear();
            self.evicted.extend_from_slice(self.matrix.row(0));
        }

        let newest = self.capacity() - 1;
        self.matrix.roll_right();
        self.matrix.set_row_to_zero(newest);
        self.matrix.row_mut(newest).copy_from_slice(values);

        if !full {
            self.len += 1;
        }

        if self.update_mode == UpdateMode::Incremental {
            if self.matrix.rotation_offset() == 0 {
                // Bound floating-point drift once per full rotation
                self.resync_sums();
            } else {
                for (c, &v) in values.iter().enumerate() {
                    neumaier_add(&mut self.sums[c], &mut self.compensation[c], v);
                    if full {
                        let out = -self.evicted[c];
                        neumaier_add(&mut self.sums[c], &mut self.compensation[c], out);
                    }
                }
            }
        }

        Ok(if full { Some(self.evicted.as_slice()) } else { None })
    }

    /// Drop every row. Capacity and update mode are kept.
    pub fn clear(&mut self) {
        self.matrix.set_all_to_zero();
        self.len = 0;
        self.sums.fill(T::zero());
        self.compensation.fill(T::zero());
        self.evicted.clear();
    }

    // ========================================================================
    // Statistics
    // ========================================================================

    /// Sum of column `column` over the rows in the window.
    pub fn column_sum(&self, column: usize) -> Option<T> {
        if column >= self.columns() || self.is_empty() {
            return None;
        }
        match self.update_mode {
            UpdateMode::Incremental => Some(self.sums[column] + self.compensation[column]),
            UpdateMode::Full => Some(self.sum_from_storage(column)),
        }
    }

    /// Mean of column `column` over the rows in the window.
    pub fn column_mean(&self, column: usize) -> Option<T> {
        let sum = self.column_sum(column)?;
        Some(sum / T::from(self.len)?)
    }

    /// Population variance of column `column` over the rows in the window.
    pub fn column_variance(&self, column: usize) -> Option<T> {
        let n = T::from(self.len)?;
        let mean = self.column_mean(column)?;
        let ss = self
            .filled_rows()
            .map(|r| {
                let d = self.matrix.get(r, column) - mean;
                d * d
            })
            .fold(T::zero(), |acc, v| acc + v);
        Some(ss / n)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Number of rows currently held.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    /// Maximum number of rows.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.matrix.rows()
    }

    #[inline]
    pub fn columns(&self) -> usize {
        self.matrix.columns()
    }

    #[inline]
    pub fn update_mode(&self) -> UpdateMode {
        self.update_mode
    }

    /// Most recently pushed row.
    pub fn latest(&self) -> Option<&[T]> {
        if self.is_empty() {
            return None;
        }
        Some(self.matrix.row(self.capacity() - 1))
    }

    /// Oldest row still in the window.
    pub fn oldest(&self) -> Option<&[T]> {
        if self.is_empty() {
            return None;
        }
        Some(self.matrix.row(self.capacity() - self.len))
    }

    /// Iterate rows from oldest to newest.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &[T]> + '_ {
        self.filled_rows().map(move |r| self.matrix.row(r))
    }

    /// Read-only view of the backing matrix.
    #[inline]
    pub fn matrix(&self) -> &RingBufferMatrix<T> {
        &self.matrix
    }

    // ========================================================================
    // Internal Helpers
    // ========================================================================

    #[inline]
    fn filled_rows(&self) -> core::ops::Range<usize> {
        self.capacity() - self.len..self.capacity()
    }

    // Compensated column sum as a `(sum, compensation)` pair.
    fn column_sum_parts(&self, column: usize) -> (T, T) {
        let mut sum = T::zero();
        let mut comp = T::zero();
        for r in self.filled_rows() {
            neumaier_add(&mut sum, &mut comp, self.matrix.get(r, column));
        }
        (sum, comp)
    }

    fn sum_from_storage(&self, column: usize) -> T {
        let (sum, comp) = self.column_sum_parts(column);
        sum + comp
    }

    fn resync_sums(&mut self) {
        for c in 0..self.columns() {
            let (sum, comp) = self.column_sum_parts(c);
            self.sums[c] = sum;
            self.compensation[c] = comp;
        }
        log::debug!("resynchronised running sums over {} rows", self.len);
    }
}

// Neumaier summation step: add `x` to `sum`, accumulating the lost low-order
// bits in `comp`. The true total is `sum + comp`.
#[inline]
fn neumaier_add<T: Float>(sum: &mut T, comp: &mut T, x: T) {
    let t = *sum + x;
    if sum.abs() >= x.abs() {
        *comp = *comp + ((*sum - t) + x);
    } else {
        *comp = *comp + ((x - t) + *sum);
    }
    *sum = t;
}
