//! Ring-buffer-backed dense matrix.
//!
//! ## Purpose
//!
//! This module provides [`RingBufferMatrix`], a fixed-capacity `rows x columns`
//! grid stored in one contiguous block. Rolling the matrix forgets the oldest
//! logical row in O(1) by advancing a rotation offset instead of moving data.
//!
//! ## Design notes
//!
//! * **Storage**: A single `Box<[T]>` allocated once, zero-filled, released on drop.
//! * **Two states**: `Uninitialized` (no storage) and `Ready`; the transition is one-way.
//! * **Access tiers**:
//!   - fast path (`get`, `get_mut`, `row`, `copy_row`, ...) with `debug_assert!` only;
//!   - raw path (`get_unchecked`) that also skips slice bounds checks;
//!   - checked path (`try_*`) returning [`RingMatrixError`].
//! * **Ownership**: `Clone` deep-copies the block. The type is never `Copy`.
//!
//! ## Key concepts
//!
//! * **Logical row**: Index as seen by the caller; row 0 is the oldest.
//! * **Physical row**: Position of that row inside the block.
//! * **Roll**: `roll_right` remaps logical row 1 to 0 and exposes the old row 0
//!   as logical row `rows - 1`, with its data still in place.
//!
//! ## Invariants
//!
//! * Element `(r, c)` lives at `((r + offset) % rows) * columns + c`.
//! * The block length equals `rows * columns` and never changes once `Ready`.
//! * `rows * columns` never exceeds the ceiling the matrix was configured with.
//!
//! ## Non-goals
//!
//! * Thread safety; callers must serialize access to a shared matrix.
//! * Resizing after initialization.
//! * Persistence or serialization.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::boxed::Box;
#[cfg(feature = "std")]
use std::boxed::Box;

// External dependencies
use core::ops::{Index, IndexMut};
use num_traits::Zero;

// Internal dependencies
use crate::primitives::errors::RingMatrixError;
use crate::primitives::layout::RowMap;
use crate::primitives::storage::{DEFAULT_MAX_ELEMENTS, empty_block, zero_fill, zeroed_block};
use crate::primitives::validator::Validator;

// ============================================================================
// Matrix State
// ============================================================================

/// Lifecycle state of a [`RingBufferMatrix`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixState {
    /// No storage; only `initialize` is meaningful.
    Uninitialized,

    /// Storage allocated; every operation is available.
    Ready,
}

// ============================================================================
// RingBufferMatrix
// ============================================================================

/// Fixed-size matrix whose oldest row can be forgotten in O(1).
#[derive(Debug, Clone)]
pub struct RingBufferMatrix<T> {
    storage: Box<[T]>,
    map: RowMap,
    max_elements: usize,
}

impl<T> Default for RingBufferMatrix<T> {
    fn default() -> Self {
        Self::with_max_elements(DEFAULT_MAX_ELEMENTS)
    }
}

impl<T> RingBufferMatrix<T> {
    /// Create an uninitialized matrix with a custom element ceiling.
    pub fn with_max_elements(max_elements: usize) -> Self {
        Self {
            storage: empty_block(),
            map: RowMap::default(),
            max_elements,
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Current lifecycle state.
    #[inline]
    pub fn state(&self) -> MatrixState {
        if self.map.rows() == 0 {
            MatrixState::Uninitialized
        } else {
            MatrixState::Ready
        }
    }

    /// Whether storage has been allocated.
    #[inline]
    pub fn is_initialized(&self) -> bool {
        self.state() == MatrixState::Ready
    }

    /// Number of rows (0 while uninitialized).
    #[inline]
    pub fn rows(&self) -> usize {
        self.map.rows()
    }

    /// Number of columns (0 while uninitialized).
    #[inline]
    pub fn columns(&self) -> usize {
        self.map.columns()
    }

    /// Number of stored elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    /// Whether the matrix stores no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// Element ceiling enforced by `initialize`.
    #[inline]
    pub fn max_elements(&self) -> usize {
        self.max_elements
    }

    /// Physical row currently holding logical row 0.
    #[inline]
    pub fn rotation_offset(&self) -> usize {
        self.map.offset()
    }

    // ========================================================================
    // Rotation
    // ========================================================================

    /// Forget the oldest row.
    ///
    /// Logical row 1 becomes row 0, and the slot that held row 0 becomes row
    /// `rows - 1`. No data is moved or cleared; call [`set_row_to_zero`]
    /// on the exposed row before refilling it.
    ///
    /// [`set_row_to_zero`]: Self::set_row_to_zero
    #[inline]
    pub fn roll_right(&mut self) {
        self.map.advance();
    }

    /// Roll `n` times in one step.
    #[inline]
    pub fn roll_right_by(&mut self, n: usize) {
        self.map.advance_by(n);
    }

    // ========================================================================
    // Row Views
    // ========================================================================

    /// Borrow a logical row.
    #[inline]
    pub fn row(&self, row: usize) -> &[T] {
        debug_assert!(row < self.rows(), "row: {} out of bounds", row);
        &self.storage[self.map.row_range(row)]
    }

    /// Mutably borrow a logical row.
    #[inline]
    pub fn row_mut(&mut self, row: usize) -> &mut [T] {
        debug_assert!(row < self.rows(), "row_mut: {} out of bounds", row);
        let range = self.map.row_range(row);
        &mut self.storage[range]
    }

    /// Checked version of [`row`](Self::row).
    pub fn try_row(&self, row: usize) -> Result<&[T], RingMatrixError> {
        Validator::validate_row(&self.map, row)?;
        Ok(&self.storage[self.map.row_range(row)])
    }

    /// Iterate logical rows from oldest (row 0) to newest.
    pub fn iter_rows(&self) -> impl ExactSizeIterator<Item = &[T]> + '_ {
        (0..self.rows()).map(move |r| &self.storage[self.map.row_range(r)])
    }

    // ========================================================================
    // Element Access
    // ========================================================================

    /// Mutable reference to an element.
    #[inline]
    pub fn get_mut(&mut self, row: usize, column: usize) -> &mut T {
        debug_assert!(
            self.map.contains(row, column),
            "get_mut: ({}, {}) out of bounds",
            row,
            column
        );
        let idx = self.map.physical_index(row, column);
        &mut self.storage[idx]
    }

    /// Checked version of [`get_mut`](Self::get_mut).
    pub fn try_get_mut(&mut self, row: usize, column: usize) -> Result<&mut T, RingMatrixError> {
        Validator::validate_index(&self.map, row, column)?;
        let idx = self.map.physical_index(row, column);
        Ok(&mut self.storage[idx])
    }

    /// Reference to an element without any bounds checking.
    ///
    /// # Safety
    ///
    /// The matrix must be initialized, `row < rows()` and `column < columns()`.
    #[inline]
    pub unsafe fn get_unchecked(&self, row: usize, column: usize) -> &T {
        let idx = self.map.physical_index(row, column);
        unsafe { self.storage.get_unchecked(idx) }
    }

    /// Mutable reference to an element without any bounds checking.
    ///
    /// # Safety
    ///
    /// The matrix must be initialized, `row < rows()` and `column < columns()`.
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, row: usize, column: usize) -> &mut T {
        let idx = self.map.physical_index(row, column);
        unsafe { self.storage.get_unchecked_mut(idx) }
    }
}

impl<T: Copy + Zero> RingBufferMatrix<T> {
    /// Allocate a zero-filled `rows x columns` matrix with the default ceiling.
    pub fn new(rows: usize, columns: usize) -> Result<Self, RingMatrixError> {
        let mut matrix = Self::default();
        matrix.initialize(rows, columns)?;
        Ok(matrix)
    }

    /// Allocate storage for an uninitialized matrix.
    ///
    /// A ready matrix is left untouched and `AlreadyInitialized` is returned
    /// with its existing dimensions. On any error the matrix stays uninitialized.
    pub fn initialize(&mut self, rows: usize, columns: usize) -> Result<(), RingMatrixError> {
        if self.is_initialized() {
            log::warn!(
                "Ignoring initialize({}, {}) on a matrix already allocated as {} x {}",
                rows,
                columns,
                self.rows(),
                self.columns()
            );
            return Err(RingMatrixError::AlreadyInitialized {
                rows: self.rows(),
                columns: self.columns(),
            });
        }

        let elements = Validator::validate_dimensions(rows, columns, self.max_elements)?;
        self.storage = zeroed_block(elements)?;
        self.map = RowMap::new(rows, columns);
        log::debug!("allocated {} x {} ring matrix", rows, columns);
        Ok(())
    }

    /// Read an element.
    #[inline]
    pub fn get(&self, row: usize, column: usize) -> T {
        debug_assert!(
            self.map.contains(row, column),
            "get: ({}, {}) out of bounds",
            row,
            column
        );
        self.storage[self.map.physical_index(row, column)]
    }

    /// Checked version of [`get`](Self::get).
    pub fn try_get(&self, row: usize, column: usize) -> Result<T, RingMatrixError> {
        Validator::validate_index(&self.map, row, column)?;
        Ok(self.storage[self.map.physical_index(row, column)])
    }

    /// Write an element.
    #[inline]
    pub fn set(&mut self, row: usize, column: usize, value: T) {
        *self.get_mut(row, column) = value;
    }

    /// Copy a logical row into the front of `dest`.
    ///
    /// `dest` must hold at least `columns()` elements.
    #[inline]
    pub fn copy_row(&self, row: usize, dest: &mut [T]) {
        debug_assert!(
            dest.len() >= self.columns(),
            "copy_row: buffer of {} for {} columns",
            dest.len(),
            self.columns()
        );
        dest[..self.columns()].copy_from_slice(self.row(row));
    }

    /// Checked version of [`copy_row`](Self::copy_row).
    pub fn try_copy_row(&self, row: usize, dest: &mut [T]) -> Result<(), RingMatrixError> {
        Validator::validate_row(&self.map, row)?;
        Validator::validate_buffer(dest.len(), self.columns())?;
        dest[..self.columns()].copy_from_slice(&self.storage[self.map.row_range(row)]);
        Ok(())
    }

    /// Zero a logical row, typically the one exposed by [`roll_right`](Self::roll_right).
    #[inline]
    pub fn set_row_to_zero(&mut self, row: usize) {
        zero_fill(self.row_mut(row));
    }

    /// Checked version of [`set_row_to_zero`](Self::set_row_to_zero).
    pub fn try_set_row_to_zero(&mut self, row: usize) -> Result<(), RingMatrixError> {
        Validator::validate_row(&self.map, row)?;
        let range = self.map.row_range(row);
        zero_fill(&mut self.storage[range]);
        Ok(())
    }

    /// Zero every element. The rotation offset is kept.
    pub fn set_all_to_zero(&mut self) {
        zero_fill(&mut self.storage);
    }
}

// ============================================================================
// Indexing
// ============================================================================

impl<T> Index<(usize, usize)> for RingBufferMatrix<T> {
    type Output = T;

    #[inline]
    fn index(&self, (row, column): (usize, usize)) -> &T {
        debug_assert!(self.map.contains(row, column));
        &self.storage[self.map.physical_index(row, column)]
    }
}

impl<T> IndexMut<(usize, usize)> for RingBufferMatrix<T> {
    #[inline]
    fn index_mut(&mut self, (row, column): (usize, usize)) -> &mut T {
        self.get_mut(row, column)
    }
}
