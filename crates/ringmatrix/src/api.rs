//! High-level API for building ring-buffer matrices.
//!
//! ## Purpose
//!
//! This module provides the user-facing entry point for configuring a matrix
//! or a rolling window with a fluent builder, instead of calling
//! `RingBufferMatrix::with_max_elements` and `initialize` by hand.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder; only `rows` and `columns` are required.
//! * **Validated**: Parameters are validated when `.build()` is called.
//! * **Single assignment**: Setting a parameter twice is reported as an error.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`RingMatrixBuilder`] via `RingMatrix::new()`.
//! 2. Chain configuration methods (`.rows()`, `.columns()`, `.max_elements()`, ...).
//! 3. Call `.build()` for a matrix or `.build_window()` for a rolling window.

// External dependencies
use num_traits::{Float, Zero};

// Internal dependencies
use crate::primitives::storage::DEFAULT_MAX_ELEMENTS;
use crate::primitives::validator::Validator;

// Publicly re-exported types
pub use crate::adapters::rolling::{RollingWindow, UpdateMode};
pub use crate::matrix::ring::{MatrixState, RingBufferMatrix};
pub use crate::primitives::errors::RingMatrixError;

/// Fluent builder for ring-buffer matrices and rolling windows.
#[derive(Debug, Clone, Default)]
pub struct RingMatrixBuilder {
    /// Number of rows (window capacity).
    pub rows: Option<usize>,

    /// Number of columns.
    pub columns: Option<usize>,

    /// Ceiling on `rows * columns`.
    pub max_elements: Option<usize>,

    /// Running-sum maintenance (rolling windows only).
    pub update_mode: Option<UpdateMode>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl RingMatrixBuilder {
    /// Create a new builder with nothing configured.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of rows.
    pub fn rows(mut self, rows: usize) -> Self {
        if self.rows.is_some() {
            self.duplicate_param = Some("rows");
        }
        self.rows = Some(rows);
        self
    }

    /// Set the number of columns.
    pub fn columns(mut self, columns: usize) -> Self {
        if self.columns.is_some() {
            self.duplicate_param = Some("columns");
        }
        self.columns = Some(columns);
        self
    }

    /// Override the element ceiling (default 1,000,000).
    pub fn max_elements(mut self, limit: usize) -> Self {
        if self.max_elements.is_some() {
            self.duplicate_param = Some("max_elements");
        }
        self.max_elements = Some(limit);
        self
    }

    /// Set how a rolling window maintains its column sums.
    pub fn update_mode(mut self, mode: UpdateMode) -> Self {
        if self.update_mode.is_some() {
            self.duplicate_param = Some("update_mode");
        }
        self.update_mode = Some(mode);
        self
    }

    // ========================================================================
    // Build
    // ========================================================================

    /// Build an initialized, zero-filled matrix.
    pub fn build<T: Copy + Zero>(self) -> Result<RingBufferMatrix<T>, RingMatrixError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let rows = Validator::validate_required(self.rows, "rows")?;
        let columns = Validator::validate_required(self.columns, "columns")?;
        let limit = self.max_elements.unwrap_or(DEFAULT_MAX_ELEMENTS);
        Validator::validate_limit(limit)?;

        let mut matrix = RingBufferMatrix::with_max_elements(limit);
        matrix.initialize(rows, columns)?;
        Ok(matrix)
    }

    /// Build an empty rolling window of `rows` capacity.
    pub fn build_window<T: Float>(self) -> Result<RollingWindow<T>, RingMatrixError> {
        let update_mode = self.update_mode.unwrap_or_default();
        let matrix = self.build()?;
        RollingWindow::from_matrix(matrix, update_mode)
    }
}
