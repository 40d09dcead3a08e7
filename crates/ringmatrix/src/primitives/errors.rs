//! Error types for ring-buffer matrix operations.
//!
//! ## Purpose
//!
//! This module defines every error condition the crate reports: allocation
//! failures at initialization time, rejected re-initialization, and the
//! failures of the checked access path and the rolling-window adapter.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors include the offending values (e.g., requested vs. allowed elements).
//! * **Terminal allocation errors**: Allocation errors leave the matrix uninitialized; nothing is retried.
//! * **No-std**: Supports `no_std` environments by using `alloc` for dynamic messages.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Allocation**: Zero rows, ceiling violations, and allocator refusal.
//! 2. **Lifecycle**: Re-initializing a ready matrix, or using an uninitialized one.
//! 3. **Checked access**: Out-of-range coordinates and undersized destination buffers.
//! 4. **Configuration**: Builder parameters that are missing, repeated, or invalid.
//!
//! ## Non-goals
//!
//! * The unchecked fast path never produces these errors.
//! * This module does not perform the validation logic itself.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for ring-buffer matrix operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RingMatrixError {
    /// A matrix needs at least one row; the rotation arithmetic is modulo `rows`.
    ZeroRows,

    /// `rows * columns` exceeds the configured element ceiling (or overflows `usize`).
    AllocationLimitExceeded {
        /// Requested number of rows.
        rows: usize,
        /// Requested number of columns.
        columns: usize,
        /// Maximum number of elements allowed.
        limit: usize,
    },

    /// The allocator could not provide the storage block.
    AllocationFailure {
        /// Number of elements that were requested.
        elements: usize,
    },

    /// `initialize` was called on a matrix that already owns storage.
    AlreadyInitialized {
        /// Rows of the existing storage.
        rows: usize,
        /// Columns of the existing storage.
        columns: usize,
    },

    /// The matrix has no storage yet.
    NotInitialized,

    /// Logical coordinate outside the matrix.
    IndexOutOfRange {
        /// Requested logical row.
        row: usize,
        /// Requested column.
        column: usize,
        /// Number of rows in the matrix.
        rows: usize,
        /// Number of columns in the matrix.
        columns: usize,
    },

    /// Logical row outside the matrix.
    RowOutOfRange {
        /// Requested logical row.
        row: usize,
        /// Number of rows in the matrix.
        rows: usize,
    },

    /// Destination buffer is shorter than a row.
    BufferTooSmall {
        /// Length of the buffer provided.
        got: usize,
        /// Minimum required length (the column count).
        min: usize,
    },

    /// A pushed row does not have exactly `columns` values.
    RowLengthMismatch {
        /// Number of columns in the window.
        expected: usize,
        /// Number of values provided.
        got: usize,
    },

    /// Input data contains NaN or infinite values.
    InvalidNumericValue(String),

    /// The element ceiling must be at least 1.
    InvalidLimit(usize),

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },

    /// Required parameter was never set in the builder.
    MissingParameter {
        /// Name of the missing parameter.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for RingMatrixError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::ZeroRows => write!(f, "Invalid rows: 0 (must be at least 1)"),
            Self::AllocationLimitExceeded {
                rows,
                columns,
                limit,
            } => {
                write!(
                    f,
                    "Allocation limit exceeded: {rows} x {columns} elements requested, limit is {limit}"
                )
            }
            Self::AllocationFailure { elements } => {
                write!(f, "Allocation failed for {elements} elements")
            }
            Self::AlreadyInitialized { rows, columns } => {
                write!(f, "Matrix already initialized as {rows} x {columns}")
            }
            Self::NotInitialized => write!(f, "Matrix is not initialized"),
            Self::IndexOutOfRange {
                row,
                column,
                rows,
                columns,
            } => {
                write!(
                    f,
                    "Index out of range: ({row}, {column}) in a {rows} x {columns} matrix"
                )
            }
            Self::RowOutOfRange { row, rows } => {
                write!(f, "Row out of range: {row} (matrix has {rows} rows)")
            }
            Self::BufferTooSmall { got, min } => {
                write!(f, "Buffer too small: got {got} elements, need at least {min}")
            }
            Self::RowLengthMismatch { expected, got } => {
                write!(f, "Row length mismatch: expected {expected} values, got {got}")
            }
            Self::InvalidNumericValue(s) => write!(f, "Invalid numeric value: {s}"),
            Self::InvalidLimit(limit) => {
                write!(f, "Invalid max_elements: {limit} (must be at least 1)")
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
            Self::MissingParameter { parameter } => {
                write!(f, "Parameter '{parameter}' is required but was not set")
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for RingMatrixError {}
