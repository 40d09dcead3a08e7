//! Validation for matrix dimensions, coordinates, and pushed rows.
//!
//! ## Purpose
//!
//! This module holds every check the crate performs outside the unchecked
//! fast path: dimension and ceiling checks at initialization, coordinate and
//! buffer checks for the checked accessors, and value checks for the
//! rolling-window adapter.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Ordering**: Checks are ordered from cheap to expensive.
//!
//! ## Non-goals
//!
//! * This module does not allocate or mutate anything.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::RingMatrixError;
use crate::primitives::layout::RowMap;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for matrix configuration and access.
///
/// All methods are associated functions returning `Result` and fail fast
/// upon identifying the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Allocation
    // ========================================================================

    /// Validate requested dimensions against the element ceiling.
    ///
    /// Returns the number of elements to allocate.
    pub fn validate_dimensions(
        rows: usize,
        columns: usize,
        limit: usize,
    ) -> Result<usize, RingMatrixError> {
        if rows == 0 {
            return Err(RingMatrixError::ZeroRows);
        }

        match rows.checked_mul(columns) {
            Some(elements) if elements <= limit => Ok(elements),
            _ => Err(RingMatrixError::AllocationLimitExceeded {
                rows,
                columns,
                limit,
            }),
        }
    }

    /// Validate the configurable element ceiling.
    pub fn validate_limit(limit: usize) -> Result<(), RingMatrixError> {
        if limit == 0 {
            return Err(RingMatrixError::InvalidLimit(limit));
        }
        Ok(())
    }

    // ========================================================================
    // Checked Access
    // ========================================================================

    /// Validate a logical coordinate against an initialized mapping.
    pub fn validate_index(map: &RowMap, row: usize, column: usize) -> Result<(), RingMatrixError> {
        Self::validate_initialized(map)?;
        if !map.contains(row, column) {
            return Err(RingMatrixError::IndexOutOfRange {
                row,
                column,
                rows: map.rows(),
                columns: map.columns(),
            });
        }
        Ok(())
    }

    /// Validate a logical row against an initialized mapping.
    pub fn validate_row(map: &RowMap, row: usize) -> Result<(), RingMatrixError> {
        Self::validate_initialized(map)?;
        if row >= map.rows() {
            return Err(RingMatrixError::RowOutOfRange {
                row,
                rows: map.rows(),
            });
        }
        Ok(())
    }

    /// Validate that a destination buffer can hold one row.
    pub fn validate_buffer(len: usize, columns: usize) -> Result<(), RingMatrixError> {
        if len < columns {
            return Err(RingMatrixError::BufferTooSmall {
                got: len,
                min: columns,
            });
        }
        Ok(())
    }

    #[inline]
    fn validate_initialized(map: &RowMap) -> Result<(), RingMatrixError> {
        if map.rows() == 0 {
            return Err(RingMatrixError::NotInitialized);
        }
        Ok(())
    }

    // ========================================================================
    // Row Values
    // ========================================================================

    /// Validate a row about to be pushed into a rolling window.
    pub fn validate_row_values<T: Float>(
        values: &[T],
        columns: usize,
    ) -> Result<(), RingMatrixError> {
        if values.len() != columns {
            return Err(RingMatrixError::RowLengthMismatch {
                expected: columns,
                got: values.len(),
            });
        }

        for (i, v) in values.iter().enumerate() {
            if !v.is_finite() {
                return Err(RingMatrixError::InvalidNumericValue(format!(
                    "row[{}]={}",
                    i,
                    v.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }

        Ok(())
    }

    // ========================================================================
    // Builder Validation
    // ========================================================================

    /// Validate that no parameter was set more than once.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), RingMatrixError> {
        if let Some(parameter) = duplicate_param {
            return Err(RingMatrixError::DuplicateParameter { parameter });
        }
        Ok(())
    }

    /// Validate that a required parameter was set.
    pub fn validate_required<V>(
        value: Option<V>,
        parameter: &'static str,
    ) -> Result<V, RingMatrixError> {
        value.ok_or(RingMatrixError::MissingParameter { parameter })
    }
}
