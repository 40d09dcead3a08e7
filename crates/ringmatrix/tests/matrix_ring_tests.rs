//! Tests for the ring-buffer matrix.
//!
//! These tests verify the public matrix contract:
//! - Allocation, zero-fill, and the element ceiling
//! - Logical-to-physical mapping under rotation
//! - Row copy and row zeroing
//! - The checked access path and its errors
//! - Ownership semantics (deep clone, move)
//!
//! ## Test Organization
//!
//! 1. **Lifecycle** - Construction, initialize, re-initialize, failures
//! 2. **Element Access** - Round-trips through the fast, raw, and checked paths
//! 3. **Rotation** - Rotation invariant and the roll/zero scenario
//! 4. **Row Operations** - copy_row, set_row_to_zero, iter_rows
//! 5. **Ownership** - Clone and move

use ringmatrix::prelude::*;

// ============================================================================
// Helper Functions
// ============================================================================

/// Fill a matrix so that logical `(r, c)` holds `r * 10 + c`.
fn make_numbered(rows: usize, columns: usize) -> RingBufferMatrix<i64> {
    let mut m = RingBufferMatrix::new(rows, columns).unwrap();
    for r in 0..rows {
        for c in 0..columns {
            m.set(r, c, (r * 10 + c) as i64);
        }
    }
    m
}

// ============================================================================
// Lifecycle Tests
// ============================================================================

/// Test construction zero-fills the block.
///
/// Verifies dimensions, element count, and that every element reads as zero.
#[test]
fn test_new_is_zero_filled() {
    let m: RingBufferMatrix<f64> = RingBufferMatrix::new(4, 3).unwrap();

    assert_eq!(m.rows(), 4);
    assert_eq!(m.columns(), 3);
    assert_eq!(m.len(), 12);
    assert_eq!(m.state(), MatrixState::Ready);
    assert_eq!(m.rotation_offset(), 0);
    for r in 0..4 {
        for c in 0..3 {
            assert_eq!(m.get(r, c), 0.0, "({r}, {c}) should start at zero");
        }
    }
}

/// Test a default matrix starts uninitialized.
#[test]
fn test_default_is_uninitialized() {
    let m: RingBufferMatrix<f32> = RingBufferMatrix::default();

    assert_eq!(m.state(), MatrixState::Uninitialized);
    assert!(!m.is_initialized());
    assert_eq!(m.rows(), 0);
    assert_eq!(m.columns(), 0);
    assert!(m.is_empty());
    assert_eq!(m.max_elements(), DEFAULT_MAX_ELEMENTS);
}

/// Test initialize after default construction.
///
/// Verifies the Uninitialized -> Ready transition and zero-fill.
#[test]
fn test_initialize_after_default() {
    let mut m: RingBufferMatrix<u32> = RingBufferMatrix::default();
    m.initialize(2, 5).unwrap();

    assert!(m.is_initialized());
    assert_eq!((m.rows(), m.columns()), (2, 5));
    assert!(m.iter_rows().all(|row| row.iter().all(|&v| v == 0)));
}

/// Test re-initialization is rejected and changes nothing.
///
/// Verifies the error carries the existing dimensions and data survives.
#[test]
fn test_reinitialize_is_rejected() {
    let mut m: RingBufferMatrix<i32> = RingBufferMatrix::new(3, 2).unwrap();
    m.set(1, 1, 7);
    m.roll_right();

    let res = m.initialize(10, 10);

    assert_eq!(
        res,
        Err(RingMatrixError::AlreadyInitialized {
            rows: 3,
            columns: 2
        }),
        "Second initialize should report the existing shape"
    );
    assert_eq!((m.rows(), m.columns()), (3, 2));
    assert_eq!(m.rotation_offset(), 1, "Rotation should be untouched");
    assert_eq!(m.get(0, 1), 7, "Data should be untouched");
}

/// Test the element ceiling on construction.
///
/// Verifies that more than 1,000,000 elements is refused.
#[test]
fn test_new_over_limit_fails() {
    let res = RingBufferMatrix::<f64>::new(1001, 1000);

    assert_eq!(
        res.unwrap_err(),
        RingMatrixError::AllocationLimitExceeded {
            rows: 1001,
            columns: 1000,
            limit: 1_000_000
        }
    );
}

/// Test exactly the ceiling is accepted.
#[test]
fn test_new_at_limit_succeeds() {
    let m = RingBufferMatrix::<u8>::new(1000, 1000).unwrap();
    assert_eq!(m.len(), DEFAULT_MAX_ELEMENTS);
}

/// Test the element ceiling on initialize.
///
/// Verifies the matrix is left uninitialized and can still be initialized.
#[test]
fn test_initialize_over_limit_leaves_uninitialized() {
    let mut m: RingBufferMatrix<f64> = RingBufferMatrix::default();

    let res = m.initialize(2_000, 1_000);

    assert!(matches!(
        res,
        Err(RingMatrixError::AllocationLimitExceeded { .. })
    ));
    assert_eq!(m.state(), MatrixState::Uninitialized);
    assert!(m.initialize(2, 2).is_ok(), "A valid retry should succeed");
}

/// Test allocator refusal on initialize.
///
/// Verifies the matrix is left uninitialized and a smaller retry succeeds.
#[test]
fn test_initialize_allocation_failure_leaves_uninitialized() {
    let mut m: RingBufferMatrix<u64> = RingBufferMatrix::with_max_elements(usize::MAX);

    let res = m.initialize(usize::MAX / 4, 1);

    assert!(
        matches!(res, Err(RingMatrixError::AllocationFailure { .. })),
        "An impossible block should be refused by the allocator"
    );
    assert_eq!(m.state(), MatrixState::Uninitialized);
    assert_eq!((m.rows(), m.columns()), (0, 0));

    assert!(m.initialize(2, 3).is_ok(), "A valid retry should succeed");
    assert_eq!(m.state(), MatrixState::Ready);
    assert_eq!(m.get(1, 2), 0);
}

/// Test overflowing dimensions are reported as a ceiling violation.
#[test]
fn test_overflowing_dimensions() {
    let res = RingBufferMatrix::<u8>::new(usize::MAX, 2);
    assert!(matches!(
        res,
        Err(RingMatrixError::AllocationLimitExceeded { .. })
    ));
}

/// Test a custom ceiling.
#[test]
fn test_custom_max_elements() {
    let mut m: RingBufferMatrix<f64> = RingBufferMatrix::with_max_elements(10);

    assert!(matches!(
        m.initialize(4, 3),
        Err(RingMatrixError::AllocationLimitExceeded { limit: 10, .. })
    ));
    assert!(m.initialize(5, 2).is_ok());
}

/// Test zero rows is rejected.
#[test]
fn test_zero_rows_rejected() {
    assert_eq!(
        RingBufferMatrix::<f64>::new(0, 4).unwrap_err(),
        RingMatrixError::ZeroRows
    );

    let mut m: RingBufferMatrix<f64> = RingBufferMatrix::default();
    assert_eq!(m.initialize(0, 0), Err(RingMatrixError::ZeroRows));
    assert!(!m.is_initialized());
}

/// Test zero columns is accepted.
///
/// Verifies rolling and zeroing are harmless on an empty row width.
#[test]
fn test_zero_columns_accepted() {
    let mut m: RingBufferMatrix<f64> = RingBufferMatrix::new(3, 0).unwrap();

    assert!(m.is_initialized());
    assert!(m.is_empty());
    m.roll_right();
    m.set_row_to_zero(2);
    assert!(m.row(1).is_empty());
}

// ============================================================================
// Element Access Tests
// ============================================================================

/// Test write-then-read round-trip for every coordinate.
#[test]
fn test_get_mut_then_get_round_trip() {
    let mut m: RingBufferMatrix<f64> = RingBufferMatrix::new(5, 4).unwrap();
    m.roll_right_by(2);

    for r in 0..5 {
        for c in 0..4 {
            *m.get_mut(r, c) = (r * 4 + c) as f64 + 0.5;
        }
    }
    for r in 0..5 {
        for c in 0..4 {
            assert_eq!(m.get(r, c), (r * 4 + c) as f64 + 0.5);
        }
    }
}

/// Test tuple indexing matches get/set.
#[test]
fn test_index_operators() {
    let mut m = make_numbered(3, 3);
    m[(2, 1)] = -1;

    assert_eq!(m[(2, 1)], -1);
    assert_eq!(m.get(2, 1), -1);
    assert_eq!(m[(0, 2)], 2);
}

/// Test the raw unchecked path agrees with the fast path.
#[test]
fn test_get_unchecked_matches_get() {
    let mut m = make_numbered(4, 2);
    m.roll_right();

    for r in 0..4 {
        for c in 0..2 {
            // SAFETY: (r, c) is inside a 4 x 2 initialized matrix.
            let v = unsafe { *m.get_unchecked(r, c) };
            assert_eq!(v, m.get(r, c));
        }
    }

    // SAFETY: (3, 1) is inside the matrix.
    unsafe {
        *m.get_unchecked_mut(3, 1) = 99;
    }
    assert_eq!(m.get(3, 1), 99);
}

/// Test the checked path accepts valid coordinates.
#[test]
fn test_try_get_valid() {
    let mut m = make_numbered(3, 2);

    assert_eq!(m.try_get(2, 1), Ok(21));
    *m.try_get_mut(0, 0).unwrap() = 42;
    assert_eq!(m.get(0, 0), 42);
}

/// Test the checked path rejects out-of-range coordinates.
#[test]
fn test_try_get_out_of_range() {
    let mut m = make_numbered(3, 2);

    assert_eq!(
        m.try_get(3, 0),
        Err(RingMatrixError::IndexOutOfRange {
            row: 3,
            column: 0,
            rows: 3,
            columns: 2
        })
    );
    assert!(matches!(
        m.try_get(0, 2),
        Err(RingMatrixError::IndexOutOfRange { column: 2, .. })
    ));
    assert!(m.try_get_mut(5, 5).is_err());
}

/// Test the checked path on an uninitialized matrix.
#[test]
fn test_checked_path_uninitialized() {
    let mut m: RingBufferMatrix<f64> = RingBufferMatrix::default();
    let mut buf = [0.0; 4];

    assert_eq!(m.try_get(0, 0), Err(RingMatrixError::NotInitialized));
    assert_eq!(m.try_row(0).unwrap_err(), RingMatrixError::NotInitialized);
    assert_eq!(
        m.try_copy_row(0, &mut buf),
        Err(RingMatrixError::NotInitialized)
    );
    assert_eq!(
        m.try_set_row_to_zero(0),
        Err(RingMatrixError::NotInitialized)
    );
}

/// Test fast-path access on an uninitialized matrix panics.
#[test]
#[should_panic]
fn test_fast_path_uninitialized_panics() {
    let m: RingBufferMatrix<f64> = RingBufferMatrix::default();
    let _ = m.get(0, 0);
}

/// Test fast-path bounds are asserted in debug builds.
#[cfg(debug_assertions)]
#[test]
#[should_panic(expected = "out of bounds")]
fn test_fast_path_debug_assert() {
    let m: RingBufferMatrix<f64> = RingBufferMatrix::new(3, 2).unwrap();
    let _ = m.get(3, 0);
}

// ============================================================================
// Rotation Tests
// ============================================================================

/// Test the rotation invariant.
///
/// After N rolls, logical row r shows what logical row (r + N) mod R showed before.
#[test]
fn test_rotation_invariant() {
    let rows = 5;
    let before = make_numbered(rows, 3);

    for n in 0..(3 * rows) {
        let mut m = before.clone();
        for _ in 0..n {
            m.roll_right();
        }
        assert_eq!(m.rotation_offset(), n % rows);
        for r in 0..rows {
            assert_eq!(
                m.row(r),
                before.row((r + n) % rows),
                "After {n} rolls row {r} should map to old row {}",
                (r + n) % rows
            );
        }
    }
}

/// Test roll_right_by matches repeated roll_right.
#[test]
fn test_roll_right_by() {
    let mut a = make_numbered(4, 2);
    let mut b = a.clone();

    for _ in 0..10 {
        a.roll_right();
    }
    b.roll_right_by(10);

    assert_eq!(a.rotation_offset(), b.rotation_offset());
    assert!(a.iter_rows().eq(b.iter_rows()));
}

/// Test the roll-then-zero scenario on a 3 x 2 matrix.
///
/// Verifies rolling keeps data and zeroing clears only the exposed row.
#[test]
fn test_roll_then_zero_scenario() {
    let mut m: RingBufferMatrix<i32> = RingBufferMatrix::new(3, 2).unwrap();
    *m.get_mut(0, 0) = 5;

    m.roll_right();
    assert_eq!(m.get(2, 0), 5, "Rolling must not clear the exposed row");

    m.set_row_to_zero(2);
    assert_eq!(m.get(2, 0), 0);
    assert_eq!(m.get(2, 1), 0);
}

/// Test a single-row matrix rolls onto itself.
#[test]
fn test_single_row_roll() {
    let mut m = make_numbered(1, 3);
    m.roll_right();

    assert_eq!(m.rotation_offset(), 0);
    assert_eq!(m.row(0), &[0, 1, 2]);
}

// ============================================================================
// Row Operation Tests
// ============================================================================

/// Test copy_row matches get for every column.
#[test]
fn test_copy_row_matches_get() {
    let mut m = make_numbered(4, 3);
    m.roll_right_by(3);

    for r in 0..4 {
        let mut buf = [0_i64; 3];
        m.copy_row(r, &mut buf);
        for (c, &v) in buf.iter().enumerate() {
            assert_eq!(v, m.get(r, c));
        }
    }
}

/// Test copy_row only writes the first `columns` elements.
#[test]
fn test_copy_row_larger_buffer() {
    let m = make_numbered(2, 2);
    let mut buf = [-1_i64; 5];

    m.copy_row(1, &mut buf);

    assert_eq!(buf, [10, 11, -1, -1, -1]);
}

/// Test try_copy_row rejects a short buffer.
#[test]
fn test_try_copy_row_short_buffer() {
    let m = make_numbered(2, 3);
    let mut buf = [0_i64; 2];

    assert_eq!(
        m.try_copy_row(0, &mut buf),
        Err(RingMatrixError::BufferTooSmall { got: 2, min: 3 })
    );
    assert!(matches!(
        m.try_copy_row(2, &mut [0_i64; 3]),
        Err(RingMatrixError::RowOutOfRange { row: 2, rows: 2 })
    ));
}

/// Test set_row_to_zero clears exactly one row.
#[test]
fn test_set_row_to_zero_clears_one_row() {
    let mut m = make_numbered(3, 4);
    m.roll_right();

    m.set_row_to_zero(1);

    for c in 0..4 {
        assert_eq!(m.get(1, c), 0);
    }
    assert_eq!(m.row(0), &[10, 11, 12, 13]);
    assert_eq!(m.row(2), &[0, 1, 2, 3]);
}

/// Test the checked row zeroing.
#[test]
fn test_try_set_row_to_zero() {
    let mut m = make_numbered(2, 2);

    assert!(m.try_set_row_to_zero(1).is_ok());
    assert_eq!(m.row(1), &[0, 0]);
    assert_eq!(
        m.try_set_row_to_zero(2),
        Err(RingMatrixError::RowOutOfRange { row: 2, rows: 2 })
    );
}

/// Test set_all_to_zero keeps the rotation offset.
#[test]
fn test_set_all_to_zero() {
    let mut m = make_numbered(3, 2);
    m.roll_right();

    m.set_all_to_zero();

    assert_eq!(m.rotation_offset(), 1);
    assert!(m.iter_rows().all(|row| row == [0, 0]));
}

/// Test iter_rows yields rows in logical order.
#[test]
fn test_iter_rows_logical_order() {
    let mut m = make_numbered(3, 1);
    m.roll_right();

    let firsts: Vec<i64> = m.iter_rows().map(|row| row[0]).collect();

    assert_eq!(firsts, vec![10, 20, 0]);
    assert_eq!(m.iter_rows().len(), 3);
}

/// Test row_mut writes through to logical coordinates.
#[test]
fn test_row_mut() {
    let mut m: RingBufferMatrix<f32> = RingBufferMatrix::new(2, 3).unwrap();
    m.roll_right();

    m.row_mut(0).copy_from_slice(&[1.0, 2.0, 3.0]);

    assert_eq!(m.get(0, 2), 3.0);
    assert_eq!(m.try_row(0).unwrap(), &[1.0, 2.0, 3.0]);
}

// ============================================================================
// Ownership Tests
// ============================================================================

/// Test clone is a deep copy.
#[test]
fn test_clone_is_deep() {
    let original = make_numbered(3, 2);
    let mut copy = original.clone();

    copy.set(0, 0, 1000);
    copy.roll_right();

    assert_eq!(original.get(0, 0), 0);
    assert_eq!(original.rotation_offset(), 0);
    assert_eq!(copy.get(2, 0), 1000);
}

/// Test moving a matrix transfers its storage.
#[test]
fn test_move_transfers_storage() {
    let m = make_numbered(2, 2);
    let boxed = Box::new(m);

    assert_eq!(boxed.get(1, 1), 11);
}
