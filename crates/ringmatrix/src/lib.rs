//! # ringmatrix — Ring-Buffer Matrix for Sliding-Window Numerics
//!
//! A fixed-capacity, dense two-dimensional buffer that forgets its oldest
//! logical row in O(1) without moving any stored data. Rows are continually
//! appended and the oldest row continually discarded, as in rolling
//! statistics over a window of time-series rows.
//!
//! ## How it works
//!
//! The matrix owns one contiguous block of `rows * columns` elements and a
//! rotation offset naming the physical row that currently represents logical
//! row 0. Element `(r, c)` lives at `((r + offset) % rows) * columns + c`.
//! Rolling advances the offset by one, so the slot that held the oldest row
//! becomes logical row `rows - 1`, ready to be zeroed and refilled.
//!
//! ## Quick Start
//!
//! ```rust
//! use ringmatrix::prelude::*;
//!
//! let mut m: RingBufferMatrix<f64> = RingBufferMatrix::new(3, 2)?;
//!
//! m.set(0, 0, 5.0);
//! m.roll_right();
//!
//! // Rolling never clears data: the old row 0 is now row 2.
//! assert_eq!(m.get(2, 0), 5.0);
//!
//! m.set_row_to_zero(2);
//! assert_eq!(m.get(2, 0), 0.0);
//! # Result::<(), RingMatrixError>::Ok(())
//! ```
//!
//! ### Rolling statistics
//!
//! ```rust
//! use ringmatrix::prelude::*;
//!
//! let mut window = RingMatrix::new()
//!     .rows(3)            // Keep the three most recent rows
//!     .columns(2)         // Two series per row
//!     .update_mode(Incremental)
//!     .build_window::<f64>()?;
//!
//! for t in 0..5 {
//!     let t = t as f64;
//!     window.push_row(&[t, 10.0 * t])?;
//! }
//!
//! // Rows 2, 3, 4 remain.
//! assert_eq!(window.column_mean(0), Some(3.0));
//! assert_eq!(window.column_sum(1), Some(90.0));
//! # Result::<(), RingMatrixError>::Ok(())
//! ```
//!
//! ## Access modes
//!
//! - **Fast path** (`get`, `get_mut`, `set`, `row`, `copy_row`, `set_row_to_zero`,
//!   indexing): no runtime validation beyond `debug_assert!`. Out-of-range
//!   logical rows wrap modulo `rows` in release builds.
//! - **Raw path** (`get_unchecked`, `get_unchecked_mut`): `unsafe`, skips
//!   slice bounds checks as well.
//! - **Checked path** (`try_get`, `try_get_mut`, `try_row`, `try_copy_row`,
//!   `try_set_row_to_zero`): returns a [`RingMatrixError`](prelude::RingMatrixError).
//!
//! ## Errors
//!
//! Initialization fails with `ZeroRows`, `AllocationLimitExceeded` (more than
//! `max_elements`, 1,000,000 by default), or `AllocationFailure`. Initializing
//! a matrix twice returns `AlreadyInitialized` and leaves it unchanged.
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! Disable default features to remove the standard library dependency; only
//! `alloc` is required:
//!
//! ```toml
//! [dependencies]
//! ringmatrix = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Layer 1: Primitives - errors, row mapping, storage, validation.
mod primitives;

// Layer 2: Matrix - the ring-buffer matrix.
mod matrix;

// Layer 3: Adapters - sliding-window computations.
mod adapters;

// High-level fluent API.
mod api;

// Standard prelude.
pub mod prelude {
    pub use crate::api::{
        MatrixState, RingBufferMatrix, RingMatrixBuilder as RingMatrix, RingMatrixError,
        RollingWindow, UpdateMode,
        UpdateMode::{Full, Incremental},
    };
    pub use crate::primitives::storage::DEFAULT_MAX_ELEMENTS;
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod matrix {
        pub use crate::matrix::*;
    }
    pub mod adapters {
        pub use crate::adapters::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
