//! Storage allocation for the ring-buffer matrix.
//!
//! ## Purpose
//!
//! This module allocates the single contiguous block a matrix owns. The block
//! is allocated once, zero-filled, and never grown or shrunk afterwards.
//!
//! ## Design notes
//!
//! * **Fallible**: Uses `try_reserve_exact` so allocator refusal surfaces as
//!   `AllocationFailure` instead of aborting the process.
//! * **Fixed size**: The block is returned as `Box<[T]>`, which cannot change length.
//!
//! ## Invariants
//!
//! * A returned block has exactly the requested length and every element is `T::zero()`.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{boxed::Box, vec::Vec};
#[cfg(feature = "std")]
use std::{boxed::Box, vec::Vec};

// External dependencies
use num_traits::Zero;

// Internal dependencies
use crate::primitives::errors::RingMatrixError;

/// Default ceiling on `rows * columns` for a single matrix.
pub const DEFAULT_MAX_ELEMENTS: usize = 1_000_000;

/// Allocate a zero-filled block of `elements` values.
pub fn zeroed_block<T: Copy + Zero>(elements: usize) -> Result<Box<[T]>, RingMatrixError> {
    let mut block: Vec<T> = Vec::new();
    if block.try_reserve_exact(elements).is_err() {
        log::error!("allocator refused a block of {} elements", elements);
        return Err(RingMatrixError::AllocationFailure { elements });
    }
    block.resize(elements, T::zero());
    Ok(block.into_boxed_slice())
}

/// Zero every element of `block`.
#[inline]
pub fn zero_fill<T: Copy + Zero>(block: &mut [T]) {
    block.fill(T::zero());
}

/// An empty block for uninitialized matrices; does not allocate.
#[inline]
pub fn empty_block<T>() -> Box<[T]> {
    Vec::new().into_boxed_slice()
}
