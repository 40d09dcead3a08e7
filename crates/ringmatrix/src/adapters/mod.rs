//! Layer 3: Adapters
//!
//! # Purpose
//!
//! This layer builds sliding-window computations on top of the ring-buffer
//! matrix: push a new row, forget the oldest one, and keep per-column
//! statistics over the rows currently in the window.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: API
//!   ↓
//! Layer 3: Adapters ← You are here
//!   ↓
//! Layer 2: Matrix
//!   ↓
//! Layer 1: Primitives
//! ```

/// Rolling per-column statistics.
pub mod rolling;
