//! Layer 2: Matrix
//!
//! # Purpose
//!
//! This layer provides the ring-buffer matrix itself: allocation, the
//! logical-to-physical row mapping, rotation, row copy, and row zeroing.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: API
//!   ↓
//! Layer 3: Adapters
//!   ↓
//! Layer 2: Matrix ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Ring-buffer-backed dense matrix.
pub mod ring;
