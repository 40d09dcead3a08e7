//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the error type, the row mapping arithmetic, the
//! storage allocation, and the validation used throughout the crate. It has
//! zero internal dependencies outside itself.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: API
//!   ↓
//! Layer 3: Adapters
//!   ↓
//! Layer 2: Matrix
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Shared error types.
pub mod errors;

/// Logical-to-physical row mapping.
pub mod layout;

/// Storage allocation.
pub mod storage;

/// Dimension, index, and value validation.
pub mod validator;
