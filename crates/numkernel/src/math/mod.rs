//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides the pure arithmetic kernels. They assume their inputs
//! have already been validated.
//!
//! # Architecture
//!
//! ```text
//! API
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Scalar and elementwise squaring.
pub mod square;
