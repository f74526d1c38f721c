//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the error type and the bounds checks used throughout
//! the crate. It has zero internal dependencies within the crate.
//!
//! # Architecture
//!
//! ```text
//! API
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Shared error types.
pub mod errors;

/// Buffer length validation.
pub mod bounds;
