//! Bounds validation for caller-supplied buffers.
//!
//! ## Purpose
//!
//! This module decides whether a requested element count fits the buffers a
//! caller handed in. It backs every checked entry point, in Rust and at the
//! FFI boundary.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: The input buffer is checked before the output buffer.
//! * **Side-effect free**: Checks never touch buffer contents.
//!
//! ## Invariants
//!
//! * `length == 0` passes against any capacity, including empty buffers.
//!
//! ## Non-goals
//!
//! * This module does not check values (NaN and infinities are legal input).

// Internal dependencies
use crate::primitives::errors::KernelError;

// ============================================================================
// Bounds
// ============================================================================

/// Validation utility for buffer lengths.
pub struct Bounds;

impl Bounds {
    /// Validate that `length` elements fit in a buffer of `capacity` elements.
    #[inline]
    pub fn check_length(
        length: usize,
        buffer: &'static str,
        capacity: usize,
    ) -> Result<(), KernelError> {
        if length > capacity {
            return Err(KernelError::OutOfRange {
                buffer,
                length,
                capacity,
            });
        }
        Ok(())
    }

    /// Validate an input/output pair for an elementwise operation.
    #[inline]
    pub fn check_pair(
        length: usize,
        input_len: usize,
        output_len: usize,
    ) -> Result<(), KernelError> {
        Self::check_length(length, "input", input_len)?;
        Self::check_length(length, "output", output_len)
    }

    /// Convert a foreign `u64` length into a native `usize`.
    #[inline]
    pub fn length_from_u64(length: u64) -> Result<usize, KernelError> {
        usize::try_from(length).map_err(|_| KernelError::LengthOverflow(length))
    }
}
