//! Error types for numkernel operations.
//!
//! ## Purpose
//!
//! This module defines the error conditions the checked kernel entry points
//! can report. The unchecked entry points report nothing; violating their
//! contract is undefined behavior.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors carry the offending length and the capacity it was checked against.
//! * **No-std**: No allocation is required to construct or display an error.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Bounds**: A requested length larger than a buffer.
//! 2. **Width**: A foreign `u64` length that does not fit in `usize`.
//! 3. **Null pointers**: A foreign buffer pointer that is null while the length is non-zero.
//!
//! ## Invariants
//!
//! * Arithmetic overflow is never an error; `square` wraps.
//! * A call that returns an error has performed no writes.
//!
//! ## Non-goals
//!
//! * This module does not perform the bounds checks itself (see `bounds`).

#[cfg(feature = "std")]
use std::error::Error;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for numkernel operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KernelError {
    /// The requested length exceeds the number of elements in a buffer.
    OutOfRange {
        /// Which buffer was too short (`"input"` or `"output"`).
        buffer: &'static str,
        /// Number of elements requested.
        length: usize,
        /// Number of elements available.
        capacity: usize,
    },

    /// A length supplied across the FFI boundary does not fit in `usize`.
    LengthOverflow(u64),

    /// A buffer pointer supplied across the FFI boundary is null.
    NullPointer {
        /// Which buffer was null (`"input"` or `"output"`).
        buffer: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for KernelError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::OutOfRange {
                buffer,
                length,
                capacity,
            } => write!(
                f,
                "Out of range: length {length} exceeds {buffer} buffer of {capacity} elements"
            ),
            Self::LengthOverflow(length) => {
                write!(f, "Length overflow: {length} does not fit in usize")
            }
            Self::NullPointer { buffer } => write!(f, "Null pointer: {buffer} buffer is null"),
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for KernelError {}
