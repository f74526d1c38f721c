//! Public API for the numeric kernel.
//!
//! ## Purpose
//!
//! This module provides the user-facing squaring functions. Each one is a
//! free function with no state, so every call is independent.
//!
//! ## Design notes
//!
//! * **Checked by default**: `square_all` and `square_slice` report `OutOfRange`
//!   instead of touching memory past a buffer.
//! * **Unchecked parity**: `square_all_unchecked` trusts the caller completely,
//!   like a raw `(length, input, output)` C signature does.
//! * **Type-Safe**: Generic over `Float` for buffers and `WrappingMul` for scalars.
//!
//! ## Key concepts
//!
//! * **Length**: The number of leading elements to process. Elements past it
//!   are left untouched in `output`.
//! * **Disjointness**: Safe entry points take `&[T]` and `&mut [T]`, so the
//!   borrow checker rules out aliasing. In-place squaring goes through
//!   `square_in_place`.

// External dependencies
use num_traits::{Float, WrappingMul};

// Internal dependencies
use crate::math::square::{square_each, square_into, square_raw, square_wrapping};
use crate::primitives::bounds::Bounds;

// Publicly re-exported types
pub use crate::primitives::errors::KernelError;

// ============================================================================
// Scalar
// ============================================================================

/// Square `value`, wrapping around on overflow.
///
/// Total for every input: `square(u64::MAX)` is `1` and `square(1u64 << 32)` is `0`.
///
/// ```rust
/// use numkernel::prelude::*;
///
/// assert_eq!(square(7u64), 49);
/// assert_eq!(square(1u64 << 32), 0);
/// ```
#[inline]
pub fn square<T: WrappingMul + Copy>(value: T) -> T {
    square_wrapping(value)
}

// ============================================================================
// Elementwise
// ============================================================================

/// Write `output[i] = input[i] * input[i]` for `i` in `[0, length)`.
///
/// Returns [`KernelError::OutOfRange`] if either buffer holds fewer than
/// `length` elements. The input buffer is checked first. Nothing is written
/// when an error is returned.
///
/// ```rust
/// use numkernel::prelude::*;
///
/// let input = [1.0, -2.0, 0.5];
/// let mut output = [0.0; 4];
/// square_all(3, &input, &mut output)?;
/// assert_eq!(output, [1.0, 4.0, 0.25, 0.0]);
/// # Result::<(), KernelError>::Ok(())
/// ```
pub fn square_all<T: Float>(
    length: usize,
    input: &[T],
    output: &mut [T],
) -> Result<(), KernelError> {
    Bounds::check_pair(length, input.len(), output.len())?;
    square_into(&input[..length], &mut output[..length]);
    Ok(())
}

/// Square every element of `input` into the front of `output`.
///
/// Shorthand for `square_all(input.len(), input, output)`.
pub fn square_slice<T: Float>(input: &[T], output: &mut [T]) -> Result<(), KernelError> {
    square_all(input.len(), input, output)
}

/// Square every element of `values` in place.
#[inline]
pub fn square_in_place<T: Float>(values: &mut [T]) {
    square_each(values);
}

/// Write `output[i] = input[i] * input[i]` for `i` in `[0, length)` without
/// any bounds checks.
///
/// `length == 0` never dereferences either pointer, so both may be null.
/// `input` and `output` may be the same pointer.
///
/// # Safety
///
/// When `length > 0`, `input` must be valid for `length` reads and `output`
/// must be valid for `length` writes, both properly aligned for `T`. A
/// shorter buffer is undefined behavior. The caller must not let any other
/// thread touch the output range during the call.
#[inline]
pub unsafe fn square_all_unchecked<T: Float>(length: usize, input: *const T, output: *mut T) {
    // SAFETY: forwarded caller contract.
    unsafe { square_raw(length, input, output) }
}
