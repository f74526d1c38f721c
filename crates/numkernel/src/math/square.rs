//! Squaring kernels.
//!
//! ## Purpose
//!
//! This module provides the raw squaring arithmetic: a wraparound scalar
//! square and elementwise float squares over slices or raw pointers.
//!
//! ## Design notes
//!
//! * **Wraparound**: Integer squares use `WrappingMul`, so overflow is reduced modulo 2^bits.
//! * **IEEE-754**: Float squares are a single multiplication; NaN and infinities propagate.
//! * **Generics**: Generic over `Float` (elementwise) and `WrappingMul` (scalar).
//!
//! ## Invariants
//!
//! * Each element is squared exactly once per call.
//! * Elements past the processed range are never written.
//! * Raw pointer kernels read `input[i]` before writing `output[i]`, in ascending index order.
//!
//! ## Non-goals
//!
//! * This module does not validate lengths (handled by `bounds`).

// External dependencies
use core::slice;
use num_traits::{Float, WrappingMul};

// ============================================================================
// Scalar Kernel
// ============================================================================

/// Square a value with wraparound on overflow.
#[inline]
pub fn square_wrapping<T: WrappingMul + Copy>(value: T) -> T {
    value.wrapping_mul(&value)
}

// ============================================================================
// Elementwise Kernels
// ============================================================================

/// Write `output[i] = input[i] * input[i]` for every index both slices share.
#[inline]
pub fn square_into<T: Float>(input: &[T], output: &mut [T]) {
    for (out, &x) in output.iter_mut().zip(input) {
        *out = x * x;
    }
}

/// Square every element of `values` in place.
#[inline]
pub fn square_each<T: Float>(values: &mut [T]) {
    for v in values.iter_mut() {
        *v = *v * *v;
    }
}

/// Square `length` elements from `input` into `output` through raw pointers.
///
/// Disjoint ranges go through the slice kernel. Identical ranges are squared
/// in place. Partially overlapping ranges fall back to an element-by-element
/// loop, so a later read may observe an earlier write.
///
/// # Safety
///
/// When `length > 0`, `input` must be valid for `length` reads and `output`
/// must be valid for `length` writes, both properly aligned. No other access
/// to the output range may happen for the duration of the call.
pub unsafe fn square_raw<T: Float>(length: usize, input: *const T, output: *mut T) {
    if length == 0 {
        return;
    }

    if core::ptr::eq(input, output) {
        // SAFETY: caller guarantees `length` valid, exclusive elements at `output`.
        let values = unsafe { slice::from_raw_parts_mut(output, length) };
        square_each(values);
        return;
    }

    let in_start = input as usize;
    let in_end = input.wrapping_add(length) as usize;
    let out_start = output as usize;
    let out_end = output.wrapping_add(length) as usize;

    if in_end <= out_start || out_end <= in_start {
        // SAFETY: ranges are disjoint and valid per the caller contract.
        let (src, dst) = unsafe {
            (
                slice::from_raw_parts(input, length),
                slice::from_raw_parts_mut(output, length),
            )
        };
        square_into(src, dst);
        return;
    }

    for i in 0..length {
        // SAFETY: both offsets are within the caller-guaranteed ranges.
        unsafe {
            let x = input.add(i).read();
            output.add(i).write(x * x);
        }
    }
}
