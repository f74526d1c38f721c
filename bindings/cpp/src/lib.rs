//! C/C++ bindings for numkernel.
//!
//! Provides C access to the numkernel Rust library via C FFI.
//! A C++ wrapper header (numkernel.hpp) provides idiomatic C++ usage.
//!
//! `square` and `square_all` keep the exact unmangled names and signatures of
//! a plain C kernel, so existing callers link against this library unchanged.
//! `square_all` performs no bounds checks; `square_all_checked` does and
//! reports a [`NumKernelStatus`].

use std::os::raw::{c_char, c_double, c_int};

use numkernel::KernelError;
use numkernel::internals::primitives::bounds::Bounds;

/// Status code returned by checked entry points.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumKernelStatus {
    /// The call completed.
    Ok = 0,
    /// `length` exceeds the input or output buffer.
    OutOfRange = 1,
    /// A buffer pointer was null while `length` was non-zero.
    NullPointer = 2,
    /// A length does not fit in the platform's `size_t`.
    LengthOverflow = 3,
}

impl From<KernelError> for NumKernelStatus {
    fn from(err: KernelError) -> Self {
        match err {
            KernelError::OutOfRange { .. } => NumKernelStatus::OutOfRange,
            KernelError::NullPointer { .. } => NumKernelStatus::NullPointer,
            KernelError::LengthOverflow(_) => NumKernelStatus::LengthOverflow,
        }
    }
}

/// Square a 64-bit unsigned integer, wrapping modulo 2^64.
#[unsafe(no_mangle)]
pub extern "C" fn square(value: u64) -> u64 {
    numkernel::square(value)
}

/// Write `output[i] = input[i] * input[i]` for `i` in `[0, length)`.
///
/// No bounds checks are performed. `length == 0` never dereferences either
/// pointer. `input` and `output` may point to the same buffer.
///
/// # Safety
/// When `length > 0`, `input` must point to at least `length` readable
/// doubles and `output` to at least `length` writable doubles. Anything
/// shorter is undefined behavior.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn square_all(length: u64, input: *const c_double, output: *mut c_double) {
    unsafe { numkernel::square_all_unchecked(length as usize, input, output) }
}

/// Bounds-checked variant of [`square_all`].
///
/// `input_len` and `output_len` are the number of elements the caller
/// allocated for each buffer. Nothing is written unless the result is
/// `NumKernelStatus::Ok`.
///
/// Capacities are checked before pointers, so a null buffer declared with
/// fewer than `length` elements reports `OutOfRange`, not `NullPointer`.
///
/// # Safety
/// `input` must point to `input_len` readable doubles and `output` to
/// `output_len` writable doubles, or be null.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn square_all_checked(
    length: u64,
    input: *const c_double,
    input_len: u64,
    output: *mut c_double,
    output_len: u64,
) -> NumKernelStatus {
    match unsafe { checked_square_all(length, input, input_len, output, output_len) } {
        Ok(()) => NumKernelStatus::Ok,
        Err(e) => e.into(),
    }
}

/// Describe a status code.
///
/// The returned string is static and NUL-terminated; callers must not free it.
/// Unknown codes yield a generic message rather than NULL.
#[unsafe(no_mangle)]
pub extern "C" fn numkernel_status_message(status: c_int) -> *const c_char {
    let msg = match status {
        0 => c"ok",
        1 => c"length exceeds buffer capacity",
        2 => c"buffer pointer is null",
        3 => c"length does not fit in size_t",
        _ => c"unknown status",
    };
    msg.as_ptr()
}

unsafe fn checked_square_all(
    length: u64,
    input: *const c_double,
    input_len: u64,
    output: *mut c_double,
    output_len: u64,
) -> Result<(), KernelError> {
    let length = Bounds::length_from_u64(length)?;
    if length == 0 {
        return Ok(());
    }

    // Capacity first: an empty buffer may legitimately be null.
    let input_len = Bounds::length_from_u64(input_len)?;
    let output_len = Bounds::length_from_u64(output_len)?;
    Bounds::check_pair(length, input_len, output_len)?;

    if input.is_null() {
        return Err(KernelError::NullPointer { buffer: "input" });
    }
    if output.is_null() {
        return Err(KernelError::NullPointer { buffer: "output" });
    }

    // Raw pointers rather than slices: C callers may pass overlapping buffers.
    unsafe { numkernel::square_all_unchecked(length, input, output) };
    Ok(())
}

