//! # numkernel — Squaring Kernels for Rust and C
//!
//! A minimal numeric kernel with two operations:
//!
//! * [`square`](prelude::square): the square of an integer, wrapping around on
//!   overflow (for `u64`, modulo 2^64).
//! * [`square_all`](prelude::square_all): the elementwise square of the first
//!   `length` elements of a float buffer, written into a second buffer.
//!
//! Both are plain free functions with no state. The `numkernel-cpp` crate
//! exports them as unmangled `extern "C"` symbols.
//!
//! ## Quick Start
//!
//! ```rust
//! use numkernel::prelude::*;
//!
//! assert_eq!(square(7u64), 49);
//! assert_eq!(square(0u64), 0);
//!
//! let input = vec![1.0, -2.0, 0.5];
//! let mut output = vec![0.0; 3];
//! square_all(3, &input, &mut output)?;
//! assert_eq!(output, vec![1.0, 4.0, 0.25]);
//! # Result::<(), KernelError>::Ok(())
//! ```
//!
//! ### Result and Error Handling
//!
//! `square_all` returns `Result<(), KernelError>`. It fails only when `length`
//! exceeds one of the buffers:
//!
//! ```rust
//! use numkernel::prelude::*;
//!
//! let input = [1.0, 2.0];
//! let mut output = [0.0; 8];
//!
//! match square_all(4, &input, &mut output) {
//!     Ok(()) => unreachable!(),
//!     Err(e) => eprintln!("Squaring failed: {}", e),
//! }
//! ```
//!
//! Overflow in `square` is never an error:
//!
//! ```rust
//! use numkernel::prelude::*;
//!
//! assert_eq!(square(u64::MAX), 1);
//! ```
//!
//! ## Unchecked Access
//!
//! [`square_all_unchecked`](prelude::square_all_unchecked) takes raw pointers
//! and performs no bounds checks, matching a C `(length, input, output)`
//! signature. Passing a length larger than either buffer is undefined behavior.
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! The kernel never allocates. Disable default features to drop `std`:
//!
//! ```toml
//! [dependencies]
//! numkernel = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

// Layer 1: Primitives - errors and bounds checks.
mod primitives;

// Layer 2: Math - squaring kernels.
mod math;

// Public entry points.
mod api;

pub use api::{
    KernelError, square, square_all, square_all_unchecked, square_in_place, square_slice,
};

// Standard numkernel prelude.
pub mod prelude {
    pub use crate::api::{
        KernelError, square, square_all, square_all_unchecked, square_in_place, square_slice,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
