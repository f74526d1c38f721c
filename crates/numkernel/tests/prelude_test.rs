//! Tests for the prelude module.
//!
//! These tests verify that one `use numkernel::prelude::*;` is enough to call
//! every entry point and name the error type.

use numkernel::prelude::*;

/// Test that all prelude imports work together.
#[test]
fn test_prelude_imports() -> Result<(), KernelError> {
    assert_eq!(square(12u64), 144);

    let input = [2.0, 0.5];
    let mut output = [0.0; 2];
    square_all(2, &input, &mut output)?;
    square_slice(&input, &mut output)?;
    square_in_place(&mut output);
    unsafe { square_all_unchecked(0, input.as_ptr(), output.as_mut_ptr()) };

    assert_eq!(output, [16.0, 0.0625]);
    Ok(())
}

/// Test that the crate root re-exports match the prelude.
#[test]
fn test_root_reexports() {
    assert_eq!(numkernel::square(5u64), square(5u64));

    let err: numkernel::KernelError = square_all(1, &[] as &[f64], &mut []).unwrap_err();
    assert!(matches!(err, KernelError::OutOfRange { length: 1, capacity: 0, .. }));
}
