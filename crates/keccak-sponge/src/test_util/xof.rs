//! [`Xof`] tests.

extern crate alloc;

use alloc::{vec, vec::Vec};

use super::test_input;
use crate::xof::{Xof, XofReader};

/// Invokes `callback` for each XOF test.
///
/// # Example
///
/// ```
/// use keccak_sponge::Shake128;
///
/// macro_rules! run_test {
///     ($test:ident) => {
///         keccak_sponge::test_util::xof::$test::<Shake128>();
///     };
/// }
/// keccak_sponge::for_each_xof_test!(run_test);
/// ```
#[macro_export]
macro_rules! for_each_xof_test {
    ($callback:ident) => {
        $crate::__apply! {
            $callback,
            test_chunked_update,
            test_chunked_read,
            test_prefix,
            test_empty_update,
            test_distinct_inputs,
            test_finalize_xof_into,
        }
    };
}

/// Performs all of the tests in this module.
///
/// This macro expands into a bunch of individual `#[test]`
/// functions.
///
/// # Example
///
/// ```
/// use keccak_sponge::test_xof;
///
/// test_xof!(shake256, keccak_sponge::Shake256);
/// ```
#[macro_export]
macro_rules! test_xof {
    ($name:ident, $xof:ty) => {
        mod $name {
            #[allow(unused_imports)]
            use super::*;

            $crate::test_xof!($xof);
        }
    };
    ($xof:ty) => {
        macro_rules! __xof_test {
            ($test:ident) => {
                #[test]
                fn $test() {
                    $crate::test_util::xof::$test::<$xof>()
                }
            };
        }
        $crate::for_each_xof_test!(__xof_test);
    };
}
pub use test_xof;

fn xof_of<T: Xof + Default>(data: &[u8], len: usize) -> Vec<u8> {
    let mut xof = T::default();
    xof.update(data);
    let mut out = vec![0u8; len];
    xof.finalize_xof().read(&mut out);
    out
}

/// Tests that splitting the input into chunks does not change
/// the output.
pub fn test_chunked_update<T: Xof + Default>() {
    let data = test_input(1000);
    let want = xof_of::<T>(&data, 64);
    for size in [1, 7, 71, 136, 168, 199, 500] {
        let mut xof = T::default();
        for chunk in data.chunks(size) {
            xof.update(chunk);
        }
        let mut got = vec![0u8; 64];
        xof.finalize_xof().read(&mut got);
        assert_eq!(got, want, "{}: chunk size {size}", T::NAME);
    }
}

/// Tests that splitting the output into reads does not change
/// the output.
pub fn test_chunked_read<T: Xof + Default>() {
    let data = test_input(100);
    let want = xof_of::<T>(&data, 1000);
    for size in [1, 13, 136, 168, 400] {
        let mut xof = T::default();
        xof.update(&data);
        let mut reader = xof.finalize_xof();
        let mut got = vec![0u8; 1000];
        for chunk in got.chunks_mut(size) {
            reader.read(chunk);
        }
        assert_eq!(got, want, "{}: read size {size}", T::NAME);
    }
}

/// Tests that a shorter output is a prefix of a longer one.
pub fn test_prefix<T: Xof + Default>() {
    let data = test_input(300);
    let long = xof_of::<T>(&data, 777);
    for len in [0, 1, 32, 135, 136, 137, 168, 169, 500] {
        let short = xof_of::<T>(&data, len);
        assert_eq!(short[..], long[..len], "{}: length {len}", T::NAME);
    }
}

/// Tests that empty updates are ignored.
pub fn test_empty_update<T: Xof + Default>() {
    let mut xof = T::default();
    xof.update(&[]);
    xof.update(b"abc");
    xof.update(&[]);
    let mut got = [0u8; 32];
    xof.finalize_xof_into(&mut got);
    assert_eq!(got[..], xof_of::<T>(b"abc", 32)[..], "{}", T::NAME);
}

/// Tests that different inputs give different outputs.
pub fn test_distinct_inputs<T: Xof + Default>() {
    let a = xof_of::<T>(b"", 32);
    let b = xof_of::<T>(&[0], 32);
    let c = xof_of::<T>(&[0, 0], 32);
    assert_ne!(a, b, "{}", T::NAME);
    assert_ne!(b, c, "{}", T::NAME);
    assert_ne!(a, c, "{}", T::NAME);
}

/// Tests that [`Xof::finalize_xof_into`] matches
/// [`Xof::finalize_xof`].
pub fn test_finalize_xof_into<T: Xof + Default>() {
    let data = test_input(50);
    let mut xof = T::default();
    xof.update(&data);
    let mut got = [0u8; 200];
    xof.clone().finalize_xof_into(&mut got);

    let mut want = [0u8; 200];
    let mut reader = xof.finalize_xof();
    reader.read(&mut want);
    assert_eq!(got, want, "{}", T::NAME);
}
