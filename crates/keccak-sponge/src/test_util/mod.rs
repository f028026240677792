//! Utilities for testing sponge-based functions.
//!
//! If you build an [`Xof`][crate::Xof] on top of this crate it
//! is highly recommended that you use these tests.

#![allow(clippy::arithmetic_side_effects)]
#![allow(clippy::panic)]
#![cfg(any(test, feature = "test_util"))]
#![cfg_attr(docsrs, doc(cfg(feature = "test_util")))]
#![forbid(unsafe_code)]

extern crate alloc;

pub mod xof;

use alloc::vec::Vec;

pub use xof::test_xof;

#[macro_export]
#[doc(hidden)]
macro_rules! __apply {
    ($callback:ident, $($tt:tt),* $(,)?) => {
        $(
            $callback!($tt);
        )*
    };
}
pub use __apply;

/// Returns `len` bytes of deterministic, non-repeating test
/// input.
pub fn test_input(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i % 251) as u8).collect()
}
