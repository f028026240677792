//! The Keccak-f\[1600\] permutation per [FIPS 202].
//!
//! This crate knows nothing about rates, padding or messages.
//! It only transforms a 1600-bit [`State`] of twenty-five
//! 64-bit [`Lane`]s.
//!
//! # Example
//!
//! ```
//! use keccak_perm::{State, permute};
//!
//! let mut state = State::new();
//! permute(&mut state);
//! assert_eq!(state[(0, 0)].get(), 0xF1258F7940E1DDE7);
//! ```
//!
//! [FIPS 202]: https://csrc.nist.gov/pubs/fips/202/final

#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(not(any(test, doctest, feature = "std")), no_std)]
#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod consts;
mod lane;
pub mod round;
mod state;

pub use consts::{RC, RHO, ROUNDS};
pub use lane::Lane;
pub use state::{LANES, State, WIDTH};

/// Applies Keccak-f\[1600\] (all [`ROUNDS`] rounds) to `state`.
#[inline]
pub fn permute(state: &mut State) {
    permute_rounds(state, ROUNDS);
}

/// Applies Keccak-p\[1600, `n`\] to `state`.
///
/// The last `n` round constants are used, so `n = 24` is
/// Keccak-f\[1600\] and `n = 12` is the permutation used by
/// TurboSHAKE and KangarooTwelve. Values of `n` above
/// [`ROUNDS`] are clamped to [`ROUNDS`].
pub fn permute_rounds(state: &mut State, n: usize) {
    let first = ROUNDS.saturating_sub(n);
    for &rc in &RC[first..] {
        round::round(state, rc);
    }
}

/// Applies Keccak-f\[1600\] to raw lanes.
///
/// Lane `(x, y)` is `words[x + 5*y]`.
pub fn keccak_f1600(words: &mut [u64; LANES]) {
    let mut state = State::from_words(*words);
    permute(&mut state);
    *words = state.to_words();
}
