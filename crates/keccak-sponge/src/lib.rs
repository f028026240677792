//! The Keccak sponge and duplex construction.
//!
//! This crate layers a rate, padding and an absorb/squeeze
//! protocol on top of [`keccak_perm`]. It provides:
//!
//! - [`Duplex`]: whole-block `absorb_block`/`squeeze_block`.
//! - [`Sponge`]: a runtime-checked state machine that buffers
//!   arbitrary input, pads with the pad10*1 rule and squeezes
//!   arbitrary output.
//! - [`Absorber`] and [`Squeezer`]: the same engine, but with
//!   the absorb and squeeze phases as separate types.
//! - The [FIPS 202] functions: [`Sha3_224`], [`Sha3_256`],
//!   [`Sha3_384`], [`Sha3_512`], [`Shake128`] and [`Shake256`],
//!   plus the original [`Keccak256`].
//! - The [`Xof`] and [`XofReader`] traits that higher layers
//!   build on.
//!
//! # Example
//!
//! ```
//! use keccak_sponge::{Domain, Sponge, SpongeParams, SpongeStateError};
//!
//! let mut sponge = Sponge::new(SpongeParams::SHAKE128, Domain::Shake);
//! sponge.absorb(b"hello, ").unwrap();
//! sponge.absorb(b"world").unwrap();
//!
//! let mut out = [0u8; 32];
//! sponge.squeeze(&mut out);
//!
//! assert_eq!(sponge.absorb(b"!"), Err(SpongeStateError::AbsorbAfterFinalize));
//! ```
//!
//! [FIPS 202]: https://csrc.nist.gov/pubs/fips/202/final

#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(not(any(test, doctest, feature = "std")), no_std)]
#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod duplex;
mod engine;
mod error;
mod params;
pub mod sha3;
pub mod shake;
mod sponge;
mod stages;
pub mod test_util;
mod util;
pub mod xof;

pub use keccak_perm;

pub use crate::{
    duplex::Duplex,
    error::{Error, InvalidParameterError, SpongeStateError},
    params::{Domain, MAX_RATE, SpongeParams, WIDTH_BITS},
    sha3::{Keccak256, Sha3_224, Sha3_256, Sha3_384, Sha3_512},
    shake::{Shake128, Shake256},
    sponge::{Phase, Sponge},
    stages::{Absorber, Squeezer},
    xof::{Xof, XofReader},
};
