//! The customizable Keccak functions from NIST [SP 800-185].
//!
//! - [`encode`]: `left_encode`, `right_encode`,
//!   `encode_string` and `bytepad`.
//! - [`CShake`]: cSHAKE with a runtime rate and a checked
//!   lifecycle, plus the typed [`CShake128`] and [`CShake256`].
//! - [`kmac`]: KMAC and KMACXOF.
//! - [`tuple_hash`]: TupleHash and TupleHashXOF.
//! - [`XofConfig`]: a [`CShake`] instance described as data.
//!
//! # Example
//!
//! ```
//! use keccak_sp800_185::{CShake128, Xof, XofReader};
//!
//! let mut h = CShake128::new(b"Email Signature");
//! h.update(&[0, 1, 2, 3]);
//! let out: [u8; 32] = h.finalize_xof().read_fixed();
//! assert_eq!(out[..4], [0xc1, 0xc3, 0x69, 0x25]);
//! ```
//!
//! [SP 800-185]: https://nvlpubs.nist.gov/nistpubs/SpecialPublications/NIST.SP.800-185.pdf

#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(not(any(test, doctest, feature = "std")), no_std)]
#![forbid(unsafe_code)]
#![warn(missing_docs)]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "alloc")]
#[cfg_attr(docsrs, doc(cfg(feature = "alloc")))]
mod config;
mod cshake;
pub mod encode;
pub mod kmac;
pub mod tuple_hash;

#[cfg(feature = "alloc")]
pub use crate::config::{Variant, XofConfig};
pub use crate::{
    cshake::{CShake, CShake128, CShake256, Customizable},
    kmac::{Kmac128, Kmac256, KmacXof128, KmacXof256},
    tuple_hash::{TupleHash128, TupleHash256, TupleHashXof128, TupleHashXof256},
};
pub use keccak_sponge::{
    self, Error, InvalidParameterError, Phase, SpongeParams, SpongeStateError, Xof, XofReader,
};
