//! The fixed-output SHA-3 functions per [FIPS 202], plus the
//! original Keccak-256.
//!
//! [FIPS 202]: https://csrc.nist.gov/pubs/fips/202/final

use crate::{
    params::{Domain, SpongeParams},
    stages::Absorber,
};

macro_rules! impl_sha3 {
    ($name:ident, $size:literal, $params:ident, $domain:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Debug)]
        pub struct $name {
            absorber: Absorber,
        }

        impl $name {
            /// The size in bytes of the digest.
            pub const DIGEST_SIZE: usize = $size;
            /// The rate in bytes.
            pub const BLOCK_SIZE: usize = SpongeParams::$params.rate();

            /// Creates a new instance.
            #[inline]
            pub const fn new() -> Self {
                Self {
                    absorber: Absorber::new(SpongeParams::$params, Domain::$domain),
                }
            }

            /// Updates the running hash with `data`.
            #[inline]
            pub fn update(&mut self, data: &[u8]) {
                self.absorber.absorb(data);
            }

            /// Returns the digest.
            pub fn digest(self) -> [u8; $size] {
                let mut out = [0u8; $size];
                self.absorber.finalize().squeeze(&mut out);
                out
            }

            /// Returns the digest of `data`.
            pub fn hash(data: &[u8]) -> [u8; $size] {
                let mut h = Self::new();
                h.update(data);
                h.digest()
            }
        }

        impl Default for $name {
            #[inline]
            fn default() -> Self {
                Self::new()
            }
        }
    };
}
impl_sha3!(Sha3_224, 28, SHA3_224, Sha3, "SHA3-224");
impl_sha3!(Sha3_256, 32, SHA3_256, Sha3, "SHA3-256");
impl_sha3!(Sha3_384, 48, SHA3_384, Sha3, "SHA3-384");
impl_sha3!(Sha3_512, 64, SHA3_512, Sha3, "SHA3-512");
impl_sha3!(
    Keccak256,
    32,
    SHA3_256,
    Keccak,
    "Keccak-256, the pre-standard padding used by Ethereum"
);
