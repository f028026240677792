//! SHAKE per [FIPS 202].
//!
//! [FIPS 202]: https://csrc.nist.gov/pubs/fips/202/final

use crate::{
    params::{Domain, SpongeParams},
    stages::{Absorber, Squeezer},
    xof::Xof,
};

macro_rules! impl_shake {
    ($name:ident, $params:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Debug)]
        pub struct $name {
            absorber: Absorber,
        }

        impl $name {
            /// Creates a new SHAKE instance.
            #[inline]
            pub const fn new() -> Self {
                Self {
                    absorber: Absorber::new(SpongeParams::$params, Domain::Shake),
                }
            }
        }

        impl Default for $name {
            #[inline]
            fn default() -> Self {
                Self::new()
            }
        }

        impl Xof for $name {
            const NAME: &'static str = $doc;

            type Reader = Squeezer;

            #[inline]
            fn update(&mut self, data: &[u8]) {
                self.absorber.absorb(data);
            }

            #[inline]
            fn finalize_xof(self) -> Self::Reader {
                self.absorber.finalize()
            }
        }
    };
}
impl_shake!(Shake128, SHAKE128, "SHAKE128");
impl_shake!(Shake256, SHAKE256, "SHAKE256");
