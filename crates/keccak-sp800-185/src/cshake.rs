//! cSHAKE per [SP 800-185].
//!
//! [SP 800-185]: https://nvlpubs.nist.gov/nistpubs/SpecialPublications/NIST.SP.800-185.pdf

#[cfg(feature = "alloc")]
use alloc::vec::Vec;
use core::{fmt, iter};

use keccak_sponge::{
    Absorber, Domain, Error, InvalidParameterError, Phase, Sponge, SpongeParams,
    SpongeStateError, Squeezer, Xof,
};
use tracing::debug;

use crate::encode::{EncodedString, LeftEncode, encode_string, left_encode};

/// The customization pre-image
/// `bytepad(encode_string(N) || encode_string(S), rate)`,
/// without the trailing zeros.
///
/// Absorbing [`parts`][Self::parts] and then zero-filling the
/// block yields the full pre-image.
#[derive(Copy, Clone, Debug)]
pub(crate) struct Preimage<'a> {
    rate: LeftEncode,
    n: EncodedString<'a>,
    s: EncodedString<'a>,
}

impl<'a> Preimage<'a> {
    /// Returns `None` if both `n` and `s` are empty, in which
    /// case cSHAKE is plain SHAKE.
    pub(crate) fn new(params: SpongeParams, n: &'a [u8], s: &'a [u8]) -> Option<Self> {
        if n.is_empty() && s.is_empty() {
            return None;
        }
        Some(Self {
            rate: left_encode(params.rate() as u128),
            n: encode_string(n),
            s: encode_string(s),
        })
    }

    pub(crate) fn parts(&self) -> [&[u8]; 5] {
        [
            self.rate.as_bytes(),
            self.n.prefix(),
            self.n.string(),
            self.s.prefix(),
            self.s.string(),
        ]
    }
}

/// cSHAKE with a rate chosen at runtime.
///
/// The lifecycle is `new`, an optional
/// [`customize`][Self::customize], any number of
/// [`feed`][Self::feed] calls, then any number of
/// [`result`][Self::result] calls. Each result continues the
/// output stream where the previous one stopped.
///
/// # Example
///
/// ```
/// use keccak_sp800_185::{CShake, SpongeParams};
///
/// let mut h = CShake::new(SpongeParams::SHAKE128, 32).unwrap();
/// h.customize(b"", b"Email Signature").unwrap();
/// h.feed(&[0, 1, 2, 3]).unwrap();
///
/// let mut out = [0u8; 32];
/// h.result_into(&mut out).unwrap();
/// assert_eq!(out[..4], [0xc1, 0xc3, 0x69, 0x25]);
/// ```
#[derive(Clone)]
pub struct CShake {
    sponge: Sponge,
    output_length: usize,
}

impl CShake {
    /// Creates an uncustomized instance that produces
    /// `output_length` bytes per [`result`][Self::result].
    ///
    /// # Errors
    ///
    /// Fails with [`InvalidParameterError::ZeroOutputLength`]
    /// if `output_length` is zero.
    pub fn new(params: SpongeParams, output_length: usize) -> Result<Self, InvalidParameterError> {
        if output_length == 0 {
            debug!("rejected zero output length");
            return Err(InvalidParameterError::ZeroOutputLength);
        }
        Ok(Self {
            sponge: Sponge::new(params, Domain::Shake),
            output_length,
        })
    }

    /// Creates an instance with the function name `n` and
    /// customization string `s`.
    pub fn with_customization(
        params: SpongeParams,
        output_length: usize,
        n: &[u8],
        s: &[u8],
    ) -> Result<Self, Error> {
        let mut h = Self::new(params, output_length)?;
        h.customize(n, s)?;
        Ok(h)
    }

    /// Returns the rate/capacity split.
    pub const fn params(&self) -> SpongeParams {
        self.sponge.params()
    }

    /// Returns the number of bytes produced per
    /// [`result`][Self::result].
    pub const fn output_length(&self) -> usize {
        self.output_length
    }

    /// Returns the current phase.
    pub const fn phase(&self) -> Phase {
        self.sponge.phase()
    }

    /// Absorbs the function name `n` and customization string
    /// `s`.
    ///
    /// If both are empty nothing is absorbed and the output is
    /// plain SHAKE, but the instance still counts as
    /// customized.
    ///
    /// # Errors
    ///
    /// Fails if the instance was already customized, or if
    /// anything has been fed or output.
    pub fn customize(&mut self, n: &[u8], s: &[u8]) -> Result<(), SpongeStateError> {
        match Preimage::new(self.params(), n, s) {
            Some(pre) => self.sponge.customize(Domain::CShake, pre.parts()),
            None => self.sponge.customize(Domain::Shake, iter::empty::<&[u8]>()),
        }
    }

    /// Absorbs message bytes.
    ///
    /// Empty input is a no-op.
    ///
    /// # Errors
    ///
    /// Fails once [`result`][Self::result] has been called.
    pub fn feed(&mut self, data: &[u8]) -> Result<(), SpongeStateError> {
        self.sponge.absorb(data)
    }

    /// Returns the next [`output_length`][Self::output_length]
    /// bytes of output, finalizing first if needed.
    #[cfg(feature = "alloc")]
    #[cfg_attr(docsrs, doc(cfg(feature = "alloc")))]
    pub fn result(&mut self) -> Vec<u8> {
        let mut out = alloc::vec![0u8; self.output_length];
        self.sponge.squeeze(&mut out);
        out
    }

    /// Writes the next [`output_length`][Self::output_length]
    /// bytes of output to `out`, finalizing first if needed.
    ///
    /// # Errors
    ///
    /// Fails if `out.len()` differs from the output length.
    pub fn result_into(&mut self, out: &mut [u8]) -> Result<(), InvalidParameterError> {
        if out.len() != self.output_length {
            return Err(InvalidParameterError::OutputLength {
                expected: self.output_length,
                got: out.len(),
            });
        }
        self.sponge.squeeze(out);
        Ok(())
    }

    /// Writes the next `out.len()` bytes of output, ignoring
    /// the configured output length.
    pub fn squeeze(&mut self, out: &mut [u8]) {
        self.sponge.squeeze(out);
    }

    /// Discards all input, output and customization.
    pub fn reset(&mut self) {
        self.sponge.reset();
    }
}

impl fmt::Debug for CShake {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CShake")
            .field("sponge", &self.sponge)
            .field("output_length", &self.output_length)
            .finish()
    }
}

/// An [`Xof`] that can be created with a function name and a
/// customization string.
pub trait Customizable: Xof {
    /// The rate in bytes.
    const RATE: usize;

    /// Creates an instance with the function name `n` and
    /// customization string `s`.
    fn with_function_name(n: &[u8], s: &[u8]) -> Self;

    /// Zero-pads the input absorbed so far to a whole block.
    fn fill_block(&mut self);
}

macro_rules! impl_cshake {
    ($name:ident, $params:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Debug)]
        pub struct $name {
            absorber: Absorber,
        }

        impl $name {
            /// Creates a cSHAKE instance with the customization
            /// string `s`.
            #[inline]
            pub fn new(s: &[u8]) -> Self {
                Self::new_with_function_name(&[], s)
            }

            /// Creates a cSHAKE instance with the function name
            /// `n` and customization string `s`.
            pub fn new_with_function_name(n: &[u8], s: &[u8]) -> Self {
                let params = SpongeParams::$params;
                match Preimage::new(params, n, s) {
                    Some(pre) => {
                        let mut absorber = Absorber::new(params, Domain::CShake);
                        for part in pre.parts() {
                            absorber.absorb(part);
                        }
                        absorber.fill_block();
                        Self { absorber }
                    }
                    None => Self {
                        absorber: Absorber::new(params, Domain::Shake),
                    },
                }
            }
        }

        impl Default for $name {
            #[inline]
            fn default() -> Self {
                Self::new(&[])
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

        impl Customizable for $name {
            const RATE: usize = SpongeParams::$params.rate();

            #[inline]
            fn with_function_name(n: &[u8], s: &[u8]) -> Self {
                Self::new_with_function_name(n, s)
            }

            #[inline]
            fn fill_block(&mut self) {
                self.absorber.fill_block();
            }
        }
    };
}
impl_cshake!(CShake128, SHAKE128, "cSHAKE128");
impl_cshake!(CShake256, SHAKE256, "cSHAKE256");
