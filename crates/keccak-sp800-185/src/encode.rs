//! The length-prefixed encodings from [SP 800-185] section 2.3.
//!
//! Integers are encoded from a `u128`, so every byte or bit
//! length a slice can have is representable.
//!
//! [SP 800-185]: https://nvlpubs.nist.gov/nistpubs/SpecialPublications/NIST.SP.800-185.pdf

#![allow(clippy::arithmetic_side_effects)]

#[cfg(feature = "alloc")]
use alloc::vec::Vec;
use core::{array, fmt};

#[cfg(feature = "alloc")]
use keccak_sponge::InvalidParameterError;

/// The longest encoding: a length byte plus 16 value bytes.
const MAX_ENCODED: usize = 1 + 16;

/// Returns the minimal number of bytes needed to write `x`,
/// which is at least one.
const fn byte_len(x: u128) -> usize {
    let bits = (u128::BITS - x.leading_zeros()) as usize;
    if bits == 0 { 1 } else { bits.div_ceil(8) }
}

/// Returns the bit length of a byte length.
#[inline]
pub const fn bit_len(bytes: usize) -> u128 {
    (bytes as u128) * 8
}

macro_rules! encoded_int {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Copy, Clone, Eq, PartialEq)]
        pub struct $name {
            buf: [u8; MAX_ENCODED],
            len: usize,
        }

        impl $name {
            /// Returns the encoded bytes.
            #[inline]
            pub fn as_bytes(&self) -> &[u8] {
                &self.buf[..self.len]
            }
        }

        impl AsRef<[u8]> for $name {
            #[inline]
            fn as_ref(&self) -> &[u8] {
                self.as_bytes()
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_tuple(stringify!($name))
                    .field(&self.as_bytes())
                    .finish()
            }
        }
    };
}
encoded_int!(LeftEncode, "The output of [`left_encode`].");
encoded_int!(RightEncode, "The output of [`right_encode`].");

/// Encodes `x` as its length in bytes followed by its
/// big-endian bytes.
///
/// `left_encode(0)` is `01 00`.
pub const fn left_encode(x: u128) -> LeftEncode {
    let n = byte_len(x);
    let be = x.to_be_bytes();
    let mut buf = [0u8; MAX_ENCODED];
    buf[0] = n as u8;
    let mut i = 0;
    while i < n {
        buf[1 + i] = be[16 - n + i];
        i += 1;
    }
    LeftEncode { buf, len: n + 1 }
}

/// Encodes `x` as its big-endian bytes followed by its length
/// in bytes.
///
/// `right_encode(0)` is `00 01`.
pub const fn right_encode(x: u128) -> RightEncode {
    let n = byte_len(x);
    let be = x.to_be_bytes();
    let mut buf = [0u8; MAX_ENCODED];
    let mut i = 0;
    while i < n {
        buf[i] = be[16 - n + i];
        i += 1;
    }
    buf[n] = n as u8;
    RightEncode { buf, len: n + 1 }
}

/// The output of [`encode_string`]: a `left_encode` of the bit
/// length followed by the string itself.
///
/// Iterating over a `&EncodedString` yields the two pieces, so
/// nothing needs to be copied.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct EncodedString<'a> {
    prefix: LeftEncode,
    s: &'a [u8],
}

impl<'a> EncodedString<'a> {
    /// Returns the length prefix.
    #[inline]
    pub fn prefix(&self) -> &[u8] {
        self.prefix.as_bytes()
    }

    /// Returns the encoded string.
    #[inline]
    pub const fn string(&self) -> &'a [u8] {
        self.s
    }

    /// Returns the total length in bytes.
    #[inline]
    pub const fn len(&self) -> usize {
        self.prefix.len + self.s.len()
    }

    /// Reports whether the encoding is empty, which it never
    /// is.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Returns the encoding as a contiguous vector.
    #[cfg(feature = "alloc")]
    #[cfg_attr(docsrs, doc(cfg(feature = "alloc")))]
    pub fn to_vec(&self) -> Vec<u8> {
        let mut v = Vec::with_capacity(self.len());
        v.extend_from_slice(self.prefix());
        v.extend_from_slice(self.s);
        v
    }
}

impl<'b, 'a: 'b> IntoIterator for &'b EncodedString<'a> {
    type Item = &'b [u8];
    type IntoIter = array::IntoIter<&'b [u8], 2>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        [self.prefix(), self.s].into_iter()
    }
}

/// Encodes `s` so that it can be unambiguously parsed from the
/// start of a longer string.
pub const fn encode_string(s: &[u8]) -> EncodedString<'_> {
    EncodedString {
        prefix: left_encode(bit_len(s.len())),
        s,
    }
}

/// Prepends `left_encode(w)` to `x`, then pads with zeros to a
/// multiple of `w` bytes.
///
/// # Errors
///
/// Fails with [`InvalidParameterError::ZeroPadWidth`] if `w`
/// is zero.
#[cfg(feature = "alloc")]
#[cfg_attr(docsrs, doc(cfg(feature = "alloc")))]
pub fn bytepad(x: &[u8], w: usize) -> Result<Vec<u8>, InvalidParameterError> {
    if w == 0 {
        return Err(InvalidParameterError::ZeroPadWidth);
    }
    let prefix = left_encode(w as u128);
    let len = prefix.len + x.len();
    let padded = len.div_ceil(w) * w;

    let mut z = Vec::with_capacity(padded);
    z.extend_from_slice(prefix.as_bytes());
    z.extend_from_slice(x);
    z.resize(padded, 0);
    Ok(z)
}
