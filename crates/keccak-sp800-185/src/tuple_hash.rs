//! TupleHash per NIST [SP 800-185].
//!
//! [SP 800-185]: https://nvlpubs.nist.gov/nistpubs/SpecialPublications/NIST.SP.800-185.pdf

use keccak_sponge::XofReader;

use crate::{
    cshake::{CShake128, CShake256, Customizable},
    encode::{bit_len, encode_string, right_encode},
};

/// The function name for TupleHash.
const TUPLE_HASH: &[u8] = b"TupleHash";

/// A cryptographic hash over a set of strings such that each
/// string is unambiguously encoded.
///
/// For example, the TupleHash of `("abc", "d")` will produce
/// a different hash value than the TupleHash of `("ab", "cd")`.
///
/// For the XOF variant, see [`TupleHashXof`].
///
/// # Warning
///
/// `TupleHash` is only defined for cSHAKE128 and cSHAKE256.
#[derive(Clone, Debug)]
pub struct TupleHash<X> {
    xof: X,
}

impl<X: Customizable> TupleHash<X> {
    /// Creates a `TupleHash` with the customization string `s`.
    pub fn new(s: &[u8]) -> Self {
        Self {
            xof: X::with_function_name(TUPLE_HASH, s),
        }
    }

    /// Writes the string `s` to the hash.
    pub fn update(&mut self, s: &[u8]) {
        for x in &encode_string(s) {
            self.xof.update(x);
        }
    }

    /// Writes a `out.len()` byte hash to `out`.
    pub fn finalize_into(mut self, out: &mut [u8]) {
        self.xof.update(right_encode(bit_len(out.len())).as_bytes());
        self.xof.finalize_xof_into(out);
    }

    /// Returns an `N` byte hash.
    pub fn finalize<const N: usize>(self) -> [u8; N] {
        let mut out = [0u8; N];
        self.finalize_into(&mut out);
        out
    }
}

impl<X: Customizable> Default for TupleHash<X> {
    fn default() -> Self {
        Self::new(&[])
    }
}

/// A cryptographic hash over a set of strings such that each
/// string is unambiguously encoded.
///
/// # Warning
///
/// `TupleHashXof` is only defined for cSHAKE128 and cSHAKE256.
#[derive(Clone, Debug)]
pub struct TupleHashXof<X> {
    xof: X,
}

impl<X: Customizable> TupleHashXof<X> {
    /// Creates a `TupleHashXof` with the customization string
    /// `s`.
    pub fn new(s: &[u8]) -> Self {
        Self {
            xof: X::with_function_name(TUPLE_HASH, s),
        }
    }

    /// Writes the string `s` to the hash.
    pub fn update(&mut self, s: &[u8]) {
        for x in &encode_string(s) {
            self.xof.update(x);
        }
    }

    /// Returns a variable-size output.
    pub fn finalize_xof(mut self) -> TupleHashXofReader<X::Reader> {
        self.xof.update(right_encode(0).as_bytes());
        TupleHashXofReader(self.xof.finalize_xof())
    }
}

impl<X: Customizable> Default for TupleHashXof<X> {
    fn default() -> Self {
        Self::new(&[])
    }
}

/// An [`XofReader`] for [`TupleHashXof`].
#[derive(Clone, Debug)]
pub struct TupleHashXofReader<R>(R);

impl<R: XofReader> XofReader for TupleHashXofReader<R> {
    #[inline]
    fn read(&mut self, out: &mut [u8]) {
        self.0.read(out);
    }
}

/// TupleHash128.
pub type TupleHash128 = TupleHash<CShake128>;
/// TupleHash256.
pub type TupleHash256 = TupleHash<CShake256>;
/// TupleHashXOF128.
pub type TupleHashXof128 = TupleHashXof<CShake128>;
/// TupleHashXOF256.
pub type TupleHashXof256 = TupleHashXof<CShake256>;

/// `TupleHash` over a fixed-size set of inputs.
pub fn tuple_hash<X, I, const N: usize>(s: &[u8], x: I) -> [u8; N]
where
    X: Customizable,
    I: IntoIterator,
    I::Item: AsRef<[u8]>,
{
    let mut h = TupleHash::<X>::new(s);
    for xi in x {
        h.update(xi.as_ref());
    }
    h.finalize()
}

/// `TupleHashXof` over a fixed-size set of inputs.
pub fn tuple_hash_xof<X, I>(s: &[u8], x: I) -> impl XofReader + use<X, I>
where
    X: Customizable,
    I: IntoIterator,
    I::Item: AsRef<[u8]>,
{
    let mut h = TupleHashXof::<X>::new(s);
    for xi in x {
        h.update(xi.as_ref());
    }
    h.finalize_xof()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_points_matter() {
        let a: [u8; 32] = tuple_hash::<CShake128, _, 32>(b"", [b"abc".as_slice(), b"d".as_slice()]);
        let b: [u8; 32] = tuple_hash::<CShake128, _, 32>(b"", [b"ab".as_slice(), b"cd".as_slice()]);
        let c: [u8; 32] = tuple_hash::<CShake128, _, 32>(b"", [b"abcd".as_slice()]);
        assert_ne!(a, b);
        assert_ne!(a, c);
        assert_ne!(b, c);
    }

    #[test]
    fn test_empty_elements_count() {
        let none: [u8; 32] = tuple_hash::<CShake256, [&[u8]; 0], 32>(b"", []);
        let one: [u8; 32] = tuple_hash::<CShake256, _, 32>(b"", [b"".as_slice()]);
        assert_ne!(none, one);
    }

    #[test]
    fn test_xof_prefix() {
        let mut a = tuple_hash_xof::<CShake128, _>(b"S", [b"x".as_slice(), b"y".as_slice()]);
        let mut b = tuple_hash_xof::<CShake128, _>(b"S", [b"x".as_slice(), b"y".as_slice()]);
        let long = a.read_fixed::<100>();
        let short = b.read_fixed::<10>();
        assert_eq!(short[..], long[..10]);
    }
}
