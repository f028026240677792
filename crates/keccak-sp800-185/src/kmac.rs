//! KMAC per NIST [SP 800-185].
//!
//! [SP 800-185]: https://nvlpubs.nist.gov/nistpubs/SpecialPublications/NIST.SP.800-185.pdf

use keccak_sponge::XofReader;

use crate::{
    cshake::{CShake128, CShake256, Customizable},
    encode::{bit_len, encode_string, left_encode, right_encode},
};

/// The function name for KMAC.
const KMAC: &[u8] = b"KMAC";

/// Returns cSHAKE with `N = "KMAC"` after absorbing
/// `bytepad(encode_string(key), rate)`.
fn keyed<X: Customizable>(key: &[u8], s: &[u8]) -> X {
    let mut xof = X::with_function_name(KMAC, s);
    xof.update(left_encode(X::RATE as u128).as_bytes());
    for x in &encode_string(key) {
        xof.update(x);
    }
    xof.fill_block();
    xof
}

/// KMAC with a fixed output length.
///
/// The output length is bound into the tag, so a shorter tag
/// is not a prefix of a longer one. For the XOF variant, see
/// [`KmacXof`].
///
/// # Warning
///
/// KMAC is only defined for cSHAKE128 and cSHAKE256.
#[derive(Clone, Debug)]
pub struct Kmac<X> {
    xof: X,
}

impl<X: Customizable> Kmac<X> {
    /// Creates a KMAC instance with the key `key` and the
    /// customization string `s`.
    pub fn new(key: &[u8], s: &[u8]) -> Self {
        Self {
            xof: keyed(key, s),
        }
    }

    /// Writes `data` to the MAC.
    #[inline]
    pub fn update(&mut self, data: &[u8]) {
        self.xof.update(data);
    }

    /// Writes a `out.len()` byte tag to `out`.
    pub fn finalize_into(mut self, out: &mut [u8]) {
        self.xof.update(right_encode(bit_len(out.len())).as_bytes());
        self.xof.finalize_xof_into(out);
    }

    /// Returns an `N` byte tag.
    pub fn finalize<const N: usize>(self) -> [u8; N] {
        let mut out = [0u8; N];
        self.finalize_into(&mut out);
        out
    }
}

/// KMAC with arbitrary-length output.
///
/// # Warning
///
/// KMAC is only defined for cSHAKE128 and cSHAKE256.
#[derive(Clone, Debug)]
pub struct KmacXof<X> {
    xof: X,
}

impl<X: Customizable> KmacXof<X> {
    /// Creates a KMACXOF instance with the key `key` and the
    /// customization string `s`.
    pub fn new(key: &[u8], s: &[u8]) -> Self {
        Self {
            xof: keyed(key, s),
        }
    }

    /// Writes `data` to the MAC.
    #[inline]
    pub fn update(&mut self, data: &[u8]) {
        self.xof.update(data);
    }

    /// Returns a reader for the output.
    pub fn finalize_xof(mut self) -> KmacXofReader<X::Reader> {
        self.xof.update(right_encode(0).as_bytes());
        KmacXofReader(self.xof.finalize_xof())
    }
}

/// An [`XofReader`] for [`KmacXof`].
#[derive(Clone, Debug)]
pub struct KmacXofReader<R>(R);

impl<R: XofReader> XofReader for KmacXofReader<R> {
    #[inline]
    fn read(&mut self, out: &mut [u8]) {
        self.0.read(out);
    }
}

/// KMAC128.
pub type Kmac128 = Kmac<CShake128>;
/// KMAC256.
pub type Kmac256 = Kmac<CShake256>;
/// KMACXOF128.
pub type KmacXof128 = KmacXof<CShake128>;
/// KMACXOF256.
pub type KmacXof256 = KmacXof<CShake256>;

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: [u8; 32] = {
        let mut k = [0u8; 32];
        let mut i = 0;
        while i < 32 {
            k[i] = 0x40 + i as u8;
            i += 1;
        }
        k
    };

    #[test]
    fn test_tag_length_is_bound() {
        let mut a = Kmac128::new(&KEY, b"");
        a.update(b"data");
        let b = a.clone();
        let short = a.finalize::<16>();
        let long = b.finalize::<32>();
        assert_ne!(short[..], long[..16]);

        let mut b = Kmac128::new(&KEY, b"");
        b.update(b"data");
        let mut out = [0u8; 16];
        b.finalize_into(&mut out);
        assert_eq!(short, out);
    }

    #[test]
    fn test_xof_differs_from_fixed() {
        let mut a = Kmac256::new(&KEY, b"S");
        a.update(b"data");
        let mut b = KmacXof256::new(&KEY, b"S");
        b.update(b"data");
        assert_ne!(a.finalize::<64>(), b.finalize_xof().read_fixed::<64>());
    }

    #[test]
    fn test_key_matters() {
        let mut a = KmacXof128::new(&KEY, b"");
        a.update(b"data");
        let mut b = KmacXof128::new(&KEY[..31], b"");
        b.update(b"data");
        assert_ne!(
            a.finalize_xof().read_fixed::<32>(),
            b.finalize_xof().read_fixed::<32>()
        );
    }
}
