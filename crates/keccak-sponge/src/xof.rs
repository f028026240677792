//! eXtendable Output Function ([XOF]).
//!
//! [XOF]: https://csrc.nist.gov/glossary/term/extendable_output_function

/// An extendable output function (XOF).
///
/// Examples of XOFs include SHAKE128 and SHAKE256.
pub trait Xof: Clone {
    /// A human readable name for the XOF.
    const NAME: &'static str;

    /// Reads output bytes.
    type Reader: XofReader;

    /// Updates the running hash with `data`.
    fn update(&mut self, data: &[u8]);

    /// Returns the output of the XOF.
    fn finalize_xof(self) -> Self::Reader;

    /// Writes the XOF output to `out`.
    fn finalize_xof_into(self, out: &mut [u8]) {
        self.finalize_xof().read(out);
    }
}

/// Output bytes from an XOF.
///
/// Successive reads continue the same output stream.
pub trait XofReader {
    /// Reads output bytes from the XOF into `out`.
    fn read(&mut self, out: &mut [u8]);

    /// Reads `N` output bytes from the XOF.
    fn read_fixed<const N: usize>(&mut self) -> [u8; N] {
        let mut out = [0u8; N];
        self.read(&mut out);
        out
    }
}
