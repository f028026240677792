use keccak_perm::State;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::{error::InvalidParameterError, params::SpongeParams};

/// A Keccak state with a fixed rate, processed in whole
/// blocks.
///
/// Block alignment is the caller's responsibility. See
/// [`Sponge`][crate::Sponge] for arbitrary-length input and
/// output.
#[derive(Clone)]
pub struct Duplex {
    state: State,
    params: SpongeParams,
}

impl Duplex {
    /// Creates a duplex with an all-zero state.
    #[inline]
    pub const fn new(params: SpongeParams) -> Self {
        Self {
            state: State::new(),
            params,
        }
    }

    /// Returns the rate/capacity split.
    #[inline]
    pub const fn params(&self) -> SpongeParams {
        self.params
    }

    /// Returns the rate in bytes.
    #[inline]
    pub const fn rate(&self) -> usize {
        self.params.rate()
    }

    /// Returns the current state.
    #[inline]
    pub const fn state(&self) -> &State {
        &self.state
    }

    /// XORs `block` into the first `rate` bytes of the state,
    /// then permutes.
    ///
    /// `block` must be exactly `rate` bytes long.
    pub fn absorb_block(&mut self, block: &[u8]) -> Result<(), InvalidParameterError> {
        self.check_block(block.len())?;
        self.absorb_unchecked(block);
        Ok(())
    }

    /// Copies the first `rate` bytes of the state into `out`,
    /// then permutes.
    ///
    /// `out` must be exactly `rate` bytes long.
    pub fn squeeze_block(&mut self, out: &mut [u8]) -> Result<(), InvalidParameterError> {
        self.check_block(out.len())?;
        self.squeeze_unchecked(out);
        Ok(())
    }

    fn check_block(&self, len: usize) -> Result<(), InvalidParameterError> {
        if len != self.rate() {
            return Err(InvalidParameterError::BlockLength {
                rate: self.rate(),
                len,
            });
        }
        Ok(())
    }

    /// Like [`absorb_block`][Self::absorb_block], but the
    /// caller guarantees the length.
    #[inline]
    pub(crate) fn absorb_unchecked(&mut self, block: &[u8]) {
        debug_assert_eq!(block.len(), self.rate());
        self.state.xor_bytes(block);
        self.state.permute();
    }

    /// Like [`squeeze_block`][Self::squeeze_block], but the
    /// caller guarantees the length.
    #[inline]
    pub(crate) fn squeeze_unchecked(&mut self, out: &mut [u8]) {
        debug_assert_eq!(out.len(), self.rate());
        self.state.read_bytes(out);
        self.state.permute();
    }

    /// Resets the state to all zeros.
    pub fn reset(&mut self) {
        self.state.zeroize();
    }
}

impl Drop for Duplex {
    fn drop(&mut self) {
        self.reset();
    }
}

impl ZeroizeOnDrop for Duplex {}
