#![allow(clippy::arithmetic_side_effects)]

use core::mem;

use tracing::trace;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::{
    duplex::Duplex,
    params::{MAX_RATE, SpongeParams},
    util::copy,
};

/// A [`Duplex`] plus a one-block buffer.
///
/// While absorbing, `buf[..pos]` holds input that has not
/// filled a block yet. While squeezing, `buf[pos..rate]` holds
/// output that has not been read yet.
///
/// Invariant: `pos < rate` while absorbing and `pos <= rate`
/// while squeezing.
#[derive(Clone)]
pub(crate) struct Engine {
    duplex: Duplex,
    buf: [u8; MAX_RATE],
    pos: usize,
}

impl Engine {
    pub(crate) const fn new(params: SpongeParams) -> Self {
        Self {
            duplex: Duplex::new(params),
            buf: [0u8; MAX_RATE],
            pos: 0,
        }
    }

    #[inline]
    pub(crate) const fn params(&self) -> SpongeParams {
        self.duplex.params()
    }

    #[cfg(test)]
    pub(crate) const fn duplex(&self) -> &Duplex {
        &self.duplex
    }

    #[inline]
    fn rate(&self) -> usize {
        self.duplex.rate()
    }

    /// Absorbs `data`, permuting after every full block.
    ///
    /// Returns the number of blocks absorbed.
    pub(crate) fn absorb(&mut self, mut data: &[u8]) -> usize {
        let rate = self.rate();
        let mut absorbed = 0;

        if self.pos > 0 {
            let n = copy(&mut self.buf[self.pos..rate], data);
            self.pos += n;
            data = &data[n..];
            if self.pos < rate {
                return 0;
            }
            self.duplex.absorb_unchecked(&self.buf[..rate]);
            self.pos = 0;
            absorbed += 1;
        }

        let mut blocks = data.chunks_exact(rate);
        for block in &mut blocks {
            self.duplex.absorb_unchecked(block);
            absorbed += 1;
        }
        let rem = blocks.remainder();
        self.buf[..rem.len()].copy_from_slice(rem);
        self.pos = rem.len();

        if absorbed > 0 {
            trace!(blocks = absorbed, rate, "absorbed blocks");
        }
        absorbed
    }

    /// Zero-fills the current partial block, if any, and
    /// absorbs it.
    pub(crate) fn fill_block(&mut self) {
        if self.pos == 0 {
            return;
        }
        let rate = self.rate();
        self.buf[self.pos..rate].fill(0);
        self.duplex.absorb_unchecked(&self.buf[..rate]);
        self.pos = 0;
    }

    /// Applies `suffix` and pad10*1, absorbs the final block and
    /// switches the buffer over to squeezing.
    pub(crate) fn pad(&mut self, suffix: u8) {
        let rate = self.rate();
        let block = &mut self.buf[..rate];
        block[self.pos..].fill(0);
        block[self.pos] = suffix;
        // With one free byte this lands on the suffix byte.
        block[rate - 1] |= 0x80;
        self.duplex.absorb_unchecked(&self.buf[..rate]);

        // The buffer is empty: the first squeeze reads the
        // state as it is now.
        self.buf.zeroize();
        self.pos = rate;
    }

    /// Writes the next `out.len()` bytes of output.
    ///
    /// Returns the number of blocks squeezed.
    pub(crate) fn squeeze(&mut self, mut out: &mut [u8]) -> usize {
        let rate = self.rate();
        let mut squeezed = 0;
        while !out.is_empty() {
            if self.pos == rate {
                squeezed += 1;
                if out.len() >= rate {
                    let (block, rest) = mem::take(&mut out).split_at_mut(rate);
                    self.duplex.squeeze_unchecked(block);
                    out = rest;
                    continue;
                }
                self.duplex.squeeze_unchecked(&mut self.buf[..rate]);
                self.pos = 0;
            }
            let n = copy(out, &self.buf[self.pos..rate]);
            self.pos += n;
            out = &mut mem::take(&mut out)[n..];
        }

        if squeezed > 0 {
            trace!(blocks = squeezed, rate, "squeezed blocks");
        }
        squeezed
    }

    pub(crate) fn reset(&mut self) {
        self.duplex.reset();
        self.buf.zeroize();
        self.pos = 0;
    }
}

impl Drop for Engine {
    fn drop(&mut self) {
        self.buf.zeroize();
    }
}

impl ZeroizeOnDrop for Engine {}
