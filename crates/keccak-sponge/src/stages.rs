use core::fmt;

use tracing::trace;

use crate::{
    engine::Engine,
    params::{Domain, SpongeParams},
    xof::XofReader,
};

/// The absorbing half of a sponge.
///
/// Unlike [`Sponge`][crate::Sponge], the absorb and squeeze
/// phases are separate types, so ordering mistakes do not
/// compile.
#[derive(Clone)]
pub struct Absorber {
    engine: Engine,
    domain: Domain,
}

impl Absorber {
    /// Creates an absorber that pads with `domain`'s suffix.
    pub const fn new(params: SpongeParams, domain: Domain) -> Self {
        Self {
            engine: Engine::new(params),
            domain,
        }
    }

    /// Returns the rate/capacity split.
    pub const fn params(&self) -> SpongeParams {
        self.engine.params()
    }

    /// Returns the domain used for padding.
    pub const fn domain(&self) -> Domain {
        self.domain
    }

    /// Absorbs `data`.
    #[inline]
    pub fn absorb(&mut self, data: &[u8]) {
        self.engine.absorb(data);
    }

    /// Zero-pads the buffered input to a whole block and
    /// absorbs it.
    pub fn fill_block(&mut self) {
        self.engine.fill_block();
    }

    /// Pads the input and starts squeezing.
    pub fn finalize(mut self) -> Squeezer {
        self.engine.pad(self.domain.suffix());
        trace!(domain = ?self.domain, "absorber finalized");
        Squeezer {
            engine: self.engine,
        }
    }
}

impl fmt::Debug for Absorber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Absorber")
            .field("params", &self.params())
            .field("domain", &self.domain)
            .finish_non_exhaustive()
    }
}

/// The squeezing half of a sponge.
///
/// Created by [`Absorber::finalize`].
#[derive(Clone)]
pub struct Squeezer {
    engine: Engine,
}

impl Squeezer {
    /// Fills `out` with the next `out.len()` bytes of output.
    #[inline]
    pub fn squeeze(&mut self, out: &mut [u8]) {
        self.engine.squeeze(out);
    }
}

impl XofReader for Squeezer {
    #[inline]
    fn read(&mut self, out: &mut [u8]) {
        self.squeeze(out);
    }
}

impl fmt::Debug for Squeezer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Squeezer").finish_non_exhaustive()
    }
}
