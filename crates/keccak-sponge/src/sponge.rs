use core::{fmt, mem};

use tracing::{debug, trace};

use crate::{
    engine::Engine,
    error::SpongeStateError,
    params::{Domain, SpongeParams},
};

/// The lifecycle of a [`Sponge`].
///
/// ```text
/// Created -> Customized -> Absorbing -> Finalized -> Squeezing
///    |                        ^   |                    ^   |
///    +------------------------+   +--------------------+   +-- squeeze
/// ```
///
/// Customizing is optional, and finalizing happens implicitly
/// on the first squeeze. Only [`Sponge::reset`] leads back to
/// `Created`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Phase {
    /// Nothing has been absorbed.
    Created,
    /// The customization pre-image has been absorbed.
    Customized,
    /// Message bytes have been absorbed.
    Absorbing,
    /// Padding has been absorbed, no output read yet.
    Finalized,
    /// Output has been read.
    Squeezing,
}

#[derive(Copy, Clone, Debug)]
enum Event {
    Customize,
    Absorb,
    Finalize,
    Squeeze,
}

impl Phase {
    /// The transition table. Every check on call ordering goes
    /// through here.
    const fn next(self, event: Event) -> Result<Self, SpongeStateError> {
        use Phase::*;
        match (self, event) {
            (Created, Event::Customize) => Ok(Customized),
            (Customized, Event::Customize) => Err(SpongeStateError::AlreadyCustomized),
            (Absorbing | Finalized | Squeezing, Event::Customize) => {
                Err(SpongeStateError::CustomizeAfterAbsorb)
            }

            (Created | Customized | Absorbing, Event::Absorb) => Ok(Absorbing),
            (Finalized | Squeezing, Event::Absorb) => Err(SpongeStateError::AbsorbAfterFinalize),

            (Created | Customized | Absorbing | Finalized, Event::Finalize) => Ok(Finalized),
            (Squeezing, Event::Finalize) => Ok(Squeezing),

            (_, Event::Squeeze) => Ok(Squeezing),
        }
    }

    /// Reports whether padding has been absorbed.
    pub const fn is_finalized(self) -> bool {
        matches!(self, Self::Finalized | Self::Squeezing)
    }
}

/// A Keccak sponge with a runtime-checked lifecycle.
///
/// Input of any length is buffered into rate-sized blocks and
/// output of any length is read from successive blocks. Each
/// squeeze continues where the previous one stopped.
///
/// Calls made in the wrong [`Phase`] fail with
/// [`SpongeStateError`] and leave the sponge untouched.
#[derive(Clone)]
pub struct Sponge {
    engine: Engine,
    /// The domain given to `new`.
    base: Domain,
    /// The domain used for padding.
    domain: Domain,
    phase: Phase,
}

impl Sponge {
    /// Creates a sponge that pads with `domain`'s suffix.
    pub const fn new(params: SpongeParams, domain: Domain) -> Self {
        Self {
            engine: Engine::new(params),
            base: domain,
            domain,
            phase: Phase::Created,
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

    /// Returns the current phase.
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Checks `event` against the transition table without
    /// applying it.
    fn check(&self, event: Event) -> Result<Phase, SpongeStateError> {
        self.phase.next(event).inspect_err(|err| {
            debug!(phase = ?self.phase, ?event, %err, "rejected sponge call");
        })
    }

    /// Applies `event` and returns the phase it left.
    fn transition(&mut self, event: Event) -> Result<Phase, SpongeStateError> {
        let next = self.check(event)?;
        let prev = mem::replace(&mut self.phase, next);
        if next != prev {
            trace!(from = ?prev, to = ?next, ?event, domain = ?self.domain, "sponge transition");
        }
        Ok(prev)
    }

    /// Absorbs a customization pre-image made of `parts`,
    /// zero-pads it to a whole block, and switches the padding
    /// suffix to `domain`.
    ///
    /// Must be called at most once, before anything else is
    /// absorbed.
    pub fn customize<I>(&mut self, domain: Domain, parts: I) -> Result<(), SpongeStateError>
    where
        I: IntoIterator,
        I::Item: AsRef<[u8]>,
    {
        self.transition(Event::Customize)?;
        for part in parts {
            self.engine.absorb(part.as_ref());
        }
        self.engine.fill_block();
        self.domain = domain;
        Ok(())
    }

    /// Absorbs `data`.
    ///
    /// Empty input changes nothing, but is still rejected after
    /// the sponge has been finalized.
    pub fn absorb(&mut self, data: &[u8]) -> Result<(), SpongeStateError> {
        if data.is_empty() {
            self.check(Event::Absorb)?;
            return Ok(());
        }
        self.transition(Event::Absorb)?;
        self.engine.absorb(data);
        Ok(())
    }

    /// Zero-pads the buffered input to a whole block and
    /// absorbs it.
    ///
    /// Does nothing to the state if the buffer is empty.
    pub fn fill_block(&mut self) -> Result<(), SpongeStateError> {
        self.transition(Event::Absorb)?;
        self.engine.fill_block();
        Ok(())
    }

    /// Pads and absorbs the final block.
    ///
    /// Finalizing an already finalized sponge does nothing.
    pub fn finalize(&mut self) {
        // Finalize is accepted in every phase.
        if matches!(self.transition(Event::Finalize), Ok(prev) if !prev.is_finalized()) {
            self.engine.pad(self.domain.suffix());
        }
    }

    /// Fills `out` with the next `out.len()` bytes of output,
    /// finalizing first if needed.
    pub fn squeeze(&mut self, out: &mut [u8]) {
        self.finalize();
        if self.transition(Event::Squeeze).is_ok() {
            self.engine.squeeze(out);
        }
    }

    /// Zeroes the state and buffer, restores the domain given
    /// to [`new`][Self::new] and returns to [`Phase::Created`].
    pub fn reset(&mut self) {
        self.engine.reset();
        self.domain = self.base;
        self.phase = Phase::Created;
        trace!("sponge reset");
    }
}

impl fmt::Debug for Sponge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sponge")
            .field("params", &self.params())
            .field("domain", &self.domain)
            .field("phase", &self.phase)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transition_table() {
        use Phase::*;

        let all = [Created, Customized, Absorbing, Finalized, Squeezing];
        for phase in all {
            assert_eq!(phase.next(Event::Squeeze), Ok(Squeezing));
        }
        assert_eq!(Created.next(Event::Customize), Ok(Customized));
        assert_eq!(
            Customized.next(Event::Customize),
            Err(SpongeStateError::AlreadyCustomized)
        );
        for phase in [Absorbing, Finalized, Squeezing] {
            assert_eq!(
                phase.next(Event::Customize),
                Err(SpongeStateError::CustomizeAfterAbsorb)
            );
        }
        for phase in [Created, Customized, Absorbing] {
            assert_eq!(phase.next(Event::Absorb), Ok(Absorbing));
            assert_eq!(phase.next(Event::Finalize), Ok(Finalized));
        }
        for phase in [Finalized, Squeezing] {
            assert_eq!(
                phase.next(Event::Absorb),
                Err(SpongeStateError::AbsorbAfterFinalize)
            );
            assert_eq!(phase.next(Event::Finalize), Ok(phase));
        }
    }

    #[test_log::test]
    fn test_lifecycle() {
        let mut s = Sponge::new(SpongeParams::SHAKE128, Domain::Shake);
        assert_eq!(s.phase(), Phase::Created);

        s.customize(Domain::CShake, [b"abc"]).unwrap();
        assert_eq!(s.phase(), Phase::Customized);
        assert_eq!(s.domain(), Domain::CShake);

        s.absorb(b"").unwrap();
        assert_eq!(s.phase(), Phase::Customized);
        s.absorb(b"msg").unwrap();
        assert_eq!(s.phase(), Phase::Absorbing);

        s.finalize();
        assert_eq!(s.phase(), Phase::Finalized);
        s.finalize();
        assert_eq!(s.phase(), Phase::Finalized);

        let mut out = [0u8; 8];
        s.squeeze(&mut out);
        assert_eq!(s.phase(), Phase::Squeezing);
        s.finalize();
        assert_eq!(s.phase(), Phase::Squeezing);

        s.reset();
        assert_eq!(s.phase(), Phase::Created);
        assert_eq!(s.domain(), Domain::Shake);
    }

    #[test_log::test]
    fn test_rejected_calls_do_not_mutate() {
        let mut s = Sponge::new(SpongeParams::SHAKE256, Domain::Shake);
        s.absorb(b"data").unwrap();
        assert_eq!(
            s.customize(Domain::CShake, [b"late"]),
            Err(SpongeStateError::CustomizeAfterAbsorb)
        );
        assert_eq!(s.domain(), Domain::Shake);

        let mut reference = s.clone();
        let mut a = [0u8; 64];
        s.squeeze(&mut a[..10]);

        assert_eq!(s.absorb(b"x"), Err(SpongeStateError::AbsorbAfterFinalize));
        assert_eq!(s.absorb(b""), Err(SpongeStateError::AbsorbAfterFinalize));
        assert_eq!(s.fill_block(), Err(SpongeStateError::AbsorbAfterFinalize));
        assert_eq!(
            s.customize(Domain::CShake, [b"x"]),
            Err(SpongeStateError::CustomizeAfterAbsorb)
        );
        s.squeeze(&mut a[10..]);

        let mut b = [0u8; 64];
        reference.squeeze(&mut b);
        assert_eq!(a, b);
    }

    #[test]
    fn test_customize_twice() {
        let mut s = Sponge::new(SpongeParams::SHAKE128, Domain::Shake);
        s.customize(Domain::CShake, [b"a"]).unwrap();
        assert_eq!(
            s.customize(Domain::CShake, [b"b"]),
            Err(SpongeStateError::AlreadyCustomized)
        );
    }

    #[test_log::test]
    fn test_squeeze_finalizes_implicitly() {
        let mut implicit = Sponge::new(SpongeParams::SHAKE128, Domain::Shake);
        implicit.absorb(b"abc").unwrap();
        let mut a = [0u8; 200];
        implicit.squeeze(&mut a);
        assert_eq!(implicit.phase(), Phase::Squeezing);

        let mut explicit = Sponge::new(SpongeParams::SHAKE128, Domain::Shake);
        explicit.absorb(b"abc").unwrap();
        explicit.finalize();
        assert_eq!(explicit.phase(), Phase::Finalized);
        let mut b = [0u8; 200];
        explicit.squeeze(&mut b);
        assert_eq!(explicit.phase(), Phase::Squeezing);

        assert_eq!(a, b);
    }

    #[test]
    fn test_transition_returns_previous_phase() {
        let mut s = Sponge::new(SpongeParams::SHAKE256, Domain::Shake);
        assert_eq!(s.transition(Event::Absorb), Ok(Phase::Created));
        assert_eq!(s.transition(Event::Finalize), Ok(Phase::Absorbing));
        assert_eq!(s.transition(Event::Finalize), Ok(Phase::Finalized));
        assert_eq!(s.transition(Event::Squeeze), Ok(Phase::Finalized));
        assert_eq!(s.transition(Event::Squeeze), Ok(Phase::Squeezing));
        assert_eq!(s.transition(Event::Finalize), Ok(Phase::Squeezing));
        assert_eq!(s.phase(), Phase::Squeezing);
        assert_eq!(
            s.transition(Event::Absorb),
            Err(SpongeStateError::AbsorbAfterFinalize)
        );
        assert_eq!(s.phase(), Phase::Squeezing);
    }

    #[test]
    fn test_reset_matches_fresh() {
        let mut s = Sponge::new(SpongeParams::SHA3_256, Domain::Sha3);
        s.absorb(b"first message").unwrap();
        let mut out = [0u8; 32];
        s.squeeze(&mut out);

        s.reset();
        s.absorb(b"second").unwrap();
        s.squeeze(&mut out);

        let mut fresh = Sponge::new(SpongeParams::SHA3_256, Domain::Sha3);
        fresh.absorb(b"second").unwrap();
        let mut want = [0u8; 32];
        fresh.squeeze(&mut want);
        assert_eq!(out, want);
    }
}
