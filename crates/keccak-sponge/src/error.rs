/// An operation was attempted in the wrong [`Phase`][crate::Phase].
///
/// The sponge is left untouched when this is returned.
#[derive(Copy, Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum SpongeStateError {
    /// Data was absorbed after the sponge was finalized.
    #[error("cannot absorb after the sponge has been finalized")]
    AbsorbAfterFinalize,
    /// The sponge was customized after data was absorbed or
    /// after it was finalized.
    #[error("customization must happen before absorbing or finalizing")]
    CustomizeAfterAbsorb,
    /// The sponge was customized twice.
    #[error("the sponge has already been customized")]
    AlreadyCustomized,
}

/// A construction parameter was invalid.
#[derive(Copy, Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum InvalidParameterError {
    /// The requested output length was zero.
    #[error("output length must be non-zero")]
    ZeroOutputLength,
    /// The rate does not leave a non-zero capacity.
    #[error("unsupported rate: {0} bytes")]
    UnsupportedRate(usize),
    /// The capacity does not equal `1600 - 8*rate`.
    #[error("capacity of {capacity} bits does not match a rate of {rate} bytes")]
    CapacityMismatch {
        /// The rate in bytes.
        rate: usize,
        /// The capacity in bits.
        capacity: usize,
    },
    /// The security level has no matching rate.
    #[error("unsupported security level: {0} bits")]
    UnsupportedSecurity(usize),
    /// A whole-block operation was given the wrong number of
    /// bytes.
    #[error("block of {len} bytes does not match a rate of {rate} bytes")]
    BlockLength {
        /// The rate in bytes.
        rate: usize,
        /// The length that was supplied.
        len: usize,
    },
    /// An output buffer did not match the configured output
    /// length.
    #[error("output buffer of {got} bytes does not match an output length of {expected} bytes")]
    OutputLength {
        /// The configured output length.
        expected: usize,
        /// The length that was supplied.
        got: usize,
    },
    /// `bytepad` was asked to pad to a width of zero.
    #[error("bytepad width must be non-zero")]
    ZeroPadWidth,
}

/// Encompasses the different errors directly returned by this
/// crate.
#[derive(Copy, Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A call was made in the wrong phase.
    #[error(transparent)]
    State(#[from] SpongeStateError),
    /// A parameter was invalid.
    #[error(transparent)]
    InvalidParameter(#[from] InvalidParameterError),
}
