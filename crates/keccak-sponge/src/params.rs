use keccak_perm::WIDTH;

use crate::error::InvalidParameterError;

/// The size in bits of the Keccak-f\[1600\] state.
pub const WIDTH_BITS: usize = WIDTH * 8;

/// The largest supported rate in bytes.
///
/// Any larger rate would leave no capacity.
pub const MAX_RATE: usize = WIDTH - 1;

/// The rate/capacity split of a sponge.
///
/// The rate `r` (in bytes) and capacity `c` (in bits) always
/// satisfy `8r + c = 1600`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct SpongeParams {
    rate: usize,
}

impl SpongeParams {
    /// SHAKE128 and cSHAKE128: 168/256.
    pub const SHAKE128: Self = Self { rate: 168 };
    /// SHAKE256 and cSHAKE256: 136/512.
    pub const SHAKE256: Self = Self { rate: 136 };
    /// SHA3-224: 144/448.
    pub const SHA3_224: Self = Self { rate: 144 };
    /// SHA3-256: 136/512.
    pub const SHA3_256: Self = Self { rate: 136 };
    /// SHA3-384: 104/768.
    pub const SHA3_384: Self = Self { rate: 104 };
    /// SHA3-512: 72/1024.
    pub const SHA3_512: Self = Self { rate: 72 };

    /// Creates parameters with a rate of `rate` bytes.
    ///
    /// The rate must be in `1..=`[`MAX_RATE`].
    pub const fn new(rate: usize) -> Result<Self, InvalidParameterError> {
        if rate == 0 || rate > MAX_RATE {
            return Err(InvalidParameterError::UnsupportedRate(rate));
        }
        Ok(Self { rate })
    }

    /// Creates parameters from a rate in bytes and a capacity
    /// in bits.
    pub const fn with_capacity(rate: usize, capacity: usize) -> Result<Self, InvalidParameterError> {
        let params = match Self::new(rate) {
            Ok(params) => params,
            Err(err) => return Err(err),
        };
        if params.capacity() != capacity {
            return Err(InvalidParameterError::CapacityMismatch { rate, capacity });
        }
        Ok(params)
    }

    /// Creates parameters for a `bits`-bit security level.
    ///
    /// The capacity is `2*bits`, which must be a whole number
    /// of bytes.
    pub const fn for_security(bits: usize) -> Result<Self, InvalidParameterError> {
        let capacity = match bits.checked_mul(2) {
            Some(c) if c > 0 && c < WIDTH_BITS && c % 8 == 0 => c,
            _ => return Err(InvalidParameterError::UnsupportedSecurity(bits)),
        };
        Self::new((WIDTH_BITS - capacity) / 8)
    }

    /// Returns the rate in bytes.
    #[inline]
    pub const fn rate(self) -> usize {
        self.rate
    }

    /// Returns the capacity in bits.
    #[inline]
    #[allow(clippy::arithmetic_side_effects)] // rate <= MAX_RATE
    pub const fn capacity(self) -> usize {
        WIDTH_BITS - 8 * self.rate
    }
}

/// The domain separation suffix appended to the message
/// before pad10*1.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[non_exhaustive]
pub enum Domain {
    /// The original Keccak submission, no suffix.
    Keccak,
    /// The SHA-3 fixed-output functions.
    Sha3,
    /// SHAKE, and cSHAKE with an empty function name and
    /// customization string.
    Shake,
    /// cSHAKE with a non-empty function name or customization
    /// string.
    CShake,
}

impl Domain {
    /// Returns the first padding byte: the suffix bits
    /// followed by the leading `1` of pad10*1.
    pub const fn suffix(self) -> u8 {
        match self {
            Self::Keccak => 0x01,
            Self::Sha3 => 0x06,
            Self::Shake => 0x1f,
            Self::CShake => 0x04,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets() {
        assert_eq!(SpongeParams::SHAKE128.capacity(), 256);
        assert_eq!(SpongeParams::SHAKE256.capacity(), 512);
        assert_eq!(SpongeParams::SHA3_224.capacity(), 448);
        assert_eq!(SpongeParams::SHA3_384.capacity(), 768);
        assert_eq!(SpongeParams::SHA3_512.capacity(), 1024);
    }

    #[test]
    fn test_for_security() {
        assert_eq!(SpongeParams::for_security(128), Ok(SpongeParams::SHAKE128));
        assert_eq!(SpongeParams::for_security(256), Ok(SpongeParams::SHAKE256));
        assert_eq!(SpongeParams::for_security(224), Ok(SpongeParams::SHA3_224));
        assert_eq!(SpongeParams::for_security(512), Ok(SpongeParams::SHA3_512));
        for bits in [0, 2, 800, 1000, usize::MAX] {
            assert_eq!(
                SpongeParams::for_security(bits),
                Err(InvalidParameterError::UnsupportedSecurity(bits)),
                "bits = {bits}"
            );
        }
    }

    #[test]
    fn test_new() {
        assert_eq!(SpongeParams::new(168), Ok(SpongeParams::SHAKE128));
        assert_eq!(SpongeParams::new(1).map(SpongeParams::capacity), Ok(1592));
        assert_eq!(SpongeParams::new(MAX_RATE).map(SpongeParams::capacity), Ok(8));
        assert_eq!(
            SpongeParams::new(0),
            Err(InvalidParameterError::UnsupportedRate(0))
        );
        assert_eq!(
            SpongeParams::new(200),
            Err(InvalidParameterError::UnsupportedRate(200))
        );
    }

    #[test]
    fn test_with_capacity() {
        assert_eq!(
            SpongeParams::with_capacity(136, 512),
            Ok(SpongeParams::SHAKE256)
        );
        assert_eq!(
            SpongeParams::with_capacity(136, 256),
            Err(InvalidParameterError::CapacityMismatch {
                rate: 136,
                capacity: 256,
            })
        );
        assert_eq!(
            SpongeParams::with_capacity(0, 1600),
            Err(InvalidParameterError::UnsupportedRate(0))
        );
    }

    #[test]
    fn test_suffixes() {
        assert_eq!(Domain::Sha3.suffix(), 0x06);
        assert_eq!(Domain::Shake.suffix(), 0x1f);
        assert_eq!(Domain::CShake.suffix(), 0x04);
        assert_eq!(Domain::Keccak.suffix(), 0x01);
    }
}
