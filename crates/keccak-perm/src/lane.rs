use core::{
    fmt,
    ops::{BitAnd, BitAndAssign, BitXor, BitXorAssign, Not},
};

use zeroize::Zeroize;

/// A 64-bit word of the Keccak state.
///
/// Every operation is defined over all 64 bits with
/// wraparound. Hosts that only have 32-bit words can move
/// lanes in and out as `(hi, lo)` pairs with
/// [`from_halves`][Self::from_halves] and
/// [`halves`][Self::halves].
#[derive(Copy, Clone, Default, Eq, PartialEq, Hash, Zeroize)]
#[repr(transparent)]
pub struct Lane(u64);

impl Lane {
    /// The all-zero lane.
    pub const ZERO: Self = Self(0);

    /// Creates a lane from a `u64`.
    #[inline]
    pub const fn new(v: u64) -> Self {
        Self(v)
    }

    /// Returns the lane as a `u64`.
    #[inline]
    pub const fn get(self) -> u64 {
        self.0
    }

    /// Creates a lane from its high and low 32-bit halves.
    #[inline]
    pub const fn from_halves(hi: u32, lo: u32) -> Self {
        Self(((hi as u64) << 32) | lo as u64)
    }

    /// Returns the `(hi, lo)` 32-bit halves of the lane.
    #[inline]
    pub const fn halves(self) -> (u32, u32) {
        ((self.0 >> 32) as u32, self.0 as u32)
    }

    /// Rotates the lane left by `n` bits, modulo 64.
    #[inline]
    #[must_use]
    pub const fn rotl(self, n: u32) -> Self {
        Self(self.0.rotate_left(n))
    }

    /// Decodes a little-endian lane.
    #[inline]
    pub const fn from_le_bytes(b: [u8; 8]) -> Self {
        Self(u64::from_le_bytes(b))
    }

    /// Encodes the lane as little-endian bytes.
    #[inline]
    pub const fn to_le_bytes(self) -> [u8; 8] {
        self.0.to_le_bytes()
    }
}

impl From<u64> for Lane {
    #[inline]
    fn from(v: u64) -> Self {
        Self(v)
    }
}

impl From<Lane> for u64 {
    #[inline]
    fn from(lane: Lane) -> Self {
        lane.0
    }
}

impl BitXor for Lane {
    type Output = Self;

    #[inline]
    fn bitxor(self, rhs: Self) -> Self {
        Self(self.0 ^ rhs.0)
    }
}

impl BitXorAssign for Lane {
    #[inline]
    fn bitxor_assign(&mut self, rhs: Self) {
        self.0 ^= rhs.0;
    }
}

impl BitAnd for Lane {
    type Output = Self;

    #[inline]
    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl BitAndAssign for Lane {
    #[inline]
    fn bitand_assign(&mut self, rhs: Self) {
        self.0 &= rhs.0;
    }
}

impl Not for Lane {
    type Output = Self;

    #[inline]
    fn not(self) -> Self {
        Self(!self.0)
    }
}

impl fmt::Debug for Lane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}

impl fmt::LowerHex for Lane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const X: Lane = Lane::new(0x8000_0001_4000_0003);

    #[test]
    fn test_halves() {
        let (hi, lo) = X.halves();
        assert_eq!(hi, 0x8000_0001);
        assert_eq!(lo, 0x4000_0003);
        assert_eq!(Lane::from_halves(hi, lo), X);
    }

    #[test]
    fn test_rotl_zero() {
        assert_eq!(X.rotl(0), X);
        assert_eq!(X.rotl(64), X);
    }

    #[test]
    fn test_rotl_32_swaps_halves() {
        let (hi, lo) = X.halves();
        assert_eq!(X.rotl(32), Lane::from_halves(lo, hi));
    }

    #[test]
    fn test_rotl_below_32() {
        // Bits cross from the low half into the high half.
        assert_eq!(X.rotl(1), Lane::new(0x0000_0002_8000_0007));
        assert_eq!(Lane::new(0x0000_0000_8000_0000).rotl(1), Lane::from_halves(1, 0));
    }

    #[test]
    fn test_rotl_above_32() {
        // Equivalent to a half swap followed by a small rotate.
        for n in 33..64 {
            assert_eq!(X.rotl(n), X.rotl(32).rotl(n - 32), "n = {n}");
        }
        assert_eq!(Lane::new(1).rotl(63), Lane::new(0x8000_0000_0000_0000));
    }

    #[test]
    fn test_ops() {
        let a = Lane::new(0b1100);
        let b = Lane::new(0b1010);
        assert_eq!(a ^ b, Lane::new(0b0110));
        assert_eq!(a & b, Lane::new(0b1000));
        assert_eq!(!Lane::ZERO, Lane::new(u64::MAX));
    }

    #[test]
    fn test_le_bytes() {
        let b = [1, 2, 3, 4, 5, 6, 7, 8];
        assert_eq!(Lane::from_le_bytes(b).get(), 0x0807_0605_0403_0201);
        assert_eq!(Lane::from_le_bytes(b).to_le_bytes(), b);
    }
}
