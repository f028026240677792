//! The five step mappings of a Keccak-f\[1600\] round.
//!
//! Each mapping transforms the whole [`State`] in place.
//! [`round`] applies them in order θ, ρ, π, χ, ι.

#![allow(clippy::arithmetic_side_effects)]

use crate::{Lane, RHO, State};

/// Applies one round with round constant `rc`.
#[inline]
pub fn round(a: &mut State, rc: Lane) {
    theta(a);
    rho(a);
    pi(a);
    chi(a);
    iota(a, rc);
}

/// θ: XORs each lane with the parities of two neighboring
/// columns.
pub fn theta(a: &mut State) {
    let mut c = [Lane::ZERO; 5];
    for (x, c) in c.iter_mut().enumerate() {
        *c = a[(x, 0)] ^ a[(x, 1)] ^ a[(x, 2)] ^ a[(x, 3)] ^ a[(x, 4)];
    }
    for x in 0..5 {
        let d = c[(x + 4) % 5] ^ c[(x + 1) % 5].rotl(1);
        for y in 0..5 {
            a[(x, y)] ^= d;
        }
    }
}

/// ρ: rotates each lane by its fixed offset.
pub fn rho(a: &mut State) {
    for (lane, &r) in a.lanes_mut().iter_mut().zip(RHO.iter()) {
        *lane = lane.rotl(r);
    }
}

/// π: moves lane `(x, y)` to `(y, 2x + 3y)`.
pub fn pi(a: &mut State) {
    let b = *a;
    for y in 0..5 {
        for x in 0..5 {
            a[(y, (2 * x + 3 * y) % 5)] = b[(x, y)];
        }
    }
}

/// χ: the only non-linear step, applied row by row.
pub fn chi(a: &mut State) {
    for y in 0..5 {
        let row = [a[(0, y)], a[(1, y)], a[(2, y)], a[(3, y)], a[(4, y)]];
        for x in 0..5 {
            a[(x, y)] = row[x] ^ (!row[(x + 1) % 5] & row[(x + 2) % 5]);
        }
    }
}

/// ι: XORs the round constant into lane `(0, 0)`.
#[inline]
pub fn iota(a: &mut State, rc: Lane) {
    a[(0, 0)] ^= rc;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single(x: usize, y: usize, v: u64) -> State {
        let mut s = State::new();
        s[(x, y)] = Lane::new(v);
        s
    }

    #[test]
    fn test_theta_single_bit() {
        let mut a = single(0, 0, 1);
        theta(&mut a);
        // Column 0 parity is 1, so D[1] = 1 and D[4] = rotl(1, 1).
        assert_eq!(a[(0, 0)], Lane::new(1));
        for y in 0..5 {
            assert_eq!(a[(1, y)], Lane::new(1), "y = {y}");
            assert_eq!(a[(4, y)], Lane::new(2), "y = {y}");
            assert_eq!(a[(2, y)], Lane::ZERO);
            assert_eq!(a[(3, y)], Lane::ZERO);
        }
    }

    #[test]
    fn test_theta_even_column_is_fixed() {
        // Two equal lanes in one column cancel the parity.
        let mut a = single(2, 1, 0xdead);
        a[(2, 4)] = Lane::new(0xdead);
        let want = a;
        theta(&mut a);
        assert_eq!(a, want);
    }

    #[test]
    fn test_rho() {
        let mut a = State::from_words([1; 25]);
        rho(&mut a);
        for (lane, &r) in a.lanes().iter().zip(RHO.iter()) {
            assert_eq!(*lane, Lane::new(1u64 << r));
        }
    }

    #[test]
    fn test_pi() {
        let mut a = single(1, 0, 5);
        pi(&mut a);
        // (1, 0) -> (0, 2)
        assert_eq!(a, single(0, 2, 5));

        let mut a = single(0, 0, 5);
        pi(&mut a);
        assert_eq!(a, single(0, 0, 5));
    }

    #[test]
    fn test_pi_is_a_permutation() {
        let mut words = [0u64; 25];
        for (i, w) in words.iter_mut().enumerate() {
            *w = i as u64;
        }
        let mut a = State::from_words(words);
        pi(&mut a);
        let mut got = a.to_words();
        got.sort_unstable();
        assert_eq!(got, words);
    }

    #[test]
    fn test_chi() {
        // row = [1, 0, 1, 0, 0]
        let mut a = single(0, 3, 1);
        a[(2, 3)] = Lane::new(1);
        chi(&mut a);
        // x=0: 1 ^ (!0 & 1) = 0
        // x=1: 0 ^ (!1 & 0) = 0
        // x=2: 1 ^ (!0 & 0) = 1
        // x=3: 0 ^ (!0 & 1) = 1
        // x=4: 0 ^ (!1 & 0) = 0
        assert_eq!(a[(0, 3)], Lane::ZERO);
        assert_eq!(a[(1, 3)], Lane::ZERO);
        assert_eq!(a[(2, 3)], Lane::new(1));
        assert_eq!(a[(3, 3)], Lane::new(1));
        assert_eq!(a[(4, 3)], Lane::ZERO);
    }

    #[test]
    fn test_iota() {
        let mut a = State::new();
        iota(&mut a, Lane::new(0x8082));
        assert_eq!(a, single(0, 0, 0x8082));
    }
}
