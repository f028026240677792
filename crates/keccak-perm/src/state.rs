use core::{
    fmt,
    ops::{Index, IndexMut},
};

use zeroize::Zeroize;

use crate::Lane;

/// The number of lanes in the state.
pub const LANES: usize = 25;

/// The size in bytes of the state.
pub const WIDTH: usize = LANES * 8;

/// The 1600-bit Keccak state.
///
/// Lane `(x, y)` lives at index `x + 5*y`. Byte `i` of the
/// state is byte `i % 8` (little-endian) of lane `i / 8`.
#[derive(Copy, Clone, Default, Eq, PartialEq, Zeroize)]
pub struct State {
    lanes: [Lane; LANES],
}

impl State {
    /// Creates an all-zero state.
    #[inline]
    pub const fn new() -> Self {
        Self {
            lanes: [Lane::ZERO; LANES],
        }
    }

    /// Creates a state from raw lanes.
    pub const fn from_words(words: [u64; LANES]) -> Self {
        let mut lanes = [Lane::ZERO; LANES];
        let mut i = 0;
        while i < LANES {
            lanes[i] = Lane::new(words[i]);
            i += 1;
        }
        Self { lanes }
    }

    /// Returns the state as raw lanes.
    pub fn to_words(&self) -> [u64; LANES] {
        self.lanes.map(Lane::get)
    }

    /// Returns the lanes in `x + 5*y` order.
    #[inline]
    pub const fn lanes(&self) -> &[Lane; LANES] {
        &self.lanes
    }

    /// Returns the lanes in `x + 5*y` order.
    #[inline]
    pub fn lanes_mut(&mut self) -> &mut [Lane; LANES] {
        &mut self.lanes
    }

    /// XORs `data` into the leading bytes of the state.
    ///
    /// Bytes past [`WIDTH`] are ignored.
    pub fn xor_bytes(&mut self, data: &[u8]) {
        let mut chunks = data.chunks_exact(8);
        let mut lanes = self.lanes.iter_mut();
        for (chunk, lane) in (&mut chunks).zip(&mut lanes) {
            let mut b = [0u8; 8];
            b.copy_from_slice(chunk);
            *lane ^= Lane::from_le_bytes(b);
        }
        let rem = chunks.remainder();
        if rem.is_empty() {
            return;
        }
        if let Some(lane) = lanes.next() {
            let mut b = [0u8; 8];
            b[..rem.len()].copy_from_slice(rem);
            *lane ^= Lane::from_le_bytes(b);
        }
    }

    /// Copies the leading bytes of the state into `out`.
    ///
    /// At most [`WIDTH`] bytes are written.
    pub fn read_bytes(&self, out: &mut [u8]) {
        for (chunk, lane) in out.chunks_mut(8).zip(self.lanes.iter()) {
            let n = chunk.len();
            chunk.copy_from_slice(&lane.to_le_bytes()[..n]);
        }
    }

    /// Applies Keccak-f\[1600\] to the state.
    #[inline]
    pub fn permute(&mut self) {
        crate::permute(self);
    }
}

impl Index<(usize, usize)> for State {
    type Output = Lane;

    #[inline]
    #[allow(clippy::arithmetic_side_effects)]
    fn index(&self, (x, y): (usize, usize)) -> &Lane {
        &self.lanes[x + 5 * y]
    }
}

impl IndexMut<(usize, usize)> for State {
    #[inline]
    #[allow(clippy::arithmetic_side_effects)]
    fn index_mut(&mut self, (x, y): (usize, usize)) -> &mut Lane {
        &mut self.lanes[x + 5 * y]
    }
}

impl From<[u64; LANES]> for State {
    #[inline]
    fn from(words: [u64; LANES]) -> Self {
        Self::from_words(words)
    }
}

impl fmt::Debug for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // One row per `y`.
        let mut list = f.debug_list();
        for row in self.lanes.chunks_exact(5) {
            list.entry(&row);
        }
        list.finish()
    }
}
