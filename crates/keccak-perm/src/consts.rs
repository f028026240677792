use crate::{Lane, state::LANES};

/// The number of rounds in Keccak-f\[1600\].
pub const ROUNDS: usize = 24;

/// The ι round constants, one per round.
pub const RC: [Lane; ROUNDS] = [
    Lane::new(0x0000000000000001),
    Lane::new(0x0000000000008082),
    Lane::new(0x800000000000808a),
    Lane::new(0x8000000080008000),
    Lane::new(0x000000000000808b),
    Lane::new(0x0000000080000001),
    Lane::new(0x8000000080008081),
    Lane::new(0x8000000000008009),
    Lane::new(0x000000000000008a),
    Lane::new(0x0000000000000088),
    Lane::new(0x0000000080008009),
    Lane::new(0x000000008000000a),
    Lane::new(0x000000008000808b),
    Lane::new(0x800000000000008b),
    Lane::new(0x8000000000008089),
    Lane::new(0x8000000000008003),
    Lane::new(0x8000000000008002),
    Lane::new(0x8000000000000080),
    Lane::new(0x000000000000800a),
    Lane::new(0x800000008000000a),
    Lane::new(0x8000000080008081),
    Lane::new(0x8000000000008080),
    Lane::new(0x0000000080000001),
    Lane::new(0x8000000080008008),
];

/// The ρ rotation offsets.
///
/// The offset for lane `(x, y)` is `RHO[x + 5*y]`.
pub const RHO: [u32; LANES] = [
    0, 1, 62, 28, 27, //
    36, 44, 6, 55, 20, //
    3, 10, 43, 25, 39, //
    41, 45, 15, 21, 8, //
    18, 2, 61, 56, 14, //
];
