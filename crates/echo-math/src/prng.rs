// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

/// Seeded `xoroshiro128+` generator consumed by the `random` constructors
/// ([`crate::Vec2::random`], [`crate::Vec3::random`], [`crate::Quat::random`]).
///
/// The generator is passed explicitly instead of living in a global so that
/// random vectors are reproducible per seed and safe to draw from several
/// threads, each with its own `Prng`.
///
/// Not cryptographically secure.
#[derive(Debug, Clone, Copy)]
pub struct Prng {
    state: [u64; 2],
}

const GOLDEN_GAMMA: u64 = 0x9e37_79b9_7f4a_7c15;

impl Prng {
    /// Constructs a generator from two 64-bit seeds.
    ///
    /// An all-zero seed would lock xoroshiro at zero forever, so it is
    /// replaced by a fixed non-zero word.
    pub fn from_seed(seed0: u64, seed1: u64) -> Self {
        let mut state = [seed0, seed1];
        if state == [0, 0] {
            state[0] = GOLDEN_GAMMA;
        }
        Self { state }
    }

    /// Constructs a generator from a single seed via `SplitMix64` expansion.
    pub fn from_seed_u64(seed: u64) -> Self {
        fn splitmix64(state: &mut u64) -> u64 {
            *state = state.wrapping_add(GOLDEN_GAMMA);
            let mut z = *state;
            z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
            z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
            z ^ (z >> 31)
        }

        let mut sm = seed;
        let first = splitmix64(&mut sm);
        let second = splitmix64(&mut sm);
        Self::from_seed(first, second)
    }

    fn next_u64(&mut self) -> u64 {
        let s0 = self.state[0];
        let mut s1 = self.state[1];
        let result = s0.wrapping_add(s1);

        s1 ^= s0;
        self.state[0] = s0.rotate_left(55) ^ s1 ^ (s1 << 14);
        self.state[1] = s1.rotate_left(36);

        result
    }

    /// Returns the next float in `[0, 1)`.
    ///
    /// The high 23 bits of the output fill the mantissa of a float in
    /// `[1, 2)`, which is then shifted down by one.
    #[allow(clippy::cast_possible_truncation)]
    pub fn next_f32(&mut self) -> f32 {
        let raw = self.next_u64();
        let bits = ((raw >> 41) as u32) | 0x3f80_0000;
        f32::from_bits(bits) - 1.0
    }
}
