use std::num::Wrapping as W;

/// A pseudo-random source yielding 31 usable bits per draw.
pub trait RandSource {
    /// Returns the next value in `0..=0x7fff_ffff`.
    fn next_u31(&mut self) -> u32;
}

/// Degree and separation of the additive feedback generator behind `rand()`.
const DEGREE: usize = 31;
const SEPARATION: usize = 3;

/// Port of the C library `rand()` (additive feedback, TYPE_3).
///
/// With the default seed of 1 this yields exactly the sequence `rand()`
/// produces in a process that never calls `srand`.
pub struct LibcRand {
    state: [u32; DEGREE],
    front: usize,
    rear: usize,
}

impl LibcRand {
    pub fn new(seed: u32) -> Self {
        let seed = if seed == 0 { 1 } else { seed };

        let mut state = [0u32; DEGREE];
        state[0] = seed;

        // state[i] = (16807 * state[i - 1]) % 2147483647, in Schrage form so
        // that seeds above i32::MAX wrap the way the C code does.
        let mut word = seed as i32;

        for slot in state.iter_mut().skip(1) {
            let hi = word as i64 / 127_773;
            let lo = word as i64 % 127_773;

            let mut next = 16_807 * lo - 2_836 * hi;

            if next < 0 {
                next += 2_147_483_647;
            }

            word = next as i32;
            *slot = word as u32;
        }

        let mut rand = Self {
            state,
            front: SEPARATION,
            rear: 0,
        };

        for _ in 0..DEGREE * 10 {
            rand.next_u31();
        }

        rand
    }
}

impl Default for LibcRand {
    fn default() -> Self {
        Self::new(1)
    }
}

impl RandSource for LibcRand {
    fn next_u31(&mut self) -> u32 {
        let value = self.state[self.front].wrapping_add(self.state[self.rear]);
        self.state[self.front] = value;

        self.front = (self.front + 1) % DEGREE;
        self.rear = (self.rear + 1) % DEGREE;

        value >> 1
    }
}

/// Builds full-width 64-bit operands out of a 31-bit source.
pub struct OperandGenerator<R> {
    source: R,
}

impl<R: RandSource> OperandGenerator<R> {
    pub fn new(source: R) -> Self {
        Self { source }
    }

    /// Draws three values and mixes them as `(d1 << 33) ^ ((d2 << 16) + d3)`.
    pub fn next(&mut self) -> u64 {
        let d1 = W(self.source.next_u31() as u64);
        let d2 = W(self.source.next_u31() as u64);
        let d3 = W(self.source.next_u31() as u64);

        ((d1 << 33) ^ ((d2 << 16) + d3)).0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Replays a fixed list of draws, cycling when exhausted.
    struct Scripted {
        draws: Vec<u32>,
        position: usize,
    }

    impl RandSource for Scripted {
        fn next_u31(&mut self) -> u32 {
            let draw = self.draws[self.position % self.draws.len()];
            self.position += 1;
            draw
        }
    }

    #[test]
    fn libc_rand_matches_default_sequence() {
        let mut rand = LibcRand::default();

        assert_eq!(rand.next_u31(), 1_804_289_383);
        assert_eq!(rand.next_u31(), 846_930_886);
        assert_eq!(rand.next_u31(), 1_681_692_777);
        assert_eq!(rand.next_u31(), 1_714_636_915);
    }

    #[test]
    fn zero_seed_behaves_like_one() {
        let mut zero = LibcRand::new(0);
        let mut one = LibcRand::new(1);

        for _ in 0..100 {
            assert_eq!(zero.next_u31(), one.next_u31());
        }
    }

    #[test]
    fn libc_rand_stays_in_31_bits() {
        let mut rand = LibcRand::new(0xdead_beef);

        for _ in 0..1000 {
            assert!(rand.next_u31() <= 0x7fff_ffff);
        }
    }

    #[test]
    fn combiner_groups_addition_before_xor() {
        let mut gen = OperandGenerator::new(Scripted {
            draws: vec![1, 1, 0x1_0000],
            position: 0,
        });

        // (1 << 33) ^ ((1 << 16) + 0x10000) = 0x2_0000_0000 ^ 0x2_0000
        assert_eq!(gen.next(), 0x0000_0002_0002_0000);
    }

    #[test]
    fn combiner_fills_the_top_bits_from_the_first_draw() {
        let mut gen = OperandGenerator::new(Scripted {
            draws: vec![0x7fff_ffff, 0, 0],
            position: 0,
        });

        assert_eq!(gen.next(), 0xffff_fffe_0000_0000);
    }

    #[test]
    fn first_operand_from_default_source() {
        let d1 = 1_804_289_383u64;
        let d2 = 846_930_886u64;
        let d3 = 1_681_692_777u64;

        let mut gen = OperandGenerator::new(LibcRand::default());

        assert_eq!(gen.next(), (d1 << 33) ^ ((d2 << 16) + d3));
    }
}
