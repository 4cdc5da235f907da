use rand::{SeedableRng, rngs::StdRng};

/// Get a random number generator, optionally seeded for reproducibility.
pub fn get_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

#[cfg(test)]
pub(crate) mod scripted {
    use rand::RngCore;

    /// Replays a fixed list of 32-bit words, then zeros.
    ///
    /// `random_range(0..len)` maps a word `x` to `(x * len) >> 32`, so the
    /// word `ceil(index * 2^32 / len)` lands exactly on `index`. An all-zero
    /// source makes every range draw, `choose` and shuffle step pick slot 0.
    pub struct Scripted {
        words: Vec<u32>,
        pos: usize,
    }

    impl Scripted {
        /// One word per `(index, len)` pair. Each pair must match the length of
        /// the range actually drawn from at that step.
        pub fn picks(picks: &[(usize, usize)]) -> Self {
            let words = picks
                .iter()
                .map(|&(index, len)| {
                    assert!(index < len);
                    ((index as u64) << 32).div_ceil(len as u64) as u32
                })
                .collect();
            Scripted { words, pos: 0 }
        }

        pub fn zeros() -> Self {
            Scripted {
                words: Vec::new(),
                pos: 0,
            }
        }
    }

    impl RngCore for Scripted {
        fn next_u32(&mut self) -> u32 {
            let word = self.words.get(self.pos).copied().unwrap_or(0);
            self.pos += 1;
            word
        }

        fn next_u64(&mut self) -> u64 {
            u64::from(self.next_u32())
        }

        fn fill_bytes(&mut self, dst: &mut [u8]) {
            rand::rand_core::impls::fill_bytes_via_next(self, dst)
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::{
        Rng,
        seq::{IndexedRandom, SliceRandom},
    };

    use super::scripted::Scripted;
    use super::*;

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let mut a = get_rng(Some(7));
        let mut b = get_rng(Some(7));
        let draws_a = (0..16).map(|_| a.random_range(0..100)).collect::<Vec<usize>>();
        let draws_b = (0..16).map(|_| b.random_range(0..100)).collect::<Vec<usize>>();
        assert_eq!(draws_a, draws_b);
        assert!(draws_a.iter().all(|&d| d < 100));
    }

    #[test]
    fn test_scripted_picks() {
        let mut rng = Scripted::picks(&[(6, 16), (1, 4), (2, 3), (0, 2), (11, 12)]);
        assert_eq!(rng.random_range(0..16usize), 6);
        assert_eq!(rng.random_range(0..4usize), 1);
        assert_eq!(rng.random_range(0..3usize), 2);
        assert_eq!(rng.random_range(0..2usize), 0);
        assert_eq!(rng.random_range(0..12usize), 11);
        // Script exhausted
        assert_eq!(rng.random_range(0..5usize), 0);
    }

    #[test]
    fn test_scripted_choose() {
        let items = ['a', 'b', 'c'];
        assert_eq!(items.choose(&mut Scripted::picks(&[(1, 3)])), Some(&'b'));
        assert_eq!(items.choose(&mut Scripted::zeros()), Some(&'a'));
    }

    #[test]
    fn test_zero_shuffle_moves_last_to_front() {
        // Every swap partner is slot 0, walking from the front.
        let mut items = [0, 1, 2, 3];
        items.shuffle(&mut Scripted::zeros());
        assert_eq!(items, [3, 0, 1, 2]);
    }
}
