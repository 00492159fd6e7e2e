//! 32-bit linear congruential generator used to build reproducible quizzes.
//!
//! Recurrence: state = (state * 1664525 + 1013904223) mod 2^32, output = state / 2^32.
//! Changing either constant changes every seeded quiz, so shared quiz codes
//! would stop reproducing the same questions.

const MULTIPLIER: u32 = 1_664_525;
const INCREMENT: u32 = 1_013_904_223;
const MODULUS: f64 = 4_294_967_296.0;

#[derive(Debug, Clone)]
pub struct SeededRandom {
    state: u32,
}

impl SeededRandom {
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    pub fn state(&self) -> u32 {
        self.state
    }

    /// Next value in [0, 1).
    pub fn next(&mut self) -> f64 {
        self.state = self.state.wrapping_mul(MULTIPLIER).wrapping_add(INCREMENT);
        self.state as f64 / MODULUS
    }

    /// Fisher-Yates from the last index down to 1. Returns a permuted copy and
    /// consumes exactly `items.len() - 1` draws.
    pub fn shuffle<T: Clone>(&mut self, items: &[T]) -> Vec<T> {
        let mut result = items.to_vec();
        for i in (1..result.len()).rev() {
            let j = (self.next() * (i + 1) as f64).floor() as usize;
            result.swap(i, j);
        }
        result
    }

    /// Shuffles the whole input and keeps the first `count` items.
    pub fn select_random<T: Clone>(&mut self, items: &[T], count: usize) -> Vec<T> {
        let mut shuffled = self.shuffle(items);
        shuffled.truncate(count);
        shuffled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_sequence() {
        let mut rng = SeededRandom::new(12345);
        rng.next();
        assert_eq!(rng.state(), 87628868);
        rng.next();
        assert_eq!(rng.state(), 71072467);
        rng.next();
        assert_eq!(rng.state(), 2332836374);
    }

    #[test]
    fn zero_seed_is_valid() {
        let mut rng = SeededRandom::new(0);
        rng.next();
        assert_eq!(rng.state(), 1013904223);
    }

    #[test]
    fn values_stay_in_unit_interval() {
        let mut rng = SeededRandom::new(987654);
        for _ in 0..10_000 {
            let value = rng.next();
            assert!((0.0..1.0).contains(&value), "got {value}");
        }
    }

    #[test]
    fn shuffle_known_permutation() {
        let mut rng = SeededRandom::new(42);
        assert_eq!(rng.shuffle(&[0, 1, 2, 3, 4]), vec![2, 3, 4, 0, 1]);
    }

    #[test]
    fn shuffle_leaves_input_alone_and_consumes_len_minus_one_draws() {
        let input = vec!['a', 'b', 'c', 'd', 'e', 'f'];
        let mut rng = SeededRandom::new(7);
        let shuffled = rng.shuffle(&input);
        assert_eq!(input, vec!['a', 'b', 'c', 'd', 'e', 'f']);

        let mut sorted = shuffled.clone();
        sorted.sort();
        assert_eq!(sorted, input);

        let mut counter = SeededRandom::new(7);
        for _ in 0..input.len() - 1 {
            counter.next();
        }
        assert_eq!(rng.state(), counter.state());
    }

    #[test]
    fn empty_and_single_shuffles_draw_nothing() {
        let mut rng = SeededRandom::new(3);
        assert!(rng.shuffle::<u8>(&[]).is_empty());
        assert_eq!(rng.shuffle(&[9]), vec![9]);
        assert_eq!(rng.state(), 3);
    }

    #[test]
    fn select_random_is_a_shuffle_prefix() {
        let items: Vec<u32> = (0..20).collect();
        let full = SeededRandom::new(99).shuffle(&items);
        let picked = SeededRandom::new(99).select_random(&items, 5);
        assert_eq!(picked, full[..5].to_vec());
        assert_eq!(SeededRandom::new(99).select_random(&items[..3], 10).len(), 3);
    }
}
