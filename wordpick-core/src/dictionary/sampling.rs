use rand::Rng;

/// Shuffles `items` in place with the Fisher-Yates algorithm.
///
/// For `i` from the last index down to 1, swaps item `i` with an item
/// chosen uniformly in `0..=i`. Every permutation is equally likely.
pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
	for i in (1..items.len()).rev() {
		let j = rng.random_range(0..=i);
		items.swap(i, j);
	}
}

/// Draws up to `k` items uniformly at random, without replacement.
///
/// Shuffles a copy of `items` and keeps the first `min(k, items.len())`.
/// The caller's slice is left untouched. Asking for more items than
/// available returns all of them, shuffled.
pub fn sample_without_replacement<T: Clone, R: Rng + ?Sized>(items: &[T], k: usize, rng: &mut R) -> Vec<T> {
	let mut shuffled = items.to_vec();
	shuffle(&mut shuffled, rng);
	shuffled.truncate(k);
	shuffled
}
