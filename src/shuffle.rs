//! Shuffling helpers.

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

/// Returns a uniformly random permutation of `items`.
///
/// The input is left untouched; the permutation is built on a fresh copy
/// with a Fisher–Yates pass.
///
/// # Example
///
/// ```
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
/// use twentyone::shuffle::shuffled;
///
/// let mut rng = ChaCha8Rng::seed_from_u64(7);
/// let items = [1, 2, 3, 4, 5];
/// let mut permuted = shuffled(&items, &mut rng);
/// permuted.sort_unstable();
/// assert_eq!(permuted, items);
/// ```
pub fn shuffled<T: Clone, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut copy = items.to_vec();
    copy.shuffle(rng);
    copy
}
