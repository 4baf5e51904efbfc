//! Uniform in-place permutation, shared by ingestion and session restarts.

use rand::Rng;
use rand::rng;
use rand::seq::SliceRandom;

/// Shuffle `items` uniformly with the thread rng.
///
/// Accepts any finite slice, including empty and singleton; the result is
/// always a permutation of the input multiset.
pub fn shuffle<T>(items: &mut [T]) {
    let mut rng = rng();
    items.shuffle(&mut rng);
}

/// Shuffle with a caller-provided source of randomness.
pub fn shuffle_with<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    items.shuffle(rng);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn sorted(mut items: Vec<u32>) -> Vec<u32> {
        items.sort_unstable();
        items
    }

    #[test]
    fn shuffle_is_a_permutation_for_all_lengths() {
        for len in [0usize, 1, 2, 3, 7, 50] {
            let original: Vec<u32> = (0..len as u32).collect();
            let mut shuffled = original.clone();
            let mut rng = StdRng::seed_from_u64(len as u64);
            shuffle_with(&mut shuffled, &mut rng);

            assert_eq!(sorted(shuffled), sorted(original));
        }
    }

    #[test]
    fn shuffle_preserves_duplicate_elements() {
        let original = vec![1, 1, 2, 2, 2, 3];
        let mut shuffled = original.clone();
        let mut rng = StdRng::seed_from_u64(42);
        shuffle_with(&mut shuffled, &mut rng);

        assert_eq!(sorted(shuffled), sorted(original));
    }

    #[test]
    fn shuffle_eventually_changes_order() {
        let original: Vec<u32> = (0..20).collect();
        let mut rng = StdRng::seed_from_u64(7);
        let mut moved = false;
        for _ in 0..10 {
            let mut attempt = original.clone();
            shuffle_with(&mut attempt, &mut rng);
            if attempt != original {
                moved = true;
                break;
            }
        }
        assert!(moved);
    }

    #[test]
    fn thread_rng_shuffle_is_still_a_permutation() {
        let original = vec!["a", "b", "c", "d"];
        let mut shuffled = original.clone();
        shuffle(&mut shuffled);

        let mut left = shuffled;
        let mut right = original;
        left.sort_unstable();
        right.sort_unstable();
        assert_eq!(left, right);
    }
}
