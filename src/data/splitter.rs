// ============================================================
// Layer 4 — Train/Test Splitter
// ============================================================
// Shuffles rows and splits them into two sets:
//   - Training set: used to fit the preprocessor and model
//   - Test set:     used to measure drift and generalisation
//
// Why shuffle before splitting?
//   Source files are often ordered (e.g. all phishing rows
//   before all legitimate rows). Without shuffling, the test
//   set would only contain one class. Shuffling gives both
//   sets a representative mix.
//
// Why a fixed seed instead of thread_rng?
//   Ingestion must be deterministic: re-running on unchanged
//   input and configuration has to produce byte-identical
//   partitions, so downstream artifacts are reproducible.
//   StdRng::seed_from_u64 pins the whole permutation.
//
// Uses Fisher-Yates shuffle via rand::seq::SliceRandom,
// the standard unbiased shuffle algorithm.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Shuffle `rows` with a seeded RNG and split into (train, test).
///
/// # Arguments
/// * `rows`        - All available rows (consumed by this function)
/// * `train_ratio` - Proportion for training, e.g. 0.8 = 80%
/// * `seed`        - RNG seed; same seed + same input = same split
///
/// # Returns
/// A tuple (train_rows, test_rows). Every input row lands in
/// exactly one of the two — nothing dropped, nothing duplicated.
pub fn split_train_test<T>(mut rows: Vec<T>, train_ratio: f64, seed: u64) -> (Vec<T>, Vec<T>) {
    let mut rng = StdRng::seed_from_u64(seed);

    // Fisher-Yates shuffle — every permutation equally likely
    rows.shuffle(&mut rng);

    // e.g. 100 rows * 0.8 = 80 → first 80 are training
    let total    = rows.len();
    let split_at = ((total as f64) * train_ratio).round() as usize;

    // Clamp to valid range to avoid panics on tiny datasets
    let split_at = split_at.min(total);

    // split_off(n) removes elements [n..] and returns them
    let test = rows.split_off(split_at);

    tracing::debug!(
        "Split: {} train, {} test (ratio {:.2}, seed {})",
        rows.len(),
        test.len(),
        train_ratio,
        seed,
    );

    (rows, test)
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_correct_split_sizes() {
        let items: Vec<usize> = (0..100).collect();
        let (train, test)     = split_train_test(items, 0.8, 42);
        assert_eq!(train.len(), 80);
        assert_eq!(test.len(),  20);
    }

    #[test]
    fn test_all_items_preserved_and_disjoint() {
        let items: Vec<usize> = (0..50).collect();
        let (train, test)     = split_train_test(items, 0.7, 42);
        assert_eq!(train.len() + test.len(), 50);

        let mut all: Vec<usize> = train.iter().chain(test.iter()).copied().collect();
        all.sort_unstable();
        assert_eq!(all, (0..50).collect::<Vec<_>>());
    }

    #[test]
    fn test_same_seed_same_split() {
        let a = split_train_test((0..100).collect::<Vec<usize>>(), 0.8, 7);
        let b = split_train_test((0..100).collect::<Vec<usize>>(), 0.8, 7);
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_seed_different_order() {
        let (a, _) = split_train_test((0..100).collect::<Vec<usize>>(), 0.8, 1);
        let (b, _) = split_train_test((0..100).collect::<Vec<usize>>(), 0.8, 2);
        assert_ne!(a, b);
    }

    #[test]
    fn test_empty_dataset() {
        let items: Vec<usize> = Vec::new();
        let (train, test)     = split_train_test(items, 0.8, 42);
        assert!(train.is_empty());
        assert!(test.is_empty());
    }

    #[test]
    fn test_full_training_split() {
        let items: Vec<usize> = (0..10).collect();
        let (train, test)     = split_train_test(items, 1.0, 42);
        assert_eq!(train.len(), 10);
        assert!(test.is_empty());
    }
}
