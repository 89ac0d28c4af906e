//! Property tests for batch sampling

use mlp_rng_core_rs::SeededRng;
use proptest::prelude::*;

proptest! {
    #[test]
    fn uniform_batch_has_requested_len_and_bounds(
        seed in 1u64..,
        n in 0usize..256,
        low in -1_000.0f64..1_000.0,
        width in 0.001f64..1_000.0,
    ) {
        let high = low + width;
        let mut rng = SeededRng::new(seed);
        let batch = rng.uniform_batch(n, low, high);

        prop_assert_eq!(batch.len(), n);
        for x in batch {
            prop_assert!(x >= low && x < high, "{} outside [{}, {})", x, low, high);
        }
    }

    #[test]
    fn normal_batch_has_requested_len(
        seed in 1u64..,
        n in 0usize..256,
        mu in -10.0f64..10.0,
        sigma in 0.0f64..5.0,
    ) {
        let mut rng = SeededRng::new(seed);
        prop_assert_eq!(rng.normal_batch(n, mu, sigma).len(), n);
    }

    #[test]
    fn normal_batch_advances_by_whole_pairs(seed in 1u64.., n in 0usize..64) {
        let mut rng = SeededRng::new(seed);
        rng.normal_batch(n, 0.0, 1.0);

        let mut manual = SeededRng::new(seed);
        for _ in 0..(2 * n.div_ceil(2)) {
            manual.next_u32();
        }
        prop_assert_eq!(rng.state(), manual.state());
    }

    #[test]
    fn same_seed_same_batches(seed in any::<u64>(), n in 0usize..64) {
        let mut a = SeededRng::new(seed);
        let mut b = SeededRng::new(seed);
        prop_assert_eq!(a.rand(n), b.rand(n));
    }
}
