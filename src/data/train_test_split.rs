use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

/// Shuffles `items` with a seeded generator and cuts off the test partition.
///
/// `n_test = ceil(test_fraction * n)`; the first `n_test` shuffled items form
/// the test partition, the rest the training partition. The same seed always
/// yields the same partitions.
pub fn train_test_split<T>(items: Vec<T>, test_fraction: f64, seed: u64) -> (Vec<T>, Vec<T>) {
    let n = items.len();
    let n_test = ((test_fraction * n as f64).ceil() as usize).min(n);

    let mut order: Vec<usize> = (0..n).collect();
    order.shuffle(&mut StdRng::seed_from_u64(seed));

    let mut slots: Vec<Option<T>> = items.into_iter().map(Some).collect();
    let mut shuffled = order.into_iter().filter_map(|i| slots[i].take());
    let test: Vec<T> = shuffled.by_ref().take(n_test).collect();
    let train: Vec<T> = shuffled.collect();
    (train, test)
}
