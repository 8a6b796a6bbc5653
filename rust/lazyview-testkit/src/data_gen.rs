//! Seeded random inputs for view tests.
//!
//! Every generator takes the [`fastrand::Rng`] to draw from, so a failing case can be
//! replayed from its seed.

use std::ops::Range;

/// Seed taken from `LAZYVIEW_TEST_SEED` when set, otherwise a fixed default.
pub fn seed() -> u64 {
    std::env::var("LAZYVIEW_TEST_SEED")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(0x5eed_1a2f)
}

pub fn rng() -> fastrand::Rng {
    fastrand::Rng::with_seed(seed())
}

/// `len` values drawn uniformly from `values`.
pub fn random_vec(rng: &mut fastrand::Rng, len: usize, values: Range<i64>) -> Vec<i64> {
    (0..len).map(|_| rng.i64(values.clone())).collect()
}

/// Like [`random_vec`], sorted ascending.
pub fn sorted_vec(rng: &mut fastrand::Rng, len: usize, values: Range<i64>) -> Vec<i64> {
    let mut data = random_vec(rng, len, values);
    data.sort_unstable();
    data
}

/// `count` vectors of random length below `max_len`. Empty vectors are frequent on
/// purpose: they exercise the lane-skipping paths.
pub fn random_lanes(rng: &mut fastrand::Rng, count: usize, max_len: usize) -> Vec<Vec<i64>> {
    (0..count)
        .map(|_| {
            let len = if rng.u8(0..4) == 0 {
                0
            } else {
                rng.usize(0..max_len)
            };
            random_vec(rng, len, 0..100)
        })
        .collect()
}

/// A window `[from, to)` with `from <= to`, possibly reaching past `len`.
pub fn random_window(rng: &mut fastrand::Rng, len: usize) -> (usize, usize) {
    let from = rng.usize(0..=len + 1);
    let to = from + rng.usize(0..=len.max(1));
    (from, to)
}

/// Vector of `len` values where runs of equal neighbors are likely.
pub fn runs_vec(rng: &mut fastrand::Rng, len: usize) -> Vec<i64> {
    let mut data = Vec::with_capacity(len);
    let mut value = rng.i64(0..5);
    for _ in 0..len {
        if rng.u8(0..3) == 0 {
            value = rng.i64(0..5);
        }
        data.push(value);
    }
    data
}
