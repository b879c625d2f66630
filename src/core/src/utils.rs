use rand::Rng;
use rand::RngExt;
use std::time::Instant;

pub struct TimeEstimation;

impl TimeEstimation {
    /// Run a closure and return its result together with the elapsed
    /// wall-clock milliseconds.
    pub fn estimate<T, F: FnOnce() -> T>(action: F) -> (T, u64) {
        let now = Instant::now();
        let result = action();
        (result, now.elapsed().as_millis() as u64)
    }
}

/// Derive an independent RNG stream seed from a root seed and two stream
/// coordinates (splitmix64 finalizer). Every match and every replica gets
/// its own stream, so results do not depend on worker-thread scheduling.
pub fn mix_seed(root: u64, lane: u64, index: u64) -> u64 {
    let mut z = root
        .wrapping_add(lane.wrapping_mul(0x9E37_79B9_7F4A_7C15))
        .wrapping_add(index.wrapping_mul(0xBF58_476D_1CE4_E5B9));
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Weighted sample: prefix sum over the weights buffer, then one uniform
/// draw. Returns `None` when no weight is positive.
pub fn weighted_index<R: Rng>(weights: &[f32], rng: &mut R) -> Option<usize> {
    let total: f64 = weights.iter().map(|w| f64::from(w.max(0.0))).sum();

    if total <= 0.0 {
        return None;
    }

    let mut draw = rng.random::<f64>() * total;
    let mut last_positive = None;

    for (idx, weight) in weights.iter().enumerate() {
        let weight = f64::from(weight.max(0.0));
        if weight <= 0.0 {
            continue;
        }

        last_positive = Some(idx);
        if draw < weight {
            return Some(idx);
        }
        draw -= weight;
    }

    // Floating point slack on the final prefix: fall back to the last
    // candidate that carried weight.
    last_positive
}
