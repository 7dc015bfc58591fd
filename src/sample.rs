//! Random target selection
//!
//! Phishing simulations look more natural when every campaign does not hit
//! the same full list. When randomization is requested, a subset of the
//! parsed contacts is drawn without replacement.

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

/// How many targets to keep from a parsed list
///
/// # Examples
///
/// ```
/// use groupctl::sample::SampleRequest;
///
/// // Keep everything, in file order
/// let all = SampleRequest::default();
/// assert!(!all.randomize);
///
/// // Exactly 25 random targets (or fewer if the file is smaller)
/// let fixed = SampleRequest { randomize: true, target_count: Some(25) };
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SampleRequest {
    pub randomize: bool,
    pub target_count: Option<usize>,
}

/// Samples with the thread-local RNG
pub fn sample<T: Clone>(items: Vec<T>, request: &SampleRequest) -> Vec<T> {
    sample_with_rng(items, request, &mut rand::thread_rng())
}

/// Samples `items` according to `request`
///
/// Without `randomize` the input is returned untouched. Otherwise the size is
/// `target_count` clamped to the number of items, or a uniform draw from
/// `1..=len` when no count is given. Elements are picked without replacement
/// and come back in random order. This never fails; an empty input or a zero
/// count yields an empty list.
pub fn sample_with_rng<T: Clone, R: Rng>(
    mut items: Vec<T>,
    request: &SampleRequest,
    rng: &mut R,
) -> Vec<T> {
    if !request.randomize {
        return items;
    }

    let available = items.len();
    if available == 0 {
        return items;
    }

    let amount = match request.target_count {
        Some(count) => count.min(available),
        None => rng.gen_range(1..=available),
    };
    debug!("Sampling {} of {} targets", amount, available);

    let (picked, _) = items.partial_shuffle(rng, amount);
    picked.to_vec()
}
