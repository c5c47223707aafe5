//! Quality bounds for branch-and-bound pruning.
//!
//! The search prunes a region when its bound proves no contained box can
//! beat the current best solution, so every implementor must return a
//! true *upper* bound over the whole region - a bound that undershoots
//! silently corrupts the search.
//!
//! During discriminative training the search maximizes
//! `quality(box) + loss(box, ground_truth)` to find the most violated
//! constraint; [`LossAugmented`] wraps any base [`QualityBound`] and adds
//! a sound bound on the loss term.

mod overlap;

pub use overlap::overlap_lower_bound;

use crate::geom::SearchState;
use crate::gt::GroundTruthSet;

/// An upper bound on the best achievable quality within a region of
/// candidate boxes.
///
/// Implementations are pure functions of the state and whatever immutable
/// per-image data they captured at construction, so `&self` receivers are
/// enough for arbitrarily many concurrent search workers.
pub trait QualityBound {
    /// Upper bound on `quality(box)` over all boxes in `state`'s region.
    ///
    /// Only called with states whose intervals are non-empty and validly
    /// ordered (`low[i] <= high[i]`).
    fn upper_bound(&self, state: &SearchState) -> f64;
}

/// The neutral base bound: always 0.
///
/// Stands in for the appearance model when only the loss term is of
/// interest, e.g. in the CLI and in tests of [`LossAugmented`].
#[derive(Clone, Copy, Debug, Default)]
pub struct ZeroQuality;

impl QualityBound for ZeroQuality {
    fn upper_bound(&self, _state: &SearchState) -> f64 {
        0.0
    }
}

/// Loss-augmented wrapper around a base quality bound.
///
/// Bounds `quality(box) + loss(box, ground_truth)` by adding the
/// ground-truth set's [`loss bound`](GroundTruthSet::loss_bound) to the
/// base bound. Composition replaces subclassing here: the wrapper owns
/// its base and delegates, so any bound implementation can be augmented.
#[derive(Clone, Debug)]
pub struct LossAugmented<Q> {
    base: Q,
    ground_truth: GroundTruthSet,
}

impl<Q: QualityBound> LossAugmented<Q> {
    /// Wraps `base`, augmenting it with the loss term for `ground_truth`.
    ///
    /// The ground-truth set is captured by value and never mutated
    /// afterwards; construction is the single-writer phase, evaluation is
    /// the many-reader phase.
    pub fn new(base: Q, ground_truth: GroundTruthSet) -> Self {
        Self { base, ground_truth }
    }

    /// The base bound being augmented.
    pub fn base(&self) -> &Q {
        &self.base
    }

    /// The ground-truth set established at setup.
    pub fn ground_truth(&self) -> &GroundTruthSet {
        &self.ground_truth
    }

    /// The loss term alone, without the base quality bound.
    pub fn loss_bound(&self, state: &SearchState) -> f64 {
        self.ground_truth.loss_bound(state)
    }
}

impl<Q: QualityBound> QualityBound for LossAugmented<Q> {
    fn upper_bound(&self, state: &SearchState) -> f64 {
        self.base.upper_bound(state) + self.ground_truth.loss_bound(state)
    }
}
