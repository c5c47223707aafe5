//! Ground-truth annotations for one training image.
//!
//! A [`GroundTruthSet`] is built once per image at setup time and is
//! immutable for the lifetime of that image's search, so concurrent
//! branch-and-bound workers can read it without synchronization.

pub mod io_csv;
pub mod io_json;

use crate::bound::overlap_lower_bound;
use crate::error::BoxboundError;
use crate::geom::{BBox, SearchState};

/// Number of values per box in the flat setup buffer:
/// left, top, right, bottom, score.
pub const FLAT_STRIDE: usize = 5;

/// The annotated boxes of the current training image.
///
/// Score sign convention: a negative score on the first entry marks the
/// entire image as a negative/background example, and no positive-score
/// entries are expected alongside it (validation warns about that).
/// An empty set means inference/test mode, where no loss term applies.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GroundTruthSet {
    boxes: Vec<BBox>,
}

impl GroundTruthSet {
    /// Creates a set from already-decoded boxes, preserving order.
    pub fn from_boxes(boxes: Vec<BBox>) -> Self {
        Self { boxes }
    }

    /// Creates an empty set (inference mode, loss bound is always 0).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Decodes a set from a flat buffer of [`FLAT_STRIDE`] numbers per box:
    /// left, top, right, bottom, score. Coordinates are truncated to
    /// integers; the score is kept as-is.
    ///
    /// # Errors
    /// Returns [`BoxboundError::GroundTruthBuffer`] if the buffer length is
    /// not a multiple of [`FLAT_STRIDE`].
    pub fn from_flat(values: &[f64]) -> Result<Self, BoxboundError> {
        if values.len() % FLAT_STRIDE != 0 {
            return Err(BoxboundError::GroundTruthBuffer { len: values.len() });
        }
        let boxes = values
            .chunks_exact(FLAT_STRIDE)
            .map(|chunk| BBox {
                left: chunk[0] as i32,
                top: chunk[1] as i32,
                right: chunk[2] as i32,
                bottom: chunk[3] as i32,
                score: chunk[4],
            })
            .collect();
        Ok(Self { boxes })
    }

    /// The boxes, in load order.
    pub fn boxes(&self) -> &[BBox] {
        &self.boxes
    }

    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    /// Returns true if this image is marked as a negative/background
    /// example (first box has a negative score).
    pub fn is_negative_image(&self) -> bool {
        self.boxes.first().is_some_and(|b| b.score < 0.0)
    }

    /// Upper bound on the structured loss over all boxes in `state`'s
    /// region, in `[0, 1]`.
    ///
    /// The loss is `1 - max_overlap` over all ground-truth boxes: the
    /// image counts as explained when any ground-truth box is well
    /// covered. Because [`overlap_lower_bound`] is a *lower* bound on
    /// achievable overlap, `1 - max_overlap` is an *upper* bound on the
    /// minimum loss in the region, which is the direction a sound pruning
    /// bound needs.
    pub fn loss_bound(&self, state: &SearchState) -> f64 {
        if self.boxes.is_empty() {
            // No ground truth means test stage, no loss term to add.
            return 0.0;
        }
        if self.is_negative_image() {
            // Fixed loss of 1 for negative example images.
            return 1.0;
        }
        let max_overlap = self
            .boxes
            .iter()
            .map(|gt| overlap_lower_bound(state, gt))
            .fold(0.0, f64::max);
        1.0 - max_overlap
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_flat_decodes_boxes() {
        let values = [10.0, 20.0, 30.0, 40.0, 1.0, 5.9, 6.2, 7.0, 8.0, -2.0];
        let set = GroundTruthSet::from_flat(&values).unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.boxes()[0], BBox::with_score(10, 20, 30, 40, 1.0));
        // Coordinates truncate toward zero
        assert_eq!(set.boxes()[1], BBox::with_score(5, 6, 7, 8, -2.0));
    }

    #[test]
    fn test_from_flat_rejects_ragged_buffer() {
        let values = [10.0, 20.0, 30.0, 40.0, 1.0, 99.0];
        let err = GroundTruthSet::from_flat(&values).unwrap_err();
        assert!(matches!(
            err,
            BoxboundError::GroundTruthBuffer { len: 6 }
        ));
    }

    #[test]
    fn test_from_flat_empty_buffer_is_empty_set() {
        let set = GroundTruthSet::from_flat(&[]).unwrap();
        assert!(set.is_empty());
        assert!(!set.is_negative_image());
    }

    #[test]
    fn test_negative_image_marker() {
        let set = GroundTruthSet::from_boxes(vec![BBox::with_score(0, 0, 9, 9, -1.0)]);
        assert!(set.is_negative_image());
        let positive = GroundTruthSet::from_boxes(vec![BBox::with_score(0, 0, 9, 9, 1.0)]);
        assert!(!positive.is_negative_image());
    }

    #[test]
    fn test_loss_bound_empty_set_is_zero() {
        let set = GroundTruthSet::empty();
        let state = SearchState::from_intervals([0, 0, 10, 10], [5, 5, 20, 20]);
        assert_eq!(set.loss_bound(&state), 0.0);
    }

    #[test]
    fn test_loss_bound_negative_image_is_one() {
        let set = GroundTruthSet::from_boxes(vec![BBox::with_score(0, 0, 9, 9, -1.0)]);
        // Even a state sitting right on the box gets loss 1
        let state = SearchState::from_box(&BBox::new(1, 1, 10, 10));
        assert_eq!(set.loss_bound(&state), 1.0);
    }

    #[test]
    fn test_loss_bound_takes_best_ground_truth_box() {
        let far = BBox::with_score(100, 100, 110, 110, 1.0);
        let near = BBox::with_score(10, 10, 20, 20, 1.0);
        let set = GroundTruthSet::from_boxes(vec![far, near]);
        // State pinned exactly on `near` shifted by the offset convention
        let state = SearchState::from_box(&BBox::new(11, 11, 21, 21));
        let loss = set.loss_bound(&state);
        assert!((loss - 0.0).abs() < 1e-12, "loss was {loss}");
    }
}
