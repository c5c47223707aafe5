//! Constant-time lower bound on region-vs-box overlap.

use crate::geom::{BBox, SearchState};

/// Lower bound on the maximum IoU achievable by any box in `state`'s
/// region against the ground-truth box `reference`.
///
/// The region may represent millions of concrete boxes, so this works
/// purely from the region's extreme corners in O(1), without allocating:
///
/// - `min_box`, the smallest box describable by the region, is what every
///   candidate is guaranteed to contain; its intersection with the
///   (offset-shifted) reference is overlap that no candidate can miss.
/// - `max_box`, the largest describable box, stands in for the unknown
///   candidate's area in the union term. Substituting the largest
///   possible area over-estimates the union, which keeps the returned
///   ratio a safe *lower* bound. Branch-and-bound pruning soundness
///   depends on this direction of error, so the estimate must stay loose
///   rather than risk overshooting.
///
/// Returns 0 when the region's `min_box` is degenerate (no overlap can be
/// guaranteed) or disjoint from the reference. The result is clamped to
/// `[0, 1]` against numerically degenerate denominators.
///
/// On a singleton region (all four coordinates pinned) `min_box` and
/// `max_box` coincide and the bound collapses to the exact IoU.
pub fn overlap_lower_bound(state: &SearchState, reference: &BBox) -> f64 {
    let Some(min_box) = state.min_box() else {
        return 0.0; // illegal box, no overlap
    };

    // Boxes in the search are shifted by 1 for the integral image trick;
    // compensate when intersecting with ground truth.
    let shifted_ref = reference.shifted(1);
    let Some(min_intersect) = min_box.intersect(&shifted_ref) else {
        return 0.0;
    };

    let max_area = state.max_box().area();
    let min_area = min_box.area();
    let ref_area = shifted_ref.area();

    let min_intersection_area = min_intersect.area();
    let ratio_denom = ref_area + max_area - min_intersection_area; // can be a bad estimate

    ((min_area + ref_area) / ratio_denom - 1.0).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degenerate_min_box_yields_zero() {
        // right can be smaller than left in the worst case
        let state = SearchState::from_intervals([0, 0, 2, 2], [10, 10, 20, 20]);
        assert!(state.min_box().is_none());
        let gt = BBox::with_score(0, 0, 15, 15, 1.0);
        assert_eq!(overlap_lower_bound(&state, &gt), 0.0);
    }

    #[test]
    fn test_disjoint_reference_yields_zero() {
        let state = SearchState::from_box(&BBox::new(0, 0, 5, 5));
        let gt = BBox::with_score(50, 50, 60, 60, 1.0);
        assert_eq!(overlap_lower_bound(&state, &gt), 0.0);
    }

    #[test]
    fn test_singleton_region_is_exact_iou() {
        // State pinned to {10,10,20,20}; after the +1 offset the ground
        // truth compares as {11,11,21,21}.
        let pinned = BBox::new(10, 10, 20, 20);
        let state = SearchState::from_box(&pinned);
        let gt = BBox::with_score(10, 10, 20, 20, 1.0);

        let expected = pinned.iou(&gt.shifted(1));
        let bound = overlap_lower_bound(&state, &gt);
        assert!((bound - expected).abs() < 1e-12, "bound {bound} vs exact {expected}");
        // Known value: 11x11 boxes offset by (1,1)
        assert!((bound - 100.0 / 142.0).abs() < 1e-12);
    }

    #[test]
    fn test_singleton_perfect_match_is_one() {
        // A state already expressed in search coordinates, sitting exactly
        // on the shifted ground truth.
        let state = SearchState::from_box(&BBox::new(11, 11, 21, 21));
        let gt = BBox::with_score(10, 10, 20, 20, 1.0);
        let bound = overlap_lower_bound(&state, &gt);
        assert!((bound - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_bound_never_exceeds_any_achievable_iou() {
        // For every concrete box in a small region, the exact IoU must be
        // at least the claimed lower bound... for at least one box, since
        // the bound promises only that the *maximum* IoU reaches it.
        let state = SearchState::from_intervals([8, 8, 18, 18], [14, 14, 24, 24]);
        let gt = BBox::with_score(10, 10, 20, 20, 1.0);
        let bound = overlap_lower_bound(&state, &gt);

        let best = state
            .iter_boxes()
            .map(|b| b.iou(&gt.shifted(1)))
            .fold(0.0, f64::max);
        assert!(
            best >= bound - 1e-12,
            "max achievable IoU {best} fell below claimed bound {bound}"
        );
    }

    #[test]
    fn test_bound_is_in_unit_interval() {
        let state = SearchState::from_intervals([0, 0, 0, 0], [30, 30, 30, 30]);
        let gt = BBox::with_score(5, 5, 6, 6, 1.0);
        let bound = overlap_lower_bound(&state, &gt);
        assert!((0.0..=1.0).contains(&bound));
    }
}
