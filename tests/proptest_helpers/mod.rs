#![allow(dead_code)]

use boxbound::geom::{BBox, SearchState};
use boxbound::gt::GroundTruthSet;
use proptest::prelude::*;
use proptest::test_runner::{Config as ProptestConfig, FileFailurePersistence};

pub fn proptest_config() -> ProptestConfig {
    let cases = std::env::var("PROPTEST_CASES")
        .ok()
        .and_then(|v| v.parse::<u32>().ok())
        .unwrap_or(64);

    let mut config = ProptestConfig::with_failure_persistence(FileFailurePersistence::WithSource(
        "proptest-regressions",
    ));
    config.cases = cases;
    config.max_shrink_iters = 1024;
    config
}

/// An ordered box with coordinates in `0..max_coord` and a positive score.
pub fn arb_gt_box(max_coord: i32) -> impl Strategy<Value = BBox> {
    (
        0..max_coord,
        0..max_coord,
        0..max_coord,
        0..max_coord,
        0.1f64..10.0,
    )
        .prop_map(|(x0, y0, x1, y1, score)| {
            BBox::with_score(x0.min(x1), y0.min(y1), x0.max(x1), y0.max(y1), score)
        })
}

/// A non-empty ground-truth set of positive boxes.
pub fn arb_positive_ground_truth(max_coord: i32) -> impl Strategy<Value = GroundTruthSet> {
    proptest::collection::vec(arb_gt_box(max_coord), 1..=4).prop_map(GroundTruthSet::from_boxes)
}

/// A well-formed search state: `low[i] <= high[i]` in every dimension,
/// kept small enough that exhaustive enumeration stays cheap.
pub fn arb_state(max_coord: i32, max_span: i32) -> impl Strategy<Value = SearchState> {
    let interval = move || (0..max_coord, 0..=max_span);
    (interval(), interval(), interval(), interval()).prop_map(|((l, ls), (t, ts), (r, rs), (b, bs))| {
        SearchState::from_intervals([l, t, r, b], [l + ls, t + ts, r + rs, b + bs])
    })
}

/// Exact structured loss of one concrete box against a ground-truth set.
pub fn exact_loss(candidate: &BBox, set: &GroundTruthSet) -> f64 {
    if set.is_empty() {
        return 0.0;
    }
    if set.is_negative_image() {
        return 1.0;
    }
    let max_iou = set
        .boxes()
        .iter()
        .map(|gt| candidate.iou(&gt.shifted(1)))
        .fold(0.0, f64::max);
    1.0 - max_iou
}
