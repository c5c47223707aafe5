//! Search-state regions: interval boxes over the 4-dimensional box space.

use super::bbox::BBox;

/// Index of the `left` coordinate in [`SearchState`] interval arrays.
pub const DIM_LEFT: usize = 0;
/// Index of the `top` coordinate.
pub const DIM_TOP: usize = 1;
/// Index of the `right` coordinate.
pub const DIM_RIGHT: usize = 2;
/// Index of the `bottom` coordinate.
pub const DIM_BOTTOM: usize = 3;

/// A hyper-rectangular region of candidate boxes.
///
/// For each of the four box coordinates (left, top, right, bottom) the state
/// stores a closed interval `[low, high]`; the region is the set of all
/// boxes `b` with `low[i] <= b_i <= high[i]`. The branch-and-bound search
/// engine owns and splits these; bound computations only read them.
///
/// Invariant (caller contract): `low[i] <= high[i]` for all four dimensions.
/// A state can still *induce* a degenerate worst-case box (see
/// [`Self::min_box`]) even when the intervals themselves are well formed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchState {
    pub low: [i32; 4],
    pub high: [i32; 4],
}

impl SearchState {
    /// Creates a state from four `[low, high]` interval pairs, ordered
    /// left, top, right, bottom.
    #[inline]
    pub fn from_intervals(low: [i32; 4], high: [i32; 4]) -> Self {
        Self { low, high }
    }

    /// Creates a singleton state pinning every coordinate to `bbox`.
    #[inline]
    pub fn from_box(bbox: &BBox) -> Self {
        let coords = [bbox.left, bbox.top, bbox.right, bbox.bottom];
        Self {
            low: coords,
            high: coords,
        }
    }

    /// Returns true if every interval pins a single value, i.e. the region
    /// contains exactly one concrete box.
    #[inline]
    pub fn is_singleton(&self) -> bool {
        self.low == self.high
    }

    /// The smallest-area box describable by this region: largest possible
    /// left/top paired with smallest possible right/bottom.
    ///
    /// Returns `None` when that pairing is degenerate (right < left or
    /// bottom < top), meaning no overlap with anything can be guaranteed
    /// across the whole region.
    #[inline]
    pub fn min_box(&self) -> Option<BBox> {
        let bbox = BBox::new(
            self.high[DIM_LEFT],
            self.high[DIM_TOP],
            self.low[DIM_RIGHT],
            self.low[DIM_BOTTOM],
        );
        bbox.is_ordered().then_some(bbox)
    }

    /// The largest-area box describable by this region: smallest possible
    /// left/top paired with largest possible right/bottom.
    #[inline]
    pub fn max_box(&self) -> BBox {
        BBox::new(
            self.low[DIM_LEFT],
            self.low[DIM_TOP],
            self.high[DIM_RIGHT],
            self.high[DIM_BOTTOM],
        )
    }

    /// Number of concrete boxes in the region.
    pub fn region_size(&self) -> u64 {
        (0..4)
            .map(|i| (i64::from(self.high[i]) - i64::from(self.low[i]) + 1) as u64)
            .product()
    }

    /// Iterates over every concrete box in the region, scores set to 0.
    ///
    /// Intended for exhaustive verification over small synthetic regions;
    /// the search itself never enumerates boxes.
    pub fn iter_boxes(&self) -> impl Iterator<Item = BBox> + '_ {
        let (l0, l1) = (self.low[DIM_LEFT], self.high[DIM_LEFT]);
        let (t0, t1) = (self.low[DIM_TOP], self.high[DIM_TOP]);
        let (r0, r1) = (self.low[DIM_RIGHT], self.high[DIM_RIGHT]);
        let (b0, b1) = (self.low[DIM_BOTTOM], self.high[DIM_BOTTOM]);
        (l0..=l1).flat_map(move |left| {
            (t0..=t1).flat_map(move |top| {
                (r0..=r1).flat_map(move |right| {
                    (b0..=b1).map(move |bottom| BBox::new(left, top, right, bottom))
                })
            })
        })
    }
}
