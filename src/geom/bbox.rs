//! Scored bounding boxes with inclusive integer coordinates.

use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle with inclusive coordinates and a signed score.
///
/// Coordinates are inclusive on all four sides: the box
/// `{left: 0, top: 0, right: 0, bottom: 0}` covers exactly one pixel and
/// has area 1.
///
/// The score field is domain-overloaded. For ground-truth boxes, a negative
/// value marks the whole image as a negative/background training example
/// rather than encoding a per-box weight (see
/// [`GroundTruthSet`](crate::gt::GroundTruthSet)).
///
/// Note: this type does NOT enforce `left <= right` or `top <= bottom` in
/// the constructor, allowing "malformed" boxes to exist. This is
/// intentional - validation should catch and report these issues rather
/// than preventing them from being represented, and the bound computations
/// clamp safely around them.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BBox {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
    /// Signed score; only the sign is consulted for ground-truth boxes.
    #[serde(default)]
    pub score: f64,
}

impl BBox {
    /// Creates a new box from explicit inclusive coordinates, with score 0.
    #[inline]
    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
            score: 0.0,
        }
    }

    /// Creates a new box with an explicit score.
    #[inline]
    pub fn with_score(left: i32, top: i32, right: i32, bottom: i32, score: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
            score,
        }
    }

    /// Returns the inclusive width of the box.
    ///
    /// May be zero or negative if the box is malformed (right < left).
    #[inline]
    pub fn width(&self) -> i64 {
        i64::from(self.right) - i64::from(self.left) + 1
    }

    /// Returns the inclusive height of the box.
    #[inline]
    pub fn height(&self) -> i64 {
        i64::from(self.bottom) - i64::from(self.top) + 1
    }

    /// Returns the area under the inclusive-coordinate convention,
    /// `(right - left + 1) * (bottom - top + 1)`.
    ///
    /// Only meaningful for ordered boxes; callers check [`Self::is_ordered`]
    /// (or an equivalent emptiness test) first.
    #[inline]
    pub fn area(&self) -> f64 {
        self.width() as f64 * self.height() as f64
    }

    /// Returns true if the box is properly ordered (left <= right and
    /// top <= bottom), i.e. covers at least one pixel.
    #[inline]
    pub fn is_ordered(&self) -> bool {
        self.left <= self.right && self.top <= self.bottom
    }

    /// Returns a copy of the box with all four coordinates shifted by `d`.
    ///
    /// Used to compensate for the integral-image offset convention: boxes
    /// inside the search are shifted by +1 relative to ground-truth
    /// coordinates, so a ground-truth box is `shifted(1)` before being
    /// intersected with anything state-derived.
    #[inline]
    pub fn shifted(&self, d: i32) -> Self {
        Self {
            left: self.left + d,
            top: self.top + d,
            right: self.right + d,
            bottom: self.bottom + d,
            score: self.score,
        }
    }

    /// Intersects two boxes, returning `None` when they do not overlap.
    ///
    /// The result carries score 0; intersection scores have no meaning here.
    pub fn intersect(&self, other: &BBox) -> Option<BBox> {
        let candidate = BBox::new(
            self.left.max(other.left),
            self.top.max(other.top),
            self.right.min(other.right),
            self.bottom.min(other.bottom),
        );
        candidate.is_ordered().then_some(candidate)
    }

    /// Exact Intersection-over-Union of two ordered boxes.
    ///
    /// Returns 0 for disjoint or malformed inputs. This is the reference
    /// value that [`overlap_lower_bound`](crate::bound::overlap_lower_bound)
    /// collapses to on singleton regions.
    pub fn iou(&self, other: &BBox) -> f64 {
        if !self.is_ordered() || !other.is_ordered() {
            return 0.0;
        }
        match self.intersect(other) {
            Some(inter) => {
                let inter_area = inter.area();
                inter_area / (self.area() + other.area() - inter_area)
            }
            None => 0.0,
        }
    }
}

impl Default for BBox {
    fn default() -> Self {
        Self::new(0, 0, 0, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_pixel_box_has_area_one() {
        assert_eq!(BBox::new(0, 0, 0, 0).area(), 1.0);
        assert_eq!(BBox::new(7, 3, 7, 3).area(), 1.0);
    }

    #[test]
    fn test_inclusive_area() {
        let bbox = BBox::new(10, 10, 20, 20);
        assert_eq!(bbox.width(), 11);
        assert_eq!(bbox.height(), 11);
        assert_eq!(bbox.area(), 121.0);
    }

    #[test]
    fn test_ordering() {
        assert!(BBox::new(10, 20, 100, 80).is_ordered());
        assert!(!BBox::new(100, 80, 10, 20).is_ordered());
        // One-pixel boxes are ordered
        assert!(BBox::new(5, 5, 5, 5).is_ordered());
    }

    #[test]
    fn test_intersect_overlapping() {
        let a = BBox::new(0, 0, 10, 10);
        let b = BBox::new(5, 5, 15, 15);
        let inter = a.intersect(&b).unwrap();
        assert_eq!((inter.left, inter.top, inter.right, inter.bottom), (5, 5, 10, 10));
        assert_eq!(inter.area(), 36.0);
    }

    #[test]
    fn test_intersect_disjoint() {
        let a = BBox::new(0, 0, 4, 4);
        let b = BBox::new(6, 6, 10, 10);
        assert!(a.intersect(&b).is_none());
        // Sharing an edge still counts as overlap under inclusive coords
        let c = BBox::new(4, 0, 8, 4);
        assert!(a.intersect(&c).is_some());
    }

    #[test]
    fn test_iou_identical_boxes() {
        let a = BBox::new(10, 10, 20, 20);
        assert!((a.iou(&a) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_iou_known_value() {
        // 11x11 boxes offset by 1 in both axes: intersection 10x10 = 100,
        // union 121 + 121 - 100 = 142.
        let a = BBox::new(10, 10, 20, 20);
        let b = BBox::new(11, 11, 21, 21);
        assert!((a.iou(&b) - 100.0 / 142.0).abs() < 1e-12);
    }

    #[test]
    fn test_iou_disjoint_is_zero() {
        let a = BBox::new(0, 0, 4, 4);
        let b = BBox::new(10, 10, 14, 14);
        assert_eq!(a.iou(&b), 0.0);
    }

    #[test]
    fn test_shifted_compensates_offset() {
        let gt = BBox::with_score(10, 10, 20, 20, 1.0);
        let shifted = gt.shifted(1);
        assert_eq!((shifted.left, shifted.top, shifted.right, shifted.bottom), (11, 11, 21, 21));
        assert_eq!(shifted.score, 1.0);
    }
}
