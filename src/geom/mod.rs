//! Geometry for the subwindow search: boxes and interval regions.
//!
//! Two coordinate conventions meet in this module:
//!
//! 1. **Inclusive coordinates**: a box contains its edge pixels, so the
//!    area formula is `(right - left + 1) * (bottom - top + 1)`.
//! 2. **Integral-image offset**: boxes inside the search are shifted by
//!    +1 relative to externally supplied ground-truth coordinates (an
//!    artifact of prefix-sum score lookups in the base quality bound).
//!    Ground-truth boxes get [`BBox::shifted`] by +1 before any
//!    comparison against a state-derived box.

mod bbox;
mod state;

pub use bbox::BBox;
pub use state::{SearchState, DIM_BOTTOM, DIM_LEFT, DIM_RIGHT, DIM_TOP};
