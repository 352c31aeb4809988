//! Spotlight overlay masks for guided UI tours.
//!
//! A tour dims the whole screen except for a cutout ("hole") over the element being explained.
//! This crate produces the SVG path data for that overlay and morphs the hole from one target
//! to the next as an externally driven animation progresses.
//!
//! # Pipeline overview
//!
//! 1. **Build**: `TargetRegion + Canvas -> composite path` (canvas boundary followed by the hole)
//! 2. **Split**: `composite path -> (boundary, hole)` through a memoized [`PathCodec`]
//! 3. **Morph**: `previous hole + next target -> Morph` (ring correspondence, or path-to-circle)
//! 4. **Compose**: `Morph + progress -> composite path` for one frame, boundary from the next step
//!
//! Everything here is a pure function of its inputs; timing, measuring targets and rasterizing
//! paths belong to the host.
#![forbid(unsafe_code)]

mod foundation;
mod mask;
mod morph;
mod tour;

pub use foundation::core::{BezPath, Canvas, Point, ShapeKind, TargetRegion, Vec2};
pub use foundation::error::{SpotlightError, SpotlightResult};
pub use foundation::math::clamp01;
pub use mask::builder::{
    build_mask_path, canvas_boundary_path, circle_path, rect_hole_path, settled_hole_path,
    settled_mask_path,
};
pub use mask::codec::{PathCodec, canvas_boundary_of, strip_canvas_boundary};
pub use mask::engine::{SpotlightMask, Transition};
pub use mask::memo::{MemoCache, MemoStats};
pub use mask::svg::{DEFAULT_MASK_FILL, mask_svg_document};
pub use morph::interpolate::{Morph, MorphOptions, between_paths, make_interpolator, to_circle};
/// Ring sampling and alignment primitives used by the morphs.
pub use morph::ring;
pub use tour::Tour;
