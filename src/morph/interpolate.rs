use std::f64::consts::TAU;

use crate::foundation::core::{Point, ShapeKind, TargetRegion};
use crate::foundation::error::{SpotlightError, SpotlightResult};
use crate::foundation::math::{clamp01, lerp};
use crate::mask::builder::{circle_path, rect_hole_path};
use crate::morph::ring::{
    add_points, align_start, centroid, normalize_orientation, perimeter, ring_from_svg,
    ring_to_svg,
};

/// Tuning knobs for ring sampling.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct MorphOptions {
    /// Longest edge allowed in a sampled ring, in canvas units.
    pub max_segment_length: f64,
    /// Distance from 0 or 1 within which the morph returns the source or destination path verbatim.
    pub endpoint_epsilon: f64,
    /// Accuracy passed to kurbo's arc length routines for curved segments.
    pub arclen_accuracy: f64,
    /// Upper bound on points sampled per ring; longer rings are sampled more coarsely.
    pub max_ring_points: usize,
}

impl Default for MorphOptions {
    fn default() -> Self {
        Self {
            max_segment_length: 10.0,
            endpoint_epsilon: 1e-4,
            arclen_accuracy: 1e-3,
            max_ring_points: 2048,
        }
    }
}

impl MorphOptions {
    pub fn validate(&self) -> SpotlightResult<()> {
        if !self.max_segment_length.is_finite() || self.max_segment_length <= 0.0 {
            return Err(SpotlightError::validation(
                "morph.max_segment_length must be finite and > 0",
            ));
        }
        if !(0.0..0.5).contains(&self.endpoint_epsilon) {
            return Err(SpotlightError::validation(
                "morph.endpoint_epsilon must be in [0, 0.5)",
            ));
        }
        if !self.arclen_accuracy.is_finite() || self.arclen_accuracy <= 0.0 {
            return Err(SpotlightError::validation(
                "morph.arclen_accuracy must be finite and > 0",
            ));
        }
        if self.max_ring_points < 3 {
            return Err(SpotlightError::validation("morph.max_ring_points must be >= 3"));
        }
        Ok(())
    }

    fn ring(&self, d: &str) -> SpotlightResult<Vec<Point>> {
        ring_from_svg(
            d,
            self.max_segment_length,
            self.arclen_accuracy,
            self.max_ring_points,
        )
    }
}

/// Progress-indexed hole shape between two paths.
///
/// Both rings have the same number of points, already aligned, so evaluating a frame is a
/// plain per-point blend.
#[derive(Clone, Debug)]
pub struct Morph {
    from_path: String,
    to_path: String,
    from: Vec<Point>,
    to: Vec<Point>,
    endpoint_epsilon: f64,
}

impl Morph {
    /// Hole path at progress `t` (clamped to `[0, 1]`).
    pub fn at(&self, t: f64) -> String {
        let t = clamp01(t);
        if t < self.endpoint_epsilon {
            return self.from_path.clone();
        }
        if 1.0 - t < self.endpoint_epsilon {
            return self.to_path.clone();
        }

        let blended: Vec<Point> = self
            .from
            .iter()
            .zip(&self.to)
            .map(|(a, b)| Point::new(lerp(a.x, b.x, t), lerp(a.y, b.y, t)))
            .collect();
        ring_to_svg(&blended)
    }

    pub fn from_path(&self) -> &str {
        &self.from_path
    }

    pub fn to_path(&self) -> &str {
        &self.to_path
    }

    /// Number of points in each of the two aligned rings.
    pub fn point_count(&self) -> usize {
        self.from.len()
    }
}

/// Morph from `previous_hole` to the hole `next` should end with.
///
/// Circles are morphed towards the primitive directly; rectangles go through the generic
/// ring correspondence against the rectangle's hole path.
#[tracing::instrument(level = "debug", skip(previous_hole, opts), fields(shape = next.shape.as_str()))]
pub fn make_interpolator(
    previous_hole: &str,
    next: &TargetRegion,
    opts: &MorphOptions,
) -> SpotlightResult<Morph> {
    match next.shape {
        ShapeKind::Circle => to_circle(previous_hole, next.center(), next.circle_radius(), opts),
        ShapeKind::Rectangle => between_paths(previous_hole, &rect_hole_path(next), opts),
    }
}

/// Generic path-to-path morph: resample both rings, equalize counts, align starts.
pub fn between_paths(from_d: &str, to_d: &str, opts: &MorphOptions) -> SpotlightResult<Morph> {
    let mut from = opts.ring(from_d)?;
    let mut to = opts.ring(to_d)?;
    normalize_orientation(&mut from);
    normalize_orientation(&mut to);

    let n = from.len().max(to.len());
    add_points(&mut from, n);
    add_points(&mut to, n);
    align_start(&mut from, &to);

    tracing::debug!(points = n, "prepared path morph");
    Ok(Morph {
        from_path: from_d.to_string(),
        to_path: to_d.to_string(),
        from,
        to,
        endpoint_epsilon: opts.endpoint_epsilon,
    })
}

/// Path-to-circle morph: every source point travels to the circle point at the same fraction
/// of the perimeter, starting from the angle of the first source point.
pub fn to_circle(
    from_d: &str,
    center: Point,
    r: f64,
    opts: &MorphOptions,
) -> SpotlightResult<Morph> {
    let mut from = opts.ring(from_d)?;
    normalize_orientation(&mut from);

    let c = centroid(&from);
    let total = perimeter(&from);
    let start_angle = (from[0].y - c.y).atan2(from[0].x - c.x);
    let n = from.len();

    let mut along = 0.0;
    let mut to = Vec::with_capacity(n);
    for i in 0..n {
        if i > 0 {
            along += from[i].distance(from[i - 1]);
        }
        let frac = if total > 0.0 {
            along / total
        } else {
            i as f64 / n as f64
        };
        let angle = start_angle + TAU * frac;
        to.push(Point::new(
            center.x + r * angle.cos(),
            center.y + r * angle.sin(),
        ));
    }

    tracing::debug!(points = n, "prepared circle morph");
    Ok(Morph {
        from_path: from_d.to_string(),
        to_path: circle_path(center, r),
        from,
        to,
        endpoint_epsilon: opts.endpoint_epsilon,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/morph/interpolate.rs"]
mod tests;
