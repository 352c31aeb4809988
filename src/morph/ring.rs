//! Closed polygons ("rings") sampled from SVG paths, and the helpers that put two rings into
//! point-to-point correspondence.

use kurbo::{BezPath, ParamCurve, ParamCurveArclen, PathEl, PathSeg, Point};

use crate::foundation::error::{SpotlightError, SpotlightResult};
use crate::foundation::math::push_pair;

const SAME_POINT_EPS: f64 = 1e-9;

/// Sample the first subpath of `d` into a ring with no edge longer than `max_segment_length`.
///
/// The closing point is not repeated. A subpath made of a lone move-to yields a one-point ring.
/// When the subpath is too long for `max_points` samples at that spacing, the spacing grows
/// until it fits.
pub fn ring_from_svg(
    d: &str,
    max_segment_length: f64,
    arclen_accuracy: f64,
    max_points: usize,
) -> SpotlightResult<Vec<Point>> {
    let path = BezPath::from_svg(d.trim())
        .map_err(|e| SpotlightError::path(format!("invalid hole path '{d}': {e}")))?;

    let mut first = BezPath::new();
    for el in path.elements() {
        if matches!(el, PathEl::MoveTo(_)) && !first.elements().is_empty() {
            tracing::debug!("hole path has several subpaths; morphing the first only");
            break;
        }
        first.push(*el);
    }

    let lengths: Vec<f64> = first.segments().map(|s| s.arclen(arclen_accuracy)).collect();
    let total: f64 = lengths.iter().sum();
    let budget = max_points.max(1) as f64;
    let step = if total.is_finite() && total / max_segment_length > budget {
        tracing::debug!(total, max_points, "ring spacing widened to fit point budget");
        total / budget
    } else {
        max_segment_length
    };

    let mut ring = Vec::<Point>::new();
    if let Some(PathEl::MoveTo(p)) = first.elements().first() {
        ring.push(*p);
    }
    for (seg, len) in first.segments().zip(lengths) {
        push_segment(&mut ring, seg, len, step, arclen_accuracy);
    }

    ring.dedup_by(|b, a| a.distance(*b) < SAME_POINT_EPS);
    while ring.len() > 1 && ring[0].distance(ring[ring.len() - 1]) < SAME_POINT_EPS {
        ring.pop();
    }

    if ring.is_empty() {
        return Err(SpotlightError::path(format!("hole path '{d}' has no points")));
    }
    Ok(ring)
}

fn push_segment(ring: &mut Vec<Point>, seg: PathSeg, len: f64, max_len: f64, accuracy: f64) {
    if ring.is_empty() {
        ring.push(seg.start());
    }
    let pieces = if max_len > 0.0 && len.is_finite() {
        (len / max_len).ceil().max(1.0) as usize
    } else {
        1
    };

    for i in 1..=pieces {
        let frac = i as f64 / pieces as f64;
        let p = match seg {
            PathSeg::Line(line) => line.eval(frac),
            _ if i == pieces => seg.end(),
            _ => seg.eval(seg.inv_arclen(len * frac, accuracy)),
        };
        ring.push(p);
    }
}

/// Shoelace area; positive when the ring runs clockwise on a y-down canvas.
pub fn signed_area(ring: &[Point]) -> f64 {
    let n = ring.len();
    let mut acc = 0.0;
    for i in 0..n {
        let a = ring[i];
        let b = ring[(i + 1) % n];
        acc += a.x * b.y - b.x * a.y;
    }
    acc / 2.0
}

/// Reverse `ring` if needed so that [`signed_area`] is non-negative, keeping its first point.
pub fn normalize_orientation(ring: &mut [Point]) {
    if signed_area(ring) < 0.0 {
        ring.reverse();
        ring.rotate_right(1);
    }
}

/// Closed perimeter, including the edge from the last point back to the first.
pub fn perimeter(ring: &[Point]) -> f64 {
    let n = ring.len();
    (0..n).map(|i| ring[i].distance(ring[(i + 1) % n])).sum()
}

/// Area centroid of the ring; falls back to the vertex average for degenerate rings.
pub fn centroid(ring: &[Point]) -> Point {
    let n = ring.len();
    let area = signed_area(ring);
    if area.abs() < SAME_POINT_EPS {
        let (sx, sy) = ring
            .iter()
            .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
        let k = n.max(1) as f64;
        return Point::new(sx / k, sy / k);
    }

    let (mut cx, mut cy) = (0.0, 0.0);
    for i in 0..n {
        let a = ring[i];
        let b = ring[(i + 1) % n];
        let cross = a.x * b.y - b.x * a.y;
        cx += (a.x + b.x) * cross;
        cy += (a.y + b.y) * cross;
    }
    Point::new(cx / (6.0 * area), cy / (6.0 * area))
}

/// Grow `ring` to `count` points by repeatedly splitting its longest edge.
pub fn add_points(ring: &mut Vec<Point>, count: usize) {
    let Some(&only) = ring.first() else {
        return;
    };
    if ring.len() == 1 {
        ring.resize(count.max(1), only);
        return;
    }

    while ring.len() < count {
        let n = ring.len();
        let (idx, _) = (0..n)
            .map(|i| (i, ring[i].distance_squared(ring[(i + 1) % n])))
            .fold((0, f64::NEG_INFINITY), |best, cur| {
                if cur.1 > best.1 { cur } else { best }
            });
        let mid = ring[idx].midpoint(ring[(idx + 1) % n]);
        ring.insert(idx + 1, mid);
    }
}

/// Rotate `ring` so that its starting point minimizes the summed squared distance to `target`.
///
/// Both rings must have the same length.
pub fn align_start(ring: &mut [Point], target: &[Point]) {
    let n = ring.len();
    if n < 2 || n != target.len() {
        return;
    }

    let mut best_offset = 0;
    let mut best_cost = f64::INFINITY;
    for offset in 0..n {
        let cost: f64 = (0..n)
            .map(|i| ring[(i + offset) % n].distance_squared(target[i]))
            .sum();
        if cost < best_cost {
            best_cost = cost;
            best_offset = offset;
        }
    }
    ring.rotate_left(best_offset);
}

/// `M x,y L x,y ... Z` path string for the ring.
pub fn ring_to_svg(ring: &[Point]) -> String {
    let mut out = String::with_capacity(ring.len() * 16 + 2);
    for (i, p) in ring.iter().enumerate() {
        out.push(if i == 0 { 'M' } else { 'L' });
        push_pair(&mut out, *p);
    }
    out.push('Z');
    out
}

#[cfg(test)]
#[path = "../../tests/unit/morph/ring.rs"]
mod tests;
