use std::fmt::Write as _;

/// Clamp a progress value to `[0, 1]`. NaN maps to `0`.
#[inline]
pub fn clamp01(x: f64) -> f64 {
    if x.is_nan() { 0.0 } else { x.clamp(0.0, 1.0) }
}

/// Append `v` in shortest round-trip decimal form (`10`, `10.5`, never `1e3`).
pub(crate) fn push_num(out: &mut String, v: f64) {
    // -0 would otherwise print as "-0".
    let v = if v == 0.0 { 0.0 } else { v };
    let _ = write!(out, "{v}");
}

pub(crate) fn push_pair(out: &mut String, p: kurbo::Point) {
    push_num(out, p.x);
    out.push(',');
    push_num(out, p.y);
}

#[inline]
pub(crate) fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
