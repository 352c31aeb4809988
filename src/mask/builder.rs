use crate::foundation::core::{Canvas, Point, ShapeKind, TargetRegion};
use crate::foundation::math::push_num;

/// Outer boundary sub-path covering the whole canvas: `M0,0H{w}V{h}H0V0Z`.
pub fn canvas_boundary_path(canvas: Canvas) -> String {
    let mut out = String::with_capacity(32);
    out.push_str("M0,0H");
    push_num(&mut out, canvas.width);
    out.push('V');
    push_num(&mut out, canvas.height);
    out.push_str("H0V0Z");
    out
}

/// Rectangular hole sub-path for `target`, starting at its top-left corner.
///
/// The shape kind is ignored here; see [`settled_hole_path`] for the shape-aware variant.
pub fn rect_hole_path(target: &TargetRegion) -> String {
    let x0 = target.position.x;
    let y0 = target.position.y;
    let x1 = x0 + target.size.x;
    let y1 = y0 + target.size.y;

    let mut out = String::with_capacity(48);
    out.push('M');
    push_num(&mut out, x0);
    out.push(',');
    push_num(&mut out, y0);
    out.push('H');
    push_num(&mut out, x1);
    out.push('V');
    push_num(&mut out, y1);
    out.push('H');
    push_num(&mut out, x0);
    out.push('V');
    push_num(&mut out, y0);
    out.push('Z');
    out
}

/// Circle made of two half arcs, starting at its leftmost point.
pub fn circle_path(center: Point, r: f64) -> String {
    let mut radii = String::new();
    push_num(&mut radii, r);
    radii.push(',');
    push_num(&mut radii, r);

    let mut left = String::new();
    push_num(&mut left, center.x - r);
    left.push(',');
    push_num(&mut left, center.y);

    let mut right = String::new();
    push_num(&mut right, center.x + r);
    right.push(',');
    push_num(&mut right, center.y);

    format!("M{left}A{radii},0,1,1,{right}A{radii},0,1,1,{left}Z")
}

/// Hole drawn once a transition onto `target` has finished: the circle primitive for circle
/// targets, the rectangle otherwise.
pub fn settled_hole_path(target: &TargetRegion) -> String {
    match target.shape {
        ShapeKind::Circle => circle_path(target.center(), target.circle_radius()),
        ShapeKind::Rectangle => rect_hole_path(target),
    }
}

/// Composite overlay path: canvas boundary followed by the target's hole.
///
/// Geometry is not validated; negative or off-canvas targets flow straight into the string.
pub fn build_mask_path(target: &TargetRegion, canvas: Canvas) -> String {
    let mut out = canvas_boundary_path(canvas);
    out.push_str(&rect_hole_path(target));
    out
}

/// Composite overlay path as it looks at rest on `target`, with the shape kind applied.
pub fn settled_mask_path(target: &TargetRegion, canvas: Canvas) -> String {
    let mut out = canvas_boundary_path(canvas);
    out.push_str(&settled_hole_path(target));
    out
}

#[cfg(test)]
#[path = "../../tests/unit/mask/builder.rs"]
mod tests;
