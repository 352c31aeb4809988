//! Standalone SVG previews of overlay paths.

use crate::foundation::core::Canvas;
use crate::foundation::math::push_num;

/// Default overlay color of the tour mask.
pub const DEFAULT_MASK_FILL: &str = "rgba(0,0,0,0.4)";

/// Wrap a composite mask path in an SVG document sized to `canvas`.
///
/// Boundary and hole share the same winding, so the even-odd rule is what punches the hole.
pub fn mask_svg_document(canvas: Canvas, path: &str, fill: &str) -> String {
    let mut w = String::new();
    push_num(&mut w, canvas.width);
    let mut h = String::new();
    push_num(&mut h, canvas.height);

    format!(
        concat!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            r#"<path d="{d}" fill="{fill}" fill-rule="evenodd"/>"#,
            "</svg>\n"
        ),
        w = w,
        h = h,
        d = escape_attr(path),
        fill = escape_attr(fill),
    )
}

fn escape_attr(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/mask/svg.rs"]
mod tests;
