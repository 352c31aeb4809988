use std::str::FromStr;

use crate::foundation::error::{SpotlightError, SpotlightResult};

pub use kurbo::{BezPath, Point, Vec2};

/// Full drawable area of the overlay, in the same units as target geometry.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    pub width: f64,
    pub height: f64,
}

impl Canvas {
    pub fn new(width: f64, height: f64) -> SpotlightResult<Self> {
        let c = Self { width, height };
        c.validate()?;
        Ok(c)
    }

    pub fn validate(&self) -> SpotlightResult<()> {
        if !self.width.is_finite() || !self.height.is_finite() {
            return Err(SpotlightError::validation("canvas size must be finite"));
        }
        if self.width < 0.0 || self.height < 0.0 {
            return Err(SpotlightError::validation("canvas size must be >= 0"));
        }
        Ok(())
    }
}

/// How the cutout over a target is drawn.
///
/// Deserialization goes through [`FromStr`], so JSON accepts the same spellings as the CLI.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum ShapeKind {
    #[default]
    Rectangle,
    Circle,
}

impl ShapeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Rectangle => "rectangle",
            Self::Circle => "circle",
        }
    }
}

impl FromStr for ShapeKind {
    type Err = SpotlightError;

    fn from_str(s: &str) -> SpotlightResult<Self> {
        let kind = s.trim().to_ascii_lowercase();
        match kind.as_str() {
            "rectangle" | "rect" => Ok(Self::Rectangle),
            "circle" => Ok(Self::Circle),
            "" => Err(SpotlightError::validation("shape kind must be non-empty")),
            other => Err(SpotlightError::validation(format!(
                "unknown shape kind '{other}'"
            ))),
        }
    }
}

impl TryFrom<String> for ShapeKind {
    type Error = SpotlightError;

    fn try_from(s: String) -> SpotlightResult<Self> {
        s.parse()
    }
}

/// Region cut out of the overlay for one tour step.
///
/// `size.x` is the width and `size.y` the height of the measured element.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TargetRegion {
    pub position: Point,
    pub size: Vec2,
    #[serde(default)]
    pub shape: ShapeKind,
}

impl TargetRegion {
    /// Build a validated target. Fields stay public so hosts that already trust their layout
    /// data can construct targets directly.
    pub fn new(position: Point, size: Vec2, shape: ShapeKind) -> SpotlightResult<Self> {
        let t = Self {
            position,
            size,
            shape,
        };
        t.validate()?;
        Ok(t)
    }

    pub fn rect(x: f64, y: f64, w: f64, h: f64) -> SpotlightResult<Self> {
        Self::new(Point::new(x, y), Vec2::new(w, h), ShapeKind::Rectangle)
    }

    pub fn circle(x: f64, y: f64, w: f64, h: f64) -> SpotlightResult<Self> {
        Self::new(Point::new(x, y), Vec2::new(w, h), ShapeKind::Circle)
    }

    pub fn validate(&self) -> SpotlightResult<()> {
        let finite = [self.position.x, self.position.y, self.size.x, self.size.y]
            .iter()
            .all(|v| v.is_finite());
        if !finite {
            return Err(SpotlightError::validation(
                "target position and size must be finite",
            ));
        }
        if self.size.x < 0.0 || self.size.y < 0.0 {
            return Err(SpotlightError::validation("target size must be >= 0"));
        }
        Ok(())
    }

    /// Center of the target rectangle.
    pub fn center(&self) -> Point {
        self.position + self.size * 0.5
    }

    /// Radius used when the target is cut out as a circle.
    pub fn circle_radius(&self) -> f64 {
        self.size.x.max(self.size.y) / 2.0
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
