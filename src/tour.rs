use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context as _;
use serde_json::error::Category;

use crate::foundation::core::{Canvas, TargetRegion};
use crate::foundation::error::{SpotlightError, SpotlightResult};
use crate::mask::builder::settled_mask_path;
use crate::mask::engine::{SpotlightMask, Transition};
use crate::morph::interpolate::MorphOptions;

/// JSON-facing description of a tour: one canvas and the targets highlighted in order.
///
/// ```json
/// {
///   "canvas": { "width": 320, "height": 640 },
///   "steps": [
///     { "position": { "x": 10, "y": 10 }, "size": { "x": 100, "y": 100 } },
///     { "position": { "x": 150, "y": 150 }, "size": { "x": 60, "y": 60 }, "shape": "circle" }
///   ]
/// }
/// ```
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Tour {
    pub canvas: Canvas,
    pub steps: Vec<TargetRegion>,
    #[serde(default)]
    pub morph: MorphOptions,
}

impl Tour {
    /// Parse and validate a tour from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> SpotlightResult<Self> {
        let tour: Tour = serde_json::from_reader(r).map_err(|e| match e.classify() {
            // Well-formed JSON with bad values, e.g. an unknown shape kind.
            Category::Data => SpotlightError::validation(format!("tour JSON: {e}")),
            _ => SpotlightError::serde(format!("parse tour JSON: {e}")),
        })?;
        tour.validate()?;
        Ok(tour)
    }

    pub fn from_json_str(s: &str) -> SpotlightResult<Self> {
        Self::from_reader(s.as_bytes())
    }

    /// Parse and validate a tour from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> SpotlightResult<Self> {
        let path = path.as_ref();
        let f = File::open(path)
            .with_context(|| format!("open tour JSON '{}'", path.display()))
            .map_err(SpotlightError::from)?;
        Self::from_reader(BufReader::new(f))
    }

    pub fn to_json_string(&self) -> SpotlightResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| SpotlightError::serde(format!("serialize tour JSON: {e}")))
    }

    pub fn validate(&self) -> SpotlightResult<()> {
        self.canvas.validate()?;
        if self.steps.is_empty() {
            return Err(SpotlightError::validation("tour must have at least one step"));
        }
        for (idx, step) in self.steps.iter().enumerate() {
            step.validate()
                .map_err(|e| SpotlightError::validation(format!("step {idx}: {e}")))?;
        }
        self.morph.validate()
    }

    pub fn step(&self, idx: usize) -> SpotlightResult<&TargetRegion> {
        self.steps.get(idx).ok_or_else(|| {
            SpotlightError::validation(format!(
                "step {idx} out of range (tour has {} steps)",
                self.steps.len()
            ))
        })
    }

    /// Engine configured with this tour's morph options.
    pub fn engine(&self) -> SpotlightResult<SpotlightMask> {
        SpotlightMask::with_options(self.morph)
    }

    /// Overlay path at rest on step `idx`; circle steps show their circle, not the rectangle.
    pub fn mask_path(&self, idx: usize) -> SpotlightResult<String> {
        Ok(settled_mask_path(self.step(idx)?, self.canvas))
    }

    /// Transition from the settled overlay of step `from` to step `to`.
    pub fn transition(
        &self,
        engine: &SpotlightMask,
        from: usize,
        to: usize,
    ) -> SpotlightResult<Transition> {
        let previous = self.mask_path(from)?;
        let next = self.mask_path(to)?;
        engine.prepare_transition(&previous, &next, self.step(to)?)
    }
}

#[cfg(test)]
#[path = "../tests/unit/tour.rs"]
mod tests;
