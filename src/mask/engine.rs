use std::sync::Arc;

use crate::foundation::core::{Canvas, TargetRegion};
use crate::foundation::error::SpotlightResult;
use crate::foundation::math::clamp01;
use crate::mask::builder::build_mask_path;
use crate::mask::codec::PathCodec;
use crate::morph::interpolate::{Morph, MorphOptions, make_interpolator};

/// Builds spotlight mask paths and composes morph frames between them.
///
/// The codec caches are shared through an [`Arc`], so several engines (or threads) can reuse
/// one set of memoized splits.
#[derive(Clone, Debug, Default)]
pub struct SpotlightMask {
    codec: Arc<PathCodec>,
    options: MorphOptions,
}

impl SpotlightMask {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: MorphOptions) -> SpotlightResult<Self> {
        Self::with_codec(Arc::new(PathCodec::new()), options)
    }

    pub fn with_codec(codec: Arc<PathCodec>, options: MorphOptions) -> SpotlightResult<Self> {
        options.validate()?;
        Ok(Self { codec, options })
    }

    pub fn codec(&self) -> &Arc<PathCodec> {
        &self.codec
    }

    pub fn options(&self) -> &MorphOptions {
        &self.options
    }

    pub fn build_mask_path(&self, target: &TargetRegion, canvas: Canvas) -> String {
        build_mask_path(target, canvas)
    }

    pub fn extract_canvas_boundary(&self, path: &str) -> String {
        self.codec.extract_canvas_boundary(path)
    }

    pub fn extract_hole(&self, path: &str) -> String {
        self.codec.extract_hole(path)
    }

    pub fn make_interpolator(
        &self,
        previous_hole: &str,
        next_target: &TargetRegion,
    ) -> SpotlightResult<Morph> {
        make_interpolator(previous_hole, next_target, &self.options)
    }

    /// Precompute everything a transition needs so each frame is only a blend.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn prepare_transition(
        &self,
        previous_path: &str,
        next_path: &str,
        next_target: &TargetRegion,
    ) -> SpotlightResult<Transition> {
        let hole = self.codec.extract_hole(previous_path);
        let morph = self.make_interpolator(&hole, next_target)?;
        Ok(Transition {
            boundary: self.codec.extract_canvas_boundary(next_path),
            morph,
        })
    }

    /// Composite path for one animation frame.
    ///
    /// The canvas boundary always comes from `next_path`; canvas size changes are not animated.
    pub fn compose_frame(
        &self,
        previous_path: &str,
        next_path: &str,
        progress: f64,
        next_target: &TargetRegion,
    ) -> SpotlightResult<String> {
        Ok(self
            .prepare_transition(previous_path, next_path, next_target)?
            .frame(progress))
    }
}

/// A prepared morph between two tour steps.
#[derive(Clone, Debug)]
pub struct Transition {
    boundary: String,
    morph: Morph,
}

impl Transition {
    /// Composite path at `progress`, clamped to `[0, 1]`.
    pub fn frame(&self, progress: f64) -> String {
        let hole = self.morph.at(clamp01(progress));
        let mut out = String::with_capacity(self.boundary.len() + hole.len());
        out.push_str(&self.boundary);
        out.push_str(&hole);
        out
    }

    pub fn boundary(&self) -> &str {
        &self.boundary
    }

    pub fn morph(&self) -> &Morph {
        &self.morph
    }
}

#[cfg(test)]
#[path = "../../tests/unit/mask/engine.rs"]
mod tests;
