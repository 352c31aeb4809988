//! Composite overlay paths: building them, splitting them, and composing morph frames.

pub(crate) mod builder;
pub(crate) mod codec;
pub(crate) mod engine;
pub(crate) mod memo;
pub(crate) mod svg;
