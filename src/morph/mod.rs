pub(crate) mod interpolate;
pub mod ring;
