//! Theme resolution: palettes, style builders, and icon glyphs

pub mod icons;
pub mod palette;
pub mod styles;

pub use palette::Palette;
