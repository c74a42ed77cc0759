//! Software rendering into flat pixel buffers
//!
//! Chambers draw through a bounds-checked [`Canvas`] view. Sprites are
//! rasterized once into [`Image`]s and alpha-blitted every frame.

pub mod canvas;
pub mod image;
pub mod sprites;

pub use canvas::{Canvas, blend_argb};
pub use image::{Bounds, Image};

/// Colors for chamber elements (`0xAARRGGBB`)
pub mod colors {
    pub const BACKGROUND: u32 = 0xFFFFFFFF;
    pub const SURFACE: u32 = 0xFF000000;
    pub const GUARD: u32 = 0xFF4682FF;
    pub const GUARD_HIGHLIGHT: u32 = 0xFFDCEBFF;
    pub const TARGET: u32 = 0xFFFF00FF;
    pub const TARGET_PATH: u32 = 0xFF0000FF;
    pub const PORTAL_BLUE: u32 = 0xFF00B3FF;
    pub const PORTAL_ORANGE: u32 = 0xFFFF8000;
}
