//! Rendering primitives (Cairo-based).
//!
//! This module defines the drawing vocabulary shared by tools and overlays:
//! - [`Color`]: RGBA color representation with the measuring palette
//! - [`Paint`] and [`TextStyle`]: how a primitive is stroked, filled or lettered
//! - [`Image`]: owned pixel buffers for zoom captures
//! - [`Canvas`]: the drawing surface trait, with cairo and recording implementations

pub mod canvas;
pub mod color;
pub mod font;
pub mod image;
pub mod paint;
pub mod recording;
pub mod render;

// Re-export commonly used types at module level
pub use canvas::Canvas;
pub use color::Color;
pub use font::FontDescriptor;
pub use image::Image;
pub use paint::{Paint, PaintStyle, TextStyle};
pub use recording::{DrawOp, RecordingCanvas};
pub use render::{
    CairoCanvas, fill_background, image_from_surface, surface_from_image, text_size,
};

pub use color::{
    BLACK, BLUE, GOLD, GREEN, ORANGE, PALE_GOLDENROD, RED, SLATE_GRAY, TRANSPARENT, WHITE,
    WHITE_SMOKE, YELLOW,
};
