//! Screen overlay measurement tools.
//!
//! Place a line, rectangle or oval over anything on screen and read off its
//! length, extent, area and circumference. Golden ratio, middle and third
//! marks, a zoom loupe and full-screen help lines assist alignment.
//!
//! The library exposes the tool engine, the overlays and the orchestrating
//! [`app::App`] so backends and tests can drive them directly.

pub mod app;
pub mod backend;
pub mod config;
pub mod draw;
pub mod measure;
pub mod overlay;
pub mod services;
pub mod state;
pub mod util;

pub use config::Config;
