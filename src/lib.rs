//! hueboard: a minimal fullscreen colour picker for GTK4.
//!
//! This library provides the building blocks for hueboard:
//! - HSV/RGB colour math and contrast classification
//! - Pointer-to-value mapping for the picker surfaces
//! - Gradient raster rendering
//! - The colour state owner and configuration persistence
//! - GTK widgets composing the above

pub mod color;
pub mod config;
pub mod gradient;
pub mod mapping;
pub mod state;
pub mod ui;

// Re-export commonly used types
pub use color::{Hsv, Rgb};
pub use config::AppConfig;
pub use state::ColorState;
