//! Seesaw scene rendering
//!
//! `layout` is pure geometry shared by tests and the painter; `canvas`
//! talks to the browser's 2D context and only builds on wasm32.

pub mod layout;

#[cfg(target_arch = "wasm32")]
pub mod canvas;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasScene;
pub use layout::{marker_size, markers, plank_x, tick_positions, tilt_angle, Marker};
