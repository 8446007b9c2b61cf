//! Rendering for the log terminal
//!
//! This crate provides:
//! - `GlyphRenderer` trait for anything that can draw one colored character cell
//! - `render_grid` / `render_shared` full-frame passes over a terminal grid
//! - `GraphicsRenderer`, a `GlyphRenderer` for any `embedded-graphics`
//!   `DrawTarget` with RGB565 pixels
//!
//! # Architecture
//!
//! The renderer is polled once per frame. It walks every cell of the grid in
//! row-major order and draws one glyph per cell. Framebuffer acquisition,
//! flushing and frame pacing stay with the caller.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod backend;
pub mod graphics;
pub mod render;

// Re-export key types
pub use backend::{DisplayError, GlyphRenderer};
pub use graphics::GraphicsRenderer;
pub use render::{render_grid, render_shared};
