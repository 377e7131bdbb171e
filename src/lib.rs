//! raster-canvas: paint lines, rectangles, circles and freehand strokes onto a
//! fixed-size bitmap with the mouse.
//!
//! [`controller::CanvasController`] holds all drawing state and is driven by
//! [`input::InputEvent`]s; [`window::Drawer`] produces those events from a
//! minifb window and displays the rendered frames.

pub mod config;
pub mod controller;
pub mod error;
pub mod export;
pub mod input;
pub mod raster;
pub mod tool;
pub mod types;
pub mod window;
