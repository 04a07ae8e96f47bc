//! Text-to-bitmap frame pipeline for two-color dot-matrix LED signs.
//!
//! Turns a string into a sequence of 16-row red/green [`Frame`]s ready for
//! the `signwire-protocol` bitmap packer:
//! - [`font`] — font resolution with an ordered fallback chain and a
//!   guaranteed built-in bitmap font
//! - [`pipeline`] — strip rasterization, frame splitting, centering,
//!   channel inversion
//! - [`preview`] — ASCII rendering of frames for debug output
//!
//! [`Frame`]: signwire_protocol::Frame

pub mod error;
pub mod font;
mod font5x7;
pub mod options;
pub mod pipeline;
pub mod preview;

pub use error::{RenderError, Result};
pub use font::{resolve_font, LineRaster, Rasterizer, SignFont};
pub use options::{RenderOptions, TextColor, TextSize};
pub use pipeline::{
    center_frame, invert_frame, render_frames, render_frames_with, split_strip, Strip,
};
pub use preview::frame_to_ascii;
