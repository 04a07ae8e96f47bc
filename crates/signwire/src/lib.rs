//! Host-side toolkit for serial dot-matrix LED signs.
//!
//! signwire turns text and pixel frames into the byte commands a two-color
//! 16-row LED sign understands, and delivers them over any byte stream.
//!
//! # Crate Structure
//!
//! - [`protocol`] — Command encoding, nibble packing, and wire framing
//! - [`render`] — Text rasterization into red/green pixel frames
//! - [`link`] — Sequential command delivery over `Read + Write` streams

/// Re-export protocol types.
pub mod protocol {
    pub use signwire_protocol::*;
}

/// Re-export rendering types.
pub mod render {
    pub use signwire_render::*;
}

/// Re-export link types.
pub mod link {
    pub use signwire_link::*;
}
