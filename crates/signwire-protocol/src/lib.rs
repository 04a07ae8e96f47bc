//! Byte-accurate command encoding and framing for two-color dot-matrix LED signs.
//!
//! This is the core value-add layer of signwire. It translates human-authored
//! text (with inline `{marker}` control codes) and red/green pixel bitmaps
//! into the exact command byte stream the sign accepts:
//! - [`tokens`] — static marker-name → control-byte table
//! - [`encoder`] — literal/marker text scanning
//! - [`packer`] — nibble-tagged bitmap packing
//! - [`framer`] — complete command sequences (text, image, clock, width, clear)
//!
//! Everything here is a pure transform over immutable inputs. The device
//! width is always an explicit [`DeviceConfig`] argument, never ambient state.

pub mod command;
pub mod encoder;
pub mod error;
pub mod framer;
pub mod matrix;
pub mod packer;
pub mod tokens;

pub use command::{Command, CommandSequence};
pub use encoder::encode_text;
pub use error::{ProtocolError, Result};
pub use framer::{
    clear_command, clock_command, image_command, text_command, width_command, ACK,
    MAX_IMAGE_FRAMES, WRITE_END, WRITE_START,
};
pub use matrix::{DeviceConfig, DeviceWidth, Frame, PixelMatrix, MATRIX_HEIGHT};
pub use packer::{pack_frame, pack_matrix, packed_matrix_len, unpack_matrix, PAYLOAD_TAG};
pub use tokens::{token_bytes, Token, TOKENS};
