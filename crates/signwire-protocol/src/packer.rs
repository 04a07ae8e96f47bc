//! Dense nibble-tagged bitmap packing.
//!
//! The device takes pixel data as one byte per 4 columns per row: the low
//! nibble holds 4 pixel bits (most significant bit is the left-most column),
//! the high nibble is the fixed `0011` tag marking the byte as pixel data.

use bytes::{BufMut, Bytes, BytesMut};

use crate::error::{ProtocolError, Result};
use crate::matrix::{DeviceConfig, Frame, PixelMatrix, MATRIX_HEIGHT};

/// Fixed high-nibble tag on every packed pixel byte.
pub const PAYLOAD_TAG: u8 = 0x30;

/// Columns packed into each payload byte.
pub const PIXELS_PER_BYTE: usize = 4;

/// Packed size of one channel matrix at the configured width.
pub fn packed_matrix_len(config: DeviceConfig) -> usize {
    MATRIX_HEIGHT * config.columns() / PIXELS_PER_BYTE
}

/// Pack one channel matrix into `16 × W/4` tagged bytes.
///
/// Rows are emitted top to bottom, 4-column groups left to right. Pure
/// function of the matrix and width; [`unpack_matrix`] is its exact inverse.
pub fn pack_matrix(matrix: &PixelMatrix, config: DeviceConfig) -> Result<Bytes> {
    let width = config.columns();
    if matrix.width() != width {
        return Err(ProtocolError::WidthMismatch {
            matrix: matrix.width(),
            device: width,
        });
    }

    let mut out = BytesMut::with_capacity(packed_matrix_len(config));
    for row in 0..MATRIX_HEIGHT {
        for group in (0..width).step_by(PIXELS_PER_BYTE) {
            let mut nibble = 0u8;
            for col in group..group + PIXELS_PER_BYTE {
                nibble = (nibble << 1) | matrix.get(row, col) as u8;
            }
            out.put_u8(PAYLOAD_TAG | nibble);
        }
    }
    Ok(out.freeze())
}

/// Pack a two-channel frame: the full red block followed by the full green
/// block, `2 × 16 × W/4` bytes total.
pub fn pack_frame(frame: &Frame, config: DeviceConfig) -> Result<Bytes> {
    let red = pack_matrix(&frame.red, config)?;
    let green = pack_matrix(&frame.green, config)?;

    let mut out = BytesMut::with_capacity(red.len() + green.len());
    out.put_slice(&red);
    out.put_slice(&green);
    Ok(out.freeze())
}

/// Exact inverse of [`pack_matrix`].
///
/// Bit `k` of each nibble is recovered as `(byte >> (3 - k)) & 1`. Rejects
/// short payloads and bytes missing the pixel-data tag.
pub fn unpack_matrix(payload: &[u8], config: DeviceConfig) -> Result<PixelMatrix> {
    let expected = packed_matrix_len(config);
    if payload.len() < expected {
        return Err(ProtocolError::Truncated {
            len: payload.len(),
            expected,
        });
    }

    let width = config.columns();
    let groups_per_row = width / PIXELS_PER_BYTE;
    let mut matrix = PixelMatrix::new(width);

    for (offset, &byte) in payload[..expected].iter().enumerate() {
        if byte & 0xF0 != PAYLOAD_TAG {
            return Err(ProtocolError::InvalidPayloadByte { byte, offset });
        }
        let row = offset / groups_per_row;
        let group = (offset % groups_per_row) * PIXELS_PER_BYTE;
        for k in 0..PIXELS_PER_BYTE {
            let lit = (byte >> (PIXELS_PER_BYTE - 1 - k)) & 1 == 1;
            matrix.set(row, group + k, lit);
        }
    }
    Ok(matrix)
}
