//! Command framing.
//!
//! Wraps encoder and packer output with the fixed start/end markers and
//! trailing acknowledgment frames the device protocol requires, and
//! assembles multi-frame custom-image transmissions. All builders are
//! stateless: each call produces one self-contained [`CommandSequence`]
//! or fails before any output is produced.

use bytes::{BufMut, Bytes, BytesMut};
use tracing::debug;

use crate::command::CommandSequence;
use crate::encoder::encode_text;
use crate::error::{ProtocolError, Result};
use crate::matrix::{DeviceConfig, DeviceWidth, Frame};
use crate::packer::pack_frame;

/// Opens every write transaction: `]!Z00]"`.
pub const WRITE_START: &[u8] = &[0x5D, 0x21, 0x5A, 0x30, 0x30, 0x5D, 0x22];

/// Closes every write transaction: `]$]$`.
pub const WRITE_END: &[u8] = &[0x5D, 0x24, 0x5D, 0x24];

/// Selects the text payload kind: `AZ`.
pub const WRITE_TEXT: &[u8] = &[0x41, 0x5A];

/// Trailing acknowledgment frame sent after a payload to finalize the
/// transaction: `.]!Z00]"E.  Z]$]$`.
pub const ACK: &[u8] = &[
    0x2E, 0x5D, 0x21, 0x5A, 0x30, 0x30, 0x5D, 0x22, 0x45, 0x2E, 0x20, 0x20, 0x5A, 0x5D, 0x24,
    0x5D, 0x24,
];

/// Custom-image transmissions name frames `a`..`z`; more frames than
/// letters cannot be addressed.
pub const MAX_IMAGE_FRAMES: usize = 26;

// Custom-image scaffolding.
const IMAGE_HEADER_LEAD_IN: &[u8] = &[
    0x5D, 0x21, 0x5A, 0x30, 0x30, 0x5D, 0x22, 0x41, 0x5A, 0x5D, 0x3B, 0x20, 0x67,
];
const IMAGE_ID_PREFIX: &[u8] = &[0x5D, 0x3F, 0x50];
const IMAGE_ID_DELIMITER: &[u8] = &[0x5D, 0x29];
const IMAGE_PACKET_LEAD_IN: &[u8] = &[0x2E, 0x5D, 0x21, 0x5A, 0x30, 0x30, 0x5D, 0x22, 0x53];
const WIDTH_MARKER_128: &[u8] = &[0x32, 0x40];
const WIDTH_MARKER_256: &[u8] = &[0x32, 0x50];
const FIRST_FRAME_ID: u8 = b'a';

// Clock scaffolding: `]!Z00]"E` then a field-select byte.
const CLOCK_PREFIX: &[u8] = &[0x5D, 0x21, 0x5A, 0x30, 0x30, 0x5D, 0x22, 0x45];
const DATE_FIELD: u8 = 0x3B;
const TIME_FIELD: u8 = 0x20;

// Mode commands (no acknowledgment frame follows either of these).
const WIDTH_SELECT_128: &[u8] = &[
    0x5D, 0x21, 0x5A, 0x30, 0x30, 0x5D, 0x22, 0x59, 0x39, 0x10, 0x10, 0x00, 0x5D, 0x24,
];
const WIDTH_SELECT_256: &[u8] = &[
    0x5D, 0x21, 0x5A, 0x30, 0x30, 0x5D, 0x22, 0x59, 0x39, 0x10, 0x20, 0x00, 0x5D, 0x24,
];
const CLEAR_MEMORY: &[u8] = &[0x5D, 0x21, 0x5A, 0x30, 0x30, 0x5D, 0x22, 0x58, 0x5D, 0x24];

/// Build a text command: start marker, text payload kind, encoded text,
/// end marker; then one trailing acknowledgment frame.
pub fn text_command(text: &str) -> Result<CommandSequence> {
    let encoded = encode_text(text)?;

    let mut payload =
        BytesMut::with_capacity(WRITE_START.len() + WRITE_TEXT.len() + encoded.len() + WRITE_END.len());
    payload.put_slice(WRITE_START);
    payload.put_slice(WRITE_TEXT);
    payload.put_slice(&encoded);
    payload.put_slice(WRITE_END);

    debug!(text_len = text.len(), wire_len = payload.len(), "built text command");

    let mut seq = CommandSequence::new();
    seq.push(payload.freeze());
    seq.push(Bytes::from_static(ACK));
    Ok(seq)
}

/// Build a custom-image transmission.
///
/// One ASCII header packet announces the frame identifiers (`a`, `b`, …)
/// separated by the fixed delimiter, with none after the last. Each frame
/// then gets its own binary packet: lead-in, identifier, width marker,
/// packed red+green bytes, trailer. A single acknowledgment frame closes
/// the whole transmission.
pub fn image_command(frames: &[Frame], config: DeviceConfig) -> Result<CommandSequence> {
    if frames.len() > MAX_IMAGE_FRAMES {
        return Err(ProtocolError::TooManyFrames(frames.len()));
    }

    // Pack every frame up front so validation failures cannot leave a
    // partially built sequence behind.
    let packed: Vec<Bytes> = frames
        .iter()
        .map(|frame| pack_frame(frame, config))
        .collect::<Result<_>>()?;

    let mut seq = CommandSequence::new();

    let mut header = BytesMut::new();
    header.put_slice(IMAGE_HEADER_LEAD_IN);
    for index in 0..frames.len() {
        header.put_slice(IMAGE_ID_PREFIX);
        header.put_u8(FIRST_FRAME_ID + index as u8);
        if index + 1 < frames.len() {
            header.put_slice(IMAGE_ID_DELIMITER);
        }
    }
    header.put_slice(WRITE_END);
    seq.push(header.freeze());

    let marker = width_marker(config.width);
    for (index, frame_bytes) in packed.into_iter().enumerate() {
        let mut packet = BytesMut::with_capacity(
            IMAGE_PACKET_LEAD_IN.len() + 1 + marker.len() + frame_bytes.len() + WRITE_END.len(),
        );
        packet.put_slice(IMAGE_PACKET_LEAD_IN);
        packet.put_u8(FIRST_FRAME_ID + index as u8);
        packet.put_slice(marker);
        packet.put_slice(&frame_bytes);
        packet.put_slice(WRITE_END);
        seq.push(packet.freeze());
    }

    seq.push(Bytes::from_static(ACK));
    debug!(
        frames = frames.len(),
        commands = seq.len(),
        wire_len = seq.total_len(),
        "built image command"
    );
    Ok(seq)
}

fn width_marker(width: DeviceWidth) -> &'static [u8] {
    match width {
        DeviceWidth::W128 => WIDTH_MARKER_128,
        DeviceWidth::W256 => WIDTH_MARKER_256,
    }
}

/// Build the date/time command pair.
///
/// `time` is `HHMMSS`, `date` is `MMDDYY`; either defaults to the current
/// wall clock when omitted. Emits the date command with its acknowledgment,
/// then the time command with its own.
pub fn clock_command(time: Option<&str>, date: Option<&str>) -> Result<CommandSequence> {
    let now = chrono::Local::now();
    let time = match time {
        Some(explicit) => validated_clock_field(explicit)?,
        None => now.format("%H%M%S").to_string(),
    };
    let date = match date {
        Some(explicit) => validated_clock_field(explicit)?,
        None => now.format("%m%d%y").to_string(),
    };

    let mut seq = CommandSequence::new();
    seq.push(clock_part(DATE_FIELD, &date));
    seq.push(Bytes::from_static(ACK));
    seq.push(clock_part(TIME_FIELD, &time));
    seq.push(Bytes::from_static(ACK));
    Ok(seq)
}

fn validated_clock_field(field: &str) -> Result<String> {
    if field.len() != 6 || !field.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ProtocolError::InvalidClockField(field.to_string()));
    }
    Ok(field.to_string())
}

fn clock_part(select: u8, digits: &str) -> Bytes {
    let mut out = BytesMut::with_capacity(CLOCK_PREFIX.len() + 1 + digits.len() + WRITE_END.len());
    out.put_slice(CLOCK_PREFIX);
    out.put_u8(select);
    out.put_slice(digits.as_bytes());
    out.put_slice(WRITE_END);
    out.freeze()
}

/// Build the width-select command for 128 or 256 pixel mode.
///
/// The device applies the mode without an acknowledgment frame.
pub fn width_command(width: u32) -> Result<CommandSequence> {
    let width = DeviceWidth::try_from(width)?;
    let mut seq = CommandSequence::new();
    seq.push(Bytes::from_static(match width {
        DeviceWidth::W128 => WIDTH_SELECT_128,
        DeviceWidth::W256 => WIDTH_SELECT_256,
    }));
    Ok(seq)
}

/// Build the command that resets device memory. No acknowledgment frame.
pub fn clear_command() -> CommandSequence {
    let mut seq = CommandSequence::new();
    seq.push(Bytes::from_static(CLEAR_MEMORY));
    seq
}
