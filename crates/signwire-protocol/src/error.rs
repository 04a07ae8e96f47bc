/// Errors that can occur while encoding or framing sign commands.
#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    /// The requested display width is not one of the supported modes.
    #[error("unsupported display width {0}px (supported: 128, 256)")]
    InvalidWidth(u32),

    /// A pixel matrix was built for a different width than the device is
    /// configured for. Packing at the wrong width would produce corrupt
    /// output on the panel, so it is rejected outright.
    #[error("matrix is {matrix} columns wide, device is configured for {device}")]
    WidthMismatch { matrix: usize, device: usize },

    /// A literal text character cannot be represented in the device's
    /// single-byte character set.
    #[error("cannot encode {ch:?} at byte {position}: not a single-byte ASCII character")]
    Encoding { ch: char, position: usize },

    /// Custom-image transmissions identify frames with single lowercase
    /// letters, which caps a sequence at 26 frames.
    #[error("custom image supports at most 26 frames, got {0}")]
    TooManyFrames(usize),

    /// A clock field was given but is not exactly six ASCII digits.
    #[error("clock field must be six ASCII digits (HHMMSS / MMDDYY), got {0:?}")]
    InvalidClockField(String),

    /// A packed bitmap payload is shorter than one full matrix.
    #[error("packed payload truncated ({len} bytes, expected {expected})")]
    Truncated { len: usize, expected: usize },

    /// A packed bitmap byte does not carry the fixed pixel-data tag.
    #[error("invalid payload byte {byte:#04x} at offset {offset} (expected 0x3_ tag)")]
    InvalidPayloadByte { byte: u8, offset: usize },
}

pub type Result<T> = std::result::Result<T, ProtocolError>;
