//! Text-to-bytes encoding with inline marker substitution.

use bytes::{BufMut, Bytes, BytesMut};

use crate::error::{ProtocolError, Result};
use crate::tokens::token_bytes;

/// Encode source text into the device's wire bytes.
///
/// Scans left to right. A `{name}` whose name is registered in the token
/// table is replaced by its control bytes; everything else, including
/// unmatched braces and unknown marker text, is emitted literally as its
/// single-byte ASCII code. Markers never nest or overlap, so the first
/// successful match wins and scanning resumes after the closing brace.
///
/// Encoding is total over recognized input and deterministic. It only fails
/// when a literal character falls outside the ASCII range the device can
/// represent.
pub fn encode_text(text: &str) -> Result<Bytes> {
    let mut out = BytesMut::with_capacity(text.len());
    let mut idx = 0;

    while idx < text.len() {
        let rest = &text[idx..];

        if let Some(after_brace) = rest.strip_prefix('{') {
            if let Some(close) = after_brace.find('}') {
                if let Some(bytes) = token_bytes(&after_brace[..close]) {
                    out.put_slice(bytes);
                    // '{' + name + '}'
                    idx += close + 2;
                    continue;
                }
            }
        }

        let Some(ch) = rest.chars().next() else {
            break;
        };
        if !ch.is_ascii() {
            return Err(ProtocolError::Encoding { ch, position: idx });
        }
        out.put_u8(ch as u8);
        idx += ch.len_utf8();
    }

    Ok(out.freeze())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_ascii_passes_through() {
        let out = encode_text("HELLO 123").unwrap();
        assert_eq!(out.as_ref(), b"HELLO 123");
    }

    #[test]
    fn marker_replaced_by_control_bytes() {
        let out = encode_text("{color-red}A").unwrap();
        assert_eq!(out.as_ref(), &[0x5D, 0x3C, 0x31, 0x41]);
    }

    #[test]
    fn unknown_marker_is_literal() {
        let out = encode_text("{not_a_token}").unwrap();
        assert_eq!(out.as_ref(), b"{not_a_token}");
    }

    #[test]
    fn unmatched_braces_are_literal() {
        assert_eq!(encode_text("a{b").unwrap().as_ref(), b"a{b");
        assert_eq!(encode_text("}x{").unwrap().as_ref(), b"}x{");
    }

    #[test]
    fn adjacent_markers_and_text() {
        let out = encode_text("{wait-2s}{next-frame}Hi").unwrap();
        assert_eq!(out.as_ref(), &[0x5D, 0x38, 0x5D, 0x2C, 0x48, 0x69]);
    }

    #[test]
    fn unknown_marker_does_not_swallow_following_marker() {
        // "{nope}" is literal, "{wait-1s}" still matches after it.
        let out = encode_text("{nope}{wait-1s}").unwrap();
        let mut expected = b"{nope}".to_vec();
        expected.extend_from_slice(&[0x5D, 0x39]);
        assert_eq!(out.as_ref(), expected.as_slice());
    }

    #[test]
    fn deterministic() {
        let input = "{action-hold}{font-serif-12}{color-yellow}LUNCH {wait-5s}";
        assert_eq!(encode_text(input).unwrap(), encode_text(input).unwrap());
    }

    #[test]
    fn non_ascii_literal_rejected() {
        let err = encode_text("caf\u{e9}").unwrap_err();
        match err {
            ProtocolError::Encoding { ch, position } => {
                assert_eq!(ch, '\u{e9}');
                assert_eq!(position, 3);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn non_ascii_inside_unknown_marker_rejected() {
        // The marker text is not registered, so it is literal text and the
        // non-ASCII character inside it must be rejected.
        assert!(encode_text("{caf\u{e9}}").is_err());
    }
}
