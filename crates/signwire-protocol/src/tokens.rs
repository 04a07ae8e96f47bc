//! Inline marker table.
//!
//! Source text may embed `{name}` markers standing for fixed control byte
//! sequences: color changes, font changes, hold/flash animations, per-frame
//! wait times and frame breaks. Marker names are matched exactly between the
//! braces, so no prefix ambiguity exists. The table is static, sorted by
//! name, and looked up by binary search.

/// A named control marker and the byte sequence it stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub name: &'static str,
    pub bytes: &'static [u8],
}

const fn token(name: &'static str, bytes: &'static [u8]) -> Token {
    Token { name, bytes }
}

/// All markers the device understands, sorted by name.
pub const TOKENS: &[Token] = &[
    // Animation actions
    token("action-flash", &[0x5D, 0x3B, 0x20, 0x63]),
    token("action-flash-bottom", &[0x5D, 0x3B, 0x26, 0x63]),
    token("action-flash-top", &[0x5D, 0x3B, 0x22, 0x63]),
    token("action-hold", &[0x5D, 0x3B, 0x20, 0x62]),
    token("action-hold-bottom", &[0x5D, 0x3B, 0x26, 0x62]),
    token("action-hold-top", &[0x5D, 0x3B, 0x22, 0x62]),
    token("action-interlock", &[0x5D, 0x3B, 0x20, 0x6E, 0x33]),
    token("action-none", &[0x5D, 0x3B, 0x20, 0x61]),
    token("action-shutter", &[0x5D, 0x3B, 0x20, 0x64]),
    // Colors
    token("color-green", &[0x5D, 0x3C, 0x32]),
    token("color-green-red", &[0x5D, 0x3C, 0x35]),
    token("color-mix", &[0x5D, 0x3C, 0x42]),
    token("color-rainbow1", &[0x5D, 0x3C, 0x41]),
    token("color-rainbow2", &[0x5D, 0x3C, 0x39]),
    token("color-red", &[0x5D, 0x3C, 0x31]),
    token("color-red-green", &[0x5D, 0x3C, 0x34]),
    token("color-yellow", &[0x5D, 0x3C, 0x38]),
    // Current date (as previously set on the device)
    token("date", &[0x5D, 0x2B, 0x33]),
    // Fonts
    token("font-serif-12", &[0x5D, 0x3A, 0x4C]),
    token("font-serif-16", &[0x5D, 0x3A, 0x47]),
    token("font-serif-7", &[0x5D, 0x3A, 0x45]),
    token("font-sserif-7", &[0x5D, 0x3A, 0x41]),
    // Frame break
    token("next-frame", &[0x5D, 0x2C]),
    // Current time
    token("time", &[0x5D, 0x33]),
    // Per-frame wait
    token("wait-0s", &[0x5D, 0x29]),
    token("wait-1s", &[0x5D, 0x39]),
    token("wait-2s", &[0x5D, 0x38]),
    token("wait-3s", &[0x5D, 0x37]),
    token("wait-4s", &[0x5D, 0x36]),
    token("wait-5s", &[0x5D, 0x35]),
];

/// Look up the byte sequence for a marker name (without braces).
pub fn token_bytes(name: &str) -> Option<&'static [u8]> {
    TOKENS
        .binary_search_by(|t| t.name.cmp(&name))
        .ok()
        .map(|i| TOKENS[i].bytes)
}
