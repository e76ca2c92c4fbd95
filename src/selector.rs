//! Byte <-> variation selector mapping.
//!
//! Unicode reserves two ranges of variation selectors that render as nothing
//! on their own: VS1-VS16 (U+FE00..U+FE0F) and VS17-VS256 (U+E0100..U+E01EF).
//! Together they give exactly 256 invisible code points, one per byte value:
//! bytes 0-15 map into the first range, bytes 16-255 into the supplement.

/// First code point of the basic variation selector range (VS1).
pub const VARIATION_SELECTOR_START: u32 = 0xFE00;

/// Last code point of the basic variation selector range (VS16).
pub const VARIATION_SELECTOR_END: u32 = 0xFE0F;

/// First code point of the variation selector supplement (VS17).
pub const VARIATION_SELECTOR_SUPPLEMENT_START: u32 = 0xE0100;

/// Last code point of the variation selector supplement (VS256).
pub const VARIATION_SELECTOR_SUPPLEMENT_END: u32 = 0xE01EF;

/// Maps a byte to its variation selector.
///
/// Returns `None` only if the computed code point is not a valid Unicode
/// scalar value, which cannot happen for the two reserved ranges; callers
/// skip unmappable bytes rather than failing.
pub fn to_variation_selector(byte: u8) -> Option<char> {
    let code_point = if byte < 16 {
        VARIATION_SELECTOR_START + byte as u32
    } else {
        VARIATION_SELECTOR_SUPPLEMENT_START + (byte as u32 - 16)
    };
    char::from_u32(code_point)
}

/// Maps a variation selector back to the byte it encodes.
///
/// Returns `None` for any character outside both reserved ranges, which is
/// how the decoder tells visible carrier characters from hidden payload.
pub fn from_variation_selector(ch: char) -> Option<u8> {
    let code_point = ch as u32;
    if (VARIATION_SELECTOR_START..=VARIATION_SELECTOR_END).contains(&code_point) {
        Some((code_point - VARIATION_SELECTOR_START) as u8)
    } else if (VARIATION_SELECTOR_SUPPLEMENT_START..=VARIATION_SELECTOR_SUPPLEMENT_END)
        .contains(&code_point)
    {
        Some((code_point - VARIATION_SELECTOR_SUPPLEMENT_START + 16) as u8)
    } else {
        None
    }
}

/// Returns true if `ch` lies in either reserved variation selector range.
pub fn is_variation_selector(ch: char) -> bool {
    from_variation_selector(ch).is_some()
}
