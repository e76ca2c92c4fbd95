//! Message decoding: pull payload bytes back out of a composite string.
//!
//! The composite string is scanned left to right as a flat sequence of code
//! points. Each visible character anchors the run of selectors that directly
//! follows it; collecting those runs in scan order reproduces the payload
//! bytes in their original order regardless of which distribution branch the
//! encoder took. The only way decoding fails is if the collected bytes are
//! not valid UTF-8.

use thiserror::Error;

use crate::selector::from_variation_selector;

/// Errors that can occur during decoding.
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("hidden payload is not valid UTF-8: {0}")]
    InvalidUtf8Payload(#[from] std::string::FromUtf8Error),
}

/// Recovers the hidden message from a composite string.
///
/// Strings without any hidden content decode to an empty message. A string
/// that opens with a selector run treats its first code point as the anchor,
/// so that very first selector is consumed as the anchor and dropped; the
/// encoder never produces such strings.
pub fn decode(encoded: &str) -> Result<String, DecodeError> {
    let chars: Vec<char> = encoded.chars().collect();
    let mut decoded: Vec<u8> = Vec::new();

    let mut i = 0;
    while i < chars.len() {
        // Collect the selector run following the anchor at `i`.
        let mut i_next = i + 1;
        while i_next < chars.len() {
            match from_variation_selector(chars[i_next]) {
                Some(byte) => {
                    decoded.push(byte);
                    i_next += 1;
                }
                None => break,
            }
        }
        i = i_next;
    }

    Ok(String::from_utf8(decoded)?)
}
