//! Message encoding: interleave payload bytes into a carrier as selectors.
//!
//! The encoding process:
//! 1. Take the UTF-8 bytes of the message
//! 2. Substitute a placeholder carrier if the carrier is empty
//! 3. Distribute one selector per payload byte among the carrier characters:
//!    - payload fits: random distinct positions, payload order preserved
//!    - payload overflows: one selector per character, remainder appended
//!      after the last character as a single trailing run
//! 4. Return the carrier with the invisible selectors woven in

use rand::seq::index::sample;
use rand::Rng;

use crate::selector::to_variation_selector;

/// Carrier used when the caller supplies an empty one. A single visible
/// character is enough to anchor any number of trailing selectors.
const DEFAULT_CARRIER: char = 'A';

/// Hides `text` inside `carrier`, returning the composite string.
///
/// The hidden bytes always appear in message order, but when the payload is
/// shorter than the carrier their positions are re-randomized on every call,
/// so two encodings of the same inputs usually differ. [`crate::decode`]
/// recovers the message from any of them.
///
/// Encoding never fails: an empty `text` returns the carrier unchanged, and
/// an empty `carrier` is replaced by a single `'A'`.
pub fn encode(text: &str, carrier: &str) -> String {
    encode_with_rng(text, carrier, &mut rand::thread_rng())
}

/// Hides `text` inside `carrier` using the caller's RNG for the sparse-case
/// position sampling. With a seeded RNG the composite string is fully
/// deterministic.
pub fn encode_with_rng<R: Rng + ?Sized>(text: &str, carrier: &str, rng: &mut R) -> String {
    let payload = text.as_bytes();

    let carrier_chars: Vec<char> = if carrier.is_empty() {
        vec![DEFAULT_CARRIER]
    } else {
        carrier.chars().collect()
    };

    if payload.len() <= carrier_chars.len() {
        encode_sparse(payload, &carrier_chars, rng)
    } else {
        encode_dense(payload, &carrier_chars)
    }
}

/// Payload fits in the carrier: pick one distinct character position per byte
/// at random, then emit bytes in order at the chosen positions.
fn encode_sparse<R: Rng + ?Sized>(payload: &[u8], carrier_chars: &[char], rng: &mut R) -> String {
    let mut positions = sample(rng, carrier_chars.len(), payload.len()).into_vec();
    positions.sort_unstable();

    let mut result = String::with_capacity(carrier_chars.len() * 4 + payload.len() * 4);
    let mut payload_iter = payload.iter();
    let mut position_iter = positions.iter().peekable();

    for (i, &ch) in carrier_chars.iter().enumerate() {
        result.push(ch);

        if position_iter.peek() == Some(&&i) {
            position_iter.next();
            if let Some(&byte) = payload_iter.next() {
                // Unmappable bytes are skipped, not fatal.
                if let Some(selector) = to_variation_selector(byte) {
                    result.push(selector);
                }
            }
        }
    }

    result
}

/// Payload overflows the carrier: every character gets one selector, and the
/// leftover bytes pile up after the last character as a trailing run.
fn encode_dense(payload: &[u8], carrier_chars: &[char]) -> String {
    let mut result = String::with_capacity(carrier_chars.len() * 4 + payload.len() * 4);
    let mut payload_iter = payload.iter();

    for &ch in carrier_chars {
        result.push(ch);

        if let Some(&byte) = payload_iter.next() {
            if let Some(selector) = to_variation_selector(byte) {
                result.push(selector);
            }
        }
    }

    for &byte in payload_iter {
        if let Some(selector) = to_variation_selector(byte) {
            result.push(selector);
        }
    }

    result
}
