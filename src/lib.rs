//! # Unihide - Hide text in text
//!
//! Unihide is a steganography codec that hides a UTF-8 message inside any
//! visible "carrier" text using Unicode variation selectors.
//!
//! ## Overview
//!
//! Variation selectors (U+FE00..U+FE0F and U+E0100..U+E01EF) are 256 code
//! points that render as nothing when they don't follow a character they
//! modify. That makes them a perfect invisible alphabet, one code point per
//! byte value:
//! - The message is converted to its UTF-8 bytes
//! - Each byte becomes one invisible selector
//! - Selectors are **distributed** after carrier characters, at random
//!   positions when the payload fits, densely (with a trailing run on the
//!   last character) when it doesn't
//! - The composite string looks identical to the carrier but carries the
//!   full payload
//!
//! This is obfuscation, not encryption: anyone who knows the scheme can
//! decode or strip the payload. Pair it with real encryption if
//! confidentiality matters.
//!
//! ## Example Usage
//!
//! ```rust
//! use unihide::{clean_hidden_text, decode, encode};
//!
//! let encoded = encode("123", "hello");
//!
//! // Looks like "hello", decodes to "123"
//! assert_eq!(clean_hidden_text(&encoded), "hello");
//! assert_eq!(decode(&encoded).unwrap(), "123");
//!
//! // Stripping removes the payload entirely
//! let cleaned = clean_hidden_text(&encoded);
//! assert_eq!(decode(&cleaned).unwrap(), "");
//! ```
//!
//! ## Modules
//!
//! - [`selector`]: byte <-> variation selector mapping
//! - [`encoder`]: payload distribution into a carrier
//! - [`decoder`]: payload extraction from a composite string
//! - [`strip`]: removing all hidden content

pub mod decoder;
pub mod encoder;
pub mod selector;
pub mod strip;

// Re-export the core operations at the crate root
pub use decoder::{decode, DecodeError};
pub use encoder::{encode, encode_with_rng};
pub use selector::{from_variation_selector, is_variation_selector, to_variation_selector};
pub use strip::clean_hidden_text;
