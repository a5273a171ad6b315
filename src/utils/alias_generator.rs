//! Random alias generation.
//!
//! Aliases are drawn from the OS random source and encoded as URL-safe
//! base64 without padding, so every generated alias is exactly
//! [`ALIAS_LENGTH`] characters from `[A-Za-z0-9_-]`.

use base64::Engine as _;

/// Number of random bytes behind each alias (72 bits of entropy).
const ALIAS_BYTES: usize = 9;

/// Length of a generated alias in characters.
pub const ALIAS_LENGTH: usize = 12;

/// Generates a random, URL-safe alias.
///
/// # Panics
///
/// Panics if the OS random source is unavailable. The service cannot do
/// anything useful without it, so this is treated as fatal rather than as a
/// per-request error.
pub fn generate_alias() -> String {
    let mut buffer = [0u8; ALIAS_BYTES];

    getrandom::fill(&mut buffer).expect("OS random source unavailable");

    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(buffer)
}
