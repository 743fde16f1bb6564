//! Response encoding for the talent feed
//!
//! The serialized dataset is transmitted in one of four modes. Three are
//! straightforward; the obfuscated mode prepends two random decimal draws and
//! a run of alphanumeric junk in front of the base64 payload:
//!
//! `<firstDigit><secondDigit><junk><base64(json)>`
//!
//! `firstDigit` is drawn from 10..=20 and is two characters wide on the wire
//! (the name is historical), `secondDigit` from 1..=3, and the junk run is
//! `firstDigit - secondDigit` characters long. A reader recovers the JSON by
//! parsing the first three characters, skipping the junk and base64-decoding
//! the remainder.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use rand::Rng;

/// How the feed endpoint transmits the serialized dataset.
///
/// Selected once at startup via `TALENTS_ENCODING`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EncodingMode {
    /// Raw JSON for every request, no cache directive.
    Plain,
    /// Base64 body unless the client asked for raw JSON.
    Base64,
    /// Branches like `Base64` but transmits raw JSON on both paths.
    Passthrough,
    /// Base64 behind a random-length alphanumeric junk prefix.
    #[default]
    Obfuscated,
}

impl EncodingMode {
    /// Parse a `TALENTS_ENCODING` value; unknown values select the default.
    pub fn from_env_value(value: &str) -> Self {
        match value {
            "plain" => EncodingMode::Plain,
            "base64" => EncodingMode::Base64,
            "passthrough" => EncodingMode::Passthrough,
            _ => EncodingMode::Obfuscated,
        }
    }
}

/// Plain base64 transport used by the `Base64` mode.
pub fn to_base64(json: &str) -> String {
    STANDARD.encode(json)
}

/// Encode the serialized dataset for the obfuscated mode.
pub fn obfuscate<R: Rng>(rng: &mut R, json: &str) -> String {
    let first_digit: u32 = rng.gen_range(10..=20);
    let second_digit: u32 = rng.gen_range(1..=3);
    let junk_len = first_digit.saturating_sub(second_digit) as usize;

    let mut body = String::with_capacity(3 + junk_len + json.len() * 4 / 3 + 4);
    body.push_str(&first_digit.to_string());
    body.push_str(&second_digit.to_string());
    push_junk(rng, &mut body, junk_len);
    body.push_str(&STANDARD.encode(json));
    body
}

/// Append `len` random alphanumeric characters.
///
/// Random bytes are base64-encoded and filtered down to `[A-Za-z0-9]`, which
/// under-produces, so the draw loops until the run is full.
fn push_junk<R: Rng>(rng: &mut R, out: &mut String, len: usize) {
    let mut remaining = len;
    while remaining > 0 {
        let bytes: Vec<u8> = (0..24).map(|_| rng.gen()).collect();
        for c in STANDARD.encode(&bytes).chars() {
            if c.is_ascii_alphanumeric() {
                out.push(c);
                remaining -= 1;
                if remaining == 0 {
                    break;
                }
            }
        }
    }
}
