//! Test fixtures and helpers

pub mod fixtures;

pub use fixtures::sample_dataset;

use anyhow::{bail, Context};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// Decode an obfuscated feed body back to the JSON text, following the
/// documented wire format: a two-digit draw, a one-digit draw, a junk run of
/// their difference, then the base64 payload.
pub fn decode_obfuscated(body: &str) -> anyhow::Result<String> {
    if body.len() < 3 {
        bail!("body too short: {} bytes", body.len());
    }
    let first: usize = body[0..2].parse().context("first draw is not numeric")?;
    let second: usize = body[2..3].parse().context("second draw is not numeric")?;
    let skip = first.saturating_sub(second);
    let payload = body
        .get(3 + skip..)
        .context("junk prefix longer than body")?;
    let bytes = STANDARD.decode(payload).context("payload is not base64")?;
    String::from_utf8(bytes).context("decoded payload is not UTF-8")
}
