//! Expiry Extraction
//!
//! Reads the `exp` claim out of a compact JWT without verifying the
//! signature. The issuer is trusted; the claim only bounds the cache
//! lifetime.

use base64::alphabet;
use base64::engine::general_purpose::GeneralPurpose;
use base64::engine::{DecodePaddingMode, GeneralPurposeConfig};
use base64::Engine;
use chrono::{DateTime, Duration, Utc};
use serde::Deserialize;

/// Assumed lifetime when the expiry claim cannot be read. Short on purpose:
/// an unreadable token forces a re-login on the next acquisition instead of
/// being trusted indefinitely.
pub const FALLBACK_VALIDITY_SECS: i64 = 60;

// JWT payloads are base64url without padding, but some issuers pad anyway.
const PAYLOAD_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

#[derive(Deserialize)]
struct ExpiryClaim {
    exp: i64,
}

/// Decode the expiry instant embedded in `jwt`.
///
/// Falls back to one minute from now when the token does not have three
/// segments, the payload is not valid base64url JSON, or the `exp` claim is
/// missing or not an integer.
pub fn token_expiry(jwt: &str) -> DateTime<Utc> {
    decode_exp(jwt)
        .and_then(|exp| DateTime::from_timestamp(exp, 0))
        .unwrap_or_else(|| Utc::now() + Duration::seconds(FALLBACK_VALIDITY_SECS))
}

fn decode_exp(jwt: &str) -> Option<i64> {
    let mut segments = jwt.split('.');
    let payload = match (
        segments.next(),
        segments.next(),
        segments.next(),
        segments.next(),
    ) {
        (Some(_), Some(payload), Some(_), None) => payload,
        _ => return None,
    };

    let bytes = PAYLOAD_ENGINE.decode(payload).ok()?;
    let claim: ExpiryClaim = serde_json::from_slice(&bytes).ok()?;
    Some(claim.exp)
}
