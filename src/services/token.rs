//! Mock bearer tokens shaped like a JWT.
//!
//! SECURITY
//! ========
//! These tokens are NOT signed. The third segment is a constant placeholder
//! and `decode` never checks it, so anyone can forge a token for any user id
//! with a future expiry. Fine for a demo, unsafe anywhere else: replace with
//! a real signed scheme before exposing this to untrusted clients.
//!
//! FORMAT
//! ======
//! `base64(header) "." base64(claims) "." base64("mock-signature")`, standard
//! padded base64 over compact JSON. Timestamps are Unix seconds. Decoding
//! also takes unpadded segments and needs only `sub` and `exp` in the
//! payload; the other claims default to empty.

use base64::Engine;
use base64::alphabet;
use base64::engine::DecodePaddingMode;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig, STANDARD};
use serde::{Deserialize, Serialize};
use time::Duration;

use super::directory::User;

pub const SIGNATURE_PLACEHOLDER: &str = "mock-signature";

/// Default token lifetime.
pub const DEFAULT_TTL: Duration = Duration::hours(24);

/// Standard alphabet, padding optional on decode.
const LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenHeader {
    pub alg: String,
    pub typ: String,
}

impl Default for TokenHeader {
    fn default() -> Self {
        Self { alg: "HS256".to_owned(), typ: "JWT".to_owned() }
    }
}

/// Token payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Subject: the user id.
    pub sub: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub name: String,
    /// Issued-at, Unix seconds.
    #[serde(default)]
    pub iat: i64,
    /// Expiry, Unix seconds.
    pub exp: i64,
}

impl TokenClaims {
    #[must_use]
    pub fn for_user(user: &User, issued_at: i64, ttl: Duration) -> Self {
        Self {
            sub: user.id.clone(),
            email: user.email.clone(),
            name: user.name.clone(),
            iat: issued_at,
            exp: issued_at.saturating_add(ttl.whole_seconds()),
        }
    }

    /// Expired strictly after `exp`.
    #[must_use]
    pub fn is_expired_at(&self, now: i64) -> bool {
        self.exp < now
    }
}

fn encode_json<T: Serialize>(value: &T) -> Result<String, serde_json::Error> {
    Ok(STANDARD.encode(serde_json::to_vec(value)?))
}

/// Assemble a token from claims.
pub fn encode(claims: &TokenClaims) -> Result<String, serde_json::Error> {
    let header = encode_json(&TokenHeader::default())?;
    let payload = encode_json(claims)?;
    let signature = STANDARD.encode(SIGNATURE_PLACEHOLDER);
    Ok(format!("{header}.{payload}.{signature}"))
}

/// Mint a token for `user` issued at `issued_at`.
pub fn issue(user: &User, issued_at: i64, ttl: Duration) -> Result<String, serde_json::Error> {
    encode(&TokenClaims::for_user(user, issued_at, ttl))
}

/// Parse the claims out of a token. Only the shape is checked: exactly three
/// dot-separated segments and a payload carrying at least `sub` and `exp`.
/// Returns `None` on any failure.
#[must_use]
pub fn decode(token: &str) -> Option<TokenClaims> {
    let mut parts = token.split('.');
    let (Some(_header), Some(payload), Some(_signature), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return None;
    };
    let bytes = LENIENT.decode(payload).ok()?;
    serde_json::from_slice(&bytes).ok()
}

#[cfg(test)]
#[path = "token_test.rs"]
mod tests;
