//! Bearer token payload decoding
//!
//! The identity provider hands the client a JWT whose payload seeds the
//! current-user record before the authoritative profile fetch completes.
//! The client only *reads* the claims; signature verification is the
//! backend's job.

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Claims the client cares about in the identity token payload
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TokenClaims {
    /// Subject id
    pub sub: Option<String>,
    /// Display name
    pub unique_name: Option<String>,
    /// Given name
    pub given_name: Option<String>,
    /// Family name
    pub family_name: Option<String>,
    /// Email address
    pub email: Option<String>,
    /// Role name
    pub role: Option<String>,
    /// Expiry as a unix timestamp
    pub exp: Option<i64>,
}

/// Decode the payload segment of a JWT
///
/// Returns `None` for anything that is not a three-segment token with a
/// base64url JSON payload.
#[must_use]
pub fn decode_claims(token: &str) -> Option<TokenClaims> {
    let payload = token.split('.').nth(1)?;
    let bytes = URL_SAFE_NO_PAD.decode(payload).ok()?;
    serde_json::from_slice(&bytes).ok()
}

/// Whether the token's `exp` claim is in the past
///
/// Tokens without a readable `exp` claim are treated as not expired; the
/// backend rejects them if they are.
#[must_use]
pub fn is_expired(token: &str, now: DateTime<Utc>) -> bool {
    decode_claims(token)
        .and_then(|claims| claims.exp)
        .is_some_and(|exp| exp <= now.timestamp())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn token_with_payload(payload: &serde_json::Value) -> String {
        let header = URL_SAFE_NO_PAD.encode(b"{\"alg\":\"none\"}");
        let body = URL_SAFE_NO_PAD.encode(payload.to_string());
        format!("{header}.{body}.sig")
    }

    #[test]
    fn decodes_identity_claims() {
        let token = token_with_payload(&serde_json::json!({
            "sub": "u1",
            "unique_name": "Ada",
            "email": "ada@example.com",
            "role": "admin",
            "exp": 4_102_444_800_i64,
        }));

        let claims = decode_claims(&token);
        let Some(claims) = claims else {
            unreachable!("well-formed token decodes");
        };
        assert_eq!(claims.sub.as_deref(), Some("u1"));
        assert_eq!(claims.unique_name.as_deref(), Some("Ada"));
        assert_eq!(claims.email.as_deref(), Some("ada@example.com"));
        assert_eq!(claims.role.as_deref(), Some("admin"));
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(decode_claims("not-a-token"), None);
        assert_eq!(decode_claims("a.!!!.c"), None);
        assert_eq!(decode_claims(""), None);
    }

    #[test]
    fn expiry_is_compared_against_now() {
        let now = Utc
            .with_ymd_and_hms(2025, 6, 1, 12, 0, 0)
            .single()
            .unwrap_or_default();

        let expired = token_with_payload(&serde_json::json!({"exp": now.timestamp() - 60}));
        let valid = token_with_payload(&serde_json::json!({"exp": now.timestamp() + 60}));
        let no_exp = token_with_payload(&serde_json::json!({"sub": "u1"}));

        assert!(is_expired(&expired, now));
        assert!(!is_expired(&valid, now));
        assert!(!is_expired(&no_exp, now));
        assert!(!is_expired("unreadable", now));
    }
}
