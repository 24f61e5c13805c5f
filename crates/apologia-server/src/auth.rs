//! Bearer-token auth: token generation, password hashing, and the
//! `AuthedUser` extractor.
//!
//! Tokens are 32 random bytes, base64url-encoded, handed to the client once.
//! Only the SHA-256 digest is persisted, so the session table never contains
//! a usable credential.

use argon2::{
  Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
  password_hash::SaltString,
};
use axum::{extract::FromRequestParts, http::HeaderMap, http::request::Parts};
use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD as B64;
use chrono::Utc;
use rand_core::{OsRng, RngCore as _};
use sha2::{Digest as _, Sha256};

use apologia_core::{
  store::AppStore,
  user::{Session, User},
};

use crate::{AppState, error::Error};

// ─── Tokens ──────────────────────────────────────────────────────────────────

/// Generate an opaque 256-bit token (also used for guest passwords).
pub fn generate_token() -> String {
  let mut bytes = [0u8; 32];
  OsRng.fill_bytes(&mut bytes);
  B64.encode(bytes)
}

/// The digest under which a token is stored.
pub fn hash_token(token: &str) -> String {
  hex::encode(Sha256::digest(token.as_bytes()))
}

/// Create a session for `user_id` and return the client-facing token.
pub async fn issue_session<S>(store: &S, user: &User) -> Result<String, Error>
where
  S: AppStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let token = generate_token();
  store
    .create_session(Session {
      token_hash: hash_token(&token),
      user_id:    user.user_id,
      created_at: Utc::now(),
    })
    .await
    .map_err(|e| Error::Store(Box::new(e)))?;
  Ok(token)
}

// ─── Passwords ───────────────────────────────────────────────────────────────

/// Hash a password into an argon2 PHC string.
pub fn hash_password(password: &str) -> Result<String, Error> {
  let salt = SaltString::generate(&mut OsRng);
  Argon2::default()
    .hash_password(password.as_bytes(), &salt)
    .map(|h| h.to_string())
    .map_err(|e| Error::Internal(format!("argon2 error: {e}")))
}

/// Verify a password against a stored PHC string.
pub fn verify_password(password: &str, phc: &str) -> bool {
  let Ok(parsed) = PasswordHash::new(phc) else {
    return false;
  };
  Argon2::default()
    .verify_password(password.as_bytes(), &parsed)
    .is_ok()
}

// ─── Request authentication ──────────────────────────────────────────────────

/// Resolve the bearer token in `headers`, if any.
///
/// `Ok(None)` means no Authorization header was sent; a header that is
/// present but invalid (wrong scheme, unknown token) is `Unauthorized`.
pub async fn user_from_headers<S>(
  state: &AppState<S>,
  headers: &HeaderMap,
) -> Result<Option<User>, Error>
where
  S: AppStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let Some(header_val) = headers
    .get(axum::http::header::AUTHORIZATION)
    .and_then(|v| v.to_str().ok())
  else {
    return Ok(None);
  };

  let token = header_val
    .strip_prefix("Bearer ")
    .ok_or(Error::Unauthorized)?;

  let user = state
    .store
    .find_session(&hash_token(token))
    .await
    .map_err(|e| Error::Store(Box::new(e)))?
    .ok_or(Error::Unauthorized)?;

  Ok(Some(user))
}

/// Extractor: present in a handler means the request carried a valid bearer
/// token; missing or invalid tokens reject with 401.
pub struct AuthedUser(pub User);

impl<S> FromRequestParts<AppState<S>> for AuthedUser
where
  S: AppStore + Clone + Send + Sync + 'static,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  type Rejection = Error;

  async fn from_request_parts(
    parts: &mut Parts,
    state: &AppState<S>,
  ) -> Result<Self, Self::Rejection> {
    match user_from_headers(state, &parts.headers).await? {
      Some(user) => Ok(AuthedUser(user)),
      None => Err(Error::Unauthorized),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn tokens_are_distinct_and_url_safe() {
    let a = generate_token();
    let b = generate_token();
    assert_ne!(a, b);
    assert!(!a.contains('+') && !a.contains('/') && !a.contains('='));
  }

  #[test]
  fn token_hash_is_stable_hex() {
    let h1 = hash_token("tok");
    let h2 = hash_token("tok");
    assert_eq!(h1, h2);
    assert_eq!(h1.len(), 64);
    assert_ne!(h1, hash_token("tok2"));
  }

  #[test]
  fn password_hash_round_trip() {
    let phc = hash_password("correct horse").unwrap();
    assert!(phc.starts_with("$argon2"));
    assert!(verify_password("correct horse", &phc));
    assert!(!verify_password("wrong", &phc));
  }

  #[test]
  fn verify_rejects_garbage_phc() {
    assert!(!verify_password("anything", "not-a-phc-string"));
  }
}
