//! Account endpoints: guest creation, login, guest promotion, and the
//! subscription read-back the front end gates on.

use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use uuid::Uuid;

use apologia_core::{
  store::AppStore,
  subscriber::Subscriber,
  user::{NewUser, User},
};

use crate::{
  AppState,
  auth::{self, AuthedUser},
  error::Error,
};

/// The client-facing slice of a [`User`].
#[derive(Debug, Serialize, Deserialize)]
pub struct AccountView {
  pub user_id:  Uuid,
  pub email:    String,
  pub is_guest: bool,
}

impl From<&User> for AccountView {
  fn from(user: &User) -> Self {
    Self {
      user_id:  user.user_id,
      email:    user.email.clone(),
      is_guest: user.is_guest,
    }
  }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SessionResponse {
  pub token: String,
  pub user:  AccountView,
}

// ─── Guest accounts ──────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct GuestBody {
  pub email: String,
}

/// `POST /auth/guest` — create (or re-enter) a guest account and issue a
/// token. A full account under the same email is a conflict.
pub async fn guest<S>(
  State(state): State<AppState<S>>,
  Json(body): Json<GuestBody>,
) -> Result<(StatusCode, Json<SessionResponse>), Error>
where
  S: AppStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let email = body.email.trim().to_lowercase();
  if email.is_empty() || !email.contains('@') {
    return Err(Error::BadRequest("a valid email is required".to_string()));
  }

  let user = match state
    .store
    .find_user_by_email(&email)
    .await
    .map_err(|e| Error::Store(Box::new(e)))?
  {
    Some(user) if !user.is_guest => {
      return Err(Error::Conflict(
        "email already registered; log in instead".to_string(),
      ));
    }
    Some(guest) => guest,
    None => state
      .store
      .create_user(NewUser {
        email,
        // Random throwaway credential; replaced if the guest promotes.
        password_hash: auth::hash_password(&auth::generate_token())?,
        is_guest: true,
      })
      .await
      .map_err(|e| Error::Store(Box::new(e)))?,
  };

  let token = auth::issue_session(state.store.as_ref(), &user).await?;
  Ok((
    StatusCode::CREATED,
    Json(SessionResponse { token, user: AccountView::from(&user) }),
  ))
}

// ─── Login ───────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct LoginBody {
  pub email:    String,
  pub password: String,
}

/// `POST /auth/login`
pub async fn login<S>(
  State(state): State<AppState<S>>,
  Json(body): Json<LoginBody>,
) -> Result<Json<SessionResponse>, Error>
where
  S: AppStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let email = body.email.trim().to_lowercase();

  let user = state
    .store
    .find_user_by_email(&email)
    .await
    .map_err(|e| Error::Store(Box::new(e)))?
    .ok_or(Error::Unauthorized)?;

  if !auth::verify_password(&body.password, &user.password_hash) {
    return Err(Error::Unauthorized);
  }

  let token = auth::issue_session(state.store.as_ref(), &user).await?;
  Ok(Json(SessionResponse { token, user: AccountView::from(&user) }))
}

// ─── Promotion ───────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct PromoteBody {
  pub password: String,
}

/// `POST /auth/promote` — bearer auth; sets a real password and clears the
/// guest flag.
pub async fn promote<S>(
  AuthedUser(user): AuthedUser,
  State(state): State<AppState<S>>,
  Json(body): Json<PromoteBody>,
) -> Result<Json<AccountView>, Error>
where
  S: AppStore + Clone + Send + Sync + 'static,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  if body.password.len() < 8 {
    return Err(Error::BadRequest(
      "password must be at least 8 characters".to_string(),
    ));
  }

  let hash = auth::hash_password(&body.password)?;
  state
    .store
    .promote_user(user.user_id, hash)
    .await
    .map_err(|e| Error::Store(Box::new(e)))?;

  Ok(Json(AccountView {
    user_id:  user.user_id,
    email:    user.email,
    is_guest: false,
  }))
}

// ─── Subscription read-back ──────────────────────────────────────────────────

/// `GET /subscription` — bearer auth; the caller's subscriber row, with
/// unsubscribed defaults when none exists.
pub async fn subscription<S>(
  AuthedUser(user): AuthedUser,
  State(state): State<AppState<S>>,
) -> Result<Json<Value>, Error>
where
  S: AppStore + Clone + Send + Sync + 'static,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  if state.config.skip_subscription_check {
    let stub = Subscriber {
      user_id: Some(user.user_id),
      subscribed: true,
      ..Subscriber::unsubscribed(user.email)
    };
    return Ok(Json(json!(stub)));
  }

  let subscriber = state
    .store
    .get_subscriber(&user.email)
    .await
    .map_err(|e| Error::Store(Box::new(e)))?
    .unwrap_or_else(|| Subscriber::unsubscribed(user.email));

  Ok(Json(json!(subscriber)))
}
