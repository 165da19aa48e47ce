use crate::auth::{Claims, create_jwt, hash_password, verify_password};
use crate::domain::DomainError;
use crate::models::user;
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use sea_orm::*;
use serde::{Deserialize, Serialize};
use serde_json::json;

const MIN_USERNAME_LEN: usize = 3;
const MAX_USERNAME_LEN: usize = 150;
const MIN_PASSWORD_LEN: usize = 8;

#[derive(Deserialize)]
pub struct Credentials {
    username: String,
    password: String,
}

#[derive(Serialize)]
pub struct TokenResponse {
    token: String,
    user_id: i32,
    username: String,
}

fn token_for(user: &user::Model) -> Result<TokenResponse, DomainError> {
    let token = create_jwt(user.id, &user.username).map_err(DomainError::Internal)?;
    Ok(TokenResponse {
        token,
        user_id: user.id,
        username: user.username.clone(),
    })
}

pub async fn signup(
    State(db): State<DatabaseConnection>,
    Json(payload): Json<Credentials>,
) -> Result<impl IntoResponse, DomainError> {
    let username = payload.username.trim().to_string();
    let username_len = username.chars().count();
    if !(MIN_USERNAME_LEN..=MAX_USERNAME_LEN).contains(&username_len) {
        return Err(DomainError::Validation(format!(
            "username must be between {} and {} characters",
            MIN_USERNAME_LEN, MAX_USERNAME_LEN
        )));
    }
    if payload.password.chars().count() < MIN_PASSWORD_LEN {
        return Err(DomainError::Validation(format!(
            "password must be at least {} characters",
            MIN_PASSWORD_LEN
        )));
    }

    let taken = user::Entity::find()
        .filter(user::Column::Username.eq(&username))
        .one(&db)
        .await?
        .is_some();
    if taken {
        return Err(DomainError::Conflict("username already taken".to_string()));
    }

    let password_hash = hash_password(&payload.password).map_err(DomainError::Internal)?;
    let now = chrono::Utc::now().to_rfc3339();

    let new_user = user::ActiveModel {
        username: Set(username),
        password_hash: Set(password_hash),
        created_at: Set(now.clone()),
        updated_at: Set(now),
        ..Default::default()
    };

    let user = match new_user.insert(&db).await {
        Ok(user) => user,
        Err(e) if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
            return Err(DomainError::Conflict("username already taken".to_string()));
        }
        Err(e) => return Err(e.into()),
    };

    tracing::info!("Registered user {}", user.username);
    Ok((StatusCode::CREATED, Json(token_for(&user)?)))
}

pub async fn login(
    State(db): State<DatabaseConnection>,
    Json(payload): Json<Credentials>,
) -> Result<Json<TokenResponse>, DomainError> {
    tracing::info!("Login attempt for user: {}", payload.username);

    let Some(user) = user::Entity::find()
        .filter(user::Column::Username.eq(payload.username.trim()))
        .one(&db)
        .await?
    else {
        tracing::warn!("User not found: {}", payload.username);
        return Err(DomainError::Unauthorized);
    };

    match verify_password(&payload.password, &user.password_hash) {
        Ok(true) => {
            tracing::info!("Password verified successfully for user: {}", user.username);
            Ok(Json(token_for(&user)?))
        }
        _ => {
            tracing::warn!("Password verification failed for user: {}", user.username);
            Err(DomainError::Unauthorized)
        }
    }
}

pub async fn me(claims: Claims) -> impl IntoResponse {
    Json(json!({
        "id": claims.user_id(),
        "username": claims.sub,
    }))
}
