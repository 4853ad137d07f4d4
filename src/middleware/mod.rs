use axum::{
    extract::FromRequestParts,
    http::{request::Parts, StatusCode},
};
use std::sync::Arc;

use crate::models::User;

pub const USER_ID_HEADER: &str = "x-user-id";

/// Вызывающий пользователь.
///
/// Берётся из заголовка `X-User-Id`, а без него - из `DEFAULT_USER_ID`.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

impl FromRequestParts<Arc<crate::AppState>> for CurrentUser {
    type Rejection = StatusCode;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<crate::AppState>,
    ) -> Result<Self, Self::Rejection> {
        let Some(value) = parts.headers.get(USER_ID_HEADER) else {
            return Ok(CurrentUser(User::new(
                state.config.auth.default_user_id.clone(),
            )));
        };

        let user_id = value
            .to_str()
            .map_err(|_| StatusCode::UNAUTHORIZED)?
            .trim();
        if user_id.is_empty() {
            return Err(StatusCode::UNAUTHORIZED);
        }

        Ok(CurrentUser(User::new(user_id)))
    }
}
