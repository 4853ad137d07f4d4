use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::post,
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

use crate::{
    error::AppError,
    middleware::CurrentUser,
    models::User,
    use_cases::{ChangeSeats, ChangeSeatsRequest},
    AppState,
};

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/webinars/{id}/seats", post(change_seats))
}

/// Число мест может прийти числом (`30`, `30.0`) или строкой (`"30"`).
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum SeatsInput {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl SeatsInput {
    // Только приведение к целому: диапазон проверяет сценарий
    fn parse(&self) -> Result<i64, AppError> {
        match self {
            SeatsInput::Integer(n) => Ok(*n),
            SeatsInput::Float(f) => {
                if f.fract() == 0.0 && *f >= i64::MIN as f64 && *f < i64::MAX as f64 {
                    Ok(*f as i64)
                } else {
                    Err(AppError::Validation(format!("seats must be an integer, got {f}")))
                }
            }
            SeatsInput::Text(s) => s
                .trim()
                .parse()
                .map_err(|_| AppError::Validation(format!("seats must be an integer, got {s:?}"))),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ChangeSeatsBody {
    pub seats: SeatsInput,
    #[serde(rename = "userId")]
    pub user_id: Option<String>,
}

// POST /webinars/{id}/seats
async fn change_seats(
    State(state): State<Arc<AppState>>,
    Path(webinar_id): Path<String>,
    CurrentUser(current): CurrentUser,
    body: Result<Json<ChangeSeatsBody>, JsonRejection>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let Json(body) = body?;
    let seats = body.seats.parse()?;

    // userId в теле имеет приоритет над заголовком
    let user = body.user_id.map(User::new).unwrap_or(current);

    let use_case = ChangeSeats::new(state.webinars.clone());
    use_case
        .execute(ChangeSeatsRequest {
            user,
            webinar_id,
            seats,
        })
        .await?;

    Ok((StatusCode::OK, Json(json!({ "message": "Seats updated" }))))
}
