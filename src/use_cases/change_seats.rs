//! change_seats.rs
//!
//! Изменение количества мест вебинара.
//!
//! Проверки выполняются строго по порядку, и ни одна ошибка не приводит
//! к записи в хранилище:
//! 1. вебинар существует;
//! 2. вызывающий - организатор;
//! 3. новое значение строго больше текущего;
//! 4. новое значение не больше [`MAX_SEATS`].
//!
//! Защиты от гонок нет: два параллельных увеличения читают одно и то же
//! состояние, и побеждает последняя запись.

use std::sync::Arc;
use tracing::{info, warn};

use super::ErrorKind;
use crate::{
    models::User,
    repositories::{RepositoryError, WebinarRepository},
};

/// Потолок вместимости вебинара.
pub const MAX_SEATS: i64 = 1000;

#[derive(Debug, Clone)]
pub struct ChangeSeatsRequest {
    pub user: User,
    pub webinar_id: String,
    pub seats: i64,
}

#[derive(Debug, thiserror::Error)]
pub enum ChangeSeatsError {
    #[error("webinar {0} not found")]
    WebinarNotFound(String),

    #[error("user is not allowed to update this webinar")]
    NotOrganizer,

    #[error("cannot decrease or keep equal capacity ({current} -> {requested})")]
    SeatsNotIncreased { current: i32, requested: i64 },

    #[error("{requested} seats exceeds maximum capacity of {max}")]
    TooManySeats { requested: i64, max: i64 },

    #[error("repository error: {0}")]
    Repository(#[from] RepositoryError),
}

impl ChangeSeatsError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ChangeSeatsError::WebinarNotFound(_) => ErrorKind::NotFound,
            ChangeSeatsError::NotOrganizer => ErrorKind::Forbidden,
            ChangeSeatsError::SeatsNotIncreased { .. } | ChangeSeatsError::TooManySeats { .. } => {
                ErrorKind::Validation
            }
            ChangeSeatsError::Repository(_) => ErrorKind::Storage,
        }
    }
}

pub struct ChangeSeats<R: ?Sized> {
    repository: Arc<R>,
}

impl<R> ChangeSeats<R>
where
    R: WebinarRepository + ?Sized,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, req: ChangeSeatsRequest) -> Result<(), ChangeSeatsError> {
        let mut webinar = self
            .repository
            .find_by_id(&req.webinar_id)
            .await?
            .ok_or_else(|| ChangeSeatsError::WebinarNotFound(req.webinar_id.clone()))?;

        if !webinar.is_organizer(&req.user) {
            warn!(
                "User {} tried to change seats of webinar {} owned by {}",
                req.user.id, webinar.id, webinar.organizer_id
            );
            return Err(ChangeSeatsError::NotOrganizer);
        }

        if req.seats <= i64::from(webinar.seats) {
            warn!(
                "Rejected seats change for webinar {}: {} -> {}",
                webinar.id, webinar.seats, req.seats
            );
            return Err(ChangeSeatsError::SeatsNotIncreased {
                current: webinar.seats,
                requested: req.seats,
            });
        }

        // После проверки на потолок значение гарантированно влезает в i32
        let seats = match i32::try_from(req.seats) {
            Ok(seats) if req.seats <= MAX_SEATS => seats,
            _ => {
                warn!(
                    "Rejected seats change for webinar {}: {} is over the limit",
                    webinar.id, req.seats
                );
                return Err(ChangeSeatsError::TooManySeats {
                    requested: req.seats,
                    max: MAX_SEATS,
                });
            }
        };

        let previous = webinar.seats;
        webinar.change_seats(seats);
        self.repository.update(&webinar).await?;

        info!("Webinar {} seats changed {} -> {}", webinar.id, previous, seats);
        Ok(())
    }
}
