//! Хранилище вебинаров.
//!
//! Сценарии зависят только от трейта [`WebinarRepository`]; реализации:
//! - [`InMemoryWebinarRepository`] для быстрых тестов без I/O;
//! - [`PostgresWebinarRepository`] для продакшена.

pub mod in_memory;
pub mod postgres;

pub use in_memory::InMemoryWebinarRepository;
pub use postgres::PostgresWebinarRepository;

use async_trait::async_trait;

use crate::models::Webinar;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WebinarRepository: Send + Sync {
    /// Сохранить новый вебинар.
    async fn create(&self, webinar: &Webinar) -> Result<(), RepositoryError>;

    /// Найти вебинар по id. Отсутствие вебинара - это `Ok(None)`, а не ошибка.
    async fn find_by_id(&self, id: &str) -> Result<Option<Webinar>, RepositoryError>;

    /// Перезаписать сохранённое состояние вебинара с тем же id.
    async fn update(&self, webinar: &Webinar) -> Result<(), RepositoryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Мьютекс in-memory хранилища отравлен паникой в другом потоке
    #[error("poisoned store: {0}")]
    Poisoned(String),

    #[error("webinar {0} is not stored")]
    MissingRow(String),

    #[error("webinar {0} already exists")]
    Duplicate(String),
}
