use async_trait::async_trait;
use std::sync::{Arc, Mutex, PoisonError};

use super::{RepositoryError, WebinarRepository};
use crate::models::Webinar;

/// Вебинары в памяти процесса. Клоны разделяют одно хранилище.
#[derive(Clone, Debug, Default)]
pub struct InMemoryWebinarRepository {
    webinars: Arc<Mutex<Vec<Webinar>>>,
}

impl InMemoryWebinarRepository {
    pub fn new(webinars: Vec<Webinar>) -> Self {
        Self {
            webinars: Arc::new(Mutex::new(webinars)),
        }
    }

    /// Синхронный поиск для проверок в тестах.
    pub fn find_by_id_sync(&self, id: &str) -> Option<Webinar> {
        let webinars = self.webinars.lock().unwrap_or_else(PoisonError::into_inner);
        webinars.iter().find(|w| w.id == id).cloned()
    }
}

#[async_trait]
impl WebinarRepository for InMemoryWebinarRepository {
    async fn create(&self, webinar: &Webinar) -> Result<(), RepositoryError> {
        let mut webinars = self.webinars.lock()?;
        if webinars.iter().any(|w| w.id == webinar.id) {
            return Err(RepositoryError::Duplicate(webinar.id.clone()));
        }
        webinars.push(webinar.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Webinar>, RepositoryError> {
        let webinars = self.webinars.lock()?;
        Ok(webinars.iter().find(|w| w.id == id).cloned())
    }

    async fn update(&self, webinar: &Webinar) -> Result<(), RepositoryError> {
        let mut webinars = self.webinars.lock()?;
        let stored = webinars
            .iter_mut()
            .find(|w| w.id == webinar.id)
            .ok_or_else(|| RepositoryError::MissingRow(webinar.id.clone()))?;
        *stored = webinar.clone();
        Ok(())
    }
}

// PoisonError держит MutexGuard, который не Send: оставляем только текст
impl<T> From<PoisonError<T>> for RepositoryError {
    fn from(err: PoisonError<T>) -> Self {
        Self::Poisoned(err.to_string())
    }
}
