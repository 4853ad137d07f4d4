use serde::{Deserialize, Serialize};

/// Вызывающий пользователь. Аутентификации нет, доверяем переданному id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
}

impl User {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}
