pub mod change_seats;

pub use change_seats::{ChangeSeats, ChangeSeatsError, ChangeSeatsRequest};

/// Категория отказа, по которой транспортный слой выбирает код ответа.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    Forbidden,
    Validation,
    Storage,
}
