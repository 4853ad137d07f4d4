pub mod user;
pub mod webinar;

pub use user::User;
pub use webinar::Webinar;
