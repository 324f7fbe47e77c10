pub mod password_service;
pub mod account_service;

pub use password_service::PasswordHasher;
pub use account_service::{AccountService, PasswordUpdate, INVALID_CREDENTIALS};
