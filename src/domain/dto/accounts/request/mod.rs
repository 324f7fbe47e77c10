pub mod register_request;
pub mod login_request;
pub mod oauth_request;
pub mod profile_request;

pub use register_request::{RegisterRequest, RegistrationInput, MIN_PASSWORD_LENGTH};
pub use login_request::{LoginInput, LoginRequest};
pub use oauth_request::OAuthCallbackQuery;
pub use profile_request::{ChangePasswordRequest, PasswordChangeInput, ProfileUpdateInput, UpdateProfileRequest};
