pub mod account_response;

pub use account_response::{
    AccountMessageResponse, AccountResponse, LoginResponse, MessageResponse, RegisterResponse,
};
