//! 계정/인증 요청 및 응답 DTO

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;
