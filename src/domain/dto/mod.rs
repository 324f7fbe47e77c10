//! # Data Transfer Objects (DTO) Module
//!
//! 엔드포인트별 요청/응답 타입을 정의합니다. 요청 타입은 검증을 거쳐
//! 타입이 정해진 입력 값(`RegistrationInput`, `LoginInput`)으로 변환됩니다.

pub mod accounts;

pub use accounts::*;
