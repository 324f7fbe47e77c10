//! # Domain Layer
//!
//! 엔티티, DTO, 도메인 모델을 정의합니다.

pub mod entities;
pub mod dto;
pub mod models;

