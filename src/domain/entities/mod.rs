//! # Domain Entities Module
//!
//! 저장소에 영속화되는 엔티티를 정의합니다.

pub mod accounts;

pub use accounts::*;
