//! 공통 유틸리티 함수 모듈
//!
//! 애플리케이션 전체에서 사용되는 공통 유틸리티 함수들을 제공합니다.
//!
//! # Modules
//!
//! - [`string_utils`] - 문자열 정리, 이메일 로컬 파트, 문자 단위 자르기
//! - [`validation`] - 이메일 형식 검사, 검증 에러 메시지 선택

pub mod string_utils;
pub mod validation;
