//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 서비스는 [`AccountStore`](accounts::AccountStore) trait에만 의존하고,
//! 운영 환경에서는 MongoDB 구현([`AccountRepository`](accounts::AccountRepository))이 주입됩니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::accounts::AccountRepository;
//!
//! let repository = AccountRepository::new(&database);
//! repository.create_indexes().await?;
//! let account = repository.find_by_email("user@example.com").await?;
//! ```

pub mod accounts;
