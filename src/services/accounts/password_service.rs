//! 비밀번호 해싱
//!
//! bcrypt는 해시마다 고유 솔트를 생성하므로 같은 비밀번호도 매번 다른 다이제스트가 됩니다.
//! cost는 환경별 설정([`PasswordConfig`](crate::config::PasswordConfig))에서 주입됩니다.

use log::{info, warn};
use crate::errors::{AppResult, ErrorContext};

#[derive(Debug, Clone)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// 평문 비밀번호를 단방향 해시로 변환합니다.
    pub fn hash(&self, plain: &str) -> AppResult<String> {
        let hash_start = std::time::Instant::now();
        let digest = bcrypt::hash(plain, self.cost)
            .context("비밀번호 해싱 실패")?;

        info!("Password hashing took: {:?}", hash_start.elapsed());
        Ok(digest)
    }

    /// 평문이 저장된 다이제스트와 일치하는지 확인합니다.
    ///
    /// 손상된 다이제스트는 불일치로 취급합니다.
    pub fn verify(&self, plain: &str, digest: &str) -> bool {
        match bcrypt::verify(plain, digest) {
            Ok(matches) => matches,
            Err(e) => {
                warn!("저장된 비밀번호 해시를 검증할 수 없습니다: {}", e);
                false
            }
        }
    }
}
