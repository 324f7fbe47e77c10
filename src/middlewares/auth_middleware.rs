//! 세션 토큰 인증 미들웨어
//!
//! 스코프에 `.wrap(AuthMiddleware::required())`로 적용하면 유효한 Bearer 토큰이 없는
//! 요청은 핸들러에 도달하기 전에 401로 거부되고, 통과한 요청에는
//! [`AuthenticatedUser`](crate::domain::models::auth::AuthenticatedUser)가 저장됩니다.

use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
};
use crate::middlewares::auth_inner::AuthMiddlewareService;

#[derive(Debug, Clone, Default)]
pub struct AuthMiddleware;

impl AuthMiddleware {
    pub fn required() -> Self {
        Self
    }
}

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
        }))
    }
}
