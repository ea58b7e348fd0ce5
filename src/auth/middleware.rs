//! Authentication middleware.
//!
//! `OptionalAuth` guards the task routes: a valid bearer token attaches
//! `Caller::User` to the request, anything else lets the request through as
//! `Caller::Anonymous`. `RequireAuth` is the strict variant that rejects
//! with 401 instead of degrading; no route in this service mounts it today,
//! but it is the drop-in guard for any endpoint that must not serve
//! anonymous traffic.

use actix_web::{
    body::EitherBody,
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    error::ResponseError,
    http::header::AUTHORIZATION,
    Error, HttpMessage,
};
use futures::future::{ready, LocalBoxFuture, Ready};

use crate::auth::Caller;
use crate::error::AppError;
use crate::services::AuthService;

/// Pulls the token out of a well-formed `Authorization: Bearer <token>`
/// header. Returns `None` when the header is missing or malformed.
fn bearer_token(req: &ServiceRequest) -> Option<String> {
    req.headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::to_owned)
}

pub struct OptionalAuth {
    auth: AuthService,
}

impl OptionalAuth {
    pub fn new(auth: AuthService) -> Self {
        Self { auth }
    }
}

impl<S, B> Transform<S, ServiceRequest> for OptionalAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = OptionalAuthService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(OptionalAuthService {
            service,
            auth: self.auth.clone(),
        }))
    }
}

pub struct OptionalAuthService<S> {
    service: S,
    auth: AuthService,
}

impl<S, B> Service<ServiceRequest> for OptionalAuthService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        if let Some(token) = bearer_token(&req) {
            match self.auth.validate_token(&token) {
                Ok(user_id) => {
                    req.extensions_mut().insert(Caller::User(user_id));
                }
                Err(err) => {
                    // Invalid token degrades to anonymous rather than 401.
                    log::debug!("ignoring invalid bearer token: {}", err);
                }
            }
        }
        Box::pin(self.service.call(req))
    }
}

pub struct RequireAuth {
    auth: AuthService,
}

impl RequireAuth {
    pub fn new(auth: AuthService) -> Self {
        Self { auth }
    }
}

impl<S, B> Transform<S, ServiceRequest> for RequireAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = RequireAuthService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequireAuthService {
            service,
            auth: self.auth.clone(),
        }))
    }
}

pub struct RequireAuthService<S> {
    service: S,
    auth: AuthService,
}

impl<S, B> Service<ServiceRequest> for RequireAuthService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        // Rejections are returned as ready 401 responses (rendered via
        // `AppError`'s `ResponseError` impl) rather than service errors so
        // the response is visible to callers of the wrapped service.
        if req.headers().get(AUTHORIZATION).is_none() {
            let err = AppError::Unauthorized("Missing token".into());
            let res = req.into_response(err.error_response()).map_into_right_body();
            return Box::pin(async move { Ok(res) });
        }

        let token = match bearer_token(&req) {
            Some(token) => token,
            None => {
                let err = AppError::Unauthorized("Invalid authorization header format".into());
                let res = req.into_response(err.error_response()).map_into_right_body();
                return Box::pin(async move { Ok(res) });
            }
        };

        match self.auth.validate_token(&token) {
            Ok(user_id) => {
                req.extensions_mut().insert(Caller::User(user_id));
                let fut = self.service.call(req);
                Box::pin(async move { Ok(fut.await?.map_into_left_body()) })
            }
            Err(_) => {
                let err = AppError::Unauthorized("Invalid or expired token".into());
                let res = req.into_response(err.error_response()).map_into_right_body();
                Box::pin(async move { Ok(res) })
            }
        }
    }
}
