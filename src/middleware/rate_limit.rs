use actix_web::{
    body::{BoxBody, EitherBody},
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    Error, ResponseError,
};
use futures_util::future::LocalBoxFuture;
use governor::{
    clock::DefaultClock,
    state::{InMemoryState, NotKeyed},
    Quota, RateLimiter as GovernorRateLimiter,
};
use std::future::{ready, Ready};
use std::num::NonZeroU32;
use std::rc::Rc;
use std::sync::Arc;

use crate::core::AppError;

/// Paths never throttled
const EXEMPT_PATHS: [&str; 2] = ["/health", "/ready"];

/// Global request quota using governor, shared by all workers
#[derive(Clone)]
pub struct RateLimiter {
    limiter: Arc<GovernorRateLimiter<NotKeyed, InMemoryState, DefaultClock>>,
    requests_per_minute: u32,
}

impl RateLimiter {
    /// Create a new rate limiter with specified requests per minute.
    /// Zero is clamped to one; configuration validation rejects it earlier.
    pub fn new(requests_per_minute: u32) -> Self {
        let per_minute = NonZeroU32::new(requests_per_minute).unwrap_or(NonZeroU32::MIN);
        let limiter = Arc::new(GovernorRateLimiter::direct(Quota::per_minute(per_minute)));

        Self {
            limiter,
            requests_per_minute: per_minute.get(),
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for RateLimiter
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<BoxBody, B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RateLimiterMiddleware<S>;
    type Future = Ready<std::result::Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RateLimiterMiddleware {
            service: Rc::new(service),
            limiter: self.limiter.clone(),
            requests_per_minute: self.requests_per_minute,
        }))
    }
}

pub struct RateLimiterMiddleware<S> {
    service: Rc<S>,
    limiter: Arc<GovernorRateLimiter<NotKeyed, InMemoryState, DefaultClock>>,
    requests_per_minute: u32,
}

impl<S, B> Service<ServiceRequest> for RateLimiterMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<BoxBody, B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, std::result::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let svc = self.service.clone();
        let limiter = self.limiter.clone();
        let requests_per_minute = self.requests_per_minute;

        Box::pin(async move {
            if EXEMPT_PATHS.contains(&req.path()) || limiter.check().is_ok() {
                return svc.call(req).await.map(|res| res.map_into_right_body());
            }

            tracing::warn!(path = %req.path(), "Rate limit exceeded");
            let error = AppError::RateLimitExceeded(format!(
                "Maximum {} requests per minute",
                requests_per_minute
            ));
            let http_response = error.error_response();
            Ok(req.into_response(http_response).map_into_left_body())
        })
    }
}
