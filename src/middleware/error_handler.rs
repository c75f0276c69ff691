use actix_web::{
    body::MessageBody,
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    Error,
};
use futures_util::future::LocalBoxFuture;
use std::future::{ready, Ready};
use std::rc::Rc;

/// Logs failed requests: 5xx at error level, 4xx at warn level
pub struct ErrorLogger;

impl<S, B> Transform<S, ServiceRequest> for ErrorLogger
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: MessageBody + 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = ErrorLoggerMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(ErrorLoggerMiddleware {
            service: Rc::new(service),
        }))
    }
}

pub struct ErrorLoggerMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for ErrorLoggerMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: MessageBody + 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();

        Box::pin(async move {
            let method = req.method().clone();
            let path = req.path().to_string();
            let result = service.call(req).await;

            match &result {
                Ok(res) => {
                    let status = res.status();
                    let cause = res.response().error().map(|e| e.to_string());
                    if status.is_server_error() {
                        tracing::error!(%method, %path, %status, error = ?cause, "Request failed");
                    } else if status.is_client_error() {
                        tracing::warn!(%method, %path, %status, error = ?cause, "Request rejected");
                    }
                }
                Err(err) => {
                    tracing::error!(%method, %path, error = %err, "Request error");
                }
            }

            result
        })
    }
}
