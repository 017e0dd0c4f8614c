//! Request correlation
//!
//! Every dashboard request carries a [`RequestId`]. A caller that already has
//! one (a proxy, or the page retrying a callback) can pass it in
//! `X-Request-ID`; otherwise a UUID v4 is minted. The id is stored in the
//! request extensions, attached to a `dashboard_request` span together with
//! the endpoint class, and returned in the response headers.

use actix_service::{Service, Transform};
use actix_web::{
    Error, HttpMessage,
    dev::{ServiceRequest, ServiceResponse},
    http::header::{HeaderName, HeaderValue},
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use std::fmt;
use std::rc::Rc;
use std::task::{Context, Poll};
use tracing::{Instrument, info_span};
use uuid::Uuid;

use super::timing::classify_endpoint;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

const MAX_INCOMING_ID_LEN: usize = 64;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequestId(pub String);

impl RequestId {
    /// Reuse the caller's id when it is acceptable, otherwise mint one
    fn resolve(req: &ServiceRequest) -> Self {
        let incoming = req
            .headers()
            .get(REQUEST_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .and_then(sanitize_incoming);
        RequestId(incoming.unwrap_or_else(|| Uuid::new_v4().to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Only short ids made of ASCII letters, digits, `-` and `_` are trusted
fn sanitize_incoming(value: &str) -> Option<String> {
    let trimmed = value.trim();
    let acceptable = !trimmed.is_empty()
        && trimmed.len() <= MAX_INCOMING_ID_LEN
        && trimmed
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    acceptable.then(|| trimmed.to_string())
}

#[derive(Clone, Default)]
pub struct RequestIdMiddleware;

impl<S, B> Transform<S, ServiceRequest> for RequestIdMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = RequestIdService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequestIdService {
            inner: Rc::new(service),
        }))
    }
}

pub struct RequestIdService<S> {
    inner: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for RequestIdService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let inner = Rc::clone(&self.inner);
        let id = RequestId::resolve(&req);

        let span = info_span!(
            "dashboard_request",
            request_id = %id,
            endpoint = classify_endpoint(req.path()),
            method = %req.method(),
            path = %req.path(),
        );
        let header_value = HeaderValue::from_str(id.as_str()).ok();
        req.extensions_mut().insert(id);

        Box::pin(
            async move {
                let mut response = inner.call(req).await?;
                if let Some(value) = header_value {
                    response
                        .headers_mut()
                        .insert(HeaderName::from_static(REQUEST_ID_HEADER), value);
                }
                Ok(response)
            }
            .instrument(span),
        )
    }
}
