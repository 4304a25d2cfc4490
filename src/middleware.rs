//! Panic recovery: the single cross-cutting error boundary. Any panic escaping
//! a handler becomes a fixed generic JSON response.

use std::any::Any;

use axum::body::Body;
use axum::http::{header, Response, StatusCode};
use tower_http::catch_panic::CatchPanicLayer;

use crate::response::error_body;

type PanicResponder = fn(Box<dyn Any + Send + 'static>) -> Response<Body>;

/// Layer the router once, outermost, so every route is covered.
pub fn recovery_layer() -> CatchPanicLayer<PanicResponder> {
    CatchPanicLayer::custom(handle_panic as PanicResponder)
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response<Body> {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic"
    };
    tracing::error!(panic = %detail, "request handler panicked");

    // Status 404 with an "Internal server error" message reproduces the
    // long-standing behavior clients already depend on.
    Response::builder()
        .status(StatusCode::NOT_FOUND)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(error_body("Internal server error").to_string()))
        .unwrap_or_else(|_| Response::new(Body::empty()))
}
