//! Request routing dispatch module
//!
//! Entry point for HTTP request processing: access logging, route lookup
//! and dispatch to the registered handler.

use crate::http;
use crate::logger;
use crate::server::Server;
use http_body_util::Full;
use hyper::body::{Body as _, Bytes};
use hyper::{Method, Request, Response};
use std::collections::HashMap;
use std::convert::Infallible;
use std::sync::Arc;

/// Request context passed to route handlers
pub struct RequestContext<'a> {
    pub method: &'a Method,
    pub path: &'a str,
}

/// A route handler maps a request to a response
pub type HandlerFn = fn(&RequestContext<'_>) -> Response<Full<Bytes>>;

/// Exact-path request router
#[derive(Default)]
pub struct Router {
    routes: HashMap<String, HandlerFn>,
}

impl Router {
    pub fn new() -> Self {
        Self {
            routes: HashMap::new(),
        }
    }

    /// Register a handler for an exact path
    pub fn handle(&mut self, path: &str, handler: HandlerFn) {
        self.routes.insert(path.to_string(), handler);
    }

    /// Dispatch a request to its handler, 404 when no route matches
    pub fn dispatch(&self, ctx: &RequestContext<'_>) -> Response<Full<Bytes>> {
        match self.routes.get(ctx.path) {
            Some(handler) => handler(ctx),
            None => http::build_404_response(),
        }
    }
}

/// Main entry point for HTTP request handling
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    server: Arc<Server>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let method = req.method();
    let uri = req.uri();
    logger::log_request(method, uri, req.version());

    let ctx = RequestContext {
        method,
        path: uri.path(),
    };

    let response = server.router().dispatch(&ctx);

    let size = response.body().size_hint().exact().unwrap_or(0);
    logger::log_response(response.status().as_u16(), size);

    Ok(response)
}
