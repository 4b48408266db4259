//! Greeting handler
//!
//! Serves the static greeting for the `/hello` route.

use crate::handler::router::RequestContext;
use crate::http;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;

/// Body returned by the greeting route
pub const GREETING: &str = "hello\n";

/// Respond to any request on the greeting route with 200 and the fixed text
pub fn hello(_ctx: &RequestContext<'_>) -> Response<Full<Bytes>> {
    http::build_text_response(GREETING)
}
