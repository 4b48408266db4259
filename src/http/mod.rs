//! HTTP protocol layer module
//!
//! Response building helpers, decoupled from routing and business logic.

pub mod response;

pub use response::{build_404_response, build_text_response};
