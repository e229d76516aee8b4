//! HTTP transport types for the host-does-IO pattern.
//!
//! # Design
//! The adapter never touches the network. It describes the auction call as an
//! `HttpRequest` value and reads the exchange's answer from an `HttpResponse`
//! value; the host framework executes the round-trip in between.
//!
//! All fields use owned types so values can cross the FFI boundary without
//! lifetime concerns.

/// HTTP method for a request. Auctions are always `POST`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    /// Never produced by the adapter. Hosts and test harnesses that route
    /// their own calls (reading back a recorded auction, say) through the
    /// same request type use it.
    Get,
    Post,
}

/// An HTTP request described as plain data.
///
/// Built by `EskimiAdapter::build_requests`. `with_credentials` mirrors the
/// browser transport option: the exchange must not receive cookies.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
    pub with_credentials: bool,
}

/// An HTTP response described as plain data.
///
/// Constructed by the host after executing an `HttpRequest`, then passed to
/// `EskimiAdapter::parse_response`.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}
