//! `#[repr(C)]` types for the FFI boundary.
//!
//! # Design
//! Each type mirrors a core type but uses C-compatible representations:
//! `*mut c_char` instead of `String`, boxed slices handed out as pointer plus
//! length instead of `Vec`, and enums with explicit discriminants. Conversion
//! functions live here to keep `lib.rs` focused on the `extern "C"` surface.

use std::ffi::CString;
use std::os::raw::c_char;

use eskimi_core::{AdapterError, HttpMethod, HttpRequest, ResultBid};

/// Opaque handle to an `EskimiAdapter`.
pub struct FfiAdapter {
    pub(crate) inner: eskimi_core::EskimiAdapter,
}

/// Opaque handle to the correlation of one built auction. Returned inside
/// `FfiBuildResult` and passed back to `eskimi_parse_response`.
pub struct FfiCorrelation {
    pub(crate) inner: eskimi_core::Correlation,
}

/// Copy `s` into a heap C string. Interior NULs yield an empty string.
pub(crate) fn to_c_string(s: impl Into<Vec<u8>>) -> *mut c_char {
    CString::new(s).unwrap_or_default().into_raw()
}

fn to_nullable_c_string(s: Option<String>) -> *mut c_char {
    s.map_or(std::ptr::null_mut(), |s| to_c_string(s))
}

/// Free a C string produced by `to_c_string`. Null is ignored.
pub(crate) fn free_c_string(s: *mut c_char) {
    if !s.is_null() {
        drop(unsafe { CString::from_raw(s) });
    }
}

/// Hand a vector to C as pointer + length. Empty vectors become null.
fn into_raw_slice<T>(items: Vec<T>) -> (*mut T, u32) {
    if items.is_empty() {
        return (std::ptr::null_mut(), 0);
    }
    let len = items.len() as u32;
    let ptr = Box::into_raw(items.into_boxed_slice()) as *mut T;
    (ptr, len)
}

/// Take back a slice created by `into_raw_slice`.
pub(crate) unsafe fn from_raw_slice<T>(ptr: *mut T, len: u32) -> Vec<T> {
    if ptr.is_null() || len == 0 {
        return Vec::new();
    }
    unsafe { Box::from_raw(std::ptr::slice_from_raw_parts_mut(ptr, len as usize)) }.into_vec()
}

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// HTTP method as a C enum. `eskimi_build_requests` only ever yields
/// `Post`; `Get` keeps the discriminants aligned with `HttpMethod`.
#[repr(C)]
pub enum FfiHttpMethod {
    Get = 0,
    Post = 1,
}

impl From<HttpMethod> for FfiHttpMethod {
    fn from(m: HttpMethod) -> Self {
        match m {
            HttpMethod::Get => FfiHttpMethod::Get,
            HttpMethod::Post => FfiHttpMethod::Post,
        }
    }
}

/// A single HTTP header as a key-value pair of C strings.
#[repr(C)]
pub struct FfiHeader {
    pub key: *mut c_char,
    pub value: *mut c_char,
}

/// The auction request for the C caller to execute.
#[repr(C)]
pub struct FfiHttpRequest {
    pub method: FfiHttpMethod,
    pub url: *mut c_char,
    pub headers: *mut FfiHeader,
    pub headers_len: u32,
    pub body: *mut c_char,
    pub with_credentials: bool,
}

impl FfiHttpRequest {
    pub(crate) fn from_core(req: HttpRequest) -> *mut Self {
        let headers: Vec<FfiHeader> = req
            .headers
            .into_iter()
            .map(|(k, v)| FfiHeader {
                key: to_c_string(k),
                value: to_c_string(v),
            })
            .collect();
        let (headers, headers_len) = into_raw_slice(headers);
        Box::into_raw(Box::new(FfiHttpRequest {
            method: req.method.into(),
            url: to_c_string(req.url),
            headers,
            headers_len,
            body: to_nullable_c_string(req.body),
            with_credentials: req.with_credentials,
        }))
    }

    /// Release every string the request owns (but not the struct itself).
    pub(crate) fn free_fields(&self) {
        free_c_string(self.url);
        free_c_string(self.body);
        for header in unsafe { from_raw_slice(self.headers, self.headers_len) } {
            free_c_string(header.key);
            free_c_string(header.value);
        }
    }
}

// ---------------------------------------------------------------------------
// Response input (caller-provided, not heap-allocated by us)
// ---------------------------------------------------------------------------

/// An HTTP response described as C-compatible plain data.
///
/// The C caller constructs this after executing the auction request and
/// passes a pointer to `eskimi_parse_response`. The FFI layer reads but does
/// not free these fields.
#[repr(C)]
pub struct FfiHttpResponse {
    pub status: u16,
    pub body: *const c_char,
}

// ---------------------------------------------------------------------------
// Result types
// ---------------------------------------------------------------------------

/// Error codes returned in `FfiBuildResult` and `FfiBidResult`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FfiErrorCode {
    Ok = 0,
    Config = 1,
    InvalidBatch = 2,
    Http = 3,
    Deserialization = 4,
    Serialization = 5,
    InvalidJson = 6,
    Panic = 7,
    NullArg = 8,
}

impl FfiErrorCode {
    fn from_error(err: &AdapterError) -> (Self, u16) {
        match err {
            AdapterError::Config(_) => (FfiErrorCode::Config, 0),
            AdapterError::InvalidBatch(_) => (FfiErrorCode::InvalidBatch, 0),
            AdapterError::Http { status, .. } => (FfiErrorCode::Http, *status),
            AdapterError::Deserialization(_) => (FfiErrorCode::Deserialization, 0),
            AdapterError::Serialization(_) => (FfiErrorCode::Serialization, 0),
        }
    }
}

/// Result envelope of `eskimi_build_requests`.
///
/// On success `request` and `correlation` are set and `error_message` is
/// null. On failure both pointers are null.
#[repr(C)]
pub struct FfiBuildResult {
    pub error_code: FfiErrorCode,
    pub error_message: *mut c_char,
    pub request: *mut FfiHttpRequest,
    pub correlation: *mut FfiCorrelation,
}

impl FfiBuildResult {
    pub(crate) fn ok(built: eskimi_core::BuiltRequest) -> *mut Self {
        Box::into_raw(Box::new(FfiBuildResult {
            error_code: FfiErrorCode::Ok,
            error_message: std::ptr::null_mut(),
            request: FfiHttpRequest::from_core(built.request),
            correlation: Box::into_raw(Box::new(FfiCorrelation {
                inner: built.correlation,
            })),
        }))
    }

    pub(crate) fn error(code: FfiErrorCode, msg: &str) -> *mut Self {
        Box::into_raw(Box::new(FfiBuildResult {
            error_code: code,
            error_message: to_c_string(msg),
            request: std::ptr::null_mut(),
            correlation: std::ptr::null_mut(),
        }))
    }

    pub(crate) fn from_error(err: AdapterError) -> *mut Self {
        let (code, _) = FfiErrorCode::from_error(&err);
        Self::error(code, &err.to_string())
    }
}

/// One bid exposed to C. Missing dimensions are `0`, missing markup and
/// creative id are null.
#[repr(C)]
pub struct FfiBid {
    pub request_id: *mut c_char,
    pub cpm: f64,
    pub currency: *mut c_char,
    pub width: u32,
    pub height: u32,
    pub ad: *mut c_char,
    pub ttl: u32,
    pub creative_id: *mut c_char,
    pub net_revenue: bool,
}

impl From<ResultBid> for FfiBid {
    fn from(bid: ResultBid) -> Self {
        FfiBid {
            request_id: to_c_string(bid.request_id),
            cpm: bid.cpm,
            currency: to_c_string(bid.currency),
            width: bid.width.unwrap_or(0),
            height: bid.height.unwrap_or(0),
            ad: to_nullable_c_string(bid.ad),
            ttl: bid.ttl,
            creative_id: to_nullable_c_string(bid.creative_id),
            net_revenue: bid.net_revenue,
        }
    }
}

impl FfiBid {
    pub(crate) fn free_fields(&self) {
        free_c_string(self.request_id);
        free_c_string(self.currency);
        free_c_string(self.ad);
        free_c_string(self.creative_id);
    }
}

/// Result envelope of `eskimi_parse_response`.
#[repr(C)]
pub struct FfiBidResult {
    pub error_code: FfiErrorCode,
    pub error_message: *mut c_char,
    pub http_status: u16,
    pub bids: *mut FfiBid,
    pub bids_len: u32,
}

impl FfiBidResult {
    pub(crate) fn ok(bids: Vec<ResultBid>) -> *mut Self {
        let (bids, bids_len) = into_raw_slice(bids.into_iter().map(FfiBid::from).collect());
        Box::into_raw(Box::new(FfiBidResult {
            error_code: FfiErrorCode::Ok,
            error_message: std::ptr::null_mut(),
            http_status: 0,
            bids,
            bids_len,
        }))
    }

    pub(crate) fn error(code: FfiErrorCode, http_status: u16, msg: &str) -> *mut Self {
        Box::into_raw(Box::new(FfiBidResult {
            error_code: code,
            error_message: to_c_string(msg),
            http_status,
            bids: std::ptr::null_mut(),
            bids_len: 0,
        }))
    }

    pub(crate) fn from_error(err: AdapterError) -> *mut Self {
        let (code, status) = FfiErrorCode::from_error(&err);
        Self::error(code, status, &err.to_string())
    }
}
