//! C-ABI wrapper around `eskimi-core`.
//!
//! # Overview
//! Exposes the bid adapter through `extern "C"` functions so a header-bidding
//! host written in any language with a C FFI can validate bid requests, build
//! the auction request and interpret the exchange's response. Host objects
//! (config, bid requests, bidder request) cross the boundary as JSON strings
//! using the host's own field names.
//!
//! # Design
//! - Every `extern "C"` function wraps its body in `catch_unwind` so panics
//!   never cross the FFI boundary.
//! - `eskimi_build_requests` returns the HTTP request together with an opaque
//!   correlation handle; the caller passes that handle to
//!   `eskimi_parse_response` and frees it with `eskimi_correlation_free`.
//! - The C caller owns all returned pointers and must call the matching
//!   `eskimi_*_free` function to release them.

pub mod types;

use std::ffi::CStr;
use std::os::raw::c_char;
use std::panic::catch_unwind;
use std::str::Utf8Error;

use eskimi_core::{
    AdapterConfig, AdapterError, BidRequest, BidderRequest, EskimiAdapter, HttpResponse,
};

use types::*;

/// Borrow a C string as `&str`. Null yields `Ok(None)`; non-UTF-8 input is an
/// error, never mistaken for a missing argument.
fn c_str<'a>(s: *const c_char) -> Result<Option<&'a str>, Utf8Error> {
    if s.is_null() {
        return Ok(None);
    }
    unsafe { CStr::from_ptr(s) }.to_str().map(Some)
}

/// Read a required JSON argument of `eskimi_build_requests`.
fn json_arg<'a>(s: *const c_char, name: &str) -> Result<&'a str, *mut FfiBuildResult> {
    match c_str(s) {
        Ok(Some(raw)) => Ok(raw),
        Ok(None) => Err(FfiBuildResult::error(
            FfiErrorCode::NullArg,
            &format!("null argument: {name}"),
        )),
        Err(e) => Err(FfiBuildResult::error(
            FfiErrorCode::InvalidJson,
            &format!("{name} is not valid UTF-8: {e}"),
        )),
    }
}

// ---------------------------------------------------------------------------
// Adapter lifecycle
// ---------------------------------------------------------------------------

/// Create an adapter from a JSON configuration document. A null config uses
/// the defaults.
///
/// Returns null if the configuration is invalid or an internal panic occurs.
/// The caller must free the returned pointer with `eskimi_adapter_free`.
#[unsafe(no_mangle)]
pub extern "C" fn eskimi_adapter_new(config_json: *const c_char) -> *mut FfiAdapter {
    catch_unwind(|| {
        let config = if config_json.is_null() {
            AdapterConfig::default()
        } else {
            let Ok(Some(raw)) = c_str(config_json) else {
                return std::ptr::null_mut();
            };
            match AdapterConfig::from_json(raw) {
                Ok(config) => config,
                Err(_) => return std::ptr::null_mut(),
            }
        };
        match EskimiAdapter::new(config) {
            Ok(adapter) => Box::into_raw(Box::new(FfiAdapter { inner: adapter })),
            Err(_) => std::ptr::null_mut(),
        }
    })
    .unwrap_or(std::ptr::null_mut())
}

/// Free an adapter created by `eskimi_adapter_new`. Safe to call with null.
#[unsafe(no_mangle)]
pub extern "C" fn eskimi_adapter_free(adapter: *mut FfiAdapter) {
    if !adapter.is_null() {
        let _ = catch_unwind(|| {
            drop(unsafe { Box::from_raw(adapter) });
        });
    }
}

/// Bidder code the host registers this adapter under. Static, do not free.
#[unsafe(no_mangle)]
pub extern "C" fn eskimi_bidder_code() -> *const c_char {
    c"eskimi".as_ptr()
}

// ---------------------------------------------------------------------------
// Operations
// ---------------------------------------------------------------------------

/// Check one JSON-encoded bid request. Returns false for null arguments,
/// undecodable JSON, or a bid without placement id and site id.
#[unsafe(no_mangle)]
pub extern "C" fn eskimi_is_bid_request_valid(
    adapter: *const FfiAdapter,
    bid_request_json: *const c_char,
) -> bool {
    catch_unwind(|| {
        if adapter.is_null() {
            return false;
        }
        let adapter = unsafe { &*adapter };
        let Ok(Some(raw)) = c_str(bid_request_json) else {
            return false;
        };
        match serde_json::from_str::<BidRequest>(raw) {
            Ok(bid) => adapter.inner.is_bid_request_valid(&bid),
            Err(_) => false,
        }
    })
    .unwrap_or(false)
}

/// Build the auction request for a JSON array of bid requests and a JSON
/// bidder request.
///
/// Always returns a result; inspect `error_code`. The caller must free it with
/// `eskimi_free_build_result` and, on success, the correlation with
/// `eskimi_correlation_free` once the response has been parsed.
#[unsafe(no_mangle)]
pub extern "C" fn eskimi_build_requests(
    adapter: *const FfiAdapter,
    bid_requests_json: *const c_char,
    bidder_request_json: *const c_char,
) -> *mut FfiBuildResult {
    catch_unwind(|| {
        if adapter.is_null() {
            return FfiBuildResult::error(FfiErrorCode::NullArg, "null argument: adapter");
        }
        let adapter = unsafe { &*adapter };
        let bids_raw = match json_arg(bid_requests_json, "bid_requests_json") {
            Ok(raw) => raw,
            Err(result) => return result,
        };
        let context_raw = match json_arg(bidder_request_json, "bidder_request_json") {
            Ok(raw) => raw,
            Err(result) => return result,
        };
        let bids: Vec<BidRequest> = match serde_json::from_str(bids_raw) {
            Ok(bids) => bids,
            Err(e) => return FfiBuildResult::error(FfiErrorCode::InvalidJson, &e.to_string()),
        };
        let context: BidderRequest = match serde_json::from_str(context_raw) {
            Ok(context) => context,
            Err(e) => return FfiBuildResult::error(FfiErrorCode::InvalidJson, &e.to_string()),
        };
        match adapter.inner.build_requests(&bids, &context) {
            Ok(built) => FfiBuildResult::ok(built),
            Err(e) => FfiBuildResult::from_error(e),
        }
    })
    .unwrap_or_else(|_| FfiBuildResult::error(FfiErrorCode::Panic, "panic in eskimi_build_requests"))
}

/// Convert an `FfiHttpResponse` to a core `HttpResponse`. Only a null body is
/// read as empty. A 200 body that is not UTF-8 cannot hold bids and is a
/// deserialization error; other statuses keep a lossy copy for the error
/// message.
fn ffi_response_to_core(resp: &FfiHttpResponse) -> Result<HttpResponse, AdapterError> {
    let body = if resp.body.is_null() {
        String::new()
    } else {
        let raw = unsafe { CStr::from_ptr(resp.body) };
        match raw.to_str() {
            Ok(body) => body.to_string(),
            Err(e) if resp.status == 200 => {
                return Err(AdapterError::Deserialization(format!(
                    "response body is not valid UTF-8: {e}"
                )))
            }
            Err(_) => raw.to_string_lossy().into_owned(),
        }
    };
    Ok(HttpResponse {
        status: resp.status,
        headers: Vec::new(),
        body,
    })
}

/// Interpret the exchange's response for the auction behind `correlation`.
///
/// Returns a result with `bids`/`bids_len` set on success.
#[unsafe(no_mangle)]
pub extern "C" fn eskimi_parse_response(
    adapter: *const FfiAdapter,
    correlation: *const FfiCorrelation,
    response: *const FfiHttpResponse,
) -> *mut FfiBidResult {
    catch_unwind(|| {
        if adapter.is_null() {
            return FfiBidResult::error(FfiErrorCode::NullArg, 0, "null argument: adapter");
        }
        if correlation.is_null() {
            return FfiBidResult::error(FfiErrorCode::NullArg, 0, "null argument: correlation");
        }
        if response.is_null() {
            return FfiBidResult::error(FfiErrorCode::NullArg, 0, "null argument: response");
        }
        let adapter = unsafe { &*adapter };
        let correlation = unsafe { &*correlation };
        let resp = match ffi_response_to_core(unsafe { &*response }) {
            Ok(resp) => resp,
            Err(e) => return FfiBidResult::from_error(e),
        };
        match adapter.inner.parse_response(resp, &correlation.inner) {
            Ok(bids) => FfiBidResult::ok(bids),
            Err(e) => FfiBidResult::from_error(e),
        }
    })
    .unwrap_or_else(|_| FfiBidResult::error(FfiErrorCode::Panic, 0, "panic in eskimi_parse_response"))
}

// ---------------------------------------------------------------------------
// Free functions
// ---------------------------------------------------------------------------

/// Free an `FfiBuildResult` and the request it carries. The correlation
/// handle is not freed here. Safe to call with null.
#[unsafe(no_mangle)]
pub extern "C" fn eskimi_free_build_result(result: *mut FfiBuildResult) {
    if result.is_null() {
        return;
    }
    let _ = catch_unwind(|| {
        let result = unsafe { Box::from_raw(result) };
        free_c_string(result.error_message);
        if !result.request.is_null() {
            let request = unsafe { Box::from_raw(result.request) };
            request.free_fields();
        }
    });
}

/// Free a correlation handle returned inside an `FfiBuildResult`. Safe to
/// call with null.
#[unsafe(no_mangle)]
pub extern "C" fn eskimi_correlation_free(correlation: *mut FfiCorrelation) {
    if !correlation.is_null() {
        let _ = catch_unwind(|| {
            drop(unsafe { Box::from_raw(correlation) });
        });
    }
}

/// Free an `FfiBidResult` returned by `eskimi_parse_response`. Safe to call
/// with null.
#[unsafe(no_mangle)]
pub extern "C" fn eskimi_free_bid_result(result: *mut FfiBidResult) {
    if result.is_null() {
        return;
    }
    let _ = catch_unwind(|| {
        let result = unsafe { Box::from_raw(result) };
        free_c_string(result.error_message);
        for bid in unsafe { from_raw_slice(result.bids, result.bids_len) } {
            bid.free_fields();
        }
    });
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
