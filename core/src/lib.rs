//! Eskimi bid adapter for header-bidding hosts.
//!
//! # Overview
//! Translates a host's bid requests into the Eskimi exchange's OpenRTB
//! auction request and the exchange's auction response back into host bids.
//! The adapter never touches the network (host-does-IO pattern): it builds an
//! `HttpRequest`, the host executes it, and the resulting `HttpResponse` is
//! handed back for interpretation.
//!
//! # Design
//! - `EskimiAdapter` is immutable; everything it would read from ambient
//!   globals (debug flag, site/device overrides, viewport) lives in
//!   `AdapterConfig`.
//! - `build_requests` returns the request together with a `Correlation`, the
//!   per-auction map from impression id to bid id. The host passes it back to
//!   `parse_response`, so no state is shared between auctions.
//! - Host DTOs use the host's camelCase JSON names, wire types use OpenRTB
//!   names; the two are defined separately.

pub mod adapter;
pub mod bidder;
pub mod config;
pub mod correlation;
pub mod enrich;
pub mod error;
pub mod http;
pub mod openrtb;
pub mod types;

pub use adapter::{BuiltRequest, EskimiAdapter, BIDDER_CODE, SUPPORTED_MEDIA_TYPES};
pub use bidder::BidAdapter;
pub use config::{AdapterConfig, Viewport};
pub use correlation::Correlation;
pub use error::AdapterError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use openrtb::{AuctionRequest, BidResponse};
pub use types::{BidParams, BidRequest, BidderRequest, GdprConsent, MediaType, RefererInfo, ResultBid};
