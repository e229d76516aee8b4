//! Host-framework DTOs consumed and produced by the adapter.
//!
//! # Design
//! These types mirror the objects the header-bidding framework hands to every
//! bid adapter, using the framework's camelCase field names so a host can pass
//! its native objects through as JSON. Bidder params are kept as raw JSON
//! values because publishers configure them as either strings or numbers and
//! the exchange expects them forwarded unchanged.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Media types the adapter can declare support for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Banner,
}

/// Exchange-specific parameters attached to a bid request by the publisher.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BidParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placement_id: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site_id: Option<Value>,
}

/// One ad placement offered to the exchange.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BidRequest {
    pub ad_unit_code: String,
    pub bid_id: String,
    #[serde(default)]
    pub params: BidParams,
    /// Accepted `[width, height]` pairs. `None` when the host omitted them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sizes: Option<Vec<[u32; 2]>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auction_start: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefererInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub referer: Option<String>,
}

/// GDPR consent attached to an auction. The consent string is forwarded
/// verbatim; the adapter never parses it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GdprConsent {
    #[serde(default)]
    pub gdpr_applies: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consent_string: Option<String>,
}

/// Shared context for a batch of bid requests belonging to one auction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BidderRequest {
    pub auction_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auction_start: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub referer_info: Option<RefererInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gdpr_consent: Option<GdprConsent>,
}

/// A bid handed back to the host, matched to its originating bid request
/// through `request_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultBid {
    pub request_id: String,
    pub cpm: f64,
    pub currency: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub ad: Option<String>,
    pub ttl: u32,
    pub creative_id: Option<String>,
    pub net_revenue: bool,
}
