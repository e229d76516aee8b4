//! OpenRTB wire types exchanged with the Eskimi auction endpoint.
//!
//! # Design
//! Only the subset of OpenRTB 2.x the exchange reads or returns is modelled.
//! `site` and `device` stay as raw JSON objects because publishers configure
//! them freely and the adapter forwards them verbatim, only filling gaps.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Auction type forwarded in every impression extension (second price).
pub const AUCTION_TYPE_SECOND_PRICE: u8 = 2;

/// Outbound auction request body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuctionRequest {
    pub id: String,
    pub imp: Vec<Imp>,
    pub test: u8,
    pub ext: RequestExt,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site: Option<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device: Option<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub regs: Option<Regs>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestExt {
    pub prebid: PrebidExt,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrebidExt {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auctiontimestamp: Option<i64>,
    pub targeting: Targeting,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Targeting {
    pub includewinners: bool,
    pub includebidderkeys: bool,
}

impl Default for Targeting {
    /// The exchange always expects winners included and bidder keys excluded.
    fn default() -> Self {
        Self {
            includewinners: true,
            includebidderkeys: false,
        }
    }
}

/// One impression per bid request; `id` is the ad unit code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Imp {
    pub id: String,
    pub banner: Banner,
    pub ext: ImpExt,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Banner {
    pub format: Vec<Format>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Format {
    pub w: u32,
    pub h: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImpExt {
    pub eskimi: EskimiImpExt,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EskimiImpExt {
    pub placement_id: Value,
    pub site_id: Value,
    pub at: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Regs {
    pub ext: RegsExt,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegsExt {
    pub gdpr: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub ext: UserExt,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserExt {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consent: Option<String>,
}

/// Auction response body returned by the exchange.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BidResponse {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub cur: Option<String>,
    #[serde(default)]
    pub seatbid: Vec<SeatBid>,
}

/// Bids are kept as raw JSON so each one is decoded on its own; a malformed
/// bid must not take the rest of the seat down with it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeatBid {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seat: Option<String>,
    #[serde(default)]
    pub bid: Vec<Value>,
}

impl SeatBid {
    /// Decode every bid of the seat, in order. Each item fails independently.
    pub fn bids(&self) -> impl Iterator<Item = serde_json::Result<Bid>> + '_ {
        self.bid.iter().map(Bid::deserialize)
    }
}

/// One decoded bid. `price` is required; a bid without one is malformed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Bid {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub impid: String,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adm: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub w: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub h: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u32>,
}
