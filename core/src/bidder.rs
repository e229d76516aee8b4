//! The contract a header-bidding host expects from every bid adapter.

use crate::adapter::{BuiltRequest, EskimiAdapter, BIDDER_CODE, SUPPORTED_MEDIA_TYPES};
use crate::correlation::Correlation;
use crate::error::Result;
use crate::http::HttpResponse;
use crate::types::{BidRequest, BidderRequest, MediaType, ResultBid};

/// Operations a host registers for one bidder.
pub trait BidAdapter: Send + Sync {
    fn code(&self) -> &'static str;

    fn supported_media_types(&self) -> &'static [MediaType];

    fn is_bid_request_valid(&self, bid: &BidRequest) -> bool;

    fn build_requests(&self, bids: &[BidRequest], bidder_request: &BidderRequest) -> Result<BuiltRequest>;

    fn interpret_response(&self, response: HttpResponse, correlation: &Correlation) -> Result<Vec<ResultBid>>;

    /// Keep only the bid requests that pass `is_bid_request_valid`, in order.
    fn valid_requests(&self, bids: &[BidRequest]) -> Vec<BidRequest> {
        bids.iter()
            .filter(|bid| self.is_bid_request_valid(bid))
            .cloned()
            .collect()
    }
}

impl BidAdapter for EskimiAdapter {
    fn code(&self) -> &'static str {
        BIDDER_CODE
    }

    fn supported_media_types(&self) -> &'static [MediaType] {
        SUPPORTED_MEDIA_TYPES
    }

    fn is_bid_request_valid(&self, bid: &BidRequest) -> bool {
        EskimiAdapter::is_bid_request_valid(self, bid)
    }

    fn build_requests(&self, bids: &[BidRequest], bidder_request: &BidderRequest) -> Result<BuiltRequest> {
        EskimiAdapter::build_requests(self, bids, bidder_request)
    }

    fn interpret_response(&self, response: HttpResponse, correlation: &Correlation) -> Result<Vec<ResultBid>> {
        self.parse_response(response, correlation)
    }
}
