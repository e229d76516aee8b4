//! Per-auction mapping from impression id back to the host's bid id.
//!
//! The request builder returns a `Correlation` next to the HTTP request; the
//! host hands it back when the matching response arrives. Keeping it as a
//! value scoped to one build call means concurrent auctions that reuse an ad
//! unit code never see each other's entries.

use std::collections::HashMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Correlation {
    auction_id: String,
    bid_ids: HashMap<String, String>,
}

impl Correlation {
    pub fn new(auction_id: impl Into<String>) -> Self {
        Self {
            auction_id: auction_id.into(),
            bid_ids: HashMap::new(),
        }
    }

    pub fn auction_id(&self) -> &str {
        &self.auction_id
    }

    /// Record the bid id behind `imp_id`. Returns the previous bid id when the
    /// impression id was already taken.
    pub fn insert(&mut self, imp_id: impl Into<String>, bid_id: impl Into<String>) -> Option<String> {
        self.bid_ids.insert(imp_id.into(), bid_id.into())
    }

    pub fn bid_id(&self, imp_id: &str) -> Option<&str> {
        self.bid_ids.get(imp_id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.bid_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bid_ids.is_empty()
    }
}
