//! Adapter configuration.
//!
//! # Design
//! Everything the adapter would otherwise read from ambient globals (the
//! host's debug flag, publisher-level `site`/`device` overrides, the page
//! viewport) is injected here, so request building stays deterministic.
//! The host supplies the document as camelCase JSON; every field has a
//! default.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{AdapterError, Result};

/// Exchange auction endpoint.
pub const ENDPOINT: &str = "https://ssp.eskimi.com/openrtb2/auction?source=client";

/// Account id of the host integration at the exchange.
pub const DEFAULT_PUBLISHER_ID: u64 = 1;

pub const DEFAULT_CURRENCY: &str = "USD";

/// Seconds a returned bid stays valid when the exchange omits `ttl`.
pub const DEFAULT_BID_TTL: u32 = 30;

/// Dimensions of the page viewport the ad will render in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AdapterConfig {
    pub endpoint: String,
    /// Marks outgoing auctions as test traffic.
    pub debug: bool,
    pub site: Option<Map<String, Value>>,
    pub device: Option<Map<String, Value>>,
    pub viewport: Option<Viewport>,
    pub publisher_id: u64,
    pub currency: String,
    pub ttl: u32,
}

impl Default for AdapterConfig {
    fn default() -> Self {
        Self {
            endpoint: ENDPOINT.to_string(),
            debug: false,
            site: None,
            device: None,
            viewport: None,
            publisher_id: DEFAULT_PUBLISHER_ID,
            currency: DEFAULT_CURRENCY.to_string(),
            ttl: DEFAULT_BID_TTL,
        }
    }
}

impl AdapterConfig {
    /// Parse and validate a host-supplied configuration document.
    pub fn from_json(raw: &str) -> Result<Self> {
        let config: AdapterConfig =
            serde_json::from_str(raw).map_err(|e| AdapterError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.endpoint.trim().is_empty() {
            return Err(AdapterError::Config("endpoint must not be empty".to_string()));
        }
        if self.currency.trim().is_empty() {
            return Err(AdapterError::Config("currency must not be empty".to_string()));
        }
        if self.ttl == 0 {
            return Err(AdapterError::Config("ttl must be greater than zero".to_string()));
        }
        Ok(())
    }
}
