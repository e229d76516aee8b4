//! Eskimi request builder and response interpreter.
//!
//! # Design
//! `EskimiAdapter` holds only its configuration and carries no mutable state
//! between calls. `build_requests` produces an `HttpRequest` plus the
//! `Correlation` for that auction; `parse_response` consumes the host's
//! `HttpResponse` together with that correlation. The host executes the HTTP
//! round-trip in between.

use std::collections::HashSet;

use serde_json::Value;
use tracing::{debug, warn};

use crate::config::AdapterConfig;
use crate::correlation::Correlation;
use crate::enrich::{append_site_device, is_truthy};
use crate::error::{AdapterError, Result};
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::openrtb::{
    AuctionRequest, Banner, BidResponse, EskimiImpExt, Format, Imp, ImpExt, PrebidExt, Regs,
    RegsExt, RequestExt, Targeting, User, UserExt, AUCTION_TYPE_SECOND_PRICE,
};
use crate::types::{BidRequest, BidderRequest, MediaType, ResultBid};

pub const BIDDER_CODE: &str = "eskimi";

pub const SUPPORTED_MEDIA_TYPES: &[MediaType] = &[MediaType::Banner];

/// Eskimi reports every bid as net revenue.
const NET_REVENUE: bool = true;

/// Output of `EskimiAdapter::build_requests`: the request for the host to
/// execute and the correlation to hand back with its response.
#[derive(Debug, Clone)]
pub struct BuiltRequest {
    pub request: HttpRequest,
    pub correlation: Correlation,
}

/// Synchronous, stateless adapter for the Eskimi exchange.
#[derive(Debug, Clone, Default)]
pub struct EskimiAdapter {
    config: AdapterConfig,
}

impl EskimiAdapter {
    pub fn new(config: AdapterConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &AdapterConfig {
        &self.config
    }

    /// A bid request is usable only when the publisher configured both a
    /// placement id and a site id.
    pub fn is_bid_request_valid(&self, bid: &BidRequest) -> bool {
        let present = |v: &Option<Value>| v.as_ref().is_some_and(is_truthy);
        let valid = present(&bid.params.placement_id) && present(&bid.params.site_id);
        if !valid {
            debug!(
                bidder = BIDDER_CODE,
                ad_unit = %bid.ad_unit_code,
                bid_id = %bid.bid_id,
                "rejecting bid request without placementId/siteId"
            );
        }
        valid
    }

    /// Map a batch of bid requests from one auction into the exchange's
    /// auction payload.
    pub fn build_auction_request(
        &self,
        bids: &[BidRequest],
        bidder_request: &BidderRequest,
    ) -> Result<(AuctionRequest, Correlation)> {
        let first = bids
            .first()
            .ok_or_else(|| AdapterError::InvalidBatch("no bid requests".to_string()))?;
        if bidder_request.auction_id.is_empty() {
            return Err(AdapterError::InvalidBatch("missing auction id".to_string()));
        }

        let mut correlation = Correlation::new(bidder_request.auction_id.clone());
        let mut seen = HashSet::with_capacity(bids.len());
        let mut imp = Vec::with_capacity(bids.len());
        for bid in bids {
            if !seen.insert(bid.ad_unit_code.as_str()) {
                return Err(AdapterError::InvalidBatch(format!(
                    "duplicate ad unit code {}",
                    bid.ad_unit_code
                )));
            }
            imp.push(construct_impression(bid)?);
            correlation.insert(bid.ad_unit_code.clone(), bid.bid_id.clone());
        }

        let mut request = AuctionRequest {
            id: bidder_request.auction_id.clone(),
            imp,
            test: u8::from(self.config.debug),
            ext: RequestExt {
                prebid: PrebidExt {
                    auctiontimestamp: first.auction_start.or(bidder_request.auction_start),
                    targeting: Targeting::default(),
                },
            },
            site: None,
            device: None,
            regs: None,
            user: None,
        };

        let page_url = bidder_request
            .referer_info
            .as_ref()
            .and_then(|info| info.referer.as_deref());
        append_site_device(Some(&mut request), page_url, &self.config);

        if let Some(consent) = &bidder_request.gdpr_consent {
            request.regs = Some(Regs {
                ext: RegsExt {
                    gdpr: u8::from(consent.gdpr_applies),
                },
            });
            request.user = Some(User {
                ext: UserExt {
                    consent: consent.consent_string.clone(),
                },
            });
        }

        Ok((request, correlation))
    }

    pub fn build_requests(
        &self,
        bids: &[BidRequest],
        bidder_request: &BidderRequest,
    ) -> Result<BuiltRequest> {
        let (payload, correlation) = self.build_auction_request(bids, bidder_request)?;
        let body =
            serde_json::to_string(&payload).map_err(|e| AdapterError::Serialization(e.to_string()))?;
        debug!(
            bidder = BIDDER_CODE,
            auction_id = %payload.id,
            impressions = payload.imp.len(),
            test = payload.test,
            "built auction request"
        );
        Ok(BuiltRequest {
            request: HttpRequest {
                method: HttpMethod::Post,
                url: self.config.endpoint.clone(),
                headers: vec![("content-type".to_string(), "application/json".to_string())],
                body: Some(body),
                with_credentials: false,
            },
            correlation,
        })
    }

    /// Decode the exchange's HTTP response and interpret it. A 204 or an
    /// empty body is a no-bid.
    pub fn parse_response(
        &self,
        response: HttpResponse,
        correlation: &Correlation,
    ) -> Result<Vec<ResultBid>> {
        match response.status {
            204 => return Ok(Vec::new()),
            200 => {}
            status => {
                return Err(AdapterError::Http {
                    status,
                    body: response.body,
                })
            }
        }
        if response.body.trim().is_empty() {
            return Ok(Vec::new());
        }
        let body: BidResponse = serde_json::from_str(&response.body)
            .map_err(|e| AdapterError::Deserialization(e.to_string()))?;
        Ok(self.interpret_response(&body, correlation))
    }

    /// Flatten every seat bid into host bids, in seat order then bid order.
    ///
    /// Bids that fail to decode, or whose `impid` is unknown to `correlation`,
    /// are skipped and logged; the remaining bids are still returned.
    pub fn interpret_response(
        &self,
        response: &BidResponse,
        correlation: &Correlation,
    ) -> Vec<ResultBid> {
        let auction_id = match response.id.as_deref() {
            Some(id) if !id.is_empty() => id,
            _ => return Vec::new(),
        };
        if response.seatbid.is_empty() {
            return Vec::new();
        }
        if auction_id != correlation.auction_id() {
            warn!(
                bidder = BIDDER_CODE,
                response_auction_id = %auction_id,
                expected_auction_id = %correlation.auction_id(),
                "auction id mismatch in bid response"
            );
        }

        let currency = response
            .cur
            .as_deref()
            .filter(|cur| !cur.is_empty())
            .unwrap_or(self.config.currency.as_str());

        let mut bids = Vec::new();
        for decoded in response.seatbid.iter().flat_map(|seat| seat.bids()) {
            let bid = match decoded {
                Ok(bid) => bid,
                Err(e) => {
                    warn!(
                        bidder = BIDDER_CODE,
                        auction_id = %auction_id,
                        error = %e,
                        "skipping malformed bid"
                    );
                    continue;
                }
            };
            let Some(request_id) = correlation.bid_id(&bid.impid) else {
                warn!(
                    bidder = BIDDER_CODE,
                    auction_id = %auction_id,
                    impid = %bid.impid,
                    "skipping bid for unknown impression"
                );
                continue;
            };
            bids.push(ResultBid {
                request_id: request_id.to_string(),
                cpm: bid.price,
                currency: currency.to_string(),
                width: bid.w,
                height: bid.h,
                ad: bid.adm,
                ttl: bid.ttl.filter(|ttl| *ttl > 0).unwrap_or(self.config.ttl),
                creative_id: bid.crid,
                net_revenue: NET_REVENUE,
            });
        }
        debug!(bidder = BIDDER_CODE, auction_id = %auction_id, bids = bids.len(), "interpreted bid response");
        bids
    }
}

fn construct_impression(bid: &BidRequest) -> Result<Imp> {
    let sizes = match bid.sizes.as_deref() {
        Some(sizes) if !sizes.is_empty() => sizes,
        _ => {
            return Err(AdapterError::InvalidBatch(format!(
                "ad unit {} has no sizes",
                bid.ad_unit_code
            )))
        }
    };
    Ok(Imp {
        id: bid.ad_unit_code.clone(),
        banner: Banner {
            format: sizes.iter().map(|[w, h]| Format { w: *w, h: *h }).collect(),
        },
        ext: ImpExt {
            eskimi: EskimiImpExt {
                placement_id: bid.params.placement_id.clone().unwrap_or(Value::Null),
                site_id: bid.params.site_id.clone().unwrap_or(Value::Null),
                at: AUCTION_TYPE_SECOND_PRICE,
            },
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Viewport;
    use crate::openrtb::{Bid, SeatBid};
    use crate::types::{BidParams, GdprConsent, RefererInfo};
    use serde_json::json;

    fn adapter() -> EskimiAdapter {
        EskimiAdapter::default()
    }

    fn bid_request(code: &str, bid_id: &str) -> BidRequest {
        BidRequest {
            ad_unit_code: code.to_string(),
            bid_id: bid_id.to_string(),
            params: BidParams {
                placement_id: Some(json!("p1")),
                site_id: Some(json!("s1")),
            },
            sizes: Some(vec![[300, 250]]),
            auction_start: Some(1000),
        }
    }

    fn bidder_request(auction_id: &str) -> BidderRequest {
        BidderRequest {
            auction_id: auction_id.to_string(),
            auction_start: Some(1000),
            ..BidderRequest::default()
        }
    }

    fn body_json(built: &BuiltRequest) -> Value {
        serde_json::from_str(built.request.body.as_deref().unwrap()).unwrap()
    }

    fn server_bid(impid: &str, price: f64) -> Value {
        serde_json::to_value(Bid {
            impid: impid.to_string(),
            price,
            adm: Some("<html/>".to_string()),
            crid: Some("c1".to_string()),
            w: Some(300),
            h: Some(250),
            ..Bid::default()
        })
        .unwrap()
    }

    #[test]
    fn validity_requires_placement_and_site() {
        let a = adapter();
        let mut bid = bid_request("div1", "b1");
        assert!(a.is_bid_request_valid(&bid));

        bid.params.site_id = None;
        assert!(!a.is_bid_request_valid(&bid));

        bid.params.site_id = Some(json!("s1"));
        bid.params.placement_id = Some(json!(""));
        assert!(!a.is_bid_request_valid(&bid));

        bid.params.placement_id = Some(json!(0));
        assert!(!a.is_bid_request_valid(&bid));

        bid.params.placement_id = Some(json!(612));
        assert!(a.is_bid_request_valid(&bid));

        bid.params = BidParams::default();
        assert!(!a.is_bid_request_valid(&bid));
    }

    #[test]
    fn build_produces_expected_payload() {
        let built = adapter()
            .build_requests(&[bid_request("div1", "b1")], &bidder_request("a1"))
            .unwrap();
        assert_eq!(built.request.method, HttpMethod::Post);
        assert_eq!(built.request.url, crate::config::ENDPOINT);
        assert!(!built.request.with_credentials);
        assert_eq!(
            built.request.headers,
            vec![("content-type".to_string(), "application/json".to_string())]
        );

        let body = body_json(&built);
        assert_eq!(body["id"], "a1");
        assert_eq!(body["test"], 0);
        assert_eq!(
            body["imp"],
            json!([{
                "id": "div1",
                "banner": {"format": [{"w": 300, "h": 250}]},
                "ext": {"eskimi": {"placementId": "p1", "siteId": "s1", "at": 2}}
            }])
        );
        assert_eq!(body["ext"]["prebid"]["auctiontimestamp"], 1000);
        assert_eq!(body["ext"]["prebid"]["targeting"]["includewinners"], true);
        assert_eq!(body["ext"]["prebid"]["targeting"]["includebidderkeys"], false);
        assert_eq!(built.correlation.bid_id("div1"), Some("b1"));
    }

    #[test]
    fn impressions_follow_input_order() {
        let bids = vec![
            bid_request("div3", "b3"),
            bid_request("div1", "b1"),
            bid_request("div2", "b2"),
        ];
        let (payload, correlation) = adapter()
            .build_auction_request(&bids, &bidder_request("a1"))
            .unwrap();
        let ids: Vec<&str> = payload.imp.iter().map(|imp| imp.id.as_str()).collect();
        assert_eq!(ids, ["div3", "div1", "div2"]);
        assert_eq!(correlation.len(), 3);
    }

    #[test]
    fn all_sizes_become_formats() {
        let mut bid = bid_request("div1", "b1");
        bid.sizes = Some(vec![[300, 250], [728, 90]]);
        let (payload, _) = adapter()
            .build_auction_request(&[bid], &bidder_request("a1"))
            .unwrap();
        assert_eq!(
            payload.imp[0].banner.format,
            vec![Format { w: 300, h: 250 }, Format { w: 728, h: 90 }]
        );
    }

    #[test]
    fn auction_timestamp_comes_from_first_bid() {
        let mut first = bid_request("div1", "b1");
        first.auction_start = Some(2000);
        let mut second = bid_request("div2", "b2");
        second.auction_start = Some(3000);
        let (payload, _) = adapter()
            .build_auction_request(&[first.clone(), second], &bidder_request("a1"))
            .unwrap();
        assert_eq!(payload.ext.prebid.auctiontimestamp, Some(2000));

        first.auction_start = None;
        let (payload, _) = adapter()
            .build_auction_request(&[first], &bidder_request("a1"))
            .unwrap();
        assert_eq!(payload.ext.prebid.auctiontimestamp, Some(1000));
    }

    #[test]
    fn unknown_auction_start_leaves_timestamp_out() {
        let mut bid = bid_request("div1", "b1");
        bid.auction_start = None;
        let context = BidderRequest {
            auction_id: "a1".to_string(),
            ..BidderRequest::default()
        };
        let built = adapter().build_requests(&[bid], &context).unwrap();
        let body = body_json(&built);
        let prebid = body["ext"]["prebid"].as_object().unwrap();
        assert!(!prebid.contains_key("auctiontimestamp"));
        assert!(prebid.contains_key("targeting"));
    }

    #[test]
    fn test_flag_follows_debug_config() {
        let debug = EskimiAdapter::new(AdapterConfig {
            debug: true,
            ..AdapterConfig::default()
        })
        .unwrap();
        let (payload, _) = debug
            .build_auction_request(&[bid_request("div1", "b1")], &bidder_request("a1"))
            .unwrap();
        assert_eq!(payload.test, 1);

        let (payload, _) = adapter()
            .build_auction_request(&[bid_request("div1", "b1")], &bidder_request("a1"))
            .unwrap();
        assert_eq!(payload.test, 0);
    }

    #[test]
    fn gdpr_consent_sets_regs_and_user() {
        let mut context = bidder_request("a1");
        context.gdpr_consent = Some(GdprConsent {
            gdpr_applies: true,
            consent_string: Some("BOJ/P2HOJ/P2HABABMAAAAAZ+A==".to_string()),
        });
        let body = body_json(
            &adapter()
                .build_requests(&[bid_request("div1", "b1")], &context)
                .unwrap(),
        );
        assert_eq!(body["regs"], json!({"ext": {"gdpr": 1}}));
        assert_eq!(body["user"], json!({"ext": {"consent": "BOJ/P2HOJ/P2HABABMAAAAAZ+A=="}}));

        context.gdpr_consent = Some(GdprConsent {
            gdpr_applies: false,
            consent_string: Some("abc".to_string()),
        });
        let body = body_json(
            &adapter()
                .build_requests(&[bid_request("div1", "b1")], &context)
                .unwrap(),
        );
        assert_eq!(body["regs"]["ext"]["gdpr"], 0);
        assert_eq!(body["user"]["ext"]["consent"], "abc");
    }

    #[test]
    fn no_gdpr_consent_omits_regs_and_user() {
        let body = body_json(
            &adapter()
                .build_requests(&[bid_request("div1", "b1")], &bidder_request("a1"))
                .unwrap(),
        );
        let object = body.as_object().unwrap();
        assert!(!object.contains_key("regs"));
        assert!(!object.contains_key("user"));
    }

    #[test]
    fn referer_becomes_site_page() {
        let adapter = EskimiAdapter::new(AdapterConfig {
            viewport: Some(Viewport { width: 800, height: 600 }),
            ..AdapterConfig::default()
        })
        .unwrap();
        let mut context = bidder_request("a1");
        context.referer_info = Some(RefererInfo {
            referer: Some("https://news.example/article".to_string()),
        });
        let body = body_json(&adapter.build_requests(&[bid_request("div1", "b1")], &context).unwrap());
        assert_eq!(body["site"]["page"], "https://news.example/article");
        assert_eq!(body["site"]["publisher"]["id"], 1);
        assert_eq!(body["device"], json!({"w": 800, "h": 600}));
    }

    #[test]
    fn empty_batch_is_rejected() {
        let err = adapter().build_requests(&[], &bidder_request("a1")).unwrap_err();
        assert!(matches!(err, AdapterError::InvalidBatch(_)));
    }

    #[test]
    fn missing_auction_id_is_rejected() {
        let err = adapter()
            .build_requests(&[bid_request("div1", "b1")], &bidder_request(""))
            .unwrap_err();
        assert!(matches!(err, AdapterError::InvalidBatch(_)));
    }

    #[test]
    fn missing_or_empty_sizes_are_rejected() {
        let mut bid = bid_request("div1", "b1");
        bid.sizes = None;
        let err = adapter().build_requests(&[bid.clone()], &bidder_request("a1")).unwrap_err();
        assert!(matches!(err, AdapterError::InvalidBatch(msg) if msg.contains("div1")));

        bid.sizes = Some(Vec::new());
        let err = adapter().build_requests(&[bid], &bidder_request("a1")).unwrap_err();
        assert!(matches!(err, AdapterError::InvalidBatch(_)));
    }

    #[test]
    fn duplicate_ad_unit_is_rejected() {
        let err = adapter()
            .build_requests(
                &[bid_request("div1", "b1"), bid_request("div1", "b2")],
                &bidder_request("a1"),
            )
            .unwrap_err();
        assert!(matches!(err, AdapterError::InvalidBatch(msg) if msg.contains("duplicate")));
    }

    #[test]
    fn interpret_maps_single_bid() {
        let mut correlation = Correlation::new("a1");
        correlation.insert("div1", "b1");
        let response = BidResponse {
            id: Some("a1".to_string()),
            cur: Some("EUR".to_string()),
            seatbid: vec![SeatBid {
                seat: None,
                bid: vec![server_bid("div1", 1.5)],
            }],
        };
        let bids = adapter().interpret_response(&response, &correlation);
        assert_eq!(
            bids,
            vec![ResultBid {
                request_id: "b1".to_string(),
                cpm: 1.5,
                currency: "EUR".to_string(),
                width: Some(300),
                height: Some(250),
                ad: Some("<html/>".to_string()),
                ttl: 30,
                creative_id: Some("c1".to_string()),
                net_revenue: true,
            }]
        );
    }

    #[test]
    fn interpret_flattens_seats_in_order() {
        let mut correlation = Correlation::new("a1");
        correlation.insert("div1", "b1");
        correlation.insert("div2", "b2");
        correlation.insert("div3", "b3");
        let mut with_ttl = server_bid("div2", 2.0);
        with_ttl["ttl"] = json!(120);
        let response = BidResponse {
            id: Some("a1".to_string()),
            cur: None,
            seatbid: vec![
                SeatBid {
                    seat: Some("eskimi".to_string()),
                    bid: vec![server_bid("div1", 1.0), with_ttl],
                },
                SeatBid {
                    seat: None,
                    bid: vec![server_bid("div3", 3.0)],
                },
            ],
        };
        let bids = adapter().interpret_response(&response, &correlation);
        let ids: Vec<&str> = bids.iter().map(|b| b.request_id.as_str()).collect();
        assert_eq!(ids, ["b1", "b2", "b3"]);
        assert!(bids.iter().all(|b| b.currency == "USD" && b.net_revenue));
        assert_eq!(bids[0].ttl, 30);
        assert_eq!(bids[1].ttl, 120);
    }

    #[test]
    fn interpret_without_auction_id_or_seats_is_empty() {
        let mut correlation = Correlation::new("a1");
        correlation.insert("div1", "b1");
        let no_id = BidResponse {
            id: None,
            cur: None,
            seatbid: vec![SeatBid {
                seat: None,
                bid: vec![server_bid("div1", 1.0)],
            }],
        };
        assert!(adapter().interpret_response(&no_id, &correlation).is_empty());

        let no_seats = BidResponse {
            id: Some("a1".to_string()),
            ..BidResponse::default()
        };
        assert!(adapter().interpret_response(&no_seats, &correlation).is_empty());
    }

    #[test]
    fn unmatched_bid_is_skipped() {
        let mut correlation = Correlation::new("a1");
        correlation.insert("div1", "b1");
        let response = BidResponse {
            id: Some("a1".to_string()),
            cur: None,
            seatbid: vec![SeatBid {
                seat: None,
                bid: vec![server_bid("unknown", 9.0), server_bid("div1", 1.0)],
            }],
        };
        let bids = adapter().interpret_response(&response, &correlation);
        assert_eq!(bids.len(), 1);
        assert_eq!(bids[0].request_id, "b1");
    }

    #[test]
    fn malformed_bid_does_not_drop_the_others() {
        let mut correlation = Correlation::new("a1");
        correlation.insert("div1", "b1");
        correlation.insert("div2", "b2");
        let mut negative_ttl = server_bid("div2", 2.0);
        negative_ttl["ttl"] = json!(-1);
        let mut no_price = server_bid("div2", 2.0);
        no_price.as_object_mut().unwrap().remove("price");
        let response = BidResponse {
            id: Some("a1".to_string()),
            cur: None,
            seatbid: vec![SeatBid {
                seat: None,
                bid: vec![
                    server_bid("div1", 1.0),
                    negative_ttl,
                    no_price,
                    json!({"impid": "div2", "price": "2.0"}),
                    json!({"impid": 2, "price": 2.0}),
                ],
            }],
        };
        let bids = adapter().interpret_response(&response, &correlation);
        assert_eq!(bids.len(), 1);
        assert_eq!(bids[0].request_id, "b1");
        assert_eq!(bids[0].cpm, 1.0);
    }

    #[test]
    fn parse_response_keeps_good_bids_next_to_malformed_ones() {
        let mut correlation = Correlation::new("a1");
        correlation.insert("div1", "b1");
        correlation.insert("div2", "b2");
        let response = HttpResponse {
            status: 200,
            headers: Vec::new(),
            body: r#"{"id":"a1","seatbid":[{"bid":[
                {"impid":"div1","price":1.5,"adm":"<div/>","crid":"c1","w":300,"h":250},
                {"impid":"div2","price":2.0,"adm":"<div/>","crid":"c2","w":300,"h":250,"ttl":-1}
            ]}]}"#
                .to_string(),
        };
        let bids = adapter().parse_response(response, &correlation).unwrap();
        assert_eq!(bids.len(), 1);
        assert_eq!(bids[0].request_id, "b1");
    }

    #[test]
    fn overlapping_auctions_keep_their_own_correlation() {
        let a = adapter();
        let first = a
            .build_requests(&[bid_request("div1", "first-bid")], &bidder_request("a1"))
            .unwrap();
        let second = a
            .build_requests(&[bid_request("div1", "second-bid")], &bidder_request("a2"))
            .unwrap();

        let response = |auction: &str| BidResponse {
            id: Some(auction.to_string()),
            cur: None,
            seatbid: vec![SeatBid {
                seat: None,
                bid: vec![server_bid("div1", 1.0)],
            }],
        };
        let bids = a.interpret_response(&response("a1"), &first.correlation);
        assert_eq!(bids[0].request_id, "first-bid");
        let bids = a.interpret_response(&response("a2"), &second.correlation);
        assert_eq!(bids[0].request_id, "second-bid");
    }

    #[test]
    fn parse_response_handles_statuses() {
        let mut correlation = Correlation::new("a1");
        correlation.insert("div1", "b1");
        let response = |status: u16, body: &str| HttpResponse {
            status,
            headers: Vec::new(),
            body: body.to_string(),
        };

        let bids = adapter()
            .parse_response(
                response(
                    200,
                    r#"{"id":"a1","seatbid":[{"bid":[{"impid":"div1","price":0.8,"adm":"<div/>","crid":"c9","w":300,"h":250,"ttl":60}]}]}"#,
                ),
                &correlation,
            )
            .unwrap();
        assert_eq!(bids.len(), 1);
        assert_eq!(bids[0].ttl, 60);

        assert!(adapter().parse_response(response(204, ""), &correlation).unwrap().is_empty());
        assert!(adapter().parse_response(response(200, ""), &correlation).unwrap().is_empty());

        let err = adapter()
            .parse_response(response(500, "internal error"), &correlation)
            .unwrap_err();
        assert!(matches!(err, AdapterError::Http { status: 500, .. }));

        let err = adapter()
            .parse_response(response(200, "not json"), &correlation)
            .unwrap_err();
        assert!(matches!(err, AdapterError::Deserialization(_)));
    }

    #[test]
    fn new_rejects_invalid_config() {
        let err = EskimiAdapter::new(AdapterConfig {
            endpoint: String::new(),
            ..AdapterConfig::default()
        })
        .unwrap_err();
        assert!(matches!(err, AdapterError::Config(_)));
    }
}
