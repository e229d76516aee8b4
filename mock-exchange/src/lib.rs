//! In-process stand-in for the Eskimi auction endpoint.
//!
//! Answers every impression with a fixed-price banner bid, except impressions
//! whose placement id is `"nobid"`. Each auction payload is recorded so tests
//! can inspect exactly what the adapter sent.

use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::{net::TcpListener, sync::RwLock};
use tracing::info;
use uuid::Uuid;

/// Price of every bid the mock exchange returns.
pub const CLEARING_PRICE: f64 = 1.25;

/// Placement id that makes the exchange pass on an impression.
pub const NO_BID_PLACEMENT: &str = "nobid";

#[derive(Debug, Clone, Deserialize)]
pub struct AuctionRequest {
    pub id: String,
    pub imp: Vec<Imp>,
    #[serde(default)]
    pub test: u8,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Imp {
    pub id: String,
    pub banner: Banner,
    #[serde(default)]
    pub ext: Value,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Banner {
    pub format: Vec<Format>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Format {
    pub w: u32,
    pub h: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BidResponse {
    pub id: String,
    pub cur: String,
    pub seatbid: Vec<SeatBid>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeatBid {
    pub seat: String,
    pub bid: Vec<Bid>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bid {
    pub id: Uuid,
    pub impid: String,
    pub price: f64,
    pub adm: String,
    pub crid: String,
    pub w: u32,
    pub h: u32,
}

/// Raw auction payloads keyed by auction id.
pub type Db = Arc<RwLock<HashMap<String, Value>>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(HashMap::new()));
    Router::new()
        .route("/openrtb2/auction", post(auction))
        .route("/auctions/{id}", get(get_auction))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

fn placement_id(imp: &Imp) -> Option<&str> {
    imp.ext.pointer("/eskimi/placementId").and_then(Value::as_str)
}

/// Bid on every impression that has a size and is not a no-bid placement.
pub fn respond(request: &AuctionRequest) -> Option<BidResponse> {
    let bids: Vec<Bid> = request
        .imp
        .iter()
        .filter(|imp| placement_id(imp) != Some(NO_BID_PLACEMENT))
        .filter_map(|imp| {
            let format = imp.banner.format.first()?;
            Some(Bid {
                id: Uuid::new_v4(),
                impid: imp.id.clone(),
                price: CLEARING_PRICE,
                adm: format!(
                    "<div data-placement=\"{}\"></div>",
                    placement_id(imp).unwrap_or_default()
                ),
                crid: format!("crid-{}", imp.id),
                w: format.w,
                h: format.h,
            })
        })
        .collect();
    if bids.is_empty() {
        return None;
    }
    Some(BidResponse {
        id: request.id.clone(),
        cur: "USD".to_string(),
        seatbid: vec![SeatBid {
            seat: "eskimi".to_string(),
            bid: bids,
        }],
    })
}

async fn auction(State(db): State<Db>, Json(raw): Json<Value>) -> Response {
    let request: AuctionRequest = match serde_json::from_value(raw.clone()) {
        Ok(request) => request,
        Err(e) => return (StatusCode::BAD_REQUEST, e.to_string()).into_response(),
    };
    db.write().await.insert(request.id.clone(), raw);

    match respond(&request) {
        Some(response) => {
            info!(auction_id = %request.id, bids = response.seatbid[0].bid.len(), test = request.test, "served auction");
            Json(response).into_response()
        }
        None => {
            info!(auction_id = %request.id, "no bid");
            StatusCode::NO_CONTENT.into_response()
        }
    }
}

async fn get_auction(
    State(db): State<Db>,
    Path(id): Path<String>,
) -> Result<Json<Value>, StatusCode> {
    let auctions = db.read().await;
    auctions.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}
