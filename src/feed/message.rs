//! Feed message decoding.
//!
//! Messages arrive as a JSON envelope around one market transaction:
//!
//! ```text
//! {"type": "marketquote", "version": "0.1",
//!  "message": {"buyPrice": 0.0, "sellPrice": 2845.0, "demand": 4509,
//!              "stationStock": 0, "itemName": "uranium",
//!              "stationName": "Asellus Primus (BEAGLE 2 LANDING)",
//!              "categoryName": "metals", "timestamp": "2014-08-22T19:21:38+00:00"}}
//! ```
//!
//! Live frames are zlib-compressed; replay files hold one envelope per line.
//! Anything malformed is rejected here, so the store only sees valid quotes.

use std::io::Read;

use flate2::read::ZlibDecoder;
use serde::Deserialize;

use crate::error::FeedError;
use crate::types::{price, Quote};

/// The only message type carrying market data
pub const MARKET_QUOTE: &str = "marketquote";

/// Envelope around a transaction.
#[derive(Debug, Clone, Deserialize)]
pub struct FeedMessage {
    #[serde(rename = "type", default)]
    pub kind: Option<String>,

    #[serde(rename = "message")]
    pub transaction: Transaction,
}

/// A market transaction as published on the feed.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub item_name: Option<String>,
    pub station_name: Option<String>,
    pub buy_price: Option<f64>,
    pub sell_price: Option<f64>,
    #[serde(rename = "stationStock")]
    pub supply: Option<i64>,
    pub demand: Option<i64>,
    #[serde(default)]
    pub category_name: Option<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

fn required_name(value: Option<String>, field: &'static str) -> Result<String, FeedError> {
    match value {
        Some(name) if !name.trim().is_empty() => Ok(name.trim().to_string()),
        _ => Err(FeedError::MissingField(field)),
    }
}

fn required_price(value: Option<f64>, field: &'static str) -> Result<u64, FeedError> {
    let value = value.ok_or(FeedError::MissingField(field))?;
    price::from_f64(value).ok_or(FeedError::InvalidNumber { field, value })
}

fn required_quantity(value: Option<i64>, field: &'static str) -> Result<u64, FeedError> {
    let value = value.ok_or(FeedError::MissingField(field))?;
    u64::try_from(value).map_err(|_| FeedError::InvalidNumber {
        field,
        value: value as f64,
    })
}

impl TryFrom<Transaction> for Quote {
    type Error = FeedError;

    fn try_from(tx: Transaction) -> Result<Self, Self::Error> {
        Ok(Quote::new(
            required_name(tx.item_name, "itemName")?,
            required_name(tx.station_name, "stationName")?,
            required_price(tx.buy_price, "buyPrice")?,
            required_price(tx.sell_price, "sellPrice")?,
            required_quantity(tx.supply, "stationStock")?,
            required_quantity(tx.demand, "demand")?,
        ))
    }
}

impl FeedMessage {
    /// Validate the envelope and convert its transaction into a quote
    pub fn into_quote(self) -> Result<Quote, FeedError> {
        match self.kind.as_deref() {
            None | Some(MARKET_QUOTE) => Quote::try_from(self.transaction),
            Some(other) => Err(FeedError::UnsupportedType(other.to_string())),
        }
    }
}

/// Decode one uncompressed JSON message
pub fn decode_message(bytes: &[u8]) -> Result<Quote, FeedError> {
    let message: FeedMessage = serde_json::from_slice(bytes)?;
    message.into_quote()
}

/// Decode one zlib-compressed frame as received from the live feed
pub fn decode_frame(frame: &[u8]) -> Result<Quote, FeedError> {
    let mut json = Vec::with_capacity(frame.len() * 4);
    ZlibDecoder::new(frame).read_to_end(&mut json)?;
    decode_message(&json)
}

// ============================================================================
// Unit Tests
// ============================================================================
