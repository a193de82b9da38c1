//! Serializable view of [`MarketState`](super::MarketState).

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::Inner;

/// Point-in-time copy of the market state.
#[derive(Debug, Clone, Serialize)]
pub struct MarketSnapshot {
    /// When the snapshot was taken.
    pub taken_at: DateTime<Utc>,
    /// Known stocks by id.
    pub stocks: BTreeMap<u32, StockSnapshot>,
    /// Latest price by stock id.
    pub latest_prices: BTreeMap<u32, u64>,
    /// Exchange figures by stock id.
    pub exchange: BTreeMap<u32, ExchangeSnapshot>,
    /// Order books by stock id.
    pub market_depths: BTreeMap<u32, DepthSnapshot>,
    /// Stored market events, oldest first.
    pub market_events: Vec<EventSnapshot>,
    /// Updates applied per stream.
    pub updates_received: BTreeMap<String, u64>,
}

/// Stock summary.
#[derive(Debug, Clone, Serialize)]
pub struct StockSnapshot {
    /// Ticker.
    pub short_name: String,
    /// Company name.
    pub full_name: String,
    /// Latest price.
    pub current_price: u64,
    /// Shares still held by the exchange.
    pub stocks_in_exchange: u64,
    /// Shares held by players.
    pub stocks_in_market: u64,
}

/// Exchange figures of one stock.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ExchangeSnapshot {
    /// Exchange price.
    pub price: u64,
    /// Shares still held by the exchange.
    pub stocks_in_exchange: u64,
    /// Shares held by players.
    pub stocks_in_market: u64,
}

/// Order book of one stock.
#[derive(Debug, Clone, Serialize)]
pub struct DepthSnapshot {
    /// Ask side, price → quantity.
    pub asks: BTreeMap<u64, u64>,
    /// Bid side, price → quantity.
    pub bids: BTreeMap<u64, u64>,
    /// Price of the most recent trade.
    pub last_trade_price: Option<u64>,
}

/// Market event summary.
#[derive(Debug, Clone, Serialize)]
pub struct EventSnapshot {
    /// Event id.
    pub id: u32,
    /// Stock the event concerns, 0 for global events.
    pub stock_id: u32,
    /// Headline.
    pub headline: String,
    /// Whether the event affects the whole market.
    pub is_global: bool,
    /// Server timestamp.
    pub created_at: String,
}

impl MarketSnapshot {
    pub(super) fn from_state(inner: &Inner) -> Self {
        Self {
            taken_at: Utc::now(),
            stocks: inner
                .stocks
                .iter()
                .map(|(id, stock)| {
                    (
                        *id,
                        StockSnapshot {
                            short_name: stock.short_name.clone(),
                            full_name: stock.full_name.clone(),
                            current_price: stock.current_price,
                            stocks_in_exchange: stock.stocks_in_exchange,
                            stocks_in_market: stock.stocks_in_market,
                        },
                    )
                })
                .collect(),
            latest_prices: inner.latest_prices.clone(),
            exchange: inner
                .exchange
                .iter()
                .map(|(id, point)| {
                    (
                        *id,
                        ExchangeSnapshot {
                            price: point.price,
                            stocks_in_exchange: point.stocks_in_exchange,
                            stocks_in_market: point.stocks_in_market,
                        },
                    )
                })
                .collect(),
            market_depths: inner
                .market_depths
                .iter()
                .map(|(id, book)| {
                    (
                        *id,
                        DepthSnapshot {
                            asks: book.asks.clone(),
                            bids: book.bids.clone(),
                            last_trade_price: book.latest_trades.back().map(|t| t.trade_price),
                        },
                    )
                })
                .collect(),
            market_events: inner
                .market_events
                .iter()
                .map(|event| EventSnapshot {
                    id: event.id,
                    stock_id: event.stock_id,
                    headline: event.headline.clone(),
                    is_global: event.is_global,
                    created_at: event.created_at.clone(),
                })
                .collect(),
            updates_received: inner
                .updates_received
                .iter()
                .map(|(stream, count)| ((*stream).to_string(), *count))
                .collect(),
        }
    }
}
