//! Latest market data seen by the bot.
//!
//! Stream listeners apply every update here. The state is shared between
//! listeners; locks are held only for the duration of a single update and
//! never across an `.await`.

mod snapshot;

use std::collections::{BTreeMap, HashMap, VecDeque};

use parking_lot::RwLock;

use crate::grpc::proto::dalalstreet::api::{
    MarketDepthTrade, MarketDepthUpdate, MarketEvent, MarketEventUpdate, Stock,
    StockExchangeDataPoint, StockExchangeUpdate, StockPricesUpdate,
};
use crate::streams::MarketUpdate;

pub use snapshot::{DepthSnapshot, EventSnapshot, ExchangeSnapshot, MarketSnapshot, StockSnapshot};

/// Number of recent trades kept per stock.
pub const LATEST_TRADES_CAPACITY: usize = 20;

/// Order book of one stock, price → quantity on each side.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DepthBook {
    /// Ask side.
    pub asks: BTreeMap<u64, u64>,
    /// Bid side.
    pub bids: BTreeMap<u64, u64>,
    /// Most recent trades, oldest first.
    pub latest_trades: VecDeque<MarketDepthTrade>,
}

impl DepthBook {
    fn apply(&mut self, update: &MarketDepthUpdate) {
        if !update.ask_depth.is_empty() {
            self.asks = update.ask_depth.iter().map(|(p, q)| (*p, *q)).collect();
        }
        if !update.bid_depth.is_empty() {
            self.bids = update.bid_depth.iter().map(|(p, q)| (*p, *q)).collect();
        }

        merge_diff(&mut self.asks, &update.ask_depth_diff);
        merge_diff(&mut self.bids, &update.bid_depth_diff);

        for trade in &update.latest_trades {
            if self.latest_trades.len() == LATEST_TRADES_CAPACITY {
                self.latest_trades.pop_front();
            }
            self.latest_trades.push_back(trade.clone());
        }
    }
}

// A zero quantity clears the price level.
fn merge_diff(side: &mut BTreeMap<u64, u64>, diff: &HashMap<u64, u64>) {
    for (&price, &quantity) in diff {
        if quantity == 0 {
            side.remove(&price);
        } else {
            side.insert(price, quantity);
        }
    }
}

#[derive(Debug, Default)]
struct Inner {
    stocks: BTreeMap<u32, Stock>,
    latest_prices: BTreeMap<u32, u64>,
    exchange: BTreeMap<u32, StockExchangeDataPoint>,
    market_depths: BTreeMap<u32, DepthBook>,
    market_events: VecDeque<MarketEvent>,
    updates_received: BTreeMap<&'static str, u64>,
}

/// Shared copy of the latest market data.
#[derive(Debug)]
pub struct MarketState {
    inner: RwLock<Inner>,
    market_events_capacity: usize,
}

impl Default for MarketState {
    fn default() -> Self {
        Self::new(100)
    }
}

impl MarketState {
    /// Create empty state keeping at most `market_events_capacity` events.
    #[must_use]
    pub fn new(market_events_capacity: usize) -> Self {
        Self {
            inner: RwLock::new(Inner::default()),
            market_events_capacity,
        }
    }

    /// Seed the stock list, typically from the login response.
    pub fn set_stocks(&self, stocks: &HashMap<u32, Stock>) {
        let mut inner = self.inner.write();
        inner.stocks = stocks.iter().map(|(id, s)| (*id, s.clone())).collect();
        for (id, stock) in stocks {
            inner.latest_prices.insert(*id, stock.current_price);
        }
    }

    /// Ids of all known stocks in ascending order.
    #[must_use]
    pub fn stock_ids(&self) -> Vec<u32> {
        self.inner.read().stocks.keys().copied().collect()
    }

    /// Apply one stream update.
    pub fn apply(&self, update: &MarketUpdate) {
        let mut inner = self.inner.write();
        *inner.updates_received.entry(update.stream_name()).or_default() += 1;

        match update {
            MarketUpdate::StockPrices(prices) => apply_prices(&mut inner, prices),
            MarketUpdate::StockExchange(exchange) => apply_exchange(&mut inner, exchange),
            MarketUpdate::MarketDepth(depth) => inner
                .market_depths
                .entry(depth.stock_id)
                .or_default()
                .apply(depth),
            MarketUpdate::MarketEvent(event) => {
                apply_event(&mut inner, event, self.market_events_capacity);
            }
        }
    }

    /// Latest known price of a stock.
    #[must_use]
    pub fn latest_price(&self, stock_id: u32) -> Option<u64> {
        self.inner.read().latest_prices.get(&stock_id).copied()
    }

    /// Latest exchange figures of a stock.
    #[must_use]
    pub fn exchange(&self, stock_id: u32) -> Option<StockExchangeDataPoint> {
        self.inner.read().exchange.get(&stock_id).copied()
    }

    /// Order book of a stock.
    #[must_use]
    pub fn market_depth(&self, stock_id: u32) -> Option<DepthBook> {
        self.inner.read().market_depths.get(&stock_id).cloned()
    }

    /// Stored market events, oldest first.
    #[must_use]
    pub fn market_events(&self) -> Vec<MarketEvent> {
        self.inner.read().market_events.iter().cloned().collect()
    }

    /// Number of updates applied for a stream (`"stock_prices"`, ...).
    #[must_use]
    pub fn updates_received(&self, stream: &str) -> u64 {
        self.inner
            .read()
            .updates_received
            .get(stream)
            .copied()
            .unwrap_or(0)
    }

    /// Serializable copy of the whole state.
    #[must_use]
    pub fn snapshot(&self) -> MarketSnapshot {
        MarketSnapshot::from_state(&self.inner.read())
    }
}

fn apply_prices(inner: &mut Inner, update: &StockPricesUpdate) {
    for (&stock_id, &price) in &update.prices {
        inner.latest_prices.insert(stock_id, price);
        if let Some(stock) = inner.stocks.get_mut(&stock_id) {
            stock.current_price = price;
        }
    }
}

fn apply_exchange(inner: &mut Inner, update: &StockExchangeUpdate) {
    for (&stock_id, point) in &update.stocks_in_exchange {
        inner.exchange.insert(stock_id, *point);
        if let Some(stock) = inner.stocks.get_mut(&stock_id) {
            stock.stocks_in_exchange = point.stocks_in_exchange;
            stock.stocks_in_market = point.stocks_in_market;
        }
    }
}

fn apply_event(inner: &mut Inner, update: &MarketEventUpdate, capacity: usize) {
    let Some(event) = &update.market_event else {
        return;
    };
    if capacity == 0 {
        return;
    }
    while inner.market_events.len() >= capacity {
        inner.market_events.pop_front();
    }
    inner.market_events.push_back(event.clone());
}
