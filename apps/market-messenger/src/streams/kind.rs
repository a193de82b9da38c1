//! Stream kinds and the updates they carry.

use std::fmt;

use serde::Serialize;

use crate::grpc::proto::dalalstreet::api::{
    DataStreamType, MarketDepthUpdate, MarketEventUpdate, StockExchangeUpdate, StockPricesUpdate,
};

/// A data stream the server can push.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case", tag = "stream")]
pub enum StreamKind {
    /// Prices of all stocks.
    StockPrices,
    /// Stocks held by the exchange.
    StockExchange,
    /// News-like market events.
    MarketEvents,
    /// Order book of a single stock.
    MarketDepth {
        /// Stock the depth stream is for.
        stock_id: u32,
    },
}

impl StreamKind {
    /// Protocol enum sent in `SubscribeRequest`.
    #[must_use]
    pub const fn data_stream_type(self) -> DataStreamType {
        match self {
            Self::StockPrices => DataStreamType::StockPrices,
            Self::StockExchange => DataStreamType::StockExchange,
            Self::MarketEvents => DataStreamType::MarketEvents,
            Self::MarketDepth { .. } => DataStreamType::MarketDepth,
        }
    }

    /// `data_stream_id` sent in `SubscribeRequest`: the stock id for depth
    /// streams, empty otherwise.
    #[must_use]
    pub fn data_stream_id(self) -> String {
        match self {
            Self::MarketDepth { stock_id } => stock_id.to_string(),
            _ => String::new(),
        }
    }

    /// Streams a bot listens to after login: the three market-wide streams
    /// followed by one depth stream per stock, in ascending stock id order.
    #[must_use]
    pub fn defaults_for(stock_ids: impl IntoIterator<Item = u32>) -> Vec<Self> {
        let mut depth: Vec<Self> = stock_ids
            .into_iter()
            .map(|stock_id| Self::MarketDepth { stock_id })
            .collect();
        depth.sort_unstable();
        depth.dedup();

        let mut kinds = vec![Self::StockPrices, Self::StockExchange, Self::MarketEvents];
        kinds.extend(depth);
        kinds
    }
}

impl fmt::Display for StreamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StockPrices => f.write_str("stock_prices"),
            Self::StockExchange => f.write_str("stock_exchange"),
            Self::MarketEvents => f.write_str("market_events"),
            Self::MarketDepth { stock_id } => write!(f, "market_depth[{stock_id}]"),
        }
    }
}

/// One update received on any stream.
#[derive(Debug, Clone, PartialEq)]
pub enum MarketUpdate {
    /// From the stock prices stream.
    StockPrices(StockPricesUpdate),
    /// From the stock exchange stream.
    StockExchange(StockExchangeUpdate),
    /// From a market depth stream.
    MarketDepth(MarketDepthUpdate),
    /// From the market events stream.
    MarketEvent(MarketEventUpdate),
}

impl MarketUpdate {
    /// Name of the stream family the update came from.
    #[must_use]
    pub const fn stream_name(&self) -> &'static str {
        match self {
            Self::StockPrices(_) => "stock_prices",
            Self::StockExchange(_) => "stock_exchange",
            Self::MarketDepth(_) => "market_depth",
            Self::MarketEvent(_) => "market_events",
        }
    }
}
