//! Market Data Streams
//!
//! Every stream is opened in two steps: `Subscribe` returns a subscription
//! id for a [`StreamKind`], then the matching server-streaming RPC is called
//! with that id. [`StreamListener`] runs any number of streams concurrently
//! and feeds their updates into [`MarketState`](crate::state::MarketState).

mod kind;
mod listener;

pub use kind::{MarketUpdate, StreamKind};
pub use listener::{StreamEnd, StreamListener, StreamOutcome};
