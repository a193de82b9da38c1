#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::cast_possible_truncation,
        clippy::too_many_lines,
        clippy::panic
    )
)]

//! Market Messenger - Dalal Street Bot Client
//!
//! A client for the Dalal Street trading-simulation gRPC server. It logs in
//! as a bot, listens to the server's push streams and issues trade actions.
//! Matching, pricing and risk all live on the server; this crate only
//! forwards calls and keeps a local copy of the streamed market data.
//!
//! # Modules
//!
//! - `grpc`: Generated protocol stubs and response helpers
//! - `client`: Bot-authenticated action and stream calls
//! - `streams`: Subscriptions and concurrent stream listeners
//! - `state`: Latest market data received from the streams
//! - `messenger`: Login-then-listen flow
//! - `report`: Serializable action results
//! - `config`: Environment-based configuration
//! - `telemetry`: Logging and optional OTLP export
//! - `cli`: Command line interface
//!
//! # Data Flow
//!
//! ```text
//!                  Subscribe ──► subscription id
//!                                     │
//! Dalal Street ── GetStockPricesUpdates ──┐
//!   server     ── GetStockExchangeUpdates ─┤    ┌─────────────┐
//!              ── GetMarketEventUpdates ───┼───►│ MarketState │
//!              ── GetMarketDepthUpdates ───┘    └─────────────┘
//!                      (one per stock)
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cli;
pub mod client;
pub mod config;
pub mod grpc;
pub mod messenger;
pub mod report;
pub mod state;
pub mod streams;
pub mod telemetry;

// =============================================================================
// Re-exports
// =============================================================================

pub use client::{BotAuth, ClientError, DalalClient};
pub use config::{ConfigError, MessengerConfig, ServerSettings, TlsSettings};
pub use grpc::{ActionResponse, proto::dalalstreet::api as proto};
pub use messenger::MarketMessenger;
pub use report::ActionReport;
pub use state::{MarketSnapshot, MarketState};
pub use streams::{MarketUpdate, StreamEnd, StreamKind, StreamListener, StreamOutcome};
pub use telemetry::{TelemetryConfig, TelemetryGuard, init as init_telemetry};
