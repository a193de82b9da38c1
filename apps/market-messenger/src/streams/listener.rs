//! Concurrent stream listeners.
//!
//! Each listener subscribes, opens its stream and consumes updates until the
//! server closes the stream, the stream fails, or shutdown is requested.
//! Listeners are independent: a failing stream is logged and ends only
//! itself. No retries are attempted. A listener that ends for any reason
//! other than the server closing the stream releases its subscription.

use std::fmt;
use std::future::Future;
use std::sync::Arc;

use futures::future::join_all;
use serde::Serialize;
use tokio_util::sync::CancellationToken;
use tonic::Streaming;

use crate::client::{ClientError, DalalClient};
use crate::grpc::proto::dalalstreet::api::{MarketDepthUpdate, SubscriptionId};
use crate::state::MarketState;

use super::kind::{MarketUpdate, StreamKind};

/// How a stream listener finished.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "reason", content = "error")]
pub enum StreamEnd {
    /// The server ended the stream.
    Closed,
    /// Shutdown was requested.
    Cancelled,
    /// Subscribing, opening or reading the stream failed.
    Failed(String),
}

/// Result of one stream listener.
#[derive(Debug, Clone, Serialize)]
pub struct StreamOutcome {
    /// Stream that was listened to.
    pub kind: StreamKind,
    /// Updates received before the stream ended.
    pub updates_received: u64,
    /// How the stream ended.
    pub end: StreamEnd,
}

impl fmt::Display for StreamOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} updates, ", self.kind, self.updates_received)?;
        match &self.end {
            StreamEnd::Closed => f.write_str("closed by server"),
            StreamEnd::Cancelled => f.write_str("cancelled"),
            StreamEnd::Failed(error) => write!(f, "failed: {error}"),
        }
    }
}

/// Runs stream listeners and applies their updates to shared state.
#[derive(Debug, Clone)]
pub struct StreamListener {
    client: DalalClient,
    state: Arc<MarketState>,
    shutdown: CancellationToken,
}

impl StreamListener {
    /// Create a listener feeding `state`, stopping when `shutdown` fires.
    #[must_use]
    pub const fn new(
        client: DalalClient,
        state: Arc<MarketState>,
        shutdown: CancellationToken,
    ) -> Self {
        Self {
            client,
            state,
            shutdown,
        }
    }

    /// State updates are applied to.
    #[must_use]
    pub const fn state(&self) -> &Arc<MarketState> {
        &self.state
    }

    /// Run all `kinds` concurrently and wait for every one to finish.
    ///
    /// Outcomes are returned in the order of `kinds`.
    pub async fn run_all(&self, kinds: &[StreamKind]) -> Vec<StreamOutcome> {
        tracing::info!(streams = kinds.len(), "Starting stream listeners");
        join_all(kinds.iter().map(|kind| self.run(*kind))).await
    }

    /// Subscribe to `kind` and consume it until it ends.
    ///
    /// Subscriptions the server did not close itself are released before
    /// returning.
    pub async fn run(&self, kind: StreamKind) -> StreamOutcome {
        let subscription_id = match self.client.subscribe(kind).await {
            Ok(id) => id,
            Err(e) => {
                tracing::error!(stream = %kind, error = %e, "Subscribe failed");
                return StreamOutcome {
                    kind,
                    updates_received: 0,
                    end: StreamEnd::Failed(e.to_string()),
                };
            }
        };

        let id = subscription_id.clone();
        let (updates_received, end) = match kind {
            StreamKind::StockPrices => {
                let opened = self.client.stock_prices_updates(id);
                self.consume(kind, opened, MarketUpdate::StockPrices).await
            }
            StreamKind::StockExchange => {
                let opened = self.client.stock_exchange_updates(id);
                self.consume(kind, opened, MarketUpdate::StockExchange)
                    .await
            }
            StreamKind::MarketEvents => {
                let opened = self.client.market_event_updates(id);
                self.consume(kind, opened, MarketUpdate::MarketEvent).await
            }
            StreamKind::MarketDepth { stock_id } => {
                let opened = self.client.market_depth_updates(id);
                self.consume(kind, opened, |update: MarketDepthUpdate| {
                    depth_update(stock_id, update)
                })
                .await
            }
        };

        if end != StreamEnd::Closed {
            self.release(kind, subscription_id).await;
        }

        tracing::info!(stream = %kind, updates_received, end = ?end, "Stream listener finished");
        StreamOutcome {
            kind,
            updates_received,
            end,
        }
    }

    async fn consume<T, O, W>(&self, kind: StreamKind, open: O, wrap: W) -> (u64, StreamEnd)
    where
        O: Future<Output = Result<Streaming<T>, ClientError>>,
        W: Fn(T) -> MarketUpdate,
    {
        let opened = tokio::select! {
            biased;
            () = self.shutdown.cancelled() => return (0, StreamEnd::Cancelled),
            opened = open => opened,
        };

        let mut stream = match opened {
            Ok(stream) => stream,
            Err(e) => {
                tracing::error!(stream = %kind, error = %e, "Failed to open stream");
                return (0, StreamEnd::Failed(e.to_string()));
            }
        };

        tracing::debug!(stream = %kind, "Stream opened");

        let mut received = 0;
        loop {
            tokio::select! {
                biased;
                () = self.shutdown.cancelled() => return (received, StreamEnd::Cancelled),
                message = stream.message() => match message {
                    Ok(Some(update)) => {
                        received += 1;
                        let update = wrap(update);
                        tracing::info!(stream = %kind, update = ?update, "Got update");
                        self.state.apply(&update);
                    }
                    Ok(None) => return (received, StreamEnd::Closed),
                    Err(status) => {
                        tracing::error!(
                            stream = %kind,
                            code = ?status.code(),
                            details = status.message(),
                            "Stream error"
                        );
                        return (received, StreamEnd::Failed(status.to_string()));
                    }
                },
            }
        }
    }

    async fn release(&self, kind: StreamKind, subscription_id: SubscriptionId) {
        if let Err(e) = self.client.unsubscribe(subscription_id).await {
            tracing::warn!(stream = %kind, error = %e, "Unsubscribe failed");
        }
    }
}

// Depth books are keyed by the subscribed stock, whatever the payload says.
fn depth_update(stock_id: u32, mut update: MarketDepthUpdate) -> MarketUpdate {
    if update.stock_id != stock_id {
        tracing::warn!(
            stock_id,
            payload_stock_id = update.stock_id,
            "Market depth update names a different stock"
        );
        update.stock_id = stock_id;
    }
    MarketUpdate::MarketDepth(update)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_display() {
        let outcome = StreamOutcome {
            kind: StreamKind::MarketDepth { stock_id: 2 },
            updates_received: 3,
            end: StreamEnd::Failed("boom".to_string()),
        };
        assert_eq!(outcome.to_string(), "market_depth[2]: 3 updates, failed: boom");
    }

    #[test]
    fn depth_update_keeps_subscribed_stock() {
        let update = MarketDepthUpdate {
            stock_id: 0,
            ask_depth: std::collections::HashMap::from([(105, 10)]),
            ..Default::default()
        };

        match depth_update(7, update) {
            MarketUpdate::MarketDepth(depth) => {
                assert_eq!(depth.stock_id, 7);
                assert_eq!(depth.ask_depth.get(&105), Some(&10));
            }
            other => panic!("unexpected update: {other:?}"),
        }
    }

    #[test]
    fn matching_depth_update_is_unchanged() {
        let update = MarketDepthUpdate {
            stock_id: 3,
            ..Default::default()
        };
        assert_eq!(
            depth_update(3, update.clone()),
            MarketUpdate::MarketDepth(update)
        );
    }

    #[test]
    fn outcome_serializes_end_reason() {
        let outcome = StreamOutcome {
            kind: StreamKind::StockPrices,
            updates_received: 0,
            end: StreamEnd::Cancelled,
        };
        let json = serde_json::to_value(&outcome).unwrap();

        assert_eq!(json["kind"]["stream"], "stock_prices");
        assert_eq!(json["end"]["reason"], "cancelled");
    }
}
