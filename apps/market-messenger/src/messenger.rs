//! Login-then-listen flow.

use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::client::{ClientError, DalalClient};
use crate::state::MarketState;
use crate::streams::{StreamKind, StreamListener, StreamOutcome};

/// Logs a bot in and keeps [`MarketState`] current from every stream.
#[derive(Debug, Clone)]
pub struct MarketMessenger {
    client: DalalClient,
    state: Arc<MarketState>,
}

impl MarketMessenger {
    /// Create a messenger writing into `state`.
    #[must_use]
    pub const fn new(client: DalalClient, state: Arc<MarketState>) -> Self {
        Self { client, state }
    }

    /// Client used for all calls.
    #[must_use]
    pub const fn client(&self) -> &DalalClient {
        &self.client
    }

    /// Shared market state.
    #[must_use]
    pub const fn state(&self) -> &Arc<MarketState> {
        &self.state
    }

    /// Log in as `bot_user_id`, then listen to the stock prices, stock
    /// exchange and market events streams plus one market depth stream per
    /// listed stock until they all end or `shutdown` fires.
    ///
    /// # Errors
    ///
    /// Returns error only if login fails; stream failures are reported in
    /// the outcomes.
    pub async fn run(
        &self,
        bot_user_id: &str,
        shutdown: CancellationToken,
    ) -> Result<Vec<StreamOutcome>, ClientError> {
        let login = self.client.login(bot_user_id).await?;
        self.state.set_stocks(&login.stock_list);

        let kinds = StreamKind::defaults_for(login.stock_list.keys().copied());
        let listener = StreamListener::new(self.client.clone(), Arc::clone(&self.state), shutdown);

        Ok(listener.run_all(&kinds).await)
    }
}
