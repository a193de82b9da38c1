//! Dalal Street gRPC client.
//!
//! Wraps the generated action and stream stubs over a single channel. Unary
//! calls are bounded by the configured request timeout; server streams are
//! not.

use std::future::Future;
use std::time::Duration;

use tonic::transport::{Certificate, Channel, ClientTlsConfig, Endpoint};
use tonic::{Request, Response, Status, Streaming};

use crate::config::ServerSettings;
use crate::grpc::ActionResponse;
use crate::grpc::proto::dalalstreet::api::{
    BuyStocksFromExchangeRequest, BuyStocksFromExchangeResponse, CancelOrderRequest,
    CancelOrderResponse, CreateBotRequest, CreateBotResponse, LoginRequest, LoginResponse,
    MarketDepthUpdate, MarketEventUpdate, PlaceOrderRequest, PlaceOrderResponse,
    StockExchangeUpdate, StockPricesUpdate, SubscribeRequest, SubscriptionId, UnsubscribeRequest,
    dalal_action_service_client::DalalActionServiceClient,
    dalal_stream_service_client::DalalStreamServiceClient, login_response,
};
use crate::streams::StreamKind;

use super::auth::BotAuth;
use super::error::ClientError;

/// Email sent on bot logins. The server identifies bots by metadata.
pub const BOT_LOGIN_EMAIL: &str = "bot";

/// Password sent on bot logins.
pub const BOT_LOGIN_PASSWORD: &str = "bot";

/// Client for the Dalal Street action and stream services.
///
/// Cloning is cheap; clones share the underlying channel.
#[derive(Debug, Clone)]
pub struct DalalClient {
    actions: DalalActionServiceClient<Channel>,
    streams: DalalStreamServiceClient<Channel>,
    auth: BotAuth,
    request_timeout: Duration,
}

impl DalalClient {
    /// Connect to the server.
    ///
    /// # Errors
    ///
    /// Returns error if the certificate cannot be read, the endpoint is
    /// invalid or the connection fails.
    pub async fn connect(settings: &ServerSettings, auth: BotAuth) -> Result<Self, ClientError> {
        let endpoint = Self::create_endpoint(settings)?;
        let channel = endpoint
            .connect()
            .await
            .map_err(|e| ClientError::ConnectionFailed {
                message: format!("{}: {e}", settings.endpoint),
            })?;

        tracing::info!(endpoint = %settings.endpoint, tls = settings.tls.is_some(), "Connected to Dalal Street server");

        Ok(Self::from_channel(channel, auth, settings.request_timeout))
    }

    /// Connect lazily (connection established on first request).
    ///
    /// # Errors
    ///
    /// Returns error if the endpoint configuration is invalid.
    pub fn connect_lazy(settings: &ServerSettings, auth: BotAuth) -> Result<Self, ClientError> {
        let endpoint = Self::create_endpoint(settings)?;
        let channel = endpoint.connect_lazy();

        tracing::debug!(endpoint = %settings.endpoint, "Created lazy connection to Dalal Street server");

        Ok(Self::from_channel(channel, auth, settings.request_timeout))
    }

    /// Build a client over an existing channel.
    #[must_use]
    pub fn from_channel(channel: Channel, auth: BotAuth, request_timeout: Duration) -> Self {
        Self {
            actions: DalalActionServiceClient::new(channel.clone()),
            streams: DalalStreamServiceClient::new(channel),
            auth,
            request_timeout,
        }
    }

    /// Create a configured endpoint from the settings.
    fn create_endpoint(settings: &ServerSettings) -> Result<Endpoint, ClientError> {
        let mut endpoint = Channel::from_shared(settings.endpoint.clone())
            .map_err(|e| ClientError::InvalidConfig {
                message: format!("invalid endpoint: {e}"),
            })?
            .connect_timeout(settings.connect_timeout)
            .tcp_keepalive(Some(settings.tcp_keepalive))
            .http2_keep_alive_interval(settings.http2_keepalive_interval)
            .keep_alive_timeout(settings.keepalive_timeout)
            .keep_alive_while_idle(true)
            .tcp_nodelay(true);

        if let Some(tls) = &settings.tls {
            let pem = std::fs::read(&tls.ca_cert_path)?;
            let tls_config = ClientTlsConfig::new()
                .ca_certificate(Certificate::from_pem(pem))
                .domain_name(tls.domain_name.clone());
            endpoint = endpoint.tls_config(tls_config)?;
        }

        Ok(endpoint)
    }

    /// Bot credentials attached to every call.
    #[must_use]
    pub const fn auth(&self) -> &BotAuth {
        &self.auth
    }

    // =========================================================================
    // Actions
    // =========================================================================

    /// Log in as `bot_user_id`.
    ///
    /// The response carries the stock list the market runs with.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidCredentials`] when the server rejects the
    /// bot, [`ClientError::NonOkStatus`] for any other non-OK code.
    pub async fn login(&self, bot_user_id: &str) -> Result<LoginResponse, ClientError> {
        let request = LoginRequest {
            email: BOT_LOGIN_EMAIL.to_string(),
            password: BOT_LOGIN_PASSWORD.to_string(),
        };

        let response = self
            .send_action(Some(bot_user_id), request, |mut client, request| async move {
                client.login(request).await
            })
            .await?;

        if response.status_code == login_response::StatusCode::InvalidCredentialsError as i32 {
            tracing::error!(bot_user_id, "Login rejected: invalid credentials");
            return Err(ClientError::InvalidCredentials {
                bot_user_id: bot_user_id.to_string(),
            });
        }

        let response = ensure_ok(response)?;
        tracing::info!(
            bot_user_id,
            stocks = response.stock_list.len(),
            "Login successful"
        );
        Ok(response)
    }

    /// Create a bot user named `bot_name` on the server.
    ///
    /// # Errors
    ///
    /// Returns error if the call fails or the server reports a non-OK code.
    pub async fn create_bot(&self, bot_name: &str) -> Result<CreateBotResponse, ClientError> {
        let request = CreateBotRequest {
            bot_user_id: bot_name.to_string(),
        };

        self.call_action(None, request, |mut client, request| async move {
            client.create_bot(request).await
        })
        .await
    }

    /// Buy `quantity` shares of `stock_id` directly from the exchange.
    ///
    /// # Errors
    ///
    /// Returns error if the call fails or the server reports a non-OK code.
    pub async fn buy_stocks_from_exchange(
        &self,
        bot_id: &str,
        stock_id: u32,
        quantity: u32,
    ) -> Result<BuyStocksFromExchangeResponse, ClientError> {
        let request = BuyStocksFromExchangeRequest {
            stock_id,
            stock_quantity: u64::from(quantity),
        };

        self.call_action(Some(bot_id), request, |mut client, request| async move {
            client.buy_stocks_from_exchange(request).await
        })
        .await
    }

    /// Place a bid order.
    ///
    /// # Errors
    ///
    /// Returns error if the call fails or the server reports a non-OK code.
    pub async fn place_buy_order(
        &self,
        bot_id: &str,
        stock_id: u32,
        quantity: u32,
        price: u64,
    ) -> Result<PlaceOrderResponse, ClientError> {
        self.place_order(bot_id, stock_id, i64::from(quantity), price)
            .await
    }

    /// Place an ask order. The quantity goes on the wire negated.
    ///
    /// # Errors
    ///
    /// Returns error if the call fails or the server reports a non-OK code.
    pub async fn place_sell_order(
        &self,
        bot_id: &str,
        stock_id: u32,
        quantity: u32,
        price: u64,
    ) -> Result<PlaceOrderResponse, ClientError> {
        self.place_order(bot_id, stock_id, -i64::from(quantity), price)
            .await
    }

    async fn place_order(
        &self,
        bot_id: &str,
        stock_id: u32,
        stock_quantity: i64,
        price: u64,
    ) -> Result<PlaceOrderResponse, ClientError> {
        let request = PlaceOrderRequest {
            stock_id,
            stock_quantity,
            price,
        };

        self.call_action(Some(bot_id), request, |mut client, request| async move {
            client.place_order(request).await
        })
        .await
    }

    /// Cancel a bid (`is_ask == false`) or ask order.
    ///
    /// # Errors
    ///
    /// Returns error if the call fails or the server reports a non-OK code.
    pub async fn cancel_order(
        &self,
        bot_id: &str,
        order_id: u32,
        is_ask: bool,
    ) -> Result<CancelOrderResponse, ClientError> {
        let request = CancelOrderRequest { order_id, is_ask };

        self.call_action(Some(bot_id), request, |mut client, request| async move {
            client.cancel_order(request).await
        })
        .await
    }

    /// Send an action and require an OK status code.
    async fn call_action<Req, Res, F, Fut>(
        &self,
        bot_id: Option<&str>,
        message: Req,
        call: F,
    ) -> Result<Res, ClientError>
    where
        Res: ActionResponse,
        F: FnOnce(DalalActionServiceClient<Channel>, Request<Req>) -> Fut,
        Fut: Future<Output = Result<Response<Res>, Status>>,
    {
        let response = self.send_action(bot_id, message, call).await?;
        ensure_ok(response)
    }

    /// Send an action with bot metadata and the request timeout attached.
    async fn send_action<Req, Res, F, Fut>(
        &self,
        bot_id: Option<&str>,
        message: Req,
        call: F,
    ) -> Result<Res, ClientError>
    where
        Res: ActionResponse,
        F: FnOnce(DalalActionServiceClient<Channel>, Request<Req>) -> Fut,
        Fut: Future<Output = Result<Response<Res>, Status>>,
    {
        let mut request = self.auth.request(message, bot_id)?;
        request.set_timeout(self.request_timeout);

        match call(self.actions.clone(), request).await {
            Ok(response) => Ok(response.into_inner()),
            Err(status) => {
                tracing::error!(
                    action = Res::ACTION,
                    code = ?status.code(),
                    details = status.message(),
                    "Action call failed"
                );
                Err(status.into())
            }
        }
    }

    // =========================================================================
    // Streams
    // =========================================================================

    /// Obtain a subscription id for `kind`.
    ///
    /// # Errors
    ///
    /// Returns error if the call fails, the server reports a non-OK code or
    /// the response carries no id.
    pub async fn subscribe(&self, kind: StreamKind) -> Result<SubscriptionId, ClientError> {
        let mut request = self.auth.request(
            SubscribeRequest {
                data_stream_type: kind.data_stream_type() as i32,
                data_stream_id: kind.data_stream_id(),
            },
            None,
        )?;
        request.set_timeout(self.request_timeout);

        let response = ensure_ok(self.streams.clone().subscribe(request).await?.into_inner())?;
        let subscription_id =
            response
                .subscription_id
                .ok_or_else(|| ClientError::MissingSubscriptionId {
                    stream: kind.to_string(),
                })?;

        tracing::debug!(stream = %kind, subscription_id = %subscription_id.id, "Subscribed");
        Ok(subscription_id)
    }

    /// Release a subscription.
    ///
    /// # Errors
    ///
    /// Returns error if the call fails or the server reports a non-OK code.
    pub async fn unsubscribe(&self, subscription_id: SubscriptionId) -> Result<(), ClientError> {
        let id = subscription_id.id.clone();
        let mut request = self.auth.request(
            UnsubscribeRequest {
                subscription_id: Some(subscription_id),
            },
            None,
        )?;
        request.set_timeout(self.request_timeout);

        ensure_ok(self.streams.clone().unsubscribe(request).await?.into_inner())?;
        tracing::debug!(subscription_id = %id, "Unsubscribed");
        Ok(())
    }

    /// Open the stock prices stream.
    ///
    /// # Errors
    ///
    /// Returns error if stream creation fails.
    pub async fn stock_prices_updates(
        &self,
        subscription_id: SubscriptionId,
    ) -> Result<Streaming<StockPricesUpdate>, ClientError> {
        let request = self.auth.request(subscription_id, None)?;
        let response = self.streams.clone().get_stock_prices_updates(request).await?;
        Ok(response.into_inner())
    }

    /// Open the stock exchange stream.
    ///
    /// # Errors
    ///
    /// Returns error if stream creation fails.
    pub async fn stock_exchange_updates(
        &self,
        subscription_id: SubscriptionId,
    ) -> Result<Streaming<StockExchangeUpdate>, ClientError> {
        let request = self.auth.request(subscription_id, None)?;
        let response = self
            .streams
            .clone()
            .get_stock_exchange_updates(request)
            .await?;
        Ok(response.into_inner())
    }

    /// Open the market depth stream of the stock the subscription was made for.
    ///
    /// # Errors
    ///
    /// Returns error if stream creation fails.
    pub async fn market_depth_updates(
        &self,
        subscription_id: SubscriptionId,
    ) -> Result<Streaming<MarketDepthUpdate>, ClientError> {
        let request = self.auth.request(subscription_id, None)?;
        let response = self
            .streams
            .clone()
            .get_market_depth_updates(request)
            .await?;
        Ok(response.into_inner())
    }

    /// Open the market events stream.
    ///
    /// # Errors
    ///
    /// Returns error if stream creation fails.
    pub async fn market_event_updates(
        &self,
        subscription_id: SubscriptionId,
    ) -> Result<Streaming<MarketEventUpdate>, ClientError> {
        let request = self.auth.request(subscription_id, None)?;
        let response = self
            .streams
            .clone()
            .get_market_event_updates(request)
            .await?;
        Ok(response.into_inner())
    }
}

/// Turn a non-OK status code into an error; log the response otherwise.
fn ensure_ok<R: ActionResponse>(response: R) -> Result<R, ClientError> {
    if !response.is_ok() {
        tracing::warn!(
            action = R::ACTION,
            status = %response.status_name(),
            message = response.status_message(),
            "Got non-OK response code"
        );
        return Err(ClientError::NonOkStatus {
            action: R::ACTION,
            status: response.status_name(),
            message: response.status_message().to_string(),
        });
    }

    tracing::info!(action = R::ACTION, response = ?response, "Got response");
    Ok(response)
}
