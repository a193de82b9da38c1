//! Client Integration Tests
//!
//! Runs the client against an in-process mock of the Dalal Street server and
//! checks what reaches the wire: request fields, bot metadata, and how
//! responses and stream data come back.

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::too_many_lines,
    clippy::struct_excessive_bools
)]

use std::collections::HashMap;
use std::pin::Pin;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use futures::{Stream, StreamExt};
use tokio::time::timeout;
use tokio_util::sync::CancellationToken;
use tonic::transport::Server;
use tonic::{Code, Request, Response, Status};

use market_messenger::proto::{
    BuyStocksFromExchangeRequest, BuyStocksFromExchangeResponse, CancelOrderRequest,
    CancelOrderResponse, CreateBotRequest, CreateBotResponse, DataStreamType, LoginRequest,
    LoginResponse, MarketDepthUpdate, MarketEvent, MarketEventUpdate, PlaceOrderRequest,
    PlaceOrderResponse, Stock, StockExchangeDataPoint, StockExchangeUpdate, StockPricesUpdate,
    SubscribeRequest, SubscribeResponse, SubscriptionId, UnsubscribeRequest, UnsubscribeResponse,
    User, dalal_action_service_server::DalalActionService,
    dalal_action_service_server::DalalActionServiceServer,
    dalal_stream_service_server::DalalStreamService,
    dalal_stream_service_server::DalalStreamServiceServer, login_response, place_order_response,
    subscribe_response,
};
use market_messenger::{
    BotAuth, ClientError, DalalClient, MarketMessenger, MarketState, ServerSettings, StreamEnd,
    StreamKind, StreamOutcome,
};

const SECRET: &str = "hellobots";
const DEFAULT_USER: &str = "fakeid";

type BoxedStream<T> = Pin<Box<dyn Stream<Item = Result<T, Status>> + Send>>;

// =============================================================================
// Mock Server
// =============================================================================

/// Metadata a call arrived with.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Call {
    method: &'static str,
    bot_secret: Option<String>,
    bot_user_id: Option<String>,
}

#[derive(Debug, Default)]
struct Recorded {
    calls: Vec<Call>,
    logins: Vec<LoginRequest>,
    create_bots: Vec<CreateBotRequest>,
    buys: Vec<BuyStocksFromExchangeRequest>,
    orders: Vec<PlaceOrderRequest>,
    cancels: Vec<CancelOrderRequest>,
    subscribes: Vec<SubscribeRequest>,
    unsubscribes: Vec<UnsubscribeRequest>,
}

#[derive(Debug, Clone, Copy, Default)]
struct Behavior {
    login_status: i32,
    place_order_status: i32,
    cancel_fails: bool,
    hold_streams_open: bool,
    prices_subscribe_status: i32,
    exchange_omits_subscription_id: bool,
    events_stream_fails: bool,
    depth_open_fails: bool,
    depth_open_hangs: bool,
    depth_omits_stock_id: bool,
}

#[derive(Clone)]
struct MockDalal {
    recorded: Arc<Mutex<Recorded>>,
    behavior: Behavior,
}

impl MockDalal {
    fn record<T>(&self, method: &'static str, request: &Request<T>) {
        let metadata = request.metadata();
        let value = |key: &str| {
            metadata
                .get(key)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string)
        };
        let call = Call {
            method,
            bot_secret: value("bot_secret"),
            bot_user_id: value("bot_user_id"),
        };
        self.recorded.lock().unwrap().calls.push(call);
    }

    fn stream<T: Send + 'static>(&self, items: Vec<T>) -> BoxedStream<T> {
        let items = futures::stream::iter(items.into_iter().map(Ok));
        if self.behavior.hold_streams_open {
            Box::pin(items.chain(futures::stream::pending()))
        } else {
            Box::pin(items)
        }
    }
}

fn stock(id: u32, short_name: &str, price: u64) -> Stock {
    Stock {
        id,
        short_name: short_name.to_string(),
        full_name: format!("{short_name} Ltd"),
        current_price: price,
        stocks_in_exchange: 1000,
        ..Default::default()
    }
}

#[tonic::async_trait]
impl DalalActionService for MockDalal {
    async fn login(
        &self,
        request: Request<LoginRequest>,
    ) -> Result<Response<LoginResponse>, Status> {
        self.record("login", &request);
        self.recorded.lock().unwrap().logins.push(request.into_inner());

        Ok(Response::new(LoginResponse {
            status_code: self.behavior.login_status,
            status_message: String::new(),
            session_id: "session-1".to_string(),
            user: Some(User {
                id: 2127,
                name: "bot".to_string(),
                ..Default::default()
            }),
            stock_list: HashMap::from([(2, stock(2, "TCS", 200)), (1, stock(1, "INFY", 100))]),
        }))
    }

    async fn create_bot(
        &self,
        request: Request<CreateBotRequest>,
    ) -> Result<Response<CreateBotResponse>, Status> {
        self.record("create_bot", &request);
        let message = request.into_inner();
        let user = User {
            id: 99,
            name: message.bot_user_id.clone(),
            ..Default::default()
        };
        self.recorded.lock().unwrap().create_bots.push(message);

        Ok(Response::new(CreateBotResponse {
            status_code: 0,
            status_message: String::new(),
            user: Some(user),
        }))
    }

    async fn buy_stocks_from_exchange(
        &self,
        request: Request<BuyStocksFromExchangeRequest>,
    ) -> Result<Response<BuyStocksFromExchangeResponse>, Status> {
        self.record("buy_stocks_from_exchange", &request);
        let message = request.into_inner();
        self.recorded.lock().unwrap().buys.push(message);

        Ok(Response::new(BuyStocksFromExchangeResponse {
            status_code: 0,
            status_message: String::new(),
            trading_price: 100,
            stock_quantity: message.stock_quantity,
        }))
    }

    async fn place_order(
        &self,
        request: Request<PlaceOrderRequest>,
    ) -> Result<Response<PlaceOrderResponse>, Status> {
        self.record("place_order", &request);
        let message = request.into_inner();
        let mut recorded = self.recorded.lock().unwrap();
        recorded.orders.push(message);
        let order_id = u32::try_from(recorded.orders.len()).unwrap();

        Ok(Response::new(PlaceOrderResponse {
            status_code: self.behavior.place_order_status,
            status_message: if self.behavior.place_order_status == 0 {
                String::new()
            } else {
                "not enough stocks".to_string()
            },
            order_id,
        }))
    }

    async fn cancel_order(
        &self,
        request: Request<CancelOrderRequest>,
    ) -> Result<Response<CancelOrderResponse>, Status> {
        self.record("cancel_order", &request);
        self.recorded.lock().unwrap().cancels.push(request.into_inner());

        if self.behavior.cancel_fails {
            return Err(Status::unavailable("matching engine offline"));
        }
        Ok(Response::new(CancelOrderResponse {
            status_code: 0,
            status_message: String::new(),
        }))
    }
}

#[tonic::async_trait]
impl DalalStreamService for MockDalal {
    type GetStockPricesUpdatesStream = BoxedStream<StockPricesUpdate>;
    type GetStockExchangeUpdatesStream = BoxedStream<StockExchangeUpdate>;
    type GetMarketDepthUpdatesStream = BoxedStream<MarketDepthUpdate>;
    type GetMarketEventUpdatesStream = BoxedStream<MarketEventUpdate>;

    async fn subscribe(
        &self,
        request: Request<SubscribeRequest>,
    ) -> Result<Response<SubscribeResponse>, Status> {
        self.record("subscribe", &request);
        let message = request.into_inner();
        let id = format!("{}-{}", message.data_stream_type, message.data_stream_id);
        let data_stream_type = message.data_stream_type;
        self.recorded.lock().unwrap().subscribes.push(message);

        let refused = data_stream_type == DataStreamType::StockPrices as i32
            && self.behavior.prices_subscribe_status != 0;
        let omit_id = data_stream_type == DataStreamType::StockExchange as i32
            && self.behavior.exchange_omits_subscription_id;

        Ok(Response::new(SubscribeResponse {
            status_code: if refused {
                self.behavior.prices_subscribe_status
            } else {
                0
            },
            status_message: if refused {
                "subscribe refused".to_string()
            } else {
                String::new()
            },
            subscription_id: (!omit_id).then_some(SubscriptionId {
                id,
                data_stream_type,
            }),
        }))
    }

    async fn unsubscribe(
        &self,
        request: Request<UnsubscribeRequest>,
    ) -> Result<Response<UnsubscribeResponse>, Status> {
        self.record("unsubscribe", &request);
        self.recorded
            .lock()
            .unwrap()
            .unsubscribes
            .push(request.into_inner());

        Ok(Response::new(UnsubscribeResponse {
            status_code: 0,
            status_message: String::new(),
        }))
    }

    async fn get_stock_prices_updates(
        &self,
        request: Request<SubscriptionId>,
    ) -> Result<Response<Self::GetStockPricesUpdatesStream>, Status> {
        self.record("get_stock_prices_updates", &request);
        Ok(Response::new(self.stream(vec![
            StockPricesUpdate {
                prices: HashMap::from([(1, 110)]),
            },
            StockPricesUpdate {
                prices: HashMap::from([(1, 115), (2, 190)]),
            },
        ])))
    }

    async fn get_stock_exchange_updates(
        &self,
        request: Request<SubscriptionId>,
    ) -> Result<Response<Self::GetStockExchangeUpdatesStream>, Status> {
        self.record("get_stock_exchange_updates", &request);
        Ok(Response::new(self.stream(vec![StockExchangeUpdate {
            stocks_in_exchange: HashMap::from([(
                2,
                StockExchangeDataPoint {
                    price: 190,
                    stocks_in_exchange: 900,
                    stocks_in_market: 100,
                },
            )]),
        }])))
    }

    async fn get_market_depth_updates(
        &self,
        request: Request<SubscriptionId>,
    ) -> Result<Response<Self::GetMarketDepthUpdatesStream>, Status> {
        self.record("get_market_depth_updates", &request);
        if self.behavior.depth_open_hangs {
            std::future::pending::<()>().await;
        }
        if self.behavior.depth_open_fails {
            return Err(Status::unavailable("depth offline"));
        }
        let subscribed: u32 = request
            .get_ref()
            .id
            .rsplit('-')
            .next()
            .and_then(|id| id.parse().ok())
            .ok_or_else(|| Status::invalid_argument("unknown subscription"))?;
        let stock_id = if self.behavior.depth_omits_stock_id {
            0
        } else {
            subscribed
        };

        Ok(Response::new(self.stream(vec![
            MarketDepthUpdate {
                stock_id,
                ask_depth: HashMap::from([(105, 10), (110, 4)]),
                bid_depth: HashMap::from([(95, 8)]),
                ..Default::default()
            },
            MarketDepthUpdate {
                stock_id,
                ask_depth_diff: HashMap::from([(105, 0)]),
                ..Default::default()
            },
        ])))
    }

    async fn get_market_event_updates(
        &self,
        request: Request<SubscriptionId>,
    ) -> Result<Response<Self::GetMarketEventUpdatesStream>, Status> {
        self.record("get_market_event_updates", &request);
        if self.behavior.events_stream_fails {
            let failing: BoxedStream<MarketEventUpdate> = Box::pin(futures::stream::iter([Err(
                Status::internal("events broke"),
            )]));
            return Ok(Response::new(failing));
        }
        Ok(Response::new(self.stream(vec![MarketEventUpdate {
            market_event: Some(MarketEvent {
                id: 1,
                stock_id: 2,
                headline: "TCS wins contract".to_string(),
                ..Default::default()
            }),
        }])))
    }
}

/// Start a mock server on a random port and return a connected client.
async fn setup_test_server(
    behavior: Behavior,
) -> (DalalClient, Arc<Mutex<Recorded>>, tokio::task::JoinHandle<()>) {
    let recorded = Arc::new(Mutex::new(Recorded::default()));
    let mock = MockDalal {
        recorded: Arc::clone(&recorded),
        behavior,
    };

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let server_handle = tokio::spawn(async move {
        Server::builder()
            .add_service(DalalActionServiceServer::new(mock.clone()))
            .add_service(DalalStreamServiceServer::new(mock))
            .serve_with_incoming(tokio_stream::wrappers::TcpListenerStream::new(listener))
            .await
            .unwrap();
    });

    tokio::time::sleep(Duration::from_millis(50)).await;

    let settings = ServerSettings::new(format!("http://{addr}"));
    let client = DalalClient::connect(&settings, BotAuth::new(SECRET, DEFAULT_USER))
        .await
        .unwrap();

    (client, recorded, server_handle)
}

/// Log in and run every stream to its end against a mock with `behavior`.
async fn run_messenger(
    behavior: Behavior,
) -> (
    Vec<StreamOutcome>,
    Arc<MarketState>,
    Arc<Mutex<Recorded>>,
    tokio::task::JoinHandle<()>,
) {
    let (client, recorded, handle) = setup_test_server(behavior).await;
    let state = Arc::new(MarketState::default());
    let messenger = MarketMessenger::new(client, Arc::clone(&state));

    let outcomes = timeout(
        Duration::from_secs(5),
        messenger.run("2127", CancellationToken::new()),
    )
    .await
    .expect("streams should finish")
    .unwrap();

    (outcomes, state, recorded, handle)
}

fn outcome(outcomes: &[StreamOutcome], kind: StreamKind) -> &StreamOutcome {
    outcomes
        .iter()
        .find(|o| o.kind == kind)
        .unwrap_or_else(|| panic!("no outcome for {kind}"))
}

fn failed_with(outcome: &StreamOutcome, text: &str) -> bool {
    matches!(&outcome.end, StreamEnd::Failed(error) if error.contains(text))
}

fn call(method: &'static str, bot_user_id: &str) -> Call {
    Call {
        method,
        bot_secret: Some(SECRET.to_string()),
        bot_user_id: Some(bot_user_id.to_string()),
    }
}

// =============================================================================
// Action Tests
// =============================================================================

#[tokio::test]
async fn test_login_sends_bot_credentials() {
    let (client, recorded, handle) = setup_test_server(Behavior::default()).await;

    let response = client.login("2127").await.unwrap();

    assert_eq!(response.stock_list.len(), 2);
    let recorded = recorded.lock().unwrap();
    assert_eq!(recorded.calls, vec![call("login", "2127")]);
    assert_eq!(recorded.logins[0].email, "bot");
    assert_eq!(recorded.logins[0].password, "bot");

    handle.abort();
}

#[tokio::test]
async fn test_login_rejected_bot() {
    let behavior = Behavior {
        login_status: login_response::StatusCode::InvalidCredentialsError as i32,
        ..Behavior::default()
    };
    let (client, _recorded, handle) = setup_test_server(behavior).await;

    let err = client.login("2127").await.unwrap_err();

    assert!(
        matches!(&err, ClientError::InvalidCredentials { bot_user_id } if bot_user_id == "2127"),
        "unexpected error: {err:?}"
    );

    handle.abort();
}

#[tokio::test]
async fn test_login_server_error_is_non_ok() {
    let behavior = Behavior {
        login_status: login_response::StatusCode::InternalServerError as i32,
        ..Behavior::default()
    };
    let (client, _recorded, handle) = setup_test_server(behavior).await;

    let err = client.login("2127").await.unwrap_err();

    assert!(
        matches!(err, ClientError::NonOkStatus { action: "Login", .. }),
        "unexpected error: {err:?}"
    );

    handle.abort();
}

#[tokio::test]
async fn test_create_bot_uses_default_user() {
    let (client, recorded, handle) = setup_test_server(Behavior::default()).await;

    let response = client.create_bot("bot-7").await.unwrap();

    assert_eq!(response.user.unwrap().name, "bot-7");
    let recorded = recorded.lock().unwrap();
    assert_eq!(recorded.calls, vec![call("create_bot", DEFAULT_USER)]);
    assert_eq!(recorded.create_bots[0].bot_user_id, "bot-7");

    handle.abort();
}

#[tokio::test]
async fn test_buy_from_exchange_forwards_fields() {
    let (client, recorded, handle) = setup_test_server(Behavior::default()).await;

    let response = client.buy_stocks_from_exchange("12", 3, 40).await.unwrap();

    assert_eq!(response.stock_quantity, 40);
    let recorded = recorded.lock().unwrap();
    assert_eq!(recorded.calls, vec![call("buy_stocks_from_exchange", "12")]);
    assert_eq!(recorded.buys[0].stock_id, 3);
    assert_eq!(recorded.buys[0].stock_quantity, 40);

    handle.abort();
}

#[tokio::test]
async fn test_order_side_is_encoded_in_quantity_sign() {
    let (client, recorded, handle) = setup_test_server(Behavior::default()).await;

    let bid = client.place_buy_order("12", 3, 10, 250).await.unwrap();
    let ask = client.place_sell_order("12", 3, 10, 260).await.unwrap();

    assert_eq!(bid.order_id, 1);
    assert_eq!(ask.order_id, 2);

    let recorded = recorded.lock().unwrap();
    let quantities: Vec<i64> = recorded.orders.iter().map(|o| o.stock_quantity).collect();
    assert_eq!(quantities, vec![10, -10]);
    let prices: Vec<u64> = recorded.orders.iter().map(|o| o.price).collect();
    assert_eq!(prices, vec![250, 260]);
    assert!(recorded.orders.iter().all(|o| o.stock_id == 3));
    assert!(recorded.calls.iter().all(|c| c == &call("place_order", "12")));

    handle.abort();
}

#[tokio::test]
async fn test_non_ok_order_names_action_and_status() {
    let behavior = Behavior {
        place_order_status: place_order_response::StatusCode::NotEnoughStocksError as i32,
        ..Behavior::default()
    };
    let (client, _recorded, handle) = setup_test_server(behavior).await;

    let err = client.place_sell_order("12", 3, 10, 260).await.unwrap_err();

    match err {
        ClientError::NonOkStatus {
            action,
            status,
            message,
        } => {
            assert_eq!(action, "PlaceOrder");
            assert_eq!(status, "NotEnoughStocksError");
            assert_eq!(message, "not enough stocks");
        }
        other => panic!("unexpected error: {other:?}"),
    }

    handle.abort();
}

#[tokio::test]
async fn test_rpc_failure_surfaces_status() {
    let behavior = Behavior {
        cancel_fails: true,
        ..Behavior::default()
    };
    let (client, recorded, handle) = setup_test_server(behavior).await;

    let err = client.cancel_order("12", 5, true).await.unwrap_err();

    assert_eq!(err.grpc_code(), Some(Code::Unavailable));
    let recorded = recorded.lock().unwrap();
    assert_eq!(recorded.cancels[0].order_id, 5);
    assert!(recorded.cancels[0].is_ask);

    handle.abort();
}

// =============================================================================
// Stream Tests
// =============================================================================

#[tokio::test]
async fn test_messenger_consumes_every_stream() {
    let (client, recorded, handle) = setup_test_server(Behavior::default()).await;
    let state = Arc::new(MarketState::default());
    let messenger = MarketMessenger::new(client, Arc::clone(&state));

    let outcomes = timeout(
        Duration::from_secs(5),
        messenger.run("2127", CancellationToken::new()),
    )
    .await
    .expect("streams should finish")
    .unwrap();

    let kinds: Vec<StreamKind> = outcomes.iter().map(|o| o.kind).collect();
    assert_eq!(
        kinds,
        vec![
            StreamKind::StockPrices,
            StreamKind::StockExchange,
            StreamKind::MarketEvents,
            StreamKind::MarketDepth { stock_id: 1 },
            StreamKind::MarketDepth { stock_id: 2 },
        ]
    );
    assert!(outcomes.iter().all(|o| o.end == StreamEnd::Closed));
    assert_eq!(outcomes[0].updates_received, 2);

    assert_eq!(state.latest_price(1), Some(115));
    assert_eq!(state.latest_price(2), Some(190));
    assert_eq!(state.exchange(2).unwrap().stocks_in_exchange, 900);
    assert_eq!(state.market_events()[0].headline, "TCS wins contract");
    let book = state.market_depth(2).unwrap();
    assert_eq!(book.asks.keys().copied().collect::<Vec<_>>(), vec![110]);
    assert_eq!(state.updates_received("market_depth"), 4);

    let recorded = recorded.lock().unwrap();
    let depth_subscriptions: Vec<&str> = recorded
        .subscribes
        .iter()
        .filter(|s| s.data_stream_type == DataStreamType::MarketDepth as i32)
        .map(|s| s.data_stream_id.as_str())
        .collect();
    assert_eq!(depth_subscriptions.len(), 2);
    assert!(depth_subscriptions.contains(&"1"));
    assert!(depth_subscriptions.contains(&"2"));
    assert!(
        recorded
            .calls
            .iter()
            .filter(|c| c.method == "subscribe")
            .all(|c| c == &call("subscribe", DEFAULT_USER))
    );
    assert!(recorded.unsubscribes.is_empty());

    handle.abort();
}

#[tokio::test]
async fn test_cancel_stops_listeners_and_unsubscribes() {
    let behavior = Behavior {
        hold_streams_open: true,
        ..Behavior::default()
    };
    let (client, recorded, handle) = setup_test_server(behavior).await;
    let state = Arc::new(MarketState::default());
    let messenger = MarketMessenger::new(client, Arc::clone(&state));
    let shutdown = CancellationToken::new();

    let run = tokio::spawn({
        let shutdown = shutdown.clone();
        async move { messenger.run("2127", shutdown).await }
    });

    timeout(Duration::from_secs(5), async {
        while state.updates_received("stock_prices") < 2
            || state.updates_received("market_depth") < 4
        {
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
    })
    .await
    .expect("updates should arrive");

    shutdown.cancel();
    let outcomes = timeout(Duration::from_secs(5), run)
        .await
        .expect("listeners should stop")
        .unwrap()
        .unwrap();

    assert_eq!(outcomes.len(), 5);
    assert!(outcomes.iter().all(|o| o.end == StreamEnd::Cancelled));
    assert_eq!(recorded.lock().unwrap().unsubscribes.len(), 5);

    handle.abort();
}

#[tokio::test]
async fn test_failed_stream_ends_only_its_listener() {
    let behavior = Behavior {
        events_stream_fails: true,
        ..Behavior::default()
    };
    let (outcomes, state, recorded, handle) = run_messenger(behavior).await;

    let events = outcome(&outcomes, StreamKind::MarketEvents);
    assert!(failed_with(events, "events broke"), "{events}");
    assert_eq!(events.updates_received, 0);

    let others: Vec<&StreamOutcome> = outcomes
        .iter()
        .filter(|o| o.kind != StreamKind::MarketEvents)
        .collect();
    assert_eq!(others.len(), 4);
    assert!(others.iter().all(|o| o.end == StreamEnd::Closed));
    assert_eq!(state.latest_price(1), Some(115));
    assert!(state.market_events().is_empty());

    let recorded = recorded.lock().unwrap();
    let released: Vec<&str> = recorded
        .unsubscribes
        .iter()
        .filter_map(|u| u.subscription_id.as_ref())
        .map(|id| id.id.as_str())
        .collect();
    assert_eq!(released, vec!["3-"]);

    handle.abort();
}

#[tokio::test]
async fn test_subscribe_failures_are_reported_per_stream() {
    let behavior = Behavior {
        prices_subscribe_status: subscribe_response::StatusCode::InternalServerError as i32,
        exchange_omits_subscription_id: true,
        ..Behavior::default()
    };
    let (outcomes, state, recorded, handle) = run_messenger(behavior).await;

    let prices = outcome(&outcomes, StreamKind::StockPrices);
    assert!(
        failed_with(prices, "Subscribe returned InternalServerError: subscribe refused"),
        "{prices}"
    );
    let exchange = outcome(&outcomes, StreamKind::StockExchange);
    assert!(
        failed_with(exchange, "stock_exchange carried no subscription id"),
        "{exchange}"
    );

    for kind in [
        StreamKind::MarketEvents,
        StreamKind::MarketDepth { stock_id: 1 },
        StreamKind::MarketDepth { stock_id: 2 },
    ] {
        assert_eq!(outcome(&outcomes, kind).end, StreamEnd::Closed, "{kind}");
    }

    assert_eq!(state.updates_received("stock_prices"), 0);
    assert_eq!(state.updates_received("stock_exchange"), 0);
    assert_eq!(state.updates_received("market_events"), 1);

    let recorded = recorded.lock().unwrap();
    assert!(
        !recorded
            .calls
            .iter()
            .any(|c| c.method == "get_stock_prices_updates" || c.method == "get_stock_exchange_updates")
    );
    assert!(recorded.unsubscribes.is_empty());

    handle.abort();
}

#[tokio::test]
async fn test_stream_open_failure_releases_subscription() {
    let behavior = Behavior {
        depth_open_fails: true,
        ..Behavior::default()
    };
    let (outcomes, _state, recorded, handle) = run_messenger(behavior).await;

    for stock_id in [1, 2] {
        let depth = outcome(&outcomes, StreamKind::MarketDepth { stock_id });
        assert!(failed_with(depth, "depth offline"), "{depth}");
    }
    assert_eq!(outcome(&outcomes, StreamKind::StockPrices).end, StreamEnd::Closed);

    let recorded = recorded.lock().unwrap();
    let mut released: Vec<&str> = recorded
        .unsubscribes
        .iter()
        .filter_map(|u| u.subscription_id.as_ref())
        .map(|id| id.id.as_str())
        .collect();
    released.sort_unstable();
    assert_eq!(released, vec!["0-1", "0-2"]);

    handle.abort();
}

#[tokio::test]
async fn test_cancel_while_stream_is_opening() {
    let behavior = Behavior {
        depth_open_hangs: true,
        ..Behavior::default()
    };
    let (client, recorded, handle) = setup_test_server(behavior).await;
    let state = Arc::new(MarketState::default());
    let messenger = MarketMessenger::new(client, Arc::clone(&state));
    let shutdown = CancellationToken::new();

    let run = tokio::spawn({
        let shutdown = shutdown.clone();
        async move { messenger.run("2127", shutdown).await }
    });

    timeout(Duration::from_secs(5), async {
        loop {
            let opening = recorded
                .lock()
                .unwrap()
                .calls
                .iter()
                .filter(|c| c.method == "get_market_depth_updates")
                .count();
            if opening == 2 && state.updates_received("stock_prices") == 2 {
                break;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
    })
    .await
    .expect("depth streams should start opening");

    shutdown.cancel();
    let outcomes = timeout(Duration::from_secs(5), run)
        .await
        .expect("listeners should stop")
        .unwrap()
        .unwrap();

    for stock_id in [1, 2] {
        let depth = outcome(&outcomes, StreamKind::MarketDepth { stock_id });
        assert_eq!(depth.end, StreamEnd::Cancelled);
        assert_eq!(depth.updates_received, 0);
    }

    let recorded = recorded.lock().unwrap();
    let mut released: Vec<&str> = recorded
        .unsubscribes
        .iter()
        .filter_map(|u| u.subscription_id.as_ref())
        .map(|id| id.id.as_str())
        .filter(|id| id.starts_with("0-"))
        .collect();
    released.sort_unstable();
    assert_eq!(released, vec!["0-1", "0-2"]);

    handle.abort();
}

#[tokio::test]
async fn test_depth_books_use_subscribed_stock() {
    let behavior = Behavior {
        depth_omits_stock_id: true,
        ..Behavior::default()
    };
    let (outcomes, state, _recorded, handle) = run_messenger(behavior).await;

    assert!(outcomes.iter().all(|o| o.end == StreamEnd::Closed));
    assert!(state.market_depth(0).is_none());
    for stock_id in [1, 2] {
        let book = state.market_depth(stock_id).unwrap();
        assert_eq!(book.asks.keys().copied().collect::<Vec<_>>(), vec![110]);
        assert_eq!(book.bids.get(&95), Some(&8));
    }

    handle.abort();
}
