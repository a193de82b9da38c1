//! Market Messenger Binary
//!
//! Runs bot actions against a Dalal Street server.
//!
//! # Usage
//!
//! ```bash
//! cargo run -p market-messenger -- listen --bot-user-id 2127
//! cargo run -p market-messenger -- place-order sell 3 10 250 --bot-id 2127
//! ```
//!
//! # Environment Variables
//!
//! ## Required
//! - `DALAL_BOT_SECRET`: Shared secret granting bot API access
//!
//! ## Optional
//! - `DALAL_BOT_USER_ID`: Bot to act as when no flag is given
//! - `DALAL_DEFAULT_BOT_USER_ID`: User id for calls that name no bot (default: fakeid)
//! - `DALAL_SERVER_ENDPOINT`: Server URI (default: <https://localhost:8000>)
//! - `DALAL_TLS_CA_PATH`: Server certificate, empty for plaintext (default: grpc-server.crt)
//! - `DALAL_TLS_DOMAIN`: TLS server name (default: localhost)
//! - `DALAL_CONNECT_TIMEOUT_SECS`: Connect timeout (default: 10)
//! - `DALAL_REQUEST_TIMEOUT_SECS`: Unary request timeout (default: 30)
//! - `DALAL_MARKET_EVENTS_CAPACITY`: Market events kept in memory (default: 100)
//! - `OTEL_ENABLED`: Export traces over OTLP (default: false)
//! - `RUST_LOG`: Log level (default: info)

use std::sync::Arc;

use anyhow::{Context, anyhow};
use clap::Parser;
use serde::Serialize;
use tokio::signal;
use tokio_util::sync::CancellationToken;

use market_messenger::cli::{Cli, Command, Side};
use market_messenger::config::load_dotenv;
use market_messenger::report::ActionReport;
use market_messenger::{
    BotAuth, DalalClient, MarketMessenger, MarketSnapshot, MarketState, MessengerConfig,
    StreamOutcome, telemetry,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if rustls::crypto::ring::default_provider()
        .install_default()
        .is_err()
    {
        return Err(anyhow!("failed to install rustls crypto provider"));
    }

    load_dotenv();

    let cli = Cli::parse();
    let _telemetry_guard = telemetry::init();

    let config = MessengerConfig::from_env().context("loading configuration")?;
    log_config(&config);

    let auth = BotAuth::new(
        config.bot.secret.clone(),
        config.bot.default_bot_user_id.clone(),
    );
    let client = DalalClient::connect(&config.server, auth).await?;

    let bot = |flag: Option<String>| {
        flag.or_else(|| config.bot.bot_user_id.clone())
            .ok_or_else(|| anyhow!("no bot given: pass --bot-id or set DALAL_BOT_USER_ID"))
    };

    match cli.command {
        Command::Listen { bot_user_id } => {
            let bot_user_id = bot(bot_user_id)?;
            listen(client, &config, &bot_user_id, cli.json).await?;
        }
        Command::CreateBot { name } => {
            let response = client.create_bot(&name).await?;
            print_report(&ActionReport::from(&response), cli.json)?;
        }
        Command::Buy {
            stock_id,
            quantity,
            bot_id,
        } => {
            let response = client
                .buy_stocks_from_exchange(&bot(bot_id)?, stock_id, quantity)
                .await?;
            print_report(&ActionReport::from(&response), cli.json)?;
        }
        Command::PlaceOrder {
            side,
            stock_id,
            quantity,
            price,
            bot_id,
        } => {
            let bot_id = bot(bot_id)?;
            let response = match side {
                Side::Buy => {
                    client
                        .place_buy_order(&bot_id, stock_id, quantity, price)
                        .await?
                }
                Side::Sell => {
                    client
                        .place_sell_order(&bot_id, stock_id, quantity, price)
                        .await?
                }
            };
            print_report(&ActionReport::from(&response), cli.json)?;
        }
        Command::CancelOrder {
            order_id,
            ask,
            bot_id,
        } => {
            let response = client.cancel_order(&bot(bot_id)?, order_id, ask).await?;
            print_report(&ActionReport::from(&response), cli.json)?;
        }
    }

    Ok(())
}

/// JSON report printed when `listen` finishes.
#[derive(Serialize)]
struct ListenSummary<'a> {
    streams: &'a [StreamOutcome],
    state: MarketSnapshot,
}

/// Log in and run every stream until they end or a shutdown signal arrives.
async fn listen(
    client: DalalClient,
    config: &MessengerConfig,
    bot_user_id: &str,
    json: bool,
) -> anyhow::Result<()> {
    let state = Arc::new(MarketState::new(config.market_events_capacity));
    let messenger = MarketMessenger::new(client, Arc::clone(&state));

    let shutdown = CancellationToken::new();
    tokio::spawn(await_shutdown(shutdown.clone()));

    let outcomes = messenger.run(bot_user_id, shutdown).await?;

    if json {
        let summary = ListenSummary {
            streams: &outcomes,
            state: state.snapshot(),
        };
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        for outcome in &outcomes {
            println!("{outcome}");
        }
    }

    Ok(())
}

fn print_report(report: &ActionReport, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        println!("{report}");
    }
    Ok(())
}

/// Log the parsed configuration.
fn log_config(config: &MessengerConfig) {
    tracing::info!(
        endpoint = %config.server.endpoint,
        tls = config.server.tls.is_some(),
        default_bot_user_id = %config.bot.default_bot_user_id,
        "Configuration loaded"
    );
}

/// Wait for Ctrl+C or SIGTERM, then cancel the listeners.
async fn await_shutdown(shutdown_token: CancellationToken) {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received Ctrl+C, stopping streams");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, stopping streams");
        }
    }

    shutdown_token.cancel();
}
