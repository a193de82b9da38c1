//! Dalal Street Client
//!
//! gRPC client for the Dalal Street trading-simulation server. Every call
//! carries bot metadata (see [`BotAuth`]); the server owns all trading
//! logic and this client only forwards requests and checks status codes.
//!
//! # Usage
//!
//! ```ignore
//! use market_messenger::client::{BotAuth, DalalClient};
//! use market_messenger::config::ServerSettings;
//!
//! let settings = ServerSettings::new("http://localhost:8000");
//! let client = DalalClient::connect(&settings, BotAuth::new("hellobots", "fakeid")).await?;
//!
//! let login = client.login("2127").await?;
//! println!("{} stocks listed", login.stock_list.len());
//!
//! let order = client.place_buy_order("2127", 1, 10, 250).await?;
//! client.cancel_order("2127", order.order_id, false).await?;
//! ```

mod auth;
mod dalal;
mod error;

pub use auth::{BOT_SECRET_KEY, BOT_USER_ID_KEY, BotAuth};
pub use dalal::{BOT_LOGIN_EMAIL, BOT_LOGIN_PASSWORD, DalalClient};
pub use error::ClientError;
