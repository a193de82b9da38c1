//! Configuration Module
//!
//! Settings for the bot client, loaded from environment variables.

mod dotenv;
mod settings;

pub use dotenv::{find_dotenv, load_dotenv};

pub use settings::{
    BotSettings, ConfigError, DEFAULT_BOT_USER_ID, DEFAULT_ENDPOINT, MessengerConfig,
    ServerSettings, TlsSettings,
};
