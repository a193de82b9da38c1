//! Command line interface.

use clap::{Parser, Subcommand, ValueEnum};

/// Bot client for the Dalal Street trading simulation.
#[derive(Debug, Parser)]
#[command(name = "market-messenger", version)]
#[command(about = "Bot client for the Dalal Street trading simulation")]
pub struct Cli {
    /// Print results as JSON instead of text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Action to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available actions.
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Log in and print every market data stream until Ctrl+C.
    Listen {
        /// Bot user to log in as (defaults to `DALAL_BOT_USER_ID`).
        #[arg(long)]
        bot_user_id: Option<String>,
    },
    /// Create a bot user on the server.
    CreateBot {
        /// Name of the new bot.
        name: String,
    },
    /// Buy stocks directly from the exchange.
    Buy {
        /// Stock to buy.
        stock_id: u32,
        /// Number of shares.
        quantity: u32,
        /// Bot acting (defaults to `DALAL_BOT_USER_ID`).
        #[arg(long)]
        bot_id: Option<String>,
    },
    /// Place a bid or ask order.
    PlaceOrder {
        /// Order side.
        #[arg(value_enum)]
        side: Side,
        /// Stock to trade.
        stock_id: u32,
        /// Number of shares.
        quantity: u32,
        /// Limit price.
        price: u64,
        /// Bot acting (defaults to `DALAL_BOT_USER_ID`).
        #[arg(long)]
        bot_id: Option<String>,
    },
    /// Cancel an open order.
    CancelOrder {
        /// Order to cancel.
        order_id: u32,
        /// The order is an ask (sell) order.
        #[arg(long)]
        ask: bool,
        /// Bot acting (defaults to `DALAL_BOT_USER_ID`).
        #[arg(long)]
        bot_id: Option<String>,
    },
}

/// Order side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Side {
    /// Bid.
    Buy,
    /// Ask.
    Sell,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_listen() {
        let cli = Cli::try_parse_from(["market-messenger", "listen", "--bot-user-id", "2127"]).unwrap();
        assert_eq!(
            cli.command,
            Command::Listen {
                bot_user_id: Some("2127".to_string())
            }
        );
        assert!(!cli.json);
    }

    #[test]
    fn parses_sell_order() {
        let cli = Cli::try_parse_from([
            "market-messenger",
            "place-order",
            "sell",
            "3",
            "10",
            "250",
            "--bot-id",
            "7",
            "--json",
        ])
        .unwrap();

        assert!(cli.json);
        assert_eq!(
            cli.command,
            Command::PlaceOrder {
                side: Side::Sell,
                stock_id: 3,
                quantity: 10,
                price: 250,
                bot_id: Some("7".to_string()),
            }
        );
    }

    #[test]
    fn parses_cancel_ask() {
        let cli = Cli::try_parse_from(["market-messenger", "cancel-order", "42", "--ask"]).unwrap();
        assert_eq!(
            cli.command,
            Command::CancelOrder {
                order_id: 42,
                ask: true,
                bot_id: None,
            }
        );
    }

    #[test]
    fn rejects_negative_quantity() {
        assert!(Cli::try_parse_from(["market-messenger", "buy", "1", "-5"]).is_err());
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
