//! Printable results of bot actions.
//!
//! Generated messages carry no serde support, so each successful action
//! response is mapped onto an [`ActionReport`] that serializes to JSON and
//! renders as a single line of text.

use std::fmt;

use serde::Serialize;

use crate::grpc::proto::dalalstreet::api::{
    BuyStocksFromExchangeResponse, CancelOrderResponse, CreateBotResponse, PlaceOrderResponse,
    User,
};

/// User account as returned by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserReport {
    /// User id.
    pub id: u32,
    /// Display name.
    pub name: String,
    /// Login email.
    pub email: String,
    /// Cash in hand.
    pub cash: i64,
    /// Net worth.
    pub total: i64,
}

impl From<&User> for UserReport {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            cash: user.cash,
            total: user.total,
        }
    }
}

/// Outcome of a successful action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ActionReport {
    /// A bot user was created.
    CreateBot {
        /// The new bot, when the server returned it.
        user: Option<UserReport>,
    },
    /// Stocks were bought from the exchange.
    BuyStocksFromExchange {
        /// Price paid per share.
        trading_price: u64,
        /// Shares bought.
        stock_quantity: u64,
    },
    /// An order was placed.
    PlaceOrder {
        /// Id to cancel the order with.
        order_id: u32,
    },
    /// An order was cancelled.
    CancelOrder {
        /// Message the server attached, often empty.
        message: String,
    },
}

impl From<&CreateBotResponse> for ActionReport {
    fn from(response: &CreateBotResponse) -> Self {
        Self::CreateBot {
            user: response.user.as_ref().map(UserReport::from),
        }
    }
}

impl From<&BuyStocksFromExchangeResponse> for ActionReport {
    fn from(response: &BuyStocksFromExchangeResponse) -> Self {
        Self::BuyStocksFromExchange {
            trading_price: response.trading_price,
            stock_quantity: response.stock_quantity,
        }
    }
}

impl From<&PlaceOrderResponse> for ActionReport {
    fn from(response: &PlaceOrderResponse) -> Self {
        Self::PlaceOrder {
            order_id: response.order_id,
        }
    }
}

impl From<&CancelOrderResponse> for ActionReport {
    fn from(response: &CancelOrderResponse) -> Self {
        Self::CancelOrder {
            message: response.status_message.clone(),
        }
    }
}

impl fmt::Display for ActionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CreateBot { user: Some(user) } => {
                write!(f, "created bot {} (user id {})", user.name, user.id)
            }
            Self::CreateBot { user: None } => f.write_str("created bot"),
            Self::BuyStocksFromExchange {
                trading_price,
                stock_quantity,
            } => write!(f, "bought {stock_quantity} shares at {trading_price}"),
            Self::PlaceOrder { order_id } => write!(f, "placed order {order_id}"),
            Self::CancelOrder { .. } => f.write_str("order cancelled"),
        }
    }
}
