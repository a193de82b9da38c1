//! Uniform access to the status code every action response carries.

use super::proto::dalalstreet::api::{
    BuyStocksFromExchangeResponse, CancelOrderResponse, CreateBotResponse, LoginResponse,
    PlaceOrderResponse, SubscribeResponse, UnsubscribeResponse, buy_stocks_from_exchange_response,
    cancel_order_response, create_bot_response, login_response, place_order_response,
    subscribe_response, unsubscribe_response,
};

/// A response from the server that reports success through a `status_code`.
///
/// Every Dalal Street response enum reserves `0` for `OK`.
pub trait ActionResponse: std::fmt::Debug {
    /// RPC name, used in logs and errors.
    const ACTION: &'static str;

    /// Raw status code as sent on the wire.
    fn status_code(&self) -> i32;

    /// Human readable message the server attached to the status.
    fn status_message(&self) -> &str;

    /// Name of the status code, or the raw number when the enum is unknown.
    fn status_name(&self) -> String;

    /// Whether the server reported `OK`.
    fn is_ok(&self) -> bool {
        self.status_code() == 0
    }
}

macro_rules! impl_action_response {
    ($response:ty, $status:ty, $action:literal) => {
        impl ActionResponse for $response {
            const ACTION: &'static str = $action;

            fn status_code(&self) -> i32 {
                self.status_code
            }

            fn status_message(&self) -> &str {
                &self.status_message
            }

            fn status_name(&self) -> String {
                <$status>::try_from(self.status_code).map_or_else(
                    |_| self.status_code.to_string(),
                    |code| code.as_str_name().to_string(),
                )
            }
        }
    };
}

impl_action_response!(LoginResponse, login_response::StatusCode, "Login");
impl_action_response!(CreateBotResponse, create_bot_response::StatusCode, "CreateBot");
impl_action_response!(
    BuyStocksFromExchangeResponse,
    buy_stocks_from_exchange_response::StatusCode,
    "BuyStocksFromExchange"
);
impl_action_response!(PlaceOrderResponse, place_order_response::StatusCode, "PlaceOrder");
impl_action_response!(CancelOrderResponse, cancel_order_response::StatusCode, "CancelOrder");
impl_action_response!(SubscribeResponse, subscribe_response::StatusCode, "Subscribe");
impl_action_response!(UnsubscribeResponse, unsubscribe_response::StatusCode, "Unsubscribe");
