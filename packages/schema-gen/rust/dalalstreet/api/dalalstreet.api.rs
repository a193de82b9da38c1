// @generated
// This file is @generated by prost-build.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Stock {
    #[prost(uint32, tag = "1")]
    pub id: u32,
    #[prost(string, tag = "2")]
    pub short_name: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub full_name: ::prost::alloc::string::String,
    #[prost(string, tag = "4")]
    pub description: ::prost::alloc::string::String,
    #[prost(uint64, tag = "5")]
    pub current_price: u64,
    #[prost(uint64, tag = "6")]
    pub day_high: u64,
    #[prost(uint64, tag = "7")]
    pub day_low: u64,
    #[prost(uint64, tag = "8")]
    pub all_time_high: u64,
    #[prost(uint64, tag = "9")]
    pub all_time_low: u64,
    #[prost(uint64, tag = "10")]
    pub stocks_in_exchange: u64,
    #[prost(uint64, tag = "11")]
    pub stocks_in_market: u64,
    #[prost(uint64, tag = "12")]
    pub previous_day_close: u64,
    #[prost(bool, tag = "13")]
    pub up_or_down: bool,
    #[prost(string, tag = "14")]
    pub created_at: ::prost::alloc::string::String,
    #[prost(string, tag = "15")]
    pub updated_at: ::prost::alloc::string::String,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct User {
    #[prost(uint32, tag = "1")]
    pub id: u32,
    #[prost(string, tag = "2")]
    pub email: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub name: ::prost::alloc::string::String,
    #[prost(int64, tag = "4")]
    pub cash: i64,
    #[prost(int64, tag = "5")]
    pub total: i64,
    #[prost(string, tag = "6")]
    pub created_at: ::prost::alloc::string::String,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MarketEvent {
    #[prost(uint32, tag = "1")]
    pub id: u32,
    #[prost(uint32, tag = "2")]
    pub stock_id: u32,
    #[prost(string, tag = "3")]
    pub headline: ::prost::alloc::string::String,
    #[prost(string, tag = "4")]
    pub text: ::prost::alloc::string::String,
    #[prost(bool, tag = "5")]
    pub is_global: bool,
    #[prost(string, tag = "6")]
    pub image_path: ::prost::alloc::string::String,
    #[prost(string, tag = "7")]
    pub created_at: ::prost::alloc::string::String,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MarketDepthTrade {
    #[prost(uint64, tag = "1")]
    pub trade_price: u64,
    #[prost(uint64, tag = "2")]
    pub trade_quantity: u64,
    #[prost(string, tag = "3")]
    pub trade_time: ::prost::alloc::string::String,
}
#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct StockExchangeDataPoint {
    #[prost(uint64, tag = "1")]
    pub price: u64,
    #[prost(uint64, tag = "2")]
    pub stocks_in_exchange: u64,
    #[prost(uint64, tag = "3")]
    pub stocks_in_market: u64,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct LoginRequest {
    #[prost(string, tag = "1")]
    pub email: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub password: ::prost::alloc::string::String,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct LoginResponse {
    #[prost(enumeration = "login_response::StatusCode", tag = "1")]
    pub status_code: i32,
    #[prost(string, tag = "2")]
    pub status_message: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub session_id: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "4")]
    pub user: ::core::option::Option<User>,
    #[prost(map = "uint32, message", tag = "5")]
    pub stock_list: ::std::collections::HashMap<u32, Stock>,
}
/// Nested message and enum types in `LoginResponse`.
pub mod login_response {
    #[derive(
        Clone,
        Copy,
        Debug,
        PartialEq,
        Eq,
        Hash,
        PartialOrd,
        Ord,
        ::prost::Enumeration
    )]
    #[repr(i32)]
    pub enum StatusCode {
        Ok = 0,
        InternalServerError = 1,
        InvalidCredentialsError = 2,
    }
    impl StatusCode {
        /// String value of the enum field names used in the ProtoBuf definition.
        ///
        /// The values are not transformed in any way and thus are considered stable
        /// (if the ProtoBuf definition does not change) and safe for programmatic use.
        pub fn as_str_name(&self) -> &'static str {
            match self {
                Self::Ok => "OK",
                Self::InternalServerError => "InternalServerError",
                Self::InvalidCredentialsError => "InvalidCredentialsError",
            }
        }
        /// Creates an enum from field names used in the ProtoBuf definition.
        pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
            match value {
                "OK" => Some(Self::Ok),
                "InternalServerError" => Some(Self::InternalServerError),
                "InvalidCredentialsError" => Some(Self::InvalidCredentialsError),
                _ => None,
            }
        }
    }
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreateBotRequest {
    #[prost(string, tag = "1")]
    pub bot_user_id: ::prost::alloc::string::String,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreateBotResponse {
    #[prost(enumeration = "create_bot_response::StatusCode", tag = "1")]
    pub status_code: i32,
    #[prost(string, tag = "2")]
    pub status_message: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "3")]
    pub user: ::core::option::Option<User>,
}
/// Nested message and enum types in `CreateBotResponse`.
pub mod create_bot_response {
    #[derive(
        Clone,
        Copy,
        Debug,
        PartialEq,
        Eq,
        Hash,
        PartialOrd,
        Ord,
        ::prost::Enumeration
    )]
    #[repr(i32)]
    pub enum StatusCode {
        Ok = 0,
        InternalServerError = 1,
    }
    impl StatusCode {
        /// String value of the enum field names used in the ProtoBuf definition.
        ///
        /// The values are not transformed in any way and thus are considered stable
        /// (if the ProtoBuf definition does not change) and safe for programmatic use.
        pub fn as_str_name(&self) -> &'static str {
            match self {
                Self::Ok => "OK",
                Self::InternalServerError => "InternalServerError",
            }
        }
        /// Creates an enum from field names used in the ProtoBuf definition.
        pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
            match value {
                "OK" => Some(Self::Ok),
                "InternalServerError" => Some(Self::InternalServerError),
                _ => None,
            }
        }
    }
}
#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct BuyStocksFromExchangeRequest {
    #[prost(uint32, tag = "1")]
    pub stock_id: u32,
    #[prost(uint64, tag = "2")]
    pub stock_quantity: u64,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct BuyStocksFromExchangeResponse {
    #[prost(enumeration = "buy_stocks_from_exchange_response::StatusCode", tag = "1")]
    pub status_code: i32,
    #[prost(string, tag = "2")]
    pub status_message: ::prost::alloc::string::String,
    #[prost(uint64, tag = "3")]
    pub trading_price: u64,
    #[prost(uint64, tag = "4")]
    pub stock_quantity: u64,
}
/// Nested message and enum types in `BuyStocksFromExchangeResponse`.
pub mod buy_stocks_from_exchange_response {
    #[derive(
        Clone,
        Copy,
        Debug,
        PartialEq,
        Eq,
        Hash,
        PartialOrd,
        Ord,
        ::prost::Enumeration
    )]
    #[repr(i32)]
    pub enum StatusCode {
        Ok = 0,
        InternalServerError = 1,
        MarketClosedError = 2,
        NotEnoughStocksError = 3,
        NotEnoughCashError = 4,
    }
    impl StatusCode {
        /// String value of the enum field names used in the ProtoBuf definition.
        ///
        /// The values are not transformed in any way and thus are considered stable
        /// (if the ProtoBuf definition does not change) and safe for programmatic use.
        pub fn as_str_name(&self) -> &'static str {
            match self {
                Self::Ok => "OK",
                Self::InternalServerError => "InternalServerError",
                Self::MarketClosedError => "MarketClosedError",
                Self::NotEnoughStocksError => "NotEnoughStocksError",
                Self::NotEnoughCashError => "NotEnoughCashError",
            }
        }
        /// Creates an enum from field names used in the ProtoBuf definition.
        pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
            match value {
                "OK" => Some(Self::Ok),
                "InternalServerError" => Some(Self::InternalServerError),
                "MarketClosedError" => Some(Self::MarketClosedError),
                "NotEnoughStocksError" => Some(Self::NotEnoughStocksError),
                "NotEnoughCashError" => Some(Self::NotEnoughCashError),
                _ => None,
            }
        }
    }
}
/// A negative stock_quantity places an ask (sell) order.
#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct PlaceOrderRequest {
    #[prost(uint32, tag = "1")]
    pub stock_id: u32,
    #[prost(int64, tag = "2")]
    pub stock_quantity: i64,
    #[prost(uint64, tag = "3")]
    pub price: u64,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PlaceOrderResponse {
    #[prost(enumeration = "place_order_response::StatusCode", tag = "1")]
    pub status_code: i32,
    #[prost(string, tag = "2")]
    pub status_message: ::prost::alloc::string::String,
    #[prost(uint32, tag = "3")]
    pub order_id: u32,
}
/// Nested message and enum types in `PlaceOrderResponse`.
pub mod place_order_response {
    #[derive(
        Clone,
        Copy,
        Debug,
        PartialEq,
        Eq,
        Hash,
        PartialOrd,
        Ord,
        ::prost::Enumeration
    )]
    #[repr(i32)]
    pub enum StatusCode {
        Ok = 0,
        InternalServerError = 1,
        MarketClosedError = 2,
        NotEnoughStocksError = 3,
        NotEnoughCashError = 4,
        InvalidStockIdError = 5,
    }
    impl StatusCode {
        /// String value of the enum field names used in the ProtoBuf definition.
        ///
        /// The values are not transformed in any way and thus are considered stable
        /// (if the ProtoBuf definition does not change) and safe for programmatic use.
        pub fn as_str_name(&self) -> &'static str {
            match self {
                Self::Ok => "OK",
                Self::InternalServerError => "InternalServerError",
                Self::MarketClosedError => "MarketClosedError",
                Self::NotEnoughStocksError => "NotEnoughStocksError",
                Self::NotEnoughCashError => "NotEnoughCashError",
                Self::InvalidStockIdError => "InvalidStockIdError",
            }
        }
        /// Creates an enum from field names used in the ProtoBuf definition.
        pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
            match value {
                "OK" => Some(Self::Ok),
                "InternalServerError" => Some(Self::InternalServerError),
                "MarketClosedError" => Some(Self::MarketClosedError),
                "NotEnoughStocksError" => Some(Self::NotEnoughStocksError),
                "NotEnoughCashError" => Some(Self::NotEnoughCashError),
                "InvalidStockIdError" => Some(Self::InvalidStockIdError),
                _ => None,
            }
        }
    }
}
#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct CancelOrderRequest {
    #[prost(uint32, tag = "1")]
    pub order_id: u32,
    #[prost(bool, tag = "2")]
    pub is_ask: bool,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CancelOrderResponse {
    #[prost(enumeration = "cancel_order_response::StatusCode", tag = "1")]
    pub status_code: i32,
    #[prost(string, tag = "2")]
    pub status_message: ::prost::alloc::string::String,
}
/// Nested message and enum types in `CancelOrderResponse`.
pub mod cancel_order_response {
    #[derive(
        Clone,
        Copy,
        Debug,
        PartialEq,
        Eq,
        Hash,
        PartialOrd,
        Ord,
        ::prost::Enumeration
    )]
    #[repr(i32)]
    pub enum StatusCode {
        Ok = 0,
        InternalServerError = 1,
        MarketClosedError = 2,
        InvalidOrderId = 3,
    }
    impl StatusCode {
        /// String value of the enum field names used in the ProtoBuf definition.
        ///
        /// The values are not transformed in any way and thus are considered stable
        /// (if the ProtoBuf definition does not change) and safe for programmatic use.
        pub fn as_str_name(&self) -> &'static str {
            match self {
                Self::Ok => "OK",
                Self::InternalServerError => "InternalServerError",
                Self::MarketClosedError => "MarketClosedError",
                Self::InvalidOrderId => "InvalidOrderId",
            }
        }
        /// Creates an enum from field names used in the ProtoBuf definition.
        pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
            match value {
                "OK" => Some(Self::Ok),
                "InternalServerError" => Some(Self::InternalServerError),
                "MarketClosedError" => Some(Self::MarketClosedError),
                "InvalidOrderId" => Some(Self::InvalidOrderId),
                _ => None,
            }
        }
    }
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SubscriptionId {
    #[prost(string, tag = "1")]
    pub id: ::prost::alloc::string::String,
    #[prost(enumeration = "DataStreamType", tag = "2")]
    pub data_stream_type: i32,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SubscribeRequest {
    #[prost(enumeration = "DataStreamType", tag = "1")]
    pub data_stream_type: i32,
    #[prost(string, tag = "2")]
    pub data_stream_id: ::prost::alloc::string::String,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SubscribeResponse {
    #[prost(enumeration = "subscribe_response::StatusCode", tag = "1")]
    pub status_code: i32,
    #[prost(string, tag = "2")]
    pub status_message: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "3")]
    pub subscription_id: ::core::option::Option<SubscriptionId>,
}
/// Nested message and enum types in `SubscribeResponse`.
pub mod subscribe_response {
    #[derive(
        Clone,
        Copy,
        Debug,
        PartialEq,
        Eq,
        Hash,
        PartialOrd,
        Ord,
        ::prost::Enumeration
    )]
    #[repr(i32)]
    pub enum StatusCode {
        Ok = 0,
        InternalServerError = 1,
    }
    impl StatusCode {
        /// String value of the enum field names used in the ProtoBuf definition.
        ///
        /// The values are not transformed in any way and thus are considered stable
        /// (if the ProtoBuf definition does not change) and safe for programmatic use.
        pub fn as_str_name(&self) -> &'static str {
            match self {
                Self::Ok => "OK",
                Self::InternalServerError => "InternalServerError",
            }
        }
        /// Creates an enum from field names used in the ProtoBuf definition.
        pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
            match value {
                "OK" => Some(Self::Ok),
                "InternalServerError" => Some(Self::InternalServerError),
                _ => None,
            }
        }
    }
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct UnsubscribeRequest {
    #[prost(message, optional, tag = "1")]
    pub subscription_id: ::core::option::Option<SubscriptionId>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct UnsubscribeResponse {
    #[prost(enumeration = "unsubscribe_response::StatusCode", tag = "1")]
    pub status_code: i32,
    #[prost(string, tag = "2")]
    pub status_message: ::prost::alloc::string::String,
}
/// Nested message and enum types in `UnsubscribeResponse`.
pub mod unsubscribe_response {
    #[derive(
        Clone,
        Copy,
        Debug,
        PartialEq,
        Eq,
        Hash,
        PartialOrd,
        Ord,
        ::prost::Enumeration
    )]
    #[repr(i32)]
    pub enum StatusCode {
        Ok = 0,
        InternalServerError = 1,
    }
    impl StatusCode {
        /// String value of the enum field names used in the ProtoBuf definition.
        ///
        /// The values are not transformed in any way and thus are considered stable
        /// (if the ProtoBuf definition does not change) and safe for programmatic use.
        pub fn as_str_name(&self) -> &'static str {
            match self {
                Self::Ok => "OK",
                Self::InternalServerError => "InternalServerError",
            }
        }
        /// Creates an enum from field names used in the ProtoBuf definition.
        pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
            match value {
                "OK" => Some(Self::Ok),
                "InternalServerError" => Some(Self::InternalServerError),
                _ => None,
            }
        }
    }
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct StockPricesUpdate {
    #[prost(map = "uint32, uint64", tag = "1")]
    pub prices: ::std::collections::HashMap<u32, u64>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct StockExchangeUpdate {
    #[prost(map = "uint32, message", tag = "1")]
    pub stocks_in_exchange: ::std::collections::HashMap<u32, StockExchangeDataPoint>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MarketDepthUpdate {
    #[prost(uint32, tag = "1")]
    pub stock_id: u32,
    #[prost(map = "uint64, uint64", tag = "2")]
    pub ask_depth: ::std::collections::HashMap<u64, u64>,
    #[prost(map = "uint64, uint64", tag = "3")]
    pub bid_depth: ::std::collections::HashMap<u64, u64>,
    #[prost(map = "uint64, uint64", tag = "4")]
    pub ask_depth_diff: ::std::collections::HashMap<u64, u64>,
    #[prost(map = "uint64, uint64", tag = "5")]
    pub bid_depth_diff: ::std::collections::HashMap<u64, u64>,
    #[prost(message, repeated, tag = "6")]
    pub latest_trades: ::prost::alloc::vec::Vec<MarketDepthTrade>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MarketEventUpdate {
    #[prost(message, optional, tag = "1")]
    pub market_event: ::core::option::Option<MarketEvent>,
}
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum DataStreamType {
    MarketDepth = 0,
    StockExchange = 1,
    StockPrices = 2,
    MarketEvents = 3,
}
impl DataStreamType {
    /// String value of the enum field names used in the ProtoBuf definition.
    ///
    /// The values are not transformed in any way and thus are considered stable
    /// (if the ProtoBuf definition does not change) and safe for programmatic use.
    pub fn as_str_name(&self) -> &'static str {
        match self {
            Self::MarketDepth => "MARKET_DEPTH",
            Self::StockExchange => "STOCK_EXCHANGE",
            Self::StockPrices => "STOCK_PRICES",
            Self::MarketEvents => "MARKET_EVENTS",
        }
    }
    /// Creates an enum from field names used in the ProtoBuf definition.
    pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
        match value {
            "MARKET_DEPTH" => Some(Self::MarketDepth),
            "STOCK_EXCHANGE" => Some(Self::StockExchange),
            "STOCK_PRICES" => Some(Self::StockPrices),
            "MARKET_EVENTS" => Some(Self::MarketEvents),
            _ => None,
        }
    }
}
include!("dalalstreet.api.tonic.rs");
// @@protoc_insertion_point(module)
