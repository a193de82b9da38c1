//! Error types for the Dalal Street client.

use thiserror::Error;

/// Errors that can occur when talking to the Dalal Street server.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Failed to connect to the server.
    #[error("connection failed: {message}")]
    ConnectionFailed {
        /// Error message describing the connection failure.
        message: String,
    },

    /// Transport error during communication.
    #[error("transport error: {0}")]
    Transport(#[from] tonic::transport::Error),

    /// gRPC status error from the server.
    #[error("grpc error: {0}")]
    Status(#[from] tonic::Status),

    /// The server answered but with a non-OK status code.
    #[error("{action} returned {status}: {message}")]
    NonOkStatus {
        /// RPC that was called.
        action: &'static str,
        /// Name of the status code.
        status: String,
        /// Status message sent by the server.
        message: String,
    },

    /// Login was rejected for the given bot user.
    #[error("invalid credentials for bot user {bot_user_id}")]
    InvalidCredentials {
        /// Bot user id that attempted to log in.
        bot_user_id: String,
    },

    /// Subscribe succeeded but carried no subscription id.
    #[error("subscribe response for {stream} carried no subscription id")]
    MissingSubscriptionId {
        /// Stream that was being subscribed to.
        stream: String,
    },

    /// A value could not be sent as gRPC metadata.
    #[error("invalid metadata value for {key}")]
    InvalidMetadata {
        /// Metadata key.
        key: &'static str,
    },

    /// Invalid configuration.
    #[error("invalid configuration: {message}")]
    InvalidConfig {
        /// Error message describing the configuration issue.
        message: String,
    },

    /// Failed to read the TLS certificate.
    #[error("failed to read TLS certificate: {0}")]
    Tls(#[from] std::io::Error),
}

impl ClientError {
    /// gRPC status code when the failure came from the transport layer.
    #[must_use]
    pub fn grpc_code(&self) -> Option<tonic::Code> {
        match self {
            Self::Status(status) => Some(status.code()),
            _ => None,
        }
    }
}
