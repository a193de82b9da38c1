//! Bot authentication metadata.
//!
//! The server grants bot API access to any call carrying the shared
//! `bot_secret`, and acts on behalf of the user named in `bot_user_id`.

use tonic::Request;
use tonic::metadata::{AsciiMetadataValue, MetadataKey};

use super::error::ClientError;

/// Metadata key for the shared bot secret.
pub const BOT_SECRET_KEY: &str = "bot_secret";

/// Metadata key for the acting bot user.
pub const BOT_USER_ID_KEY: &str = "bot_user_id";

/// Bot credentials attached to every request.
#[derive(Clone)]
pub struct BotAuth {
    secret: String,
    default_user_id: String,
}

impl BotAuth {
    /// Create credentials from the shared secret and the user id used when a
    /// call does not name a bot.
    #[must_use]
    pub fn new(secret: impl Into<String>, default_user_id: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            default_user_id: default_user_id.into(),
        }
    }

    /// The user id sent when no bot is named.
    #[must_use]
    pub fn default_user_id(&self) -> &str {
        &self.default_user_id
    }

    /// Wrap `message` in a request acting as `bot_user_id`, or as the default
    /// user when `None`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidMetadata`] if the secret or user id is not
    /// a valid ASCII header value.
    pub fn request<T>(&self, message: T, bot_user_id: Option<&str>) -> Result<Request<T>, ClientError> {
        let user_id = bot_user_id.unwrap_or(&self.default_user_id);

        let mut request = Request::new(message);
        let metadata = request.metadata_mut();
        metadata.insert(
            MetadataKey::from_static(BOT_SECRET_KEY),
            ascii_value(BOT_SECRET_KEY, &self.secret)?,
        );
        metadata.insert(
            MetadataKey::from_static(BOT_USER_ID_KEY),
            ascii_value(BOT_USER_ID_KEY, user_id)?,
        );

        Ok(request)
    }
}

impl std::fmt::Debug for BotAuth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BotAuth")
            .field("secret", &"[REDACTED]")
            .field("default_user_id", &self.default_user_id)
            .finish()
    }
}

fn ascii_value(key: &'static str, value: &str) -> Result<AsciiMetadataValue, ClientError> {
    value
        .parse()
        .map_err(|_| ClientError::InvalidMetadata { key })
}
