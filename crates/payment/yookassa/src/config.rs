use std::{fmt, time::Duration};

pub const DEFAULT_BASE_URL: &str = "https://api.yookassa.ru/v3/";

/// Shop credentials and transport settings for [`crate::YooKassa`].
#[derive(Clone)]
pub struct Config {
    pub(crate) shop_id: String,
    pub(crate) secret_key: String,
    pub(crate) base_url: String,
    pub(crate) timeout: Option<Duration>,
}

impl Config {
    pub fn new(shop_id: impl Into<String>, secret_key: impl Into<String>) -> Config {
        Config {
            shop_id: shop_id.into(),
            secret_key: secret_key.into(),
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: None,
        }
    }

    /// Root the `payments` resource is resolved against.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Config {
        self.base_url = base_url.into();
        self
    }

    /// Limit for the whole round-trip, body read included.
    pub fn with_timeout(mut self, timeout: Duration) -> Config {
        self.timeout = Some(timeout);
        self
    }

    pub fn shop_id(&self) -> &str {
        &self.shop_id
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("shop_id", &self.shop_id)
            .field("secret_key", &"***")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}
