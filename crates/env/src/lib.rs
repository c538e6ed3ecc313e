use std::{
    env::{var, VarError},
    sync::Arc,
    time::Duration,
};

use dotenv::dotenv;
use eyre::{Context, Error};
use yookassa::Config;

const DEFAULT_RETURN_URL: &str = "https://example.com";

#[derive(Clone)]
pub struct Env(Arc<EnvInner>);

#[derive(Clone)]
pub struct EnvInner {
    shop_id: String,
    api_key: String,
    return_url: String,
    api_url: Option<String>,
    timeout: Option<Duration>,
}

impl Env {
    pub fn shop_id(&self) -> &str {
        &self.0.shop_id
    }

    pub fn api_key(&self) -> &str {
        &self.0.api_key
    }

    pub fn return_url(&self) -> &str {
        &self.0.return_url
    }

    pub fn api_url(&self) -> Option<&str> {
        self.0.api_url.as_deref()
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.0.timeout
    }

    pub fn config(&self) -> Config {
        let mut config = Config::new(self.shop_id(), self.api_key());
        if let Some(url) = self.api_url() {
            config = config.with_base_url(url);
        }
        if let Some(timeout) = self.timeout() {
            config = config.with_timeout(timeout);
        }
        config
    }

    /// Loads `.env` into the process environment, then reads it.
    pub fn load() -> Result<Env, Error> {
        if let Err(err) = dotenv() {
            log::debug!("No .env file loaded: {}", err);
        }
        Env::from_env()
    }

    /// Reads the process environment as is.
    pub fn from_env() -> Result<Env, Error> {
        Ok(Env(Arc::new(EnvInner {
            shop_id: var("SHOP_ID").context("SHOP_ID is not set")?,
            api_key: var("API_KEY").context("API_KEY is not set")?,
            return_url: optional("RETURN_URL")?.unwrap_or_else(|| DEFAULT_RETURN_URL.to_owned()),
            api_url: optional("YOOKASSA_URL")?,
            timeout: parse_timeout(var("YOOKASSA_TIMEOUT_SECS"))?,
        })))
    }
}

fn optional(name: &str) -> Result<Option<String>, Error> {
    match var(name) {
        Ok(value) => Ok(Some(value)),
        Err(VarError::NotPresent) => Ok(None),
        Err(err) => Err(err).with_context(|| format!("{} is not valid unicode", name)),
    }
}

fn parse_timeout(value: Result<String, VarError>) -> Result<Option<Duration>, Error> {
    let secs = match value {
        Ok(secs) => secs,
        Err(VarError::NotPresent) => return Ok(None),
        Err(err) => return Err(err).context("YOOKASSA_TIMEOUT_SECS is not valid unicode"),
    };
    let secs = secs
        .trim()
        .parse()
        .context("YOOKASSA_TIMEOUT_SECS is not a number of seconds")?;
    Ok(Some(Duration::from_secs(secs)))
}
