pub mod config;
pub mod error;
pub mod payment;
pub mod payment_request;

use std::sync::Arc;

use reqwest::{
    header::{CONTENT_TYPE, HeaderValue},
    Method, RequestBuilder, StatusCode,
};
use url::Url;
use uuid::Uuid;

pub use config::Config;
pub use error::{ApiError, Error};
pub use payment::{Payment, PaymentMethod, PaymentMethodDetails, PaymentStatus};
pub use payment_request::{Amount, CapturePayment, Confirmation, CreatePayment, PaymentMethodData};

pub const IDEMPOTENCE_KEY: &str = "Idempotence-Key";

/// Client for the YooKassa payments API.
///
/// Every call is a single round-trip with a fresh idempotence key. Nothing is
/// retried; dropping a returned future aborts the request.
#[derive(Clone)]
pub struct YooKassa(Arc<YooKassaInner>);

struct YooKassaInner {
    client: reqwest::Client,
    base_url: Url,
    shop_id: String,
    secret_key: String,
}

impl YooKassa {
    pub fn new(config: Config) -> Result<Self, Error> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|err| Error::Config(format!("invalid base url {}: {}", config.base_url, err)))?;
        if base_url.cannot_be_a_base() {
            return Err(Error::Config(format!(
                "{} cannot be used as a base url",
                config.base_url
            )));
        }

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(YooKassa(Arc::new(YooKassaInner {
            client: builder.build()?,
            base_url,
            shop_id: config.shop_id,
            secret_key: config.secret_key,
        })))
    }

    pub fn shop_id(&self) -> &str {
        &self.0.shop_id
    }

    pub async fn create_payment(&self, payment: &CreatePayment) -> Result<Payment, Error> {
        log::info!(
            "Creating payment: {} capture:{}",
            payment.amount,
            payment.capture
        );
        let request = self.request(Method::POST, &["payments"])?.json(payment);
        self.execute(request).await
    }

    pub async fn payment_status(&self, payment_id: &str) -> Result<Payment, Error> {
        let request = self.request(Method::GET, &["payments", payment_id])?;
        self.execute(request).await
    }

    /// Captures a held payment. Without an amount the whole held sum is
    /// captured.
    pub async fn capture_payment(
        &self,
        payment_id: &str,
        amount: Option<Amount>,
    ) -> Result<Payment, Error> {
        log::info!("Capturing payment {}", payment_id);
        let body = CapturePayment { amount };
        let request = self
            .request(Method::POST, &["payments", payment_id, "capture"])?
            .json(&body);
        self.execute(request).await
    }

    pub async fn cancel_payment(&self, payment_id: &str) -> Result<Payment, Error> {
        log::info!("Canceling payment {}", payment_id);
        let request = self.request(Method::POST, &["payments", payment_id, "cancel"])?;
        self.execute(request).await
    }

    fn request(&self, method: Method, segments: &[&str]) -> Result<RequestBuilder, Error> {
        let mut url = self.0.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| Error::Config(format!("{} cannot be used as a base url", self.0.base_url)))?
            .pop_if_empty()
            .extend(segments);

        let idempotence_key = Uuid::new_v4().to_string();
        log::debug!("{} {} {}:{}", method, url.path(), IDEMPOTENCE_KEY, idempotence_key);

        Ok(self
            .0
            .client
            .request(method, url)
            .basic_auth(&self.0.shop_id, Some(&self.0.secret_key))
            .header(IDEMPOTENCE_KEY, idempotence_key)
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json")))
    }

    async fn execute(&self, request: RequestBuilder) -> Result<Payment, Error> {
        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if status != StatusCode::OK {
            log::warn!("YooKassa responded with {}: {}", status, body);
            return Err(Error::gateway(status.as_u16(), body));
        }
        log::debug!("YooKassa responded with {}", status);

        serde_json::from_str(&body).map_err(|source| Error::Decode { source, body })
    }
}
