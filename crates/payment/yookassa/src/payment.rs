use std::{collections::HashMap, fmt};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use serde_with::skip_serializing_none;

use crate::payment_request::{Amount, Confirmation};

// https://yookassa.ru/developers/api#payment_object
#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Payment {
    pub id: String,
    pub status: PaymentStatus,
    pub amount: Amount,
    /// Amount credited to the shop after the gateway fee.
    pub income_amount: Option<Amount>,
    pub description: Option<String>,
    pub recipient: Option<Recipient>,
    pub payment_method: Option<PaymentMethod>,
    pub captured_at: Option<DateTime<Utc>>,
    pub created_at: Option<DateTime<Utc>>,
    pub expires_at: Option<DateTime<Utc>>,
    pub confirmation: Option<Confirmation>,
    #[serde(default)]
    pub test: bool,
    pub refunded_amount: Option<Amount>,
    #[serde(default)]
    pub paid: bool,
    #[serde(default)]
    pub refundable: bool,
    pub metadata: Option<HashMap<String, String>>,
    pub cancellation_details: Option<CancellationDetails>,
    pub authorization_details: Option<AuthorizationDetails>,
}

impl Payment {
    pub fn confirmation_url(&self) -> Option<&str> {
        self.confirmation
            .as_ref()
            .and_then(|confirmation| confirmation.confirmation_url())
    }
}

/// Status string as reported by the gateway. Transitions are owned by the
/// gateway, so the value is not validated here.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct PaymentStatus(String);

impl PaymentStatus {
    pub fn new(status: impl Into<String>) -> PaymentStatus {
        PaymentStatus(status.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for PaymentStatus {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for PaymentStatus {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Recipient {
    pub account_id: String,
    pub gateway_id: String,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PaymentMethod {
    /// Id of the saved method, used for recurring charges.
    pub id: String,
    #[serde(default)]
    pub saved: bool,
    pub title: Option<String>,
    #[serde(flatten)]
    pub details: PaymentMethodDetails,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PaymentMethodDetails {
    BankCard {
        card: Option<Card>,
    },
    YooMoney {
        account_number: Option<String>,
    },
    Sbp,
    #[serde(rename = "sberbank")]
    SberPay {
        phone: Option<String>,
    },
    /// Method types not modelled here, kept as received.
    #[serde(untagged)]
    Other(Map<String, Value>),
}

impl PaymentMethodDetails {
    /// Value of the `type` discriminator.
    pub fn method_type(&self) -> &str {
        match self {
            PaymentMethodDetails::BankCard { .. } => "bank_card",
            PaymentMethodDetails::YooMoney { .. } => "yoo_money",
            PaymentMethodDetails::Sbp => "sbp",
            PaymentMethodDetails::SberPay { .. } => "sberbank",
            PaymentMethodDetails::Other(fields) => fields
                .get("type")
                .and_then(Value::as_str)
                .unwrap_or_default(),
        }
    }
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub first6: Option<String>,
    pub last4: String,
    pub expiry_month: String,
    pub expiry_year: String,
    pub card_type: String,
    pub card_product: Option<CardProduct>,
    pub issuer_country: Option<String>,
    pub issuer_name: Option<String>,
    pub source: Option<String>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CardProduct {
    pub code: String,
    pub name: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CancellationDetails {
    pub party: String,
    pub reason: String,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct AuthorizationDetails {
    pub rrn: Option<String>,
    pub auth_code: Option<String>,
    pub three_d_secure: Option<ThreeDSecure>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ThreeDSecure {
    pub applied: bool,
}
