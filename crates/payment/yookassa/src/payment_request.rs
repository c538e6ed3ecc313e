use std::{collections::HashMap, fmt};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use serde_with::skip_serializing_none;

/// Monetary amount. `value` is kept as the decimal string the gateway uses
/// and is never converted to a float.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Amount {
    pub value: String,
    pub currency: String,
}

impl Amount {
    pub fn new(value: impl Into<String>, currency: impl Into<String>) -> Amount {
        Amount {
            value: value.into(),
            currency: currency.into(),
        }
    }

    pub fn rub(value: impl Into<String>) -> Amount {
        Amount::new(value, "RUB")
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.currency)
    }
}

/// User-facing step that authorizes a payment. The same shape is sent in a
/// request and returned by the gateway, which fills in the `confirmation_*`
/// fields.
#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Confirmation {
    Redirect {
        return_url: Option<String>,
        confirmation_url: Option<String>,
        enforce: Option<bool>,
        locale: Option<String>,
    },
    Embedded {
        confirmation_token: Option<String>,
        locale: Option<String>,
    },
    External {
        locale: Option<String>,
    },
    Qr {
        confirmation_data: Option<String>,
        return_url: Option<String>,
        locale: Option<String>,
    },
    MobileApplication {
        confirmation_url: Option<String>,
        return_url: Option<String>,
        locale: Option<String>,
    },
    /// Confirmation types not modelled here, kept as received.
    #[serde(untagged)]
    Other(Map<String, Value>),
}

impl Confirmation {
    pub fn redirect(return_url: impl Into<String>) -> Confirmation {
        Confirmation::Redirect {
            return_url: Some(return_url.into()),
            confirmation_url: None,
            enforce: None,
            locale: None,
        }
    }

    pub fn embedded() -> Confirmation {
        Confirmation::Embedded {
            confirmation_token: None,
            locale: None,
        }
    }

    /// Url the payer has to be sent to, if the gateway returned one.
    pub fn confirmation_url(&self) -> Option<&str> {
        match self {
            Confirmation::Redirect {
                confirmation_url, ..
            }
            | Confirmation::MobileApplication {
                confirmation_url, ..
            } => confirmation_url.as_deref(),
            _ => None,
        }
    }
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PaymentMethodData {
    BankCard {
        card: Option<CardData>,
    },
    YooMoney,
    Sbp,
    #[serde(rename = "sberbank")]
    SberPay {
        phone: Option<String>,
    },
}

impl PaymentMethodData {
    pub fn bank_card() -> PaymentMethodData {
        PaymentMethodData::BankCard { card: None }
    }
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct CardData {
    pub number: String,
    pub expiry_year: String,
    pub expiry_month: String,
    pub cardholder: Option<String>,
    pub csc: Option<String>,
}

impl fmt::Debug for CardData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let last4 = self
            .number
            .len()
            .checked_sub(4)
            .and_then(|start| self.number.get(start..))
            .unwrap_or("");
        f.debug_struct("CardData")
            .field("number", &format_args!("*{}", last4))
            .field("expiry_year", &self.expiry_year)
            .field("expiry_month", &self.expiry_month)
            .field("cardholder", &self.cardholder)
            .field("csc", &self.csc.as_ref().map(|_| "***"))
            .finish()
    }
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CreatePayment {
    pub amount: Amount,
    /// `true` charges immediately, `false` only holds the funds until
    /// capture or cancel.
    pub capture: bool,
    pub description: Option<String>,
    pub confirmation: Option<Confirmation>,
    pub payment_method_data: Option<PaymentMethodData>,
    /// Saved method to charge without payer interaction.
    pub payment_method_id: Option<String>,
    pub save_payment_method: Option<bool>,
    pub metadata: Option<HashMap<String, String>>,
}

impl CreatePayment {
    pub fn new(amount: Amount, capture: bool) -> CreatePayment {
        CreatePayment {
            amount,
            capture,
            description: None,
            confirmation: None,
            payment_method_data: None,
            payment_method_id: None,
            save_payment_method: None,
            metadata: None,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn confirmation(mut self, confirmation: Confirmation) -> Self {
        self.confirmation = Some(confirmation);
        self
    }

    pub fn payment_method_data(mut self, data: PaymentMethodData) -> Self {
        self.payment_method_data = Some(data);
        self
    }

    pub fn payment_method_id(mut self, id: impl Into<String>) -> Self {
        self.payment_method_id = Some(id.into());
        self
    }

    pub fn save_payment_method(mut self, save: bool) -> Self {
        self.save_payment_method = Some(save);
        self
    }

    pub fn metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct CapturePayment {
    pub amount: Option<Amount>,
}
