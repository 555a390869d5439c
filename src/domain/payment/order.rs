//! Order creation request value object.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Currency used when the client does not name one.
pub const DEFAULT_CURRENCY: &str = "INR";

/// Fields forwarded to the gateway's order API.
///
/// Only the amount is typed. Receipt presence, currency codes and note
/// values are the gateway's rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRequest {
    /// Amount in the currency's minor unit (paise for INR).
    pub amount: i64,

    /// ISO 4217 currency code.
    pub currency: String,

    /// Merchant-side receipt reference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receipt: Option<String>,

    /// Free-form notes attached to the order, forwarded as given.
    #[serde(default)]
    pub notes: BTreeMap<String, Value>,
}

impl OrderRequest {
    /// Creates a request in the default currency with no notes.
    pub fn new(amount: i64, receipt: impl Into<String>) -> Self {
        Self {
            amount,
            currency: DEFAULT_CURRENCY.to_string(),
            receipt: Some(receipt.into()),
            notes: BTreeMap::new(),
        }
    }

    /// Sets the currency.
    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    /// Adds a note.
    pub fn with_note(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.notes.insert(key.into(), value.into());
        self
    }
}
