//! Wire and view models for the admin API
//!
//! Every record here is a snapshot of what the backend returned. Nothing is
//! mutated in place: a successful fetch replaces the previous value wholesale.

use crate::consts::cli_consts::DEFAULT_DURATION_DAYS;
use serde::{Deserialize, Deserializer, Serialize};

/// Treats an explicit JSON `null` the same as an absent field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Telegram user IDs come back as JSON numbers from the backend, but may be strings.
fn id_as_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Number(i64),
        Text(String),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Number(id) => id.to_string(),
        RawId::Text(id) => id,
    })
}

/// Aggregate statistics returned by `GET /api/admin/stats`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct StatisticsSnapshot {
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_users: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub active_subscriptions: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub expired_subscriptions: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub canceled_subscriptions: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_revenue: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub recent_transactions: Vec<TransactionRecord>,
}

/// A completed payment, as listed in the recent transactions table.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TransactionRecord {
    #[serde(deserialize_with = "id_as_string")]
    pub telegram_user_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub amount: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub currency: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub created_at: String,
}

/// An active subscriber row from `GET /api/admin/subscribers`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SubscriberRecord {
    #[serde(default)]
    pub telegram_username: Option<String>,
    #[serde(deserialize_with = "id_as_string")]
    pub telegram_user_id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub current_period_end: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub amount: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub currency: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub created_at: String,
}

impl SubscriberRecord {
    /// `@username`, or `@ID{telegram_user_id}` when the user never set a username.
    pub fn display_username(&self) -> String {
        match self.telegram_username.as_deref() {
            Some(name) if !name.is_empty() => format!("@{}", name),
            _ => format!("@ID{}", self.telegram_user_id),
        }
    }

    pub fn display_email(&self) -> &str {
        match self.email.as_deref() {
            Some(email) if !email.is_empty() => email,
            _ => "N/A",
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct SubscribersResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub subscribers: Vec<SubscriberRecord>,
}

/// Form state for manually provisioning a subscriber.
///
/// Serializes to the exact body of `POST /api/admin/add-subscriber`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewSubscriberForm {
    pub telegram_username: String,
    pub email: String,
    pub duration_days: u32,
}

impl Default for NewSubscriberForm {
    fn default() -> Self {
        Self {
            telegram_username: String::new(),
            email: String::new(),
            duration_days: DEFAULT_DURATION_DAYS,
        }
    }
}

impl NewSubscriberForm {
    pub fn new(telegram_username: impl Into<String>, email: impl Into<String>, duration_days: u32) -> Self {
        Self {
            telegram_username: telegram_username.into(),
            email: email.into(),
            duration_days,
        }
    }

    /// Both username and email are required before anything is sent.
    pub fn is_complete(&self) -> bool {
        !self.telegram_username.is_empty() && !self.email.is_empty()
    }
}

/// Body of the add-subscriber response. A missing `success` key counts as failure.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AddSubscriberResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}
