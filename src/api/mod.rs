use crate::models::{AddSubscriberResponse, NewSubscriberForm, StatisticsSnapshot, SubscriberRecord};
use error::ApiError;

pub(crate) mod client;
pub use client::AdminClient;
pub mod error;

#[cfg(test)]
use mockall::automock;

/// The remote admin API consumed by the dashboard and the one-shot commands.
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait AdminApi: Send + Sync {
    /// `GET /api/admin/stats`
    async fn get_statistics(&self) -> Result<StatisticsSnapshot, ApiError>;

    /// `GET /api/admin/subscribers`
    async fn list_subscribers(&self) -> Result<Vec<SubscriberRecord>, ApiError>;

    /// `POST /api/admin/add-subscriber`
    ///
    /// An `Ok` only means the server answered; check `success` on the body.
    async fn add_subscriber(
        &self,
        form: NewSubscriberForm,
    ) -> Result<AddSubscriberResponse, ApiError>;
}
