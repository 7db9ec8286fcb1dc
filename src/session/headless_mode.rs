//! One-shot commands
//!
//! Each command issues a single request through the same [`AdminApi`] the
//! dashboard uses and prints the result with the dashboard's display rules.

use super::messages::SessionMessage;
use crate::api::AdminApi;
use crate::api::error::ApiError;
use crate::consts::cli_consts::notices::{
    ADD_FAILED, ADD_TRANSPORT_FAILED, MISSING_FIELDS, SUBSCRIBER_ADDED,
};
use crate::models::{NewSubscriberForm, StatisticsSnapshot, SubscriberRecord};
use crate::ui::dashboard::components::statistics::summary_tiles;
use crate::ui::dashboard::utils::{format_money, format_timestamp};
use std::fmt::Write;
use thiserror::Error;

/// Why an add-subscriber command did not go through.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("{}", MISSING_FIELDS)]
    Validation,

    /// The backend answered but refused the request.
    #[error("{0}")]
    Rejected(String),

    #[error("{}", ADD_TRANSPORT_FAILED)]
    Transport(#[source] ApiError),
}

/// Fetches the statistics snapshot and prints it.
pub async fn print_statistics(api: &dyn AdminApi) -> Result<(), ApiError> {
    match api.get_statistics().await {
        Ok(stats) => {
            print!("{}", statistics_report(&stats));
            Ok(())
        }
        Err(e) => {
            log::error!("Error fetching stats: {}", e);
            SessionMessage::error(format!("Error fetching stats: {}", e)).print();
            Err(e)
        }
    }
}

/// Fetches the active subscribers and prints them as a table.
pub async fn print_subscribers(api: &dyn AdminApi) -> Result<(), ApiError> {
    match api.list_subscribers().await {
        Ok(subscribers) => {
            print!("{}", subscribers_report(&subscribers));
            Ok(())
        }
        Err(e) => {
            log::error!("Error fetching subscribers: {}", e);
            SessionMessage::error(format!("Error fetching subscribers: {}", e)).print();
            Err(e)
        }
    }
}

/// Validates the form and submits it. Returns the confirmation text on success.
///
/// No request is made when a text field is empty.
pub async fn add_subscriber(
    api: &dyn AdminApi,
    form: NewSubscriberForm,
) -> Result<&'static str, CommandError> {
    if !form.is_complete() {
        return Err(CommandError::Validation);
    }

    match api.add_subscriber(form).await {
        Ok(response) if response.success => Ok(SUBSCRIBER_ADDED),
        Ok(response) => {
            let reason = response
                .error
                .filter(|e| !e.is_empty())
                .unwrap_or_else(|| ADD_FAILED.to_string());
            Err(CommandError::Rejected(reason))
        }
        Err(e) => {
            log::error!("Error adding subscriber: {}", e);
            Err(CommandError::Transport(e))
        }
    }
}

/// Plain-text rendition of the statistics view.
pub fn statistics_report(stats: &StatisticsSnapshot) -> String {
    let mut out = String::new();
    for tile in summary_tiles(stats) {
        let _ = writeln!(out, "{:<24}{}", format!("{}:", tile.label), tile.value);
    }
    let _ = writeln!(
        out,
        "{:<24}{}",
        "Canceled Subscriptions:", stats.canceled_subscriptions
    );
    out.push('\n');
    out.push_str("Recent Transactions\n");

    if stats.recent_transactions.is_empty() {
        out.push_str("No recent transactions\n");
        return out;
    }

    let _ = writeln!(
        out,
        "{:<16}{:<16}{:<12}{}",
        "USER ID", "AMOUNT", "STATUS", "DATE"
    );
    for transaction in &stats.recent_transactions {
        let _ = writeln!(
            out,
            "{:<16}{:<16}{:<12}{}",
            transaction.telegram_user_id,
            format_money(transaction.amount, &transaction.currency),
            transaction.status,
            format_timestamp(&transaction.created_at),
        );
    }
    out
}

/// Plain-text rendition of the subscribers view.
pub fn subscribers_report(subscribers: &[SubscriberRecord]) -> String {
    if subscribers.is_empty() {
        return "No active subscribers found\n".to_string();
    }

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<24}{:<28}{:<20}{:<14}{}",
        "TELEGRAM USERNAME", "EMAIL", "SUBSCRIPTION END", "AMOUNT", "JOINED"
    );
    for subscriber in subscribers {
        let _ = writeln!(
            out,
            "{:<24}{:<28}{:<20}{:<14}{}",
            subscriber.display_username(),
            subscriber.display_email(),
            format_timestamp(&subscriber.current_period_end),
            format_money(subscriber.amount, &subscriber.currency),
            format_timestamp(&subscriber.created_at),
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockAdminApi;
    use crate::models::{AddSubscriberResponse, TransactionRecord};

    fn rejected(error: Option<&str>) -> AddSubscriberResponse {
        AddSubscriberResponse {
            success: false,
            error: error.map(str::to_string),
            message: None,
        }
    }

    #[tokio::test]
    async fn incomplete_form_is_rejected_without_a_request() {
        let mut mock = MockAdminApi::new();
        mock.expect_add_subscriber().never();

        let result = add_subscriber(&mock, NewSubscriberForm::new("", "a@x.com", 30)).await;
        assert!(matches!(result, Err(CommandError::Validation)));
        assert_eq!(
            result.unwrap_err().to_string(),
            "Please fill in all fields"
        );
    }

    #[tokio::test]
    async fn accepted_form_returns_confirmation() {
        let mut mock = MockAdminApi::new();
        mock.expect_add_subscriber()
            .withf(|form| {
                form.telegram_username == "alice"
                    && form.email == "a@x.com"
                    && form.duration_days == 30
            })
            .times(1)
            .returning(|_| {
                Ok(AddSubscriberResponse {
                    success: true,
                    error: None,
                    message: Some("Subscriber added successfully".to_string()),
                })
            });

        let result = add_subscriber(&mock, NewSubscriberForm::new("alice", "a@x.com", 30)).await;
        assert_eq!(result.unwrap(), "Subscriber added successfully!");
    }

    #[tokio::test]
    async fn server_rejection_is_reported_verbatim() {
        let mut mock = MockAdminApi::new();
        mock.expect_add_subscriber()
            .times(1)
            .returning(|_| Ok(rejected(Some("User not found"))));

        let result = add_subscriber(&mock, NewSubscriberForm::new("bob", "b@x.com", 7)).await;
        assert_eq!(result.unwrap_err().to_string(), "User not found");
    }

    #[tokio::test]
    async fn rejection_without_reason_uses_fallback() {
        let mut mock = MockAdminApi::new();
        mock.expect_add_subscriber()
            .times(2)
            .returning(|form| {
                if form.telegram_username == "empty" {
                    Ok(rejected(Some("")))
                } else {
                    Ok(rejected(None))
                }
            });

        for name in ["empty", "missing"] {
            let result = add_subscriber(&mock, NewSubscriberForm::new(name, "c@x.com", 30)).await;
            assert_eq!(result.unwrap_err().to_string(), "Error adding subscriber");
        }
    }

    #[tokio::test]
    async fn failed_request_is_a_transport_error() {
        let mut mock = MockAdminApi::new();
        mock.expect_add_subscriber().times(1).returning(|_| {
            Err(ApiError::Http {
                status: 502,
                message: "Bad Gateway".to_string(),
            })
        });

        let result = add_subscriber(&mock, NewSubscriberForm::new("dan", "d@x.com", 30)).await;
        let err = result.unwrap_err();
        assert!(matches!(err, CommandError::Transport(_)));
        assert_eq!(err.to_string(), "Error adding subscriber. Please try again.");
    }

    #[tokio::test]
    async fn failed_statistics_fetch_propagates() {
        let mut mock = MockAdminApi::new();
        mock.expect_get_statistics().times(1).returning(|| {
            Err(ApiError::Http {
                status: 500,
                message: "boom".to_string(),
            })
        });

        assert!(print_statistics(&mock).await.is_err());
    }

    #[test]
    fn statistics_report_uses_dashboard_formatting() {
        let stats = StatisticsSnapshot {
            total_users: 5,
            active_subscriptions: 3,
            expired_subscriptions: 2,
            canceled_subscriptions: 1,
            total_revenue: 1500.0,
            recent_transactions: vec![TransactionRecord {
                telegram_user_id: "777".to_string(),
                amount: 150.0,
                currency: "UAH".to_string(),
                status: "completed".to_string(),
                created_at: "2024-03-05T14:07:00".to_string(),
            }],
        };

        let report = statistics_report(&stats);
        assert!(report.contains("Total Users:"));
        assert!(report.contains("1500 UAH"));
        assert!(report.contains("Canceled Subscriptions: 1"));
        assert!(report.contains("777"));
        assert!(report.contains("150 UAH"));
        assert!(report.contains("05.03.2024 14:07"));
        assert!(!report.contains("No recent transactions"));
    }

    #[test]
    fn empty_reports_say_so() {
        assert!(statistics_report(&StatisticsSnapshot::default()).contains("No recent transactions"));
        assert_eq!(subscribers_report(&[]), "No active subscribers found\n");
    }

    #[test]
    fn subscribers_report_applies_fallbacks() {
        let subscribers = vec![SubscriberRecord {
            telegram_username: Some("alice".to_string()),
            telegram_user_id: "1".to_string(),
            email: None,
            current_period_end: "not a date".to_string(),
            amount: 99.5,
            currency: "UAH".to_string(),
            created_at: "2024-01-02T03:04:05".to_string(),
        }];

        let report = subscribers_report(&subscribers);
        assert!(report.contains("@alice"));
        assert!(report.contains("N/A"));
        assert!(report.contains("not a date"));
        assert!(report.contains("99.5 UAH"));
        assert!(report.contains("02.01.2024 03:04"));
    }
}
