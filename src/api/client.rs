//! Admin API Client
//!
//! A JSON-over-HTTP client for the subscription backend's admin routes.

use crate::api::AdminApi;
use crate::api::error::ApiError;
use crate::environment::Environment;
use crate::models::{
    AddSubscriberResponse, NewSubscriberForm, StatisticsSnapshot, SubscriberRecord,
    SubscribersResponse,
};
use reqwest::{Client, ClientBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;

// User-Agent string with CLI version
const USER_AGENT: &str = concat!("bot-admin/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct AdminClient {
    client: Client,
    environment: Environment,
}

impl AdminClient {
    /// Builds a client for the given backend. No request timeout is set, so the
    /// transport defaults apply.
    pub fn new(environment: Environment) -> Result<Self, ApiError> {
        let client = ClientBuilder::new().user_agent(USER_AGENT).build()?;
        Ok(Self {
            client,
            environment,
        })
    }

    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    fn build_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.environment.api_url(),
            endpoint.trim_start_matches('/')
        )
    }

    fn decode_response<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, ApiError> {
        serde_json::from_slice(bytes).map_err(ApiError::Decode)
    }

    async fn handle_response_status(response: Response) -> Result<Response, ApiError> {
        if !response.status().is_success() {
            return Err(ApiError::from_response(response).await);
        }
        Ok(response)
    }

    async fn get_request<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        let url = self.build_url(endpoint);
        log::debug!("GET {}", url);
        let response = self.client.get(&url).send().await?;

        let response = Self::handle_response_status(response).await?;
        let response_bytes = response.bytes().await?;
        Self::decode_response(&response_bytes)
    }

    async fn post_request<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let url = self.build_url(endpoint);
        log::debug!("POST {}", url);
        let response = self.client.post(&url).json(body).send().await?;

        let response = Self::handle_response_status(response).await?;
        let response_bytes = response.bytes().await?;
        Self::decode_response(&response_bytes)
    }
}

#[async_trait::async_trait]
impl AdminApi for AdminClient {
    async fn get_statistics(&self) -> Result<StatisticsSnapshot, ApiError> {
        self.get_request("admin/stats").await
    }

    async fn list_subscribers(&self) -> Result<Vec<SubscriberRecord>, ApiError> {
        let response: SubscribersResponse = self.get_request("admin/subscribers").await?;
        Ok(response.subscribers)
    }

    async fn add_subscriber(
        &self,
        form: NewSubscriberForm,
    ) -> Result<AddSubscriberResponse, ApiError> {
        self.post_request("admin/add-subscriber", &form).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    /// Serves exactly one HTTP response and hands back the raw request it received.
    async fn serve_once(status: &'static str, body: &'static str) -> (Environment, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 4096];
            loop {
                let n = socket.read(&mut buf).await.unwrap();
                request.extend_from_slice(&buf[..n]);
                let text = String::from_utf8_lossy(&request).to_string();
                if let Some(header_end) = text.find("\r\n\r\n") {
                    let content_length = text[..header_end]
                        .lines()
                        .find_map(|line| {
                            let lower = line.to_ascii_lowercase();
                            lower
                                .strip_prefix("content-length:")
                                .map(|v| v.trim().parse::<usize>().unwrap_or(0))
                        })
                        .unwrap_or(0);
                    if request.len() >= header_end + 4 + content_length {
                        break;
                    }
                }
                if n == 0 {
                    break;
                }
            }
            let response = format!(
                "HTTP/1.1 {}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
            String::from_utf8_lossy(&request).to_string()
        });
        let environment = Environment::Custom {
            backend_url: format!("http://{}", addr),
        };
        (environment, handle)
    }

    #[tokio::test]
    /// Should GET the stats path under the `/api` prefix and decode the snapshot.
    async fn test_get_statistics() {
        let (environment, server) = serve_once(
            "200 OK",
            r#"{"total_users": 5, "active_subscriptions": 3, "expired_subscriptions": 2, "total_revenue": 1500, "recent_transactions": []}"#,
        )
        .await;
        let client = AdminClient::new(environment).unwrap();

        let snapshot = client.get_statistics().await.unwrap();
        assert_eq!(snapshot.total_users, 5);
        assert_eq!(snapshot.total_revenue, 1500.0);

        let request = server.await.unwrap();
        assert!(request.starts_with("GET /api/admin/stats HTTP/1.1"));
    }

    #[tokio::test]
    /// Should unwrap the `subscribers` envelope.
    async fn test_list_subscribers() {
        let (environment, server) = serve_once(
            "200 OK",
            r#"{"subscribers": [{"id": "s1", "telegram_user_id": 42, "telegram_username": "alice", "email": null,
                "current_period_end": "2024-04-01T00:00:00", "created_at": "2024-03-01T00:00:00",
                "amount": 150.0, "currency": "UAH"}]}"#,
        )
        .await;
        let client = AdminClient::new(environment).unwrap();

        let subscribers = client.list_subscribers().await.unwrap();
        assert_eq!(subscribers.len(), 1);
        assert_eq!(subscribers[0].telegram_user_id, "42");
        assert_eq!(subscribers[0].display_email(), "N/A");

        let request = server.await.unwrap();
        assert!(request.starts_with("GET /api/admin/subscribers HTTP/1.1"));
    }

    #[tokio::test]
    /// Should POST the form as JSON and decode an application-level failure as `Ok`.
    async fn test_add_subscriber_posts_form() {
        let (environment, server) =
            serve_once("200 OK", r#"{"success": false, "error": "User not found"}"#).await;
        let client = AdminClient::new(environment).unwrap();

        let response = client
            .add_subscriber(NewSubscriberForm::new("alice", "a@x.com", 30))
            .await
            .unwrap();
        assert!(!response.success);
        assert_eq!(response.error.as_deref(), Some("User not found"));

        let request = server.await.unwrap();
        assert!(request.starts_with("POST /api/admin/add-subscriber HTTP/1.1"));
        let body = request.split("\r\n\r\n").nth(1).unwrap();
        let body: serde_json::Value = serde_json::from_str(body).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"telegram_username": "alice", "email": "a@x.com", "duration_days": 30})
        );
    }

    #[tokio::test]
    /// Non-2xx responses surface as `ApiError::Http` with the status and body.
    async fn test_server_error_maps_to_http_error() {
        let (environment, server) =
            serve_once("500 Internal Server Error", r#"{"detail": "boom"}"#).await;
        let client = AdminClient::new(environment).unwrap();

        match client.get_statistics().await {
            Err(ApiError::Http { status, message }) => {
                assert_eq!(status, 500);
                assert!(message.contains("boom"));
            }
            other => panic!("expected HTTP error, got {:?}", other),
        }
        server.await.unwrap();
    }

    #[tokio::test]
    /// A 2xx body that is not JSON is a decode error.
    async fn test_malformed_body_is_decode_error() {
        let (environment, server) = serve_once("200 OK", "not json").await;
        let client = AdminClient::new(environment).unwrap();

        assert!(matches!(
            client.list_subscribers().await,
            Err(ApiError::Decode(_))
        ));
        server.await.unwrap();
    }

    #[tokio::test]
    /// Nothing listening on the port is a transport error.
    async fn test_unreachable_backend_is_reqwest_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let client = AdminClient::new(Environment::Custom {
            backend_url: format!("http://{}", addr),
        })
        .unwrap();

        assert!(matches!(
            client.get_statistics().await,
            Err(ApiError::Reqwest(_))
        ));
    }
}
