//! HTTP transport and the translation of non-2xx responses into typed errors.

use async_trait::async_trait;
use log::debug;
use reqwest::{Client, StatusCode};

use crate::error::{ApiError, Error, Result};
use crate::model::ResponseError;

/// Raw HTTP access used by the client facade. One outbound call per
/// invocation, no retries. Object safe so tests can substitute a mock.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Transport: Send + Sync {
    /// Issues a single GET request and returns the raw response body, or a
    /// typed failure when the call cannot complete or the API rejects it.
    async fn get(&self, url: &str, query: &[(String, String)]) -> Result<Vec<u8>>;
}

/// Transport adapter around a shared `reqwest::Client`. Attaches the API key
/// as a bearer token to every outgoing request.
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    api_key: String,
}

impl HttpClient {
    pub fn new(client: Client, api_key: impl Into<String>) -> Self {
        Self {
            client,
            api_key: api_key.into(),
        }
    }
}

#[async_trait]
impl Transport for HttpClient {
    #[tracing::instrument(skip(self, query))]
    async fn get(&self, url: &str, query: &[(String, String)]) -> Result<Vec<u8>> {
        debug!("GET {} with {} query parameters...", url, query.len());

        let response = self
            .client
            .get(url)
            .bearer_auth(&self.api_key)
            .query(query)
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;

        if status.is_success() {
            return Ok(body.to_vec());
        }

        Err(Error::Api(translate_error(status, &body)))
    }
}

/// Maps a non-2xx response to [`ApiError`]. A 404 carries no structured
/// body, so the raw body is preserved in `errors`; other statuses decode the
/// body as [`ResponseError`] when possible.
fn translate_error(status: StatusCode, body: &[u8]) -> ApiError {
    let text = String::from_utf8_lossy(body).into_owned();

    if status == StatusCode::NOT_FOUND {
        return ApiError {
            status: status.as_u16(),
            code: 404,
            description: "Not Found".to_string(),
            errors: vec![text],
        };
    }

    match serde_json::from_slice::<ResponseError>(body) {
        Ok(error) => ApiError {
            status: status.as_u16(),
            code: error.code,
            description: error.description,
            errors: error.errors.unwrap_or_default(),
        },
        Err(_) => ApiError {
            status: status.as_u16(),
            code: 0,
            description: format!("unable to parse the body as a JSON error response: [{text}]"),
            errors: Vec::new(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_query() -> Vec<(String, String)> {
        Vec::new()
    }

    #[tokio::test]
    async fn get_returns_body_on_success() {
        let mut server = mockito::Server::new_async().await;
        let url = server.url();

        let mock = server
            .mock("GET", "/v2/core/account")
            .match_header("authorization", "Bearer test-key")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"ok":true}"#)
            .create_async()
            .await;

        let client = HttpClient::new(Client::new(), "test-key");
        let body = client
            .get(&format!("{url}/v2/core/account"), &no_query())
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(body, br#"{"ok":true}"#);
    }

    #[tokio::test]
    async fn get_appends_query_parameters() {
        let mut server = mockito::Server::new_async().await;
        let url = server.url();

        let mock = server
            .mock("GET", "/v2/core/wallpapers")
            .match_query(mockito::Matcher::AllOf(vec![
                mockito::Matcher::UrlEncoded("limit".to_string(), "10".to_string()),
                mockito::Matcher::UrlEncoded("filter_res_operator".to_string(), ">=".to_string()),
            ]))
            .with_status(200)
            .with_body("{}")
            .create_async()
            .await;

        let client = HttpClient::new(Client::new(), "test-key");
        let query = vec![
            ("limit".to_string(), "10".to_string()),
            ("filter_res_operator".to_string(), ">=".to_string()),
        ];
        client
            .get(&format!("{url}/v2/core/wallpapers"), &query)
            .await
            .unwrap();

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn not_found_keeps_raw_body() {
        let mut server = mockito::Server::new_async().await;
        let url = server.url();

        let mock = server
            .mock("GET", "/v2/core/wallpaper/123")
            .with_status(404)
            .with_body(r#"{"error":"not found"}"#)
            .create_async()
            .await;

        let client = HttpClient::new(Client::new(), "test-key");
        let error = client
            .get(&format!("{url}/v2/core/wallpaper/123"), &no_query())
            .await
            .unwrap_err();

        mock.assert_async().await;
        match error {
            Error::Api(api) => {
                assert_eq!(api.status, 404);
                assert_eq!(api.code, 404);
                assert_eq!(api.description, "Not Found");
                assert_eq!(api.errors, vec![r#"{"error":"not found"}"#.to_string()]);
            }
            other => panic!("expected Error::Api, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn error_body_is_decoded_when_structured() {
        let mut server = mockito::Server::new_async().await;
        let url = server.url();

        let mock = server
            .mock("GET", "/v2/core/account")
            .with_status(401)
            .with_header("content-type", "application/json")
            .with_body(r#"{"code":401,"description":"Unauthorized","errors":["invalid key"]}"#)
            .create_async()
            .await;

        let client = HttpClient::new(Client::new(), "bad-key");
        let error = client
            .get(&format!("{url}/v2/core/account"), &no_query())
            .await
            .unwrap_err();

        mock.assert_async().await;
        match error {
            Error::Api(api) => {
                assert_eq!(api.status, 401);
                assert_eq!(api.code, 401);
                assert_eq!(api.description, "Unauthorized");
                assert_eq!(api.errors, vec!["invalid key".to_string()]);
            }
            other => panic!("expected Error::Api, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn unstructured_error_body_maps_to_code_zero() {
        let mut server = mockito::Server::new_async().await;
        let url = server.url();

        let mock = server
            .mock("GET", "/v2/core/account")
            .with_status(500)
            .with_body("boom")
            .create_async()
            .await;

        let client = HttpClient::new(Client::new(), "test-key");
        let error = client
            .get(&format!("{url}/v2/core/account"), &no_query())
            .await
            .unwrap_err();

        mock.assert_async().await;
        match error {
            Error::Api(api) => {
                assert_eq!(api.status, 500);
                assert_eq!(api.code, 0);
                assert!(api.description.contains("boom"));
                assert!(api.errors.is_empty());
            }
            other => panic!("expected Error::Api, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn unreachable_host_maps_to_network_error() {
        let client = HttpClient::new(Client::new(), "test-key");
        let error = client
            .get("http://127.0.0.1:1/v2/core/account", &no_query())
            .await
            .unwrap_err();

        assert!(matches!(error, Error::Network(_)));
    }

    #[test]
    fn translate_error_status_variants() {
        let api = translate_error(StatusCode::NOT_FOUND, b"");
        assert_eq!(api.status, 404);
        assert_eq!(api.errors, vec![String::new()]);

        let api = translate_error(
            StatusCode::FORBIDDEN,
            br#"{"code":403,"description":"Forbidden"}"#,
        );
        assert_eq!(api.status, 403);
        assert_eq!(api.code, 403);
        assert!(api.errors.is_empty());

        let api = translate_error(StatusCode::BAD_GATEWAY, b"<html>502</html>");
        assert_eq!(api.status, 502);
        assert_eq!(api.code, 0);
        assert!(api.description.contains("<html>502</html>"));
    }
}
