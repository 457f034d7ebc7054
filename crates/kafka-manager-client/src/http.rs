//! HTTP transport with authentication and status classification
//!
//! Every request goes through [`HttpTransport::execute`]: the credentials are
//! applied, the whole body is read, and the status decides between success
//! and [`ClientError::Backend`].

use std::time::Duration;

use bytes::Bytes;
use reqwest::{Client, Method, RequestBuilder, StatusCode};
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, error};

use crate::{
    auth::Credentials,
    config::ClientConfig,
    error::{ClientError, Result},
};

/// Authenticated HTTP transport bound to one Kafka Manager base URL
#[derive(Clone, Debug)]
pub struct HttpTransport {
    client: Client,
    base_url: String,
    credentials: Credentials,
}

impl HttpTransport {
    /// Create a transport with its own reqwest client built from the config timeouts
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .connect_timeout(Duration::from_millis(config.connect_timeout_ms))
            .timeout(Duration::from_millis(config.request_timeout_ms))
            .build()?;

        Ok(Self::with_client(client, config))
    }

    /// Create a transport on top of a caller-supplied reqwest client
    pub fn with_client(client: Client, config: &ClientConfig) -> Self {
        Self {
            client,
            base_url: config.url.trim_end_matches('/').to_string(),
            credentials: config.credentials.clone(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Build full URL from an API path
    fn build_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Start an authenticated request for `path`
    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.credentials
            .apply(self.client.request(method, self.build_url(path)))
    }

    /// Send the request and read the whole body.
    ///
    /// 200, 201 and 204 return the raw body (empty for 204). Any other status
    /// becomes [`ClientError::Backend`] carrying the body verbatim.
    pub async fn execute(&self, request: RequestBuilder) -> Result<Bytes> {
        let request = request.build()?;
        let method = request.method().clone();
        let url = request.url().clone();

        debug!("{} {} ({} auth)", method, url, self.credentials.scheme());

        let response = self.client.execute(request).await?;
        let status = response.status();
        let body = response.bytes().await?;

        debug!("{} {} -> {}", method, url, status);

        if is_success(status) {
            Ok(body)
        } else {
            let body = String::from_utf8_lossy(&body).into_owned();
            error!(
                "{} {} failed with status {}: {}",
                method,
                url,
                status.as_u16(),
                body
            );
            Err(ClientError::Backend {
                status: status.as_u16(),
                body,
            })
        }
    }

    /// Make a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let body = self.execute(self.request(Method::GET, path)).await?;
        decode(&body)
    }

    /// Make a GET request with query parameters
    pub async fn get_with_query<T: DeserializeOwned, Q: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Q,
    ) -> Result<T> {
        let body = self
            .execute(self.request(Method::GET, path).query(query))
            .await?;
        decode(&body)
    }

    /// Make a POST request with JSON body
    pub async fn post_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let payload = encode(body)?;
        let body = self
            .execute(self.request(Method::POST, path).body(payload))
            .await?;
        decode(&body)
    }

    /// Make a PATCH request with JSON body, ignoring the response body
    pub async fn patch_json<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<()> {
        let payload = encode(body)?;
        self.execute(self.request(Method::PATCH, path).body(payload))
            .await?;
        Ok(())
    }

    /// Make a DELETE request, ignoring the response body
    pub async fn delete(&self, path: &str) -> Result<()> {
        self.execute(self.request(Method::DELETE, path)).await?;
        Ok(())
    }
}

/// Status codes the backend uses for success
pub fn is_success(status: StatusCode) -> bool {
    matches!(
        status,
        StatusCode::OK | StatusCode::CREATED | StatusCode::NO_CONTENT
    )
}

fn encode<B: Serialize + ?Sized>(body: &B) -> Result<Vec<u8>> {
    serde_json::to_vec(body).map_err(ClientError::Encode)
}

fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
    serde_json::from_slice(body).map_err(ClientError::Decode)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(url: &str) -> ClientConfig {
        ClientConfig::new(url, Credentials::token("t"))
    }

    #[test]
    fn test_status_classification() {
        assert!(is_success(StatusCode::OK));
        assert!(is_success(StatusCode::CREATED));
        assert!(is_success(StatusCode::NO_CONTENT));

        assert!(!is_success(StatusCode::ACCEPTED));
        assert!(!is_success(StatusCode::MOVED_PERMANENTLY));
        assert!(!is_success(StatusCode::BAD_REQUEST));
        assert!(!is_success(StatusCode::NOT_FOUND));
        assert!(!is_success(StatusCode::INTERNAL_SERVER_ERROR));
    }

    #[test]
    fn test_build_url() {
        let transport = HttpTransport::new(&config("http://localhost:8080/kafka-manager")).unwrap();
        assert_eq!(
            transport.build_url("/topics"),
            "http://localhost:8080/kafka-manager/topics"
        );
    }

    #[test]
    fn test_build_url_trailing_slash() {
        let mut config = config("http://localhost:8080");
        config.url = "http://localhost:8080/".to_string();
        let transport = HttpTransport::new(&config).unwrap();
        assert_eq!(transport.base_url(), "http://localhost:8080");
        assert_eq!(transport.build_url("/clusters/3"), "http://localhost:8080/clusters/3");
    }

    #[test]
    fn test_request_is_authenticated() {
        let transport = HttpTransport::new(&config("http://localhost:8080")).unwrap();
        let request = transport
            .request(Method::DELETE, "/topics/9")
            .build()
            .unwrap();

        assert_eq!(request.method(), &Method::DELETE);
        assert_eq!(request.url().as_str(), "http://localhost:8080/topics/9");
        assert_eq!(request.headers()["Access-Token"], "t");
    }

    #[test]
    fn test_decode_error() {
        let result: Result<serde_json::Value> = decode(b"<html>oops</html>");
        assert!(matches!(result, Err(ClientError::Decode(_))));
    }
}
