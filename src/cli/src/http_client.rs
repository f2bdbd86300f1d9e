use crate::config::ApiConfig;
use account_recovery_core::BASE_URL;
use anyhow::{Context, Result};
use crux_http::{
    HttpError,
    protocol::{HttpRequest, HttpResponse, HttpResult},
};
use log::{debug, error};
use reqwest::{Client, Method, Url};

/// Executes the HTTP requests the Core asks for
#[derive(Clone, Debug)]
pub struct HttpClient {
    client: Client,
    base_url: String,
}

impl HttpClient {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .context("failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    /// Move a Core URL onto the configured API base
    ///
    /// # Examples
    /// ```
    /// use account_recovery::{config::ApiConfig, http_client::HttpClient};
    /// use std::time::Duration;
    ///
    /// let client = HttpClient::new(&ApiConfig {
    ///     base_url: "http://127.0.0.1:8080".to_string(),
    ///     timeout: Duration::from_secs(5),
    /// })
    /// .unwrap();
    /// assert_eq!(
    ///     client.rebase("https://public-api.wordpress.com/wpcom/v2/account-recovery/lookup?user=foo"),
    ///     "http://127.0.0.1:8080/wpcom/v2/account-recovery/lookup?user=foo"
    /// );
    /// ```
    pub fn rebase(&self, url: &str) -> String {
        let (Ok(target), Ok(api)) = (Url::parse(url), Url::parse(BASE_URL)) else {
            return url.to_string();
        };
        if target.origin() != api.origin() {
            return url.to_string();
        }

        match target.query() {
            Some(query) => format!("{}{}?{query}", self.base_url, target.path()),
            None => format!("{}{}", self.base_url, target.path()),
        }
    }

    /// Execute a request; transport failures become `HttpError::Io`
    pub async fn execute(&self, request: &HttpRequest) -> HttpResult {
        match self.send(request).await {
            Ok(response) => HttpResult::Ok(response),
            Err(e) => {
                error!("{} {} failed: {e:#}", request.method, request.url);
                HttpResult::Err(HttpError::Io(format!("{e:#}")))
            }
        }
    }

    async fn send(&self, request: &HttpRequest) -> Result<HttpResponse> {
        let method = Method::from_bytes(request.method.as_bytes())
            .with_context(|| format!("failed to parse HTTP method {}", request.method))?;
        let url = self.rebase(&request.url);

        debug!("{method} {url}");

        let mut builder = self.client.request(method, &url);
        for header in &request.headers {
            builder = builder.header(header.name.as_str(), header.value.as_str());
        }
        if !request.body.is_empty() {
            builder = builder.body(request.body.clone());
        }

        let res = builder
            .send()
            .await
            .with_context(|| format!("failed to send request to {url}"))?;

        let status = res.status();
        let mut response = HttpResponse::status(status.as_u16());
        for (name, value) in res.headers() {
            if let Ok(value) = value.to_str() {
                response.header(name.as_str(), value);
            }
        }
        let body = res.bytes().await.context("failed to read response body")?;

        debug!("{url} answered {status} with {} bytes", body.len());

        Ok(response.body(body.to_vec()).build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn client(base_url: &str) -> HttpClient {
        HttpClient::new(&ApiConfig {
            base_url: base_url.to_string(),
            timeout: Duration::from_secs(1),
        })
        .expect("failed to create client")
    }

    #[test]
    fn rebase_keeps_foreign_urls() {
        let client = client("http://localhost:1");

        assert_eq!(
            client.rebase("https://example.com/other"),
            "https://example.com/other"
        );
    }

    #[test]
    fn rebase_requires_the_same_origin() {
        let client = client("http://localhost:1");

        assert_eq!(
            client.rebase("https://public-api.wordpress.com.example/wpcom/v2/account-recovery/lookup"),
            "https://public-api.wordpress.com.example/wpcom/v2/account-recovery/lookup"
        );
        assert_eq!(
            client.rebase("http://public-api.wordpress.com/wpcom/v2/account-recovery/lookup"),
            "http://public-api.wordpress.com/wpcom/v2/account-recovery/lookup"
        );
    }

    #[test]
    fn rebase_keeps_path_and_encoded_query() {
        let client = client("http://127.0.0.1:8080");

        assert_eq!(
            client.rebase(&format!(
                "{BASE_URL}/wpcom/v2/account-recovery/lookup?user=jane+doe%40example.com"
            )),
            "http://127.0.0.1:8080/wpcom/v2/account-recovery/lookup?user=jane+doe%40example.com"
        );
    }

    #[tokio::test]
    async fn unreachable_server_becomes_io_error() {
        // port 9 (discard) is not expected to accept HTTP connections
        let client = client("http://127.0.0.1:9");
        let request =
            HttpRequest::get(format!("{BASE_URL}/wpcom/v2/account-recovery/lookup?user=foo"))
                .build();

        let result = client.execute(&request).await;

        assert!(matches!(result, HttpResult::Err(HttpError::Io(_))));
    }
}
