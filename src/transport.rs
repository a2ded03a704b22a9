use async_trait::async_trait;
use reqwest::header::HeaderMap;
use serde_json::Value;

use crate::error::TransportError;
use crate::params::QueryParams;

/// What came back from a GET.
#[derive(Clone, Debug, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub reason: String,
    /// `None` when the body was not valid JSON.
    pub body: Option<Value>,
}

/// Issues GET requests. Implementations must allow concurrent, independent
/// calls; the client shares one instance between all of its requests.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(
        &self,
        url: &str,
        headers: &HeaderMap,
        query: &QueryParams,
    ) -> Result<HttpResponse, TransportError>;
}

/// The default [`Transport`], backed by a pooled `reqwest::Client`.
#[derive(Clone, Debug, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps a preconfigured client, e.g. one built with a timeout.
    pub fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn get(
        &self,
        url: &str,
        headers: &HeaderMap,
        query: &QueryParams,
    ) -> Result<HttpResponse, TransportError> {
        let res = self
            .client
            .get(url)
            .headers(headers.clone())
            .query(query)
            .send()
            .await?;

        let status = res.status();
        let bytes = res.bytes().await?;

        Ok(HttpResponse {
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or_default().to_string(),
            body: serde_json::from_slice(&bytes).ok(),
        })
    }
}

#[cfg(test)]
mod test {
    use mockito::Matcher;
    use reqwest::header::HeaderValue;

    use super::*;

    #[tokio::test]
    async fn sends_headers_and_query() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/status")
            .match_header("accept", "application/json")
            .match_query(Matcher::UrlEncoded("page[limit]".into(), "3".into()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"data": []}"#)
            .create_async()
            .await;

        let mut headers = HeaderMap::new();
        headers.insert("accept", HeaderValue::from_static("application/json"));
        let mut query = QueryParams::new();
        query.insert("page[limit]", "3".into());

        let res = ReqwestTransport::new()
            .get(&format!("{}/status", server.url()), &headers, &query)
            .await
            .unwrap();
        mock.assert_async().await;

        assert_eq!(res.status, 200);
        assert_eq!(res.reason, "OK");
        assert_eq!(res.body, Some(serde_json::json!({"data": []})));
    }

    #[tokio::test]
    async fn unparseable_body_is_none() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/status")
            .with_status(502)
            .with_body("<html>Bad Gateway</html>")
            .create_async()
            .await;

        let res = ReqwestTransport::new()
            .get(&format!("{}/status", server.url()), &HeaderMap::new(), &QueryParams::new())
            .await
            .unwrap();
        assert_eq!(res.status, 502);
        assert_eq!(res.reason, "Bad Gateway");
        assert!(res.body.is_none());
    }
}
