//! Turns the outcome of one GET into a body or a typed error.

use reqwest::header::HeaderMap;
use serde_json::Value;
use tracing::debug;

use crate::error::{Error, RequestError, Result, TransportError};
use crate::params::QueryParams;
use crate::transport::{HttpResponse, Transport};

pub(crate) async fn get(
    transport: &dyn Transport,
    url: &str,
    headers: &HeaderMap,
    query: &QueryParams,
) -> Result<Value> {
    debug!(url, ?query, "GET");
    let outcome = transport.get(url, headers, query).await;
    match &outcome {
        Ok(res) => debug!(url, status = res.status, "response"),
        Err(e) => debug!(url, error = %e, "transport failure"),
    }
    classify(outcome)
}

/// 2xx passes the body through; 404 is [`Error::NotFound`], anything above
/// 500 is [`Error::Server`], every other status is [`Error::Request`].
/// Transport failures and unparseable bodies are [`Error::Request`] with no
/// upstream title.
pub fn classify(outcome: std::result::Result<HttpResponse, TransportError>) -> Result<Value> {
    let res = outcome.map_err(|e| Error::Request(RequestError::transport(e)))?;

    let Some(body) = res.body else {
        return Err(Error::Request(RequestError::new(res.status, res.reason, None)));
    };

    if (200..300).contains(&res.status) {
        return Ok(body);
    }

    let err = RequestError::new(res.status, res.reason, error_title(&body));
    Err(match res.status {
        404 => Error::NotFound(err),
        s if s > 500 => Error::Server(err),
        _ => Error::Request(err),
    })
}

fn error_title(body: &Value) -> Option<String> {
    body.get("errors")?
        .get(0)?
        .get("title")?
        .as_str()
        .map(str::to_string)
}

#[cfg(test)]
mod test {
    use serde_json::json;

    use super::*;

    fn response(status: u16, reason: &str, body: Option<Value>) -> HttpResponse {
        HttpResponse {
            status,
            reason: reason.into(),
            body,
        }
    }

    fn errors(title: &str) -> Option<Value> {
        Some(json!({"errors": [{"title": title}, {"title": "ignored"}]}))
    }

    #[test]
    fn success_returns_body_unchanged() {
        let body = json!({"data": {"id": "x"}});
        let value = classify(Ok(response(200, "OK", Some(body.clone())))).unwrap();
        assert_eq!(value, body);

        assert!(classify(Ok(response(299, "", Some(json!({}))))).is_ok());
    }

    #[test]
    fn not_found_carries_title() {
        let err = classify(Ok(response(404, "Not Found", errors("Not Found")))).unwrap_err();
        let Error::NotFound(e) = err else {
            panic!("expected NotFound, got {err:?}");
        };
        assert_eq!(e.status, Some(404));
        assert_eq!(e.title.as_deref(), Some("Not Found"));
    }

    #[test]
    fn above_500_is_server_error() {
        let err = classify(Ok(response(503, "Service Unavailable", errors("Down")))).unwrap_err();
        assert!(matches!(err, Error::Server(ref e) if e.title.as_deref() == Some("Down")));
    }

    #[test]
    fn exactly_500_and_other_statuses_are_generic() {
        let err = classify(Ok(response(500, "Internal Server Error", Some(json!({}))))).unwrap_err();
        assert!(matches!(err, Error::Request(ref e) if e.status == Some(500) && e.title.is_none()));

        let err = classify(Ok(response(401, "Unauthorized", errors("Unauthorized")))).unwrap_err();
        assert!(matches!(err, Error::Request(ref e) if e.title.as_deref() == Some("Unauthorized")));

        let err = classify(Ok(response(304, "Not Modified", Some(json!({}))))).unwrap_err();
        assert!(matches!(err, Error::Request(_)));
    }

    #[test]
    fn malformed_body_has_no_detail() {
        let err = classify(Ok(response(200, "OK", None))).unwrap_err();
        assert!(matches!(err, Error::Request(ref e) if e.status == Some(200) && e.title.is_none()));

        let err = classify(Ok(response(404, "Not Found", None))).unwrap_err();
        assert!(matches!(err, Error::Request(_)));
    }

    #[test]
    fn transport_failure_is_request_error() {
        let err = classify(Err("timed out".into())).unwrap_err();
        assert!(matches!(err, Error::Request(ref e) if e.status.is_none() && e.title.is_none()));
    }
}
