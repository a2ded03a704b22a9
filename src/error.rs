pub type Result<T> = std::result::Result<T, Error>;

/// Whatever kept a [`Transport`](crate::transport::Transport) from producing a response.
pub type TransportError = Box<dyn std::error::Error + Send + Sync>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Invalid or contradictory arguments, caught before any request is sent.
    #[error("invalid filter: {0}")]
    Filter(String),

    #[error("{0}")]
    Request(RequestError),

    #[error("not found: {0}")]
    NotFound(RequestError),

    #[error("server error: {0}")]
    Server(RequestError),

    /// A successful response with no data where at least one result was needed.
    #[error("{0}")]
    EmptyResult(String),

    #[error("{0}")]
    Pagination(String),

    /// The response broke the API contract: a dangling reference, an unknown
    /// enumerated code or a malformed resource.
    #[error("malformed response: {0}")]
    Integrity(String),

    #[error(transparent)]
    EnvVar(#[from] EnvVarError),

    #[error("IO error: {0}")]
    Io(#[from] IOError),

    #[error("JSON serialization error: {0}")]
    JSON(#[from] JSONError),

    #[error("invalid header value: {0}")]
    Header(#[from] reqwest::header::InvalidHeaderValue),

    #[error("could not start runtime: {0}")]
    Runtime(#[source] std::io::Error),
}

impl Error {
    pub(crate) fn filter(msg: impl Into<String>) -> Self {
        Self::Filter(msg.into())
    }

    pub(crate) fn integrity(msg: impl Into<String>) -> Self {
        Self::Integrity(msg.into())
    }

    /// The HTTP failure behind this error, if it came from a response.
    pub fn request(&self) -> Option<&RequestError> {
        match self {
            Error::Request(e) | Error::NotFound(e) | Error::Server(e) => Some(e),
            _ => None,
        }
    }
}

/// A non-2xx, unparseable or failed HTTP exchange.
///
/// `status` is `None` when no response was received at all (timeouts,
/// connection errors). `title` is the first upstream error title, if any.
#[derive(thiserror::Error, Debug)]
#[error("{}: {reason} - {}", match status { Some(s) => s.to_string(), None => "-".into() }, title.as_deref().unwrap_or("None"))]
pub struct RequestError {
    pub status: Option<u16>,
    pub reason: String,
    pub title: Option<String>,
    #[source]
    source: Option<TransportError>,
}

impl RequestError {
    pub fn new(status: u16, reason: impl Into<String>, title: Option<String>) -> Self {
        Self {
            status: Some(status),
            reason: reason.into(),
            title,
            source: None,
        }
    }

    pub fn transport(source: TransportError) -> Self {
        Self {
            status: None,
            reason: source.to_string(),
            title: None,
            source: Some(source),
        }
    }
}

#[derive(thiserror::Error, Debug)]
#[error("{source} ({})", file.display())]
pub struct IOError {
    file: std::path::PathBuf,
    #[source]
    source: std::io::Error,
}

impl IOError {
    pub fn new(file: impl Into<std::path::PathBuf>, source: std::io::Error) -> Self {
        Self {
            file: file.into(),
            source,
        }
    }
}

#[derive(thiserror::Error, Debug)]
#[error("{source} ({var})")]
pub struct EnvVarError {
    var: String,
    #[source]
    source: std::env::VarError,
}

impl EnvVarError {
    pub fn new(var: &str, source: std::env::VarError) -> Self {
        Self {
            var: var.into(),
            source,
        }
    }
}

#[derive(thiserror::Error, Debug)]
#[error("{source} {}", match file { Some(f) => f.display().to_string(), None => "".into() })]
pub struct JSONError {
    file: Option<std::path::PathBuf>,
    #[source]
    source: serde_json::Error,
}

impl JSONError {
    pub fn new(file: Option<std::path::PathBuf>, source: serde_json::Error) -> Self {
        Self { file, source }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn request_error_renders_status_reason_and_title() {
        let err = RequestError::new(404, "Not Found", Some("Not Found".into()));
        assert_eq!(err.to_string(), "404: Not Found - Not Found");

        let err = RequestError::new(400, "Bad Request", None);
        assert_eq!(err.to_string(), "400: Bad Request - None");
    }

    #[test]
    fn request_accessor_covers_http_variants() {
        let err = Error::Server(RequestError::new(503, "Service Unavailable", None));
        assert_eq!(err.request().and_then(|e| e.status), Some(503));
        assert!(Error::filter("bad").request().is_none());
    }

    #[test]
    fn transport_failures_have_no_status_or_title() {
        let err = RequestError::transport("operation timed out".into());
        assert_eq!(err.status, None);
        assert_eq!(err.title, None);
        assert_eq!(err.to_string(), "-: operation timed out - None");
    }
}
