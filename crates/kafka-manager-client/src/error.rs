//! Error types for the Kafka Manager client

/// Error type for all Kafka Manager client operations
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The request never produced a status code (connect, timeout, body read)
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered with a status outside 200/201/204.
    /// The body is kept verbatim since the backend has no error envelope.
    #[error("status: {status}, body: {body}")]
    Backend { status: u16, body: String },

    /// A filtered collection lookup returned no items
    #[error("{kind} with {} not found", describe_filters(.filters))]
    NotFound {
        kind: &'static str,
        filters: Vec<(String, String)>,
    },

    #[error("failed to decode response body: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, ClientError>;

fn describe_filters(filters: &[(String, String)]) -> String {
    filters
        .iter()
        .map(|(field, value)| format!("{} {}", field, value))
        .collect::<Vec<_>>()
        .join(" and ")
}

impl ClientError {
    pub(crate) fn not_found(kind: &'static str, filters: &[(&str, String)]) -> Self {
        ClientError::NotFound {
            kind,
            filters: filters
                .iter()
                .map(|(field, value)| (field.to_string(), value.clone()))
                .collect(),
        }
    }

    /// HTTP status reported by the backend, if the request got that far
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Backend { status, .. } => Some(*status),
            ClientError::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// True for client-side empty lookups and for backend 404 responses
    pub fn is_not_found(&self) -> bool {
        match self {
            ClientError::NotFound { .. } => true,
            ClientError::Backend { status, .. } => *status == 404,
            _ => false,
        }
    }

    /// Errors that may succeed when the same request is sent again
    pub fn is_transient(&self) -> bool {
        match self {
            ClientError::Transport(_) => true,
            ClientError::Backend { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }
}

impl From<config::ConfigError> for ClientError {
    fn from(e: config::ConfigError) -> Self {
        ClientError::Config(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ClientError::Backend {
            status: 404,
            body: "topics.does_not_exist".to_string(),
        };
        assert_eq!(err.to_string(), "status: 404, body: topics.does_not_exist");

        let err = ClientError::not_found("Cluster", &[("name", "prod".to_string())]);
        assert_eq!(err.to_string(), "Cluster with name prod not found");

        let err = ClientError::not_found(
            "Topic",
            &[("name", "orders".to_string()), ("cluster.id", "7".to_string())],
        );
        assert_eq!(
            err.to_string(),
            "Topic with name orders and cluster.id 7 not found"
        );

        let err = ClientError::Config("url is required".to_string());
        assert_eq!(err.to_string(), "invalid configuration: url is required");
    }

    #[test]
    fn test_error_classification() {
        let not_found = ClientError::not_found("Environment", &[("name", "dev".to_string())]);
        assert!(not_found.is_not_found());
        assert!(!not_found.is_transient());
        assert_eq!(not_found.status(), None);

        let gone = ClientError::Backend {
            status: 404,
            body: String::new(),
        };
        assert!(gone.is_not_found());
        assert!(!gone.is_transient());
        assert_eq!(gone.status(), Some(404));

        let bad_request = ClientError::Backend {
            status: 400,
            body: "invalid partitions".to_string(),
        };
        assert!(!bad_request.is_not_found());
        assert!(!bad_request.is_transient());

        let unavailable = ClientError::Backend {
            status: 503,
            body: String::new(),
        };
        assert!(unavailable.is_transient());

        let throttled = ClientError::Backend {
            status: 429,
            body: String::new(),
        };
        assert!(throttled.is_transient());
    }

    #[test]
    fn test_decode_error_is_not_transient() {
        let err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err = ClientError::Decode(err);
        assert!(!err.is_transient());
        assert!(err.to_string().starts_with("failed to decode response body"));
    }
}
