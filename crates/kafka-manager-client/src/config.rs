// Configuration for KafkaManagerClient

use std::collections::HashMap;

use config::{Config, Environment};
use serde::Deserialize;

use crate::{
    auth::Credentials,
    constants::ENV_PREFIX,
    error::{ClientError, Result},
    retry::RetryPolicy,
};

/// Configuration for the Kafka Manager HTTP client
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Base URL of the API, e.g. "https://kafka-manager.example.com/kafka-manager"
    pub url: String,
    pub credentials: Credentials,
    /// Connection timeout in milliseconds (default: 5000)
    pub connect_timeout_ms: u64,
    /// Whole-request timeout in milliseconds (default: 30000)
    pub request_timeout_ms: u64,
    /// Retry policy applied to topic creation
    pub retry: RetryPolicy,
}

impl ClientConfig {
    pub fn new(url: &str, credentials: Credentials) -> Self {
        Self {
            url: url.trim_end_matches('/').to_string(),
            credentials,
            connect_timeout_ms: 5000,
            request_timeout_ms: 30000,
            retry: RetryPolicy::default(),
        }
    }

    /// Set timeouts
    pub fn with_timeouts(mut self, connect_ms: u64, request_ms: u64) -> Self {
        self.connect_timeout_ms = connect_ms;
        self.request_timeout_ms = request_ms;
        self
    }

    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Load from `KAFKAMANAGER_*` environment variables
    pub fn from_env() -> Result<Self> {
        ConnectionSettings::load(Environment::with_prefix(ENV_PREFIX))?.into_config()
    }

    /// Same as [`ClientConfig::from_env`], reading from the given variables
    /// instead of the process environment
    pub fn from_env_map(vars: HashMap<String, String>) -> Result<Self> {
        ConnectionSettings::load(Environment::with_prefix(ENV_PREFIX).source(Some(vars)))?
            .into_config()
    }
}

/// Unvalidated connection settings, as supplied by the environment or a CLI.
///
/// Empty strings count as unset. Exactly one of `access_token` and `key`
/// must be set; `okta_groups`, `supplier` and `user_id` go with `key` and
/// conflict with `access_token`.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct ConnectionSettings {
    pub url: Option<String>,
    pub access_token: Option<String>,
    pub key: Option<String>,
    pub okta_groups: Option<String>,
    pub supplier: Option<String>,
    pub user_id: Option<String>,
    pub connect_timeout_ms: Option<u64>,
    pub request_timeout_ms: Option<u64>,
}

impl ConnectionSettings {
    /// Values are kept as raw strings; only the timeout fields parse as numbers.
    fn load(source: Environment) -> Result<Self> {
        let settings = Config::builder()
            .add_source(source)
            .build()?
            .try_deserialize::<ConnectionSettings>()?;
        Ok(settings)
    }

    /// Validate and turn into a [`ClientConfig`]
    pub fn into_config(self) -> Result<ClientConfig> {
        let url = non_empty(self.url)
            .ok_or_else(|| ClientError::Config("url is required".to_string()))?;

        let access_token = non_empty(self.access_token);
        let key = non_empty(self.key);
        let okta_groups = non_empty(self.okta_groups);
        let supplier = non_empty(self.supplier);
        let user_id = non_empty(self.user_id);

        let credentials = match (access_token, key) {
            (Some(_), Some(_)) => {
                return Err(ClientError::Config(
                    "access_token conflicts with key".to_string(),
                ));
            }
            (Some(access_token), None) => {
                let extra: Vec<&str> = [
                    ("okta_groups", &okta_groups),
                    ("supplier", &supplier),
                    ("user_id", &user_id),
                ]
                .into_iter()
                .filter(|(_, value)| value.is_some())
                .map(|(name, _)| name)
                .collect();

                if !extra.is_empty() {
                    return Err(ClientError::Config(format!(
                        "access_token conflicts with {}",
                        extra.join(", ")
                    )));
                }
                Credentials::token(&access_token)
            }
            (None, Some(key)) => match (okta_groups, supplier, user_id) {
                (Some(okta_groups), Some(supplier), Some(user_id)) => {
                    Credentials::key(&key, &okta_groups, &supplier, &user_id)
                }
                (okta_groups, supplier, user_id) => {
                    let missing: Vec<&str> = [
                        ("okta_groups", okta_groups.is_none()),
                        ("supplier", supplier.is_none()),
                        ("user_id", user_id.is_none()),
                    ]
                    .into_iter()
                    .filter(|(_, missing)| *missing)
                    .map(|(name, _)| name)
                    .collect();

                    return Err(ClientError::Config(format!(
                        "key requires {}",
                        missing.join(", ")
                    )));
                }
            },
            (None, None) => {
                return Err(ClientError::Config(
                    "provide either access_token or key, okta_groups, supplier and user_id"
                        .to_string(),
                ));
            }
        };

        let mut config = ClientConfig::new(&url, credentials);
        if let Some(ms) = self.connect_timeout_ms {
            config.connect_timeout_ms = ms;
        }
        if let Some(ms) = self.request_timeout_ms {
            config.request_timeout_ms = ms;
        }
        Ok(config)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
