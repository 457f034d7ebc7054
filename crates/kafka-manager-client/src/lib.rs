//! Kafka Manager Client - Rust client for the Kafka Manager REST API
//!
//! This crate provides:
//! - HTTP transport with token or data-platform key authentication
//! - Typed accessors for environments, clusters, schema registries and topics
//! - Topic create/update/delete with a retry policy on creation
//! - Configuration loading from `KAFKAMANAGER_*` environment variables

pub mod api;
pub mod auth;
pub mod client;
pub mod config;
pub mod constants;
pub mod error;
pub mod http;
pub mod model;
pub mod retry;

pub use api::KafkaManagerApi;
pub use auth::Credentials;
pub use client::KafkaManagerClient;
pub use config::{ClientConfig, ConnectionSettings};
pub use error::{ClientError, Result};
pub use http::HttpTransport;
pub use model::*;
pub use retry::{RetryOn, RetryPolicy};
