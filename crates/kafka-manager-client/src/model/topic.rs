// Topic model types

use serde::{Deserialize, Serialize};

use super::{
    cluster::Cluster,
    common::{Resource, null_as_default},
};
use crate::constants::api_path;

/// A Kafka topic as returned by the backend
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Topic {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cluster: Option<Cluster>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(
        rename = "partitionsCount",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub partitions: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<TopicConfig>,
}

impl Resource for Topic {
    const PATH: &'static str = api_path::TOPICS;
    const KIND: &'static str = "Topic";
}

impl Topic {
    /// Id of the owning cluster, when the backend embedded it
    pub fn cluster_id(&self) -> Option<i64> {
        self.cluster.as_ref().map(|c| c.id)
    }

    /// Partial-update payload for `PATCH /topics/{id}`.
    ///
    /// The backend rejects an `id` in partial updates, so neither the topic id
    /// nor the config id is carried over.
    pub(crate) fn to_patch(&self) -> TopicPatch<'_> {
        TopicPatch {
            name: (!self.name.is_empty()).then_some(self.name.as_str()),
            partitions: self.partitions,
            config: self.config.as_ref().map(|config| TopicConfig {
                id: None,
                ..config.clone()
            }),
        }
    }
}

/// Topic-level Kafka settings.
///
/// Every field is optional and absent fields are left out of the JSON body,
/// so an explicit `Some(0)` is distinguishable from "leave unchanged".
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TopicConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replication_factor: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_message_bytes: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cleanup_policy: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retention_ms: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retention_bytes: Option<i64>,
}

impl TopicConfig {
    pub fn with_replication_factor(mut self, replication_factor: i32) -> Self {
        self.replication_factor = Some(replication_factor);
        self
    }

    pub fn with_max_message_bytes(mut self, max_message_bytes: i64) -> Self {
        self.max_message_bytes = Some(max_message_bytes);
        self
    }

    pub fn with_cleanup_policy(mut self, cleanup_policy: &str) -> Self {
        self.cleanup_policy = Some(cleanup_policy.to_string());
        self
    }

    pub fn with_retention_ms(mut self, retention_ms: i64) -> Self {
        self.retention_ms = Some(retention_ms);
        self
    }

    pub fn with_retention_bytes(mut self, retention_bytes: i64) -> Self {
        self.retention_bytes = Some(retention_bytes);
        self
    }

    /// True when no setting is populated
    pub fn is_empty(&self) -> bool {
        self.replication_factor.is_none()
            && self.max_message_bytes.is_none()
            && self.cleanup_policy.is_none()
            && self.retention_ms.is_none()
            && self.retention_bytes.is_none()
    }
}

/// Request body for `POST /topics`
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTopic {
    pub cluster_id: i64,
    pub name: String,
    #[serde(rename = "partitionsCount", skip_serializing_if = "Option::is_none")]
    pub partitions: Option<i32>,
    pub config: TopicConfig,
}

impl NewTopic {
    pub fn new(cluster_id: i64, name: &str) -> Self {
        Self {
            cluster_id,
            name: name.to_string(),
            partitions: None,
            config: TopicConfig::default(),
        }
    }

    pub fn with_partitions(mut self, partitions: i32) -> Self {
        self.partitions = Some(partitions);
        self
    }

    pub fn with_config(mut self, config: TopicConfig) -> Self {
        self.config = config;
        self
    }
}

/// Request body for `PATCH /topics/{id}`
#[derive(Debug, Serialize)]
pub(crate) struct TopicPatch<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<&'a str>,
    #[serde(rename = "partitionsCount", skip_serializing_if = "Option::is_none")]
    pub partitions: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<TopicConfig>,
}
