// Cluster model types

use serde::{Deserialize, Serialize};

use super::{
    common::{Resource, null_as_default},
    environment::Environment,
};
use crate::constants::api_path;

/// A Kafka cluster and the connection details Kafka Manager keeps for it
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Cluster {
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub environment: Environment,
    #[serde(deserialize_with = "null_as_default")]
    pub confluent_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub cloud: String,
    #[serde(deserialize_with = "null_as_default")]
    pub region: String,
    #[serde(deserialize_with = "null_as_default")]
    pub availability: String,
    #[serde(deserialize_with = "null_as_default")]
    pub cluster_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub networking_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub secrets_manager_secret_arn: String,
    #[serde(deserialize_with = "null_as_default")]
    pub secrets_manager_cloud_secret_arn: String,
    #[serde(deserialize_with = "null_as_default")]
    pub rest_proxy_url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub bootstrap_servers: String,
    #[serde(deserialize_with = "null_as_default")]
    pub default_s3_bucket_name: String,
}

impl Resource for Cluster {
    const PATH: &'static str = api_path::CLUSTERS;
    const KIND: &'static str = "Cluster";
}
