// Environment model types

use serde::{Deserialize, Serialize};

use super::common::{Resource, null_as_default};
use crate::constants::api_path;

/// A Confluent environment registered in Kafka Manager
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Environment {
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub confluent_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub supplier: String,
}

impl Resource for Environment {
    const PATH: &'static str = api_path::ENVIRONMENTS;
    const KIND: &'static str = "Environment";
}
