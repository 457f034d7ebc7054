// Schema registry model types

use serde::{Deserialize, Serialize};

use super::{
    common::{Resource, null_as_default},
    environment::Environment,
};
use crate::constants::api_path;

/// A schema registry attached to an environment.
///
/// The backend names the cloud fields after the service provider; they are
/// exposed here as `cloud` and `region` to match [`super::Cluster`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SchemaRegistry {
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub environment: Environment,
    #[serde(deserialize_with = "null_as_default")]
    pub confluent_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub endpoint: String,
    #[serde(rename = "serviceProvider", deserialize_with = "null_as_default")]
    pub cloud: String,
    #[serde(rename = "serviceProviderRegion", deserialize_with = "null_as_default")]
    pub region: String,
    #[serde(rename = "keysSecretsArn", deserialize_with = "null_as_default")]
    pub secrets_manager_secret_arn: String,
}

impl Resource for SchemaRegistry {
    const PATH: &'static str = api_path::SCHEMA_REGISTRIES;
    const KIND: &'static str = "SchemaRegistry";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_registry_wire_names() {
        let json = r#"{
            "id": 4,
            "environment": {"id": 3, "name": "dev"},
            "confluentId": "lsrc-9k2m",
            "endpoint": "https://psrc-abc.us-east-2.aws.confluent.cloud",
            "serviceProvider": "AWS",
            "serviceProviderRegion": "us-east-2",
            "keysSecretsArn": "arn:aws:secretsmanager:us-east-2:1:secret:sr"
        }"#;

        let registry: SchemaRegistry = serde_json::from_str(json).unwrap();
        assert_eq!(registry.id, 4);
        assert_eq!(registry.environment.id, 3);
        assert_eq!(registry.cloud, "AWS");
        assert_eq!(registry.region, "us-east-2");
        assert_eq!(
            registry.secrets_manager_secret_arn,
            "arn:aws:secretsmanager:us-east-2:1:secret:sr"
        );

        let json = serde_json::to_string(&registry).unwrap();
        assert!(json.contains("\"serviceProviderRegion\":\"us-east-2\""));
        assert!(!json.contains("\"region\""));
    }

    #[test]
    fn test_schema_registry_null_fields_decode_as_empty() {
        let json = r#"{
            "id": 4,
            "environment": {"id": 3, "confluentId": null, "name": "dev", "supplier": null},
            "confluentId": "lsrc-9k2m",
            "endpoint": null,
            "serviceProvider": null,
            "serviceProviderRegion": "us-east-2",
            "keysSecretsArn": null
        }"#;

        let registry: SchemaRegistry = serde_json::from_str(json).unwrap();
        assert_eq!(registry.environment.name, "dev");
        assert!(registry.environment.supplier.is_empty());
        assert!(registry.endpoint.is_empty());
        assert!(registry.cloud.is_empty());
        assert_eq!(registry.region, "us-east-2");
        assert!(registry.secrets_manager_secret_arn.is_empty());
    }
}
