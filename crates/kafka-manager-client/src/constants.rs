// API path and header constants for the Kafka Manager REST API

pub mod api_path {
    pub const ENVIRONMENTS: &str = "/environments";
    pub const CLUSTERS: &str = "/clusters";
    pub const SCHEMA_REGISTRIES: &str = "/schema-registries";
    pub const TOPICS: &str = "/topics";
}

pub mod query_param {
    pub const ID: &str = "id";
    pub const NAME: &str = "name";
    pub const CONFLUENT_ID: &str = "confluentId";
    pub const CLUSTER_ID: &str = "cluster.id";
}

pub mod header {
    pub const CONTENT_TYPE_JSON: &str = "application/json";

    // Token auth
    pub const ACCESS_TOKEN: &str = "Access-Token";

    // Key auth
    pub const DATA_PLATFORM_KEY: &str = "CAI-Data-Platform-Key";
    pub const DATA_PLATFORM_OKTA_GROUPS: &str = "CAI-Data-Platform-Okta-Groups";
    pub const DATA_PLATFORM_SUPPLIER: &str = "CAI-Data-Platform-Supplier";
    pub const DATA_PLATFORM_USER_ID: &str = "CAI-Data-Platform-User-Id";
}

/// Environment variable prefix for [`crate::ClientConfig::from_env`]
pub const ENV_PREFIX: &str = "KAFKAMANAGER";
