// KafkaManagerClient - facade for all Kafka Manager API operations

use crate::{
    auth::Credentials,
    config::ClientConfig,
    constants::{api_path, query_param},
    error::{ClientError, Result},
    http::HttpTransport,
    model::{Cluster, Environment, Items, NewTopic, Resource, SchemaRegistry, Topic},
    retry::RetryPolicy,
};
use tracing::info;

/// HTTP client for the Kafka Manager REST API.
///
/// Immutable after construction and cheap to clone; clones share the
/// underlying connection pool.
#[derive(Clone, Debug)]
pub struct KafkaManagerClient {
    transport: HttpTransport,
    retry: RetryPolicy,
}

impl KafkaManagerClient {
    /// Create a new client with the given configuration
    pub fn new(config: ClientConfig) -> Result<Self> {
        let transport = HttpTransport::new(&config)?;
        Ok(Self {
            transport,
            retry: config.retry,
        })
    }

    /// Create a client that sends requests through a caller-supplied reqwest client.
    /// The config timeouts are not applied; the supplied client's settings win.
    pub fn with_http_client(http_client: reqwest::Client, config: ClientConfig) -> Self {
        Self {
            transport: HttpTransport::with_client(http_client, &config),
            retry: config.retry,
        }
    }

    /// Create a client using access-token authentication
    pub fn with_token(url: &str, access_token: &str) -> Result<Self> {
        Self::new(ClientConfig::new(url, Credentials::token(access_token)))
    }

    /// Create a client using data-platform key authentication
    pub fn with_key(
        url: &str,
        key: &str,
        okta_groups: &str,
        supplier: &str,
        user_id: &str,
    ) -> Result<Self> {
        Self::new(ClientConfig::new(
            url,
            Credentials::key(key, okta_groups, supplier, user_id),
        ))
    }

    /// Create a client from `KAFKAMANAGER_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env()?)
    }

    pub fn base_url(&self) -> &str {
        self.transport.base_url()
    }

    pub fn credentials(&self) -> &Credentials {
        self.transport.credentials()
    }

    pub fn retry_policy(&self) -> &RetryPolicy {
        &self.retry
    }

    // ============================================================================
    // Shared accessors
    // ============================================================================

    /// List every entity of type `R`, in backend order
    pub async fn list<R: Resource>(&self) -> Result<Vec<R>> {
        let response: Items<R> = self.transport.get(R::PATH).await?;
        Ok(response.items)
    }

    /// Fetch one entity of type `R` by numeric id
    pub async fn get<R: Resource>(&self, id: i64) -> Result<R> {
        self.transport.get(&format!("{}/{}", R::PATH, id)).await
    }

    /// Fetch the first entity of type `R` matching one query parameter.
    ///
    /// The backend is expected to return at most one match for unique
    /// fields; extra items are ignored.
    pub async fn get_by<R: Resource>(&self, field: &str, value: &str) -> Result<R> {
        self.find(&[(field, value.to_string())]).await
    }

    async fn find<R: Resource>(&self, filters: &[(&str, String)]) -> Result<R> {
        let response: Items<R> = self.transport.get_with_query(R::PATH, filters).await?;
        response
            .items
            .into_iter()
            .next()
            .ok_or_else(|| ClientError::not_found(R::KIND, filters))
    }

    // ============================================================================
    // Environment APIs
    // ============================================================================

    pub async fn environment_list(&self) -> Result<Vec<Environment>> {
        self.list().await
    }

    pub async fn environment_get(&self, id: i64) -> Result<Environment> {
        self.get(id).await
    }

    pub async fn environment_get_by_name(&self, name: &str) -> Result<Environment> {
        self.get_by(query_param::NAME, name).await
    }

    pub async fn environment_get_by_confluent_id(&self, confluent_id: &str) -> Result<Environment> {
        self.get_by(query_param::CONFLUENT_ID, confluent_id).await
    }

    // ============================================================================
    // Cluster APIs
    // ============================================================================

    pub async fn cluster_list(&self) -> Result<Vec<Cluster>> {
        self.list().await
    }

    pub async fn cluster_get(&self, id: i64) -> Result<Cluster> {
        self.get(id).await
    }

    pub async fn cluster_get_by_name(&self, name: &str) -> Result<Cluster> {
        self.get_by(query_param::NAME, name).await
    }

    pub async fn cluster_get_by_confluent_id(&self, confluent_id: &str) -> Result<Cluster> {
        self.get_by(query_param::CONFLUENT_ID, confluent_id).await
    }

    // ============================================================================
    // Schema Registry APIs
    // ============================================================================

    pub async fn schema_registry_list(&self) -> Result<Vec<SchemaRegistry>> {
        self.list().await
    }

    pub async fn schema_registry_get(&self, id: i64) -> Result<SchemaRegistry> {
        self.get(id).await
    }

    pub async fn schema_registry_get_by_confluent_id(
        &self,
        confluent_id: &str,
    ) -> Result<SchemaRegistry> {
        self.get_by(query_param::CONFLUENT_ID, confluent_id).await
    }

    // ============================================================================
    // Topic APIs
    // ============================================================================

    pub async fn topic_list(&self) -> Result<Vec<Topic>> {
        self.list().await
    }

    pub async fn topic_get(&self, id: i64) -> Result<Topic> {
        self.get(id).await
    }

    pub async fn topic_get_by_name_and_cluster(&self, name: &str, cluster_id: i64) -> Result<Topic> {
        self.find(&[
            (query_param::NAME, name.to_string()),
            (query_param::CLUSTER_ID, cluster_id.to_string()),
        ])
        .await
    }

    /// Create a topic, retrying failed attempts according to the client's
    /// [`RetryPolicy`]. Each attempt sends a freshly built request.
    pub async fn topic_create(&self, topic: &NewTopic) -> Result<Topic> {
        let created: Topic = self
            .retry
            .run("create topic", || {
                self.transport.post_json(api_path::TOPICS, topic)
            })
            .await?;

        info!(
            "Created topic {} (id {}) on cluster {}",
            created.name, created.id, topic.cluster_id
        );
        Ok(created)
    }

    /// Partially update a topic. Only populated fields are sent and the id
    /// never appears in the body. Re-fetch to observe the resulting state.
    pub async fn topic_update(&self, topic: &Topic) -> Result<()> {
        self.transport
            .patch_json(&format!("{}/{}", api_path::TOPICS, topic.id), &topic.to_patch())
            .await
    }

    pub async fn topic_delete(&self, id: i64) -> Result<()> {
        self.transport
            .delete(&format!("{}/{}", api_path::TOPICS, id))
            .await
    }

    /// Delete every topic whose name starts with `prefix` and return the
    /// deleted topics. Stops at the first failed delete.
    pub async fn topic_sweep(&self, prefix: &str) -> Result<Vec<Topic>> {
        if prefix.is_empty() {
            return Err(ClientError::Config(
                "refusing to sweep topics with an empty prefix".to_string(),
            ));
        }

        let mut deleted = Vec::new();

        for topic in self.topic_list().await? {
            if topic.name.starts_with(prefix) {
                info!("Deleting topic {} (id {})", topic.name, topic.id);
                self.topic_delete(topic.id).await?;
                deleted.push(topic);
            }
        }

        Ok(deleted)
    }
}
