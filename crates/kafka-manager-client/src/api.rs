//! Collaborator-facing trait over the Kafka Manager API
//!
//! Code that maps Kafka Manager entities onto other systems should depend on
//! [`KafkaManagerApi`] rather than on [`KafkaManagerClient`] directly, so it
//! can be exercised against an in-memory fake.

use async_trait::async_trait;

use crate::{
    client::KafkaManagerClient,
    constants::query_param,
    error::Result,
    model::{Cluster, Environment, NewTopic, SchemaRegistry, Topic},
};

#[async_trait]
pub trait KafkaManagerApi: Send + Sync {
    // Environments
    async fn environment_list(&self) -> Result<Vec<Environment>>;
    async fn environment_get(&self, id: i64) -> Result<Environment>;
    async fn environment_get_by(&self, field: &str, value: &str) -> Result<Environment>;

    // Clusters
    async fn cluster_list(&self) -> Result<Vec<Cluster>>;
    async fn cluster_get(&self, id: i64) -> Result<Cluster>;
    async fn cluster_get_by(&self, field: &str, value: &str) -> Result<Cluster>;

    // Schema registries
    async fn schema_registry_list(&self) -> Result<Vec<SchemaRegistry>>;
    async fn schema_registry_get(&self, id: i64) -> Result<SchemaRegistry>;
    async fn schema_registry_get_by(&self, field: &str, value: &str) -> Result<SchemaRegistry>;

    // Topics
    async fn topic_list(&self) -> Result<Vec<Topic>>;
    async fn topic_get(&self, id: i64) -> Result<Topic>;
    async fn topic_get_by_name_and_cluster(&self, name: &str, cluster_id: i64) -> Result<Topic>;
    async fn topic_create(&self, topic: &NewTopic) -> Result<Topic>;
    async fn topic_update(&self, topic: &Topic) -> Result<()>;
    async fn topic_delete(&self, id: i64) -> Result<()>;

    async fn environment_get_by_name(&self, name: &str) -> Result<Environment> {
        self.environment_get_by(query_param::NAME, name).await
    }

    async fn environment_get_by_confluent_id(&self, confluent_id: &str) -> Result<Environment> {
        self.environment_get_by(query_param::CONFLUENT_ID, confluent_id)
            .await
    }

    async fn cluster_get_by_name(&self, name: &str) -> Result<Cluster> {
        self.cluster_get_by(query_param::NAME, name).await
    }

    async fn cluster_get_by_confluent_id(&self, confluent_id: &str) -> Result<Cluster> {
        self.cluster_get_by(query_param::CONFLUENT_ID, confluent_id)
            .await
    }

    async fn schema_registry_get_by_confluent_id(
        &self,
        confluent_id: &str,
    ) -> Result<SchemaRegistry> {
        self.schema_registry_get_by(query_param::CONFLUENT_ID, confluent_id)
            .await
    }
}

#[async_trait]
impl KafkaManagerApi for KafkaManagerClient {
    async fn environment_list(&self) -> Result<Vec<Environment>> {
        KafkaManagerClient::environment_list(self).await
    }

    async fn environment_get(&self, id: i64) -> Result<Environment> {
        KafkaManagerClient::environment_get(self, id).await
    }

    async fn environment_get_by(&self, field: &str, value: &str) -> Result<Environment> {
        self.get_by(field, value).await
    }

    async fn cluster_list(&self) -> Result<Vec<Cluster>> {
        KafkaManagerClient::cluster_list(self).await
    }

    async fn cluster_get(&self, id: i64) -> Result<Cluster> {
        KafkaManagerClient::cluster_get(self, id).await
    }

    async fn cluster_get_by(&self, field: &str, value: &str) -> Result<Cluster> {
        self.get_by(field, value).await
    }

    async fn schema_registry_list(&self) -> Result<Vec<SchemaRegistry>> {
        KafkaManagerClient::schema_registry_list(self).await
    }

    async fn schema_registry_get(&self, id: i64) -> Result<SchemaRegistry> {
        KafkaManagerClient::schema_registry_get(self, id).await
    }

    async fn schema_registry_get_by(&self, field: &str, value: &str) -> Result<SchemaRegistry> {
        self.get_by(field, value).await
    }

    async fn topic_list(&self) -> Result<Vec<Topic>> {
        KafkaManagerClient::topic_list(self).await
    }

    async fn topic_get(&self, id: i64) -> Result<Topic> {
        KafkaManagerClient::topic_get(self, id).await
    }

    async fn topic_get_by_name_and_cluster(&self, name: &str, cluster_id: i64) -> Result<Topic> {
        KafkaManagerClient::topic_get_by_name_and_cluster(self, name, cluster_id).await
    }

    async fn topic_create(&self, topic: &NewTopic) -> Result<Topic> {
        KafkaManagerClient::topic_create(self, topic).await
    }

    async fn topic_update(&self, topic: &Topic) -> Result<()> {
        KafkaManagerClient::topic_update(self, topic).await
    }

    async fn topic_delete(&self, id: i64) -> Result<()> {
        KafkaManagerClient::topic_delete(self, id).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::auth::Credentials;
    use crate::config::ClientConfig;

    #[test]
    fn test_client_is_object_safe() {
        let client = KafkaManagerClient::new(ClientConfig::new(
            "http://localhost:8080",
            Credentials::token("t"),
        ))
        .unwrap();

        let api: Arc<dyn KafkaManagerApi> = Arc::new(client);
        let _cloned = Arc::clone(&api);
    }
}
