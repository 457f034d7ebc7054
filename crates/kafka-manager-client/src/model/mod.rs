// Model types for Kafka Manager API requests and responses

pub mod cluster;
pub mod common;
pub mod environment;
pub mod schema_registry;
pub mod topic;

pub use cluster::Cluster;
pub use common::{Items, Resource};
pub use environment::Environment;
pub use schema_registry::SchemaRegistry;
pub use topic::{NewTopic, Topic, TopicConfig};
