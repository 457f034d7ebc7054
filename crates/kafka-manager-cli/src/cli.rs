// Command line definition for the kafkamanager binary

use clap::{Args, Parser, Subcommand};
use kafka_manager_client::{ConnectionSettings, NewTopic, Topic, TopicConfig};

#[derive(Debug, Parser)]
#[command(name = "kafkamanager", version, about = "Kafka Manager REST API client")]
pub struct Cli {
    #[command(flatten)]
    pub connection: ConnectionArgs,

    #[command(subcommand)]
    pub command: Command,
}

/// Connection flags, each falling back to its `KAFKAMANAGER_*` variable
#[derive(Debug, Args)]
pub struct ConnectionArgs {
    #[arg(long, global = true, env = "KAFKAMANAGER_URL")]
    pub url: Option<String>,
    #[arg(long, global = true, env = "KAFKAMANAGER_ACCESS_TOKEN", hide_env_values = true)]
    pub access_token: Option<String>,
    #[arg(long, global = true, env = "KAFKAMANAGER_KEY", hide_env_values = true)]
    pub key: Option<String>,
    #[arg(long, global = true, env = "KAFKAMANAGER_OKTA_GROUPS")]
    pub okta_groups: Option<String>,
    #[arg(long, global = true, env = "KAFKAMANAGER_SUPPLIER")]
    pub supplier: Option<String>,
    #[arg(long, global = true, env = "KAFKAMANAGER_USER_ID")]
    pub user_id: Option<String>,
    #[arg(long, global = true, env = "KAFKAMANAGER_CONNECT_TIMEOUT_MS")]
    pub connect_timeout_ms: Option<u64>,
    #[arg(long, global = true, env = "KAFKAMANAGER_REQUEST_TIMEOUT_MS")]
    pub request_timeout_ms: Option<u64>,
}

impl From<ConnectionArgs> for ConnectionSettings {
    fn from(args: ConnectionArgs) -> Self {
        ConnectionSettings {
            url: args.url,
            access_token: args.access_token,
            key: args.key,
            okta_groups: args.okta_groups,
            supplier: args.supplier,
            user_id: args.user_id,
            connect_timeout_ms: args.connect_timeout_ms,
            request_timeout_ms: args.request_timeout_ms,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Confluent environments
    #[command(subcommand)]
    Environments(LookupCommand),
    /// Kafka clusters
    #[command(subcommand)]
    Clusters(LookupCommand),
    /// Schema registries
    #[command(subcommand)]
    SchemaRegistries(SchemaRegistryCommand),
    /// Kafka topics
    #[command(subcommand)]
    Topics(TopicCommand),
}

/// Read-only commands shared by environments and clusters
#[derive(Debug, Subcommand)]
pub enum LookupCommand {
    List,
    Get {
        id: i64,
    },
    Find {
        #[arg(long, conflicts_with = "confluent_id", required_unless_present = "confluent_id")]
        name: Option<String>,
        #[arg(long)]
        confluent_id: Option<String>,
    },
}

#[derive(Debug, Subcommand)]
pub enum SchemaRegistryCommand {
    List,
    Get {
        id: i64,
    },
    Find {
        #[arg(long)]
        confluent_id: String,
    },
}

#[derive(Debug, Subcommand)]
pub enum TopicCommand {
    List,
    Get {
        id: i64,
    },
    Find {
        #[arg(long)]
        name: String,
        #[arg(long)]
        cluster_id: i64,
    },
    Create {
        #[arg(long)]
        cluster_id: i64,
        #[arg(long)]
        name: String,
        #[arg(long)]
        partitions: Option<i32>,
        #[command(flatten)]
        config: TopicConfigArgs,
    },
    Update {
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        partitions: Option<i32>,
        #[command(flatten)]
        config: TopicConfigArgs,
    },
    Delete {
        id: i64,
    },
    /// Delete every topic whose name starts with the prefix
    Sweep {
        #[arg(long)]
        prefix: String,
    },
}

#[derive(Debug, Default, Args)]
pub struct TopicConfigArgs {
    #[arg(long)]
    pub replication_factor: Option<i32>,
    #[arg(long)]
    pub max_message_bytes: Option<i64>,
    #[arg(long)]
    pub cleanup_policy: Option<String>,
    #[arg(long, allow_hyphen_values = true)]
    pub retention_ms: Option<i64>,
    #[arg(long, allow_hyphen_values = true)]
    pub retention_bytes: Option<i64>,
}

impl From<TopicConfigArgs> for TopicConfig {
    fn from(args: TopicConfigArgs) -> Self {
        TopicConfig {
            id: None,
            replication_factor: args.replication_factor,
            max_message_bytes: args.max_message_bytes,
            cleanup_policy: args.cleanup_policy,
            retention_ms: args.retention_ms,
            retention_bytes: args.retention_bytes,
        }
    }
}

pub fn new_topic(
    cluster_id: i64,
    name: &str,
    partitions: Option<i32>,
    config: TopicConfigArgs,
) -> NewTopic {
    let topic = NewTopic::new(cluster_id, name).with_config(config.into());
    match partitions {
        Some(partitions) => topic.with_partitions(partitions),
        None => topic,
    }
}

/// Build the partial update for `topics update`; unset flags stay absent
pub fn topic_patch(
    id: i64,
    name: Option<String>,
    partitions: Option<i32>,
    config: TopicConfigArgs,
) -> Topic {
    let config = TopicConfig::from(config);
    Topic {
        id,
        cluster: None,
        name: name.unwrap_or_default(),
        partitions,
        config: (!config.is_empty()).then_some(config),
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_topic_find() {
        let cli = parse(&[
            "kafkamanager",
            "--url",
            "http://localhost:8080",
            "--access-token",
            "t",
            "topics",
            "find",
            "--name",
            "orders",
            "--cluster-id",
            "7",
        ]);

        assert_eq!(cli.connection.url.as_deref(), Some("http://localhost:8080"));
        match cli.command {
            Command::Topics(TopicCommand::Find { name, cluster_id }) => {
                assert_eq!(name, "orders");
                assert_eq!(cluster_id, 7);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_find_requires_one_filter() {
        assert!(Cli::try_parse_from(["kafkamanager", "environments", "find"]).is_err());
        assert!(
            Cli::try_parse_from([
                "kafkamanager",
                "clusters",
                "find",
                "--name",
                "a",
                "--confluent-id",
                "b",
            ])
            .is_err()
        );
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = parse(&["kafkamanager", "environments", "list", "--key", "k"]);
        assert_eq!(cli.connection.key.as_deref(), Some("k"));
    }

    #[test]
    fn test_create_topic_from_flags() {
        let cli = parse(&[
            "kafkamanager",
            "topics",
            "create",
            "--cluster-id",
            "7",
            "--name",
            "orders",
            "--partitions",
            "6",
            "--retention-bytes",
            "-1",
        ]);

        let Command::Topics(TopicCommand::Create {
            cluster_id,
            name,
            partitions,
            config,
        }) = cli.command
        else {
            panic!("expected topics create");
        };

        let topic = new_topic(cluster_id, &name, partitions, config);
        assert_eq!(topic.cluster_id, 7);
        assert_eq!(topic.partitions, Some(6));
        assert_eq!(topic.config.retention_bytes, Some(-1));
        assert_eq!(topic.config.replication_factor, None);
    }

    #[test]
    fn test_topic_patch_leaves_unset_fields_absent() {
        let patch = topic_patch(101, None, None, TopicConfigArgs::default());
        assert_eq!(patch.id, 101);
        assert!(patch.name.is_empty());
        assert!(patch.config.is_none());

        let patch = topic_patch(
            101,
            Some("orders".to_string()),
            None,
            TopicConfigArgs {
                retention_ms: Some(0),
                ..Default::default()
            },
        );
        assert_eq!(patch.config.and_then(|c| c.retention_ms), Some(0));
    }

    #[test]
    fn test_connection_settings_from_args() {
        let cli = parse(&[
            "kafkamanager",
            "--url",
            "http://x",
            "--key",
            "k",
            "--okta-groups",
            "g",
            "--supplier",
            "s",
            "--user-id",
            "u",
            "topics",
            "list",
        ]);

        let config = ConnectionSettings::from(cli.connection)
            .into_config()
            .unwrap();
        assert_eq!(config.url, "http://x");
        assert_eq!(config.credentials.scheme(), "key");
    }
}
