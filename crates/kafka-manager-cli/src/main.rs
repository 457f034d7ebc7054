//! kafkamanager - command line client for the Kafka Manager REST API

mod cli;
mod logging;

use anyhow::Context;
use clap::Parser;
use kafka_manager_client::{ConnectionSettings, KafkaManagerClient};
use serde::Serialize;
use serde_json::json;
use tracing::info;

use crate::cli::{Cli, Command, LookupCommand, SchemaRegistryCommand, TopicCommand};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init_logging();

    let cli = Cli::parse();
    let config = ConnectionSettings::from(cli.connection)
        .into_config()
        .context("invalid connection settings")?;
    let client = KafkaManagerClient::new(config)?;

    match cli.command {
        Command::Environments(command) => match command {
            LookupCommand::List => print_json(&client.environment_list().await?),
            LookupCommand::Get { id } => print_json(&client.environment_get(id).await?),
            LookupCommand::Find {
                name: Some(name), ..
            } => print_json(&client.environment_get_by_name(&name).await?),
            LookupCommand::Find { confluent_id, .. } => print_json(
                &client
                    .environment_get_by_confluent_id(&confluent_id.unwrap_or_default())
                    .await?,
            ),
        },
        Command::Clusters(command) => match command {
            LookupCommand::List => print_json(&client.cluster_list().await?),
            LookupCommand::Get { id } => print_json(&client.cluster_get(id).await?),
            LookupCommand::Find {
                name: Some(name), ..
            } => print_json(&client.cluster_get_by_name(&name).await?),
            LookupCommand::Find { confluent_id, .. } => print_json(
                &client
                    .cluster_get_by_confluent_id(&confluent_id.unwrap_or_default())
                    .await?,
            ),
        },
        Command::SchemaRegistries(command) => match command {
            SchemaRegistryCommand::List => print_json(&client.schema_registry_list().await?),
            SchemaRegistryCommand::Get { id } => {
                print_json(&client.schema_registry_get(id).await?)
            }
            SchemaRegistryCommand::Find { confluent_id } => print_json(
                &client
                    .schema_registry_get_by_confluent_id(&confluent_id)
                    .await?,
            ),
        },
        Command::Topics(command) => run_topic_command(&client, command).await,
    }
}

async fn run_topic_command(
    client: &KafkaManagerClient,
    command: TopicCommand,
) -> anyhow::Result<()> {
    match command {
        TopicCommand::List => print_json(&client.topic_list().await?),
        TopicCommand::Get { id } => print_json(&client.topic_get(id).await?),
        TopicCommand::Find { name, cluster_id } => print_json(
            &client
                .topic_get_by_name_and_cluster(&name, cluster_id)
                .await?,
        ),
        TopicCommand::Create {
            cluster_id,
            name,
            partitions,
            config,
        } => {
            let topic = cli::new_topic(cluster_id, &name, partitions, config);
            print_json(&client.topic_create(&topic).await?)
        }
        TopicCommand::Update {
            id,
            name,
            partitions,
            config,
        } => {
            client
                .topic_update(&cli::topic_patch(id, name, partitions, config))
                .await?;
            // The PATCH response carries no body, so show the stored state
            print_json(&client.topic_get(id).await?)
        }
        TopicCommand::Delete { id } => {
            client.topic_delete(id).await?;
            info!("Deleted topic {}", id);
            print_json(&json!({ "deleted": id }))
        }
        TopicCommand::Sweep { prefix } => print_json(&client.topic_sweep(&prefix).await?),
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
