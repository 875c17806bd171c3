use anyhow::Result;
use dynamo_factory::config::Config;
use dynamo_factory::dynamodb::{ClientFactory, DynamoDb};
use dynamo_factory::logging;
use tracing::info;

/// Describes one table and lists every table, against DynamoDB Local when
/// `AWS_REGION` matches `LOCAL_DYNAMO_REGION` and AWS otherwise.
#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;
    logging::init_logging(&config)?;

    let factory = ClientFactory::new(config.dynamo().clone());
    let ddb = DynamoDb::new(factory.create_client().await?);

    let table_name = config.table_to_describe();
    let description = ddb.describe_table(table_name).await?;
    match description.table() {
        Some(table) => {
            info!("Describe table ID: {:?}", table.table_id());
            info!("Describe table keyschema size: {}", table.key_schema().len());
        }
        None => info!("Table '{table_name}' described, but no description returned"),
    }

    let tables = ddb.list_tables().await?;
    info!("Found {} tables", tables.len());
    for table in tables {
        info!("Table: {table}");
    }

    Ok(())
}
