use anyhow::{anyhow, Result};
use aws_sdk_dynamodb::{operation::describe_table::DescribeTableOutput, Client};
use tracing::{error, info};

/// Thin wrapper over a DynamoDB [`Client`] for the handful of read-only
/// calls the command-line tools make.
///
/// Cloning is cheap and clones share the underlying connection pool, so one
/// instance can be handed to as many tasks as needed.
#[derive(Debug, Clone)]
pub struct DynamoDb {
    client: Client,
}

impl DynamoDb {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Verifies authentication by attempting to list tables.
    pub async fn check_auth(&self) -> Result<()> {
        self.client.list_tables().send().await.map_err(|e| {
            error!("Authentication failed: {}", e);
            anyhow!("Authentication failed")
        })?;
        info!("Authentication successful");
        Ok(())
    }

    /// Retrieves table description.
    pub async fn describe_table(&self, table_name: &str) -> Result<DescribeTableOutput> {
        self.client
            .describe_table()
            .table_name(table_name)
            .send()
            .await
            .map_err(Into::into)
    }

    /// Lists every table name, following pagination.
    pub async fn list_tables(&self) -> Result<Vec<String>> {
        let mut table_names = Vec::new();
        let mut last_evaluated_table_name = None;

        loop {
            let response = self
                .client
                .list_tables()
                .set_exclusive_start_table_name(last_evaluated_table_name)
                .send()
                .await?;

            table_names.extend(response.table_names().iter().cloned());

            last_evaluated_table_name = response.last_evaluated_table_name;

            if last_evaluated_table_name.is_none() {
                break;
            }
        }

        Ok(table_names)
    }
}
