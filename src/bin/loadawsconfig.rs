use anyhow::{Context, Result};
use aws_config::BehaviorVersion;
use aws_sdk_dynamodb::config::ProvideCredentials;
use dynamo_factory::config::Config;
use dynamo_factory::dynamodb::ambient;
use dynamo_factory::logging;
use tracing::info;

/// Loads the ambient AWS configuration and reports the region and
/// credentials it resolves to.
#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;
    logging::init_logging(&config)?;

    info!("Reading default AWS config ...");
    let retry_config = ambient::load_retry_config().await?;
    let sdk_config = aws_config::defaults(BehaviorVersion::latest())
        .retry_config(retry_config)
        .load()
        .await;
    info!("AWS Config read");
    info!("Region: {:?}", sdk_config.region());

    let provider = sdk_config
        .credentials_provider()
        .context("No credentials provider configured")?;
    let credentials = provider
        .provide_credentials()
        .await
        .context("Failed to get credentials")?;

    info!("Credentials: AccessKeyID: {}", credentials.access_key_id());
    Ok(())
}
