use aws_config::BehaviorVersion;
use aws_sdk_dynamodb::Client;
use aws_smithy_runtime_api::client::http::SharedHttpClient;
use thiserror::Error;
use tracing::error;

use crate::config::DynamoConfig;
use crate::dynamodb::ambient::{self, AmbientError};
use crate::dynamodb::endpoint::LocalEndpointResolver;
use crate::dynamodb::trace::RequestTrace;

#[derive(Debug, Error)]
pub enum FactoryError {
    #[error(transparent)]
    ConfigurationLoad(#[from] AmbientError),
}

/// Builds DynamoDB clients that talk to DynamoDB Local when the ambient region
/// is the configured local region, and to AWS otherwise.
///
/// A client can be reused for any number of requests, so the factory itself
/// does not need to be shared with the components that use the client.
#[derive(Debug, Clone)]
pub struct ClientFactory {
    config: DynamoConfig,
    http_client: Option<SharedHttpClient>,
}

impl ClientFactory {
    /// Creates a factory using the SDK's default transport.
    pub fn new(config: DynamoConfig) -> Self {
        Self {
            config,
            http_client: None,
        }
    }

    /// Routes every request made by created clients, including credential
    /// and region discovery, through `http_client`.
    pub fn with_http_client(mut self, http_client: SharedHttpClient) -> Self {
        self.http_client = Some(http_client);
        self
    }

    /// The resolver installed on every client this factory creates.
    pub fn endpoint_resolver(&self) -> LocalEndpointResolver {
        LocalEndpointResolver::new(&self.config)
    }

    /// Loads the ambient AWS configuration and builds a client from it.
    ///
    /// Region and credentials are discovered by the SDK. Only a malformed
    /// retry tuning value in the environment or the selected profile makes
    /// this fail.
    pub async fn create_client(&self) -> Result<Client, FactoryError> {
        let retry_config = ambient::load_retry_config().await.map_err(|e| {
            error!("Failed to read AWS config, {e}");
            FactoryError::from(e)
        })?;

        let mut loader = aws_config::defaults(BehaviorVersion::latest()).retry_config(retry_config);
        if let Some(http_client) = &self.http_client {
            loader = loader.http_client(http_client.clone());
        }
        let sdk_config = loader.load().await;

        let dynamo_config = aws_sdk_dynamodb::config::Builder::from(&sdk_config)
            .endpoint_resolver(self.endpoint_resolver())
            .interceptor(RequestTrace)
            .build();

        Ok(Client::from_conf(dynamo_config))
    }
}
