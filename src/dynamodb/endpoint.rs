use std::collections::HashMap;

use aws_sdk_dynamodb::config::endpoint::{
    DefaultResolver, EndpointFuture, Params, ResolveEndpoint,
};
use aws_smithy_types::Document;
use tracing::debug;

use crate::config::DynamoConfig;

/// Identifier of the DynamoDB service family, as used for request signing.
pub const DYNAMODB_SERVICE_ID: &str = "dynamodb";

const AWS_PARTITION: &str = "aws";

/// A resolved network target for a service call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub partition_id: String,
    pub url: String,
    /// Always the region the request was resolved for. Signing for any other
    /// region gets the request rejected by DynamoDB Local.
    pub signing_region: String,
}

impl From<Endpoint> for aws_smithy_types::endpoint::Endpoint {
    fn from(endpoint: Endpoint) -> Self {
        let auth_scheme = HashMap::from([
            ("name".to_string(), Document::String("sigv4".to_string())),
            (
                "signingName".to_string(),
                Document::String(DYNAMODB_SERVICE_ID.to_string()),
            ),
            (
                "signingRegion".to_string(),
                Document::String(endpoint.signing_region),
            ),
        ]);

        aws_smithy_types::endpoint::Endpoint::builder()
            .url(endpoint.url)
            .property(
                "authSchemes",
                Document::Array(vec![Document::Object(auth_scheme)]),
            )
            .build()
    }
}

/// Outcome of [`LocalEndpointResolver::resolve`].
///
/// `NotFound` is not a failure: it asks the caller to fall back to the
/// standard production endpoint for the service and region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Resolved(Endpoint),
    NotFound,
}

/// Routes DynamoDB requests for the configured local region to the local
/// endpoint and leaves every other region to the SDK's default resolution.
#[derive(Debug)]
pub struct LocalEndpointResolver {
    local_endpoint_url: String,
    local_dynamo_region: String,
    fallback: DefaultResolver,
}

impl LocalEndpointResolver {
    pub fn new(config: &DynamoConfig) -> Self {
        Self {
            local_endpoint_url: config.local_endpoint_url().to_string(),
            local_dynamo_region: config.local_dynamo_region().to_string(),
            fallback: DefaultResolver::new(),
        }
    }

    /// Matching is exact string equality on both service and region. An
    /// empty region never matches.
    pub fn resolve(&self, service: &str, region: &str) -> Resolution {
        debug!("Endpoint resolver called for service: {service}, region: {region}");

        let is_local = !region.is_empty() && region == self.local_dynamo_region;
        if service == DYNAMODB_SERVICE_ID && is_local {
            debug!("Returning local endpoint: {}", self.local_endpoint_url);
            return Resolution::Resolved(Endpoint {
                partition_id: AWS_PARTITION.to_string(),
                url: self.local_endpoint_url.clone(),
                signing_region: region.to_string(),
            });
        }
        Resolution::NotFound
    }
}

impl ResolveEndpoint for LocalEndpointResolver {
    fn resolve_endpoint<'a>(&'a self, params: &'a Params) -> EndpointFuture<'a> {
        let region = params.region().unwrap_or_default();
        match self.resolve(DYNAMODB_SERVICE_ID, region) {
            Resolution::Resolved(endpoint) => EndpointFuture::ready(Ok(endpoint.into())),
            Resolution::NotFound => self.fallback.resolve_endpoint(params),
        }
    }
}
