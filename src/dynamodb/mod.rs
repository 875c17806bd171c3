//! # DynamoDB Module
//!
//! Builds DynamoDB clients that switch between DynamoDB Local and AWS based on
//! the region the SDK is targeting.
//!
//! ## Components
//!
//! - `ClientFactory`: loads the ambient AWS configuration and builds a client
//!   with the local endpoint resolver installed.
//! - `LocalEndpointResolver`: sends requests for the local region to the local
//!   endpoint and everything else to the production endpoint.
//! - `DynamoDb`: small wrapper around the client for describing and listing
//!   tables.
//!
//! ## Usage
//!
//! Region and credentials come from the usual AWS sources:
//!
//! - `AWS_REGION`: set to the value of `LOCAL_DYNAMO_REGION` to use the local
//!   endpoint, or to a real region to use AWS.
//! - `AWS_ACCESS_KEY_ID` / `AWS_SECRET_ACCESS_KEY`: any values work against
//!   DynamoDB Local.
//! - `AWS_MAX_ATTEMPTS` / `AWS_RETRY_MODE`: optional retry tuning.
//!
//! ## Example
//!
//! ```no_run
//! use dynamo_factory::config::Config;
//! use dynamo_factory::dynamodb::{ClientFactory, DynamoDb};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let factory = ClientFactory::new(config.dynamo().clone());
//!     let ddb = DynamoDb::new(factory.create_client().await?);
//!
//!     for table in ddb.list_tables().await? {
//!         println!("{table}");
//!     }
//!     Ok(())
//! }
//! ```

pub mod ambient;
mod client;
mod endpoint;
mod factory;
mod trace;

pub use ambient::AmbientError;
pub use client::DynamoDb;
pub use endpoint::{Endpoint, LocalEndpointResolver, Resolution, DYNAMODB_SERVICE_ID};
pub use factory::{ClientFactory, FactoryError};
pub use trace::RequestTrace;
