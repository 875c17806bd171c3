//! Retry tuning read from the standard AWS environment variables and the
//! selected profile in the shared config file.
//!
//! The SDK's own loader panics on a malformed `AWS_MAX_ATTEMPTS`; reading the
//! values here turns that into an error the factory can report. Environment
//! variables take precedence over the profile, as they do in the SDK.

use std::num::ParseIntError;

use aws_smithy_types::retry::{RetryConfig, RetryMode};
use aws_types::os_shim_internal::{Env, Fs};
use thiserror::Error;
use tracing::warn;

pub const AWS_MAX_ATTEMPTS: &str = "AWS_MAX_ATTEMPTS";
pub const AWS_RETRY_MODE: &str = "AWS_RETRY_MODE";

const PROFILE_MAX_ATTEMPTS: &str = "max_attempts";
const PROFILE_RETRY_MODE: &str = "retry_mode";

#[derive(Debug, Error)]
pub enum AmbientError {
    #[error("{setting} must be a positive integer, got {value:?}")]
    InvalidMaxAttempts {
        setting: String,
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("{setting} must be greater than zero")]
    ZeroMaxAttempts { setting: String },

    #[error("{setting} must be \"standard\" or \"adaptive\", got {value:?}")]
    InvalidRetryMode { setting: String, value: String },
}

/// Reads retry tuning from the process environment, then from the profile
/// selected by `AWS_PROFILE` in the shared config file.
///
/// A profile file that cannot be parsed is logged and skipped; the SDK's own
/// loaders treat it the same way.
pub async fn load_retry_config() -> Result<RetryConfig, AmbientError> {
    let env = Env::real();
    let profile = match aws_config::profile::load(&Fs::real(), &env, &Default::default(), None)
        .await
    {
        Ok(profile) => Some(profile),
        Err(e) => {
            warn!("Ignoring unreadable AWS profile file: {e}");
            None
        }
    };

    retry_config(
        |name| std::env::var(name).ok(),
        |key| profile.as_ref()?.get(key).map(str::to_string),
    )
}

/// Builds the retry configuration from an environment lookup and a lookup of
/// keys in the selected profile.
pub fn retry_config<E, P>(env: E, profile: P) -> Result<RetryConfig, AmbientError>
where
    E: Fn(&str) -> Option<String>,
    P: Fn(&str) -> Option<String>,
{
    let lookup_setting = |env_name: &str, profile_key: &str| {
        env(env_name)
            .map(|value| (env_name.to_string(), value))
            .or_else(|| {
                profile(profile_key).map(|value| (format!("profile {profile_key}"), value))
            })
    };

    let mut config = match lookup_setting(AWS_RETRY_MODE, PROFILE_RETRY_MODE) {
        Some((setting, value)) => match parse_retry_mode(setting, value)? {
            RetryMode::Adaptive => RetryConfig::adaptive(),
            _ => RetryConfig::standard(),
        },
        None => RetryConfig::standard(),
    };

    if let Some((setting, value)) = lookup_setting(AWS_MAX_ATTEMPTS, PROFILE_MAX_ATTEMPTS) {
        let max_attempts = match value.trim().parse::<u32>() {
            Ok(max_attempts) => max_attempts,
            Err(source) => {
                return Err(AmbientError::InvalidMaxAttempts {
                    setting,
                    value,
                    source,
                })
            }
        };
        if max_attempts == 0 {
            return Err(AmbientError::ZeroMaxAttempts { setting });
        }
        config = config.with_max_attempts(max_attempts);
    }

    Ok(config)
}

fn parse_retry_mode(setting: String, value: String) -> Result<RetryMode, AmbientError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "standard" => Ok(RetryMode::Standard),
        "adaptive" => Ok(RetryMode::Adaptive),
        _ => Err(AmbientError::InvalidRetryMode { setting, value }),
    }
}
