//! Typed configuration read from the process environment.
//!
//! Values are read once at startup. A `.env` file in the working directory is
//! loaded first, so local development can keep its settings out of the shell.
//!
//! | Variable                    | Default                 |
//! |-----------------------------|-------------------------|
//! | `LOCAL_DYNAMO_ENDPOINT_URL` | `http://localhost:7001` |
//! | `LOCAL_DYNAMO_REGION`       | `local-dynamodb`        |
//! | `DESCRIBE_TABLE_NAME`       | `default-table`         |
//! | `LOG_LEVEL`                 | `INFO`                  |
//! | `ENABLE_JSON_LOG_FORMAT`    | `true`                  |

use thiserror::Error;

pub const LOCAL_DYNAMO_ENDPOINT_URL: &str = "LOCAL_DYNAMO_ENDPOINT_URL";
pub const LOCAL_DYNAMO_REGION: &str = "LOCAL_DYNAMO_REGION";
pub const DESCRIBE_TABLE_NAME: &str = "DESCRIBE_TABLE_NAME";
pub const LOG_LEVEL: &str = "LOG_LEVEL";
pub const ENABLE_JSON_LOG_FORMAT: &str = "ENABLE_JSON_LOG_FORMAT";

const DEFAULT_LOCAL_ENDPOINT_URL: &str = "http://localhost:7001";
const DEFAULT_LOCAL_DYNAMO_REGION: &str = "local-dynamodb";
const DEFAULT_TABLE_TO_DESCRIBE: &str = "default-table";
const DEFAULT_LOG_LEVEL: &str = "INFO";

/// Failure to build a [`Config`] from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name} must be a boolean such as \"true\" or \"false\", got {value:?}")]
    InvalidBool { name: &'static str, value: String },
}

/// Settings for reaching a local DynamoDB instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DynamoConfig {
    pub local_endpoint_url: String,
    pub local_dynamo_region: String,
    pub table_to_describe: String,
}

impl Default for DynamoConfig {
    fn default() -> Self {
        Self {
            local_endpoint_url: DEFAULT_LOCAL_ENDPOINT_URL.to_string(),
            local_dynamo_region: DEFAULT_LOCAL_DYNAMO_REGION.to_string(),
            table_to_describe: DEFAULT_TABLE_TO_DESCRIBE.to_string(),
        }
    }
}

impl DynamoConfig {
    pub fn local_endpoint_url(&self) -> &str {
        &self.local_endpoint_url
    }

    pub fn local_dynamo_region(&self) -> &str {
        &self.local_dynamo_region
    }

    pub fn table_to_describe(&self) -> &str {
        &self.table_to_describe
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    pub log_level: String,
    pub enable_json_log_format: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            enable_json_log_format: true,
        }
    }
}

/// Immutable configuration snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub dynamo: DynamoConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Loads `.env` (if present) and reads the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup, falling
    /// back to the documented defaults for anything missing.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let or_default = |name: &str, default: String| lookup(name).unwrap_or(default);

        let enable_json_log_format = match lookup(ENABLE_JSON_LOG_FORMAT) {
            Some(value) => parse_bool(ENABLE_JSON_LOG_FORMAT, value)?,
            None => defaults.logging.enable_json_log_format,
        };

        Ok(Self {
            dynamo: DynamoConfig {
                local_endpoint_url: or_default(
                    LOCAL_DYNAMO_ENDPOINT_URL,
                    defaults.dynamo.local_endpoint_url,
                ),
                local_dynamo_region: or_default(
                    LOCAL_DYNAMO_REGION,
                    defaults.dynamo.local_dynamo_region,
                ),
                table_to_describe: or_default(
                    DESCRIBE_TABLE_NAME,
                    defaults.dynamo.table_to_describe,
                ),
            },
            logging: LoggingConfig {
                log_level: or_default(LOG_LEVEL, defaults.logging.log_level),
                enable_json_log_format,
            },
        })
    }

    pub fn dynamo(&self) -> &DynamoConfig {
        &self.dynamo
    }

    pub fn local_endpoint_url(&self) -> &str {
        self.dynamo.local_endpoint_url()
    }

    pub fn local_dynamo_region(&self) -> &str {
        self.dynamo.local_dynamo_region()
    }

    pub fn table_to_describe(&self) -> &str {
        self.dynamo.table_to_describe()
    }

    pub fn log_level(&self) -> &str {
        &self.logging.log_level
    }

    pub fn enable_json_log_format(&self) -> bool {
        self.logging.enable_json_log_format
    }
}

/// Accepts the same spellings as Go's `strconv.ParseBool`.
fn parse_bool(name: &'static str, value: String) -> Result<bool, ConfigError> {
    match value.trim() {
        "1" | "t" | "T" | "true" | "TRUE" | "True" => Ok(true),
        "0" | "f" | "F" | "false" | "FALSE" | "False" => Ok(false),
        _ => Err(ConfigError::InvalidBool { name, value }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn empty_environment_uses_defaults() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();

        assert_eq!(config.local_endpoint_url(), "http://localhost:7001");
        assert_eq!(config.local_dynamo_region(), "local-dynamodb");
        assert_eq!(config.table_to_describe(), "default-table");
        assert_eq!(config.log_level(), "INFO");
        assert!(config.enable_json_log_format());
    }

    #[test]
    fn environment_overrides_defaults() {
        let config = Config::from_lookup(lookup_from(&[
            (LOCAL_DYNAMO_ENDPOINT_URL, "http://sam.vimes.am:7001/"),
            (LOCAL_DYNAMO_REGION, "ankh-morpork"),
            (DESCRIBE_TABLE_NAME, "watch-house"),
            (LOG_LEVEL, "debug"),
            (ENABLE_JSON_LOG_FORMAT, "false"),
        ]))
        .unwrap();

        assert_eq!(config.local_endpoint_url(), "http://sam.vimes.am:7001/");
        assert_eq!(config.local_dynamo_region(), "ankh-morpork");
        assert_eq!(config.table_to_describe(), "watch-house");
        assert_eq!(config.log_level(), "debug");
        assert!(!config.enable_json_log_format());
    }

    #[test]
    fn malformed_url_is_not_validated() {
        let config =
            Config::from_lookup(lookup_from(&[(LOCAL_DYNAMO_ENDPOINT_URL, "not a url")])).unwrap();
        assert_eq!(config.local_endpoint_url(), "not a url");
    }

    #[test]
    fn json_flag_accepts_short_and_capitalised_forms() {
        for (value, expected) in [
            ("t", true),
            ("T", true),
            ("1", true),
            ("TRUE", true),
            ("True", true),
            ("f", false),
            ("F", false),
            ("0", false),
            ("FALSE", false),
            ("False", false),
        ] {
            let config =
                Config::from_lookup(lookup_from(&[(ENABLE_JSON_LOG_FORMAT, value)])).unwrap();
            assert_eq!(config.enable_json_log_format(), expected, "{value}");
        }
    }

    #[test]
    fn non_boolean_json_flag_is_an_error() {
        let err = Config::from_lookup(lookup_from(&[(ENABLE_JSON_LOG_FORMAT, "sometimes")]))
            .unwrap_err();
        assert!(err.to_string().contains(ENABLE_JSON_LOG_FORMAT));
    }
}
