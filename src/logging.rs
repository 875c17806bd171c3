use anyhow::Result;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// Installs the global subscriber using the configured level and format.
///
/// `RUST_LOG`, when set, takes precedence over `LOG_LEVEL`.
pub fn init_logging(config: &Config) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level().to_ascii_lowercase()))?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_line_number(true)
        .with_file(true)
        .with_target(false);

    if config.enable_json_log_format() {
        tracing::subscriber::set_global_default(builder.json().finish())?;
    } else {
        tracing::subscriber::set_global_default(builder.finish())?;
    }
    Ok(())
}
