use std::{net::SocketAddr, path::Path};

use anyhow::Context;
use config::{Environment, File, FileFormat};
use folio_models::email_address::EmailAddressWithName;
use serde::Deserialize;
use url::Url;

pub use self::duration::Duration;

mod duration;

pub const DEFAULT_CONFIG_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../config.toml");

/// Environment variable holding a colon separated list of config files.
pub const CONFIG_PATHS_VAR: &str = "FOLIO_CONFIG";

/// Load the config from the files listed in `FOLIO_CONFIG`, or from the
/// default config file if the variable is not set.
pub fn load() -> anyhow::Result<Config> {
    match std::env::var(CONFIG_PATHS_VAR) {
        Ok(paths) => load_paths(&paths.split(':').collect::<Vec<_>>()),
        Err(std::env::VarError::NotPresent) => load_paths(&[DEFAULT_CONFIG_PATH]),
        Err(err) => Err(err).with_context(|| format!("Failed to read {CONFIG_PATHS_VAR}")),
    }
}

pub fn load_paths(paths: &[impl AsRef<Path>]) -> anyhow::Result<Config> {
    load_with_override(paths, &[])
}

/// Load the config files at `paths`, then apply the TOML snippets in
/// `overrides` and finally `FOLIO__SECTION__KEY` environment variables.
pub fn load_with_override(
    paths: &[impl AsRef<Path>],
    overrides: &[&str],
) -> anyhow::Result<Config> {
    let builder = paths
        .iter()
        .try_fold(config::Config::builder(), |builder, path| {
            let path = path.as_ref();
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file at {}", path.display()))?;
            let source = File::from_str(&content, FileFormat::Toml);
            anyhow::Ok(builder.add_source(source))
        })?;

    overrides
        .iter()
        .fold(builder, |builder, snippet| {
            builder.add_source(File::from_str(snippet, FileFormat::Toml))
        })
        .add_source(Environment::with_prefix("FOLIO").separator("__"))
        .build()?
        .try_deserialize()
        .context("Failed to load config")
}

#[derive(Debug, Deserialize)]
pub struct Config {
    pub http: HttpConfig,
    pub email: Option<EmailConfig>,
    pub health: HealthConfig,
    pub contact: ContactConfig,
    pub client: ClientConfig,
}

#[derive(Debug, Deserialize)]
pub struct HttpConfig {
    pub address: SocketAddr,
    /// Origins that may submit the contact form from a browser.
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct EmailConfig {
    pub smtp_url: String,
    pub from: EmailAddressWithName,
    pub timeout: Duration,
}

#[derive(Debug, Deserialize)]
pub struct HealthConfig {
    pub cache_ttl: Duration,
}

#[derive(Debug, Deserialize)]
pub struct ContactConfig {
    /// Mailbox of the site owner that receives contact form submissions.
    pub recipient: EmailAddressWithName,
    pub success_message: String,
    pub delivery_timeout: Duration,
}

#[derive(Debug, Deserialize)]
pub struct ClientConfig {
    pub endpoint: Url,
    pub timeout: Duration,
}
