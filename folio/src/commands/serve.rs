use folio_config::Config;
use tracing::{info, warn};

use crate::{
    email,
    environment::{ConfigProvider, Provider},
};

pub async fn serve(config: Config) -> anyhow::Result<()> {
    let email = match &config.email {
        Some(email_config) => {
            info!("Connecting to smtp server");
            Some(email::connect(email_config).await?)
        }
        None => {
            warn!("No smtp server configured, contact form submissions will only be logged");
            None
        }
    };

    let config_provider = ConfigProvider::new(&config)?;
    let provider = Provider::new(config_provider, email);
    let server = provider.rest_server();
    info!("Starting http server on {}", config.http.address);
    server.serve().await
}
