//! Wiring of the concrete services.

use anyhow::Context;
use axum::http::HeaderValue;
use folio_api_rest::RestServerConfig;
use folio_config::Config;
use folio_core_contact_impl::{
    delivery::{ContactDeliveryConfig, ContactDeliveryServiceImpl},
    ContactFeatureServiceImpl,
};
use folio_core_health_impl::{HealthFeatureConfig, HealthFeatureServiceImpl};
use folio_email_contracts::EmailService;
use folio_extern_impl::contact::{ContactApiServiceConfig, ContactApiServiceImpl};
use types::{ContactForm, DefaultEmail, RestServer};

pub mod types;

/// Builds services from a live email service and the configuration.
#[derive(Debug, Clone)]
pub struct Provider<Email = DefaultEmail> {
    email: Option<Email>,
    config: ConfigProvider,
}

impl<Email> Provider<Email>
where
    Email: EmailService + Clone,
{
    /// `email` is `None` if no mail server is configured.
    pub fn new(config: ConfigProvider, email: Option<Email>) -> Self {
        Self { email, config }
    }

    pub fn rest_server(&self) -> RestServer<Email> {
        let health =
            HealthFeatureServiceImpl::new(self.email.clone(), self.config.health_feature.clone());
        let delivery = ContactDeliveryServiceImpl::new(
            self.email.clone(),
            self.config.contact_delivery.clone(),
        );
        let contact = ContactFeatureServiceImpl::new(delivery);

        folio_api_rest::RestServer::new(health, contact, self.config.rest_server.clone())
    }
}

/// The per component configs, derived from [`Config`].
#[derive(Debug, Clone)]
pub struct ConfigProvider {
    // API
    rest_server: RestServerConfig,

    // Extern
    contact_api_service: ContactApiServiceConfig,

    // Core
    contact_delivery: ContactDeliveryConfig,
    health_feature: HealthFeatureConfig,
}

impl ConfigProvider {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        // API
        let rest_server = RestServerConfig {
            addr: config.http.address,
            allowed_origins: config
                .http
                .allowed_origins
                .iter()
                .map(|origin| {
                    HeaderValue::from_str(origin)
                        .with_context(|| format!("Invalid allowed origin {origin:?}"))
                })
                .collect::<anyhow::Result<_>>()?,
            contact_success_message: config.contact.success_message.as_str().into(),
        };

        // Extern
        let contact_api_service = ContactApiServiceConfig {
            endpoint: config.client.endpoint.clone().into(),
            timeout: *config.client.timeout,
        };

        // Core
        let contact_delivery = ContactDeliveryConfig {
            recipient: config.contact.recipient.clone().into(),
            timeout: *config.contact.delivery_timeout,
        };

        let health_feature = HealthFeatureConfig {
            cache_ttl: *config.health.cache_ttl,
        };

        Ok(Self {
            rest_server,
            contact_api_service,
            contact_delivery,
            health_feature,
        })
    }

    pub fn contact_form(&self) -> anyhow::Result<ContactForm> {
        let api = ContactApiServiceImpl::new(self.contact_api_service.clone())?;
        Ok(ContactForm::new(api))
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use folio_config::DEFAULT_CONFIG_PATH;

    use super::*;

    #[test]
    fn from_default_config() {
        let config = folio_config::load_paths(&[DEFAULT_CONFIG_PATH]).unwrap();

        let provider = ConfigProvider::new(&config).unwrap();

        assert_eq!(
            &*provider.rest_server.allowed_origins,
            [HeaderValue::from_static("http://localhost:3000")]
        );
        assert_eq!(provider.contact_delivery.timeout, Duration::from_secs(15));
        assert_eq!(provider.health_feature.cache_ttl, Duration::from_secs(10));
        assert_eq!(
            provider.contact_api_service.endpoint.as_str(),
            "http://127.0.0.1:8000/api/contact"
        );
    }

    #[test]
    fn invalid_allowed_origin() {
        let config = folio_config::load_with_override(
            &[DEFAULT_CONFIG_PATH],
            &["[http]\nallowed_origins = [\"http://bad\\norigin\"]"],
        )
        .unwrap();

        let result = ConfigProvider::new(&config);

        assert!(result.is_err());
    }
}
