use std::{sync::Arc, time::Duration};

use anyhow::Context;
use folio_extern_contracts::contact::{ContactApiError, ContactApiService};
use folio_models::contact::ContactSubmission;
use tracing::debug;
use url::Url;

use crate::http::HttpClient;

#[derive(Debug, Clone)]
pub struct ContactApiServiceImpl {
    config: ContactApiServiceConfig,
    client: HttpClient,
}

#[derive(Debug, Clone)]
pub struct ContactApiServiceConfig {
    pub endpoint: Arc<Url>,
    pub timeout: Duration,
}

impl ContactApiServiceImpl {
    pub fn new(config: ContactApiServiceConfig) -> anyhow::Result<Self> {
        Ok(Self {
            config,
            client: HttpClient::new()?,
        })
    }
}

impl ContactApiService for ContactApiServiceImpl {
    async fn submit(&self, submission: ContactSubmission) -> Result<(), ContactApiError> {
        let response = self
            .client
            .post(self.config.endpoint.as_str())
            .timeout(self.config.timeout)
            .json(&submission)
            .send()
            .await
            .with_context(|| format!("Failed to reach {}", self.config.endpoint))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            debug!(%status, body, "contact endpoint rejected submission");
            return Err(ContactApiError::Rejected(status.as_u16()));
        }

        Ok(())
    }
}
