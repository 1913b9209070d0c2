use anyhow::Context;
use folio_config::EmailConfig;
use folio_email_contracts::EmailService;
use folio_email_impl::EmailServiceImpl;
use tracing::info;

/// Connect to the SMTP server and make sure it answers.
pub async fn connect(config: &EmailConfig) -> anyhow::Result<EmailServiceImpl> {
    let email = EmailServiceImpl::new(&config.smtp_url, config.from.clone(), *config.timeout)
        .context("Failed to create SMTP transport")?;
    email
        .ping()
        .await
        .context("Failed to connect to SMTP server")?;
    info!("connected to smtp server");
    Ok(email)
}
