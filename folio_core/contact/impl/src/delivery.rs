use std::{sync::Arc, time::Duration};

use folio_core_contact_contracts::delivery::{ContactDeliveryError, ContactDeliveryService};
use folio_email_contracts::{Email, EmailSendError, EmailService};
use folio_models::{contact::ContactSubmission, email_address::EmailAddressWithName};
use tracing::{error, info, warn};

/// Forwards submissions to the site owner by email.
///
/// Without an email service the submission is only logged, which is enough
/// for local development.
#[derive(Debug, Clone)]
pub struct ContactDeliveryServiceImpl<Email> {
    email: Option<Email>,
    config: ContactDeliveryConfig,
}

#[derive(Debug, Clone)]
pub struct ContactDeliveryConfig {
    pub recipient: Arc<EmailAddressWithName>,
    /// Upper bound for handing a message to the mail server.
    pub timeout: Duration,
}

impl<Email> ContactDeliveryServiceImpl<Email> {
    pub fn new(email: Option<Email>, config: ContactDeliveryConfig) -> Self {
        Self { email, config }
    }
}

impl<EmailS> ContactDeliveryService for ContactDeliveryServiceImpl<EmailS>
where
    EmailS: EmailService,
{
    async fn deliver(&self, submission: ContactSubmission) -> Result<(), ContactDeliveryError> {
        let Some(email_service) = &self.email else {
            info!(
                recipient = %self.config.recipient,
                "email delivery is disabled, contact form submission was only logged"
            );
            return Ok(());
        };

        let email = make_email(&self.config.recipient, submission);

        match tokio::time::timeout(self.config.timeout, email_service.send(email)).await {
            Ok(Ok(true)) => Ok(()),
            Ok(Ok(false)) => {
                error!("mail server rejected the contact form submission");
                Err(ContactDeliveryError::Rejected)
            }
            Ok(Err(EmailSendError::Unavailable(err))) => {
                warn!("mail server is temporarily unavailable: {err:#}");
                Err(ContactDeliveryError::Unavailable)
            }
            Ok(Err(EmailSendError::Other(err))) => Err(ContactDeliveryError::Other(
                err.context("Failed to send contact form submission"),
            )),
            Err(_) => {
                warn!(timeout = ?self.config.timeout, "mail server did not accept the message in time");
                Err(ContactDeliveryError::Unavailable)
            }
        }
    }
}

fn make_email(recipient: &EmailAddressWithName, submission: ContactSubmission) -> Email {
    let subject = match &submission.subject {
        Some(subject) => format!("[Contact Form] {}", subject.as_str()),
        None => format!("[Contact Form] New message from {}", submission.name.as_str()),
    };

    let body = format!(
        "Message from {} ({}):\n\nPhone: {}\nBudget: {}\nTimeline: {}\n\n{}",
        submission.name.as_str(),
        submission.email,
        submission
            .phone
            .as_deref()
            .map_or("Not provided", String::as_str),
        submission.budget.map_or("Not specified", |x| x.label()),
        submission.timeline.map_or("Not specified", |x| x.label()),
        submission.message.as_str(),
    );

    Email {
        recipient: recipient.clone(),
        subject,
        body,
        reply_to: Some(submission.email.with_name(submission.name.into_inner())),
    }
}
