use anyhow::bail;
use clap::Args;
use folio_config::Config;
use folio_form::SubmitOutcome;
use folio_models::contact::ContactField;
use url::Url;

use crate::environment::ConfigProvider;

#[derive(Debug, Args)]
pub struct SubmitCommand {
    /// Full name of the sender
    #[arg(long)]
    name: String,
    /// Email address replies go to
    #[arg(long)]
    email: String,
    #[arg(long)]
    message: String,
    #[arg(long)]
    phone: Option<String>,
    /// One of <5k, 5k-10k, 10k-25k, 25k+
    #[arg(long)]
    budget: Option<String>,
    /// One of asap, 1-2months, 3-4months, flexible
    #[arg(long)]
    timeline: Option<String>,
    #[arg(long)]
    subject: Option<String>,
    /// Send to this endpoint instead of the configured one
    #[arg(long)]
    endpoint: Option<Url>,
}

impl SubmitCommand {
    pub async fn invoke(self, mut config: Config) -> anyhow::Result<()> {
        if let Some(endpoint) = self.endpoint {
            config.client.endpoint = endpoint;
        }
        let mut form = ConfigProvider::new(&config)?.contact_form()?;

        let fields = [
            (ContactField::Name, Some(self.name)),
            (ContactField::Email, Some(self.email)),
            (ContactField::Message, Some(self.message)),
            (ContactField::Phone, self.phone),
            (ContactField::Budget, self.budget),
            (ContactField::Timeline, self.timeline),
            (ContactField::Subject, self.subject),
        ];
        for (field, value) in fields {
            if let Some(value) = value {
                form.set(field, value);
            }
        }

        match form.submit().await {
            SubmitOutcome::Success => {
                println!("Message sent");
                Ok(())
            }
            SubmitOutcome::Invalid => {
                for (field, error) in form.errors() {
                    eprintln!("{field}: {error}");
                }
                bail!("The contact form is invalid")
            }
            SubmitOutcome::Error => bail!("Failed to send the contact form"),
            SubmitOutcome::Ignored => bail!("Another submission is still in progress"),
        }
    }
}
