use folio_core_contact_contracts::{
    delivery::{ContactDeliveryError, ContactDeliveryService},
    ContactFeatureService, ContactSubmitError,
};
use folio_models::contact::{validate, RawContactSubmission};
use tracing::info;

pub mod delivery;

#[cfg(test)]
mod tests;

#[derive(Debug, Clone)]
#[cfg_attr(test, derive(Default))]
pub struct ContactFeatureServiceImpl<Delivery> {
    delivery: Delivery,
}

impl<Delivery> ContactFeatureServiceImpl<Delivery> {
    pub fn new(delivery: Delivery) -> Self {
        Self { delivery }
    }
}

impl<Delivery> ContactFeatureService for ContactFeatureServiceImpl<Delivery>
where
    Delivery: ContactDeliveryService,
{
    async fn submit(&self, submission: RawContactSubmission) -> Result<(), ContactSubmitError> {
        if submission.missing_required() {
            return Err(ContactSubmitError::MissingFields);
        }

        let submission = validate(&submission).map_err(ContactSubmitError::InvalidFields)?;

        info!(
            name = submission.name.as_str(),
            email = %submission.email,
            phone = submission.phone.as_deref().map(String::as_str),
            budget = submission.budget.map(|x| x.value()),
            timeline = submission.timeline.map(|x| x.value()),
            subject = submission.subject.as_deref().map(String::as_str),
            content = submission.message.as_str(),
            "contact form submission"
        );

        self.delivery
            .deliver(submission)
            .await
            .map_err(|err| match err {
                ContactDeliveryError::Rejected => ContactSubmitError::Rejected,
                ContactDeliveryError::Unavailable => ContactSubmitError::Unavailable,
                ContactDeliveryError::Other(err) => ContactSubmitError::Other(err),
            })
    }
}
