use folio_core_contact_contracts::delivery::MockContactDeliveryService;
use folio_models::contact::{
    ContactField, ContactMessageContent, ContactName, ContactSubmission, RawContactSubmission,
};

use crate::ContactFeatureServiceImpl;


type Sut = ContactFeatureServiceImpl<MockContactDeliveryService>;

fn raw(fields: &[(ContactField, &str)]) -> RawContactSubmission {
    fields
        .iter()
        .map(|&(field, value)| (field, value.to_owned()))
        .collect()
}

fn valid_raw() -> RawContactSubmission {
    raw(&[
        (ContactField::Name, "Jo"),
        (ContactField::Email, "jo@x.com"),
        (ContactField::Message, "Hello there, this is a test."),
    ])
}

fn valid_submission() -> ContactSubmission {
    ContactSubmission {
        name: ContactName::try_new("Jo".to_owned()).unwrap(),
        email: "jo@x.com".parse().unwrap(),
        phone: None,
        message: ContactMessageContent::try_new("Hello there, this is a test.".to_owned()).unwrap(),
        budget: None,
        timeline: None,
        subject: None,
    }
}
