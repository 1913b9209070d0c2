use std::collections::BTreeMap;

use super::{
    ContactBudget, ContactField, ContactMessageContent, ContactName, ContactPhone, ContactSubject,
    ContactSubmission, ContactTimeline, RawContactSubmission,
};
use crate::email_address::EmailAddress;

/// User facing error messages, keyed by the field they belong to.
pub type FieldErrors = BTreeMap<ContactField, &'static str>;

pub const NAME_TOO_SHORT: &str = "Name must be at least 2 characters";
pub const NAME_TOO_LONG: &str = "Name must be at most 256 characters";
pub const EMAIL_INVALID: &str = "Please enter a valid email address";
pub const PHONE_TOO_LONG: &str = "Phone number must be at most 64 characters";
pub const MESSAGE_TOO_SHORT: &str = "Message must be at least 10 characters";
pub const MESSAGE_TOO_LONG: &str = "Message must be at most 4096 characters";
pub const BUDGET_INVALID: &str = "Please select a valid budget range";
pub const TIMELINE_INVALID: &str = "Please select a valid timeline";
pub const SUBJECT_TOO_LONG: &str = "Subject must be at most 256 characters";

type FieldResult<T> = Result<T, &'static str>;

/// Validates all fields of a raw submission.
///
/// Empty or whitespace-only optional fields are treated as absent. Required
/// fields are checked as typed, without trimming.
pub fn validate(raw: &RawContactSubmission) -> Result<ContactSubmission, FieldErrors> {
    let name = parse_name(raw.name.as_deref());
    let email = parse_email(raw.email.as_deref());
    let phone = parse_phone(raw.phone.as_deref());
    let message = parse_message(raw.message.as_deref());
    let budget = parse_budget(raw.budget.as_deref());
    let timeline = parse_timeline(raw.timeline.as_deref());
    let subject = parse_subject(raw.subject.as_deref());

    match (name, email, phone, message, budget, timeline, subject) {
        (Ok(name), Ok(email), Ok(phone), Ok(message), Ok(budget), Ok(timeline), Ok(subject)) => {
            Ok(ContactSubmission {
                name,
                email,
                phone,
                message,
                budget,
                timeline,
                subject,
            })
        }
        (name, email, phone, message, budget, timeline, subject) => Err([
            (ContactField::Name, name.err()),
            (ContactField::Email, email.err()),
            (ContactField::Phone, phone.err()),
            (ContactField::Message, message.err()),
            (ContactField::Budget, budget.err()),
            (ContactField::Timeline, timeline.err()),
            (ContactField::Subject, subject.err()),
        ]
        .into_iter()
        .filter_map(|(field, error)| Some((field, error?)))
        .collect()),
    }
}

/// Validates a single field of a raw submission, e.g. when the user leaves
/// the input.
pub fn validate_field(field: ContactField, raw: &RawContactSubmission) -> Option<&'static str> {
    let value = raw.get(field);
    match field {
        ContactField::Name => parse_name(value).err(),
        ContactField::Email => parse_email(value).err(),
        ContactField::Phone => parse_phone(value).err(),
        ContactField::Message => parse_message(value).err(),
        ContactField::Budget => parse_budget(value).err(),
        ContactField::Timeline => parse_timeline(value).err(),
        ContactField::Subject => parse_subject(value).err(),
    }
}

fn parse_name(value: Option<&str>) -> FieldResult<ContactName> {
    let value = value.unwrap_or_default();
    ContactName::try_new(value.to_owned())
        .map_err(|_| length_error(value, 2, NAME_TOO_SHORT, NAME_TOO_LONG))
}

fn parse_email(value: Option<&str>) -> FieldResult<EmailAddress> {
    value
        .unwrap_or_default()
        .parse()
        .map_err(|_| EMAIL_INVALID)
}

fn parse_phone(value: Option<&str>) -> FieldResult<Option<ContactPhone>> {
    present(value)
        .map(|phone| ContactPhone::try_new(phone.to_owned()).map_err(|_| PHONE_TOO_LONG))
        .transpose()
}

fn parse_message(value: Option<&str>) -> FieldResult<ContactMessageContent> {
    let value = value.unwrap_or_default();
    ContactMessageContent::try_new(value.to_owned())
        .map_err(|_| length_error(value, 10, MESSAGE_TOO_SHORT, MESSAGE_TOO_LONG))
}

fn parse_budget(value: Option<&str>) -> FieldResult<Option<ContactBudget>> {
    present(value)
        .map(|budget| budget.parse().map_err(|_| BUDGET_INVALID))
        .transpose()
}

fn parse_timeline(value: Option<&str>) -> FieldResult<Option<ContactTimeline>> {
    present(value)
        .map(|timeline| timeline.parse().map_err(|_| TIMELINE_INVALID))
        .transpose()
}

fn parse_subject(value: Option<&str>) -> FieldResult<Option<ContactSubject>> {
    present(value)
        .map(|subject| ContactSubject::try_new(subject.to_owned()).map_err(|_| SUBJECT_TOO_LONG))
        .transpose()
}

fn length_error(
    value: &str,
    min: usize,
    too_short: &'static str,
    too_long: &'static str,
) -> &'static str {
    if value.chars().count() < min {
        too_short
    } else {
        too_long
    }
}

fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.trim().is_empty())
}
