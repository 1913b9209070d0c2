use nutype::nutype;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use self::validation::{
    validate, validate_field, FieldErrors, BUDGET_INVALID, EMAIL_INVALID, MESSAGE_TOO_LONG,
    MESSAGE_TOO_SHORT, NAME_TOO_LONG, NAME_TOO_SHORT, PHONE_TOO_LONG, SUBJECT_TOO_LONG,
    TIMELINE_INVALID,
};
use crate::{email_address::EmailAddress, macros::select_options};

mod validation;

/// A validated contact form submission.
///
/// The JSON representation is the request body of the contact endpoint.
/// Absent optional fields are omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: ContactName,
    pub email: EmailAddress,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<ContactPhone>,
    pub message: ContactMessageContent,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<ContactBudget>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeline: Option<ContactTimeline>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<ContactSubject>,
}

#[nutype(
    validate(len_char_min = 2, len_char_max = 256),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct ContactName(String);

#[nutype(
    validate(len_char_max = 64),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct ContactPhone(String);

#[nutype(
    validate(len_char_min = 10, len_char_max = 4096),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct ContactMessageContent(String);

#[nutype(
    validate(len_char_max = 256),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct ContactSubject(String);

select_options! {
    /// Rough project budget the submitter has in mind.
    pub enum ContactBudget {
        Under5k("<5k", "Less than $5,000"),
        From5kTo10k("5k-10k", "$5,000 - $10,000"),
        From10kTo25k("10k-25k", "$10,000 - $25,000"),
        Over25k("25k+", "$25,000+"),
    }
}

select_options! {
    /// How soon the submitter wants the project to start.
    pub enum ContactTimeline {
        Asap("asap", "ASAP"),
        OneToTwoMonths("1-2months", "1-2 months"),
        ThreeToFourMonths("3-4months", "3-4 months"),
        Flexible("flexible", "Flexible"),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Unknown select option")]
pub struct UnknownSelectOption;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactField {
    Name,
    Email,
    Phone,
    Message,
    Budget,
    Timeline,
    Subject,
}

impl ContactField {
    pub const ALL: [Self; 7] = [
        Self::Name,
        Self::Email,
        Self::Phone,
        Self::Message,
        Self::Budget,
        Self::Timeline,
        Self::Subject,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Message => "message",
            Self::Budget => "budget",
            Self::Timeline => "timeline",
            Self::Subject => "subject",
        }
    }

    pub fn is_required(self) -> bool {
        matches!(self, Self::Name | Self::Email | Self::Message)
    }
}

impl std::fmt::Display for ContactField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The unvalidated field values of a contact form, as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawContactSubmission {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub message: Option<String>,
    pub budget: Option<String>,
    pub timeline: Option<String>,
    pub subject: Option<String>,
}

impl RawContactSubmission {
    pub fn get(&self, field: ContactField) -> Option<&str> {
        match field {
            ContactField::Name => self.name.as_deref(),
            ContactField::Email => self.email.as_deref(),
            ContactField::Phone => self.phone.as_deref(),
            ContactField::Message => self.message.as_deref(),
            ContactField::Budget => self.budget.as_deref(),
            ContactField::Timeline => self.timeline.as_deref(),
            ContactField::Subject => self.subject.as_deref(),
        }
    }

    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        *self.slot_mut(field) = Some(value.into());
    }

    pub fn clear(&mut self, field: ContactField) {
        *self.slot_mut(field) = None;
    }

    /// Whether any of `name`, `email` or `message` is absent or empty.
    pub fn missing_required(&self) -> bool {
        ContactField::ALL
            .into_iter()
            .filter(|field| field.is_required())
            .any(|field| self.get(field).unwrap_or_default().is_empty())
    }

    fn slot_mut(&mut self, field: ContactField) -> &mut Option<String> {
        match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Phone => &mut self.phone,
            ContactField::Message => &mut self.message,
            ContactField::Budget => &mut self.budget,
            ContactField::Timeline => &mut self.timeline,
            ContactField::Subject => &mut self.subject,
        }
    }
}

impl FromIterator<(ContactField, String)> for RawContactSubmission {
    fn from_iter<T: IntoIterator<Item = (ContactField, String)>>(iter: T) -> Self {
        let mut raw = Self::default();
        for (field, value) in iter {
            raw.set(field, value);
        }
        raw
    }
}

impl From<ContactSubmission> for RawContactSubmission {
    fn from(value: ContactSubmission) -> Self {
        Self {
            name: Some(value.name.into_inner()),
            email: Some(value.email.as_str().into()),
            phone: value.phone.map(ContactPhone::into_inner),
            message: Some(value.message.into_inner()),
            budget: value.budget.map(|x| x.value().into()),
            timeline: value.timeline.map(|x| x.value().into()),
            subject: value.subject.map(ContactSubject::into_inner),
        }
    }
}
