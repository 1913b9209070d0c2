use std::time::Duration;

use folio_extern_contracts::contact::{ContactApiError, MockContactApiService};
use folio_models::contact::{
    ContactBudget, ContactField, ContactMessageContent, ContactName, ContactSubmission,
    FieldErrors, RawContactSubmission, EMAIL_INVALID, MESSAGE_TOO_SHORT, NAME_TOO_SHORT,
};
use pretty_assertions::assert_eq;

use crate::{ContactForm, SubmitOutcome, SubmitStatus};

type Sut = ContactForm<MockContactApiService>;

fn fill(sut: &mut Sut) {
    sut.set(ContactField::Name, "Jo");
    sut.set(ContactField::Email, "jo@x.com");
    sut.set(ContactField::Message, "Hello there, this is a test.");
}

fn submission() -> ContactSubmission {
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

#[tokio::test]
async fn ok() {
    // Arrange
    let api = MockContactApiService::new().with_submit(submission(), Ok(()));
    let mut sut = Sut::new(api);
    fill(&mut sut);

    // Act
    let result = sut.submit().await;

    // Assert
    assert_eq!(result, SubmitOutcome::Success);
    assert_eq!(sut.status(), SubmitStatus::Success);
    assert_eq!(*sut.draft(), RawContactSubmission::default());
    assert!(sut.errors().is_empty());
}

#[tokio::test]
async fn ok_optional_fields() {
    // Arrange
    let expected = ContactSubmission {
        budget: Some(ContactBudget::Over25k),
        ..submission()
    };
    let api = MockContactApiService::new().with_submit(expected, Ok(()));
    let mut sut = Sut::new(api);
    fill(&mut sut);
    sut.set(ContactField::Budget, "25k+");
    sut.set(ContactField::Phone, "   ");

    // Act
    let result = sut.submit().await;

    // Assert
    assert_eq!(result, SubmitOutcome::Success);
}

#[tokio::test]
async fn invalid() {
    // Arrange
    let mut sut = Sut::new(MockContactApiService::new());
    sut.set(ContactField::Name, "J");
    sut.set(ContactField::Email, "not-an-email");
    sut.set(ContactField::Message, "Hi");

    // Act
    let result = sut.submit().await;

    // Assert
    assert_eq!(result, SubmitOutcome::Invalid);
    assert_eq!(sut.status(), SubmitStatus::Idle);
    assert_eq!(
        *sut.errors(),
        FieldErrors::from([
            (ContactField::Name, NAME_TOO_SHORT),
            (ContactField::Email, EMAIL_INVALID),
            (ContactField::Message, MESSAGE_TOO_SHORT),
        ])
    );
    assert_eq!(sut.draft().name.as_deref(), Some("J"));
}

#[tokio::test]
async fn error_keeps_draft() {
    // Arrange
    let api = MockContactApiService::new()
        .with_submit(submission(), Err(ContactApiError::Rejected(500)));
    let mut sut = Sut::new(api);
    fill(&mut sut);
    let draft = sut.draft().clone();

    // Act
    let result = sut.submit().await;

    // Assert
    assert_eq!(result, SubmitOutcome::Error);
    assert_eq!(sut.status(), SubmitStatus::Error);
    assert_eq!(*sut.draft(), draft);
}

#[tokio::test]
async fn retry_after_error() {
    // Arrange
    let mut seq = mockall::Sequence::new();
    let mut api = MockContactApiService::new();
    api.expect_submit()
        .once()
        .in_sequence(&mut seq)
        .return_once(|_| {
            Box::pin(std::future::ready(Err(ContactApiError::Other(
                anyhow::anyhow!("connection refused"),
            ))))
        });
    api.expect_submit()
        .once()
        .in_sequence(&mut seq)
        .with(mockall::predicate::eq(submission()))
        .return_once(|_| Box::pin(std::future::ready(Ok(()))));
    let mut sut = Sut::new(api);
    fill(&mut sut);

    // Act
    let first = sut.submit().await;
    let second = sut.submit().await;

    // Assert
    assert_eq!(first, SubmitOutcome::Error);
    assert_eq!(second, SubmitOutcome::Success);
    assert_eq!(sut.status(), SubmitStatus::Success);
}

#[tokio::test(start_paused = true)]
async fn ignored_while_submitting() {
    // Arrange
    let mut api = MockContactApiService::new();
    api.expect_submit()
        .once()
        .return_once(|_| Box::pin(std::future::pending()));
    let mut sut = Sut::new(api);
    fill(&mut sut);
    let abandoned = tokio::time::timeout(Duration::from_secs(30), sut.submit()).await;
    assert!(abandoned.is_err());

    // Act
    let result = sut.submit().await;

    // Assert
    assert_eq!(result, SubmitOutcome::Ignored);
    assert_eq!(sut.status(), SubmitStatus::Submitting);
}

#[tokio::test]
async fn reset() {
    // Arrange
    let api = MockContactApiService::new()
        .with_submit(submission(), Err(ContactApiError::Rejected(503)));
    let mut sut = Sut::new(api);
    fill(&mut sut);
    sut.submit().await;

    // Act
    sut.reset();

    // Assert
    assert_eq!(sut.status(), SubmitStatus::Idle);
    assert_eq!(*sut.draft(), RawContactSubmission::default());
    assert!(sut.errors().is_empty());
}

#[test]
fn blur() {
    // Arrange
    let mut sut = Sut::new(MockContactApiService::new());

    // Act
    sut.set(ContactField::Name, "J");
    sut.blur(ContactField::Name);
    let too_short = sut.error(ContactField::Name);
    sut.set(ContactField::Name, "Jo");
    sut.blur(ContactField::Name);
    let fixed = sut.error(ContactField::Name);

    // Assert
    assert_eq!(too_short, Some(NAME_TOO_SHORT));
    assert_eq!(fixed, None);
    assert_eq!(sut.status(), SubmitStatus::Idle);
}
