use std::future::Future;

use folio_models::contact::ContactSubmission;
use thiserror::Error;

/// Notifies the site owner about an accepted submission.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactDeliveryService: Send + Sync + 'static {
    /// Deliver a submission.
    ///
    /// Called at most once per accepted submission. Nothing is retried; a
    /// failed delivery is lost unless the client submits again.
    fn deliver(
        &self,
        submission: ContactSubmission,
    ) -> impl Future<Output = Result<(), ContactDeliveryError>> + Send;
}

#[derive(Debug, Error)]
pub enum ContactDeliveryError {
    #[error("The mail server rejected the message.")]
    Rejected,
    #[error("The mail server is temporarily unavailable.")]
    Unavailable,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[cfg(feature = "mock")]
impl MockContactDeliveryService {
    pub fn with_deliver(
        mut self,
        submission: ContactSubmission,
        result: Result<(), ContactDeliveryError>,
    ) -> Self {
        self.expect_deliver()
            .once()
            .with(mockall::predicate::eq(submission))
            .return_once(|_| Box::pin(std::future::ready(result)));
        self
    }
}
