pub mod customer_detail;
pub mod customer_form;
pub mod listing;

use thiserror::Error;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::domain::types::{CustomerId, InteractionId};
use crate::repository::errors::RepositoryError;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Entity not found")]
    NotFound,

    #[error("Validation error: {0}")]
    Form(String),

    #[error("Constraint violation: {0}")]
    TypeConstraint(String),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Discrete messages emitted after a successful mutation.
///
/// The embedding UI subscribes to the receiving end and reacts explicitly,
/// typically by calling `refresh()` on the list controller or navigating
/// away after a customer delete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    CustomerSaved(CustomerId),
    CustomerDeleted(CustomerId),
    InteractionCreated {
        customer_id: CustomerId,
        interaction_id: InteractionId,
    },
    InteractionDeleted {
        customer_id: CustomerId,
        interaction_id: InteractionId,
    },
}

pub type NotificationSender = UnboundedSender<Notification>;
pub type NotificationReceiver = UnboundedReceiver<Notification>;

pub fn notification_channel() -> (NotificationSender, NotificationReceiver) {
    mpsc::unbounded_channel()
}

/// Delivers a notification; a dropped receiver is not an error.
pub(crate) fn notify(sender: &NotificationSender, notification: Notification) {
    if sender.send(notification).is_err() {
        log::debug!("Notification receiver dropped");
    }
}

/// Collapses `validator` output into a single user-readable message.
pub(crate) fn flatten_form_errors(errors: &validator::ValidationErrors) -> String {
    let mut messages = Vec::new();
    for (field, field_errors) in errors.field_errors() {
        for error in field_errors {
            match &error.message {
                Some(message) => messages.push(message.to_string()),
                None => messages.push(format!("{field}: {}", error.code)),
            }
        }
    }
    messages.join("; ")
}
