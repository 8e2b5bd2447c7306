//! Controller backing the customer detail page and its interaction history.

use validator::Validate;

use crate::domain::customer::Customer;
use crate::domain::interaction::Interaction;
use crate::domain::types::{CustomerId, InteractionId};
use crate::forms::interaction::InteractionForm;
use crate::repository::{CustomerReader, CustomerWriter, InteractionReader, InteractionWriter};
use crate::services::{
    Notification, NotificationSender, ServiceError, ServiceResult, flatten_form_errors, notify,
};

/// What a pending delete confirmation refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteTarget {
    Customer,
    Interaction(InteractionId),
}

/// Drives the detail view for a single customer.
///
/// Destructive actions are two-step: `request_delete` records the target and
/// the view renders an inline confirmation, then either `confirm_delete` or
/// `cancel_delete` resolves it. A confirmed customer delete emits
/// [`Notification::CustomerDeleted`] so the embedding UI navigates away.
pub struct CustomerDetailController<R> {
    repo: R,
    notifications: NotificationSender,
    customer_id: CustomerId,
    customer: Option<Customer>,
    interactions: Vec<Interaction>,
    pending_delete: Option<DeleteTarget>,
}

impl<R> CustomerDetailController<R>
where
    R: CustomerReader + CustomerWriter + InteractionReader + InteractionWriter,
{
    pub fn new(repo: R, customer_id: CustomerId, notifications: NotificationSender) -> Self {
        Self {
            repo,
            notifications,
            customer_id,
            customer: None,
            interactions: Vec::new(),
            pending_delete: None,
        }
    }

    pub fn customer(&self) -> Option<&Customer> {
        self.customer.as_ref()
    }

    pub fn interactions(&self) -> &[Interaction] {
        &self.interactions
    }

    pub fn pending_delete(&self) -> Option<DeleteTarget> {
        self.pending_delete
    }

    /// Fetches the customer and its interaction history.
    pub async fn load(&mut self) -> ServiceResult<()> {
        let customer = self
            .repo
            .get_customer_by_id(self.customer_id)
            .await
            .map_err(|err| {
                log::error!("Failed to load customer {}: {err}", self.customer_id);
                err
            })?
            .ok_or(ServiceError::NotFound)?;

        let interactions = self
            .repo
            .list_interactions(self.customer_id)
            .await
            .map_err(|err| {
                log::error!(
                    "Failed to load interactions for customer {}: {err}",
                    self.customer_id
                );
                err
            })?;

        self.customer = Some(customer);
        self.interactions = interactions;
        Ok(())
    }

    /// Validates and records a new interaction, appending it to the local
    /// history without refetching.
    pub async fn add_interaction(&mut self, form: InteractionForm) -> ServiceResult<Interaction> {
        form.validate()
            .map_err(|errors| ServiceError::Form(flatten_form_errors(&errors)))?;

        let new_interaction = form.into_domain(self.customer_id);
        let interaction = self
            .repo
            .create_interaction(&new_interaction)
            .await
            .map_err(|err| {
                log::error!(
                    "Failed to record interaction for customer {}: {err}",
                    self.customer_id
                );
                err
            })?;

        notify(
            &self.notifications,
            Notification::InteractionCreated {
                customer_id: self.customer_id,
                interaction_id: interaction.id,
            },
        );

        self.interactions.push(interaction.clone());
        Ok(interaction)
    }

    /// Marks a delete as awaiting confirmation. A second request replaces the
    /// previous target.
    pub fn request_delete(&mut self, target: DeleteTarget) {
        self.pending_delete = Some(target);
    }

    /// Drops the pending confirmation without deleting anything.
    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Executes the pending delete.
    ///
    /// The pending state is cleared whether the request succeeds or fails, so
    /// a failed delete returns the view to its resting state and the user can
    /// ask again. Returns the confirmed target, or `None` when nothing was
    /// pending.
    pub async fn confirm_delete(&mut self) -> ServiceResult<Option<DeleteTarget>> {
        let Some(target) = self.pending_delete.take() else {
            return Ok(None);
        };

        match target {
            DeleteTarget::Interaction(interaction_id) => {
                self.repo
                    .delete_interaction(self.customer_id, interaction_id)
                    .await
                    .map_err(|err| {
                        log::error!("Failed to delete interaction {interaction_id}: {err}");
                        err
                    })?;

                self.interactions
                    .retain(|interaction| interaction.id != interaction_id);
                notify(
                    &self.notifications,
                    Notification::InteractionDeleted {
                        customer_id: self.customer_id,
                        interaction_id,
                    },
                );
            }
            DeleteTarget::Customer => {
                self.repo
                    .delete_customer(self.customer_id)
                    .await
                    .map_err(|err| {
                        log::error!("Failed to delete customer {}: {err}", self.customer_id);
                        err
                    })?;

                notify(
                    &self.notifications,
                    Notification::CustomerDeleted(self.customer_id),
                );
            }
        }

        Ok(Some(target))
    }
}
