use chrono::NaiveDateTime;
use serde::Deserialize;
use validator::Validate;

use crate::domain::interaction::{InteractionKind, NewInteraction};
use crate::domain::types::CustomerId;

#[derive(Debug, Clone, Deserialize, Validate)]
/// Form data for recording an interaction with a customer.
pub struct InteractionForm {
    /// Interaction kind as the select widget submits it ("Call", "SMS", ...).
    #[validate(length(min = 1, message = "Interaction type is required"))]
    pub interaction_type: String,
    pub interaction_date: NaiveDateTime,
    #[serde(default)]
    pub notes: String,
}

impl InteractionForm {
    /// Binds the form to a customer, producing the domain value to persist.
    #[must_use]
    pub fn into_domain(self, customer_id: CustomerId) -> NewInteraction {
        NewInteraction::new(
            customer_id,
            InteractionKind::from(self.interaction_type.as_str()),
            Some(self.notes),
            self.interaction_date,
        )
    }
}
