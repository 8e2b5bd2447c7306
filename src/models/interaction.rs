use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::interaction::{
    Interaction as DomainInteraction, InteractionKind, NewInteraction as DomainNewInteraction,
};
use crate::domain::types::{CustomerId, InteractionId, TypeConstraintError};

/// Wire model for [`crate::domain::interaction::Interaction`].
#[derive(Debug, Clone, Deserialize)]
pub struct Interaction {
    pub id: i32,
    pub customer: i32,
    pub interaction_type: String,
    pub interaction_date: DateTime<Utc>,
    pub notes: Option<String>,
    #[serde(default)]
    pub time_ago: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Body sent when recording a new interaction under
/// `/customers/{id}/interactions/`. The customer id travels in the path.
#[derive(Debug, Clone, Serialize)]
pub struct NewInteraction {
    pub interaction_type: String,
    pub interaction_date: DateTime<Utc>,
    pub notes: Option<String>,
}

impl TryFrom<Interaction> for DomainInteraction {
    type Error = TypeConstraintError;

    fn try_from(interaction: Interaction) -> Result<Self, Self::Error> {
        Ok(Self {
            id: InteractionId::new(interaction.id)?,
            customer_id: CustomerId::new(interaction.customer)?,
            kind: InteractionKind::from(interaction.interaction_type),
            notes: interaction.notes,
            interaction_date: interaction.interaction_date.naive_utc(),
            time_ago: interaction.time_ago,
            created_at: interaction.created_at.naive_utc(),
        })
    }
}

impl From<&DomainNewInteraction> for NewInteraction {
    fn from(interaction: &DomainNewInteraction) -> Self {
        Self {
            interaction_type: interaction.kind.to_string(),
            interaction_date: interaction.interaction_date.and_utc(),
            notes: interaction.notes.clone(),
        }
    }
}
