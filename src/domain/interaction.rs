use std::fmt::Display;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{CustomerId, InteractionId};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Interaction {
    pub id: InteractionId,
    pub customer_id: CustomerId,
    pub kind: InteractionKind,
    pub notes: Option<String>,
    pub interaction_date: NaiveDateTime,
    /// Human-readable recency label computed by the backend ("2 days ago").
    pub time_ago: Option<String>,
    pub created_at: NaiveDateTime,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum InteractionKind {
    Call,
    Email,
    Sms,
    Facebook,
    WhatsApp,
    Meeting,
    Other(String),
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewInteraction {
    pub customer_id: CustomerId,
    pub kind: InteractionKind,
    pub notes: Option<String>,
    pub interaction_date: NaiveDateTime,
}

impl NewInteraction {
    #[must_use]
    pub fn new(
        customer_id: CustomerId,
        kind: InteractionKind,
        notes: Option<String>,
        interaction_date: NaiveDateTime,
    ) -> Self {
        Self {
            customer_id,
            kind,
            notes: notes
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            interaction_date,
        }
    }
}

impl Display for InteractionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InteractionKind::Call => write!(f, "Call"),
            InteractionKind::Email => write!(f, "Email"),
            InteractionKind::Sms => write!(f, "SMS"),
            InteractionKind::Facebook => write!(f, "Facebook"),
            InteractionKind::WhatsApp => write!(f, "WhatsApp"),
            InteractionKind::Meeting => write!(f, "Meeting"),
            InteractionKind::Other(s) => write!(f, "{s}"),
        }
    }
}

impl From<&str> for InteractionKind {
    fn from(s: &str) -> Self {
        match s {
            "Call" => InteractionKind::Call,
            "Email" => InteractionKind::Email,
            "SMS" => InteractionKind::Sms,
            "Facebook" => InteractionKind::Facebook,
            "WhatsApp" => InteractionKind::WhatsApp,
            "Meeting" => InteractionKind::Meeting,
            _ => InteractionKind::Other(s.to_string()),
        }
    }
}

impl From<String> for InteractionKind {
    fn from(s: String) -> Self {
        s.as_str().into()
    }
}
