use serde::{Deserialize, Serialize};

use crate::domain::types::SalesRepId;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SalesRep {
    pub id: SalesRepId,
    pub username: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl SalesRep {
    /// Display name used in assignment dropdowns and customer rows.
    /// Falls back to the username when no real name is on file.
    #[must_use]
    pub fn full_name(&self) -> String {
        let joined = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .filter(|s| !s.trim().is_empty())
            .collect::<Vec<_>>()
            .join(" ");

        if joined.is_empty() {
            self.username.clone()
        } else {
            joined
        }
    }
}
