use serde::Deserialize;

use crate::domain::sales_rep::SalesRep as DomainSalesRep;
use crate::domain::types::{SalesRepId, TypeConstraintError};

/// Wire model for [`crate::domain::sales_rep::SalesRep`].
///
/// The backend leaves `first_name` and `last_name` as empty strings when the
/// account has no real name on file.
#[derive(Debug, Clone, Deserialize)]
pub struct User {
    pub id: i32,
    pub username: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
}

impl TryFrom<User> for DomainSalesRep {
    type Error = TypeConstraintError;

    fn try_from(user: User) -> Result<Self, Self::Error> {
        Ok(Self {
            id: SalesRepId::new(user.id)?,
            username: user.username,
            first_name: user
                .first_name
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            last_name: user
                .last_name
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
        })
    }
}
