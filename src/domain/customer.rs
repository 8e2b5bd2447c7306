use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::domain::company::Company;
use crate::domain::types::{CompanyId, CustomerId, SalesRepId};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Customer {
    pub id: CustomerId,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub address: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub company: Option<Company>,
    pub sales_rep_id: Option<SalesRepId>,
    pub sales_rep_name: Option<String>,
    pub latest_interaction: Option<LatestInteraction>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Summary of the most recent interaction, as rendered in list rows.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct LatestInteraction {
    pub kind: String,
    pub time_ago: String,
}

impl Customer {
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewCustomer {
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub address: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub company_id: Option<CompanyId>,
    pub sales_rep_id: Option<SalesRepId>,
}

impl NewCustomer {
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        first_name: String,
        last_name: String,
        email: Option<String>,
        phone_number: Option<String>,
        address: Option<String>,
        date_of_birth: Option<NaiveDate>,
        company_id: Option<CompanyId>,
        sales_rep_id: Option<SalesRepId>,
    ) -> Self {
        Self {
            first_name: first_name.trim().to_string(),
            last_name: last_name.trim().to_string(),
            email: email
                .map(|s| s.to_lowercase().trim().to_string())
                .filter(|s| !s.is_empty()),
            phone_number: phone_number
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            address: address
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            date_of_birth,
            company_id,
            sales_rep_id,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct UpdateCustomer {
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub address: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub company_id: Option<CompanyId>,
    pub sales_rep_id: Option<SalesRepId>,
}

impl UpdateCustomer {
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        first_name: String,
        last_name: String,
        email: Option<String>,
        phone_number: Option<String>,
        address: Option<String>,
        date_of_birth: Option<NaiveDate>,
        company_id: Option<CompanyId>,
        sales_rep_id: Option<SalesRepId>,
    ) -> Self {
        Self {
            first_name: first_name.trim().to_string(),
            last_name: last_name.trim().to_string(),
            email: email
                .map(|s| s.to_lowercase().trim().to_string())
                .filter(|s| !s.is_empty()),
            phone_number: phone_number
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            address: address
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            date_of_birth,
            company_id,
            sales_rep_id,
        }
    }
}
