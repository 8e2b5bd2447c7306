use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::customer::{
    Customer as DomainCustomer, LatestInteraction as DomainLatestInteraction,
    NewCustomer as DomainNewCustomer, UpdateCustomer as DomainUpdateCustomer,
};
use crate::domain::types::{CustomerId, SalesRepId, TypeConstraintError};
use crate::models::company::Company;
use crate::models::sales_rep::User;

/// Wire model for [`crate::domain::customer::Customer`].
///
/// The backend nests the company object on reads and flattens the sales
/// representative into `_username`/`_full_name` fields; some deployments also
/// nest the full `sales_representative` object, so all three are accepted.
#[derive(Debug, Clone, Deserialize)]
pub struct Customer {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub address: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub company: Option<Company>,
    #[serde(default)]
    pub sales_representative: Option<User>,
    #[serde(default)]
    pub sales_representative_username: Option<String>,
    #[serde(default)]
    pub sales_representative_full_name: Option<String>,
    #[serde(default)]
    pub latest_interaction: Option<LatestInteraction>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Summary block the list endpoint attaches to each customer row.
#[derive(Debug, Clone, Deserialize)]
pub struct LatestInteraction {
    #[serde(rename = "type")]
    pub kind: String,
    pub time_ago: String,
}

/// Body sent when creating or updating a customer. Foreign keys travel as
/// nullable ids; `null` clears the assignment server-side.
#[derive(Debug, Clone, Serialize)]
pub struct CustomerWrite {
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub address: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub company_id: Option<i32>,
    pub sales_representative_id: Option<i32>,
}

impl TryFrom<Customer> for DomainCustomer {
    type Error = TypeConstraintError;

    fn try_from(customer: Customer) -> Result<Self, Self::Error> {
        let sales_rep_id = customer
            .sales_representative
            .as_ref()
            .map(|user| SalesRepId::new(user.id))
            .transpose()?;

        let sales_rep_name = customer
            .sales_representative_full_name
            .clone()
            .filter(|s| !s.trim().is_empty())
            .or_else(|| customer.sales_representative_username.clone())
            .filter(|s| !s.trim().is_empty());

        Ok(Self {
            id: CustomerId::new(customer.id)?,
            first_name: customer.first_name,
            last_name: customer.last_name,
            email: customer.email,
            phone_number: customer.phone_number,
            address: customer.address,
            date_of_birth: customer.date_of_birth,
            company: customer.company.map(TryInto::try_into).transpose()?,
            sales_rep_id,
            sales_rep_name,
            latest_interaction: customer.latest_interaction.map(Into::into),
            created_at: customer.created_at.naive_utc(),
            updated_at: customer.updated_at.naive_utc(),
        })
    }
}

impl From<LatestInteraction> for DomainLatestInteraction {
    fn from(latest: LatestInteraction) -> Self {
        Self {
            kind: latest.kind,
            time_ago: latest.time_ago,
        }
    }
}

impl From<&DomainNewCustomer> for CustomerWrite {
    fn from(customer: &DomainNewCustomer) -> Self {
        Self {
            first_name: customer.first_name.clone(),
            last_name: customer.last_name.clone(),
            email: customer.email.clone(),
            phone_number: customer.phone_number.clone(),
            address: customer.address.clone(),
            date_of_birth: customer.date_of_birth,
            company_id: customer.company_id.map(Into::into),
            sales_representative_id: customer.sales_rep_id.map(Into::into),
        }
    }
}

impl From<&DomainUpdateCustomer> for CustomerWrite {
    fn from(customer: &DomainUpdateCustomer) -> Self {
        Self {
            first_name: customer.first_name.clone(),
            last_name: customer.last_name.clone(),
            email: customer.email.clone(),
            phone_number: customer.phone_number.clone(),
            address: customer.address.clone(),
            date_of_birth: customer.date_of_birth,
            company_id: customer.company_id.map(Into::into),
            sales_representative_id: customer.sales_rep_id.map(Into::into),
        }
    }
}
