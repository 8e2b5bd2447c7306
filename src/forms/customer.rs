use chrono::NaiveDate;
use serde::Deserialize;
use validator::Validate;

use crate::domain::customer::{Customer, NewCustomer, UpdateCustomer};
use crate::domain::types::{CompanyId, SalesRepId, TypeConstraintError};

#[derive(Debug, Clone, Default, Deserialize, Validate)]
/// Form data for creating or editing a customer.
///
/// Mirrors the fields of the customer form widget: the foreign keys are raw
/// select values where the empty string means "no selection".
pub struct CustomerForm {
    #[validate(length(min = 1, message = "First name is required"))]
    pub first_name: String,
    #[validate(length(min = 1, message = "Last name is required"))]
    pub last_name: String,
    #[validate(email(message = "Invalid email address"))]
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub date_of_birth: Option<NaiveDate>,
    /// Raw company select value.
    #[serde(default)]
    pub company_id: String,
    /// Raw sales representative select value.
    #[serde(default)]
    pub sales_rep_id: String,
}

impl CustomerForm {
    /// Trims text inputs and drops empty optional values so validation sees
    /// the same data the backend will.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        self.first_name = self.first_name.trim().to_string();
        self.last_name = self.last_name.trim().to_string();
        self.email = self
            .email
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());
        self.phone_number = self.phone_number.trim().to_string();
        self.address = self.address.trim().to_string();
        self.company_id = self.company_id.trim().to_string();
        self.sales_rep_id = self.sales_rep_id.trim().to_string();
        self
    }
}

/// Parses a select value into an optional numeric id.
fn parse_reference(raw: &str) -> Result<Option<i32>, TypeConstraintError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    raw.parse::<i32>()
        .map(Some)
        .map_err(|_| TypeConstraintError::InvalidReference(raw.to_string()))
}

impl TryFrom<&CustomerForm> for NewCustomer {
    type Error = TypeConstraintError;

    fn try_from(form: &CustomerForm) -> Result<Self, Self::Error> {
        Ok(NewCustomer::new(
            form.first_name.clone(),
            form.last_name.clone(),
            form.email.clone(),
            Some(form.phone_number.clone()),
            Some(form.address.clone()),
            form.date_of_birth,
            parse_reference(&form.company_id)?
                .map(CompanyId::new)
                .transpose()?,
            parse_reference(&form.sales_rep_id)?
                .map(SalesRepId::new)
                .transpose()?,
        ))
    }
}

impl TryFrom<&CustomerForm> for UpdateCustomer {
    type Error = TypeConstraintError;

    fn try_from(form: &CustomerForm) -> Result<Self, Self::Error> {
        Ok(UpdateCustomer::new(
            form.first_name.clone(),
            form.last_name.clone(),
            form.email.clone(),
            Some(form.phone_number.clone()),
            Some(form.address.clone()),
            form.date_of_birth,
            parse_reference(&form.company_id)?
                .map(CompanyId::new)
                .transpose()?,
            parse_reference(&form.sales_rep_id)?
                .map(SalesRepId::new)
                .transpose()?,
        ))
    }
}

impl From<&Customer> for CustomerForm {
    /// Prefills the form from an existing record for edit mode.
    fn from(customer: &Customer) -> Self {
        Self {
            first_name: customer.first_name.clone(),
            last_name: customer.last_name.clone(),
            email: customer.email.clone(),
            phone_number: customer.phone_number.clone().unwrap_or_default(),
            address: customer.address.clone().unwrap_or_default(),
            date_of_birth: customer.date_of_birth,
            company_id: customer
                .company
                .as_ref()
                .map(|c| c.id.to_string())
                .unwrap_or_default(),
            sales_rep_id: customer
                .sales_rep_id
                .map(|id| id.to_string())
                .unwrap_or_default(),
        }
    }
}
