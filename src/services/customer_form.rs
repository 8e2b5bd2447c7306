//! Services backing the customer create/edit form.

use validator::Validate;

use crate::domain::company::Company;
use crate::domain::customer::{Customer, NewCustomer, UpdateCustomer};
use crate::domain::sales_rep::SalesRep;
use crate::domain::types::CustomerId;
use crate::forms::customer::CustomerForm;
use crate::repository::{CompanyReader, CustomerReader, CustomerWriter, SalesRepReader};
use crate::services::{
    Notification, NotificationSender, ServiceError, ServiceResult, flatten_form_errors, notify,
};

/// Option lists the form's select widgets are populated from.
#[derive(Debug, Clone)]
pub struct ReferenceData {
    pub companies: Vec<Company>,
    pub sales_reps: Vec<SalesRep>,
}

/// Whether a submit creates a new customer or updates an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitMode {
    Create,
    Update(CustomerId),
}

/// Loads the companies and sales representatives for the select widgets.
pub async fn load_reference_data<R>(repo: &R) -> ServiceResult<ReferenceData>
where
    R: CompanyReader + SalesRepReader + ?Sized,
{
    let companies = repo.list_companies().await.map_err(|err| {
        log::error!("Failed to load companies: {err}");
        err
    })?;

    let sales_reps = repo.list_sales_reps().await.map_err(|err| {
        log::error!("Failed to load sales representatives: {err}");
        err
    })?;

    Ok(ReferenceData {
        companies,
        sales_reps,
    })
}

/// Loads an existing customer into a submittable draft for edit mode.
pub async fn load_customer_draft<R>(repo: &R, id: CustomerId) -> ServiceResult<CustomerForm>
where
    R: CustomerReader + ?Sized,
{
    let customer = repo
        .get_customer_by_id(id)
        .await
        .map_err(|err| {
            log::error!("Failed to load customer {id}: {err}");
            err
        })?
        .ok_or(ServiceError::NotFound)?;

    Ok(CustomerForm::from(&customer))
}

/// Validates and submits the form, emitting [`Notification::CustomerSaved`]
/// on success.
pub async fn save_customer<R>(
    repo: &R,
    form: CustomerForm,
    mode: SubmitMode,
    notifications: &NotificationSender,
) -> ServiceResult<Customer>
where
    R: CustomerWriter + ?Sized,
{
    let form = form.normalized();
    form.validate()
        .map_err(|errors| ServiceError::Form(flatten_form_errors(&errors)))?;

    let customer = match mode {
        SubmitMode::Create => {
            let new_customer = NewCustomer::try_from(&form)?;
            repo.create_customer(&new_customer).await.map_err(|err| {
                log::error!("Failed to create customer: {err}");
                err
            })?
        }
        SubmitMode::Update(id) => {
            let updates = UpdateCustomer::try_from(&form)?;
            repo.update_customer(id, &updates).await.map_err(|err| {
                log::error!("Failed to update customer {id}: {err}");
                err
            })?
        }
    };

    notify(notifications, Notification::CustomerSaved(customer.id));
    Ok(customer)
}
