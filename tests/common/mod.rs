//! In-memory stand-in for the backend REST API, shared by integration tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{Datelike, NaiveDate, NaiveDateTime, Utc};

use crm_client::domain::company::Company;
use crm_client::domain::customer::{Customer, NewCustomer, UpdateCustomer};
use crm_client::domain::interaction::{Interaction, NewInteraction};
use crm_client::domain::sales_rep::SalesRep;
use crm_client::domain::types::{
    BirthdayFilter, CompanyId, CustomerId, InteractionId, SalesRepId, SortDirection, SortField,
};
use crm_client::pagination::PAGE_SIZE;
use crm_client::repository::errors::{RepositoryError, RepositoryResult};
use crm_client::repository::{
    CompanyReader, CustomerListQuery, CustomerReader, CustomerWriter, InteractionReader,
    InteractionWriter, SalesRepReader,
};

#[derive(Default)]
struct State {
    customers: Vec<Customer>,
    companies: Vec<Company>,
    sales_reps: Vec<SalesRep>,
    interactions: Vec<Interaction>,
    next_customer_id: i32,
    next_company_id: i32,
    next_sales_rep_id: i32,
    next_interaction_id: i32,
    fail_next_listing: bool,
}

/// Implements the repository traits against in-memory collections, mirroring
/// the backend's listing semantics (search, ordering, page size of ten).
#[derive(Clone, Default)]
pub struct FakeApi {
    state: Arc<Mutex<State>>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed_company(&self, name: &str) -> Company {
        let mut state = self.state.lock().expect("lock poisoned");
        state.next_company_id += 1;
        let company = Company {
            id: CompanyId::new(state.next_company_id).expect("valid id"),
            name: name.to_string(),
            address: None,
            phone: None,
            email: None,
            created_at: Utc::now().naive_utc(),
            updated_at: Utc::now().naive_utc(),
        };
        state.companies.push(company.clone());
        company
    }

    pub fn seed_sales_rep(&self, username: &str) -> SalesRep {
        let mut state = self.state.lock().expect("lock poisoned");
        state.next_sales_rep_id += 1;
        let rep = SalesRep {
            id: SalesRepId::new(state.next_sales_rep_id).expect("valid id"),
            username: username.to_string(),
            first_name: None,
            last_name: None,
        };
        state.sales_reps.push(rep.clone());
        rep
    }

    pub fn seed_customer(
        &self,
        first_name: &str,
        last_name: &str,
        company: Option<&Company>,
        date_of_birth: Option<NaiveDate>,
    ) -> Customer {
        let mut state = self.state.lock().expect("lock poisoned");
        state.next_customer_id += 1;
        let customer = Customer {
            id: CustomerId::new(state.next_customer_id).expect("valid id"),
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            email: None,
            phone_number: None,
            address: None,
            date_of_birth,
            company: company.cloned(),
            sales_rep_id: None,
            sales_rep_name: None,
            latest_interaction: None,
            created_at: Utc::now().naive_utc(),
            updated_at: Utc::now().naive_utc(),
        };
        state.customers.push(customer.clone());
        customer
    }

    pub fn seed_interaction(
        &self,
        customer_id: CustomerId,
        kind: &str,
        interaction_date: NaiveDateTime,
    ) -> Interaction {
        let mut state = self.state.lock().expect("lock poisoned");
        state.next_interaction_id += 1;
        let interaction = Interaction {
            id: InteractionId::new(state.next_interaction_id).expect("valid id"),
            customer_id,
            kind: kind.into(),
            notes: None,
            interaction_date,
            time_ago: None,
            created_at: Utc::now().naive_utc(),
        };
        state.interactions.push(interaction.clone());
        interaction
    }

    /// Makes the next `list_customers` call fail with a network error.
    pub fn fail_next_listing(&self) {
        self.state.lock().expect("lock poisoned").fail_next_listing = true;
    }

    pub fn customer_count(&self) -> usize {
        self.state.lock().expect("lock poisoned").customers.len()
    }
}

fn matches_birthday(date_of_birth: Option<NaiveDate>, filter: BirthdayFilter) -> bool {
    let Some(birthday) = date_of_birth else {
        return filter == BirthdayFilter::Any;
    };
    let today = Utc::now().date_naive();
    match filter {
        BirthdayFilter::Any => true,
        BirthdayFilter::Today => {
            birthday.month() == today.month() && birthday.day() == today.day()
        }
        BirthdayFilter::ThisWeek => {
            NaiveDate::from_ymd_opt(today.year(), birthday.month(), birthday.day())
                .is_some_and(|this_year| this_year.iso_week() == today.iso_week())
        }
        BirthdayFilter::ThisMonth => birthday.month() == today.month(),
    }
}

fn matches_search(customer: &Customer, search: &str) -> bool {
    if search.is_empty() {
        return true;
    }
    let needle = search.to_lowercase();
    customer.full_name().to_lowercase().contains(&needle)
        || customer
            .email
            .as_deref()
            .is_some_and(|email| email.to_lowercase().contains(&needle))
}

#[async_trait]
impl CustomerReader for FakeApi {
    async fn get_customer_by_id(&self, id: CustomerId) -> RepositoryResult<Option<Customer>> {
        let state = self.state.lock().expect("lock poisoned");
        Ok(state
            .customers
            .iter()
            .find(|customer| customer.id == id)
            .cloned())
    }

    async fn list_customers(
        &self,
        query: CustomerListQuery,
    ) -> RepositoryResult<(usize, Vec<Customer>)> {
        let mut state = self.state.lock().expect("lock poisoned");
        if state.fail_next_listing {
            state.fail_next_listing = false;
            return Err(RepositoryError::Network("connection refused".to_string()));
        }

        let latest_dates: HashMap<CustomerId, NaiveDateTime> =
            state
                .interactions
                .iter()
                .fold(HashMap::new(), |mut dates, interaction| {
                    dates
                        .entry(interaction.customer_id)
                        .and_modify(|date| *date = (*date).max(interaction.interaction_date))
                        .or_insert(interaction.interaction_date);
                    dates
                });

        let mut rows: Vec<Customer> = state
            .customers
            .iter()
            .filter(|customer| matches_search(customer, &query.search))
            .filter(|customer| matches_birthday(customer.date_of_birth, query.birthday))
            .cloned()
            .collect();

        rows.sort_by(|a, b| match query.sort_field {
            SortField::FullName => a
                .full_name()
                .to_lowercase()
                .cmp(&b.full_name().to_lowercase()),
            SortField::CompanyName => {
                let name = |customer: &Customer| {
                    customer
                        .company
                        .as_ref()
                        .map(|company| company.name.to_lowercase())
                        .unwrap_or_default()
                };
                name(a).cmp(&name(b))
            }
            SortField::DateOfBirth => a.date_of_birth.cmp(&b.date_of_birth),
            SortField::LastInteractionDate => latest_dates
                .get(&a.id)
                .cmp(&latest_dates.get(&b.id)),
        });
        if query.sort_direction == SortDirection::Desc {
            rows.reverse();
        }

        let total = rows.len();
        let items = rows
            .into_iter()
            .skip(query.page.saturating_sub(1) * PAGE_SIZE)
            .take(PAGE_SIZE)
            .collect();
        Ok((total, items))
    }
}

#[async_trait]
impl CustomerWriter for FakeApi {
    async fn create_customer(&self, new_customer: &NewCustomer) -> RepositoryResult<Customer> {
        let mut state = self.state.lock().expect("lock poisoned");

        if let Some(email) = new_customer.email.as_deref()
            && state
                .customers
                .iter()
                .any(|customer| customer.email.as_deref() == Some(email))
        {
            return Err(RepositoryError::Validation(
                "customer with this email already exists.".to_string(),
            ));
        }

        let company = match new_customer.company_id {
            Some(company_id) => Some(
                state
                    .companies
                    .iter()
                    .find(|company| company.id == company_id)
                    .cloned()
                    .ok_or_else(|| {
                        RepositoryError::Validation("Invalid company.".to_string())
                    })?,
            ),
            None => None,
        };
        let sales_rep_name = new_customer.sales_rep_id.and_then(|rep_id| {
            state
                .sales_reps
                .iter()
                .find(|rep| rep.id == rep_id)
                .map(SalesRep::full_name)
        });

        state.next_customer_id += 1;
        let customer = Customer {
            id: CustomerId::new(state.next_customer_id).expect("valid id"),
            first_name: new_customer.first_name.clone(),
            last_name: new_customer.last_name.clone(),
            email: new_customer.email.clone(),
            phone_number: new_customer.phone_number.clone(),
            address: new_customer.address.clone(),
            date_of_birth: new_customer.date_of_birth,
            company,
            sales_rep_id: new_customer.sales_rep_id,
            sales_rep_name,
            latest_interaction: None,
            created_at: Utc::now().naive_utc(),
            updated_at: Utc::now().naive_utc(),
        };
        state.customers.push(customer.clone());
        Ok(customer)
    }

    async fn update_customer(
        &self,
        customer_id: CustomerId,
        updates: &UpdateCustomer,
    ) -> RepositoryResult<Customer> {
        let mut state = self.state.lock().expect("lock poisoned");

        let company = match updates.company_id {
            Some(company_id) => Some(
                state
                    .companies
                    .iter()
                    .find(|company| company.id == company_id)
                    .cloned()
                    .ok_or_else(|| {
                        RepositoryError::Validation("Invalid company.".to_string())
                    })?,
            ),
            None => None,
        };

        let customer = state
            .customers
            .iter_mut()
            .find(|customer| customer.id == customer_id)
            .ok_or(RepositoryError::NotFound)?;

        customer.first_name = updates.first_name.clone();
        customer.last_name = updates.last_name.clone();
        customer.email = updates.email.clone();
        customer.phone_number = updates.phone_number.clone();
        customer.address = updates.address.clone();
        customer.date_of_birth = updates.date_of_birth;
        customer.company = company;
        customer.sales_rep_id = updates.sales_rep_id;
        customer.updated_at = Utc::now().naive_utc();
        Ok(customer.clone())
    }

    async fn delete_customer(&self, customer_id: CustomerId) -> RepositoryResult<()> {
        let mut state = self.state.lock().expect("lock poisoned");
        let before = state.customers.len();
        state.customers.retain(|customer| customer.id != customer_id);
        if state.customers.len() == before {
            return Err(RepositoryError::NotFound);
        }
        state
            .interactions
            .retain(|interaction| interaction.customer_id != customer_id);
        Ok(())
    }
}

#[async_trait]
impl CompanyReader for FakeApi {
    async fn list_companies(&self) -> RepositoryResult<Vec<Company>> {
        Ok(self.state.lock().expect("lock poisoned").companies.clone())
    }
}

#[async_trait]
impl SalesRepReader for FakeApi {
    async fn list_sales_reps(&self) -> RepositoryResult<Vec<SalesRep>> {
        Ok(self.state.lock().expect("lock poisoned").sales_reps.clone())
    }
}

#[async_trait]
impl InteractionReader for FakeApi {
    async fn list_interactions(
        &self,
        customer_id: CustomerId,
    ) -> RepositoryResult<Vec<Interaction>> {
        let state = self.state.lock().expect("lock poisoned");
        let mut interactions: Vec<Interaction> = state
            .interactions
            .iter()
            .filter(|interaction| interaction.customer_id == customer_id)
            .cloned()
            .collect();
        interactions.sort_by(|a, b| b.interaction_date.cmp(&a.interaction_date));
        Ok(interactions)
    }
}

#[async_trait]
impl InteractionWriter for FakeApi {
    async fn create_interaction(
        &self,
        interaction: &NewInteraction,
    ) -> RepositoryResult<Interaction> {
        let mut state = self.state.lock().expect("lock poisoned");
        if !state
            .customers
            .iter()
            .any(|customer| customer.id == interaction.customer_id)
        {
            return Err(RepositoryError::NotFound);
        }

        state.next_interaction_id += 1;
        let interaction = Interaction {
            id: InteractionId::new(state.next_interaction_id).expect("valid id"),
            customer_id: interaction.customer_id,
            kind: interaction.kind.clone(),
            notes: interaction.notes.clone(),
            interaction_date: interaction.interaction_date,
            time_ago: None,
            created_at: Utc::now().naive_utc(),
        };
        state.interactions.push(interaction.clone());
        Ok(interaction)
    }

    async fn delete_interaction(
        &self,
        customer_id: CustomerId,
        interaction_id: InteractionId,
    ) -> RepositoryResult<()> {
        let mut state = self.state.lock().expect("lock poisoned");
        let before = state.interactions.len();
        state.interactions.retain(|interaction| {
            !(interaction.id == interaction_id && interaction.customer_id == customer_id)
        });
        if state.interactions.len() == before {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
