use async_trait::async_trait;

use crate::{
    domain::{
        company::Company,
        customer::{Customer, NewCustomer, UpdateCustomer},
        interaction::{Interaction, NewInteraction},
        sales_rep::SalesRep,
        types::{BirthdayFilter, CustomerId, InteractionId, SortDirection, SortField},
    },
    repository::errors::RepositoryResult,
};

pub mod errors;
#[cfg(feature = "test-mocks")]
pub mod mock;
pub mod rest;

/// Filter, ordering, and pagination state for the customer list endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomerListQuery {
    pub page: usize,
    pub search: String,
    pub sort_field: SortField,
    pub sort_direction: SortDirection,
    pub birthday: BirthdayFilter,
}

impl CustomerListQuery {
    pub fn new() -> Self {
        Self {
            page: 1,
            search: String::new(),
            sort_field: SortField::FullName,
            sort_direction: SortDirection::Asc,
            birthday: BirthdayFilter::Any,
        }
    }

    pub fn page(mut self, page: usize) -> Self {
        self.page = page;
        self
    }

    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn order_by(mut self, field: SortField, direction: SortDirection) -> Self {
        self.sort_field = field;
        self.sort_direction = direction;
        self
    }

    pub fn birthday(mut self, filter: BirthdayFilter) -> Self {
        self.birthday = filter;
        self
    }

    /// Renders the ordering value the backend expects: the wire name of the
    /// sort column, prefixed with `-` for descending order.
    #[must_use]
    pub fn ordering(&self) -> String {
        match self.sort_direction {
            SortDirection::Asc => self.sort_field.as_str().to_string(),
            SortDirection::Desc => format!("-{}", self.sort_field.as_str()),
        }
    }
}

impl Default for CustomerListQuery {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
pub trait CustomerReader {
    async fn get_customer_by_id(&self, id: CustomerId) -> RepositoryResult<Option<Customer>>;
    async fn list_customers(
        &self,
        query: CustomerListQuery,
    ) -> RepositoryResult<(usize, Vec<Customer>)>;
}

#[async_trait]
pub trait CustomerWriter {
    async fn create_customer(&self, new_customer: &NewCustomer) -> RepositoryResult<Customer>;
    async fn update_customer(
        &self,
        customer_id: CustomerId,
        updates: &UpdateCustomer,
    ) -> RepositoryResult<Customer>;
    async fn delete_customer(&self, customer_id: CustomerId) -> RepositoryResult<()>;
}

#[async_trait]
pub trait CompanyReader {
    async fn list_companies(&self) -> RepositoryResult<Vec<Company>>;
}

#[async_trait]
pub trait SalesRepReader {
    async fn list_sales_reps(&self) -> RepositoryResult<Vec<SalesRep>>;
}

#[async_trait]
pub trait InteractionReader {
    async fn list_interactions(
        &self,
        customer_id: CustomerId,
    ) -> RepositoryResult<Vec<Interaction>>;
}

#[async_trait]
pub trait InteractionWriter {
    async fn create_interaction(
        &self,
        interaction: &NewInteraction,
    ) -> RepositoryResult<Interaction>;
    async fn delete_interaction(
        &self,
        customer_id: CustomerId,
        interaction_id: InteractionId,
    ) -> RepositoryResult<()>;
}
