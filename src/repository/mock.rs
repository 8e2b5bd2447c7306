//! Mock repository implementations for isolating controllers in tests.

use async_trait::async_trait;
use mockall::mock;

use crate::domain::company::Company;
use crate::domain::customer::{Customer, NewCustomer, UpdateCustomer};
use crate::domain::interaction::{Interaction, NewInteraction};
use crate::domain::sales_rep::SalesRep;
use crate::domain::types::{CustomerId, InteractionId};
use crate::repository::errors::RepositoryResult;
use crate::repository::{
    CompanyReader, CustomerListQuery, CustomerReader, CustomerWriter, InteractionReader,
    InteractionWriter, SalesRepReader,
};

mock! {
    pub Repository {}

    #[async_trait]
    impl CustomerReader for Repository {
        async fn get_customer_by_id(&self, id: CustomerId) -> RepositoryResult<Option<Customer>>;
        async fn list_customers(
            &self,
            query: CustomerListQuery,
        ) -> RepositoryResult<(usize, Vec<Customer>)>;
    }

    #[async_trait]
    impl CustomerWriter for Repository {
        async fn create_customer(&self, new_customer: &NewCustomer) -> RepositoryResult<Customer>;
        async fn update_customer(
            &self,
            customer_id: CustomerId,
            updates: &UpdateCustomer,
        ) -> RepositoryResult<Customer>;
        async fn delete_customer(&self, customer_id: CustomerId) -> RepositoryResult<()>;
    }

    #[async_trait]
    impl CompanyReader for Repository {
        async fn list_companies(&self) -> RepositoryResult<Vec<Company>>;
    }

    #[async_trait]
    impl SalesRepReader for Repository {
        async fn list_sales_reps(&self) -> RepositoryResult<Vec<SalesRep>>;
    }

    #[async_trait]
    impl InteractionReader for Repository {
        async fn list_interactions(
            &self,
            customer_id: CustomerId,
        ) -> RepositoryResult<Vec<Interaction>>;
    }

    #[async_trait]
    impl InteractionWriter for Repository {
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
}
