use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};

use crate::domain::company::Company;
use crate::domain::customer::{Customer, NewCustomer, UpdateCustomer};
use crate::domain::interaction::{Interaction, NewInteraction};
use crate::domain::sales_rep::SalesRep;
use crate::domain::types::{BirthdayFilter, CustomerId, InteractionId};
use crate::models::config::ApiConfig;
use crate::models::{MaybePaged, PageEnvelope};
use crate::repository::errors::{RepositoryError, RepositoryResult, flatten_validation};
use crate::repository::{
    CompanyReader, CustomerListQuery, CustomerReader, CustomerWriter, InteractionReader,
    InteractionWriter, SalesRepReader,
};

/// REST implementation of the repository traits.
///
/// All requests go through a single [`reqwest::Client`] configured with the
/// timeout from [`ApiConfig`]; cloning is cheap and shares the connection
/// pool.
#[derive(Clone)]
pub struct RestApi {
    client: Client,
    base_url: String,
}

impl RestApi {
    pub fn new(config: &ApiConfig) -> RepositoryResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Turns a non-success response into the matching repository error.
    async fn check(response: Response) -> RepositoryResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        match status {
            StatusCode::NOT_FOUND => Err(RepositoryError::NotFound),
            StatusCode::BAD_REQUEST => {
                let body: serde_json::Value = response.json().await.unwrap_or_default();
                Err(RepositoryError::Validation(flatten_validation(&body)))
            }
            _ => {
                let message = response.text().await.unwrap_or_default();
                Err(RepositoryError::Server {
                    status: status.as_u16(),
                    message,
                })
            }
        }
    }
}

/// Renders the query string for the customer list endpoint.
///
/// `page`, `search`, and `ordering` are always sent; the birthday filter only
/// when one is active, since the backend treats an absent parameter and an
/// empty one the same way.
fn list_params(query: &CustomerListQuery) -> Vec<(&'static str, String)> {
    let mut params = vec![
        ("page", query.page.to_string()),
        ("search", query.search.clone()),
        ("ordering", query.ordering()),
    ];

    if query.birthday != BirthdayFilter::Any {
        params.push(("birthday_filter", query.birthday.as_str().to_string()));
    }

    params
}

#[async_trait]
impl CustomerReader for RestApi {
    async fn get_customer_by_id(&self, id: CustomerId) -> RepositoryResult<Option<Customer>> {
        let response = self
            .client
            .get(self.url(&format!("/customers/{id}/")))
            .send()
            .await?;

        match Self::check(response).await {
            Ok(response) => {
                let payload: crate::models::customer::Customer = response.json().await?;
                Ok(Some(payload.try_into()?))
            }
            Err(RepositoryError::NotFound) => Ok(None),
            Err(err) => Err(err),
        }
    }

    async fn list_customers(
        &self,
        query: CustomerListQuery,
    ) -> RepositoryResult<(usize, Vec<Customer>)> {
        let response = self
            .client
            .get(self.url("/customers/"))
            .query(&list_params(&query))
            .send()
            .await?;

        let envelope: PageEnvelope<crate::models::customer::Customer> =
            Self::check(response).await?.json().await?;

        let customers = envelope
            .results
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((envelope.count, customers))
    }
}

#[async_trait]
impl CustomerWriter for RestApi {
    async fn create_customer(&self, new_customer: &NewCustomer) -> RepositoryResult<Customer> {
        let body = crate::models::customer::CustomerWrite::from(new_customer);
        let response = self
            .client
            .post(self.url("/customers/create/"))
            .json(&body)
            .send()
            .await?;

        let payload: crate::models::customer::Customer =
            Self::check(response).await?.json().await?;
        Ok(payload.try_into()?)
    }

    async fn update_customer(
        &self,
        customer_id: CustomerId,
        updates: &UpdateCustomer,
    ) -> RepositoryResult<Customer> {
        let body = crate::models::customer::CustomerWrite::from(updates);
        let response = self
            .client
            .put(self.url(&format!("/customers/{customer_id}/")))
            .json(&body)
            .send()
            .await?;

        let payload: crate::models::customer::Customer =
            Self::check(response).await?.json().await?;
        Ok(payload.try_into()?)
    }

    async fn delete_customer(&self, customer_id: CustomerId) -> RepositoryResult<()> {
        let response = self
            .client
            .delete(self.url(&format!("/customers/{customer_id}/")))
            .send()
            .await?;

        Self::check(response).await?;
        Ok(())
    }
}

#[async_trait]
impl CompanyReader for RestApi {
    async fn list_companies(&self) -> RepositoryResult<Vec<Company>> {
        let response = self.client.get(self.url("/companies/")).send().await?;

        let payload: MaybePaged<crate::models::company::Company> =
            Self::check(response).await?.json().await?;

        Ok(payload
            .into_items()
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<_>, _>>()?)
    }
}

#[async_trait]
impl SalesRepReader for RestApi {
    async fn list_sales_reps(&self) -> RepositoryResult<Vec<SalesRep>> {
        let response = self.client.get(self.url("/users/")).send().await?;

        let payload: MaybePaged<crate::models::sales_rep::User> =
            Self::check(response).await?.json().await?;

        Ok(payload
            .into_items()
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<_>, _>>()?)
    }
}

#[async_trait]
impl InteractionReader for RestApi {
    async fn list_interactions(
        &self,
        customer_id: CustomerId,
    ) -> RepositoryResult<Vec<Interaction>> {
        let response = self
            .client
            .get(self.url(&format!("/customers/{customer_id}/interactions/")))
            .send()
            .await?;

        let payload: MaybePaged<crate::models::interaction::Interaction> =
            Self::check(response).await?.json().await?;

        Ok(payload
            .into_items()
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<_>, _>>()?)
    }
}

#[async_trait]
impl InteractionWriter for RestApi {
    async fn create_interaction(
        &self,
        interaction: &NewInteraction,
    ) -> RepositoryResult<Interaction> {
        let body = crate::models::interaction::NewInteraction::from(interaction);
        let response = self
            .client
            .post(self.url(&format!(
                "/customers/{}/interactions/",
                interaction.customer_id
            )))
            .json(&body)
            .send()
            .await?;

        let payload: crate::models::interaction::Interaction =
            Self::check(response).await?.json().await?;
        Ok(payload.try_into()?)
    }

    async fn delete_interaction(
        &self,
        customer_id: CustomerId,
        interaction_id: InteractionId,
    ) -> RepositoryResult<()> {
        let response = self
            .client
            .delete(self.url(&format!(
                "/customers/{customer_id}/interactions/{interaction_id}/"
            )))
            .send()
            .await?;

        Self::check(response).await?;
        Ok(())
    }
}
