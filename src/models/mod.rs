//! Wire models shared across the REST repository.

pub mod company;
pub mod config;
pub mod customer;
pub mod interaction;
pub mod sales_rep;

use serde::Deserialize;

/// Standard paginated envelope returned by list endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct PageEnvelope<T> {
    pub count: usize,
    pub results: Vec<T>,
}

/// Reference-data endpoints answer with either a paginated envelope or a
/// bare array depending on backend configuration. Accept both.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum MaybePaged<T> {
    Paged(PageEnvelope<T>),
    Bare(Vec<T>),
}

impl<T> MaybePaged<T> {
    pub fn into_items(self) -> Vec<T> {
        match self {
            MaybePaged::Paged(envelope) => envelope.results,
            MaybePaged::Bare(items) => items,
        }
    }
}
