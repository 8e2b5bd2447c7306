//! Client-side core of the CRM frontend.
//!
//! The crate is organized in layers: [`domain`] holds the entities and value
//! objects, [`models`] the wire payloads exchanged with the backend API,
//! [`repository`] the async data-access traits and their REST implementation,
//! and [`services`] the controllers that drive listing, form, and detail
//! screens. Rendering is left to the embedding UI; controllers expose plain
//! view structs instead.

pub mod domain;
pub mod error_conversions;
pub mod forms;
pub mod models;
pub mod pagination;
pub mod repository;
pub mod services;
