//! Typed Rust client for the IDT Express DID numbering HTTP API.
//!
//! The crate is split into a domain layer of strong types, a transport layer for
//! wire-format details (paths, query strings, JSON bodies), and a small client
//! layer that dispatches requests and normalizes failures into [`IdtExpressError`].
//!
//! ```rust,no_run
//! use idtexpress::{CountryIso, Credentials, DidGroupsQuery, IdtExpressClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), idtexpress::IdtExpressError> {
//!     let client = IdtExpressClient::new(Credentials::new("key", "secret")?);
//!     let query = DidGroupsQuery::new(CountryIso::new("US")?).region_code("US-CA");
//!     let groups = client.get_did_groups(&query).await?;
//!     for group in groups.did_groups {
//!         println!("{} {}", group.id, group.name);
//!     }
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{
    Credentials, DEFAULT_BASE_URL, IdtExpressClient, IdtExpressClientBuilder, IdtExpressError,
};
pub use domain::{
    ApiKey, ApiSecret, BrowseAvailableNumbersResponse, CountryCoverage, CountryCoverageResponse,
    CountryIso, CreateOrder, DeleteNumberResponse, DidGroup, DidGroupsQuery, DidGroupsResponse,
    DidNumber, ErrorCode, ErrorDetail, ErrorEnvelope, KnownErrorCode, ListNumbers, ListOrders,
    Meta, Number, NumberResponse, Order, OrderId, OrderItem, OrderItemStatus, OrderResponse,
    OrderedNumber, OrdersResponse, Region, RegionsResponse, ValidationError,
};
pub use reqwest::Method;
