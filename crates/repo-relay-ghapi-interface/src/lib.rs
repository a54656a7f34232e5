//! Upstream API interface crate.
//!
//! Contains the `ApiService` abstraction used to communicate with the
//! repository-hosting API, its wire types and its error taxonomy.

#![warn(clippy::all)]

mod errors;
mod exchange;
mod interface;
pub mod types;

pub use errors::{ApiError, Result};
pub use exchange::{ApiExchange, RepositoryLookup};
#[cfg(feature = "testkit")]
pub use interface::MockApiService;
pub use interface::ApiService;
