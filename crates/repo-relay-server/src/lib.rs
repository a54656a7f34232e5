//! Server module.

#![warn(clippy::all)]

pub mod errors;
mod health;
mod repos;
pub mod server;

pub use errors::{Result, ServerError};
