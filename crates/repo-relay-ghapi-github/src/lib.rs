//! GitHub API adapter crate.
//!
//! Contains the reqwest-backed implementation of the `ApiService` interface.

#![warn(clippy::all)]

mod errors;
mod github;

pub use errors::GitHubError;
pub use github::GithubApiService;
