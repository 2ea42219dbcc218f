//! # Docker Hub Core
//!
//! Wire types for the Docker Hub v2 API.
//!
//! This crate provides:
//! - Model types for repositories, tags, webhooks, and credentials
//! - The pagination envelope shared by every list endpoint
//! - Parsing and validation of `namespace/name` repository references
//!
//! ## Example
//!
//! ```rust
//! use dockerhub_core::RepoRef;
//!
//! let repo: RepoRef = "nginx".parse().unwrap();
//! assert_eq!(repo.namespace(), "library");
//! assert_eq!(repo.to_string(), "library/nginx");
//! ```

pub mod page;
pub mod reference;
pub mod types;

// Re-exports for convenience
pub use page::{Page, Paged};
pub use reference::{RefError, RepoRef};
pub use types::*;
