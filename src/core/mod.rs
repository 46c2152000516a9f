//! Core components of the `stock-watcher` client.
//!
//! This module contains the foundational building blocks of the library, including:
//! - The main [`SwClient`] and its builder.
//! - The primary [`SwError`] type.
//! - YQL query construction, HTML tag stripping and the shared networking helper.

/// The main client (`SwClient`), builder, and configuration.
pub mod client;
pub(crate) mod diag;
/// The primary error type (`SwError`) for the crate.
pub mod error;
/// HTML markup removal applied to scraped and quoted text.
pub mod html;
pub(crate) mod net;
pub(crate) mod yql;

#[cfg(feature = "test-mode")]
pub(crate) mod fixtures;

// convenient re-exports so most code can just `use crate::core::SwClient`
pub use client::{SwClient, SwClientBuilder};
pub use error::SwError;
pub use html::strip_tags;
