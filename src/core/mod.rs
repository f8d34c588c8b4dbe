//! Core components of the `ystockquote` client.
//!
//! This module contains the foundational building blocks of the library:
//! - The main [`YqClient`] and its builder.
//! - The primary [`YqError`] type.
//! - Typed conversions for raw quote strings.
//! - The raw request helpers shared by the quote and history modules.

/// The main client (`YqClient`), builder, and configuration.
pub mod client;
/// Explicit typed parsing of raw string values.
pub mod conversions;
/// The primary error type (`YqError`) for the crate.
pub mod error;
/// Raw request helpers.
pub mod net;

#[cfg(feature = "test-mode")]
pub(crate) mod fixtures;

pub use client::{YqClient, YqClientBuilder};
pub use error::YqError;
