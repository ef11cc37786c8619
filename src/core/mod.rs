//! Core components of the `ifx-rs` client.
//!
//! This module contains the foundational building blocks of the library, including:
//! - The main [`IfxClient`] and its builder.
//! - The primary [`IfxError`] type.
//! - Internal SOAP envelope rendering and XML response navigation.

/// The main client (`IfxClient`), builder, and configuration.
pub mod client;
/// The primary error type (`IfxError`) for the crate.
pub mod error;

pub(crate) mod net;
pub(crate) mod soap;
pub(crate) mod xml;

// convenient re-exports so most code can just `use crate::core::IfxClient`
pub use client::{IfxClient, IfxClientBuilder};
pub use error::IfxError;
