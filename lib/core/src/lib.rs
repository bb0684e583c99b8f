//! Core domain types and utilities for data-form.
//!
//! This crate provides the immutable lookup tables the widget is built on
//! (integrations and their scopes) and the shared error handling alias.

pub mod error;
pub mod integration;
pub mod scope;

pub use error::Result;
pub use integration::{Integration, UnknownIntegration, resolve_endpoint};
pub use scope::Scope;
