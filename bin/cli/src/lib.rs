//! Terminal host for the data-form widget.
//!
//! Hosts one widget instance: configuration names the integration and
//! supplies credentials, line commands drive scope selection and loads,
//! and failure alerts are printed to standard error.

pub mod command;
pub mod config;
pub mod notifier;
pub mod render;
pub mod session;
