//! The data form widget.
//!
//! This crate provides:
//!
//! - **Scope selector**: The single-choice scope picker state
//! - **Load controller**: The fetch lifecycle and loaded-records state
//! - **Rendering projection**: A pure view of the widget state

pub mod controller;
pub mod error;
pub mod load_id;
pub mod notify;
pub mod projection;
pub mod selector;

pub use controller::{DataForm, FormState, LoadOutcome};
pub use error::{GENERIC_FAILURE_MESSAGE, LoadError, SelectError};
pub use load_id::LoadId;
pub use notify::Notifier;
pub use projection::{Field, RecordCard, RecordLayout, Rendering, project};
pub use selector::{ScopeOption, ScopeSelector};
