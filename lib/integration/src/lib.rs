//! Backend integration layer for data-form.
//!
//! This crate provides:
//!
//! - **Credentials**: Opaque, redacted pass-through authorization values
//! - **Records**: The item model returned by the backend
//! - **Items backend**: The fetch seam, with an HTTP implementation

pub mod backend;
pub mod credential;
pub mod error;
pub mod http;
pub mod record;

pub use backend::{ItemsBackend, ItemsRequest};
pub use credential::Credentials;
pub use error::{ClientError, FetchError, extract_detail};
pub use http::{DEFAULT_BASE_URL, HttpBackendConfig, HttpItemsBackend};
pub use record::{Record, RecordProperties};
