//! Shared `Result` alias over `rootcause::Report`.
//!
//! Reports are used where setup can fail, such as building the HTTP
//! client. Load failures stay plain enums so the widget can turn them
//! into user-facing messages.

use rootcause::Report;

/// A Result type alias using rootcause's Report for error handling.
pub type Result<T, C = ()> = std::result::Result<T, Report<C>>;
