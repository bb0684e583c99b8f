//! Items backend abstraction.
//!
//! The widget talks to the backend through the `ItemsBackend` trait so the
//! load lifecycle can be exercised without a live server.

use crate::credential::Credentials;
use crate::error::FetchError;
use crate::record::Record;
use async_trait::async_trait;
use data_form_core::{Integration, Scope};

/// A single request for an integration's items.
///
/// All parameters are captured when the load is triggered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemsRequest {
    /// The integration whose endpoint is called.
    pub integration: Integration,
    /// Credentials forwarded verbatim.
    pub credentials: Credentials,
    /// Selected scope, for scope-gated integrations.
    pub scope: Option<Scope>,
}

impl ItemsRequest {
    /// Creates an unscoped request.
    #[must_use]
    pub fn new(integration: Integration, credentials: Credentials) -> Self {
        Self {
            integration,
            credentials,
            scope: None,
        }
    }

    /// Sets the scope.
    #[must_use]
    pub fn with_scope(mut self, scope: Scope) -> Self {
        self.scope = Some(scope);
        self
    }

    /// Returns the path of the items endpoint, relative to the backend base.
    #[must_use]
    pub fn path(&self) -> String {
        let endpoint = self.integration.endpoint();
        format!("/integrations/{endpoint}/get_{endpoint}_items")
    }

    /// Returns the query parameters in the order they are sent.
    #[must_use]
    pub fn query(&self) -> Vec<(&'static str, &str)> {
        let mut query = vec![("credentials", self.credentials.expose())];
        if let Some(scope) = self.scope {
            query.push(("scope", scope.query_value()));
        }
        query
    }
}

/// Trait for backends that serve integration items.
#[async_trait]
pub trait ItemsBackend: Send + Sync {
    /// Fetches the items for a request.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the backend rejects it, or the
    /// response is not a valid record list.
    async fn fetch_items(&self, request: &ItemsRequest) -> Result<Vec<Record>, FetchError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_is_parameterized_by_endpoint() {
        let credentials = Credentials::new("token");
        for integration in Integration::ALL {
            let request = ItemsRequest::new(*integration, credentials.clone());
            let endpoint = integration.endpoint();
            assert_eq!(
                request.path(),
                format!("/integrations/{endpoint}/get_{endpoint}_items")
            );
        }
        assert_eq!(
            ItemsRequest::new(Integration::HubSpot, credentials).path(),
            "/integrations/hubspot/get_hubspot_items"
        );
    }

    #[test]
    fn scope_is_only_sent_when_selected() {
        let request = ItemsRequest::new(Integration::HubSpot, Credentials::new("token"));
        assert_eq!(request.query(), vec![("credentials", "token")]);

        let scoped = request.with_scope(Scope::Deals);
        assert_eq!(
            scoped.query(),
            vec![("credentials", "token"), ("scope", "crm/v3/objects/deals")]
        );
    }
}
