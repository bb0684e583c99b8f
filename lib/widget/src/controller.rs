//! Load controller: owns the loaded records and drives the fetch.
//!
//! State machine, per widget instance:
//!
//! ```text
//! Empty  --load ok-->  Loaded
//! Loaded --load ok-->  Loaded (records replaced)
//! any    --clear-->    Empty
//! any    --load err--> unchanged
//! ```
//!
//! Loads are not serialized and cannot be cancelled. When two loads
//! overlap, whichever resolves last overwrites the records, and a load that
//! resolves after a `clear` repopulates them.

use crate::error::LoadError;
use crate::load_id::LoadId;
use crate::notify::Notifier;
use crate::projection::{self, RecordLayout, Rendering};
use crate::selector::ScopeSelector;
use data_form_core::{Integration, Scope, UnknownIntegration};
use data_form_integration::{Credentials, ItemsBackend, ItemsRequest, Record};
use std::future::Future;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::{debug, info, warn};

/// Whether the widget currently holds records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    /// No records: nothing loaded yet, cleared, or the last load was empty.
    Empty,
    /// Records from the most recent successful load.
    Loaded,
}

/// The result of one Load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The records were replaced.
    Loaded { load_id: LoadId, count: usize },
    /// The records were left untouched and the user was notified.
    Failed { load_id: LoadId, message: String },
}

impl LoadOutcome {
    /// Returns true if the records were replaced.
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded { .. })
    }

    /// Returns the id of the load that produced this outcome.
    #[must_use]
    pub fn load_id(&self) -> LoadId {
        match self {
            Self::Loaded { load_id, .. } | Self::Failed { load_id, .. } => *load_id,
        }
    }
}

/// A data form widget bound to one integration and one set of credentials.
///
/// Clones are handles to the same widget: they share the selected scope
/// and the loaded records.
pub struct DataForm<B, N> {
    integration_name: Arc<str>,
    integration: Option<Integration>,
    credentials: Credentials,
    selector: ScopeSelector,
    records: Arc<RwLock<Vec<Record>>>,
    backend: Arc<B>,
    notifier: Arc<N>,
}

impl<B, N> Clone for DataForm<B, N> {
    fn clone(&self) -> Self {
        Self {
            integration_name: Arc::clone(&self.integration_name),
            integration: self.integration,
            credentials: self.credentials.clone(),
            selector: self.selector.clone(),
            records: Arc::clone(&self.records),
            backend: Arc::clone(&self.backend),
            notifier: Arc::clone(&self.notifier),
        }
    }
}

impl<B, N> DataForm<B, N>
where
    B: ItemsBackend + 'static,
    N: Notifier + 'static,
{
    /// Creates a widget for the integration with the given display name.
    ///
    /// A name outside the known set is accepted here; every Load on such a
    /// widget fails without sending a request.
    pub fn new(
        integration_name: impl Into<String>,
        credentials: Credentials,
        backend: Arc<B>,
        notifier: Arc<N>,
    ) -> Self {
        let integration_name: String = integration_name.into();
        let integration = Integration::from_display_name(&integration_name);
        if integration.is_none() {
            warn!(integration = %integration_name, "Widget created for unknown integration");
        }

        Self {
            integration_name: integration_name.into(),
            integration,
            credentials,
            selector: ScopeSelector::for_integration(integration),
            records: Arc::new(RwLock::new(Vec::new())),
            backend,
            notifier,
        }
    }

    /// Returns the integration name as supplied by the host.
    #[must_use]
    pub fn integration_name(&self) -> &str {
        &self.integration_name
    }

    /// Returns the resolved integration, if the name is known.
    #[must_use]
    pub fn integration(&self) -> Option<Integration> {
        self.integration
    }

    /// Returns the scope selector.
    #[must_use]
    pub fn selector(&self) -> &ScopeSelector {
        &self.selector
    }

    /// Returns a snapshot of the loaded records.
    #[must_use]
    pub fn records(&self) -> Vec<Record> {
        self.read_records().clone()
    }

    /// Returns the current state.
    #[must_use]
    pub fn state(&self) -> FormState {
        if self.read_records().is_empty() {
            FormState::Empty
        } else {
            FormState::Loaded
        }
    }

    /// Empties the loaded records.
    ///
    /// Loads already in flight are not affected.
    pub fn clear(&self) {
        let mut records = self.records.write().unwrap_or_else(PoisonError::into_inner);
        let dropped = records.len();
        records.clear();
        debug!(integration = %self.integration_name, dropped, "Cleared loaded records");
    }

    /// Projects the current state for display.
    #[must_use]
    pub fn render(&self, layout: RecordLayout) -> Rendering {
        projection::project(
            self.selector.is_gated(),
            self.selector.selected(),
            &self.read_records(),
            layout,
        )
    }

    /// Builds the request a Load would send right now.
    ///
    /// # Errors
    ///
    /// Returns an error if the integration is unknown, or if it is
    /// scope-gated and no scope is selected.
    pub fn prepare(&self) -> Result<ItemsRequest, LoadError> {
        let integration = self.integration.ok_or_else(|| {
            LoadError::UnknownIntegration(UnknownIntegration {
                name: self.integration_name.to_string(),
            })
        })?;

        let mut request = ItemsRequest::new(integration, self.credentials.clone());
        if self.selector.is_gated() {
            let scope: Scope = self
                .selector
                .selected()
                .ok_or(LoadError::ScopeRequired { integration })?;
            request = request.with_scope(scope);
        }
        Ok(request)
    }

    /// Triggers a Load.
    ///
    /// The endpoint, credentials and scope are captured when this is
    /// called; the returned future performs the request and applies the
    /// outcome. It can be spawned so the caller stays interactive.
    pub fn load(&self) -> impl Future<Output = LoadOutcome> + Send + 'static {
        let load_id = LoadId::new();
        let prepared = self.prepare();
        let form = self.clone();

        async move {
            let request = match prepared {
                Ok(request) => request,
                Err(err) => return form.fail(load_id, err),
            };

            debug!(
                load_id = %load_id,
                integration = %request.integration,
                scope = ?request.scope,
                "Starting load"
            );

            match form.backend.fetch_items(&request).await {
                Ok(records) => {
                    let count = records.len();
                    *form.records.write().unwrap_or_else(PoisonError::into_inner) = records;
                    info!(
                        load_id = %load_id,
                        integration = %request.integration,
                        record_count = count,
                        "Loaded records"
                    );
                    LoadOutcome::Loaded { load_id, count }
                }
                Err(err) => form.fail(load_id, LoadError::Fetch(err)),
            }
        }
    }

    fn fail(&self, load_id: LoadId, error: LoadError) -> LoadOutcome {
        warn!(
            load_id = %load_id,
            integration = %self.integration_name,
            error = %error,
            "Load failed"
        );
        let message = error.user_message();
        self.notifier.notify(&message);
        LoadOutcome::Failed { load_id, message }
    }

    fn read_records(&self) -> std::sync::RwLockReadGuard<'_, Vec<Record>> {
        self.records.read().unwrap_or_else(PoisonError::into_inner)
    }
}
