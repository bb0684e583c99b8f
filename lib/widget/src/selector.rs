//! Scope selection state.
//!
//! Selecting a scope only updates the held selection. It never issues a
//! request.

use crate::error::SelectError;
use data_form_core::{Integration, Scope};
use std::sync::{Arc, PoisonError, RwLock};

/// A scope as presented in the picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScopeOption {
    /// Label shown to the user.
    pub label: &'static str,
    /// Value sent to the backend.
    pub value: &'static str,
}

impl From<Scope> for ScopeOption {
    fn from(scope: Scope) -> Self {
        Self {
            label: scope.label(),
            value: scope.query_value(),
        }
    }
}

/// Single-choice scope selection for one widget instance.
///
/// Clones share the same selection cell.
#[derive(Debug, Clone)]
pub struct ScopeSelector {
    available: &'static [Scope],
    selected: Arc<RwLock<Option<Scope>>>,
}

impl ScopeSelector {
    /// Creates a selector over the given scopes, with nothing selected.
    #[must_use]
    pub fn new(available: &'static [Scope]) -> Self {
        Self {
            available,
            selected: Arc::new(RwLock::new(None)),
        }
    }

    /// Creates a selector for an integration's scopes.
    ///
    /// Unknown integrations get an empty selector.
    #[must_use]
    pub fn for_integration(integration: Option<Integration>) -> Self {
        Self::new(integration.as_ref().map(Integration::scopes).unwrap_or(&[]))
    }

    /// Returns true if records stay hidden until a scope is selected.
    #[must_use]
    pub fn is_gated(&self) -> bool {
        !self.available.is_empty()
    }

    /// Returns the scopes on offer.
    #[must_use]
    pub fn available(&self) -> &'static [Scope] {
        self.available
    }

    /// Returns the scopes on offer as label/value pairs.
    #[must_use]
    pub fn options(&self) -> Vec<ScopeOption> {
        self.available.iter().copied().map(ScopeOption::from).collect()
    }

    /// Returns the current selection.
    #[must_use]
    pub fn selected(&self) -> Option<Scope> {
        *self.selected.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Replaces the selection.
    ///
    /// # Errors
    ///
    /// Returns an error, leaving the selection unchanged, if the scope is
    /// not on offer.
    pub fn select(&self, scope: Scope) -> Result<(), SelectError> {
        if !self.available.contains(&scope) {
            return Err(SelectError::NotOffered { scope });
        }
        *self.selected.write().unwrap_or_else(PoisonError::into_inner) = Some(scope);
        Ok(())
    }

    /// Selects a scope by its label or backend value.
    ///
    /// # Errors
    ///
    /// Returns an error if the key names no scope or names one that is not
    /// on offer.
    pub fn select_by_key(&self, key: &str) -> Result<Scope, SelectError> {
        let scope = Scope::from_label(key)
            .or_else(|| Scope::from_query_value(key))
            .ok_or_else(|| SelectError::UnknownScope {
                key: key.to_string(),
            })?;
        self.select(scope)?;
        Ok(scope)
    }

    /// Resets the selection to unset.
    pub fn unselect(&self) {
        *self.selected.write().unwrap_or_else(PoisonError::into_inner) = None;
    }
}
