//! Demo context: the single owner of demo state and its derived theme tokens.
//!
//! # Design
//! - Mutations validate before touching state, so a failed call leaves everything unchanged.
//! - Every mutation reports the fields it changed; setting a field to its current value is a no-op.
//! - Tokens and the tenant display name are cached and refreshed only when tenant or theme change.
//! - Saved instances are a bounded, duplicate-free list of states the presenter can jump back to.

use std::rc::Rc;

use serde::Serialize;

use crate::error::{DemoError, DemoResult};
use crate::model::{DemoChanges, DemoDefaults, DemoState, Role, Scenario, Version};
use crate::tenant::{Tenant, TenantCatalog};
use crate::theme::{ThemeMode, ThemeTokens};

/// Immutable view handed to consumers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DemoSnapshot {
    /// Current state.
    pub state: DemoState,
    /// Display name of the active tenant.
    pub client_name: String,
    /// Resolved theme tokens.
    pub tokens: ThemeTokens,
}

/// Most saved instances kept; saving past it drops the oldest.
pub const MAX_SAVED_INSTANCES: usize = 20;

/// Owner of the current demo state.
#[derive(Clone, Debug, PartialEq)]
pub struct DemoContext {
    catalog: Rc<TenantCatalog>,
    defaults: DemoDefaults,
    state: DemoState,
    client_name: String,
    tokens: ThemeTokens,
    saved: Vec<DemoState>,
    current_instance: Option<usize>,
}

impl DemoContext {
    /// Create a context seeded with `defaults`.
    ///
    /// # Errors
    /// Returns [`DemoError::InvalidTenant`] when the default tenant is not in the catalog.
    pub fn new(catalog: Rc<TenantCatalog>, defaults: DemoDefaults) -> DemoResult<Self> {
        let tenant = catalog
            .get(&defaults.tenant)
            .ok_or_else(|| DemoError::InvalidTenant {
                value: defaults.tenant.to_string(),
            })?;
        let state = defaults.state();
        let client_name = tenant.name.clone();
        let tokens = ThemeTokens::derive(&tenant.branding, state.theme_mode);
        Ok(Self {
            catalog,
            defaults,
            state,
            client_name,
            tokens,
            saved: Vec::new(),
            current_instance: None,
        })
    }

    /// Context over the built-in catalog and defaults.
    #[must_use]
    pub fn builtin() -> Self {
        let catalog = TenantCatalog::builtin();
        let defaults = DemoDefaults::builtin();
        let state = defaults.state();
        let (client_name, tokens) = catalog
            .get(&state.client_id)
            .map(|tenant| {
                (
                    tenant.name.clone(),
                    ThemeTokens::derive(&tenant.branding, state.theme_mode),
                )
            })
            .unwrap_or_default();
        Self {
            catalog: Rc::new(catalog),
            defaults,
            state,
            client_name,
            tokens,
            saved: Vec::new(),
            current_instance: None,
        }
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> &DemoState {
        &self.state
    }

    /// Current theme tokens.
    #[must_use]
    pub const fn tokens(&self) -> &ThemeTokens {
        &self.tokens
    }

    /// Display name of the active tenant.
    #[must_use]
    pub fn client_name(&self) -> &str {
        &self.client_name
    }

    /// Tenant catalog in use.
    #[must_use]
    pub fn catalog(&self) -> &TenantCatalog {
        &self.catalog
    }

    /// Defaults in use.
    #[must_use]
    pub const fn defaults(&self) -> &DemoDefaults {
        &self.defaults
    }

    /// Active tenant record.
    #[must_use]
    pub fn tenant(&self) -> Option<&Tenant> {
        self.catalog.get(&self.state.client_id)
    }

    /// Owned snapshot of state, tenant name and tokens.
    #[must_use]
    pub fn snapshot(&self) -> DemoSnapshot {
        DemoSnapshot {
            state: self.state.clone(),
            client_name: self.client_name.clone(),
            tokens: self.tokens.clone(),
        }
    }

    /// Switch tenant by id or alias.
    ///
    /// # Errors
    /// Returns [`DemoError::InvalidTenant`] when the value is not in the catalog.
    pub fn set_client_id(&mut self, value: &str) -> DemoResult<DemoChanges> {
        let client_id = self
            .catalog
            .resolve(value)
            .map(|tenant| tenant.id.clone())
            .ok_or_else(|| DemoError::InvalidTenant {
                value: value.to_string(),
            })?;
        let next = DemoState {
            client_id,
            ..self.state.clone()
        };
        Ok(self.commit(next))
    }

    /// Switch role from its string form.
    ///
    /// # Errors
    /// Returns [`DemoError::InvalidRole`] when the value is not a known role.
    pub fn set_role(&mut self, value: &str) -> DemoResult<DemoChanges> {
        let role = value.parse::<Role>()?;
        let next = DemoState {
            role,
            ..self.state.clone()
        };
        Ok(self.commit(next))
    }

    /// Switch theme mode.
    pub fn set_theme_mode(&mut self, theme_mode: ThemeMode) -> DemoChanges {
        let next = DemoState {
            theme_mode,
            ..self.state.clone()
        };
        self.commit(next)
    }

    /// Flip between light and dark.
    pub fn toggle_theme_mode(&mut self) -> DemoChanges {
        self.set_theme_mode(self.state.theme_mode.toggled())
    }

    /// Switch scenario.
    pub fn set_scenario(&mut self, scenario: Scenario) -> DemoChanges {
        let next = DemoState {
            scenario,
            ..self.state.clone()
        };
        self.commit(next)
    }

    /// Switch the previewed version.
    pub fn set_version(&mut self, version: Version) -> DemoChanges {
        let next = DemoState {
            version,
            ..self.state.clone()
        };
        self.commit(next)
    }

    /// Return to the configured defaults and forget saved instances.
    pub fn reset_to_default(&mut self) -> DemoChanges {
        self.saved.clear();
        self.current_instance = None;
        self.commit(self.defaults.state())
    }

    /// States saved with [`DemoContext::save_current_instance`], oldest first.
    #[must_use]
    pub fn saved_instances(&self) -> &[DemoState] {
        &self.saved
    }

    /// Position of the most recently saved or visited instance.
    #[must_use]
    pub const fn current_instance(&self) -> Option<usize> {
        self.current_instance
    }

    /// Save the current state. Returns `false` when an identical state is
    /// already saved. A full list drops its oldest entry.
    pub fn save_current_instance(&mut self) -> bool {
        if self.saved.contains(&self.state) {
            return false;
        }
        if self.saved.len() == MAX_SAVED_INSTANCES {
            self.saved.remove(0);
        }
        self.saved.push(self.state.clone());
        self.current_instance = Some(self.saved.len() - 1);
        true
    }

    /// Restore a saved instance.
    ///
    /// # Errors
    /// Returns [`DemoError::InstanceOutOfRange`] when `index` is past the end of the list.
    pub fn go_to_instance(&mut self, index: usize) -> DemoResult<DemoChanges> {
        let next = self
            .saved
            .get(index)
            .cloned()
            .ok_or(DemoError::InstanceOutOfRange {
                index,
                len: self.saved.len(),
            })?;
        self.current_instance = Some(index);
        Ok(self.commit(next))
    }

    /// Replace the whole state at once (used by URL reconciliation).
    ///
    /// # Errors
    /// Returns [`DemoError::InvalidTenant`] when the tenant is not in the catalog.
    pub fn replace_state(&mut self, next: DemoState) -> DemoResult<DemoChanges> {
        if !self.catalog.contains(&next.client_id) {
            return Err(DemoError::InvalidTenant {
                value: next.client_id.to_string(),
            });
        }
        Ok(self.commit(next))
    }

    fn commit(&mut self, next: DemoState) -> DemoChanges {
        let changes = DemoChanges::between(&self.state, &next);
        if changes.is_empty() {
            return changes;
        }
        self.state = next;
        if changes.affects_theme()
            && let Some(tenant) = self.catalog.get(&self.state.client_id)
        {
            self.tokens = ThemeTokens::derive(&tenant.branding, self.state.theme_mode);
            self.client_name.clone_from(&tenant.name);
        }
        changes
    }
}

impl Default for DemoContext {
    fn default() -> Self {
        Self::builtin()
    }
}
