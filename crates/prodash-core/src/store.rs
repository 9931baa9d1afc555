//! Demo store: the context plus revisioned change notification.

use std::fmt;

use serde::Serialize;
use tracing::warn;

use crate::context::{DemoContext, DemoSnapshot};
use crate::error::DemoResult;
use crate::model::{DemoChanges, DemoState, Scenario, Version};
use crate::theme::ThemeMode;

/// Handle returned by [`DemoStore::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Notification delivered after every effective mutation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DemoEvent {
    /// Store revision after the mutation.
    pub revision: u64,
    /// Fields that changed.
    pub changes: DemoChanges,
    /// State after the mutation.
    pub snapshot: DemoSnapshot,
}

type Listener = Box<dyn FnMut(&DemoEvent)>;

/// Single writer for demo state outside the browser store.
pub struct DemoStore {
    context: DemoContext,
    revision: u64,
    next_subscription: u64,
    listeners: Vec<(SubscriptionId, Listener)>,
}

impl DemoStore {
    /// Wrap an existing context.
    #[must_use]
    pub fn new(context: DemoContext) -> Self {
        Self {
            context,
            revision: 0,
            next_subscription: 0,
            listeners: Vec::new(),
        }
    }

    /// Read-only access to the context.
    #[must_use]
    pub const fn context(&self) -> &DemoContext {
        &self.context
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> &DemoState {
        self.context.state()
    }

    /// Snapshot of the current context.
    #[must_use]
    pub fn snapshot(&self) -> DemoSnapshot {
        self.context.snapshot()
    }

    /// Number of effective mutations so far.
    #[must_use]
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    /// Register a listener called after every effective mutation.
    pub fn subscribe(&mut self, listener: impl FnMut(&DemoEvent) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Drop a listener. Returns whether it was registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    /// See [`DemoContext::set_client_id`].
    ///
    /// # Errors
    /// Propagates [`crate::DemoError::InvalidTenant`].
    pub fn set_client_id(&mut self, value: &str) -> DemoResult<DemoChanges> {
        let changes = self
            .context
            .set_client_id(value)
            .inspect_err(|err| warn!(error = %err, "rejected tenant change"))?;
        Ok(self.publish(changes))
    }

    /// See [`DemoContext::set_role`].
    ///
    /// # Errors
    /// Propagates [`crate::DemoError::InvalidRole`].
    pub fn set_role(&mut self, value: &str) -> DemoResult<DemoChanges> {
        let changes = self
            .context
            .set_role(value)
            .inspect_err(|err| warn!(error = %err, "rejected role change"))?;
        Ok(self.publish(changes))
    }

    /// See [`DemoContext::set_theme_mode`].
    pub fn set_theme_mode(&mut self, mode: ThemeMode) -> DemoChanges {
        let changes = self.context.set_theme_mode(mode);
        self.publish(changes)
    }

    /// See [`DemoContext::toggle_theme_mode`].
    pub fn toggle_theme_mode(&mut self) -> DemoChanges {
        let changes = self.context.toggle_theme_mode();
        self.publish(changes)
    }

    /// See [`DemoContext::set_scenario`].
    pub fn set_scenario(&mut self, scenario: Scenario) -> DemoChanges {
        let changes = self.context.set_scenario(scenario);
        self.publish(changes)
    }

    /// Parse and apply a scenario string.
    ///
    /// # Errors
    /// Returns [`crate::DemoError::InvalidScenario`] for unknown values.
    pub fn set_scenario_str(&mut self, value: &str) -> DemoResult<DemoChanges> {
        let scenario = value
            .parse::<Scenario>()
            .inspect_err(|err| warn!(error = %err, "rejected scenario change"))?;
        Ok(self.set_scenario(scenario))
    }

    /// See [`DemoContext::set_version`].
    pub fn set_version(&mut self, version: Version) -> DemoChanges {
        let changes = self.context.set_version(version);
        self.publish(changes)
    }

    /// Parse and apply a version string.
    ///
    /// # Errors
    /// Returns [`crate::DemoError::InvalidVersion`] for unknown values.
    pub fn set_version_str(&mut self, value: &str) -> DemoResult<DemoChanges> {
        let version = value
            .parse::<Version>()
            .inspect_err(|err| warn!(error = %err, "rejected version change"))?;
        Ok(self.set_version(version))
    }

    /// See [`DemoContext::reset_to_default`].
    pub fn reset_to_default(&mut self) -> DemoChanges {
        let changes = self.context.reset_to_default();
        self.publish(changes)
    }

    /// See [`DemoContext::save_current_instance`]. Saving never changes state,
    /// so listeners are not notified.
    pub fn save_current_instance(&mut self) -> bool {
        self.context.save_current_instance()
    }

    /// See [`DemoContext::go_to_instance`].
    ///
    /// # Errors
    /// Propagates [`crate::DemoError::InstanceOutOfRange`].
    pub fn go_to_instance(&mut self, index: usize) -> DemoResult<DemoChanges> {
        let changes = self
            .context
            .go_to_instance(index)
            .inspect_err(|err| warn!(error = %err, "rejected saved instance"))?;
        Ok(self.publish(changes))
    }

    /// See [`DemoContext::replace_state`].
    ///
    /// # Errors
    /// Propagates [`crate::DemoError::InvalidTenant`].
    pub fn replace_state(&mut self, next: DemoState) -> DemoResult<DemoChanges> {
        let changes = self.context.replace_state(next)?;
        Ok(self.publish(changes))
    }

    fn publish(&mut self, changes: DemoChanges) -> DemoChanges {
        if changes.is_empty() {
            return changes;
        }
        self.revision += 1;
        let event = DemoEvent {
            revision: self.revision,
            changes,
            snapshot: self.context.snapshot(),
        };
        for (_, listener) in &mut self.listeners {
            listener(&event);
        }
        changes
    }
}

impl Default for DemoStore {
    fn default() -> Self {
        Self::new(DemoContext::builtin())
    }
}

impl fmt::Debug for DemoStore {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("DemoStore")
            .field("context", &self.context)
            .field("revision", &self.revision)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}
