//! App-wide yewdux store and its reducers.
//!
//! # Design
//! - The demo context is the single owner of tenant, role, theme, scenario and version,
//!   and of the saved instances the presenter can jump between.
//! - Reducers take `&mut AppStore` so they run inside `Dispatch::reduce_mut`
//!   and in native tests alike.
//! - Rejected mutations leave the demo slice untouched and surface the error
//!   through `ui.last_error`.

use prodash_config::DemoSettings;
use prodash_core::{DemoChanges, DemoContext, DemoResult, ThemeMode};
use yewdux::store::Store;

use crate::preferences::with_theme_preference;

/// Global application store.
#[derive(Clone, Debug, PartialEq, Store, Default)]
pub struct AppStore {
    /// Demo context presented by every page.
    pub demo: DemoContext,
    /// Shell chrome state.
    pub ui: UiSlice,
}

/// Shell chrome state that never reaches the URL.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiSlice {
    /// Whether the demo selector panel is open.
    pub selector_open: bool,
    /// Message from the most recent rejected selection.
    pub last_error: Option<String>,
}

impl AppStore {
    /// Store seeded from settings, with an optional stored theme preference
    /// replacing the default theme.
    #[must_use]
    pub fn seeded(settings: &DemoSettings, theme_preference: Option<ThemeMode>) -> Self {
        let defaults = with_theme_preference(&settings.defaults, theme_preference);
        match DemoContext::new(settings.catalog.clone().into(), defaults) {
            Ok(demo) => Self {
                demo,
                ui: UiSlice::default(),
            },
            Err(err) => Self {
                demo: DemoContext::builtin(),
                ui: UiSlice {
                    selector_open: false,
                    last_error: Some(err.to_string()),
                },
            },
        }
    }
}

/// Switch tenant by id or alias.
pub fn select_client(store: &mut AppStore, value: &str) -> DemoChanges {
    let result = store.demo.set_client_id(value);
    record(&mut store.ui, result)
}

/// Switch role by its URL spelling (case-insensitive).
pub fn select_role(store: &mut AppStore, value: &str) -> DemoChanges {
    let result = store.demo.set_role(value);
    record(&mut store.ui, result)
}

/// Switch theme mode; accepts only `light` or `dark`.
pub fn select_theme(store: &mut AppStore, value: &str) -> DemoChanges {
    let result = value
        .parse::<ThemeMode>()
        .map(|mode| store.demo.set_theme_mode(mode));
    record(&mut store.ui, result)
}

/// Flip between light and dark.
pub fn toggle_theme(store: &mut AppStore) -> DemoChanges {
    store.ui.last_error = None;
    store.demo.toggle_theme_mode()
}

/// Switch scenario by its URL spelling.
pub fn select_scenario(store: &mut AppStore, value: &str) -> DemoChanges {
    let result = value
        .parse()
        .map(|scenario| store.demo.set_scenario(scenario));
    record(&mut store.ui, result)
}

/// Switch the previewed version by its URL spelling.
pub fn select_version(store: &mut AppStore, value: &str) -> DemoChanges {
    let result = value
        .parse()
        .map(|version| store.demo.set_version(version));
    record(&mut store.ui, result)
}

/// Return to the configured defaults and clear saved instances.
pub fn reset_demo(store: &mut AppStore) -> DemoChanges {
    store.ui.last_error = None;
    store.demo.reset_to_default()
}

/// Save the current selection; `false` when it is already saved.
pub fn save_instance(store: &mut AppStore) -> bool {
    store.ui.last_error = None;
    store.demo.save_current_instance()
}

/// Restore a saved selection by position.
pub fn go_to_instance(store: &mut AppStore, index: usize) -> DemoChanges {
    let result = store.demo.go_to_instance(index);
    record(&mut store.ui, result)
}

/// Open or close the demo selector panel.
pub const fn toggle_selector(store: &mut AppStore) {
    store.ui.selector_open = !store.ui.selector_open;
}

/// Clear the last selection error.
pub fn dismiss_error(store: &mut AppStore) {
    store.ui.last_error = None;
}

fn record(ui: &mut UiSlice, result: DemoResult<DemoChanges>) -> DemoChanges {
    match result {
        Ok(changes) => {
            ui.last_error = None;
            changes
        }
        Err(err) => {
            ui.last_error = Some(err.to_string());
            DemoChanges::NONE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prodash_core::{Role, Scenario, Version};

    #[test]
    fn default_store_uses_builtin_context() {
        let store = AppStore::default();
        assert_eq!(store.demo.state().client_id.as_str(), "deacons");
        assert!(!store.ui.selector_open);
        assert!(store.ui.last_error.is_none());
    }

    #[test]
    fn seeded_store_applies_theme_preference() {
        let store = AppStore::seeded(&DemoSettings::builtin(), Some(ThemeMode::Dark));
        assert_eq!(store.demo.state().theme_mode, ThemeMode::Dark);
        assert_eq!(store.demo.tokens().primary_color, "#f87171");
        assert_eq!(store.demo.tokens().background_color, "#f8fafc");

        let store = AppStore::seeded(&DemoSettings::builtin(), None);
        assert_eq!(store.demo.state().theme_mode, ThemeMode::Light);
    }

    #[test]
    fn client_selection_updates_tokens_and_clears_errors() {
        let mut store = AppStore::default();
        store.ui.last_error = Some("stale".to_string());
        let changes = select_client(&mut store, "cvs");
        assert!(changes.tenant);
        assert_eq!(store.demo.client_name(), "CVS");
        assert_eq!(store.demo.tokens().primary_color, "#c42032");
        assert!(store.ui.last_error.is_none());
    }

    #[test]
    fn rejected_selection_records_error_and_keeps_state() {
        let mut store = AppStore::default();
        let before = store.demo.state().clone();

        assert!(select_client(&mut store, "acme").is_empty());
        assert_eq!(store.demo.state(), &before);
        assert!(
            store
                .ui
                .last_error
                .as_deref()
                .is_some_and(|message| message.contains("acme"))
        );

        assert!(select_theme(&mut store, "sepia").is_empty());
        assert!(select_scenario(&mut store, "launch").is_empty());
        assert!(select_version(&mut store, "beta").is_empty());
        assert!(go_to_instance(&mut store, 0).is_empty());
        assert!(
            store
                .ui
                .last_error
                .as_deref()
                .is_some_and(|message| message.contains("out of range"))
        );
        assert_eq!(store.demo.state(), &before);
    }

    #[test]
    fn role_theme_and_scenario_reducers_report_changes() {
        let mut store = AppStore::default();
        assert!(select_role(&mut store, "ADMIN").role);
        assert_eq!(store.demo.state().role, Role::Admin);
        assert!(select_role(&mut store, "admin").is_empty());

        assert!(select_theme(&mut store, "dark").theme);
        assert!(toggle_theme(&mut store).theme);
        assert_eq!(store.demo.state().theme_mode, ThemeMode::Light);

        assert!(select_scenario(&mut store, "token-management").scenario);
        assert_eq!(store.demo.state().scenario, Scenario::TokenManagement);

        assert!(select_version(&mut store, "future").version);
        assert_eq!(store.demo.state().version, Version::Future);
    }

    #[test]
    fn saved_instances_and_reset() {
        let mut store = AppStore::default();
        select_client(&mut store, "schwab");
        assert!(save_instance(&mut store));
        assert!(!save_instance(&mut store));
        select_client(&mut store, "cvs");
        assert!(save_instance(&mut store));

        let changes = go_to_instance(&mut store, 0);
        assert!(changes.tenant);
        assert_eq!(store.demo.client_name(), "Charles Schwab");
        assert_eq!(store.demo.current_instance(), Some(0));

        assert!(reset_demo(&mut store).tenant);
        assert_eq!(store.demo.state().client_id.as_str(), "deacons");
        assert!(store.demo.saved_instances().is_empty());
    }

    #[test]
    fn selector_toggle_and_dismiss() {
        let mut store = AppStore::default();
        toggle_selector(&mut store);
        assert!(store.ui.selector_open);
        toggle_selector(&mut store);
        assert!(!store.ui.selector_open);

        select_role(&mut store, "owner");
        assert!(store.ui.last_error.is_some());
        dismiss_error(&mut store);
        assert!(store.ui.last_error.is_none());
    }
}
