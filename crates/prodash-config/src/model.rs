//! Settings document (as written on disk) and the resolved settings.

use std::rc::Rc;

use prodash_core::{DemoContext, DemoDefaults, DemoResult, TenantCatalog};
use serde::{Deserialize, Serialize};

use crate::defaults::DEFAULT_DEBOUNCE_MS;

/// Raw JSON settings document. Omitted sections fall back to built-ins.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SettingsDocument {
    /// Tenant list; `None` keeps the built-in catalog.
    #[serde(default)]
    pub tenants: Option<Vec<TenantDocument>>,
    /// Default demo values.
    #[serde(default)]
    pub defaults: DefaultsDocument,
    /// URL synchronisation tuning.
    #[serde(default)]
    pub sync: SyncDocument,
}

/// One tenant entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TenantDocument {
    /// Canonical identifier (`[a-z0-9-]+`).
    pub id: String,
    /// Display name.
    pub name: String,
    /// Industry label.
    #[serde(default)]
    pub industry: String,
    /// Alternative identifiers accepted in URLs.
    #[serde(default)]
    pub aliases: Vec<String>,
    /// Brand colors; the fallback branding when absent.
    #[serde(default)]
    pub branding: Option<BrandingDocument>,
}

/// Branding entry with an optional dark override.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BrandingDocument {
    /// Light palette.
    pub light: PaletteDocument,
    /// Dark palette override.
    #[serde(default)]
    pub dark: Option<PaletteDocument>,
}

/// `#rrggbb` colors for one mode. Surface colors default per mode.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PaletteDocument {
    /// Primary color.
    pub primary: String,
    /// Secondary color.
    pub secondary: String,
    /// Accent color.
    pub accent: String,
    /// Page background.
    #[serde(default)]
    pub background: Option<String>,
    /// Body text.
    #[serde(default)]
    pub text: Option<String>,
}

/// Default values section. Absent fields use built-in defaults.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DefaultsDocument {
    /// Default tenant id; the first catalog entry when absent.
    #[serde(default)]
    pub tenant: Option<String>,
    /// Default role.
    #[serde(default)]
    pub role: Option<String>,
    /// Default theme mode.
    #[serde(default)]
    pub theme: Option<String>,
    /// Default scenario.
    #[serde(default)]
    pub scenario: Option<String>,
    /// Default version.
    #[serde(default)]
    pub version: Option<String>,
}

/// Sync section.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SyncDocument {
    /// Debounce window for URL writes in milliseconds.
    #[serde(default)]
    pub debounce_ms: Option<u64>,
}

/// URL sync tuning after validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SyncSettings {
    /// Debounce window for URL writes; `0` writes synchronously.
    pub debounce_ms: u32,
}

impl Default for SyncSettings {
    fn default() -> Self {
        Self {
            debounce_ms: DEFAULT_DEBOUNCE_MS,
        }
    }
}

/// Validated settings ready to seed a [`DemoContext`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DemoSettings {
    /// Tenant catalog.
    pub catalog: TenantCatalog,
    /// Default demo values.
    pub defaults: DemoDefaults,
    /// URL sync tuning.
    pub sync: SyncSettings,
}

impl DemoSettings {
    /// Built-in catalog, defaults and sync tuning.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            catalog: TenantCatalog::builtin(),
            defaults: DemoDefaults::builtin(),
            sync: SyncSettings::default(),
        }
    }

    /// Create a context seeded from these settings.
    ///
    /// # Errors
    /// Returns [`prodash_core::DemoError::InvalidTenant`] if the default tenant
    /// is missing from the catalog, which validated settings never produce.
    pub fn context(&self) -> DemoResult<DemoContext> {
        DemoContext::new(Rc::new(self.catalog.clone()), self.defaults.clone())
    }
}

impl Default for DemoSettings {
    fn default() -> Self {
        Self::builtin()
    }
}
