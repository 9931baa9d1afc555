//! Tenant identifiers, branding, and the catalog of known tenants.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{DemoError, DemoResult};
use crate::theme::ThemeMode;

/// Longest accepted tenant identifier.
pub const MAX_TENANT_ID_LEN: usize = 64;

/// Default tenant of the built-in catalog.
pub const DEFAULT_TENANT: &str = "deacons";

/// Canonical tenant identifier (`[a-z0-9-]+`).
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TenantId(String);

impl TenantId {
    /// Validate the identifier syntax. Catalog membership is checked separately.
    ///
    /// # Errors
    /// Returns [`DemoError::InvalidTenant`] when the value is empty, too long, or
    /// contains characters outside `[a-z0-9-]`.
    pub fn parse(value: &str) -> DemoResult<Self> {
        let valid = !value.is_empty()
            && value.len() <= MAX_TENANT_ID_LEN
            && value
                .bytes()
                .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-');
        if valid {
            Ok(Self(value.to_string()))
        } else {
            Err(DemoError::InvalidTenant {
                value: value.to_string(),
            })
        }
    }

    pub(crate) fn trusted(value: &str) -> Self {
        Self(value.to_string())
    }

    /// Borrow the identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TenantId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.0)
    }
}

impl AsRef<str> for TenantId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for TenantId {
    type Error = DemoError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<TenantId> for String {
    fn from(value: TenantId) -> Self {
        value.0
    }
}

/// The five theme colors for one mode.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    /// Primary brand color (`#rrggbb`).
    pub primary: String,
    /// Secondary brand color.
    pub secondary: String,
    /// Accent color.
    pub accent: String,
    /// Page background.
    pub background: String,
    /// Body text.
    pub text: String,
}

impl Palette {
    fn from_hex([primary, secondary, accent, background, text]: [&str; 5]) -> Self {
        Self {
            primary: primary.to_string(),
            secondary: secondary.to_string(),
            accent: accent.to_string(),
            background: background.to_string(),
            text: text.to_string(),
        }
    }
}

/// Tenant branding: one palette per theme mode.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Branding {
    /// Light-mode palette.
    pub light: Palette,
    /// Dark-mode palette.
    pub dark: Palette,
}

impl Branding {
    /// Palette for the requested mode.
    #[must_use]
    pub const fn palette(&self, mode: ThemeMode) -> &Palette {
        match mode {
            ThemeMode::Light => &self.light,
            ThemeMode::Dark => &self.dark,
        }
    }

    /// Neutral blue/emerald branding for tenants that bring no colors of their own.
    #[must_use]
    pub fn fallback() -> Self {
        Self {
            light: Palette::from_hex(FALLBACK_LIGHT),
            dark: Palette::from_hex(FALLBACK_DARK),
        }
    }
}

const FALLBACK_LIGHT: [&str; 5] = ["#3b82f6", "#10b981", "#f97316", "#ffffff", "#1f2937"];
const FALLBACK_DARK: [&str; 5] = ["#60a5fa", "#34d399", "#fb923c", "#f8fafc", "#334155"];

/// A client organization with its own branding.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tenant {
    /// Canonical identifier written to URLs.
    pub id: TenantId,
    /// Display name.
    pub name: String,
    /// Industry label shown in the demo selector.
    pub industry: String,
    /// Alternative identifiers accepted on read.
    pub aliases: Vec<String>,
    /// Brand colors.
    pub branding: Branding,
}

/// Ordered, non-empty set of tenants with unique identifiers and aliases.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TenantCatalog {
    tenants: Vec<Tenant>,
}

impl TenantCatalog {
    /// Build a catalog, rejecting empty lists and colliding ids or aliases.
    ///
    /// # Errors
    /// Returns [`DemoError::InvalidCatalog`] when the catalog is empty, when two
    /// tenants share an id or alias, or when an alias is not a valid identifier.
    pub fn new(tenants: Vec<Tenant>) -> DemoResult<Self> {
        if tenants.is_empty() {
            return Err(DemoError::InvalidCatalog {
                reason: "catalog must contain at least one tenant".to_string(),
            });
        }
        let mut seen = HashSet::new();
        for tenant in &tenants {
            if !seen.insert(tenant.id.as_str().to_string()) {
                return Err(DemoError::InvalidCatalog {
                    reason: format!("duplicate tenant identifier '{}'", tenant.id),
                });
            }
        }
        for tenant in &tenants {
            for alias in &tenant.aliases {
                TenantId::parse(alias).map_err(|_| DemoError::InvalidCatalog {
                    reason: format!("alias '{alias}' of '{}' is not a valid identifier", tenant.id),
                })?;
                if !seen.insert(alias.clone()) {
                    return Err(DemoError::InvalidCatalog {
                        reason: format!("alias '{alias}' collides with another tenant"),
                    });
                }
            }
        }
        Ok(Self { tenants })
    }

    /// Built-in demo tenants. `deacons` is listed first.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            tenants: vec![
                builtin_tenant(
                    DEFAULT_TENANT,
                    "Deacon's Pizza",
                    "Restaurant",
                    &["deacons-pizza"],
                    ["#ef4444", "#84cc16", "#f97316", "#ffffff", "#1f2937"],
                    ["#f87171", "#a3e635", "#fb923c", "#f8fafc", "#334155"],
                ),
                builtin_tenant(
                    "cvs",
                    "CVS",
                    "Pharmacy",
                    &[],
                    ["#c42032", "#3268cc", "#f97316", "#ffffff", "#1f2937"],
                    ["#dc4251", "#5b85d6", "#fb923c", "#f8fafc", "#334155"],
                ),
                builtin_tenant(
                    "seven-eleven",
                    "7-Eleven",
                    "Convenience",
                    &[],
                    ["#e30613", "#008651", "#f97316", "#ffffff", "#1f2937"],
                    ["#f03a46", "#33a67e", "#fb923c", "#f8fafc", "#334155"],
                ),
                builtin_tenant(
                    "schwab",
                    "Charles Schwab",
                    "Financial Services",
                    &[],
                    ["#009ddb", "#1b53b1", "#00a86b", "#ffffff", "#1f2937"],
                    ["#1e90ff", "#4169e1", "#32cd32", "#f8fafc", "#334155"],
                ),
            ],
        }
    }

    /// Resolve a raw identifier or alias (case-insensitive) to a tenant.
    #[must_use]
    pub fn resolve(&self, raw: &str) -> Option<&Tenant> {
        let needle = raw.trim().to_ascii_lowercase();
        self.tenants.iter().find(|tenant| {
            tenant.id.as_str() == needle || tenant.aliases.iter().any(|alias| *alias == needle)
        })
    }

    /// Look up a tenant by canonical id.
    #[must_use]
    pub fn get(&self, id: &TenantId) -> Option<&Tenant> {
        self.tenants.iter().find(|tenant| tenant.id == *id)
    }

    /// Whether the canonical id is part of the catalog.
    #[must_use]
    pub fn contains(&self, id: &TenantId) -> bool {
        self.get(id).is_some()
    }

    /// Iterate tenants in catalog order.
    pub fn iter(&self) -> std::slice::Iter<'_, Tenant> {
        self.tenants.iter()
    }

    /// Number of tenants.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tenants.len()
    }

    /// Always `false` for a constructed catalog.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tenants.is_empty()
    }
}

impl<'a> IntoIterator for &'a TenantCatalog {
    type Item = &'a Tenant;
    type IntoIter = std::slice::Iter<'a, Tenant>;

    fn into_iter(self) -> Self::IntoIter {
        self.tenants.iter()
    }
}

fn builtin_tenant(
    id: &str,
    name: &str,
    industry: &str,
    aliases: &[&str],
    light: [&str; 5],
    dark: [&str; 5],
) -> Tenant {
    Tenant {
        id: TenantId::trusted(id),
        name: name.to_string(),
        industry: industry.to_string(),
        aliases: aliases.iter().map(|alias| (*alias).to_string()).collect(),
        branding: Branding {
            light: Palette::from_hex(light),
            dark: Palette::from_hex(dark),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tenant_id_syntax_is_enforced() {
        assert!(TenantId::parse("cvs").is_ok());
        assert!(TenantId::parse("deacons-pizza").is_ok());
        assert!(TenantId::parse("").is_err());
        assert!(TenantId::parse("CVS").is_err());
        assert!(TenantId::parse("cvs pharmacy").is_err());
        assert!(TenantId::parse(&"a".repeat(MAX_TENANT_ID_LEN + 1)).is_err());
    }

    #[test]
    fn builtin_catalog_resolves_ids_and_aliases() {
        let catalog = TenantCatalog::builtin();
        assert_eq!(catalog.len(), 4);
        for id in ["deacons", "cvs", "seven-eleven", "schwab"] {
            assert_eq!(catalog.resolve(id).map(|tenant| tenant.id.as_str()), Some(id));
        }
        assert_eq!(
            catalog.resolve("CVS").map(|tenant| tenant.id.as_str()),
            Some("cvs")
        );
        assert_eq!(
            catalog.resolve("deacons-pizza").map(|tenant| tenant.id.as_str()),
            Some("deacons")
        );
        assert_eq!(
            catalog.resolve("schwab").map(|tenant| tenant.name.as_str()),
            Some("Charles Schwab")
        );
        assert!(catalog.resolve("acme").is_none());
    }

    #[test]
    fn builtin_catalog_passes_validation() {
        let tenants: Vec<Tenant> = TenantCatalog::builtin().iter().cloned().collect();
        assert!(TenantCatalog::new(tenants).is_ok());
    }

    #[test]
    fn catalog_rejects_empty_and_duplicates() {
        assert!(TenantCatalog::new(Vec::new()).is_err());

        let tenants: Vec<Tenant> = TenantCatalog::builtin().iter().cloned().collect();
        let mut duplicated = tenants.clone();
        duplicated.push(tenants[1].clone());
        assert!(TenantCatalog::new(duplicated).is_err());

        let mut aliased = tenants;
        aliased[2].aliases.push("cvs".to_string());
        assert!(matches!(
            TenantCatalog::new(aliased),
            Err(DemoError::InvalidCatalog { .. })
        ));
    }

    #[test]
    fn branding_selects_palette_per_mode() {
        let catalog = TenantCatalog::builtin();
        let cvs = catalog.resolve("cvs").map(|tenant| &tenant.branding);
        assert_eq!(
            cvs.map(|branding| branding.palette(ThemeMode::Light).primary.as_str()),
            Some("#c42032")
        );
        assert_eq!(
            cvs.map(|branding| branding.palette(ThemeMode::Dark).primary.as_str()),
            Some("#dc4251")
        );
    }

    #[test]
    fn fallback_branding_keeps_light_surface_in_dark_mode() {
        let fallback = Branding::fallback();
        assert_eq!(fallback.light.primary, "#3b82f6");
        assert_eq!(fallback.dark.primary, "#60a5fa");
        assert_eq!(fallback.dark.background, "#f8fafc");
        assert_eq!(fallback.dark.text, "#334155");
    }

    #[test]
    fn tenant_id_deserialization_validates() {
        assert!(serde_json::from_str::<TenantId>("\"cvs\"").is_ok());
        assert!(serde_json::from_str::<TenantId>("\"Not Valid\"").is_err());
    }
}
