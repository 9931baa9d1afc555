//! Validation helpers that turn a [`SettingsDocument`] into [`DemoSettings`].

use prodash_core::{
    Branding, DemoDefaults, Palette, Role, Scenario, Tenant, TenantCatalog, TenantId, ThemeMode,
    Version,
};

use crate::defaults::MAX_DEBOUNCE_MS;
use crate::error::{ConfigError, ConfigResult};
use crate::model::{
    BrandingDocument, DefaultsDocument, DemoSettings, PaletteDocument, SettingsDocument,
    SyncDocument, SyncSettings, TenantDocument,
};

/// Validate a parsed document and convert it into core types.
///
/// # Errors
/// Returns [`ConfigError::InvalidField`] for malformed values and
/// [`ConfigError::Catalog`] for empty catalogs or colliding ids and aliases.
pub fn validate_document(document: &SettingsDocument) -> ConfigResult<DemoSettings> {
    let catalog = match &document.tenants {
        Some(tenants) => {
            let tenants = tenants
                .iter()
                .enumerate()
                .map(|(index, tenant)| parse_tenant(index, tenant))
                .collect::<ConfigResult<Vec<_>>>()?;
            TenantCatalog::new(tenants).map_err(|source| ConfigError::Catalog { source })?
        }
        None => TenantCatalog::builtin(),
    };
    let defaults = parse_defaults(&document.defaults, &catalog)?;
    let sync = parse_sync(&document.sync)?;
    Ok(DemoSettings {
        catalog,
        defaults,
        sync,
    })
}

/// Normalise a `#rrggbb` color to lower case.
///
/// # Errors
/// Returns [`ConfigError::InvalidField`] when the value is not a six-digit hex color.
pub fn parse_hex_color(value: &str, section: &str, field: &str) -> ConfigResult<String> {
    let valid = value.len() == 7
        && value.starts_with('#')
        && value[1..].bytes().all(|b| b.is_ascii_hexdigit());
    if valid {
        Ok(value.to_ascii_lowercase())
    } else {
        Err(ConfigError::invalid(
            section,
            field,
            Some(value),
            "must be a #RRGGBB color",
        ))
    }
}

fn parse_tenant(index: usize, document: &TenantDocument) -> ConfigResult<Tenant> {
    let section = format!("tenants[{index}]");
    let id = TenantId::parse(&document.id).map_err(|_| {
        ConfigError::invalid(
            &section,
            "id",
            Some(&document.id),
            "must be lowercase letters, digits or '-'",
        )
    })?;
    if document.name.trim().is_empty() {
        return Err(ConfigError::invalid(&section, "name", None, "must not be empty"));
    }
    let branding = document
        .branding
        .as_ref()
        .map(|branding| parse_branding(branding, &section))
        .transpose()?
        .unwrap_or_else(Branding::fallback);
    Ok(Tenant {
        id,
        name: document.name.trim().to_string(),
        industry: document.industry.trim().to_string(),
        aliases: document
            .aliases
            .iter()
            .map(|alias| alias.trim().to_ascii_lowercase())
            .collect(),
        branding,
    })
}

/// A missing dark palette reuses the light brand colors on the fallback dark surface.
fn parse_branding(document: &BrandingDocument, section: &str) -> ConfigResult<Branding> {
    let fallback = Branding::fallback();
    let light = parse_palette(&document.light, &fallback.light, section, "branding.light")?;
    let dark = match &document.dark {
        Some(dark) => parse_palette(dark, &fallback.dark, section, "branding.dark")?,
        None => Palette {
            background: fallback.dark.background.clone(),
            text: fallback.dark.text.clone(),
            ..light.clone()
        },
    };
    Ok(Branding { light, dark })
}

fn parse_palette(
    document: &PaletteDocument,
    surface: &Palette,
    section: &str,
    prefix: &str,
) -> ConfigResult<Palette> {
    let optional = |value: Option<&str>, fallback: &str, field: &str| {
        value.map_or_else(
            || Ok(fallback.to_string()),
            |value| parse_hex_color(value, section, &format!("{prefix}.{field}")),
        )
    };
    Ok(Palette {
        primary: parse_hex_color(&document.primary, section, &format!("{prefix}.primary"))?,
        secondary: parse_hex_color(&document.secondary, section, &format!("{prefix}.secondary"))?,
        accent: parse_hex_color(&document.accent, section, &format!("{prefix}.accent"))?,
        background: optional(document.background.as_deref(), &surface.background, "background")?,
        text: optional(document.text.as_deref(), &surface.text, "text")?,
    })
}

fn parse_defaults(document: &DefaultsDocument, catalog: &TenantCatalog) -> ConfigResult<DemoDefaults> {
    let builtin = DemoDefaults::builtin();
    let tenant = match document.tenant.as_deref() {
        Some(raw) => catalog
            .resolve(raw)
            .map(|tenant| tenant.id.clone())
            .ok_or_else(|| ConfigError::invalid("defaults", "tenant", Some(raw), "not in the tenant catalog"))?,
        None if catalog.contains(&builtin.tenant) => builtin.tenant.clone(),
        None => catalog
            .iter()
            .next()
            .map(|tenant| tenant.id.clone())
            .ok_or_else(|| ConfigError::invalid("defaults", "tenant", None, "catalog is empty"))?,
    };
    let role = parse_optional::<Role>(document.role.as_deref(), "role", "unknown role")?
        .unwrap_or(builtin.role);
    let theme_mode =
        parse_optional::<ThemeMode>(document.theme.as_deref(), "theme", "must be light or dark")?
            .unwrap_or(builtin.theme_mode);
    let scenario =
        parse_optional::<Scenario>(document.scenario.as_deref(), "scenario", "unknown scenario")?
            .unwrap_or(builtin.scenario);
    let version =
        parse_optional::<Version>(document.version.as_deref(), "version", "unknown version")?
            .unwrap_or(builtin.version);
    Ok(DemoDefaults {
        tenant,
        role,
        theme_mode,
        scenario,
        version,
    })
}

fn parse_optional<T: std::str::FromStr>(
    raw: Option<&str>,
    field: &str,
    reason: &'static str,
) -> ConfigResult<Option<T>> {
    raw.map(|value| {
        value
            .parse::<T>()
            .map_err(|_| ConfigError::invalid("defaults", field, Some(value), reason))
    })
    .transpose()
}

fn parse_sync(document: &SyncDocument) -> ConfigResult<SyncSettings> {
    let Some(raw) = document.debounce_ms else {
        return Ok(SyncSettings::default());
    };
    u32::try_from(raw)
        .ok()
        .filter(|value| *value <= MAX_DEBOUNCE_MS)
        .map(|debounce_ms| SyncSettings { debounce_ms })
        .ok_or_else(|| {
            ConfigError::invalid(
                "sync",
                "debounce_ms",
                Some(&raw.to_string()),
                "must be between 0 and 5000",
            )
        })
}
