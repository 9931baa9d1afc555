//! Demo state model: roles, scenarios, versions, the state record, and change sets.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DemoError;
use crate::tenant::{DEFAULT_TENANT, TenantId};
use crate::theme::ThemeMode;

/// Persona the dashboard is presenting.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Platform administrator.
    Admin,
    /// Merchant operator.
    #[default]
    Merchant,
    /// Customer support agent.
    Support,
}

impl Role {
    /// Identifier used in URLs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Merchant => "merchant",
            Self::Support => "support",
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::Merchant => "Merchant",
            Self::Support => "Support",
        }
    }

    /// All roles in selector order.
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::Merchant, Self::Support, Self::Admin]
    }
}

impl fmt::Display for Role {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = DemoError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "admin" => Ok(Self::Admin),
            "merchant" => Ok(Self::Merchant),
            "support" => Ok(Self::Support),
            _ => Err(DemoError::InvalidRole {
                value: value.to_string(),
            }),
        }
    }
}

/// Named demo storyline.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Scenario {
    /// General dashboard tour.
    #[default]
    Default,
    /// Campaign creation walkthrough.
    CampaignCreation,
    /// Support agent handling a member issue.
    SupportFlow,
    /// Token catalog and issuance.
    TokenManagement,
}

impl Scenario {
    /// Identifier used in URLs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::CampaignCreation => "campaign-creation",
            Self::SupportFlow => "support-flow",
            Self::TokenManagement => "token-management",
        }
    }

    /// Title shown in the demo selector.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Default => "Dashboard tour",
            Self::CampaignCreation => "Campaign creation",
            Self::SupportFlow => "Support flow",
            Self::TokenManagement => "Token management",
        }
    }

    /// All scenarios in selector order.
    #[must_use]
    pub const fn all() -> [Self; 4] {
        [
            Self::Default,
            Self::CampaignCreation,
            Self::SupportFlow,
            Self::TokenManagement,
        ]
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl FromStr for Scenario {
    type Err = DemoError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase().replace('_', "-");
        Self::all()
            .into_iter()
            .find(|scenario| scenario.as_str() == normalized)
            .ok_or_else(|| DemoError::InvalidScenario {
                value: value.to_string(),
            })
    }
}

/// Product release the demo is previewing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Version {
    /// Shipping release.
    #[default]
    Current,
    /// Next planned release.
    Upcoming,
    /// Longer-term roadmap.
    Future,
    /// Prototypes that may never ship.
    Experimental,
}

impl Version {
    /// Identifier used in URLs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Current => "current",
            Self::Upcoming => "upcoming",
            Self::Future => "future",
            Self::Experimental => "experimental",
        }
    }

    /// Badge label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Current => "Current",
            Self::Upcoming => "Upcoming",
            Self::Future => "Future",
            Self::Experimental => "Experimental",
        }
    }

    /// All versions in selector order.
    #[must_use]
    pub const fn all() -> [Self; 4] {
        [
            Self::Current,
            Self::Upcoming,
            Self::Future,
            Self::Experimental,
        ]
    }
}

impl fmt::Display for Version {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl FromStr for Version {
    type Err = DemoError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase();
        Self::all()
            .into_iter()
            .find(|version| version.as_str() == normalized)
            .ok_or_else(|| DemoError::InvalidVersion {
                value: value.to_string(),
            })
    }
}

/// Tenant, role, theme, scenario and version the UI is currently presenting.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DemoState {
    /// Active tenant.
    pub client_id: TenantId,
    /// Active persona.
    pub role: Role,
    /// Light or dark presentation.
    pub theme_mode: ThemeMode,
    /// Active demo storyline.
    pub scenario: Scenario,
    /// Previewed release.
    pub version: Version,
}

/// Values used when neither the URL nor a mutation supplies a field.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemoDefaults {
    /// Default tenant; must exist in the catalog in use.
    pub tenant: TenantId,
    /// Default role.
    pub role: Role,
    /// Default theme mode.
    pub theme_mode: ThemeMode,
    /// Default scenario.
    pub scenario: Scenario,
    /// Default version.
    pub version: Version,
}

impl DemoDefaults {
    /// Defaults matching [`crate::TenantCatalog::builtin`].
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            tenant: TenantId::trusted(DEFAULT_TENANT),
            role: Role::Merchant,
            theme_mode: ThemeMode::Light,
            scenario: Scenario::Default,
            version: Version::Current,
        }
    }

    /// State made entirely of defaults.
    #[must_use]
    pub fn state(&self) -> DemoState {
        DemoState {
            client_id: self.tenant.clone(),
            role: self.role,
            theme_mode: self.theme_mode,
            scenario: self.scenario,
            version: self.version,
        }
    }
}

impl From<&DemoState> for DemoDefaults {
    fn from(state: &DemoState) -> Self {
        Self {
            tenant: state.client_id.clone(),
            role: state.role,
            theme_mode: state.theme_mode,
            scenario: state.scenario,
            version: state.version,
        }
    }
}

/// Which fields a mutation actually changed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct DemoChanges {
    /// Tenant changed.
    pub tenant: bool,
    /// Role changed.
    pub role: bool,
    /// Theme mode changed.
    pub theme: bool,
    /// Scenario changed.
    pub scenario: bool,
    /// Version changed.
    pub version: bool,
}

impl DemoChanges {
    /// No field changed.
    pub const NONE: Self = Self {
        tenant: false,
        role: false,
        theme: false,
        scenario: false,
        version: false,
    };

    /// Field-wise difference between two states.
    #[must_use]
    pub fn between(previous: &DemoState, next: &DemoState) -> Self {
        Self {
            tenant: previous.client_id != next.client_id,
            role: previous.role != next.role,
            theme: previous.theme_mode != next.theme_mode,
            scenario: previous.scenario != next.scenario,
            version: previous.version != next.version,
        }
    }

    /// True when nothing changed.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        !(self.tenant || self.role || self.theme || self.scenario || self.version)
    }

    /// Whether derived theme tokens must be recomputed.
    #[must_use]
    pub const fn affects_theme(self) -> bool {
        self.tenant || self.theme
    }

    /// Combine two change sets.
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self {
            tenant: self.tenant || other.tenant,
            role: self.role || other.role,
            theme: self.theme || other.theme,
            scenario: self.scenario || other.scenario,
            version: self.version || other.version,
        }
    }
}
