//! URL codec for demo state.
//!
//! # Design
//! - `derive_url` and `derive_state` are pure so the round-trip can be tested without a browser.
//! - Decoding never fails: bad parameters become defaults and are reported as issues.
//! - Non-demo parameters are deep-link state owned by pages and are carried through
//!   byte for byte, in their raw encoded form.

use std::borrow::Cow;

use tracing::debug;

use crate::error::DemoError;
use crate::model::{DemoDefaults, DemoState, Role, Scenario, Version};
use crate::tenant::TenantCatalog;
use crate::theme::ThemeMode;

/// Query parameter carrying the tenant id.
pub const CLIENT_PARAM: &str = "clientId";
/// Older links used `client` for the tenant id; read-only alias.
pub const LEGACY_CLIENT_PARAM: &str = "client";
/// Query parameter carrying the role.
pub const ROLE_PARAM: &str = "role";
/// Query parameter carrying the theme mode.
pub const THEME_PARAM: &str = "theme";
/// Query parameter carrying the scenario.
pub const SCENARIO_PARAM: &str = "scenario";
/// Query parameter carrying the previewed version.
pub const VERSION_PARAM: &str = "version";

/// Ordered key/value pairs of a query string.
pub type QueryPairs = Vec<(String, String)>;

/// Demo subset of a URL plus the page's own parameters.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UrlSyncRecord {
    /// Raw tenant value.
    pub client_id: Option<String>,
    /// Raw role value.
    pub role: Option<String>,
    /// Raw theme value.
    pub theme: Option<String>,
    /// Raw scenario value.
    pub scenario: Option<String>,
    /// Raw version value.
    pub version: Option<String>,
    /// Whether the tenant arrived through the legacy `client` parameter.
    pub legacy_client_param: bool,
    /// Non-demo `key=value` segments, still percent-encoded, in their original order.
    pub extras: Vec<String>,
}

impl UrlSyncRecord {
    /// Split a query string (with or without a leading `?`) into demo fields
    /// and extras. The first occurrence of a demo parameter wins.
    #[must_use]
    pub fn from_query(query: &str) -> Self {
        let mut record = Self::default();
        let mut legacy_client = None;
        for segment in query_segments(query) {
            let (key, value) = segment.split_once('=').unwrap_or((segment, ""));
            let slot = match decode_component(key).as_str() {
                CLIENT_PARAM => Some(&mut record.client_id),
                LEGACY_CLIENT_PARAM => Some(&mut legacy_client),
                ROLE_PARAM => Some(&mut record.role),
                THEME_PARAM => Some(&mut record.theme),
                SCENARIO_PARAM => Some(&mut record.scenario),
                VERSION_PARAM => Some(&mut record.version),
                _ => None,
            };
            match slot {
                Some(slot) if slot.is_none() => *slot = Some(decode_component(value)),
                Some(_) => {}
                None => record.extras.push(segment.to_string()),
            }
        }
        if record.client_id.is_none() && legacy_client.is_some() {
            record.client_id = legacy_client;
            record.legacy_client_param = true;
        }
        record
    }

    /// Whether any demo parameter is present.
    #[must_use]
    pub const fn has_demo_params(&self) -> bool {
        self.client_id.is_some()
            || self.role.is_some()
            || self.theme.is_some()
            || self.scenario.is_some()
            || self.version.is_some()
    }

    /// Canonical query string: demo parameters first, then extras as received.
    #[must_use]
    pub fn to_query(&self) -> String {
        let client_key = if self.legacy_client_param {
            LEGACY_CLIENT_PARAM
        } else {
            CLIENT_PARAM
        };
        let demo = [
            (client_key, &self.client_id),
            (ROLE_PARAM, &self.role),
            (THEME_PARAM, &self.theme),
            (SCENARIO_PARAM, &self.scenario),
            (VERSION_PARAM, &self.version),
        ];
        let encoded = encode_pairs(
            demo.iter()
                .filter_map(|(key, value)| value.as_deref().map(|value| (*key, value))),
        );
        std::iter::once(encoded)
            .filter(|encoded| !encoded.is_empty())
            .chain(self.extras.iter().cloned())
            .collect::<Vec<_>>()
            .join("&")
    }
}

/// Result of decoding a URL record against a catalog.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DerivedState {
    /// Fully populated, valid state.
    pub state: DemoState,
    /// Parameters that were ignored in favour of defaults.
    pub issues: Vec<DemoError>,
}

/// Encode state into a record, carrying raw `extras` segments after the demo parameters.
#[must_use]
pub fn derive_url(state: &DemoState, extras: &[String]) -> UrlSyncRecord {
    UrlSyncRecord {
        client_id: Some(state.client_id.as_str().to_string()),
        role: Some(state.role.as_str().to_string()),
        theme: Some(state.theme_mode.as_str().to_string()),
        scenario: Some(state.scenario.as_str().to_string()),
        version: Some(state.version.as_str().to_string()),
        legacy_client_param: false,
        extras: extras.to_vec(),
    }
}

/// Decode a record into valid state. Missing fields take defaults; invalid
/// fields take defaults and are reported in [`DerivedState::issues`].
#[must_use]
pub fn derive_state(
    record: &UrlSyncRecord,
    catalog: &TenantCatalog,
    defaults: &DemoDefaults,
) -> DerivedState {
    let mut issues = Vec::new();
    let mut state = defaults.state();
    let client_param = if record.legacy_client_param {
        LEGACY_CLIENT_PARAM
    } else {
        CLIENT_PARAM
    };

    if let Some(raw) = record.client_id.as_deref() {
        match catalog.resolve(raw) {
            Some(tenant) => state.client_id = tenant.id.clone(),
            None => issues.push(malformed(client_param, raw, "unknown tenant")),
        }
    }
    if let Some(raw) = record.role.as_deref() {
        match raw.parse::<Role>() {
            Ok(role) => state.role = role,
            Err(_) => issues.push(malformed(ROLE_PARAM, raw, "unknown role")),
        }
    }
    if let Some(raw) = record.theme.as_deref() {
        match raw.parse::<ThemeMode>() {
            Ok(mode) => state.theme_mode = mode,
            Err(_) => issues.push(malformed(THEME_PARAM, raw, "unknown theme mode")),
        }
    }
    if let Some(raw) = record.scenario.as_deref() {
        match raw.parse::<Scenario>() {
            Ok(scenario) => state.scenario = scenario,
            Err(_) => issues.push(malformed(SCENARIO_PARAM, raw, "unknown scenario")),
        }
    }
    if let Some(raw) = record.version.as_deref() {
        match raw.parse::<Version>() {
            Ok(version) => state.version = version,
            Err(_) => issues.push(malformed(VERSION_PARAM, raw, "unknown version")),
        }
    }

    for issue in &issues {
        debug!(%issue, "falling back to default demo value");
    }
    DerivedState { state, issues }
}

/// Relative link to `path` carrying the canonical demo query for `state`.
#[must_use]
pub fn demo_href(path: &str, state: &DemoState) -> String {
    join_url(path, &derive_url(state, &[]).to_query(), "")
}

/// Canonical demo parameters for `state`, in write order.
#[must_use]
pub fn demo_query(state: &DemoState) -> QueryPairs {
    [
        (CLIENT_PARAM, state.client_id.as_str()),
        (ROLE_PARAM, state.role.as_str()),
        (THEME_PARAM, state.theme_mode.as_str()),
        (SCENARIO_PARAM, state.scenario.as_str()),
        (VERSION_PARAM, state.version.as_str()),
    ]
    .into_iter()
    .map(|(key, value)| (key.to_string(), value.to_string()))
    .collect()
}

/// Decode a query string into ordered pairs. `+` decodes to a space; invalid
/// percent-escapes are kept verbatim.
#[must_use]
pub fn parse_query(query: &str) -> QueryPairs {
    query_segments(query)
        .map(|segment| {
            let (key, value) = segment.split_once('=').unwrap_or((segment, ""));
            (decode_component(key), decode_component(value))
        })
        .collect()
}

/// Percent-encode pairs into a query string without a leading `?`.
#[must_use]
pub fn encode_query(pairs: &[(String, String)]) -> String {
    encode_pairs(
        pairs
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str())),
    )
}

/// Split a URL into `(path, query, fragment)`. The query excludes `?`, the
/// fragment keeps its `#`.
#[must_use]
pub fn split_url(url: &str) -> (&str, &str, &str) {
    let (rest, fragment) = url.find('#').map_or((url, ""), |idx| url.split_at(idx));
    let (path, query) = rest.split_once('?').unwrap_or((rest, ""));
    (path, query, fragment)
}

/// Inverse of [`split_url`]; omits `?` for an empty query.
#[must_use]
pub fn join_url(path: &str, query: &str, fragment: &str) -> String {
    if query.is_empty() {
        format!("{path}{fragment}")
    } else {
        format!("{path}?{query}{fragment}")
    }
}

fn query_segments(query: &str) -> impl Iterator<Item = &str> {
    query
        .strip_prefix('?')
        .unwrap_or(query)
        .split('&')
        .filter(|segment| !segment.is_empty())
}

fn encode_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> String {
    pairs
        .into_iter()
        .map(|(key, value)| {
            format!(
                "{}={}",
                urlencoding::encode(key),
                urlencoding::encode(value)
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}

fn decode_component(raw: &str) -> String {
    let spaced: Cow<'_, str> = if raw.contains('+') {
        Cow::Owned(raw.replace('+', " "))
    } else {
        Cow::Borrowed(raw)
    };
    match urlencoding::decode(&spaced) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => spaced.into_owned(),
    }
}

fn malformed(param: &str, value: &str, reason: &'static str) -> DemoError {
    DemoError::MalformedUrlState {
        param: param.to_string(),
        value: value.to_string(),
        reason,
    }
}
