use std::io::Write;

use prodash_config::DemoSettings;
use prodash_core::url::{join_url, split_url};
use prodash_core::{DemoStore, ThemeMode, UrlSyncRecord, derive_url};
use serde::Serialize;

use crate::cli::{LinkArgs, OutputFormat};
use crate::error::{CliError, CliResult};
use crate::output::render_link;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct LinkReport {
    pub(crate) url: String,
    pub(crate) client_name: String,
    pub(crate) state: prodash_core::DemoState,
}

pub(crate) fn handle_link(
    settings: &DemoSettings,
    args: &LinkArgs,
    format: OutputFormat,
    out: &mut dyn Write,
) -> CliResult<()> {
    let report = build_link(settings, args)?;
    render_link(&report, format, out)
}

pub(crate) fn build_link(settings: &DemoSettings, args: &LinkArgs) -> CliResult<LinkReport> {
    let mut store = DemoStore::new(settings.context()?);
    if let Some(client) = args.client.as_deref() {
        store.set_client_id(client)?;
    }
    if let Some(role) = args.role.as_deref() {
        store.set_role(role)?;
    }
    if let Some(theme) = args.theme.as_deref() {
        store.set_theme_mode(theme.parse::<ThemeMode>()?);
    }
    if let Some(scenario) = args.scenario.as_deref() {
        store.set_scenario_str(scenario)?;
    }
    if let Some(version) = args.version.as_deref() {
        store.set_version_str(version)?;
    }

    if !args.path.starts_with('/') {
        return Err(CliError::validation(format!(
            "path '{}' must start with '/'",
            args.path
        )));
    }
    let (path, query, fragment) = split_url(&args.path);
    let extras = UrlSyncRecord::from_query(query).extras;
    let relative = join_url(path, &derive_url(store.state(), &extras).to_query(), fragment);
    let url = match args.origin.as_deref() {
        Some(origin) => format!("{}{relative}", origin.trim_end_matches('/')),
        None => relative,
    };

    Ok(LinkReport {
        url,
        client_name: store.context().client_name().to_string(),
        state: store.state().clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use prodash_core::{Role, Scenario};

    fn args() -> LinkArgs {
        LinkArgs {
            path: "/".to_string(),
            ..LinkArgs::default()
        }
    }

    #[test]
    fn builds_canonical_link_with_page_params() -> Result<(), String> {
        let report = build_link(
            &DemoSettings::builtin(),
            &LinkArgs {
                path: "/members?tab=vip&role=admin#top".to_string(),
                origin: Some("https://demo.example.com/".to_string()),
                client: Some("CVS".to_string()),
                role: Some("support".to_string()),
                theme: Some("dark".to_string()),
                scenario: Some("support-flow".to_string()),
                version: Some("upcoming".to_string()),
            },
        )
        .map_err(|err| err.display_message())?;
        assert_eq!(
            report.url,
            "https://demo.example.com/members?clientId=cvs&role=support&theme=dark&scenario=support-flow&version=upcoming&tab=vip#top"
        );
        assert_eq!(report.state.role, Role::Support);
        assert_eq!(report.state.scenario, Scenario::SupportFlow);
        assert_eq!(report.client_name, "CVS");
        Ok(())
    }

    #[test]
    fn defaults_fill_missing_flags() -> Result<(), String> {
        let report =
            build_link(&DemoSettings::builtin(), &args()).map_err(|err| err.display_message())?;
        assert_eq!(
            report.url,
            "/?clientId=deacons&role=merchant&theme=light&scenario=default&version=current"
        );
        Ok(())
    }

    #[test]
    fn invalid_values_are_validation_errors() {
        for bad in [
            LinkArgs {
                theme: Some("sepia".to_string()),
                ..args()
            },
            LinkArgs {
                scenario: Some("launch".to_string()),
                ..args()
            },
            LinkArgs {
                version: Some("beta".to_string()),
                ..args()
            },
            LinkArgs {
                path: "members".to_string(),
                ..args()
            },
        ] {
            match build_link(&DemoSettings::builtin(), &bad) {
                Err(err) => assert_eq!(err.exit_code(), 2),
                Ok(report) => panic!("expected rejection, got {}", report.url),
            }
        }
    }

    #[test]
    fn page_params_keep_their_raw_encoding() -> Result<(), String> {
        let report = build_link(
            &DemoSettings::builtin(),
            &LinkArgs {
                path: "/search?q=a+b&bad=%ZZ".to_string(),
                ..args()
            },
        )
        .map_err(|err| err.display_message())?;
        assert!(report.url.ends_with("&version=current&q=a+b&bad=%ZZ"), "{}", report.url);
        Ok(())
    }

    #[test]
    fn report_serializes_with_camel_case_keys() -> Result<(), String> {
        let report =
            build_link(&DemoSettings::builtin(), &args()).map_err(|err| err.display_message())?;
        let value = serde_json::to_value(&report).map_err(|err| err.to_string())?;
        assert_eq!(value["clientName"], "Deacon's Pizza");
        assert!(value.get("client_name").is_none());
        assert_eq!(value["state"]["clientId"], "deacons");
        Ok(())
    }
}
