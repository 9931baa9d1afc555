use std::io::Write;

use prodash_config::DemoSettings;

use crate::cli::OutputFormat;
use crate::error::CliResult;
use crate::output::render_tenants;

pub(crate) fn handle_tenants(
    settings: &DemoSettings,
    format: OutputFormat,
    out: &mut dyn Write,
) -> CliResult<()> {
    render_tenants(&settings.catalog, &settings.defaults.tenant, format, out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_marks_default_tenant() -> Result<(), Box<dyn std::error::Error>> {
        let mut out = Vec::new();
        handle_tenants(&DemoSettings::builtin(), OutputFormat::Table, &mut out)
            .map_err(|err| err.display_message())?;
        let text = String::from_utf8(out)?;
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines[1].starts_with("deacons*"));
        assert!(lines[2].contains("CVS") && lines[2].contains("#c42032"));
        assert!(lines[4].starts_with("schwab ") && lines[4].contains("Charles Schwab"));
        Ok(())
    }

    #[test]
    fn json_lists_every_tenant() -> Result<(), Box<dyn std::error::Error>> {
        let mut out = Vec::new();
        handle_tenants(&DemoSettings::builtin(), OutputFormat::Json, &mut out)
            .map_err(|err| err.display_message())?;
        let value: serde_json::Value = serde_json::from_slice(&out)?;
        let ids: Vec<&str> = value["tenants"]
            .as_array()
            .map(|tenants| tenants.iter().filter_map(|t| t["id"].as_str()).collect())
            .unwrap_or_default();
        assert_eq!(ids, ["deacons", "cvs", "seven-eleven", "schwab"]);
        assert_eq!(value["default"], "deacons");
        Ok(())
    }
}
