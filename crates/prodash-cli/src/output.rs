//! Output renderers and formatting helpers for CLI commands.

use std::io::Write;

use anyhow::anyhow;
use prodash_core::{TenantCatalog, TenantId, ThemeTokens};
use serde::Serialize;
use serde_json::json;

use crate::cli::OutputFormat;
use crate::commands::{Inspection, LinkReport};
use crate::error::{CliError, CliResult};

pub(crate) fn render_tenants(
    catalog: &TenantCatalog,
    default: &TenantId,
    format: OutputFormat,
    out: &mut dyn Write,
) -> CliResult<()> {
    match format {
        OutputFormat::Json => write_json(
            out,
            &json!({ "default": default, "tenants": catalog.iter().collect::<Vec<_>>() }),
        ),
        OutputFormat::Table => {
            let mut text = format!(
                "{:<16} {:<24} {:<12} {:<8} ALIASES\n",
                "ID", "NAME", "INDUSTRY", "PRIMARY"
            );
            for tenant in catalog {
                let marker = if tenant.id == *default { "*" } else { "" };
                text.push_str(&format!(
                    "{:<16} {:<24} {:<12} {:<8} {}\n",
                    format!("{}{marker}", tenant.id),
                    tenant.name,
                    tenant.industry,
                    tenant.branding.light.primary,
                    tenant.aliases.join(", ")
                ));
            }
            write_text(out, &text)
        }
    }
}

pub(crate) fn render_link(
    report: &LinkReport,
    format: OutputFormat,
    out: &mut dyn Write,
) -> CliResult<()> {
    match format {
        OutputFormat::Json => write_json(out, report),
        OutputFormat::Table => write_text(out, &format!("{}\n", report.url)),
    }
}

pub(crate) fn render_inspection(
    inspection: &Inspection,
    format: OutputFormat,
    out: &mut dyn Write,
) -> CliResult<()> {
    match format {
        OutputFormat::Json => write_json(out, inspection),
        OutputFormat::Table => {
            let snapshot = &inspection.snapshot;
            let state = &snapshot.state;
            let mut text = String::new();
            text.push_str(&format!(
                "tenant: {} ({})\n",
                state.client_id, snapshot.client_name
            ));
            text.push_str(&format!("role: {}\n", state.role));
            text.push_str(&format!("theme: {}\n", state.theme_mode));
            text.push_str(&format!("scenario: {}\n", state.scenario));
            text.push_str(&format!("version: {}\n", state.version));
            for (name, value) in snapshot.tokens.css_variables() {
                text.push_str(&format!("{name}: {value}\n"));
            }
            for issue in &inspection.ignored {
                text.push_str(&format!("ignored: {issue}\n"));
            }
            let label = if inspection.rewritten {
                "rewritten"
            } else {
                "canonical"
            };
            text.push_str(&format!("{label}: {}\n", inspection.canonical));
            write_text(out, &text)
        }
    }
}

pub(crate) fn render_css(
    tokens: &ThemeTokens,
    selector: &str,
    format: OutputFormat,
    out: &mut dyn Write,
) -> CliResult<()> {
    match format {
        OutputFormat::Json => write_json(out, tokens),
        OutputFormat::Table => write_text(out, &format!("{}\n", tokens.to_css_block(selector))),
    }
}

fn write_json<T: Serialize + ?Sized>(out: &mut dyn Write, value: &T) -> CliResult<()> {
    let text = serde_json::to_string_pretty(value)
        .map_err(|err| CliError::failure(anyhow!("failed to format JSON: {err}")))?;
    write_text(out, &format!("{text}\n"))
}

fn write_text(out: &mut dyn Write, text: &str) -> CliResult<()> {
    out.write_all(text.as_bytes())
        .map_err(|err| CliError::failure(anyhow!("failed to write output: {err}")))
}
