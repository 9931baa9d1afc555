use std::io::Write;

use prodash_config::DemoSettings;
use prodash_core::{DemoSnapshot, DemoStore, History, MemoryHistory, UrlSync};
use serde::Serialize;

use crate::cli::{InspectArgs, OutputFormat};
use crate::error::{CliError, CliResult};
use crate::output::render_inspection;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Inspection {
    pub(crate) input: String,
    pub(crate) canonical: String,
    pub(crate) rewritten: bool,
    pub(crate) snapshot: DemoSnapshot,
    pub(crate) ignored: Vec<String>,
}

pub(crate) fn handle_inspect(
    settings: &DemoSettings,
    args: &InspectArgs,
    format: OutputFormat,
    out: &mut dyn Write,
) -> CliResult<()> {
    let inspection = inspect(settings, &args.url)?;
    render_inspection(&inspection, format, out)
}

pub(crate) fn inspect(settings: &DemoSettings, url: &str) -> CliResult<Inspection> {
    let (origin, relative) = split_origin(url)?;
    let mut history = MemoryHistory::new(relative);
    let mut store = DemoStore::new(settings.context()?);
    let report = UrlSync::new().mount(&mut history, &mut store)?;

    Ok(Inspection {
        input: url.to_string(),
        canonical: format!("{origin}{}", history.current_url()),
        rewritten: report.written.is_some(),
        snapshot: store.snapshot(),
        ignored: report.issues.iter().map(ToString::to_string).collect(),
    })
}

fn split_origin(url: &str) -> CliResult<(&str, &str)> {
    if url.starts_with('/') {
        return Ok(("", url));
    }
    if let Some(scheme_end) = url.find("://") {
        let after_scheme = scheme_end + 3;
        let path_start = url[after_scheme..]
            .find(['/', '?', '#'])
            .map_or(url.len(), |idx| after_scheme + idx);
        let (origin, rest) = url.split_at(path_start);
        return Ok((origin, rest));
    }
    if url.starts_with('?') {
        return Ok(("", url));
    }
    Err(CliError::validation(format!(
        "'{url}' is neither an absolute URL nor a path starting with '/'"
    )))
}
