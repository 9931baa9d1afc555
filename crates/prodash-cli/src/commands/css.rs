use std::io::Write;

use prodash_config::DemoSettings;
use prodash_core::{DemoContext, ThemeMode};

use crate::cli::{CssArgs, OutputFormat};
use crate::error::CliResult;
use crate::output::render_css;

pub(crate) fn handle_css(
    settings: &DemoSettings,
    args: &CssArgs,
    format: OutputFormat,
    out: &mut dyn Write,
) -> CliResult<()> {
    let context = themed_context(settings, args)?;
    render_css(context.tokens(), &args.selector, format, out)
}

fn themed_context(settings: &DemoSettings, args: &CssArgs) -> CliResult<DemoContext> {
    let mut context = settings.context()?;
    if let Some(client) = args.client.as_deref() {
        context.set_client_id(client)?;
    }
    if let Some(theme) = args.theme.as_deref() {
        context.set_theme_mode(theme.parse::<ThemeMode>()?);
    }
    Ok(context)
}
