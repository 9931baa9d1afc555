//! Argument parsing and command dispatch.

use std::ffi::OsString;
use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use prodash_config::{load_from_env, load_from_path};
use prodash_telemetry::{DEFAULT_LOG_LEVEL, LogFormat, LoggingConfig, command_span, init_logging};
use tracing::{info, warn};

use crate::commands::{handle_css, handle_inspect, handle_link, handle_tenants};
use crate::error::CliResult;

/// Parse process arguments, install logging, run the command and return the exit code.
#[must_use]
pub fn run() -> i32 {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return err.exit_code();
        }
    };

    let logging = LoggingConfig {
        level: &cli.log_level,
        format: cli.log_format.unwrap_or_else(LogFormat::infer),
        ..LoggingConfig::default()
    };
    if let Err(err) = init_logging(&logging) {
        eprintln!("warning: {err}");
    }

    finish(dispatch(cli, &mut io::stdout().lock()))
}

/// Run with explicit arguments and output sink, without installing logging.
#[must_use]
pub fn run_with_args<I, T>(args: I, out: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match Cli::try_parse_from(args) {
        Ok(cli) => finish(dispatch(cli, out)),
        Err(err) => {
            let _ = err.print();
            err.exit_code()
        }
    }
}

fn finish(result: CliResult<()>) -> i32 {
    match result {
        Ok(()) => 0,
        Err(err) => {
            let message = err.display_message();
            warn!(exit_code = err.exit_code(), error = %message, "command failed");
            eprintln!("error: {message}");
            err.exit_code()
        }
    }
}

/// Without `--config`, the file named by `PRODASH_CONFIG` is used, then the built-ins.
pub(crate) fn dispatch(cli: Cli, out: &mut dyn Write) -> CliResult<()> {
    let settings = match &cli.config {
        Some(path) => load_from_path(path)?,
        None => load_from_env()?,
    };
    let label = cli.command.label();
    let span = command_span(label);
    let _entered = span.enter();

    match cli.command {
        Command::Tenants => handle_tenants(&settings, cli.output, out),
        Command::Link(args) => handle_link(&settings, &args, cli.output, out),
        Command::Inspect(args) => handle_inspect(&settings, &args, cli.output, out),
        Command::Css(args) => handle_css(&settings, &args, cli.output, out),
    }?;
    info!(command = label, "command completed");
    Ok(())
}

#[derive(Parser, Debug)]
#[command(
    name = "prodash",
    about = "Build and inspect PRO Dashboard demo links",
    version
)]
pub(crate) struct Cli {
    #[arg(
        long,
        global = true,
        help = "JSON settings file with tenants and defaults; PRODASH_CONFIG when absent"
    )]
    pub(crate) config: Option<PathBuf>,
    #[arg(
        long = "output",
        alias = "format",
        global = true,
        value_enum,
        default_value_t = OutputFormat::Table,
        help = "Select output format for commands that render structured data"
    )]
    pub(crate) output: OutputFormat,
    #[arg(
        long,
        global = true,
        env = "PRODASH_LOG",
        default_value = DEFAULT_LOG_LEVEL,
        help = "Log level or filter directive; RUST_LOG takes precedence"
    )]
    pub(crate) log_level: String,
    #[arg(long, global = true, value_parser = parse_log_format)]
    pub(crate) log_format: Option<LogFormat>,
    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Command {
    /// List the tenant catalog.
    Tenants,
    /// Print the canonical demo URL for a tenant, role, theme, scenario and version.
    Link(LinkArgs),
    /// Decode a demo URL and show the state and rewritten URL it produces.
    Inspect(InspectArgs),
    /// Print the CSS custom properties for a tenant and theme.
    Css(CssArgs),
}

impl Command {
    const fn label(&self) -> &'static str {
        match self {
            Self::Tenants => "tenants",
            Self::Link(_) => "link",
            Self::Inspect(_) => "inspect",
            Self::Css(_) => "css",
        }
    }
}

#[derive(Args, Debug, Default)]
pub(crate) struct LinkArgs {
    #[arg(long, default_value = "/", help = "Page path; its own query parameters are kept")]
    pub(crate) path: String,
    #[arg(long, help = "Origin prefixed to the link, e.g. https://demo.example.com")]
    pub(crate) origin: Option<String>,
    #[arg(long, help = "Tenant id or alias")]
    pub(crate) client: Option<String>,
    #[arg(long)]
    pub(crate) role: Option<String>,
    #[arg(long)]
    pub(crate) theme: Option<String>,
    #[arg(long)]
    pub(crate) scenario: Option<String>,
    #[arg(long = "demo-version", value_name = "VERSION", help = "current, upcoming, future or experimental")]
    pub(crate) version: Option<String>,
}

#[derive(Args, Debug)]
pub(crate) struct InspectArgs {
    #[arg(help = "Absolute or relative dashboard URL")]
    pub(crate) url: String,
}

#[derive(Args, Debug)]
pub(crate) struct CssArgs {
    #[arg(long, help = "Tenant id or alias")]
    pub(crate) client: Option<String>,
    #[arg(long)]
    pub(crate) theme: Option<String>,
    #[arg(long, default_value = ":root")]
    pub(crate) selector: String,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    #[default]
    Table,
    Json,
}

fn parse_log_format(value: &str) -> Result<LogFormat, String> {
    value.parse::<LogFormat>().map_err(|err| err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).expect("arguments should parse")
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = parse(&["prodash", "link", "--client", "cvs", "--output", "json"]);
        assert_eq!(cli.output, OutputFormat::Json);
        assert_eq!(cli.log_level, DEFAULT_LOG_LEVEL);
        assert!(matches!(cli.command, Command::Link(LinkArgs { ref client, .. }) if client.as_deref() == Some("cvs")));
    }

    #[test]
    fn log_format_is_validated() {
        assert!(Cli::try_parse_from(["prodash", "--log-format", "xml", "tenants"]).is_err());
        let cli = parse(&["prodash", "--log-format", "json", "tenants"]);
        assert_eq!(cli.log_format, Some(LogFormat::Json));
    }

    #[test]
    fn unknown_tenant_exits_with_validation_code() {
        let mut out = Vec::new();
        let code = run_with_args(["prodash", "link", "--client", "acme"], &mut out);
        assert_eq!(code, 2);
        assert!(out.is_empty());
    }

    #[test]
    fn demo_version_flag_does_not_clash_with_version() {
        let cli = parse(&["prodash", "link", "--demo-version", "future"]);
        assert!(matches!(cli.command, Command::Link(LinkArgs { ref version, .. }) if version.as_deref() == Some("future")));
    }

    #[test]
    fn settings_come_from_environment_without_config_flag() {
        if std::env::var_os(prodash_config::CONFIG_ENV).is_some() {
            return;
        }
        let mut out = Vec::new();
        let code = run_with_args(["prodash", "tenants"], &mut out);
        assert_eq!(code, 0);
        assert!(String::from_utf8_lossy(&out).contains("seven-eleven"));
    }

    #[test]
    fn missing_config_file_is_an_operational_failure() {
        let mut out = Vec::new();
        let code = run_with_args(
            ["prodash", "--config", "/nonexistent/prodash.json", "tenants"],
            &mut out,
        );
        assert_eq!(code, 3);
    }
}
