//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `mail_auth_check` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - Obtaining the domain (flag or prompt)
//! - Exit codes
//!
//! All core functionality is implemented in the library crate.

use std::io::{self, IsTerminal, Write};
use std::process;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};

use mail_auth_check::error_handling::InputError;
use mail_auth_check::initialization::{init_logger_with, init_resolver};
use mail_auth_check::input::{obtain_domain, DomainSource};
use mail_auth_check::{
    exit_code_for, render_report, run_checks, Config, Opt, OutputFormat, EXIT_INPUT_ERROR,
    EXIT_OK, EXIT_RESOLVER_ERROR,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load environment variables from .env file (if it exists)
    // so MAIL_AUTH_CHECK_DOMAIN / MAIL_AUTH_CHECK_DKIM can live there
    let _ = dotenvy::dotenv();

    let config = Config::from(Opt::parse());

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    let json = config.output_format == OutputFormat::Json;
    let color = config.color
        && !json
        && io::stdout().is_terminal()
        && std::env::var_os("NO_COLOR").is_none();
    colored::control::set_override(color);

    // Keep stdout pure JSON when a machine is reading it
    let prompt_out: Box<dyn Write> = if json {
        Box::new(io::stderr())
    } else {
        Box::new(io::stdout())
    };
    let source = DomainSource::from_flag(config.domain.clone());
    let domain = match obtain_domain(source, io::stdin().lock(), prompt_out) {
        Ok(domain) => domain,
        Err(e) => {
            eprintln!("{e}");
            if matches!(e, InputError::Missing) {
                eprintln!("{}", Opt::command().render_help());
            }
            process::exit(EXIT_INPUT_ERROR);
        }
    };

    let resolver = match init_resolver(config.timeout_seconds) {
        Ok(resolver) => resolver,
        Err(e) => {
            eprintln!("mail_auth_check error: {e}");
            process::exit(EXIT_RESOLVER_ERROR);
        }
    };

    let report = run_checks(&domain, &config.dkim_selectors, &resolver).await;
    render_report(&report, config.output_format, color, &mut io::stdout().lock())
        .context("Failed to write report")?;

    let code = exit_code_for(&report);
    if code != EXIT_OK {
        eprintln!("mail_auth_check error: no DNS lookup succeeded; check network access and resolver configuration");
        process::exit(code);
    }
    Ok(())
}
