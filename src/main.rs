//! Ignite CLI entry point.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use ignite::cli::{Cli, CommandDispatcher};
use ignite::error::{IgniteError, EXIT_UNEXPECTED};
use ignite::ui::{create_ui, is_ci};
use ignite::workspace::Workspace;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("ignite=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("ignite=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn exit_code(code: i32) -> ExitCode {
    ExitCode::from(u8::try_from(code).unwrap_or(EXIT_UNEXPECTED as u8))
}

fn project_root(cli: &Cli) -> ignite::Result<PathBuf> {
    match &cli.project {
        Some(path) => Ok(path.clone()),
        None => Ok(std::env::current_dir()?),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("Ignite starting with args: {:?}", cli);

    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    let mut ui = create_ui(!is_ci(), cli.output_mode());

    let workspace = project_root(&cli)
        .and_then(|root| Workspace::system(&root, cli.toolchain_config()));
    let result = workspace.and_then(|workspace| {
        CommandDispatcher::new(workspace).dispatch(&cli, ui.as_mut())
    });

    match result {
        Ok(result) => exit_code(result.exit_code),
        Err(e) => {
            report(ui.as_mut(), &e);
            exit_code(e.exit_code())
        }
    }
}

fn report(ui: &mut dyn ignite::ui::UserInterface, error: &IgniteError) {
    tracing::debug!(exit_code = error.exit_code(), "command failed: {:?}", error);
    ui.error(&format!("Error: {}", error));
}
