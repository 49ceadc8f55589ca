use sshconfig_host::args::MainArgs;
use sshconfig_host::config::{self, OutputFormat, Settings};
use sshconfig_host::log::LOGGER;
use sshconfig_host::lookup::HostLookup;
use sshconfig_host::ssh_config::{DEFAULT_SSH_CONFIG_PATH, expand_tilde};
use sshconfig_host::{Error, Result, args, log_debug};

use std::path::PathBuf;
use std::process::ExitCode;

const EXIT_FAILURE: u8 = 1;
const EXIT_NOT_FOUND: u8 = 2;

fn main() -> ExitCode {
    let args = args::main_args();

    if args.debug {
        LOGGER.enable_debug();
    }
    if let Some(log_file) = &args.log_file {
        LOGGER.set_log_path(log_file.clone());
    }

    let exit_code = match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error reading ssh config: {}", err);
            ExitCode::from(exit_status(&err))
        }
    };

    if let Err(err) = LOGGER.flush() {
        eprintln!("❌ Failed to flush debug log: {}", err);
    }
    exit_code
}

/// Process exit status for a failed run.
fn exit_status(err: &Error) -> u8 {
    if err.is_not_found() { EXIT_NOT_FOUND } else { EXIT_FAILURE }
}

/// CLI flags win over the settings file, which wins over built-in defaults.
fn resolve_path(args: &MainArgs, settings: &Settings) -> PathBuf {
    args.path
        .clone()
        .or_else(|| settings.ssh_config_path.as_deref().map(expand_tilde))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SSH_CONFIG_PATH))
}

fn resolve_format(args: &MainArgs, settings: &Settings) -> OutputFormat {
    args.format.unwrap_or(settings.output)
}

fn run(args: MainArgs) -> Result<()> {
    let settings = config::load_config(args.config.clone())?.settings;
    if settings.debug_mode {
        LOGGER.enable_debug();
    }
    log_debug!("Debug mode enabled");

    let path = resolve_path(&args, &settings);
    let format = resolve_format(&args, &settings);
    log_debug!("Looking up host {:?} in {} (format: {})", args.host, path.display(), format);

    let lookup = HostLookup::read(&path, &args.host)?;

    match format {
        OutputFormat::Text => print!("{}", lookup.rendered),
        OutputFormat::Map => print!("{}", lookup.map_lines()),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&lookup).map_err(std::io::Error::from)?;
            println!("{}", json);
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "test/main.rs"]
mod tests;
