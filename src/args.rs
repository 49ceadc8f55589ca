use crate::config::OutputFormat;
use clap::{Arg, ArgMatches, Command};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct MainArgs {
    pub debug: bool,
    pub path: Option<PathBuf>,
    pub format: Option<OutputFormat>,
    pub config: Option<PathBuf>,
    pub log_file: Option<PathBuf>,
    pub host: String,
}

pub fn build_cli_command() -> Command {
    Command::new("sshconfig-host")
        .version(env!("CARGO_PKG_VERSION"))
        .author("@karsyboy")
        .about("Resolve a host's effective settings from an OpenSSH client config file.")
        .arg_required_else_help(true)
        .arg(
            Arg::new("debug")
                .short('d')
                .long("debug")
                .help("Enable debug mode")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("path")
                .short('p')
                .long("path")
                .value_name("FILE")
                .help("SSH config file to read (default: /etc/ssh/ssh_config)"),
        )
        .arg(
            Arg::new("format")
                .short('f')
                .long("format")
                .value_name("FORMAT")
                .value_parser(OutputFormat::VARIANTS)
                .help("Output format"),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("Settings file to use instead of the standard locations"),
        )
        .arg(
            Arg::new("log_file")
                .long("log-file")
                .value_name("FILE")
                .help("Write debug output to FILE"),
        )
        .arg(Arg::new("host").help("Host to look up").required(true))
}

/// Parses command-line arguments using clap.
pub fn main_args() -> MainArgs {
    let matches = build_cli_command().get_matches();
    args_from_matches(&matches)
}

pub(crate) fn parse_main_args_from<I, T>(cmd: &Command, args: I) -> Result<MainArgs, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let matches = cmd.clone().try_get_matches_from(args)?;
    Ok(args_from_matches(&matches))
}

fn args_from_matches(matches: &ArgMatches) -> MainArgs {
    let path_arg = |id: &str| matches.get_one::<String>(id).map(|value| crate::ssh_config::expand_tilde(Path::new(value)));

    MainArgs {
        debug: matches.get_flag("debug"),
        path: path_arg("path"),
        // Values are restricted by the value parser, so parsing only fails on a clap change.
        format: matches.get_one::<String>("format").and_then(|value| value.parse().ok()),
        config: path_arg("config"),
        log_file: path_arg("log_file"),
        host: matches.get_one::<String>("host").cloned().unwrap_or_default(),
    }
}

#[cfg(test)]
#[path = "test/args.rs"]
mod tests;
