use super::{ConfigLoader, parse_config};
use crate::config::{ConfigError, OutputFormat};
use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

fn temp_path(name: &str) -> PathBuf {
    let nanos = SystemTime::now().duration_since(UNIX_EPOCH).expect("clock drift").as_nanos();
    std::env::temp_dir().join(format!("sshconfig_host_settings_{name}_{nanos}.yaml"))
}

#[test]
fn parses_all_settings() {
    let config = parse_config("settings:\n  ssh_config_path: /home/me/.ssh/config\n  debug_mode: true\n  output: json\n").expect("parse settings");

    assert_eq!(config.settings.ssh_config_path, Some(PathBuf::from("/home/me/.ssh/config")));
    assert!(config.settings.debug_mode);
    assert_eq!(config.settings.output, OutputFormat::Json);
}

#[test]
fn missing_fields_fall_back_to_defaults() {
    let config = parse_config("settings:\n  output: map\n").expect("parse settings");
    assert_eq!(config.settings.ssh_config_path, None);
    assert!(!config.settings.debug_mode);
    assert_eq!(config.settings.output, OutputFormat::Map);

    let empty = parse_config("  \n").expect("parse blank settings");
    assert_eq!(empty.settings.output, OutputFormat::Text);
}

#[test]
fn rejects_unknown_fields_and_bad_values() {
    assert!(matches!(parse_config("settings:\n  colour: red\n"), Err(ConfigError::ParseError(_))));
    assert!(matches!(parse_config("settings:\n  output: xml\n"), Err(ConfigError::ParseError(_))));
    assert!(matches!(parse_config("palette: {}\n"), Err(ConfigError::ParseError(_))));
}

#[test]
fn explicit_settings_file_must_exist() {
    let path = temp_path("missing");
    assert!(matches!(ConfigLoader::new(Some(path)), Err(ConfigError::MissingFile(_))));
}

#[test]
fn loads_explicit_settings_file_and_records_its_path() {
    let path = temp_path("explicit");
    fs::write(&path, "settings:\n  debug_mode: true\n").expect("write settings");

    let loader = ConfigLoader::new(Some(path.clone())).expect("loader");
    assert_eq!(loader.config_path(), Some(&path));

    let config = loader.load_config().expect("load settings");
    assert!(config.settings.debug_mode);
    assert_eq!(config.metadata.config_path, Some(path.clone()));

    let _ = fs::remove_file(path);
}

#[test]
fn output_format_parses_case_insensitively() {
    assert_eq!("TEXT".parse::<OutputFormat>(), Ok(OutputFormat::Text));
    assert_eq!("json".parse::<OutputFormat>(), Ok(OutputFormat::Json));
    assert!("yaml".parse::<OutputFormat>().is_err());
    assert_eq!(OutputFormat::Map.to_string(), "map");
}
