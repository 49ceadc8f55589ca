use super::parse;
use crate::ssh_config::{ConfigFile, ParseErrorKind, Pattern};

const EXAMPLE_CONFIG: &str = "
Host example.com
  ControlMaster auto
  ControlPersist yes
  User git

Host vaultstack-servers-0.centralus.cloudapp.azure.com
  StrictHostKeyChecking no
";

fn pattern_texts(patterns: &[Pattern]) -> Vec<String> {
    patterns.iter().map(ToString::to_string).collect()
}

#[test]
fn groups_params_into_blocks_in_declaration_order() {
    let config = parse(EXAMPLE_CONFIG).expect("parse config");
    let blocks = config.blocks();

    assert_eq!(blocks.len(), 3);
    assert!(blocks[0].is_implicit());
    assert!(blocks[0].params().is_empty());

    assert_eq!(pattern_texts(blocks[1].patterns()), vec!["example.com"]);
    let keywords: Vec<&str> = blocks[1].params().iter().map(|param| param.keyword.as_str()).collect();
    assert_eq!(keywords, vec!["ControlMaster", "ControlPersist", "User"]);
    assert_eq!(blocks[1].line(), 2);

    assert_eq!(pattern_texts(blocks[2].patterns()), vec!["vaultstack-servers-0.centralus.cloudapp.azure.com"]);
    assert_eq!(blocks[2].params()[0].value(), "no");
}

#[test]
fn params_before_first_host_go_to_the_implicit_block() {
    let config = parse("User everyone\nCompression yes\nHost a\n  Port 22\n").expect("parse config");
    let implicit = &config.blocks()[0];

    assert!(implicit.is_implicit());
    assert_eq!(implicit.params().len(), 2);
    assert!(implicit.matches("anything.at.all"));
    assert_eq!(config.host_blocks().count(), 1);
}

#[test]
fn host_keyword_is_case_insensitive_and_splits_patterns() {
    let config = parse("hOsT web-* !web-test db\n  User ops\n").expect("parse config");
    let block = &config.blocks()[1];

    assert_eq!(pattern_texts(block.patterns()), vec!["web-*", "!web-test", "db"]);
    assert!(!block.patterns()[0].is_negated());
    assert!(block.patterns()[1].is_negated());
    assert_eq!(block.patterns()[1].glob().as_str(), "web-test");
}

#[test]
fn keeps_multi_argument_params_and_duplicate_keywords() {
    let config = parse("Host a\n  LocalForward 8080 localhost:80\n  localforward 9090 localhost:90\n").expect("parse config");
    let params = config.blocks()[1].params();

    assert_eq!(params.len(), 2);
    assert_eq!(params[0].args, vec!["8080", "localhost:80"]);
    assert_eq!(params[0].value(), "8080 localhost:80");
    assert_eq!(params[1].keyword, "localforward");
}

#[test]
fn empty_input_has_only_the_implicit_block() {
    let config = parse("").expect("parse empty");
    assert_eq!(config.blocks().len(), 1);
    assert!(config.blocks()[0].is_implicit());
}

#[test]
fn malformed_line_aborts_the_parse() {
    let err = parse("Host example.com\n  User git\n\nThisIsBad\n").expect_err("malformed line");
    assert_eq!(err.line, 4);
    assert_eq!(err.text, "ThisIsBad");
    assert_eq!(err.kind, ParseErrorKind::MissingArgument);
    assert!(err.to_string().contains("line 4"));
}

#[test]
fn host_without_patterns_is_an_error() {
    let err = parse("Host\n").expect_err("bare Host");
    assert_eq!(err.kind, ParseErrorKind::MissingArgument);
}

#[test]
fn parses_through_from_str() {
    let config: ConfigFile = EXAMPLE_CONFIG.parse().expect("parse config");
    assert_eq!(config, parse(EXAMPLE_CONFIG).expect("parse config"));
}

#[test]
fn uncompilable_host_pattern_aborts_the_parse() {
    let content = format!("Host * !{}\n  User wildcard\n", "?".repeat(300_000));
    let err = parse(&content).expect_err("oversized negated glob");

    assert_eq!(err.kind, ParseErrorKind::InvalidPattern);
    assert_eq!(err.line, 1);
    assert!(err.text.starts_with("Host * !"));
}

#[test]
fn valid_host_line_after_bad_line_is_not_reached() {
    let content = format!("Host ok\n  User a\nHost {}\n  User b\n", "?".repeat(300_000));
    let err = parse(&content).expect_err("oversized glob");
    assert_eq!(err.line, 3);
}
