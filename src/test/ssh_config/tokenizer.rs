use super::{Directive, tokenize};
use crate::ssh_config::ParseErrorKind;

fn directives(text: &str) -> Vec<Directive> {
    tokenize(text).collect::<Result<Vec<_>, _>>().expect("tokenize")
}

fn args(directive: &Directive) -> Vec<&str> {
    directive.args.iter().map(String::as_str).collect()
}

#[test]
fn skips_blank_lines_and_comments() {
    let text = "\n# leading comment\n   \nHost example.com\n\t# indented comment\n  User git # trailing comment\n";
    let parsed = directives(text);

    assert_eq!(parsed.len(), 2);
    assert_eq!(parsed[0].keyword, "Host");
    assert_eq!(parsed[0].line, 4);
    assert_eq!(parsed[1].keyword, "User");
    assert_eq!(args(&parsed[1]), vec!["git"]);
    assert_eq!(parsed[1].line, 6);
}

#[test]
fn splits_on_whitespace_runs_and_keeps_keyword_case() {
    let parsed = directives("  LocalForward \t 8080   localhost:80\n");
    assert_eq!(parsed[0].keyword, "LocalForward");
    assert_eq!(args(&parsed[0]), vec!["8080", "localhost:80"]);
}

#[test]
fn accepts_equals_separator() {
    let parsed = directives("User=git\nPort = 2222\nHostName= a.example\n");
    assert_eq!(parsed[0].keyword, "User");
    assert_eq!(args(&parsed[0]), vec!["git"]);
    assert_eq!(parsed[1].keyword, "Port");
    assert_eq!(args(&parsed[1]), vec!["2222"]);
    assert_eq!(args(&parsed[2]), vec!["a.example"]);
}

#[test]
fn quoted_arguments_keep_whitespace_and_hash() {
    let parsed = directives("ProxyCommand \"ssh -W %h:%p bastion\" # via bastion\nIdentityFile \"/keys/my #1 key\"\n");
    assert_eq!(args(&parsed[0]), vec!["ssh -W %h:%p bastion"]);
    assert_eq!(args(&parsed[1]), vec!["/keys/my #1 key"]);
}

#[test]
fn hash_inside_a_token_is_literal() {
    let parsed = directives("SetEnv COLOR=#fff\n");
    assert_eq!(args(&parsed[0]), vec!["COLOR=#fff"]);
}

#[test]
fn keyword_without_arguments_is_an_error() {
    let err = tokenize("Host example.com\n  User git\nThisIsBad\n")
        .find_map(Result::err)
        .expect("error for bare keyword");
    assert_eq!(err.line, 3);
    assert_eq!(err.text, "ThisIsBad");
    assert_eq!(err.kind, ParseErrorKind::MissingArgument);
}

#[test]
fn keyword_with_only_a_comment_is_an_error() {
    let err = tokenize("User # nobody\n").find_map(Result::err).expect("error");
    assert_eq!(err.kind, ParseErrorKind::MissingArgument);
    assert_eq!(err.line, 1);
}

#[test]
fn unterminated_quote_is_an_error() {
    let err = tokenize("\nProxyCommand \"ssh bastion\n").find_map(Result::err).expect("error");
    assert_eq!(err.kind, ParseErrorKind::UnterminatedQuote);
    assert_eq!(err.line, 2);
}

#[test]
fn missing_keyword_is_an_error() {
    let err = tokenize("=yes\n").find_map(Result::err).expect("error");
    assert_eq!(err.kind, ParseErrorKind::MissingKeyword);
}

#[test]
fn iteration_stops_after_the_first_error() {
    let items: Vec<_> = tokenize("Bad\nAlsoBad\nUser git\n").collect();
    assert_eq!(items.len(), 1);
    assert!(items[0].is_err());
}

#[test]
fn tokenizing_again_restarts_from_the_top() {
    let text = "Host a\nUser one\n";
    let first: Vec<_> = tokenize(text).collect();
    let second: Vec<_> = tokenize(text).collect();
    assert_eq!(first, second);

    let mut tokenizer = tokenize(text);
    let fork = tokenizer.clone();
    assert_eq!(tokenizer.next(), fork.clone().next());
}

#[test]
fn directive_keyword_check_ignores_case() {
    let parsed = directives("HOST example.com\n");
    assert!(parsed[0].is("host"));
    assert!(!parsed[0].is("hostname"));
}
