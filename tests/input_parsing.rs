//! Tests for obtaining the domain and parsing selector overrides.

use std::io::Cursor;

use mail_auth_check::error_handling::InputError;
use mail_auth_check::input::{obtain_domain, parse_selectors, DomainSource, DOMAIN_PROMPT};
use mail_auth_check::normalize_domain;

#[test]
fn test_selector_override_trims_and_drops_empty_tokens() {
    assert_eq!(parse_selectors("sel1, sel2 ,"), vec!["sel1", "sel2"]);
}

#[test]
fn test_selector_override_single_value() {
    assert_eq!(parse_selectors("selector1"), vec!["selector1"]);
}

#[test]
fn test_selector_override_only_separators_falls_back() {
    assert_eq!(parse_selectors(",,,"), vec!["default", "google"]);
}

#[test]
fn test_prompt_reads_first_line_only() {
    let mut prompt = Vec::new();
    let domain = obtain_domain(
        DomainSource::Prompt,
        Cursor::new("first.example\nsecond.example\n"),
        &mut prompt,
    )
    .expect("Should read domain from prompt");
    assert_eq!(domain, "first.example");
    assert_eq!(String::from_utf8(prompt).unwrap(), DOMAIN_PROMPT);
}

#[test]
fn test_prompt_without_input_is_missing() {
    let err = obtain_domain(DomainSource::Prompt, Cursor::new(""), Vec::new()).unwrap_err();
    assert!(matches!(err, InputError::Missing));
    assert!(err.to_string().contains("-d/--domain"));
}

#[test]
fn test_flag_with_invalid_domain_is_rejected() {
    let err = obtain_domain(
        DomainSource::Flag("not a domain".to_string()),
        Cursor::new(""),
        Vec::new(),
    )
    .unwrap_err();
    assert!(matches!(err, InputError::Invalid { .. }));
}

#[test]
fn test_normalize_domain_from_url() {
    assert_eq!(
        normalize_domain("http://Mail.Example.org/").unwrap(),
        "mail.example.org"
    );
}
