// Domain module tests.

use super::*;

#[test]
fn test_normalize_domain_basic() {
    assert_eq!(normalize_domain("example.com").unwrap(), "example.com");
}

#[test]
fn test_normalize_domain_trims_and_lowercases() {
    assert_eq!(normalize_domain("  Example.COM \n").unwrap(), "example.com");
}

#[test]
fn test_normalize_domain_strips_trailing_dot() {
    assert_eq!(normalize_domain("example.com.").unwrap(), "example.com");
}

#[test]
fn test_normalize_domain_keeps_subdomains() {
    assert_eq!(
        normalize_domain("mail.sub.example.co.uk").unwrap(),
        "mail.sub.example.co.uk"
    );
}

#[test]
fn test_normalize_domain_accepts_url() {
    assert_eq!(
        normalize_domain("https://www.Example.com:8443/path?q=1").unwrap(),
        "www.example.com"
    );
}

#[test]
fn test_normalize_domain_allows_underscore_labels() {
    assert_eq!(
        normalize_domain("_dmarc.example.com").unwrap(),
        "_dmarc.example.com"
    );
}

#[test]
fn test_normalize_domain_empty() {
    assert!(matches!(normalize_domain(""), Err(InputError::Empty)));
    assert!(matches!(normalize_domain("   "), Err(InputError::Empty)));
    assert!(matches!(normalize_domain("."), Err(InputError::Empty)));
}

#[test]
fn test_normalize_domain_rejects_whitespace_inside() {
    assert!(matches!(
        normalize_domain("exa mple.com"),
        Err(InputError::Invalid { .. })
    ));
}

#[test]
fn test_normalize_domain_rejects_empty_label() {
    assert!(matches!(
        normalize_domain("example..com"),
        Err(InputError::Invalid { .. })
    ));
}

#[test]
fn test_normalize_domain_rejects_hyphen_edges() {
    assert!(normalize_domain("-example.com").is_err());
    assert!(normalize_domain("example-.com").is_err());
    assert!(normalize_domain("ex-ample.com").is_ok());
}

#[test]
fn test_normalize_domain_rejects_long_label() {
    let label = "a".repeat(64);
    assert!(normalize_domain(&format!("{label}.com")).is_err());
    let label = "a".repeat(63);
    assert!(normalize_domain(&format!("{label}.com")).is_ok());
}

#[test]
fn test_normalize_domain_rejects_long_name() {
    let name = vec!["a".repeat(60); 5].join(".");
    assert!(name.len() > 253);
    assert!(normalize_domain(&name).is_err());
}
