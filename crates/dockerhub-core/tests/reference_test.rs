//! RepoRef parsing and validation tests

use dockerhub_core::reference::{DEFAULT_NAMESPACE, MAX_COMPONENT_LENGTH};
use dockerhub_core::{RefError, RepoRef};
use pretty_assertions::assert_eq;

#[test]
fn test_parse_bare_name_uses_default_namespace() {
    let repo = RepoRef::parse("nginx").unwrap();
    assert_eq!(repo.namespace(), DEFAULT_NAMESPACE);
    assert_eq!(repo.name(), "nginx");
    assert_eq!(repo.to_string(), "library/nginx");
}

#[test]
fn test_parse_namespaced_reference() {
    let repo = RepoRef::parse("acme/widget").unwrap();
    assert_eq!(repo.namespace(), "acme");
    assert_eq!(repo.name(), "widget");
    assert_eq!(repo.to_string(), "acme/widget");
}

#[test]
fn test_parse_allows_dots_dashes_underscores() {
    for reference in ["a-b/c_d", "a.b/c.d", "0x/1-2_3.4"] {
        assert!(RepoRef::parse(reference).is_ok(), "{reference} should parse");
    }
}

#[test]
fn test_parse_rejects_empty() {
    assert_eq!(RepoRef::parse(""), Err(RefError::Empty));
}

#[test]
fn test_parse_rejects_extra_segments() {
    assert_eq!(
        RepoRef::parse("a/b/c"),
        Err(RefError::TooManySegments("a/b/c".to_string()))
    );
}

#[test]
fn test_parse_rejects_empty_components() {
    assert_eq!(
        RepoRef::parse("/name"),
        Err(RefError::EmptyComponent("namespace"))
    );
    assert_eq!(RepoRef::parse("ns/"), Err(RefError::EmptyComponent("name")));
}

#[test]
fn test_parse_rejects_invalid_characters() {
    match RepoRef::parse("Acme/widget") {
        Err(RefError::InvalidCharacter {
            component, found, ..
        }) => {
            assert_eq!(component, "namespace");
            assert_eq!(found, 'A');
        }
        other => panic!("expected InvalidCharacter, got {other:?}"),
    }
    assert!(RepoRef::parse("acme/wid get").is_err());
    assert!(RepoRef::parse("acme/widget:latest").is_err());
}

#[test]
fn test_parse_rejects_overlong_component() {
    let name = "a".repeat(MAX_COMPONENT_LENGTH + 1);
    match RepoRef::parse(&name) {
        Err(RefError::TooLong { component, .. }) => assert_eq!(component, "name"),
        other => panic!("expected TooLong, got {other:?}"),
    }
}

#[test]
fn test_from_str_round_trip() {
    let repo: RepoRef = "library/redis".parse().unwrap();
    let again: RepoRef = repo.to_string().parse().unwrap();
    assert_eq!(repo, again);
}
