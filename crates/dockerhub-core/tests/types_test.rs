//! Serde behavior tests for the Hub wire models

use dockerhub_core::{BasicAuth, Hook, JwtToken, Paged, Repository, Tag, Webhook, WebhookInput};
use pretty_assertions::assert_eq;

#[test]
fn test_repository_decodes_from_hub_payload() {
    let json = r#"{
        "user": "acme",
        "name": "widget",
        "namespace": "acme",
        "repository_type": "image",
        "status": 1,
        "description": "Widget images",
        "is_private": false,
        "is_automated": false,
        "can_edit": true,
        "star_count": 7,
        "pull_count": 12345,
        "last_updated": "2020-10-02T01:18:47.598606Z",
        "is_migrated": false,
        "has_starred": false,
        "full_description": "Full text",
        "affiliation": "owner",
        "permissions": {"read": true, "write": true, "admin": false}
    }"#;

    let repo: Repository = serde_json::from_str(json).unwrap();
    assert_eq!(repo.namespace, "acme");
    assert_eq!(repo.pull_count, 12345);
    assert_eq!(repo.full_description.as_deref(), Some("Full text"));
    assert!(repo.permissions.write);
    assert!(!repo.permissions.admin);
}

#[test]
fn test_response_models_tolerate_partial_payloads() {
    // The server may omit fields; missing ones take their default value.
    let repo: Repository = serde_json::from_str(r#"{"name":"widget"}"#).unwrap();
    assert_eq!(repo.name, "widget");
    assert_eq!(repo.star_count, 0);
    assert_eq!(repo.full_description, None);

    let webhook: Webhook = serde_json::from_str(r#"{"id":1,"name":"notify"}"#).unwrap();
    assert_eq!(webhook.id, 1);
    assert!(webhook.hooks.is_empty());

    let tag: Tag = serde_json::from_str(r#"{"name":"latest"}"#).unwrap();
    assert_eq!(tag.name, "latest");
    assert!(tag.images.is_empty());
}

#[test]
fn test_tag_decodes_nested_images() {
    let json = r#"{
        "id": 3,
        "name": "latest",
        "full_size": 133285153,
        "images": [
            {"architecture": "amd64", "digest": "sha256:abc", "os": "linux", "size": 133285153},
            {"architecture": "arm64", "variant": "v8", "digest": "sha256:def", "os": "linux", "size": 128000000}
        ]
    }"#;

    let tag: Tag = serde_json::from_str(json).unwrap();
    assert_eq!(tag.images.len(), 2);
    assert_eq!(tag.images[0].architecture, "amd64");
    assert_eq!(tag.images[1].variant.as_deref(), Some("v8"));
}

#[test]
fn test_webhook_list_page() {
    let json = r#"{
        "count": 2,
        "next": null,
        "previous": null,
        "results": [
            {"id": 1, "name": "first", "hooks": [{"id": 10, "hook_url": "https://example.com/a"}]},
            {"id": 2, "name": "second"}
        ]
    }"#;

    let paged: Paged<Webhook> = serde_json::from_str(json).unwrap();
    assert_eq!(paged.page.count, 2);
    assert_eq!(paged.results.len(), 2);
    assert_eq!(paged.results[0].hooks[0].hook_url, "https://example.com/a");
}

#[test]
fn test_basic_auth_wire_shape() {
    let credentials = BasicAuth {
        username: "alice".to_string(),
        password: "secret".to_string(),
    };
    assert_eq!(
        serde_json::to_string(&credentials).unwrap(),
        r#"{"username":"alice","password":"secret"}"#
    );
}

#[test]
fn test_jwt_token_wire_shape() {
    let token: JwtToken = serde_json::from_str(r#"{"token":"abc123"}"#).unwrap();
    assert_eq!(token.token, "abc123");
}

#[test]
fn test_json_encoding_does_not_html_escape() {
    // Payload bytes must be the plain UTF-8 encoding: no &lt;-style or
    // <-style escaping of <, >, &.
    let input = WebhookInput {
        name: "a<b> & \"c\"".to_string(),
    };
    let encoded = serde_json::to_string(&input).unwrap();
    assert_eq!(encoded, r#"{"name":"a<b> & \"c\""}"#);

    let decoded: WebhookInput = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded.name, input.name);
}

#[test]
fn test_hook_round_trip() {
    let json = r#"{
        "id": 42,
        "creator": "alice",
        "last_updater": "bob",
        "hook_url": "https://example.com/notify",
        "date_added": "2021-03-04T05:06:07Z",
        "last_updated": "2021-03-04T05:06:08Z"
    }"#;

    let hook: Hook = serde_json::from_str(json).unwrap();
    assert_eq!(hook.id, 42);
    assert_eq!(hook.hook_url, "https://example.com/notify");

    let reencoded = serde_json::to_string(&hook).unwrap();
    let again: Hook = serde_json::from_str(&reencoded).unwrap();
    assert_eq!(hook, again);
}
