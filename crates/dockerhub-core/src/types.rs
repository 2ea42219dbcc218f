//! Docker Hub Model Types
//!
//! Serde models for the Hub v2 resources handled by this workspace:
//! credentials, repositories, tags, and webhooks.
//!
//! Response models decode leniently: every field falls back to its default
//! when absent, so partial server payloads (and the empty objects some
//! endpoints return) still deserialize.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Username/password pair sent to the login endpoint. Input-only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BasicAuth {
    pub username: String,
    pub password: String,
}

/// Bearer token returned by a successful login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JwtToken {
    pub token: String,
}

/// A Docker Hub image repository
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Repository {
    pub user: String,
    pub name: String,
    pub namespace: String,
    pub repository_type: String,
    pub status: i64,
    pub description: String,
    pub is_private: bool,
    pub is_automated: bool,
    pub can_edit: bool,
    pub star_count: i64,
    pub pull_count: i64,
    pub last_updated: DateTime<Utc>,
    pub is_migrated: bool,
    pub has_starred: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_description: Option<String>,
    pub affiliation: String,
    pub permissions: Permissions,
}

/// Caller's permissions on a repository
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Permissions {
    pub read: bool,
    pub write: bool,
    pub admin: bool,
}

/// An image tag within a repository
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tag {
    pub creator: i64,
    pub id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_id: Option<String>,
    pub images: Vec<TagImage>,
    pub last_updated: DateTime<Utc>,
    pub last_updater: i64,
    pub last_updater_username: String,
    pub name: String,
    pub repository: i64,
    pub full_size: i64,
    pub v2: bool,
}

/// One platform image behind a tag
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TagImage {
    pub architecture: String,
    pub features: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant: Option<String>,
    pub digest: String,
    pub os: String,
    pub os_features: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub os_version: Option<String>,
    pub size: i64,
}

/// A repository webhook
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Webhook {
    pub id: i64,
    pub name: String,
    pub active: bool,
    pub expect_final_callback: bool,
    pub creator: String,
    pub last_updated: DateTime<Utc>,
    pub last_updater: String,
    pub hooks: Vec<Hook>,
}

/// Payload for creating or renaming a webhook
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebhookInput {
    pub name: String,
}

/// A delivery URL attached to a webhook
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Hook {
    pub id: i64,
    pub creator: String,
    pub last_updater: String,
    pub hook_url: String,
    pub date_added: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}

/// Payload for creating or updating a delivery URL
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HookInput {
    pub hook_url: String,
}
