//! User accounts and per-viewer metadata.

use serde::{Deserialize, Serialize};

use super::common::Avatar;
use super::nullable;

/// Genius user account
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct User {
    /// API path (e.g., "/users/7")
    pub api_path: Option<String>,
    /// Avatar in several sizes
    pub avatar: Option<Avatar>,
    /// Profile header image URL
    pub header_image_url: Option<String>,
    /// Role label (e.g., "Verified Artist")
    pub human_readable_role_for_display: Option<String>,
    /// Genius user ID
    pub id: Option<u64>,
    /// IQ score, can be negative
    pub iq: Option<i64>,
    /// Login handle
    pub login: Option<String>,
    /// Display name
    pub name: Option<String>,
    /// Role key (e.g., "editor")
    pub role_for_display: Option<String>,
    /// Profile URL
    pub url: Option<String>,
    /// What the authenticated user may do with this account
    pub current_user_metadata: Option<UserMetadata>,
}

/// What the authenticated viewer may do with an entity
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct UserMetadata {
    /// Actions granted (e.g., "vote", "edit")
    #[serde(deserialize_with = "nullable")]
    pub permissions: Vec<String>,
    /// Actions explicitly withheld
    #[serde(deserialize_with = "nullable")]
    pub excluded_permissions: Vec<String>,
    /// Feature flags enabled for the viewer
    #[serde(deserialize_with = "nullable")]
    pub features: Vec<String>,
    /// IQ earned per moderation action
    pub iq_by_action: Option<IqByAction>,
    /// What the viewer has already done
    pub interactions: Option<UserInteractions>,
    /// Viewer's role on the entity
    pub relationships: Option<UserRelationships>,
}

impl UserMetadata {
    pub fn can(&self, permission: &str) -> bool {
        self.permissions.iter().any(|p| p == permission)
            && !self.excluded_permissions.iter().any(|p| p == permission)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct UserInteractions {
    /// Viewer follows the entity
    pub following: Option<bool>,
    /// Viewer cosigned
    pub cosign: Option<bool>,
    /// Viewer shared
    pub pyong: Option<bool>,
    /// "up", "down" or null
    pub vote: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct UserRelationships {
    /// Role pinned on the viewer (e.g., "artist")
    pub pinned_role: Option<String>,
}

/// IQ the viewer would earn per moderation action
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct IqByAction {
    /// Accepting an annotation
    pub accept: Option<IqAction>,
    /// Rejecting an annotation
    pub reject: Option<IqAction>,
    /// Deleting an annotation
    pub delete: Option<IqAction>,
    /// Editing song metadata
    pub edit_metadata: Option<IqAction>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct IqAction {
    pub primary: Option<Primary>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Primary {
    /// Applied to base, defaults to 1
    pub multiplier: Option<i64>,
    /// Base IQ for the action
    pub base: Option<f64>,
    /// Whether the viewer can earn it
    pub applicable: Option<bool>,
}

impl Primary {
    /// IQ actually awarded: base times multiplier, zero when not applicable.
    pub fn award(&self) -> f64 {
        if self.applicable != Some(true) {
            return 0.0;
        }
        self.base.unwrap_or_default() * self.multiplier.unwrap_or(1) as f64
    }
}
