// models/communitymodel.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CommunityMember {
    pub id: String,
    pub community_id: String,
    pub user_id: String,
    #[serde(default)]
    pub role: String,
    pub joined_at: DateTime<Utc>,
}

/// A community post (`communityVariantDetails` in the store).
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CommunityPost {
    pub id: String,
    pub community_id: String,
    pub user_id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Media attached to a post (`communityVariantDetailsSummary`). Related to
/// posts 1-N by foreign key; there is no cascade delete.
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CommunityPostMedia {
    pub id: String,
    #[serde(rename = "communityVariantDetailsId")]
    pub post_id: String,
    pub media_url: String,
    pub media_type: String,
}
