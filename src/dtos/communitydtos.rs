// dtos/communitydtos.rs
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::communitymodel::{CommunityMember, CommunityPost, CommunityPostMedia};

#[derive(Validate, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddMemberDto {
    #[validate(length(min = 1, message = "User id is required"))]
    pub user_id: String,

    #[serde(default = "default_member_role")]
    pub role: String,
}

fn default_member_role() -> String {
    "member".to_string()
}

#[derive(Validate, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostMediaDto {
    #[validate(length(min = 1, message = "Media url is required"))]
    pub media_url: String,

    #[serde(default)]
    pub media_type: String,
}

#[derive(Validate, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostDto {
    #[validate(length(min = 1, message = "User id is required"))]
    pub user_id: String,

    #[serde(default)]
    pub title: String,

    #[validate(length(min = 1, message = "Post content is required"))]
    pub content: String,

    #[serde(default)]
    #[validate]
    pub media: Vec<CreatePostMediaDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommunityMemberView {
    #[serde(flatten)]
    pub member: CommunityMember,
    pub name: String,
    pub username: String,
    pub profile_image: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommunityPostView {
    #[serde(flatten)]
    pub post: CommunityPost,
    pub author_name: String,
    pub author_image: String,
    pub media: Vec<CommunityPostMedia>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MembersResponseDto {
    pub status: String,
    pub members: Vec<CommunityMemberView>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PostsResponseDto {
    pub status: String,
    pub posts: Vec<CommunityPostView>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PostResponseDto {
    pub status: String,
    pub post: CommunityPost,
}
