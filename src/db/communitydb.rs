// db/communitydb.rs
use async_trait::async_trait;

use super::db::{collections, DBClient};
use crate::models::communitymodel::{CommunityMember, CommunityPost, CommunityPostMedia};

#[async_trait]
pub trait CommunityExt {
    async fn save_member(&self, member: &CommunityMember) -> Result<(), sqlx::Error>;

    async fn get_members(
        &self,
        community_id: &str,
    ) -> Result<Vec<CommunityMember>, sqlx::Error>;

    async fn save_post(&self, post: &CommunityPost) -> Result<(), sqlx::Error>;

    /// A community's posts, newest first.
    async fn get_posts(&self, community_id: &str) -> Result<Vec<CommunityPost>, sqlx::Error>;

    async fn save_post_media(&self, media: &CommunityPostMedia) -> Result<(), sqlx::Error>;

    async fn get_media_for_posts(
        &self,
        post_ids: &[String],
    ) -> Result<Vec<CommunityPostMedia>, sqlx::Error>;
}

#[async_trait]
impl CommunityExt for DBClient {
    async fn save_member(&self, member: &CommunityMember) -> Result<(), sqlx::Error> {
        self.insert_document(collections::COMMUNITY_MEMBERS, &member.id, member)
            .await
    }

    async fn get_members(
        &self,
        community_id: &str,
    ) -> Result<Vec<CommunityMember>, sqlx::Error> {
        self.find_documents(
            collections::COMMUNITY_MEMBERS,
            &[("communityId", community_id)],
            false,
        )
        .await
    }

    async fn save_post(&self, post: &CommunityPost) -> Result<(), sqlx::Error> {
        self.insert_document(collections::COMMUNITY_POSTS, &post.id, post)
            .await
    }

    async fn get_posts(&self, community_id: &str) -> Result<Vec<CommunityPost>, sqlx::Error> {
        self.find_documents(
            collections::COMMUNITY_POSTS,
            &[("communityId", community_id)],
            true,
        )
        .await
    }

    async fn save_post_media(&self, media: &CommunityPostMedia) -> Result<(), sqlx::Error> {
        self.insert_document(collections::COMMUNITY_POST_MEDIA, &media.id, media)
            .await
    }

    async fn get_media_for_posts(
        &self,
        post_ids: &[String],
    ) -> Result<Vec<CommunityPostMedia>, sqlx::Error> {
        self.find_documents_in(
            collections::COMMUNITY_POST_MEDIA,
            "communityVariantDetailsId",
            post_ids,
        )
        .await
    }
}
