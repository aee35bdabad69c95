// db/businessdb.rs
use async_trait::async_trait;

use super::db::{collections, DBClient};
use crate::models::businessmodel::BusinessProfile;

#[async_trait]
pub trait BusinessExt {
    /// Always inserts a fresh document. Nothing enforces one profile per
    /// user; callers relying on uniqueness get duplicates instead.
    async fn insert_business_profile(
        &self,
        profile: &BusinessProfile,
    ) -> Result<(), sqlx::Error>;

    /// First profile matching the `userId` filter, in store order.
    async fn get_business_profile_by_user(
        &self,
        user_id: &str,
    ) -> Result<Option<BusinessProfile>, sqlx::Error>;

    async fn update_business_profile(
        &self,
        profile: &BusinessProfile,
    ) -> Result<(), sqlx::Error>;

    async fn delete_business_profile(&self, profile_id: &str) -> Result<(), sqlx::Error>;

    /// How many products the user owns, from the ownership collection.
    async fn count_owned_products(&self, user_id: &str) -> Result<i64, sqlx::Error>;
}

#[async_trait]
impl BusinessExt for DBClient {
    async fn insert_business_profile(
        &self,
        profile: &BusinessProfile,
    ) -> Result<(), sqlx::Error> {
        self.insert_document(collections::BUSINESS_PROFILES, &profile.id, profile)
            .await
    }

    async fn get_business_profile_by_user(
        &self,
        user_id: &str,
    ) -> Result<Option<BusinessProfile>, sqlx::Error> {
        let profiles: Vec<BusinessProfile> = self
            .find_documents(
                collections::BUSINESS_PROFILES,
                &[("userId", user_id)],
                false,
            )
            .await?;
        Ok(profiles.into_iter().next())
    }

    async fn update_business_profile(
        &self,
        profile: &BusinessProfile,
    ) -> Result<(), sqlx::Error> {
        self.update_document(collections::BUSINESS_PROFILES, &profile.id, profile)
            .await
    }

    async fn delete_business_profile(&self, profile_id: &str) -> Result<(), sqlx::Error> {
        self.delete_document(collections::BUSINESS_PROFILES, profile_id)
            .await
    }

    async fn count_owned_products(&self, user_id: &str) -> Result<i64, sqlx::Error> {
        self.count_documents(collections::OWNERSHIP, &[("userId", user_id)])
            .await
    }
}
