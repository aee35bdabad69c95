// db/userdb.rs
use async_trait::async_trait;

use super::db::{collections, DBClient};
use crate::models::usermodel::{
    Education, Profile, ProfileImage, ProfileImageSetAs, User, WorkExperience,
};

#[async_trait]
pub trait UserExt {
    async fn save_user(&self, user: &User) -> Result<(), sqlx::Error>;

    async fn get_user(&self, user_id: &str) -> Result<Option<User>, sqlx::Error>;

    async fn get_users_by_ids(&self, user_ids: &[String]) -> Result<Vec<User>, sqlx::Error>;

    async fn save_profile(&self, profile: &Profile) -> Result<(), sqlx::Error>;

    async fn get_profile(&self, user_id: &str) -> Result<Option<Profile>, sqlx::Error>;

    async fn save_profile_image(&self, image: &ProfileImage) -> Result<(), sqlx::Error>;

    async fn save_profile_image_set_as(
        &self,
        set_as: &ProfileImageSetAs,
    ) -> Result<(), sqlx::Error>;

    async fn get_profile_images_for_users(
        &self,
        user_ids: &[String],
    ) -> Result<Vec<ProfileImage>, sqlx::Error>;

    async fn get_image_roles_for_users(
        &self,
        user_ids: &[String],
    ) -> Result<Vec<ProfileImageSetAs>, sqlx::Error>;

    async fn save_education(&self, education: &Education) -> Result<(), sqlx::Error>;

    async fn get_educations_for_users(
        &self,
        user_ids: &[String],
    ) -> Result<Vec<Education>, sqlx::Error>;

    async fn save_work_experience(
        &self,
        experience: &WorkExperience,
    ) -> Result<(), sqlx::Error>;

    async fn get_work_experiences_for_users(
        &self,
        user_ids: &[String],
    ) -> Result<Vec<WorkExperience>, sqlx::Error>;
}

#[async_trait]
impl UserExt for DBClient {
    async fn save_user(&self, user: &User) -> Result<(), sqlx::Error> {
        self.insert_document(collections::USERS, &user.id, user).await
    }

    async fn get_user(&self, user_id: &str) -> Result<Option<User>, sqlx::Error> {
        self.get_document(collections::USERS, user_id).await
    }

    async fn get_users_by_ids(&self, user_ids: &[String]) -> Result<Vec<User>, sqlx::Error> {
        self.find_documents_in(collections::USERS, "id", user_ids).await
    }

    async fn save_profile(&self, profile: &Profile) -> Result<(), sqlx::Error> {
        self.insert_document(collections::PROFILES, &profile.id, profile)
            .await
    }

    async fn get_profile(&self, user_id: &str) -> Result<Option<Profile>, sqlx::Error> {
        let profiles: Vec<Profile> = self
            .find_documents(collections::PROFILES, &[("userId", user_id)], false)
            .await?;
        Ok(profiles.into_iter().next())
    }

    async fn save_profile_image(&self, image: &ProfileImage) -> Result<(), sqlx::Error> {
        self.insert_document(collections::PROFILE_IMAGES, &image.id, image)
            .await
    }

    async fn save_profile_image_set_as(
        &self,
        set_as: &ProfileImageSetAs,
    ) -> Result<(), sqlx::Error> {
        self.insert_document(collections::PROFILE_IMAGE_SET_AS, &set_as.id, set_as)
            .await
    }

    async fn get_profile_images_for_users(
        &self,
        user_ids: &[String],
    ) -> Result<Vec<ProfileImage>, sqlx::Error> {
        self.find_documents_in(collections::PROFILE_IMAGES, "userId", user_ids)
            .await
    }

    async fn get_image_roles_for_users(
        &self,
        user_ids: &[String],
    ) -> Result<Vec<ProfileImageSetAs>, sqlx::Error> {
        self.find_documents_in(collections::PROFILE_IMAGE_SET_AS, "userId", user_ids)
            .await
    }

    async fn save_education(&self, education: &Education) -> Result<(), sqlx::Error> {
        self.insert_document(collections::EDUCATIONS, &education.id, education)
            .await
    }

    async fn get_educations_for_users(
        &self,
        user_ids: &[String],
    ) -> Result<Vec<Education>, sqlx::Error> {
        self.find_documents_in(collections::EDUCATIONS, "userId", user_ids)
            .await
    }

    async fn save_work_experience(
        &self,
        experience: &WorkExperience,
    ) -> Result<(), sqlx::Error> {
        self.insert_document(collections::WORK_EXPERIENCES, &experience.id, experience)
            .await
    }

    async fn get_work_experiences_for_users(
        &self,
        user_ids: &[String],
    ) -> Result<Vec<WorkExperience>, sqlx::Error> {
        self.find_documents_in(collections::WORK_EXPERIENCES, "userId", user_ids)
            .await
    }
}
