// service/business_service.rs
use std::sync::Arc;

use chrono::Utc;

use crate::{
    db::{
        businessdb::BusinessExt,
        db::{new_document_id, DBClient},
    },
    dtos::businessdtos::{BusinessAccountDto, CreateBusinessAccountDto, UpdateBusinessAccountDto},
    models::businessmodel::{BusinessContact, BusinessInfo, BusinessProfile, BusinessStatus},
    service::error::ServiceError,
};

/// Contact-email deliverability check. Not wired up yet; accepts everything.
fn is_valid_contact_email(_email: &str) -> bool {
    true
}

#[derive(Debug, Clone)]
pub struct BusinessService {
    db_client: Arc<DBClient>,
}

impl BusinessService {
    pub fn new(db_client: Arc<DBClient>) -> Self {
        Self { db_client }
    }

    /// Composite account view. Always succeeds: a missing profile yields the
    /// zero-value composite, so callers must check the raw profile fetch to
    /// distinguish "no business account". `totalProducts` is recomputed from
    /// the ownership collection, overriding whatever the document stored.
    pub async fn get_business_account(
        &self,
        user_id: &str,
    ) -> Result<BusinessAccountDto, ServiceError> {
        let profile = self.db_client.get_business_profile_by_user(user_id).await?;

        match profile {
            Some(profile) => {
                let total_products = self.db_client.count_owned_products(user_id).await?;
                Ok(BusinessAccountDto::from_profile(profile, total_products))
            }
            None => Ok(BusinessAccountDto::empty(user_id)),
        }
    }

    /// Always inserts. A second call for the same user creates a second
    /// profile document; nothing here checks for an existing one.
    pub async fn create_business_account(
        &self,
        dto: CreateBusinessAccountDto,
    ) -> Result<BusinessProfile, ServiceError> {
        if !is_valid_contact_email(&dto.contact_email) {
            return Err(ServiceError::Validation(
                "Contact email is not valid".to_string(),
            ));
        }

        let now = Utc::now();
        let profile = BusinessProfile {
            id: new_document_id(),
            user_id: dto.user_id,
            profile: BusinessInfo {
                name: dto.name,
                established: dto.established,
                description: dto.description,
                location: dto.location,
                contact: BusinessContact {
                    email: dto.contact_email,
                    phone: dto.contact_phone,
                },
            },
            metrics: Default::default(),
            feedback: Default::default(),
            rating: Default::default(),
            categories: dto.categories,
            status: BusinessStatus::Pending,
            created_at: now,
            updated_at: now,
        };

        self.db_client.insert_business_profile(&profile).await?;
        tracing::info!(
            "Created business profile {} for user {}",
            profile.id,
            profile.user_id
        );
        Ok(profile)
    }

    /// Re-queries the profile by `userId` each call rather than addressing
    /// a stable document id.
    pub async fn update_business_account(
        &self,
        user_id: &str,
        dto: UpdateBusinessAccountDto,
    ) -> Result<BusinessProfile, ServiceError> {
        let mut profile = self
            .db_client
            .get_business_profile_by_user(user_id)
            .await?
            .ok_or_else(|| ServiceError::BusinessProfileNotFound(user_id.to_string()))?;

        if let Some(name) = dto.name {
            profile.profile.name = name;
        }
        if let Some(established) = dto.established {
            profile.profile.established = established;
        }
        if let Some(description) = dto.description {
            profile.profile.description = description;
        }
        if let Some(location) = dto.location {
            profile.profile.location = location;
        }
        if let Some(contact_email) = dto.contact_email {
            profile.profile.contact.email = contact_email;
        }
        if let Some(contact_phone) = dto.contact_phone {
            profile.profile.contact.phone = contact_phone;
        }
        if let Some(categories) = dto.categories {
            profile.categories = categories;
        }
        if let Some(status) = dto.status {
            profile.status = status;
        }
        profile.updated_at = Utc::now();

        self.db_client.update_business_profile(&profile).await?;
        Ok(profile)
    }

    pub async fn delete_business_account(&self, user_id: &str) -> Result<(), ServiceError> {
        let profile = self
            .db_client
            .get_business_profile_by_user(user_id)
            .await?
            .ok_or_else(|| ServiceError::BusinessProfileNotFound(user_id.to_string()))?;

        self.db_client.delete_business_profile(&profile.id).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::db::collections;
    use crate::models::businessmodel::BusinessProfile;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn test_service() -> (BusinessService, Arc<DBClient>) {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        let db_client = Arc::new(DBClient::new(pool));
        db_client.init_collections().await.unwrap();

        (BusinessService::new(db_client.clone()), db_client)
    }

    fn account_dto(user_id: &str) -> CreateBusinessAccountDto {
        CreateBusinessAccountDto {
            user_id: user_id.to_string(),
            name: "Walnut Works".to_string(),
            established: "2019".to_string(),
            description: "Handmade furniture".to_string(),
            location: "Leeds".to_string(),
            contact_email: "hello@walnut.example".to_string(),
            contact_phone: "".to_string(),
            categories: vec!["furniture".to_string()],
        }
    }

    #[tokio::test]
    async fn missing_profile_yields_zero_value_composite() {
        let (service, _db) = test_service().await;

        let account = service.get_business_account("nobody").await.unwrap();

        assert_eq!(account.user_id, "nobody");
        assert_eq!(account.name, "");
        assert_eq!(account.established, "");
        assert_eq!(account.description, "");
        assert_eq!(account.location, "");
        assert_eq!(account.contact_email, "");
        assert_eq!(account.status, "");
        assert_eq!(account.metrics.total_products, 0);
        assert_eq!(account.metrics.total_sales, 0);
        assert_eq!(account.metrics.avg_rating, 0.0);
        assert_eq!(account.metrics.response_rate, 0.0);
        assert_eq!(account.rating.count, 0);
        assert!(account.categories.is_empty());
    }

    #[tokio::test]
    async fn existing_profile_is_projected_into_the_composite() {
        let (service, _db) = test_service().await;

        service.create_business_account(account_dto("u1")).await.unwrap();
        let account = service.get_business_account("u1").await.unwrap();

        assert_eq!(account.name, "Walnut Works");
        assert_eq!(account.contact_email, "hello@walnut.example");
        assert_eq!(account.status, "pending");
    }

    // Known defect kept on purpose: creation always inserts, so nothing
    // stops a second profile for the same user. Flagged for product review.
    #[tokio::test]
    async fn repeated_creation_produces_duplicate_profiles() {
        let (service, db) = test_service().await;

        service.create_business_account(account_dto("u1")).await.unwrap();
        service.create_business_account(account_dto("u1")).await.unwrap();

        let profiles: Vec<BusinessProfile> = db
            .find_documents(collections::BUSINESS_PROFILES, &[("userId", "u1")], false)
            .await
            .unwrap();
        assert_eq!(profiles.len(), 2);
        assert_ne!(profiles[0].id, profiles[1].id);
    }

    #[tokio::test]
    async fn update_rewrites_only_provided_fields() {
        let (service, _db) = test_service().await;

        service.create_business_account(account_dto("u1")).await.unwrap();
        let updated = service
            .update_business_account(
                "u1",
                UpdateBusinessAccountDto {
                    description: Some("Bespoke furniture".to_string()),
                    status: Some(BusinessStatus::Active),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.profile.name, "Walnut Works");
        assert_eq!(updated.profile.description, "Bespoke furniture");
        assert_eq!(updated.status, BusinessStatus::Active);
    }

    #[tokio::test]
    async fn update_and_delete_require_an_existing_profile() {
        let (service, _db) = test_service().await;

        let update = service
            .update_business_account("ghost", UpdateBusinessAccountDto::default())
            .await;
        assert!(matches!(
            update,
            Err(ServiceError::BusinessProfileNotFound(_))
        ));

        let delete = service.delete_business_account("ghost").await;
        assert!(matches!(
            delete,
            Err(ServiceError::BusinessProfileNotFound(_))
        ));
    }

    #[tokio::test]
    async fn delete_removes_the_profile() {
        let (service, _db) = test_service().await;

        service.create_business_account(account_dto("u1")).await.unwrap();
        service.delete_business_account("u1").await.unwrap();

        let account = service.get_business_account("u1").await.unwrap();
        assert_eq!(account.name, "");
    }
}
