// dtos/businessdtos.rs
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::businessmodel::{
    BusinessFeedback, BusinessMetrics, BusinessProfile, BusinessRating, BusinessStatus,
};

#[derive(Validate, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBusinessAccountDto {
    #[validate(length(min = 1, message = "User id is required"))]
    pub user_id: String,

    #[validate(length(min = 1, message = "Business name is required"))]
    pub name: String,

    #[serde(default)]
    pub established: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub location: String,

    #[serde(default)]
    pub contact_email: String,

    #[serde(default)]
    pub contact_phone: String,

    #[serde(default)]
    pub categories: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBusinessAccountDto {
    pub name: Option<String>,
    pub established: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub categories: Option<Vec<String>>,
    pub status: Option<BusinessStatus>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessUserQueryDto {
    pub user_id: String,
}

/// Composite view-model handed to pages. Every field carries a safe default
/// so a missing profile renders as zeros/empty strings, never null.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessAccountDto {
    pub user_id: String,
    pub name: String,
    pub established: String,
    pub description: String,
    pub location: String,
    pub contact_email: String,
    pub contact_phone: String,
    pub metrics: BusinessMetrics,
    pub feedback: BusinessFeedback,
    pub rating: BusinessRating,
    pub categories: Vec<String>,
    pub status: String,
}

impl BusinessAccountDto {
    /// The zero-value composite returned when no profile document exists.
    pub fn empty(user_id: &str) -> Self {
        BusinessAccountDto {
            user_id: user_id.to_string(),
            ..Default::default()
        }
    }

    pub fn from_profile(profile: BusinessProfile, total_products: i64) -> Self {
        BusinessAccountDto {
            user_id: profile.user_id,
            name: profile.profile.name,
            established: profile.profile.established,
            description: profile.profile.description,
            location: profile.profile.location,
            contact_email: profile.profile.contact.email,
            contact_phone: profile.profile.contact.phone,
            metrics: BusinessMetrics {
                total_products,
                ..profile.metrics
            },
            feedback: profile.feedback,
            rating: profile.rating,
            categories: profile.categories,
            status: profile.status.to_str().to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BusinessAccountResponseDto {
    pub status: String,
    pub account: BusinessAccountDto,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BusinessProfileResponseDto {
    pub status: String,
    pub profile: BusinessProfile,
}
