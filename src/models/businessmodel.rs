// models/businessmodel.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum BusinessStatus {
    Active,
    Pending,
    Inactive,
}

impl BusinessStatus {
    pub fn to_str(&self) -> &str {
        match self {
            BusinessStatus::Active => "active",
            BusinessStatus::Pending => "pending",
            BusinessStatus::Inactive => "inactive",
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct BusinessContact {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct BusinessInfo {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub established: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub contact: BusinessContact,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, Default)]
#[serde(rename_all = "camelCase")]
pub struct BusinessMetrics {
    #[serde(default)]
    pub total_products: i64,
    #[serde(default)]
    pub total_sales: i64,
    #[serde(default)]
    pub avg_rating: f64,
    #[serde(default)]
    pub response_rate: f64,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, Default)]
#[serde(rename_all = "camelCase")]
pub struct BusinessFeedback {
    #[serde(default)]
    pub positive: i64,
    #[serde(default)]
    pub neutral: i64,
    #[serde(default)]
    pub negative: i64,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, Default)]
#[serde(rename_all = "camelCase")]
pub struct BusinessRating {
    #[serde(default)]
    pub count: i64,
    #[serde(default)]
    pub average: f64,
}

/// One business profile is intended per user, but the document is located
/// by a `userId` query filter rather than a stable key, so nothing stops a
/// second insert for the same user.
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct BusinessProfile {
    pub id: String,
    pub user_id: String,
    pub profile: BusinessInfo,
    #[serde(default)]
    pub metrics: BusinessMetrics,
    #[serde(default)]
    pub feedback: BusinessFeedback,
    #[serde(default)]
    pub rating: BusinessRating,
    #[serde(default)]
    pub categories: Vec<String>,
    pub status: BusinessStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
