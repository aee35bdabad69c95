// models/productmodel.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub title: String,
    pub category: String,
    #[serde(default)]
    pub short_description: String,
    #[serde(default)]
    pub long_description: String,
    #[serde(default)]
    pub thumbnail: String,
    pub created_at: DateTime<Utc>,
}

/// Base lookup row shared by products.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Color {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub hex: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Size {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ColorVariant {
    pub id: String,
    pub product_id: String,
    pub color_id: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SizeVariant {
    pub id: String,
    pub product_id: String,
    pub size_id: String,
}

/// Priced unit referencing one color-variant and one size-variant.
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Variant {
    pub id: String,
    pub product_id: String,
    pub color_variant_id: String,
    pub size_variant_id: String,
    pub price: f64,
    pub quantity: i64,
    #[serde(default)]
    pub status: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SubImage {
    pub id: String,
    pub product_id: String,
    pub image_url: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum SellerType {
    Personal,
    Business,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PersonalSellerInfo {
    pub display_name: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct BusinessSellerInfo {
    pub business_profile_id: String,
    #[serde(default)]
    pub business_name: String,
}

/// Ownership row keyed by productId+userId. The embedded sub-shape differs
/// by seller type.
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Ownership {
    pub id: String,
    pub product_id: String,
    pub user_id: String,
    pub seller_type: SellerType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub personal: Option<PersonalSellerInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business: Option<BusinessSellerInfo>,
}
