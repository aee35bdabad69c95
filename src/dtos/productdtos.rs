// dtos/productdtos.rs
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::productmodel::{Product, SellerType, SubImage, Variant};

#[derive(Validate, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateVariantDto {
    #[validate(length(min = 1, message = "Color id is required"))]
    pub color_id: String,

    #[validate(length(min = 1, message = "Size id is required"))]
    pub size_id: String,

    #[validate(range(min = 0.01, message = "Price must be greater than zero"))]
    pub price: f64,

    #[validate(range(min = 0, message = "Quantity cannot be negative"))]
    pub quantity: i64,
}

#[derive(Validate, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductDto {
    #[validate(length(min = 1, message = "User id is required"))]
    pub user_id: String,

    #[validate(length(min = 6, message = "Title must be longer than 5 characters"))]
    pub title: String,

    #[validate(length(min = 1, message = "Category is required"))]
    pub category: String,

    #[serde(default)]
    pub short_description: String,

    #[serde(default)]
    pub long_description: String,

    #[serde(default)]
    pub thumbnail: String,

    pub seller_type: SellerType,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_profile_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    #[validate]
    pub variants: Vec<CreateVariantDto>,

    #[serde(default)]
    pub sub_images: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductsQueryDto {
    pub user_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductView {
    #[serde(flatten)]
    pub product: Product,
    pub variants: Vec<Variant>,
    pub sub_images: Vec<SubImage>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ProductsResponseDto {
    pub status: String,
    pub products: Vec<ProductView>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ProductResponseDto {
    pub status: String,
    pub product: Product,
}
