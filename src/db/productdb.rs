// db/productdb.rs
use async_trait::async_trait;

use super::db::{collections, DBClient};
use crate::models::productmodel::{
    ColorVariant, Ownership, Product, SizeVariant, SubImage, Variant,
};

#[async_trait]
pub trait ProductExt {
    async fn save_product(&self, product: &Product) -> Result<(), sqlx::Error>;

    async fn get_products_by_ids(
        &self,
        product_ids: &[String],
    ) -> Result<Vec<Product>, sqlx::Error>;

    async fn save_color_variant(&self, variant: &ColorVariant) -> Result<(), sqlx::Error>;

    async fn save_size_variant(&self, variant: &SizeVariant) -> Result<(), sqlx::Error>;

    async fn save_variant(&self, variant: &Variant) -> Result<(), sqlx::Error>;

    async fn get_variants_for_products(
        &self,
        product_ids: &[String],
    ) -> Result<Vec<Variant>, sqlx::Error>;

    async fn save_sub_image(&self, image: &SubImage) -> Result<(), sqlx::Error>;

    async fn get_sub_images_for_products(
        &self,
        product_ids: &[String],
    ) -> Result<Vec<SubImage>, sqlx::Error>;

    async fn save_ownership(&self, ownership: &Ownership) -> Result<(), sqlx::Error>;

    async fn get_ownerships_by_user(
        &self,
        user_id: &str,
    ) -> Result<Vec<Ownership>, sqlx::Error>;
}

#[async_trait]
impl ProductExt for DBClient {
    async fn save_product(&self, product: &Product) -> Result<(), sqlx::Error> {
        self.insert_document(collections::PRODUCTS, &product.id, product)
            .await
    }

    async fn get_products_by_ids(
        &self,
        product_ids: &[String],
    ) -> Result<Vec<Product>, sqlx::Error> {
        self.find_documents_in(collections::PRODUCTS, "id", product_ids)
            .await
    }

    async fn save_color_variant(&self, variant: &ColorVariant) -> Result<(), sqlx::Error> {
        self.insert_document(collections::COLOR_VARIANTS, &variant.id, variant)
            .await
    }

    async fn save_size_variant(&self, variant: &SizeVariant) -> Result<(), sqlx::Error> {
        self.insert_document(collections::SIZE_VARIANTS, &variant.id, variant)
            .await
    }

    async fn save_variant(&self, variant: &Variant) -> Result<(), sqlx::Error> {
        self.insert_document(collections::VARIANTS, &variant.id, variant)
            .await
    }

    async fn get_variants_for_products(
        &self,
        product_ids: &[String],
    ) -> Result<Vec<Variant>, sqlx::Error> {
        self.find_documents_in(collections::VARIANTS, "productId", product_ids)
            .await
    }

    async fn save_sub_image(&self, image: &SubImage) -> Result<(), sqlx::Error> {
        self.insert_document(collections::SUB_IMAGES, &image.id, image)
            .await
    }

    async fn get_sub_images_for_products(
        &self,
        product_ids: &[String],
    ) -> Result<Vec<SubImage>, sqlx::Error> {
        self.find_documents_in(collections::SUB_IMAGES, "productId", product_ids)
            .await
    }

    async fn save_ownership(&self, ownership: &Ownership) -> Result<(), sqlx::Error> {
        self.insert_document(collections::OWNERSHIP, &ownership.id, ownership)
            .await
    }

    async fn get_ownerships_by_user(
        &self,
        user_id: &str,
    ) -> Result<Vec<Ownership>, sqlx::Error> {
        self.find_documents(collections::OWNERSHIP, &[("userId", user_id)], false)
            .await
    }
}
