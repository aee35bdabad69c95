// service/product_service.rs
use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;

use crate::{
    db::{
        db::{new_document_id, DBClient},
        productdb::ProductExt,
    },
    dtos::productdtos::{CreateProductDto, ProductView},
    models::productmodel::{
        BusinessSellerInfo, ColorVariant, Ownership, PersonalSellerInfo, Product, SellerType,
        SizeVariant, SubImage, Variant,
    },
    service::error::ServiceError,
};

#[derive(Debug, Clone)]
pub struct ProductService {
    db_client: Arc<DBClient>,
}

impl ProductService {
    pub fn new(db_client: Arc<DBClient>) -> Self {
        Self { db_client }
    }

    /// Writes the product, one color/size variant pair plus priced variant
    /// per requested combination, the sub-image rows, and the ownership row
    /// carrying the seller-type sub-shape.
    pub async fn create_product(&self, dto: CreateProductDto) -> Result<Product, ServiceError> {
        if dto.variants.is_empty() {
            return Err(ServiceError::Validation(
                "At least one variant is required".to_string(),
            ));
        }
        if dto.seller_type == SellerType::Business && dto.business_profile_id.is_none() {
            return Err(ServiceError::Validation(
                "Business sellers must reference a business profile".to_string(),
            ));
        }

        let product = Product {
            id: new_document_id(),
            title: dto.title,
            category: dto.category,
            short_description: dto.short_description,
            long_description: dto.long_description,
            thumbnail: dto.thumbnail,
            created_at: Utc::now(),
        };
        self.db_client.save_product(&product).await?;

        for variant in dto.variants {
            let color_variant = ColorVariant {
                id: new_document_id(),
                product_id: product.id.clone(),
                color_id: variant.color_id,
            };
            self.db_client.save_color_variant(&color_variant).await?;

            let size_variant = SizeVariant {
                id: new_document_id(),
                product_id: product.id.clone(),
                size_id: variant.size_id,
            };
            self.db_client.save_size_variant(&size_variant).await?;

            self.db_client
                .save_variant(&Variant {
                    id: new_document_id(),
                    product_id: product.id.clone(),
                    color_variant_id: color_variant.id,
                    size_variant_id: size_variant.id,
                    price: variant.price,
                    quantity: variant.quantity,
                    status: "available".to_string(),
                })
                .await?;
        }

        for image_url in dto.sub_images {
            self.db_client
                .save_sub_image(&SubImage {
                    id: new_document_id(),
                    product_id: product.id.clone(),
                    image_url,
                })
                .await?;
        }

        let display_name = dto.display_name.unwrap_or_default();
        let (personal, business) = match dto.seller_type {
            SellerType::Personal => (Some(PersonalSellerInfo { display_name }), None),
            SellerType::Business => (
                None,
                Some(BusinessSellerInfo {
                    business_profile_id: dto.business_profile_id.unwrap_or_default(),
                    business_name: display_name,
                }),
            ),
        };
        let ownership = Ownership {
            id: new_document_id(),
            product_id: product.id.clone(),
            user_id: dto.user_id,
            seller_type: dto.seller_type,
            personal,
            business,
        };
        self.db_client.save_ownership(&ownership).await?;

        tracing::info!("Created product {}", product.id);
        Ok(product)
    }

    /// A user's products via their ownership rows, with variants and
    /// sub-images batched in.
    pub async fn fetch_user_products(
        &self,
        user_id: &str,
    ) -> Result<Vec<ProductView>, ServiceError> {
        let ownerships = self.db_client.get_ownerships_by_user(user_id).await?;
        let product_ids: Vec<String> =
            ownerships.iter().map(|o| o.product_id.clone()).collect();

        let (products, variants, sub_images) = tokio::try_join!(
            self.db_client.get_products_by_ids(&product_ids),
            self.db_client.get_variants_for_products(&product_ids),
            self.db_client.get_sub_images_for_products(&product_ids),
        )?;

        let mut variants_by_product: HashMap<String, Vec<Variant>> = HashMap::new();
        for variant in variants {
            variants_by_product
                .entry(variant.product_id.clone())
                .or_default()
                .push(variant);
        }
        let mut images_by_product: HashMap<String, Vec<SubImage>> = HashMap::new();
        for image in sub_images {
            images_by_product
                .entry(image.product_id.clone())
                .or_default()
                .push(image);
        }

        Ok(products
            .into_iter()
            .map(|product| ProductView {
                variants: variants_by_product.remove(&product.id).unwrap_or_default(),
                sub_images: images_by_product.remove(&product.id).unwrap_or_default(),
                product,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dtos::productdtos::CreateVariantDto;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn test_service() -> (ProductService, Arc<DBClient>) {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        let db_client = Arc::new(DBClient::new(pool));
        db_client.init_collections().await.unwrap();

        (ProductService::new(db_client.clone()), db_client)
    }

    fn product_dto(user_id: &str, title: &str) -> CreateProductDto {
        CreateProductDto {
            user_id: user_id.to_string(),
            title: title.to_string(),
            category: "furniture".to_string(),
            short_description: "".to_string(),
            long_description: "".to_string(),
            thumbnail: "/uploads/chair.png".to_string(),
            seller_type: SellerType::Personal,
            business_profile_id: None,
            display_name: Some("Ada's woodshop".to_string()),
            variants: vec![
                CreateVariantDto {
                    color_id: "color-oak".to_string(),
                    size_id: "size-m".to_string(),
                    price: 120.0,
                    quantity: 3,
                },
                CreateVariantDto {
                    color_id: "color-walnut".to_string(),
                    size_id: "size-l".to_string(),
                    price: 150.0,
                    quantity: 1,
                },
            ],
            sub_images: vec!["/uploads/detail.png".to_string()],
        }
    }

    #[tokio::test]
    async fn created_product_lists_with_variants_and_images() {
        let (service, _db) = test_service().await;

        service.create_product(product_dto("u1", "Walnut chair")).await.unwrap();

        let products = service.fetch_user_products("u1").await.unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].product.title, "Walnut chair");
        assert_eq!(products[0].variants.len(), 2);
        assert_eq!(products[0].sub_images.len(), 1);
    }

    #[tokio::test]
    async fn ownership_scopes_listings_to_the_owner() {
        let (service, _db) = test_service().await;

        service.create_product(product_dto("u1", "Walnut chair")).await.unwrap();
        service.create_product(product_dto("u2", "Oak table six")).await.unwrap();

        let products = service.fetch_user_products("u1").await.unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].product.title, "Walnut chair");
    }

    #[tokio::test]
    async fn business_seller_requires_a_profile_reference() {
        let (service, _db) = test_service().await;

        let mut dto = product_dto("u1", "Walnut chair");
        dto.seller_type = SellerType::Business;
        dto.business_profile_id = None;

        let result = service.create_product(dto).await;
        assert!(matches!(result, Err(ServiceError::Validation(_))));
    }

    #[tokio::test]
    async fn product_without_variants_is_rejected() {
        let (service, _db) = test_service().await;

        let mut dto = product_dto("u1", "Walnut chair");
        dto.variants.clear();

        let result = service.create_product(dto).await;
        assert!(matches!(result, Err(ServiceError::Validation(_))));
    }
}
