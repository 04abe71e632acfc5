//! Product and category endpoints.
//!
//! Public reads are cached (5-minute TTL); seller mutations invalidate the
//! whole cache since they can change any listing.

use tracing::instrument;

use kommerce_core::types::{ProductId, ProductStatus};

use super::cache::{CacheKey, CacheValue};
use super::types::{Category, Listing, Product, ProductInput};
use super::ApiClient;
use crate::error::Result;

impl ApiClient {
    // =========================================================================
    // Public reads
    // =========================================================================

    /// All products.
    #[instrument(skip(self))]
    pub async fn get_products(&self) -> Result<Vec<Product>> {
        let key = CacheKey::Products { query: None };
        if let Some(CacheValue::Products(products)) = self.cached(key.clone()).await {
            return Ok(products);
        }

        let listing: Listing<Product> = self.get("/products").await?;
        let products = listing.into_vec();
        self.remember(key, CacheValue::Products(products.clone()))
            .await;
        Ok(products)
    }

    /// One product by ID.
    #[instrument(skip(self))]
    pub async fn get_product(&self, id: ProductId) -> Result<Product> {
        let key = CacheKey::Product(id.as_i64());
        if let Some(CacheValue::Product(product)) = self.cached(key.clone()).await {
            return Ok(*product);
        }

        let product: Product = self.get(&format!("/products/{id}")).await?;
        self.remember(key, CacheValue::Product(Box::new(product.clone())))
            .await;
        Ok(product)
    }

    /// Featured products for the home page.
    #[instrument(skip(self))]
    pub async fn get_featured_products(&self) -> Result<Vec<Product>> {
        if let Some(CacheValue::Products(products)) = self.cached(CacheKey::Featured).await {
            return Ok(products);
        }

        let listing: Listing<Product> = self.get("/products/featured").await?;
        let products = listing.into_vec();
        self.remember(CacheKey::Featured, CacheValue::Products(products.clone()))
            .await;
        Ok(products)
    }

    /// Products in a category.
    #[instrument(skip(self))]
    pub async fn get_products_by_category(&self, category: &str) -> Result<Vec<Product>> {
        let key = CacheKey::ByCategory(category.to_owned());
        if let Some(CacheValue::Products(products)) = self.cached(key.clone()).await {
            return Ok(products);
        }

        let listing: Listing<Product> = self
            .get(&format!("/products/category/{category}"))
            .await?;
        let products = listing.into_vec();
        self.remember(key, CacheValue::Products(products.clone()))
            .await;
        Ok(products)
    }

    /// Full-text product search.
    #[instrument(skip(self))]
    pub async fn search_products(&self, query: &str) -> Result<Vec<Product>> {
        let key = CacheKey::Products {
            query: Some(query.to_owned()),
        };
        if let Some(CacheValue::Products(products)) = self.cached(key.clone()).await {
            return Ok(products);
        }

        let listing: Listing<Product> = self
            .get_with_query("/products/search", &[("q", query)])
            .await?;
        let products = listing.into_vec();
        self.remember(key, CacheValue::Products(products.clone()))
            .await;
        Ok(products)
    }

    /// All categories.
    #[instrument(skip(self))]
    pub async fn get_categories(&self) -> Result<Vec<Category>> {
        if let Some(CacheValue::Categories(categories)) = self.cached(CacheKey::Categories).await {
            return Ok(categories);
        }

        let listing: Listing<Category> = self.get("/categories").await?;
        let categories = listing.into_vec();
        self.remember(
            CacheKey::Categories,
            CacheValue::Categories(categories.clone()),
        )
        .await;
        Ok(categories)
    }

    // =========================================================================
    // Seller operations
    // =========================================================================

    /// Products owned by the authenticated seller.
    #[instrument(skip(self))]
    pub async fn get_seller_products(&self) -> Result<Vec<Product>> {
        let listing: Listing<Product> = self.get("/products/seller/my-products").await?;
        Ok(listing.into_vec())
    }

    /// Create a product.
    #[instrument(skip(self, input))]
    pub async fn create_product(&self, input: &ProductInput) -> Result<Product> {
        let product = self.post("/products", input).await?;
        self.invalidate_cache();
        Ok(product)
    }

    /// Update one of the seller's products.
    #[instrument(skip(self, input))]
    pub async fn update_product(&self, id: ProductId, input: &ProductInput) -> Result<Product> {
        let product = self.put(&format!("/products/seller/{id}"), input).await?;
        self.invalidate_cache();
        Ok(product)
    }

    /// Delete one of the seller's products.
    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: ProductId) -> Result<()> {
        let _: serde_json::Value = self.delete(&format!("/products/seller/{id}")).await?;
        self.invalidate_cache();
        Ok(())
    }

    /// Activate or deactivate a listing.
    #[instrument(skip(self))]
    pub async fn update_product_status(
        &self,
        id: ProductId,
        status: ProductStatus,
    ) -> Result<Product> {
        let product = self
            .put(
                &format!("/products/seller/{id}/status"),
                &serde_json::json!({ "status": status }),
            )
            .await?;
        self.invalidate_cache();
        Ok(product)
    }

    /// Upload a product image (multipart, field name `files`).
    #[instrument(skip(self, bytes))]
    pub async fn upload_product_image(
        &self,
        id: ProductId,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<Product> {
        let part = reqwest::multipart::Part::bytes(bytes).file_name(file_name.to_owned());
        let form = reqwest::multipart::Form::new().part("files", part);

        let product = self
            .post_multipart(&format!("/products/seller/{id}/images"), form)
            .await?;
        self.invalidate_cache();
        Ok(product)
    }
}
