//! Catalog browsing and seller product management.

use clap::Subcommand;
use rust_decimal::Decimal;

use kommerce_client::api::types::ProductInput;
use kommerce_core::types::{CategoryId, ProductId, ProductStatus};

use super::CommandResult;
use crate::context::AppContext;
use crate::output::{self, ProductRow};

#[derive(Subcommand)]
pub enum ProductsAction {
    /// List all products
    List,
    /// Search products by name
    Search {
        /// Search terms
        query: String,
    },
    /// Show one product in detail
    Show {
        /// Product ID
        product_id: i64,
    },
    /// List featured products
    Featured,
    /// List products in a category
    ByCategory {
        /// Category name
        category: String,
    },
    /// List the authenticated seller's products
    Mine,
    /// Create a product (sellers)
    Create {
        /// Display name
        #[arg(long)]
        name: String,

        /// Unit price
        #[arg(long)]
        price: Decimal,

        /// Units in stock
        #[arg(long, default_value_t = 0)]
        stock: i64,

        /// Description
        #[arg(long, default_value = "")]
        description: String,

        /// Category ID
        #[arg(long)]
        category_id: Option<i64>,

        /// Image URL
        #[arg(long)]
        image_url: Option<String>,
    },
    /// Update a product (sellers)
    Update {
        /// Product ID
        product_id: i64,

        /// Display name
        #[arg(long)]
        name: String,

        /// Unit price
        #[arg(long)]
        price: Decimal,

        /// Units in stock
        #[arg(long, default_value_t = 0)]
        stock: i64,

        /// Description
        #[arg(long, default_value = "")]
        description: String,
    },
    /// Delete a product (sellers)
    Delete {
        /// Product ID
        product_id: i64,
    },
    /// Activate or deactivate a listing (sellers)
    SetStatus {
        /// Product ID
        product_id: i64,

        /// `active` or `inactive`
        status: ProductStatus,
    },
    /// Upload a product image (sellers)
    UploadImage {
        /// Product ID
        product_id: i64,

        /// Path of the image file
        path: std::path::PathBuf,
    },
}

pub async fn run(ctx: &mut AppContext, action: ProductsAction) -> CommandResult {
    match action {
        ProductsAction::List => {
            let products = ctx.api.get_products().await?;
            print_products(&products);
        }
        ProductsAction::Search { query } => {
            let products = ctx.api.search_products(&query).await?;
            print_products(&products);
        }
        ProductsAction::Show { product_id } => {
            let product = ctx.api.get_product(ProductId::new(product_id)).await?;
            println!("{}  (#{})", product.name, product.id);
            println!("Price:    {}", output::money(product.price));
            if let Some(stock) = product.stock {
                println!("Stock:    {stock}");
            }
            if let Some(seller) = product.seller_shop_name.or(product.seller_name) {
                println!("Seller:   {seller}");
            }
            if let Some(category) = product.category_name {
                println!("Category: {category}");
            }
            if let Some(description) = product.description {
                println!("\n{description}");
            }
        }
        ProductsAction::Featured => {
            let products = ctx.api.get_featured_products().await?;
            print_products(&products);
        }
        ProductsAction::ByCategory { category } => {
            let products = ctx.api.get_products_by_category(&category).await?;
            print_products(&products);
        }
        ProductsAction::Mine => {
            let products = ctx.api.get_seller_products().await?;
            print_products(&products);
        }
        ProductsAction::Create {
            name,
            price,
            stock,
            description,
            category_id,
            image_url,
        } => {
            let product = ctx
                .api
                .create_product(&ProductInput {
                    name,
                    description,
                    price,
                    stock_quantity: stock,
                    category_id: category_id.map(CategoryId::new),
                    image_url,
                })
                .await?;
            println!("Created product {} (#{}).", product.name, product.id);
        }
        ProductsAction::Update {
            product_id,
            name,
            price,
            stock,
            description,
        } => {
            let product = ctx
                .api
                .update_product(
                    ProductId::new(product_id),
                    &ProductInput {
                        name,
                        description,
                        price,
                        stock_quantity: stock,
                        category_id: None,
                        image_url: None,
                    },
                )
                .await?;
            println!("Updated product {} (#{}).", product.name, product.id);
        }
        ProductsAction::Delete { product_id } => {
            ctx.api.delete_product(ProductId::new(product_id)).await?;
            println!("Deleted product #{product_id}.");
        }
        ProductsAction::SetStatus { product_id, status } => {
            ctx.api
                .update_product_status(ProductId::new(product_id), status)
                .await?;
            println!("Product #{product_id} status updated.");
        }
        ProductsAction::UploadImage { product_id, path } => {
            let bytes = std::fs::read(&path)?;
            let file_name = path
                .file_name()
                .map_or_else(|| "image".to_owned(), |n| n.to_string_lossy().into_owned());
            ctx.api
                .upload_product_image(ProductId::new(product_id), &file_name, bytes)
                .await?;
            println!("Image uploaded for product #{product_id}.");
        }
    }
    Ok(())
}

/// List categories.
pub async fn categories(ctx: &mut AppContext) -> CommandResult {
    let categories = ctx.api.get_categories().await?;
    for category in categories {
        match category.description {
            Some(description) => println!("{:>4}  {}  - {description}", category.id, category.name),
            None => println!("{:>4}  {}", category.id, category.name),
        }
    }
    Ok(())
}

fn print_products(products: &[kommerce_client::api::types::Product]) {
    if products.is_empty() {
        println!("No products found.");
        return;
    }
    println!("{}", output::table(products.iter().map(ProductRow::from)));
}
