//! Store administration commands.

use clap::Subcommand;

use kommerce_core::types::{ProductId, UserId};

use super::CommandResult;
use crate::context::AppContext;
use crate::output::{self, OrderRow, ProductRow, UserRow};

#[derive(Subcommand)]
pub enum AdminAction {
    /// Aggregate store statistics
    Stats,
    /// List every user
    Users,
    /// List every product
    Products,
    /// List every order
    Orders,
    /// Delete a user account
    DeleteUser {
        /// User ID
        user_id: i64,
    },
    /// Delete a product listing
    DeleteProduct {
        /// Product ID
        product_id: i64,
    },
}

pub async fn run(ctx: &mut AppContext, action: AdminAction) -> CommandResult {
    match action {
        AdminAction::Stats => {
            let stats = ctx.api.get_admin_stats().await?;
            println!("Users:     {} total ({} customers, {} sellers, {} admins)",
                stats.total_users, stats.customer_count, stats.seller_count, stats.admin_count);
            println!("Products:  {} total ({} active, {} inactive, {} out of stock, {} low stock)",
                stats.total_products, stats.active_products, stats.inactive_products,
                stats.out_of_stock_products, stats.low_stock_products);
            println!("Orders:    {} total ({} today)", stats.total_orders, stats.today_orders);
            println!("Revenue:   {}", output::money(stats.total_revenue));
            println!("Today:     {} new users", stats.today_users);
        }
        AdminAction::Users => {
            let users = ctx.api.get_all_users().await?;
            println!("{}", output::table(users.iter().map(UserRow::from)));
        }
        AdminAction::Products => {
            let products = ctx.api.get_all_products().await?;
            println!("{}", output::table(products.iter().map(ProductRow::from)));
        }
        AdminAction::Orders => {
            let orders = ctx.api.get_all_orders().await?;
            println!("{}", output::table(orders.iter().map(OrderRow::from)));
        }
        AdminAction::DeleteUser { user_id } => {
            ctx.api.admin_delete_user(UserId::new(user_id)).await?;
            println!("User #{user_id} deleted.");
        }
        AdminAction::DeleteProduct { product_id } => {
            ctx.api.admin_delete_product(ProductId::new(product_id)).await?;
            println!("Product #{product_id} deleted.");
        }
    }
    Ok(())
}
