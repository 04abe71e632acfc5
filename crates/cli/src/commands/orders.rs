//! Order history and status updates.

use clap::Subcommand;

use kommerce_core::types::{OrderId, OrderStatus, ShippingStatus};

use super::CommandResult;
use crate::context::AppContext;
use crate::output::{self, OrderRow};

#[derive(Subcommand)]
pub enum OrdersAction {
    /// List your orders
    List,
    /// Show one order in detail
    Show {
        /// Order ID
        order_id: i64,
    },
    /// List orders for your products (sellers)
    Seller,
    /// Update an order's status (sellers/admins)
    SetStatus {
        /// Order ID
        order_id: i64,

        /// New status, e.g. `confirmed`, `shipped`, `delivered`
        status: OrderStatus,
    },
    /// Update an order's shipping progress (sellers)
    SetShipping {
        /// Order ID
        order_id: i64,

        /// New shipping status, e.g. `shipped`, `in_transit`
        status: ShippingStatus,
    },
    /// Approve a pending order (sellers)
    Approve {
        /// Order ID
        order_id: i64,
    },
}

pub async fn run(ctx: &mut AppContext, action: OrdersAction) -> CommandResult {
    match action {
        OrdersAction::List => {
            let orders = ctx.api.get_my_orders().await?;
            print_orders(&orders);
        }
        OrdersAction::Show { order_id } => {
            let order = ctx.api.get_order(OrderId::new(order_id)).await?;
            print_order_detail(&order);
        }
        OrdersAction::Seller => {
            let orders = ctx.api.get_seller_orders().await?;
            print_orders(&orders);
        }
        OrdersAction::SetStatus { order_id, status } => {
            let order = ctx
                .api
                .update_order_status(OrderId::new(order_id), status)
                .await?;
            println!(
                "Order {} is now {}.",
                order.id,
                order.status.unwrap_or(status)
            );
        }
        OrdersAction::SetShipping { order_id, status } => {
            let order = ctx
                .api
                .update_shipping_status(OrderId::new(order_id), status)
                .await?;
            println!(
                "Order {} shipping is now {}.",
                order.id,
                order.shipping_status.unwrap_or(status)
            );
        }
        OrdersAction::Approve { order_id } => {
            let order = ctx.api.approve_order(OrderId::new(order_id)).await?;
            println!("Order {} approved.", order.id);
        }
    }
    Ok(())
}

fn print_orders(orders: &[kommerce_client::api::types::Order]) {
    if orders.is_empty() {
        println!("No orders found.");
        return;
    }
    println!("{}", output::table(orders.iter().map(OrderRow::from)));
}

fn print_order_detail(order: &kommerce_client::api::types::Order) {
    println!("Order #{}", order.id);
    if let Some(status) = order.status {
        println!("Status:   {status}");
    }
    if let Some(shipping) = order.shipping_status {
        println!("Shipping: {shipping}");
    }
    if let Some(tracking) = &order.tracking_number {
        println!("Tracking: {tracking}");
    }
    if let Some(address) = &order.shipping_address {
        println!("Address:  {address}");
    }
    if let Some(total) = order.total_amount {
        println!("Total:    {}", output::money(total));
    }

    if !order.order_items.is_empty() {
        println!();
        for item in &order.order_items {
            let product = item
                .product
                .map_or_else(|| "?".to_owned(), |p| p.id.to_string());
            let price = item.price.map_or_else(|| "-".to_owned(), output::money);
            println!("  product #{product}  x{}  @ {price}", item.quantity);
        }
    }
}
