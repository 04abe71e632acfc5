//! Local cart commands and checkout.

use clap::{Args, Subcommand};

use kommerce_client::api::types::CardDetails;
use kommerce_client::checkout::{self, CheckoutForm};
use kommerce_core::types::{PaymentMethod, ProductId};

use super::CommandResult;
use crate::context::AppContext;
use crate::output::{self, CartRow};

#[derive(Subcommand)]
pub enum CartAction {
    /// Show the cart contents and total
    Show,
    /// Add a product to the cart
    Add {
        /// Product ID
        product_id: i64,

        /// Number of units
        #[arg(long, default_value_t = 1)]
        qty: u32,
    },
    /// Remove a product from the cart
    Remove {
        /// Product ID
        product_id: i64,
    },
    /// Set the quantity of a product already in the cart
    SetQty {
        /// Product ID
        product_id: i64,

        /// New quantity (minimum 1)
        qty: i64,
    },
    /// Empty the cart
    Clear,
}

pub async fn run(ctx: &mut AppContext, action: CartAction) -> CommandResult {
    match action {
        CartAction::Show => show(ctx),
        CartAction::Add { product_id, qty } => add(ctx, ProductId::new(product_id), qty).await?,
        CartAction::Remove { product_id } => {
            ctx.cart.remove_item(ProductId::new(product_id));
            show(ctx);
        }
        CartAction::SetQty { product_id, qty } => {
            ctx.cart.update_quantity(ProductId::new(product_id), qty);
            show(ctx);
        }
        CartAction::Clear => {
            ctx.cart.clear();
            println!("Cart cleared.");
        }
    }
    Ok(())
}

fn show(ctx: &AppContext) {
    if ctx.cart.is_empty() {
        println!("Your cart is empty.");
        return;
    }

    println!("{}", output::table(ctx.cart.lines().iter().map(CartRow::from)));
    if let Some(line) = ctx.cart.lines().first() {
        println!("Seller: {}", line.seller_name);
    }
    println!("Total:  {}", output::money(ctx.cart.total()));
}

async fn add(ctx: &mut AppContext, product_id: ProductId, qty: u32) -> CommandResult {
    let product = ctx.api.get_product(product_id).await?;

    let Some(snapshot) = product.cart_snapshot() else {
        println!("'{}' has no seller listed and cannot be added to the cart.", product.name);
        return Ok(());
    };

    let previous_seller = ctx.cart.seller_id();
    ctx.cart.add_item(&snapshot, qty);

    if previous_seller.is_some_and(|prev| prev != snapshot.seller_id) {
        println!(
            "Your cart held items from another seller; it was reset for {}.",
            snapshot.seller_name
        );
    }
    show(ctx);
    Ok(())
}

/// Flags for `kommerce checkout`.
#[derive(Args)]
pub struct CheckoutArgs {
    /// Delivery address
    #[arg(long)]
    pub address: String,

    /// Payment method: `card` or `cash`
    #[arg(long, default_value = "cash")]
    pub payment: PaymentMethod,

    /// Card number (card payments only)
    #[arg(long)]
    pub card_number: Option<String>,

    /// Card expiry, e.g. 12/27 (card payments only)
    #[arg(long)]
    pub card_expiry: Option<String>,

    /// Card CVV (card payments only)
    #[arg(long)]
    pub card_cvv: Option<String>,

    /// Card holder name (card payments only)
    #[arg(long)]
    pub card_holder: Option<String>,
}

pub async fn checkout(ctx: &mut AppContext, args: CheckoutArgs) -> CommandResult {
    let card = match args.payment {
        PaymentMethod::Card => Some(CardDetails {
            card_number: args.card_number.unwrap_or_default(),
            expiry_date: args.card_expiry.unwrap_or_default(),
            cvv: args.card_cvv.unwrap_or_default(),
            card_holder: args.card_holder.unwrap_or_default(),
        }),
        PaymentMethod::Cash => None,
    };

    let form = CheckoutForm {
        shipping_address: args.address,
        payment_method: args.payment,
        card,
    };

    let request = checkout::build_order(ctx.cart.lines(), &form)?;
    let order = ctx.api.create_order(&request).await?;

    // The order went through; the cart's job is done.
    ctx.cart.clear();

    println!("Order {} created.", order.id);
    if let Some(total) = order.total_amount {
        println!("Total: {}", output::money(total));
    }
    Ok(())
}
