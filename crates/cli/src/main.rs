//! Kommerce CLI - Terminal storefront client.
//!
//! # Usage
//!
//! ```bash
//! # Browse
//! kommerce products list
//! kommerce products search "ceramic mug"
//!
//! # Cart
//! kommerce cart add 42 --qty 2
//! kommerce cart show
//!
//! # Checkout
//! kommerce login -e user@example.com -p secret
//! kommerce checkout --address "12 Harbor St" --payment cash
//! ```
//!
//! # Commands
//!
//! - `login` / `register` / `logout` / `whoami` - Session management
//! - `products` / `categories` - Catalog browsing and seller management
//! - `cart` - Local cart operations
//! - `checkout` - Turn the cart into an order
//! - `orders` - Order history and status updates
//! - `admin` - Store administration

#![cfg_attr(not(test), forbid(unsafe_code))]
#![allow(clippy::print_stdout)]

use clap::{Parser, Subcommand};

use kommerce_client::ApiError;

mod commands;
mod context;
mod output;

use context::AppContext;

#[derive(Parser)]
#[command(name = "kommerce")]
#[command(author, version, about = "Kommerce storefront client")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in and store the session token
    Login {
        /// Account email address
        #[arg(short, long)]
        email: String,

        /// Account password
        #[arg(short, long)]
        password: String,
    },
    /// Register a new account
    Register {
        /// First name
        #[arg(long)]
        first_name: String,

        /// Last name
        #[arg(long)]
        last_name: String,

        /// Email address
        #[arg(short, long)]
        email: String,

        /// Password
        #[arg(short, long)]
        password: String,

        /// Account role (`customer` or `seller`)
        #[arg(short, long, default_value = "customer")]
        role: String,
    },
    /// Forget the stored session token
    Logout,
    /// Show the logged-in user and their role
    Whoami,
    /// View or update your profile
    Profile {
        #[command(subcommand)]
        action: commands::profile::ProfileAction,
    },
    /// Browse and manage products
    Products {
        #[command(subcommand)]
        action: commands::products::ProductsAction,
    },
    /// List product categories
    Categories,
    /// Manage the local cart
    Cart {
        #[command(subcommand)]
        action: commands::cart::CartAction,
    },
    /// Create an order from the cart
    Checkout(commands::cart::CheckoutArgs),
    /// Order history and status updates
    Orders {
        #[command(subcommand)]
        action: commands::orders::OrdersAction,
    },
    /// Store administration
    Admin {
        #[command(subcommand)]
        action: commands::admin::AdminAction,
    },
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    let mut ctx = match AppContext::init() {
        Ok(ctx) => ctx,
        Err(e) => {
            tracing::error!("Failed to initialize client: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = run(cli, &mut ctx).await {
        // A rejected token is stale; drop it so the next command starts clean.
        if matches!(e.downcast_ref::<ApiError>(), Some(ApiError::Unauthorized)) {
            let _ = ctx.tokens.clear();
        }
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli, ctx: &mut AppContext) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Login { email, password } => commands::auth::login(ctx, &email, &password).await?,
        Commands::Register {
            first_name,
            last_name,
            email,
            password,
            role,
        } => {
            commands::auth::register(ctx, &first_name, &last_name, &email, &password, &role)
                .await?;
        }
        Commands::Logout => commands::auth::logout(ctx)?,
        Commands::Whoami => commands::auth::whoami(ctx).await?,
        Commands::Profile { action } => commands::profile::run(ctx, action).await?,
        Commands::Products { action } => commands::products::run(ctx, action).await?,
        Commands::Categories => commands::products::categories(ctx).await?,
        Commands::Cart { action } => commands::cart::run(ctx, action).await?,
        Commands::Checkout(args) => commands::cart::checkout(ctx, args).await?,
        Commands::Orders { action } => commands::orders::run(ctx, action).await?,
        Commands::Admin { action } => commands::admin::run(ctx, action).await?,
    }
    Ok(())
}
