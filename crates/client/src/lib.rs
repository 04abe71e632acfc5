//! Kommerce Client - HTTP glue and local storage.
//!
//! This crate is the non-visual half of the storefront client:
//!
//! - [`api`] - Typed REST client for the storefront backend (auth, products,
//!   categories, orders, admin)
//! - [`storage`] - File-backed durable local storage for the cart and the
//!   session token
//! - [`checkout`] - Translation of cart line items into the order-creation
//!   contract, with pre-flight validation
//! - [`config`] - Environment-driven client configuration
//!
//! The cart engine itself lives in `kommerce-core`; this crate supplies the
//! [`kommerce_core::CartPersistence`] implementation that makes carts survive
//! process restarts.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod api;
pub mod checkout;
pub mod config;
pub mod error;
pub mod storage;

pub use api::ApiClient;
pub use config::ClientConfig;
pub use error::ApiError;
pub use storage::{FileCartStorage, TokenStore};
