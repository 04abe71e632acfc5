//! Kommerce Core - Shared types and cart engine.
//!
//! This crate provides the common types used across all Kommerce client
//! components:
//! - `client` - HTTP glue for the storefront REST API plus local storage
//! - `cli` - Terminal front end for browsing, cart, and checkout
//!
//! # Architecture
//!
//! The core crate contains only types and pure logic - no I/O, no HTTP
//! clients. The one stateful component, [`cart::CartStore`], performs its
//! persistence through an injected [`cart::CartPersistence`] port so it can
//! be unit tested without touching the filesystem.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, emails, roles,
//!   and statuses
//! - [`cart`] - The shopping cart state manager and its persistence port

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod types;

pub use cart::{CartLineItem, CartPersistence, CartProduct, CartStore, MemoryCartStorage};
pub use types::*;
