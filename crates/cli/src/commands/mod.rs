//! Command implementations.

pub mod admin;
pub mod auth;
pub mod cart;
pub mod orders;
pub mod products;
pub mod profile;

/// Shared command result type.
pub type CommandResult = Result<(), Box<dyn std::error::Error>>;
