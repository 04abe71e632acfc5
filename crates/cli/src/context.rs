//! Shared command context: API client, cart, and session token.

use kommerce_client::{ApiClient, ClientConfig, FileCartStorage, TokenStore};
use kommerce_core::cart::CartStore;

/// Everything a command needs, wired up from the environment.
pub struct AppContext {
    pub api: ApiClient,
    pub cart: CartStore<FileCartStorage>,
    pub tokens: TokenStore,
}

impl AppContext {
    /// Load config, restore the cart, and attach any stored session token.
    pub fn init() -> Result<Self, Box<dyn std::error::Error>> {
        let config = ClientConfig::from_env()?;

        let api = ApiClient::new(&config)?;
        let tokens = TokenStore::new(config.token_path());
        if let Some(token) = tokens.load() {
            api.set_token(token);
        }

        let cart = CartStore::new(FileCartStorage::new(config.cart_path()));

        Ok(Self { api, cart, tokens })
    }
}
