// Test Server Helpers
//
// Builds the application services on top of an in-memory store so HTTP
// tests run without a database.

use std::sync::Arc;

use fantasy_products::config::ReportsConfig;
use fantasy_products::storage::InMemoryStore;
use fantasy_products::AppServices;

use super::test_data::{seed_customers, seed_products, storefront_customers, storefront_products};

/// Services over an empty in-memory store
pub fn empty_services() -> AppServices {
    AppServices::in_memory(Arc::new(InMemoryStore::new()), ReportsConfig::default())
}

/// Services over an in-memory store holding the storefront fixture
pub async fn storefront_services(limits: ReportsConfig) -> AppServices {
    let store = Arc::new(InMemoryStore::new());
    seed_storefront(&store).await;
    AppServices::in_memory(store, limits)
}

pub async fn seed_storefront(store: &InMemoryStore) {
    seed_customers(store, store, storefront_customers()).await;
    seed_products(store, store, storefront_products()).await;
}
