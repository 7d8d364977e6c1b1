use std::env;
use std::path::PathBuf;

/// Location of the order store document
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub orders_path: PathBuf,
}

impl StorageConfig {
    pub fn from_env() -> Self {
        let orders_path = env::var("ORDERS_STORE_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("data/orders.json"));

        Self { orders_path }
    }
}
