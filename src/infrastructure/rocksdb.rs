use crate::domain::order::Order;
use crate::domain::ports::OrderRepository;
use crate::error::{OrderError, Result};
use async_trait::async_trait;
use rocksdb::{ColumnFamilyDescriptor, DB, Options};
use std::path::Path;
use std::sync::Arc;

/// Column Family for storing orders.
pub const CF_ORDERS: &str = "orders";

impl From<rocksdb::Error> for OrderError {
    fn from(e: rocksdb::Error) -> Self {
        OrderError::Persistence(e.to_string())
    }
}

/// A persistent order repository backed by RocksDB.
///
/// Orders are stored as JSON under their id in the `orders` column family.
/// `Clone` shares the underlying `Arc<DB>`.
#[derive(Clone)]
pub struct RocksDbOrderRepository {
    db: Arc<DB>,
}

impl RocksDbOrderRepository {
    /// Opens or creates a RocksDB instance at the specified path.
    ///
    /// Ensures that the `orders` column family exists.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut opts = Options::default();
        opts.create_if_missing(true);
        opts.create_missing_column_families(true);

        let cf_orders = ColumnFamilyDescriptor::new(CF_ORDERS, Options::default());
        let db = DB::open_cf_descriptors(&opts, path, vec![cf_orders])?;

        Ok(Self { db: Arc::new(db) })
    }
}

#[async_trait]
impl OrderRepository for RocksDbOrderRepository {
    async fn save(&self, order: &Order) -> Result<()> {
        let cf = self
            .db
            .cf_handle(CF_ORDERS)
            .ok_or_else(|| OrderError::Persistence("Orders column family not found".to_string()))?;

        let value = serde_json::to_vec(order)
            .map_err(|e| OrderError::Persistence(format!("Serialization error: {}", e)))?;

        self.db.put_cf(&cf, order.id().as_bytes(), value)?;

        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<Order>> {
        let cf = self
            .db
            .cf_handle(CF_ORDERS)
            .ok_or_else(|| OrderError::Persistence("Orders column family not found".to_string()))?;

        let mut orders = Vec::new();
        for item in self.db.iterator_cf(&cf, rocksdb::IteratorMode::Start) {
            let (_key, value) = item?;
            let order: Order = serde_json::from_slice(&value).map_err(|e| {
                OrderError::Persistence(format!("Failed to deserialize order: {}", e))
            })?;
            orders.push(order);
        }

        Ok(orders)
    }
}
