use super::order::Order;
use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// Persistence capability consumed by the use cases.
///
/// `find_all` returns every saved order in no particular order.
#[async_trait]
pub trait OrderRepository: Send + Sync {
    async fn save(&self, order: &Order) -> Result<()>;
    async fn find_all(&self) -> Result<Vec<Order>>;
}

/// Outbound publish capability towards a message broker.
///
/// Implementations must accept concurrent publishers.
#[async_trait]
pub trait MessageChannel: Send + Sync {
    async fn publish(&self, exchange: &str, routing_key: &str, payload: Vec<u8>) -> Result<()>;
}

pub type OrderRepositoryBox = Box<dyn OrderRepository>;
pub type MessageChannelRef = Arc<dyn MessageChannel>;
