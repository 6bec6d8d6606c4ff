use crate::domain::order::Order;
use crate::domain::ports::{MessageChannel, OrderRepository};
use crate::error::{OrderError, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::{Mutex, RwLock};

/// A thread-safe in-memory order repository.
///
/// Uses `Arc<RwLock<HashMap<String, Order>>>` to allow shared concurrent access.
/// Saving an order whose id already exists replaces it.
#[derive(Default, Clone)]
pub struct InMemoryOrderRepository {
    orders: Arc<RwLock<HashMap<String, Order>>>,
}

impl InMemoryOrderRepository {
    /// Creates a new, empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.orders.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.orders.read().await.is_empty()
    }
}

#[async_trait]
impl OrderRepository for InMemoryOrderRepository {
    async fn save(&self, order: &Order) -> Result<()> {
        let mut orders = self.orders.write().await;
        orders.insert(order.id().to_string(), order.clone());
        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<Order>> {
        let orders = self.orders.read().await;
        Ok(orders.values().cloned().collect())
    }
}

/// A message captured by [`InMemoryChannel`].
#[derive(Debug, Clone, PartialEq)]
pub struct PublishedMessage {
    pub exchange: String,
    pub routing_key: String,
    pub payload: Vec<u8>,
}

/// An in-process message channel.
///
/// Keeps every published message in publish order. Once closed, every
/// publish fails, the way a dropped broker channel would.
#[derive(Default)]
pub struct InMemoryChannel {
    messages: Mutex<Vec<PublishedMessage>>,
    closed: AtomicBool,
}

impl InMemoryChannel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn close(&self) {
        self.closed.store(true, Ordering::SeqCst);
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }

    pub async fn messages(&self) -> Vec<PublishedMessage> {
        self.messages.lock().await.clone()
    }
}

#[async_trait]
impl MessageChannel for InMemoryChannel {
    async fn publish(&self, exchange: &str, routing_key: &str, payload: Vec<u8>) -> Result<()> {
        if self.is_closed() {
            return Err(OrderError::Publish("channel closed".to_string()));
        }

        let mut messages = self.messages.lock().await;
        messages.push(PublishedMessage {
            exchange: exchange.to_string(),
            routing_key: routing_key.to_string(),
            payload,
        });
        Ok(())
    }
}
