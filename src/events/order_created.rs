use super::dispatcher::EventHandler;
use crate::domain::events::Event;
use crate::domain::ports::MessageChannelRef;
use crate::error::{OrderError, Result};
use async_trait::async_trait;

pub const DEFAULT_EXCHANGE: &str = "amq.direct";
pub const DEFAULT_ROUTING_KEY: &str = "order.created";

/// Publishes every created order on the outbound message channel.
///
/// The order is encoded as JSON and sent under a fixed exchange and routing
/// key. Publish failures are returned to the dispatcher as-is.
pub struct OrderCreatedNotifier {
    channel: MessageChannelRef,
    exchange: String,
    routing_key: String,
}

impl OrderCreatedNotifier {
    pub fn new(channel: MessageChannelRef) -> Self {
        Self::with_routing(channel, DEFAULT_EXCHANGE, DEFAULT_ROUTING_KEY)
    }

    pub fn with_routing(
        channel: MessageChannelRef,
        exchange: impl Into<String>,
        routing_key: impl Into<String>,
    ) -> Self {
        Self {
            channel,
            exchange: exchange.into(),
            routing_key: routing_key.into(),
        }
    }
}

#[async_trait]
impl EventHandler for OrderCreatedNotifier {
    fn name(&self) -> &str {
        "OrderCreatedNotifier"
    }

    async fn handle(&self, event: &Event) -> Result<()> {
        let order = event.order().ok_or_else(|| {
            OrderError::Publish(format!("Event '{}' does not carry an order", event.name()))
        })?;

        let payload = serde_json::to_vec(order)
            .map_err(|e| OrderError::Publish(format!("Failed to encode order: {}", e)))?;

        self.channel
            .publish(&self.exchange, &self.routing_key, payload)
            .await?;

        tracing::info!(
            order_id = %order.id(),
            exchange = %self.exchange,
            routing_key = %self.routing_key,
            "Published order created notification"
        );
        Ok(())
    }
}
