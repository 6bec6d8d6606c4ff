use crate::domain::ports::MessageChannel;
use crate::error::{OrderError, Result};
use async_trait::async_trait;
use rdkafka::config::ClientConfig;
use rdkafka::producer::{FutureProducer, FutureRecord};
use rdkafka::util::Timeout;
use std::time::Duration;

const SEND_TIMEOUT: Duration = Duration::from_secs(5);

/// Topic used when no exchange is configured.
pub const DEFAULT_TOPIC: &str = "orders";

/// Message channel backed by a Kafka-compatible broker.
///
/// Kafka has no exchanges: the exchange is used as the topic and the
/// routing key as the record key.
/// `FutureProducer` is safe to share between concurrent publishers.
pub struct KafkaChannel {
    producer: FutureProducer,
}

impl KafkaChannel {
    pub fn connect(brokers: &str) -> Result<Self> {
        let producer: FutureProducer = ClientConfig::new()
            .set("bootstrap.servers", brokers)
            .set("message.timeout.ms", "5000")
            .create()
            .map_err(|e| OrderError::Publish(format!("Failed to create producer: {}", e)))?;

        Ok(Self { producer })
    }
}

#[async_trait]
impl MessageChannel for KafkaChannel {
    async fn publish(&self, exchange: &str, routing_key: &str, payload: Vec<u8>) -> Result<()> {
        let record = FutureRecord::to(exchange).key(routing_key).payload(&payload);

        self.producer
            .send(record, Timeout::After(SEND_TIMEOUT))
            .await
            .map_err(|(e, _)| OrderError::Publish(format!("Kafka send error: {}", e)))?;

        tracing::debug!(topic = %exchange, key = %routing_key, "Published to broker");
        Ok(())
    }
}
