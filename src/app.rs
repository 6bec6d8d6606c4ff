//! Wiring of repositories, channels, the dispatcher and the use cases.

use crate::application::create_order::CreateOrderUseCase;
use crate::application::list_orders::ListOrdersUseCase;
use crate::config::Config;
use crate::domain::events::ORDER_CREATED;
use crate::domain::ports::{MessageChannelRef, OrderRepository};
use crate::error::Result;
use crate::events::dispatcher::EventDispatcher;
use crate::events::order_created::{DEFAULT_EXCHANGE, OrderCreatedNotifier};
use crate::infrastructure::in_memory::{InMemoryChannel, InMemoryOrderRepository};
use std::sync::Arc;

/// The use cases every front-end calls into, sharing one repository and
/// one dispatcher.
pub struct App {
    pub create_order: CreateOrderUseCase,
    pub list_orders: ListOrdersUseCase,
}

impl App {
    /// Builds the use cases around an already-open repository and channel.
    ///
    /// The dispatcher is populated here, before any request can reach it,
    /// and is read-only afterwards. Without a configured exchange the
    /// notifier publishes to `amq.direct`.
    pub fn new<R>(repository: R, channel: MessageChannelRef, config: &Config) -> Result<Self>
    where
        R: OrderRepository + Clone + 'static,
    {
        let mut dispatcher = EventDispatcher::new();
        dispatcher.register(
            ORDER_CREATED,
            Arc::new(OrderCreatedNotifier::with_routing(
                channel,
                config.exchange_or(DEFAULT_EXCHANGE),
                config.routing_key.clone(),
            )),
        )?;
        let dispatcher = Arc::new(dispatcher);

        Ok(Self {
            create_order: CreateOrderUseCase::new(Box::new(repository.clone()), dispatcher),
            list_orders: ListOrdersUseCase::new(Box::new(repository)),
        })
    }

    /// Opens the backends selected by `config` and wires them.
    ///
    /// An unset exchange resolves to the default of the channel actually
    /// opened, so a broker fallback keeps the in-process default.
    pub fn from_config(config: &Config) -> Result<Self> {
        let (channel, default_exchange) = open_channel(config)?;
        let config = Config {
            exchange: Some(config.exchange_or(default_exchange).to_string()),
            ..config.clone()
        };

        match &config.db_path {
            Some(path) => open_persistent(path, channel, &config),
            None => Self::new(InMemoryOrderRepository::new(), channel, &config),
        }
    }
}

#[cfg(feature = "storage-rocksdb")]
fn open_persistent(
    path: &std::path::Path,
    channel: MessageChannelRef,
    config: &Config,
) -> Result<App> {
    let repository = crate::infrastructure::rocksdb::RocksDbOrderRepository::open(path)?;
    tracing::debug!(path = %path.display(), "Opened RocksDB order repository");
    App::new(repository, channel, config)
}

#[cfg(not(feature = "storage-rocksdb"))]
fn open_persistent(
    _path: &std::path::Path,
    channel: MessageChannelRef,
    config: &Config,
) -> Result<App> {
    tracing::warn!(
        "Persistent storage requested via --db-path, but 'storage-rocksdb' feature is not enabled. Falling back to In-Memory storage."
    );
    App::new(InMemoryOrderRepository::new(), channel, config)
}

/// Opens the outbound channel along with its default exchange.
fn open_channel(config: &Config) -> Result<(MessageChannelRef, &'static str)> {
    match &config.brokers {
        Some(brokers) => open_broker(brokers),
        None => {
            tracing::debug!("No broker configured, order notifications stay in-process");
            Ok((Arc::new(InMemoryChannel::new()), DEFAULT_EXCHANGE))
        }
    }
}

#[cfg(feature = "broker-kafka")]
fn open_broker(brokers: &str) -> Result<(MessageChannelRef, &'static str)> {
    use crate::infrastructure::kafka::{DEFAULT_TOPIC, KafkaChannel};

    let channel = KafkaChannel::connect(brokers)?;
    Ok((Arc::new(channel), DEFAULT_TOPIC))
}

#[cfg(not(feature = "broker-kafka"))]
fn open_broker(_brokers: &str) -> Result<(MessageChannelRef, &'static str)> {
    tracing::warn!(
        "Broker requested via --brokers, but 'broker-kafka' feature is not enabled. Falling back to In-Memory channel."
    );
    Ok((Arc::new(InMemoryChannel::new()), DEFAULT_EXCHANGE))
}
