use crate::events::order_created::DEFAULT_ROUTING_KEY;
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Create and list orders", long_about = None)]
pub struct Cli {
    /// Path to persistent database (optional). If provided, uses RocksDB.
    #[arg(long, env = "ORDERS_DB_PATH", global = true)]
    pub db_path: Option<PathBuf>,

    /// Broker bootstrap servers (optional). If provided, publishes to Kafka.
    #[arg(long, env = "ORDERS_BROKERS", global = true)]
    pub brokers: Option<String>,

    /// Exchange order notifications are published to. On Kafka this is the
    /// topic. Defaults to `amq.direct` in-process and `orders` on Kafka.
    #[arg(long, env = "ORDERS_EXCHANGE", global = true)]
    pub exchange: Option<String>,

    /// Routing key attached to order notifications.
    #[arg(long, env = "ORDERS_ROUTING_KEY", default_value = DEFAULT_ROUTING_KEY, global = true)]
    pub routing_key: String,

    /// Enable debug logging.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a single order and print it as JSON
    Create {
        #[arg(long)]
        id: String,
        #[arg(long, allow_negative_numbers = true)]
        price: Decimal,
        #[arg(long, allow_negative_numbers = true)]
        tax: Decimal,
    },
    /// Print every stored order as CSV
    List,
    /// Create orders from an `id,price,tax` CSV file, then print every stored order
    Import {
        input: PathBuf,
    },
}

/// Settings used to wire the backends, independent of how they were parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub db_path: Option<PathBuf>,
    pub brokers: Option<String>,
    /// `None` lets the selected channel pick its own default.
    pub exchange: Option<String>,
    pub routing_key: String,
    pub verbose: bool,
}

impl Config {
    /// The configured exchange, or `default` when none was given.
    pub fn exchange_or<'a>(&'a self, default: &'a str) -> &'a str {
        self.exchange.as_deref().unwrap_or(default)
    }
}

impl From<&Cli> for Config {
    fn from(cli: &Cli) -> Self {
        Self {
            db_path: cli.db_path.clone(),
            brokers: cli.brokers.clone(),
            exchange: cli.exchange.clone(),
            routing_key: cli.routing_key.clone(),
            verbose: cli.verbose,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            db_path: None,
            brokers: None,
            exchange: None,
            routing_key: DEFAULT_ROUTING_KEY.to_string(),
            verbose: false,
        }
    }
}
