#![allow(dead_code)]

use async_trait::async_trait;
use ordersystem::domain::events::Event;
use ordersystem::domain::order::Order;
use ordersystem::domain::ports::OrderRepository;
use ordersystem::error::{OrderError, Result};
use ordersystem::events::dispatcher::EventHandler;
use rand::Rng;
use std::fs::File;
use std::io::Error;
use std::path::Path;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Counts invocations and records the ids of the orders it saw.
#[derive(Default)]
pub struct CountingHandler {
    calls: AtomicUsize,
    seen: Mutex<Vec<String>>,
}

impl CountingHandler {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn seen(&self) -> Vec<String> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl EventHandler for CountingHandler {
    async fn handle(&self, event: &Event) -> Result<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(order) = event.order() {
            self.seen.lock().unwrap().push(order.id().to_string());
        }
        Ok(())
    }
}

/// Appends its label to a shared log, so tests can check invocation order.
pub struct SequenceHandler {
    pub label: &'static str,
    pub log: std::sync::Arc<Mutex<Vec<&'static str>>>,
}

#[async_trait]
impl EventHandler for SequenceHandler {
    fn name(&self) -> &str {
        self.label
    }

    async fn handle(&self, _event: &Event) -> Result<()> {
        self.log.lock().unwrap().push(self.label);
        Ok(())
    }
}

/// A repository whose storage is always unavailable.
#[derive(Clone, Default)]
pub struct UnavailableRepository;

#[async_trait]
impl OrderRepository for UnavailableRepository {
    async fn save(&self, _order: &Order) -> Result<()> {
        Err(OrderError::Persistence("database unavailable".to_string()))
    }

    async fn find_all(&self) -> Result<Vec<Order>> {
        Err(OrderError::Persistence("database unavailable".to_string()))
    }
}

/// Writes an `id,price,tax` CSV with random two-decimal amounts.
pub fn generate_orders_csv(path: &Path, rows: usize) -> std::result::Result<(), Error> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);
    let mut rng = rand::thread_rng();

    wtr.write_record(["id", "price", "tax"])?;

    for i in 1..=rows {
        let price_cents: u32 = rng.gen_range(0..1_000_000);
        let tax_cents: u32 = rng.gen_range(0..100_000);
        wtr.write_record([
            format!("order-{:06}", i),
            format!("{}.{:02}", price_cents / 100, price_cents % 100),
            format!("{}.{:02}", tax_cents / 100, tax_cents % 100),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
