use super::dto::{CreateOrderInput, OrderOutputDto};
use crate::domain::events::Event;
use crate::domain::order::Order;
use crate::domain::ports::OrderRepositoryBox;
use crate::error::Result;
use crate::events::dispatcher::{DispatchReport, EventDispatcher};
use std::sync::Arc;

/// Result of a successful creation.
///
/// `dispatch` holds the per-handler notification outcomes. A failed
/// notification never turns a saved order into an error.
#[derive(Debug)]
pub struct CreateOrderOutput {
    pub order: OrderOutputDto,
    pub dispatch: DispatchReport,
}

impl CreateOrderOutput {
    pub fn has_warnings(&self) -> bool {
        !self.dispatch.is_success()
    }
}

/// Validates, persists and announces new orders.
pub struct CreateOrderUseCase {
    repository: OrderRepositoryBox,
    dispatcher: Arc<EventDispatcher>,
}

impl CreateOrderUseCase {
    pub fn new(repository: OrderRepositoryBox, dispatcher: Arc<EventDispatcher>) -> Self {
        Self {
            repository,
            dispatcher,
        }
    }

    /// Creates an order.
    ///
    /// Invalid input fails with `OrderError::Validation` before any side
    /// effect. A repository failure is returned before anything is
    /// dispatched. Only a saved order is announced as `OrderCreated`.
    pub async fn execute(&self, input: CreateOrderInput) -> Result<CreateOrderOutput> {
        let order = Order::new(input.id, input.price, input.tax)?;

        self.repository.save(&order).await?;
        tracing::info!(
            order_id = %order.id(),
            final_price = %order.final_price(),
            "Order created"
        );

        let output = OrderOutputDto::from(&order);
        let dispatch = self.dispatcher.dispatch(&Event::order_created(order)).await;
        if !dispatch.is_success() {
            tracing::warn!(
                order_id = %output.id,
                failed_handlers = dispatch.failures().count(),
                "Order saved but notification failed"
            );
        }

        Ok(CreateOrderOutput {
            order: output,
            dispatch,
        })
    }
}
