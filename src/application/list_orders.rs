use super::dto::{ListOrdersOutputDto, OrderOutputDto};
use crate::domain::ports::OrderRepositoryBox;
use crate::error::Result;

pub struct ListOrdersUseCase {
    repository: OrderRepositoryBox,
}

impl ListOrdersUseCase {
    pub fn new(repository: OrderRepositoryBox) -> Self {
        Self { repository }
    }

    /// Returns every stored order. Empty storage yields an empty list.
    pub async fn execute(&self) -> Result<ListOrdersOutputDto> {
        let orders = self.repository.find_all().await?;
        tracing::debug!(count = orders.len(), "Listed orders");

        Ok(ListOrdersOutputDto {
            orders: orders.iter().map(OrderOutputDto::from).collect(),
        })
    }
}
