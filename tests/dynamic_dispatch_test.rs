use ordersystem::application::create_order::CreateOrderUseCase;
use ordersystem::application::dto::CreateOrderInput;
use ordersystem::application::list_orders::ListOrdersUseCase;
use ordersystem::domain::events::ORDER_CREATED;
use ordersystem::domain::order::Order;
use ordersystem::domain::ports::{MessageChannelRef, OrderRepositoryBox};
use ordersystem::events::dispatcher::EventDispatcher;
use ordersystem::events::order_created::OrderCreatedNotifier;
use ordersystem::infrastructure::in_memory::{InMemoryChannel, InMemoryOrderRepository};
use rust_decimal_macros::dec;
use std::sync::Arc;

#[tokio::test]
async fn test_ports_as_trait_objects() {
    let repository: OrderRepositoryBox = Box::new(InMemoryOrderRepository::new());
    let channel: MessageChannelRef = Arc::new(InMemoryChannel::new());

    // Verify Send + Sync by spawning tasks
    let repo_handle = tokio::spawn(async move {
        let order = Order::new("o1", dec!(100.0), dec!(10.0)).unwrap();
        repository.save(&order).await.unwrap();
        repository.find_all().await.unwrap()
    });

    let channel_handle = tokio::spawn(async move {
        channel
            .publish("amq.direct", "order.created", b"{}".to_vec())
            .await
    });

    let orders = repo_handle.await.unwrap();
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].id(), "o1");

    assert!(channel_handle.await.unwrap().is_ok());
}

#[tokio::test]
async fn test_concurrent_order_creation() {
    let repo = InMemoryOrderRepository::new();
    let channel = Arc::new(InMemoryChannel::new());
    let mut dispatcher = EventDispatcher::new();
    dispatcher
        .register(ORDER_CREATED, Arc::new(OrderCreatedNotifier::new(channel.clone())))
        .unwrap();

    let create = Arc::new(CreateOrderUseCase::new(
        Box::new(repo.clone()),
        Arc::new(dispatcher),
    ));

    let mut handles = Vec::new();
    for i in 1..=100 {
        let create = create.clone();
        handles.push(tokio::spawn(async move {
            create
                .execute(CreateOrderInput {
                    id: format!("order-{i}"),
                    price: dec!(1.10),
                    tax: dec!(0.11),
                })
                .await
        }));
    }
    for handle in handles {
        let output = handle.await.unwrap().unwrap();
        assert!(!output.has_warnings());
    }

    let listed = ListOrdersUseCase::new(Box::new(repo))
        .execute()
        .await
        .unwrap();
    assert_eq!(listed.orders.len(), 100);
    assert!(listed.orders.iter().all(|o| o.final_price == dec!(1.21)));
    assert_eq!(channel.messages().await.len(), 100);
}
