use super::order::Order;
use chrono::{DateTime, Utc};

/// Name under which order creation is announced.
pub const ORDER_CREATED: &str = "OrderCreated";

/// Payload carried by an [`Event`].
#[derive(Debug, Clone, PartialEq)]
pub enum EventPayload {
    Order(Order),
    Json(serde_json::Value),
}

/// A named, timestamped fact. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    name: String,
    occurred_at: DateTime<Utc>,
    payload: EventPayload,
}

impl Event {
    pub fn new(name: impl Into<String>, payload: EventPayload) -> Self {
        Self {
            name: name.into(),
            occurred_at: Utc::now(),
            payload,
        }
    }

    pub fn order_created(order: Order) -> Self {
        Self::new(ORDER_CREATED, EventPayload::Order(order))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }

    pub fn payload(&self) -> &EventPayload {
        &self.payload
    }

    pub fn order(&self) -> Option<&Order> {
        match &self.payload {
            EventPayload::Order(order) => Some(order),
            EventPayload::Json(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_order_created_event() {
        let before = Utc::now();
        let order = Order::new("o1", dec!(1), dec!(2)).unwrap();
        let event = Event::order_created(order.clone());

        assert_eq!(event.name(), ORDER_CREATED);
        assert_eq!(event.order(), Some(&order));
        assert!(event.occurred_at() >= before);
    }

    #[test]
    fn test_json_payload_has_no_order() {
        let event = Event::new("Ping", EventPayload::Json(serde_json::json!({"n": 1})));
        assert!(event.order().is_none());
    }
}
