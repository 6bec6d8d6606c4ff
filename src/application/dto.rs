use crate::domain::order::Order;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Plain input values accepted by the create-order use case.
///
/// Amounts are parsed from their text form, so CSV fields keep their exact
/// digits instead of passing through `f64`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateOrderInput {
    pub id: String,
    #[serde(deserialize_with = "deserialize_decimal")]
    pub price: Decimal,
    #[serde(deserialize_with = "deserialize_decimal")]
    pub tax: Decimal,
}

fn deserialize_decimal<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Decimal::from_str(&raw)
        .or_else(|_| Decimal::from_scientific(&raw))
        .map_err(serde::de::Error::custom)
}

/// Order view handed back to transport adapters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderOutputDto {
    pub id: String,
    pub price: Decimal,
    pub tax: Decimal,
    pub final_price: Decimal,
}

impl From<&Order> for OrderOutputDto {
    fn from(order: &Order) -> Self {
        Self {
            id: order.id().to_string(),
            price: order.price().value(),
            tax: order.tax().value(),
            final_price: order.final_price().value(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ListOrdersOutputDto {
    pub orders: Vec<OrderOutputDto>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_input_keeps_exact_digits() {
        let input: CreateOrderInput =
            serde_json::from_str(r#"{"id":"o1","price":"100.50","tax":"0.0001"}"#).unwrap();
        assert_eq!(input.price.to_string(), "100.50");
        assert_eq!(input.tax, dec!(0.0001));
    }

    #[test]
    fn test_input_rejects_non_decimal() {
        let result: Result<CreateOrderInput, _> =
            serde_json::from_str(r#"{"id":"o1","price":"abc","tax":"1"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_output_from_order() {
        let order = Order::new("o1", dec!(100.50), dec!(10.05)).unwrap();
        let dto = OrderOutputDto::from(&order);
        assert_eq!(dto.id, "o1");
        assert_eq!(dto.final_price, dec!(110.55));
    }
}
