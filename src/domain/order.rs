use crate::error::{OrderError, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A non-negative monetary value.
///
/// Wraps `rust_decimal::Decimal` so that prices and taxes are summed exactly,
/// without binary floating point rounding.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(value: Decimal) -> Result<Self> {
        if value.is_sign_negative() && !value.is_zero() {
            Err(OrderError::Validation(format!(
                "Amount must not be negative, got {value}"
            )))
        } else {
            Ok(Self(value))
        }
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Sum of two amounts, `None` when it does not fit in a `Decimal`.
    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.0.checked_add(rhs.0).map(Self)
    }
}

impl TryFrom<Decimal> for Money {
    type Error = OrderError;

    fn try_from(value: Decimal) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Money> for Decimal {
    fn from(money: Money) -> Self {
        money.0
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Serialized shape of an [`Order`].
///
/// `final_price` is written for consumers of the JSON but ignored when
/// reading; it is always recomputed from `price + tax`.
#[derive(Serialize, Deserialize)]
struct OrderRecord {
    id: String,
    price: Decimal,
    tax: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    final_price: Option<Decimal>,
}

/// An order as seen by the use cases.
///
/// The identifier is supplied by the caller. Fields are immutable after
/// construction and `final_price` is derived from `price + tax` on every
/// call, so the two can never disagree.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
#[serde(try_from = "OrderRecord", into = "OrderRecord")]
pub struct Order {
    id: String,
    price: Money,
    tax: Money,
}

impl Order {
    /// Builds a validated order.
    ///
    /// Fails with `OrderError::Validation` for a blank id, a negative price
    /// or tax, or a price and tax whose sum overflows.
    pub fn new(id: impl Into<String>, price: Decimal, tax: Decimal) -> Result<Self> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(OrderError::Validation(
                "Order id must not be empty".to_string(),
            ));
        }

        let price = Money::new(price)
            .map_err(|_| OrderError::Validation(format!("Invalid price {price}")))?;
        let tax =
            Money::new(tax).map_err(|_| OrderError::Validation(format!("Invalid tax {tax}")))?;

        if price.checked_add(tax).is_none() {
            return Err(OrderError::Validation("price + tax overflows".to_string()));
        }

        Ok(Self { id, price, tax })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn price(&self) -> Money {
        self.price
    }

    pub fn tax(&self) -> Money {
        self.tax
    }

    pub fn final_price(&self) -> Money {
        // `new` rejects sums that overflow, so this never saturates.
        Money(self.price.0.saturating_add(self.tax.0))
    }
}

impl TryFrom<OrderRecord> for Order {
    type Error = OrderError;

    fn try_from(record: OrderRecord) -> Result<Self> {
        Self::new(record.id, record.price, record.tax)
    }
}

impl From<Order> for OrderRecord {
    fn from(order: Order) -> Self {
        let final_price = Some(order.final_price().value());
        Self {
            id: order.id,
            price: order.price.value(),
            tax: order.tax.value(),
            final_price,
        }
    }
}
