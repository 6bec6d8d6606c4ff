use crate::application::dto::CreateOrderInput;
use crate::error::{OrderError, Result};
use std::io::Read;

/// Reads order creation requests from a CSV source with an `id,price,tax` header.
///
/// This reader wraps `csv::Reader` and provides an iterator over `Result<CreateOrderInput>`.
/// It handles whitespace trimming and flexible record lengths automatically.
pub struct OrderReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> OrderReader<R> {
    /// Creates a new `OrderReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and deserializes rows.
    pub fn orders(self) -> impl Iterator<Item = Result<CreateOrderInput>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(OrderError::from))
    }
}
