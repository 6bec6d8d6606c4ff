use crate::application::dto::OrderOutputDto;
use crate::error::Result;
use std::io::Write;

/// Writes order views as CSV rows (`id,price,tax,final_price`).
pub struct OrderWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> OrderWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    /// Writes the header followed by one row per order, then flushes.
    pub fn write_orders<'a, I>(&mut self, orders: I) -> Result<()>
    where
        I: IntoIterator<Item = &'a OrderOutputDto>,
    {
        self.writer
            .write_record(["id", "price", "tax", "final_price"])?;
        for order in orders {
            self.writer.write_record(&[
                order.id.clone(),
                order.price.to_string(),
                order.tax.to_string(),
                order.final_price.to_string(),
            ])?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
