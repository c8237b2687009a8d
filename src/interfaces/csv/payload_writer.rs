use crate::domain::pix::format_amount;
use crate::error::Result;
use rust_decimal::Decimal;
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Serialize)]
struct PayloadRecord<'a> {
    organization_id: &'a str,
    amount: String,
    payload: &'a str,
}

/// Writes generated payloads as CSV (`organization_id,amount,payload`).
pub struct PayloadWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> PayloadWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write(&mut self, organization_id: &str, amount: Decimal, payload: &str) -> Result<()> {
        self.writer.serialize(PayloadRecord {
            organization_id,
            amount: format_amount(amount)?,
            payload,
        })?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
