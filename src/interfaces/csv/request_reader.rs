use crate::application::service::PixRequest;
use crate::error::{PixError, Result};
use std::io::Read;

/// Streams charge requests (`organization_id,amount`) from CSV.
pub struct RequestReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> RequestReader<R> {
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Lazily deserializes requests so large files never sit in memory.
    pub fn requests(self) -> impl Iterator<Item = Result<PixRequest>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(PixError::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_reader_valid_stream() {
        let data = "organization_id, amount\norg-1, 25.5\norg-2, 10";
        let reader = RequestReader::new(data.as_bytes());
        let results: Vec<Result<PixRequest>> = reader.requests().collect();

        assert_eq!(results.len(), 2);
        let first = results[0].as_ref().unwrap();
        assert_eq!(first.organization_id, "org-1");
        assert_eq!(first.amount, Some(dec!(25.5)));
    }

    #[test]
    fn test_reader_empty_amount_is_none() {
        let data = "organization_id, amount\norg-1, ";
        let reader = RequestReader::new(data.as_bytes());
        let request = reader.requests().next().unwrap().unwrap();
        assert_eq!(request.amount, None);
    }

    #[test]
    fn test_reader_malformed_amount() {
        let data = "organization_id, amount\norg-1, ten";
        let reader = RequestReader::new(data.as_bytes());
        let results: Vec<Result<PixRequest>> = reader.requests().collect();

        assert!(results[0].is_err());
    }
}
