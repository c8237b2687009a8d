use crate::domain::merchant::Merchant;
use crate::domain::ports::MerchantStore;
use crate::error::{PixError, Result};
use std::io::Read;
use tracing::warn;

/// Reads merchant records (`organization_id,name,pix_key,city`) from CSV.
pub struct MerchantReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> MerchantReader<R> {
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    pub fn merchants(self) -> impl Iterator<Item = Result<Merchant>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(PixError::from))
    }

    /// Loads every readable record into `store`, skipping malformed rows.
    ///
    /// Returns the number of merchants stored.
    pub async fn load_into(self, store: &dyn MerchantStore) -> Result<usize> {
        let mut loaded = 0;
        for merchant in self.merchants() {
            match merchant {
                Ok(merchant) => {
                    store.store(merchant).await?;
                    loaded += 1;
                }
                Err(e) => warn!("Error reading merchant: {e}"),
            }
        }
        Ok(loaded)
    }
}
